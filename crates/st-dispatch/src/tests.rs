//! Unit tests for st-dispatch.

use st_core::{DispatchConfig, SimTime, StationId, TrainClass, TrainId};
use st_line::{Line, LineBuilder, Segment};

use crate::{
    ConflictResolver, Decision, Occupancy, Presence, Reservation, Train, TrainStore, WaitReason,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const A: StationId = StationId(0);
const B: StationId = StationId(1);
const C: StationId = StationId(2);
const D: StationId = StationId(3);

/// A–B–C–D: express 10 min per segment, normal 14, no dwell.
fn line() -> Line {
    line_with_normal(&[14, 14, 14, 0])
}

fn line_with_normal(normal: &[u32]) -> Line {
    LineBuilder::from_arrays(&["A", "B", "C", "D"], &[10, 10, 10, 0], normal, &[0; 4], &[0; 4])
        .unwrap()
}

fn train(i: u32, class: TrainClass, route: &[StationId], arrived: u32) -> Train {
    Train::new(TrainId(i), 100 + i, class, route.to_vec(), SimTime(arrived))
}

/// Register every train at its current station, arrival = its scheduled time.
fn world(line: &Line, trains: Vec<Train>) -> (TrainStore, Occupancy) {
    let mut occ = Occupancy::new(line.len());
    for t in &trains {
        if let Some(at) = t.current_station() {
            occ.arrive(at, Presence { train: t.id, arrival: t.time, class: t.class });
        }
    }
    (TrainStore::new(trains), occ)
}

fn decide(line: &Line, trains: &TrainStore, occ: &Occupancy, who: u32, at: u32) -> Decision {
    let config = DispatchConfig::default();
    let resolver = ConflictResolver::new(line, trains, occ, &config);
    resolver.can_proceed(trains.get(TrainId(who)), SimTime(at))
}

// ── Train state ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod train_state {
    use super::*;

    #[test]
    fn position_and_hops() {
        let mut t = train(0, TrainClass::Normal, &[B, C], 0);
        assert_eq!(t.current_station(), Some(B));
        assert_eq!(t.next_station(), Some(C));
        assert!(!t.at_last_station());

        assert_eq!(t.advance().unwrap(), C);
        assert!(t.at_last_station());
        assert_eq!(t.next_station(), None);
        assert!(t.advance().is_err());

        t.finish();
        assert!(t.is_terminal());
        assert_eq!(t.current_station(), None);
        t.finish();
        assert!(t.is_terminal());
    }

    #[test]
    fn amend_touches_only_last_entry() {
        let mut t = train(0, TrainClass::Normal, &[B, C], 0);
        t.amend_departure(SimTime(9)); // empty log: no-op
        t.log_visit(B, SimTime(0), SimTime(0));
        t.log_visit(B, SimTime(1), SimTime(1));
        t.amend_departure(SimTime(7));
        assert_eq!(t.log[0].departure, SimTime(0));
        assert_eq!(t.log[1].departure, SimTime(7));
    }

    #[test]
    fn store_lookup() {
        let store = TrainStore::new(vec![train(0, TrainClass::Normal, &[A], 0)]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(TrainId(0)).number, 100);
    }
}

// ── Occupancy ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod occupancy {
    use super::*;

    #[test]
    fn reserved_until_is_strict() {
        let mut occ = Occupancy::new(4);
        let seg = Segment::new(B, C);
        assert_eq!(occ.reserved_until(seg, SimTime(0)), None);

        occ.reserve(seg, Reservation { release: SimTime(20), class: TrainClass::Normal, train: TrainId(0) });
        assert_eq!(occ.reserved_until(seg, SimTime(15)), Some(SimTime(20)));
        assert_eq!(occ.reserved_until(Segment::new(C, B), SimTime(15)), Some(SimTime(20)));
        assert_eq!(occ.reserved_until(seg, SimTime(20)), None);
        assert_eq!(occ.reserved_until(seg, SimTime(25)), None);
    }

    #[test]
    fn newer_reservation_supersedes() {
        let mut occ = Occupancy::new(4);
        let seg = Segment::new(A, B);
        occ.reserve(seg, Reservation { release: SimTime(20), class: TrainClass::Normal, train: TrainId(0) });
        occ.reserve(seg, Reservation { release: SimTime(45), class: TrainClass::Express, train: TrainId(1) });
        assert_eq!(occ.reserved_until(seg, SimTime(30)), Some(SimTime(45)));
    }

    #[test]
    fn presence_moves() {
        let mut occ = Occupancy::new(4);
        let p = Presence { train: TrainId(2), arrival: SimTime(5), class: TrainClass::Express };
        occ.arrive(A, p);
        assert!(occ.is_present(A, TrainId(2)));
        occ.depart(A, TrainId(2));
        assert!(occ.present_at(A).is_empty());
        // Out-of-range stations read as empty.
        assert!(occ.present_at(StationId(99)).is_empty());
    }
}

// ── Oncoming queue ────────────────────────────────────────────────────────────

#[cfg(test)]
mod opposing_queue {
    use super::*;

    #[test]
    fn detects_head_on_express() {
        let line = line();
        let (trains, occ) = world(&line, vec![
            train(0, TrainClass::Normal, &[B, C, D], 0),
            train(1, TrainClass::Express, &[C, B, A], 0),
            // At C but heading away from B: not in the queue.
            train(2, TrainClass::Normal, &[C, D], 0),
        ]);
        let config = DispatchConfig::default();
        let r = ConflictResolver::new(&line, &trains, &occ, &config);
        let q = r.opposing_queue(trains.get(TrainId(0)), SimTime(30)).unwrap();
        assert_eq!(q.count, 1);
        assert!(q.has_express);
        // Express time C→B applied to the querying train's departure.
        assert_eq!(q.latest, SimTime(40));
    }

    #[test]
    fn latest_of_several() {
        let line = line();
        let (trains, occ) = world(&line, vec![
            train(0, TrainClass::Normal, &[B, C], 0),
            train(1, TrainClass::Express, &[C, B], 0),
            train(2, TrainClass::Normal, &[C, B], 0),
        ]);
        let config = DispatchConfig::default();
        let r = ConflictResolver::new(&line, &trains, &occ, &config);
        let q = r.opposing_queue(trains.get(TrainId(0)), SimTime(0)).unwrap();
        assert_eq!(q.count, 2);
        assert_eq!(q.latest, SimTime(14));
    }

    #[test]
    fn none_when_next_station_clear() {
        let line = line();
        let (trains, occ) = world(&line, vec![train(0, TrainClass::Normal, &[B, C], 0)]);
        let config = DispatchConfig::default();
        let r = ConflictResolver::new(&line, &trains, &occ, &config);
        assert!(r.opposing_queue(trains.get(TrainId(0)), SimTime(0)).is_none());
    }
}

// ── Station-ahead deference ───────────────────────────────────────────────────

#[cfg(test)]
mod control_this_station {
    use super::*;

    fn run(express_arrival: u32, proposed: u32) -> Decision {
        let line = line();
        let (trains, occ) = world(&line, vec![
            train(0, TrainClass::Normal, &[B, C, D], proposed),
            train(1, TrainClass::Express, &[A, B, C, D], 0),
        ]);
        // Put the express at B as if it had just arrived there.
        let mut trains = trains;
        let mut occ = occ;
        occ.depart(A, TrainId(1));
        trains.get_mut(TrainId(1)).position = 1;
        occ.arrive(B, Presence { train: TrainId(1), arrival: SimTime(express_arrival), class: TrainClass::Express });

        let config = DispatchConfig::default();
        let r = ConflictResolver::new(&line, &trains, &occ, &config);
        r.control_this_station(trains.get(TrainId(0)), SimTime(proposed))
    }

    #[test]
    fn gap_beyond_tolerance_defers() {
        // Normal would reach C at 24; express arrived at 10 → gap 14 > 5.
        let d = run(10, 10);
        assert_eq!(d, Decision::Wait { until: SimTime(11), reason: WaitReason::ExpressAtStation });
    }

    #[test]
    fn wait_reaches_express_arrival() {
        // Express logged with a later arrival than the retry step.
        let d = run(9, 2);
        // next arrival 16, gap 7 > 5, wait until max(3, 9).
        assert_eq!(d.time(), SimTime(9));
        assert!(!d.is_go());
    }

    #[test]
    fn gap_within_tolerance_goes() {
        // Normal reaches C at 24; express arrived at 20 → gap 4.
        assert_eq!(run(20, 10), Decision::Go { departure: SimTime(10) });
    }

    #[test]
    fn express_heading_elsewhere_ignored() {
        let line = line();
        let (trains, occ) = world(&line, vec![
            train(0, TrainClass::Normal, &[B, C], 10),
            train(1, TrainClass::Express, &[B, A], 0),
        ]);
        let config = DispatchConfig::default();
        let r = ConflictResolver::new(&line, &trains, &occ, &config);
        assert!(r.control_this_station(trains.get(TrainId(0)), SimTime(10)).is_go());
    }

    #[test]
    fn express_never_deferred() {
        let line = line();
        let (trains, occ) = world(&line, vec![
            train(0, TrainClass::Express, &[B, C], 10),
            train(1, TrainClass::Express, &[B, C], 0),
        ]);
        let config = DispatchConfig::default();
        let r = ConflictResolver::new(&line, &trains, &occ, &config);
        assert_eq!(
            r.control_this_station(trains.get(TrainId(0)), SimTime(10)),
            Decision::Go { departure: SimTime(10) }
        );
    }
}

// ── Backward headway ──────────────────────────────────────────────────────────

#[cfg(test)]
mod control_back {
    use super::*;

    /// Normal at C heading D; express standing at `express_at`.
    fn run(line: &Line, express_at: StationId, express_arrival: u32, proposed: u32) -> Decision {
        let (trains, mut occ) = world(line, vec![train(0, TrainClass::Normal, &[C, D], proposed)]);
        occ.arrive(express_at, Presence { train: TrainId(9), arrival: SimTime(express_arrival), class: TrainClass::Express });
        let config = DispatchConfig::default();
        let r = ConflictResolver::new(line, &trains, &occ, &config);
        r.control_back(trains.get(TrainId(0)), SimTime(proposed))
    }

    #[test]
    fn recent_express_in_window_holds() {
        // Arrival at D would be 44; threshold 39.  Window = [B, A].
        let d = run(&line(), A, 40, 30);
        assert_eq!(d, Decision::Wait { until: SimTime(31), reason: WaitReason::ExpressBehind });
    }

    #[test]
    fn old_express_in_window_passes() {
        assert!(run(&line(), B, 39, 30).is_go());
    }

    #[test]
    fn window_spans_one_segment_of_express_running() {
        // C→D normal is 8 min; one express segment (10) covers it, so the
        // window is just [B] and an express at A is out of range.
        let short = line_with_normal(&[14, 14, 8, 0]);
        assert!(run(&short, A, 100, 30).is_go());
        assert!(!run(&short, B, 100, 30).is_go());
    }

    #[test]
    fn nothing_behind_line_start() {
        let line = line();
        let (trains, occ) = world(&line, vec![train(0, TrainClass::Normal, &[A, B], 0)]);
        let config = DispatchConfig::default();
        let r = ConflictResolver::new(&line, &trains, &occ, &config);
        assert!(r.control_back(trains.get(TrainId(0)), SimTime(0)).is_go());
    }
}

// ── Combined resolver ─────────────────────────────────────────────────────────

#[cfg(test)]
mod can_proceed {
    use super::*;

    fn occupy(occ: &mut Occupancy, seg: Segment, release: u32) {
        occ.reserve(seg, Reservation { release: SimTime(release), class: TrainClass::Normal, train: TrainId(7) });
    }

    #[test]
    fn occupied_segment_binds_express() {
        let line = line();
        let (trains, mut occ) = world(&line, vec![train(0, TrainClass::Express, &[B, C], 0)]);
        occupy(&mut occ, Segment::new(B, C), 20);
        assert_eq!(
            decide(&line, &trains, &occ, 0, 10),
            Decision::Wait { until: SimTime(20), reason: WaitReason::SegmentOccupied }
        );
    }

    #[test]
    fn express_ignores_every_other_rule() {
        let line = line();
        let (trains, occ) = world(&line, vec![
            train(0, TrainClass::Express, &[B, C, D], 10),
            // Oncoming express queued at C.
            train(1, TrainClass::Express, &[C, B], 9),
            // Express just arrived at B heading the same way.
            train(2, TrainClass::Express, &[B, C], 0),
            // Recent express behind at A.
            train(3, TrainClass::Express, &[A, B], 10),
        ]);
        assert_eq!(decide(&line, &trains, &occ, 0, 10), Decision::Go { departure: SimTime(10) });
    }

    #[test]
    fn normal_defers_to_oncoming_express() {
        let line = line();
        let (trains, occ) = world(&line, vec![
            train(0, TrainClass::Normal, &[B, C], 0),
            train(1, TrainClass::Express, &[C, B], 0),
        ]);
        assert_eq!(
            decide(&line, &trains, &occ, 0, 5),
            Decision::Wait { until: SimTime(15), reason: WaitReason::OncomingExpress }
        );
    }

    #[test]
    fn oncoming_normals_only_fall_through() {
        let line = line();
        let (trains, occ) = world(&line, vec![
            train(0, TrainClass::Normal, &[B, C], 0),
            train(1, TrainClass::Normal, &[C, B], 0),
        ]);
        assert_eq!(decide(&line, &trains, &occ, 0, 5), Decision::Go { departure: SimTime(5) });
    }

    #[test]
    fn free_line_goes_unchanged() {
        let line = line();
        let (trains, occ) = world(&line, vec![train(0, TrainClass::Normal, &[A, B, C, D], 0)]);
        assert_eq!(decide(&line, &trains, &occ, 0, 0), Decision::Go { departure: SimTime(0) });
    }

    #[test]
    fn stale_reservation_does_not_block() {
        let line = line();
        let (trains, mut occ) = world(&line, vec![train(0, TrainClass::Normal, &[B, C], 0)]);
        occupy(&mut occ, Segment::new(B, C), 20);
        assert!(decide(&line, &trains, &occ, 0, 20).is_go());
    }

    #[test]
    fn wait_takes_stricter_constraint() {
        let line = line();
        let (mut trains, mut occ) = world(&line, vec![
            train(0, TrainClass::Normal, &[B, C, D], 0),
            // Express standing behind at A, arrived recently.
            train(1, TrainClass::Express, &[A, B], 0),
        ]);
        // Express at B heading C, arrived long before.
        trains.trains.push(train(2, TrainClass::Express, &[B, C], 0));
        occ.arrive(B, Presence { train: TrainId(2), arrival: SimTime(0), class: TrainClass::Express });
        occ.depart(A, TrainId(1));
        occ.arrive(A, Presence { train: TrainId(1), arrival: SimTime(12), class: TrainClass::Express });

        // At station: gap 30+14-0 > 5 → wait until max(31, 0) = 31.
        // Behind: threshold 44-5 = 39, express at A arrived 12 → Go.
        let d = decide(&line, &trains, &occ, 0, 30);
        assert_eq!(d, Decision::Wait { until: SimTime(31), reason: WaitReason::ExpressAtStation });
    }

    #[test]
    fn wait_for_express_behind_keeps_its_reason() {
        let line = line();
        let (trains, occ) = world(&line, vec![
            train(0, TrainClass::Normal, &[C, D], 30),
            // Express at A, arrived after the threshold of 44 - 5.
            train(1, TrainClass::Express, &[A, B], 40),
        ]);
        assert_eq!(
            decide(&line, &trains, &occ, 0, 30),
            Decision::Wait { until: SimTime(31), reason: WaitReason::ExpressBehind }
        );
    }

    #[test]
    fn every_wait_advances_by_retry_step() {
        let line = line();
        let (trains, mut occ) = world(&line, vec![train(0, TrainClass::Normal, &[B, C], 0)]);
        occupy(&mut occ, Segment::new(B, C), 11);
        let config = DispatchConfig { retry_step: 3, ..DispatchConfig::default() };
        let r = ConflictResolver::new(&line, &trains, &occ, &config);
        assert_eq!(r.can_proceed(trains.get(TrainId(0)), SimTime(10)).time(), SimTime(13));
    }

    #[test]
    fn train_at_terminus_has_no_conflict() {
        let line = line();
        let (trains, mut occ) = world(&line, vec![train(0, TrainClass::Normal, &[D], 0)]);
        occupy(&mut occ, Segment::new(C, D), 50);
        assert!(decide(&line, &trains, &occ, 0, 0).is_go());
    }

    #[test]
    fn decision_display() {
        let go = Decision::Go { departure: SimTime::hm(5, 5) };
        let wait = Decision::Wait { until: SimTime::hm(5, 6), reason: WaitReason::ExpressBehind };
        assert_eq!(go.to_string(), "Go at 05:05");
        assert_eq!(wait.to_string(), "Wait until 05:06 (express behind)");
    }
}
