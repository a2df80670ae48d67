//! Unit tests for st-core primitives.

#[cfg(test)]
mod ids {
    use crate::{StationId, TrainId};

    #[test]
    fn index_roundtrip() {
        let id = TrainId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TrainId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn station_prev_stops_at_line_start() {
        assert_eq!(StationId(3).prev(), Some(StationId(2)));
        assert_eq!(StationId(0).prev(), None);
    }

    #[test]
    fn display() {
        assert_eq!(StationId(7).to_string(), "StationId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::SimTime;

    #[test]
    fn arithmetic() {
        let t = SimTime::hm(5, 5);
        assert_eq!(t.0, 305);
        assert_eq!(t + 10, SimTime::hm(5, 15));
        assert_eq!(t - 10, SimTime::hm(4, 55));
        assert_eq!(SimTime(3) - 10, SimTime::MIDNIGHT);
        assert_eq!(SimTime::hm(6, 0).since(t), 55);
        assert_eq!(t.since(SimTime::hm(6, 0)), 0);
    }

    #[test]
    fn display_is_hh_mm() {
        assert_eq!(SimTime::hm(5, 5).to_string(), "05:05");
        assert_eq!(SimTime::hm(23, 59).to_string(), "23:59");
        // Single-day horizon: no wrap.
        assert_eq!(SimTime::hm(24, 10).to_string(), "24:10");
    }

    #[test]
    fn parse_valid() {
        assert_eq!("08:51".parse::<SimTime>().unwrap(), SimTime::hm(8, 51));
        assert_eq!(" 6:20 ".parse::<SimTime>().unwrap(), SimTime::hm(6, 20));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("0851".parse::<SimTime>().is_err());
        assert!("08:60".parse::<SimTime>().is_err());
        assert!("08:5".parse::<SimTime>().is_err());
        assert!("ab:cd".parse::<SimTime>().is_err());
    }

    #[test]
    fn parse_rejects_out_of_range_hours() {
        let err = "99999999:00".parse::<SimTime>().unwrap_err();
        assert!(matches!(err, crate::StError::Parse(ref m) if m.contains("out of range")), "{err}");
        assert!("99999999999:00".parse::<SimTime>().is_err());
        // A large hour that still fits parses.
        let max_h = u32::MAX / 60 - 1;
        assert_eq!(format!("{max_h}:59").parse::<SimTime>().unwrap(), SimTime::hm(max_h, 59));
    }

    #[test]
    fn checked_hm_and_saturating_add() {
        assert_eq!(SimTime::checked_hm(8, 51), Some(SimTime::hm(8, 51)));
        assert_eq!(SimTime::checked_hm(u32::MAX / 60 + 1, 0), None);
        assert_eq!(SimTime::checked_hm(u32::MAX / 60, 59), None);
        assert_eq!(SimTime(u32::MAX - 1) + 10, SimTime(u32::MAX));
    }

    #[test]
    fn display_parse_agree() {
        let t = SimTime::hm(13, 7);
        assert_eq!(t.to_string().parse::<SimTime>().unwrap(), t);
    }
}

#[cfg(test)]
mod class {
    use crate::{ByClass, TrainClass};

    #[test]
    fn default_is_normal() {
        assert_eq!(TrainClass::default(), TrainClass::Normal);
        assert!(!TrainClass::Normal.is_express());
        assert!(TrainClass::Express.is_express());
    }

    #[test]
    fn parse_labels() {
        assert_eq!("express".parse::<TrainClass>().unwrap(), TrainClass::Express);
        assert_eq!("Normal".parse::<TrainClass>().unwrap(), TrainClass::Normal);
        assert!("freight".parse::<TrainClass>().is_err());
    }

    #[test]
    fn by_class_selects() {
        let v = ByClass::new(12u32, 17u32);
        assert_eq!(v.get(TrainClass::Express), 12);
        assert_eq!(v.get(TrainClass::Normal), 17);
    }
}

#[cfg(test)]
mod config {
    use crate::DispatchConfig;

    #[test]
    fn defaults() {
        let c = DispatchConfig::default();
        assert_eq!(c.express_max_wait, 5);
        assert_eq!(c.retry_step, 1);
        assert_eq!(c.max_events, 1_000);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_retry_step_rejected() {
        let c = DispatchConfig { retry_step: 0, ..DispatchConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_event_bound_rejected() {
        let c = DispatchConfig { max_events: 0, ..DispatchConfig::default() };
        assert!(c.validate().is_err());
    }
}
