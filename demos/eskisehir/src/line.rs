//! The Eskişehir–Balıkesir single-track line.
//!
//! 32 stations; travel times are per class in minutes from station `i` to
//! `i + 1` (last entry unused), dwell times are per class in minutes.

use st_line::{Line, LineBuilder, LineResult};

pub const STATION_NAMES: [&str; 32] = [
    "ESKİŞEHİR", "KIZILİNLER", "GÖKÇEKISIK", "PORSUK", "S. PINAR", "ULUKÖY", "ALAYUNT", "KÜTAHYA",
    "D.ÖREN", "K.ÖREN", "GÜZELYURT", "KAYI", "TAVŞANLI", "GÖLCÜK", "EMİRLER", "DEMİRLİ",
    "DEĞİRMİSAZ", "BALIKÖY", "ALÖVE", "GÖKÇEDAĞ", "NALLIKAYA", "PRİBEYLER", "SİNDİRLER", "DURSUNBEY",
    "SELİMAĞA", "G. DERE", "DADA", "MEZİTLER", "SARFAKLAR", "NUSRAT", "MAHMUDİYE", "BALIKESİR",
];

const TRAVEL_EXPRESS: [u32; 32] = [
    14, 8, 12, 10, 6, 12, 7, 12, 7, 8, 10, 9, 10, 3, 13, 12,
    16, 15, 7, 14, 7, 21, 14, 12, 10, 13, 15, 12, 8, 11, 19, 0,
];
const TRAVEL_NORMAL: [u32; 32] = [
    16, 10, 17, 15, 11, 16, 11, 24, 12, 9, 11, 7, 15, 3, 21, 17,
    19, 19, 9, 20, 11, 29, 27, 25, 23, 18, 18, 17, 11, 17, 20, 0,
];
const DWELL_EXPRESS: [u32; 32] = [
    0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 3, 0, 0, 0,
    0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];
const DWELL_NORMAL: [u32; 32] = [
    0, 0, 0, 0, 0, 0, 0, 15, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 15, 0, 0, 0, 0, 0, 0, 0, 0,
];

pub fn build_line() -> LineResult<Line> {
    LineBuilder::from_arrays(&STATION_NAMES, &TRAVEL_EXPRESS, &TRAVEL_NORMAL, &DWELL_EXPRESS, &DWELL_NORMAL)
}
