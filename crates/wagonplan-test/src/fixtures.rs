//! Station fixtures.
//!
//! # Example
//!
//! ```
//! use wagonplan_test::fixtures::{mixed_station, uniform_ratio};
//!
//! assert_eq!(mixed_station().front_count(), 7);
//! assert_eq!(uniform_ratio(4).paths().len(), 2);
//! ```

use wagonplan_core::{FrontSpec, Station, StationBuilder};

/// `[(10, 1.0), (5, 2.0)]` on one path.
///
/// `[0, 1]` costs 40 wagon-hours, `[1, 0]` costs 25.
pub fn two_fronts() -> Station {
    StationBuilder::new()
        .path([(10, 1.0), (5, 2.0)])
        .build()
        .expect("valid fixture")
}

/// `[(4, 1.0), (2, 1.0), (6, 3.0)]`, one path per front.
///
/// Ratios are 0.25, 0.5 and 0.5, so the ratio order is `[0, 1, 2]`.
pub fn three_fronts() -> Station {
    Station::separate_paths(vec![
        FrontSpec::new(4, 1.0),
        FrontSpec::new(2, 1.0),
        FrontSpec::new(6, 3.0),
    ])
    .expect("valid fixture")
}

/// Two paths holding two and three fronts (24 grouped candidates).
pub fn two_and_three_paths() -> Station {
    StationBuilder::new()
        .path([(6, 1.0), (3, 2.5)])
        .path([(8, 0.7), (4, 1.8), (10, 2.0)])
        .build()
        .expect("valid fixture")
}

/// Seven fronts on three paths of sizes 3, 2 and 2.
pub fn mixed_station() -> Station {
    StationBuilder::new()
        .path([(12, 1.5), (3, 0.8), (7, 2.2)])
        .path([(9, 0.4), (2, 1.1)])
        .path([(15, 3.0), (5, 0.6)])
        .build()
        .expect("valid fixture")
}

/// `n` fronts sharing the ratio 0.5, two fronts per path.
///
/// All values are exact binary fractions, so every order has exactly the
/// same cost.
pub fn uniform_ratio(n: usize) -> Station {
    let specs: Vec<FrontSpec> = (1..=n as u32)
        .map(|k| FrontSpec::new(k, 0.5 * f64::from(k)))
        .collect();
    let paths = (0..n)
        .collect::<Vec<_>>()
        .chunks(2)
        .map(<[usize]>::to_vec)
        .collect();
    Station::new(specs, paths).expect("valid fixture")
}

/// `n` deterministic fronts on a single path.
pub fn large_station(n: usize) -> Station {
    let specs = (0..n)
        .map(|i| {
            let wagons = 1 + (i * 7 % 13) as u32;
            let time = 0.25 * (1 + i * 5 % 11) as f64;
            FrontSpec::new(wagons, time)
        })
        .collect();
    Station::single_path(specs).expect("valid fixture")
}
