//! # Universal Harmonic Constituent Constants
//!
//! This module holds the station-independent half of the harmonic model: the
//! fixed set of 37 tidal constituents and their angular speeds. These values
//! are astronomical constants: they are identical for every tide station and
//! never change between deployments.
//!
//! ## Constituent Ordering
//!
//! The constituent order here follows the XTide/`Tide_calculator` harmonics
//! files derived from NOAA CO-OPS data, **not** NOAA's website ordering
//! (NOAA lists LDA2 as LAM2 and sorts differently). Every 37-entry array in
//! this crate (amplitudes, phase lags, node factors, equilibrium arguments)
//! is aligned to this order, and [`Constituent`] exists so that pairing is
//! enforced by construction rather than by convention.
//!
//! ## Units
//!
//! - `speed`: degrees per hour (the constituent's angular frequency)
//! - `amplitude`: feet (site-specific, from the station profile)
//! - `kappa`: degrees (site-specific phase lag, "Epoch"/"Phase" on NOAA's site)

/// Number of harmonic constituents in the model.
///
/// Every per-constituent array in this crate has exactly this length; the
/// configuration loader rejects anything else before a prediction can run.
pub const CONSTITUENT_COUNT: usize = 37;

/// Constituent names in table order (index 0..36).
///
/// Matches the NOAA naming except `LDA2`, which NOAA lists as `LAM2`.
pub const CONSTITUENT_NAMES: [&str; CONSTITUENT_COUNT] = [
    "J1", "K1", "K2", "L2", "M1", "M2", "M3", "M4", "M6", "M8",
    "N2", "2N2", "O1", "OO1", "P1", "Q1", "2Q1", "R2", "S1", "S2",
    "S4", "S6", "T2", "LDA2", "MU2", "NU2", "RHO1", "MK3", "2MK3", "MN4",
    "MS4", "2SM2", "MF", "MSF", "MM", "SA", "SSA",
];

/// Angular speed of each constituent in degrees per hour.
///
/// These are universal constants shared by all stations (Hicks 2006 denotes
/// them as little `a`). Site calibration only ever touches amplitude and
/// kappa.
pub const SPEEDS_DEG_PER_HOUR: [f64; CONSTITUENT_COUNT] = [
    15.58544, 15.04107, 30.08214, 29.52848, 14.49669, 28.9841, 43.47616, 57.96821, 86.95231, 115.9364,
    28.43973, 27.89535, 13.94304, 16.1391, 14.95893, 13.39866, 12.85429, 30.04107, 15.0, 30.0,
    60.0, 90.0, 29.95893, 29.45563, 27.96821, 28.51258, 13.47151, 44.02517, 42.92714, 57.42383,
    58.9841, 31.0159, 1.098033, 1.015896, 0.5443747, 0.0410686, 0.0821373,
];

/// One fully-paired harmonic constituent: universal speed plus the station's
/// calibrated amplitude and phase lag, all at the same table index.
///
/// Built via [`constituents_for`] so the speed/amplitude/kappa pairing is
/// structural; there is no way to hold an amplitude from one index next to a
/// speed from another.
#[derive(Debug, Clone, Copy)]
pub struct Constituent {
    /// Constituent name (e.g. "M2").
    pub name: &'static str,
    /// Angular speed in degrees per hour.
    pub speed_deg_per_hour: f64,
    /// Station amplitude in feet.
    pub amplitude_ft: f64,
    /// Station phase lag (Epoch) in degrees.
    pub kappa_deg: f64,
}

/// Zip the universal speed table with a station's amplitude/kappa arrays into
/// a single array-of-structs, aligned by constituent index.
pub fn constituents_for(
    amplitudes_ft: &[f64; CONSTITUENT_COUNT],
    kappas_deg: &[f64; CONSTITUENT_COUNT],
) -> [Constituent; CONSTITUENT_COUNT] {
    core::array::from_fn(|i| Constituent {
        name: CONSTITUENT_NAMES[i],
        speed_deg_per_hour: SPEEDS_DEG_PER_HOUR[i],
        amplitude_ft: amplitudes_ft[i],
        kappa_deg: kappas_deg[i],
    })
}
