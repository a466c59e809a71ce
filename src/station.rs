//! # Station Profile
//!
//! Per-deployment station configuration: identity, vertical datum, time-zone
//! adjustment, and the station-calibrated amplitude/kappa arrays. A profile is
//! immutable once constructed; swapping stations means swapping the whole
//! bundle atomically, never editing individual fields at runtime.
//!
//! The compiled-in default profile is Dumbarton Highway Bridge in San
//! Francisco Bay (NOAA station 9414509), with harmonic constants originally
//! derived from NOAA CO-OPS data as processed by David Flater for XTide.
//! Predictions from these constants must not be used for navigation; no
//! accuracy warranty is given or implied.

use crate::harmonics::CONSTITUENT_COUNT;

/// Immutable per-deployment station configuration.
///
/// The amplitude and kappa arrays are a matched set calibrated for this one
/// station and must always travel together; they are paired with the
/// universal speed table by index (see [`crate::harmonics::Constituent`]).
#[derive(Debug, Clone)]
pub struct StationProfile {
    /// Human-readable station name.
    pub name: String,
    /// NOAA station identifier (e.g. 9414509).
    pub noaa_id: u32,
    /// Offset between mean sea level and the low-water reference plane
    /// (MLLW), in feet. Every prediction is this value plus the oscillatory
    /// harmonic sum.
    pub datum_ft: f64,
    /// Hours added to the station's local-standard-time convention to reach
    /// the GMT time base the correction tables were fit in. 8 = Pacific
    /// Standard Time. This must match the convention used when the tables
    /// were generated; changing it is a behavioral change, not a tweak.
    pub utc_offset_hours: f64,
    /// Constituent amplitudes in feet, in table order.
    pub amplitudes_ft: [f64; CONSTITUENT_COUNT],
    /// Constituent phase lags (Epoch) in degrees, in table order.
    pub kappas_deg: [f64; CONSTITUENT_COUNT],
}

impl StationProfile {
    /// The compiled-in reference deployment: Dumbarton Highway Bridge,
    /// San Francisco Bay, California (NOAA 9414509).
    pub fn dumbarton_highway_bridge() -> Self {
        StationProfile {
            name: "Dumbarton Highway Bridge, San Francisco Bay, California".to_string(),
            noaa_id: 9414509,
            datum_ft: 4.6818,
            utc_offset_hours: 8.0, // Pacific Standard Time (America/Los_Angeles)
            amplitudes_ft: [
                0.056, 1.378, 0.236, 0.19, 0.046, 3.038, 0.023, 0.059, 0.056, 0.01,
                0.591, 0.069, 0.81, 0.039, 0.449, 0.148, 0.03, 0.007, 0.072, 0.65,
                0.0, 0.0, 0.033, 0.039, 0.069, 0.138, 0.039, 0.105, 0.151, 0.03,
                0.043, 0.026, 0.0, 0.0, 0.0, 0.125, 0.128,
            ],
            kappas_deg: [
                281.9, 244.0, 244.6, 237.1, 272.4, 246.7, 354.4, 10.2, 49.9, 105.8,
                225.6, 199.6, 228.9, 283.2, 240.8, 228.1, 215.9, 264.9, 218.3, 264.2,
                0.0, 0.0, 249.3, 212.2, 25.7, 226.8, 215.5, 95.6, 80.6, 356.7,
                23.3, 75.0, 0.0, 0.0, 0.0, 221.4, 286.9,
            ],
        }
    }

    /// Same profile with a different datum, keeping the harmonic constants.
    ///
    /// Useful when a deployment reports heights against a different vertical
    /// reference plane than MLLW.
    pub fn with_datum(mut self, datum_ft: f64) -> Self {
        self.datum_ft = datum_ft;
        self
    }
}

impl Default for StationProfile {
    fn default() -> Self {
        Self::dumbarton_highway_bridge()
    }
}
