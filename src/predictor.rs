//! # Harmonic Tide Prediction
//!
//! The evaluation core of the crate: given an absolute timestamp, locate the
//! calendar year's correction row, convert the timestamp into hours since the
//! start of that year in the GMT time base the tables were fit in, and sum the
//! 37 harmonic constituents into a single water-level value.
//!
//! ## Evaluation Pipeline
//!
//! 1. **Year lookup**: resolve the timestamp's UTC calendar year and find the
//!    matching [`crate::year_corrections::YearCorrection`] row, or fail with
//!    [`TideError::OutOfRangeYear`].
//! 2. **Time conversion**: `hours = (t - year_start) / 3600 + utc_offset`;
//!    the offset shifts the station's local-standard-time convention into the
//!    time base the Equilarg/Nodefactor tables assume.
//! 3. **Summation**: `height = datum + Σ nf·A·cos((speed·hours + eq - κ)·π/180)`
//!    over all 37 constituents, in `f64`.
//!
//! The sign and order of operations in step 2 and the cosine argument in
//! step 3 are load-bearing: they must match the convention the tables were
//! generated under, so any change there is a behavioral change even when it
//! looks like a cleanup.
//!
//! ## Concurrency
//!
//! A [`TidePredictor`] holds only immutable tables; `predict_height` keeps all
//! per-call state in locals and is a pure function of its argument. The
//! predictor is freely shareable across threads without locking.

use crate::harmonics::{constituents_for, Constituent, CONSTITUENT_COUNT};
use crate::station::StationProfile;
use crate::year_corrections::{row_for_year, FIRST_YEAR, LAST_YEAR};
use chrono::{DateTime, Datelike};
use thiserror::Error;

/// Errors a prediction can return.
///
/// Both variants are ordinary recoverable values; nothing in the evaluation
/// path panics or reads out of bounds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TideError {
    /// The timestamp's UTC calendar year has no correction-table row.
    #[error("year {year} is outside the correction tables ({first_year}..={last_year})")]
    OutOfRangeYear {
        /// Calendar year of the rejected timestamp.
        year: i32,
        /// First supported year.
        first_year: i32,
        /// Last supported year (inclusive).
        last_year: i32,
    },

    /// The timestamp cannot be represented as a calendar date at all
    /// (hundreds of millennia away from the supported span).
    #[error("timestamp {0} is outside the representable date range")]
    UnrepresentableTimestamp(i64),
}

/// Tide predictor for one fixed station.
///
/// Construction pairs the station's amplitude/kappa arrays with the universal
/// speed table once, so the evaluation loop walks a single array-of-structs
/// instead of four parallel arrays.
///
/// # Example
/// ```
/// use tide_predictor::TidePredictor;
///
/// let predictor = TidePredictor::with_default_station();
/// // Midnight UTC, January 1 2015, the first instant the tables cover
/// let height_ft = predictor.predict_height(1420070400).unwrap();
/// assert!(height_ft > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct TidePredictor {
    station: StationProfile,
    constituents: [Constituent; CONSTITUENT_COUNT],
}

impl TidePredictor {
    /// Build a predictor for the given station profile.
    pub fn new(station: StationProfile) -> Self {
        let constituents = constituents_for(&station.amplitudes_ft, &station.kappas_deg);
        TidePredictor {
            station,
            constituents,
        }
    }

    /// Build a predictor for the compiled-in default station
    /// (Dumbarton Highway Bridge, NOAA 9414509).
    pub fn with_default_station() -> Self {
        Self::new(StationProfile::default())
    }

    /// Predict the tide height in feet at `unix_secs` (seconds since the Unix
    /// epoch, as read from an RTC).
    ///
    /// Deterministic: the same timestamp always yields a bit-identical result.
    /// Timestamps whose UTC calendar year falls outside the correction tables
    /// are rejected with [`TideError::OutOfRangeYear`] rather than reading a
    /// nonexistent row.
    pub fn predict_height(&self, unix_secs: i64) -> Result<f64, TideError> {
        let Some(datetime) = DateTime::from_timestamp(unix_secs, 0) else {
            return Err(TideError::UnrepresentableTimestamp(unix_secs));
        };
        let year = datetime.year();
        let row = row_for_year(year).ok_or(TideError::OutOfRangeYear {
            year,
            first_year: FIRST_YEAR,
            last_year: LAST_YEAR,
        })?;

        // Hours since the start of the year, shifted from the station's local
        // standard time convention into the GMT base the tables assume.
        let hours = (unix_secs - row.year_start_secs) as f64 / 3600.0
            + self.station.utc_offset_hours;

        let mut height_ft = self.station.datum_ft;
        for (constituent, (node_factor, equilibrium_arg)) in self
            .constituents
            .iter()
            .zip(row.node_factors.iter().zip(row.equilibrium_args.iter()))
        {
            // The phase grows to ~2.5e5 degrees by year end; f64::cos
            // range-reduces large arguments without precision collapse.
            let phase_deg = constituent.speed_deg_per_hour * hours + equilibrium_arg
                - constituent.kappa_deg;
            height_ft += node_factor * constituent.amplitude_ft * phase_deg.to_radians().cos();
        }

        Ok(height_ft)
    }

    /// Station display name.
    pub fn station_name(&self) -> &str {
        &self.station.name
    }

    /// NOAA station identifier.
    pub fn station_id(&self) -> u32 {
        self.station.noaa_id
    }

    /// The full station profile this predictor was built from.
    pub fn station(&self) -> &StationProfile {
        &self.station
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmonics::{CONSTITUENT_NAMES, SPEEDS_DEG_PER_HOUR};
    use crate::year_corrections::YEAR_CORRECTIONS;

    /// Unix timestamp of 2015-01-01 00:00 UTC, the first instant of row 0.
    const T_2015_START: i64 = 1420070400;

    /// Unix timestamp of 2016-01-01 00:00 UTC (first year rollover).
    const T_2016_START: i64 = 1451606400;

    #[test]
    fn golden_reference_dumbarton_2015_start() {
        // At the exact start of 2015, hours-since-year-start is 0 before the
        // GMT shift and 8 after it; the full 37-term sum over the published
        // tables evaluates to this value.
        let predictor = TidePredictor::with_default_station();
        let height = predictor.predict_height(T_2015_START).unwrap();
        assert!(
            (height - 5.425334003262581).abs() < 1e-9,
            "Golden reference mismatch: got {}",
            height
        );
    }

    #[test]
    fn predictions_are_bit_identical() {
        let predictor = TidePredictor::with_default_station();
        let timestamps = [T_2015_START, T_2015_START + 3600, T_2016_START + 12345];
        for t in timestamps {
            let a = predictor.predict_height(t).unwrap();
            let b = predictor.predict_height(t).unwrap();
            assert_eq!(
                a.to_bits(),
                b.to_bits(),
                "Repeated prediction at {} should be bit-identical",
                t
            );
        }
    }

    #[test]
    fn datum_shifts_every_prediction_by_exactly_its_delta() {
        let base = TidePredictor::with_default_station();
        let shifted = TidePredictor::new(
            StationProfile::dumbarton_highway_bridge().with_datum(4.6818 + 1.25),
        );

        for t in [T_2015_START, T_2015_START + 7 * 86400, T_2016_START + 3600] {
            let h0 = base.predict_height(t).unwrap();
            let h1 = shifted.predict_height(t).unwrap();
            assert!(
                ((h1 - h0) - 1.25).abs() < 1e-12,
                "Datum delta should shift prediction exactly: {} vs {}",
                h0,
                h1
            );
        }
    }

    #[test]
    fn year_rollover_has_no_gross_discontinuity() {
        // Node factors and equilibrium arguments change between adjacent year
        // rows, so strict continuity is not expected; anything beyond a small
        // fraction of a foot across one second would indicate a row-indexing
        // bug. The reference delta across the 2015->2016 rollover is ~0.12 ft.
        let predictor = TidePredictor::with_default_station();
        let before = predictor.predict_height(T_2016_START - 1).unwrap();
        let after = predictor.predict_height(T_2016_START).unwrap();
        assert!(
            (after - before).abs() < 0.5,
            "Year rollover jump too large: {} -> {}",
            before,
            after
        );
    }

    #[test]
    fn years_outside_the_tables_are_rejected() {
        let predictor = TidePredictor::with_default_station();

        // Mid-2014, one year before the first row
        let err = predictor.predict_height(1404172800).unwrap_err();
        assert_eq!(
            err,
            TideError::OutOfRangeYear {
                year: 2014,
                first_year: 2015,
                last_year: 2038,
            }
        );

        // One second before the first row's start still belongs to 2014
        let err = predictor.predict_height(T_2015_START - 1).unwrap_err();
        assert!(matches!(err, TideError::OutOfRangeYear { year: 2014, .. }));

        // Mid-2039, one year past the last row
        let t_2039 = 2177452800 + 86400; // 2039-01-02
        let err = predictor.predict_height(t_2039).unwrap_err();
        assert!(matches!(err, TideError::OutOfRangeYear { year: 2039, .. }));
    }

    #[test]
    fn unrepresentable_timestamps_are_rejected() {
        let predictor = TidePredictor::with_default_station();
        assert_eq!(
            predictor.predict_height(i64::MIN).unwrap_err(),
            TideError::UnrepresentableTimestamp(i64::MIN)
        );
    }

    #[test]
    fn single_constituent_reduces_to_one_cosine_term() {
        // Zero out every amplitude except M2 and verify the sum collapses to
        // datum + nf * A * cos(...), independent of table plumbing.
        let m2 = CONSTITUENT_NAMES.iter().position(|n| *n == "M2").unwrap();
        let reference = StationProfile::dumbarton_highway_bridge();

        let mut amplitudes = [0.0; CONSTITUENT_COUNT];
        amplitudes[m2] = reference.amplitudes_ft[m2];
        let profile = StationProfile {
            amplitudes_ft: amplitudes,
            ..reference.clone()
        };
        let predictor = TidePredictor::new(profile);

        let t = T_2015_START + 5 * 3600;
        let hours = (t - YEAR_CORRECTIONS[0].year_start_secs) as f64 / 3600.0 + 8.0;
        let phase_deg = SPEEDS_DEG_PER_HOUR[m2] * hours + YEAR_CORRECTIONS[0].equilibrium_args[m2]
            - reference.kappas_deg[m2];
        let expected = reference.datum_ft
            + YEAR_CORRECTIONS[0].node_factors[m2]
                * reference.amplitudes_ft[m2]
                * phase_deg.to_radians().cos();

        let actual = predictor.predict_height(t).unwrap();
        assert!(
            (actual - expected).abs() < 1e-12,
            "Single-constituent sum mismatch: {} vs {}",
            actual,
            expected
        );
    }

    #[test]
    fn all_supported_years_evaluate() {
        // Monotonic year indexing: every supported year resolves to its own
        // row and produces a finite prediction at the row's first instant.
        let predictor = TidePredictor::with_default_station();
        for (i, row) in YEAR_CORRECTIONS.iter().enumerate() {
            let height = predictor
                .predict_height(row.year_start_secs)
                .unwrap_or_else(|e| panic!("Row {} should evaluate: {}", i, e));
            assert!(
                height.is_finite(),
                "Prediction for row {} should be finite",
                i
            );
        }
    }

    #[test]
    fn accessors_return_profile_fields() {
        let predictor = TidePredictor::with_default_station();
        assert_eq!(predictor.station_id(), 9414509);
        assert!(predictor.station_name().starts_with("Dumbarton Highway Bridge"));
    }

    #[test]
    fn predictor_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TidePredictor>();
    }
}
