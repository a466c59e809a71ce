//! # Tide Predictor Core Library
//!
//! This library predicts local tide height at an arbitrary instant for a
//! single, fixed monitoring station using harmonic-constituent theory. It is
//! sized for resource-constrained embedded controllers that have a real-time
//! clock but no network connectivity: the entire model is compiled-in
//! constant data, a prediction is 37 cosine terms of fixed-cost arithmetic,
//! and nothing in the evaluation path allocates or performs I/O.
//!
//! ## How It Works
//!
//! Real tidal behavior is approximated as a sum of periodic components
//! (harmonic constituents), each tied to an astronomical forcing frequency:
//!
//! 1. The caller supplies a Unix timestamp (typically read from an RTC).
//! 2. The predictor resolves the timestamp's calendar year to a row of
//!    year-dependent corrections (node factor and equilibrium argument per
//!    constituent, accounting for the 18.6-year lunar nodal cycle).
//! 3. The timestamp becomes hours-since-year-start in the GMT time base the
//!    tables were fit in.
//! 4. 37 cosine terms are summed on top of the station datum, yielding a
//!    height in feet above mean lower low water.
//!
//! The harmonic constants ship with the crate for Dumbarton Highway Bridge,
//! San Francisco Bay (NOAA 9414509); a different station can be supplied at
//! deploy time via `tide-config.toml` (see [`config`]). Predictions are not
//! suitable for navigation and carry no accuracy warranty.
//!
//! ## Design Notes
//!
//! - **Pure evaluation**: [`TidePredictor::predict_height`] is a pure
//!   function of its timestamp and the immutable tables: repeated calls are
//!   bit-identical, and the predictor is safe to share across threads.
//! - **Explicit bounds**: a timestamp whose year falls outside the correction
//!   tables (2015..=2038) is rejected with a typed error instead of reading a
//!   nonexistent row.
//! - **Structural pairing**: per-constituent values travel as
//!   arrays-of-structs ([`harmonics::Constituent`], [`year_corrections::YearCorrection`])
//!   so index alignment is enforced by construction.
//!
//! # Example
//! ```
//! use tide_predictor::TidePredictor;
//!
//! let predictor = TidePredictor::with_default_station();
//! let height_ft = predictor.predict_height(1420070400).unwrap();
//! println!("{}: {:.2} ft", predictor.station_name(), height_ft);
//! ```

pub mod config;
pub mod harmonics;
pub mod predictor;
pub mod station;
pub mod year_corrections;

pub use config::{Config, ConfigError};
pub use predictor::{TideError, TidePredictor};
pub use station::StationProfile;
