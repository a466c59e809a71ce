//! # Deploy-Time Configuration
//!
//! Loading and validation of the station bundle from a `tide-config.toml`
//! file. This is the only way to run against a station other than the
//! compiled-in default: the whole bundle (identity, datum, UTC offset, and
//! the matched amplitude/kappa arrays) swaps atomically, so a deployment can
//! never end up with one station's amplitudes and another's phase lags.
//!
//! ## Validation Policy
//!
//! Malformed configuration fails fast with a typed [`ConfigError`] before any
//! prediction is attempted: a wrong-length amplitude array would otherwise
//! produce plausible-looking but wrong tides, which is worse than refusing to
//! start. A *missing* file is not an error: the correction tables are
//! compiled-in constants, and so is the default station profile.

use crate::harmonics::{CONSTITUENT_COUNT, CONSTITUENT_NAMES};
use crate::station::StationProfile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating a station configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read (permissions, encoding, ...).
    #[error("config IO: {0}")]
    Io(#[from] io::Error),

    /// Configuration file is not valid TOML for the expected schema.
    #[error("config parse: {0}")]
    Parse(#[from] toml::de::Error),

    /// A per-constituent array does not have exactly one entry per
    /// constituent.
    #[error("{field} has {actual} entries, expected {expected} (one per constituent, {first}..{last})",
            first = CONSTITUENT_NAMES[0], last = CONSTITUENT_NAMES[CONSTITUENT_COUNT - 1])]
    ConstituentCount {
        /// Which array was the wrong length.
        field: &'static str,
        /// Required length (the constituent count).
        expected: usize,
        /// Length actually found in the file.
        actual: usize,
    },
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Station bundle for this deployment.
    pub station: StationConfig,
}

/// TOML-facing station bundle, validated into a [`StationProfile`].
///
/// The arrays are plain vectors at this boundary so that a wrong-length file
/// is reported as a configuration error instead of a deserialization failure
/// buried in serde output.
#[derive(Debug, Deserialize, Serialize)]
pub struct StationConfig {
    /// Human-readable station name.
    pub name: String,
    /// NOAA station identifier.
    pub noaa_id: u32,
    /// MLLW datum offset in feet.
    pub datum_ft: f64,
    /// Hours to add to reach the tables' GMT time base (8 = Pacific Standard
    /// Time). Must match the convention the tables were generated under.
    pub utc_offset_hours: f64,
    /// Constituent amplitudes in feet, in table order (37 entries).
    pub amplitudes_ft: Vec<f64>,
    /// Constituent phase lags in degrees, in table order (37 entries).
    pub kappas_deg: Vec<f64>,
}

impl StationConfig {
    /// Validate and convert into an immutable [`StationProfile`].
    pub fn into_profile(self) -> Result<StationProfile, ConfigError> {
        let amplitudes_ft = fixed_length("amplitudes_ft", self.amplitudes_ft)?;
        let kappas_deg = fixed_length("kappas_deg", self.kappas_deg)?;
        Ok(StationProfile {
            name: self.name,
            noaa_id: self.noaa_id,
            datum_ft: self.datum_ft,
            utc_offset_hours: self.utc_offset_hours,
            amplitudes_ft,
            kappas_deg,
        })
    }
}

impl From<&StationProfile> for StationConfig {
    fn from(profile: &StationProfile) -> Self {
        StationConfig {
            name: profile.name.clone(),
            noaa_id: profile.noaa_id,
            datum_ft: profile.datum_ft,
            utc_offset_hours: profile.utc_offset_hours,
            amplitudes_ft: profile.amplitudes_ft.to_vec(),
            kappas_deg: profile.kappas_deg.to_vec(),
        }
    }
}

fn fixed_length(
    field: &'static str,
    values: Vec<f64>,
) -> Result<[f64; CONSTITUENT_COUNT], ConfigError> {
    let actual = values.len();
    values
        .try_into()
        .map_err(|_| ConfigError::ConstituentCount {
            field,
            expected: CONSTITUENT_COUNT,
            actual,
        })
}

impl Config {
    /// Load the station profile from `tide-config.toml` in the working
    /// directory, falling back to the compiled-in profile if no file exists.
    pub fn load() -> Result<StationProfile, ConfigError> {
        Self::load_from_path("tide-config.toml")
    }

    /// Load the station profile from a specific path.
    ///
    /// A missing file yields the compiled-in default profile; any other
    /// failure (unreadable file, invalid TOML, wrong-length arrays) is a hard
    /// error.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<StationProfile, ConfigError> {
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let config: Config = toml::from_str(&contents)?;
                let profile = config.station.into_profile()?;
                println!("Loaded configuration for station: {}", profile.name);
                Ok(profile)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                eprintln!("Info: no config file found, using compiled-in station profile");
                Ok(StationProfile::default())
            }
            Err(e) => Err(ConfigError::Io(e)),
        }
    }

    /// Serialize a station profile to the configuration file format.
    pub fn to_toml(profile: &StationProfile) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&Config {
            station: StationConfig::from(profile),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_selects_compiled_in_profile() {
        let profile = Config::load_from_path("/nonexistent/tide-config.toml").unwrap();
        assert_eq!(profile.noaa_id, 9414509);
    }

    #[test]
    fn profile_roundtrips_through_toml() {
        let original = StationProfile::dumbarton_highway_bridge();
        let toml_str = Config::to_toml(&original).unwrap();

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_str.as_bytes()).unwrap();

        let loaded = Config::load_from_path(file.path()).unwrap();
        assert_eq!(loaded.name, original.name);
        assert_eq!(loaded.noaa_id, original.noaa_id);
        assert_eq!(loaded.datum_ft, original.datum_ft);
        assert_eq!(loaded.utc_offset_hours, original.utc_offset_hours);
        assert_eq!(loaded.amplitudes_ft, original.amplitudes_ft);
        assert_eq!(loaded.kappas_deg, original.kappas_deg);
    }

    #[test]
    fn wrong_length_amplitudes_fail_fast() {
        let mut config = StationConfig::from(&StationProfile::default());
        config.amplitudes_ft.truncate(36);
        let err = config.into_profile().unwrap_err();
        match err {
            ConfigError::ConstituentCount {
                field,
                expected,
                actual,
            } => {
                assert_eq!(field, "amplitudes_ft");
                assert_eq!(expected, 37);
                assert_eq!(actual, 36);
            }
            other => panic!("Expected ConstituentCount error, got {:?}", other),
        }
    }

    #[test]
    fn wrong_length_kappas_fail_fast() {
        let mut config = StationConfig::from(&StationProfile::default());
        config.kappas_deg.push(0.0);
        let err = config.into_profile().unwrap_err();
        assert!(
            matches!(
                err,
                ConfigError::ConstituentCount {
                    field: "kappas_deg",
                    actual: 38,
                    ..
                }
            ),
            "Expected ConstituentCount error, got {:?}",
            err
        );
    }

    #[test]
    fn invalid_toml_is_a_hard_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[station]\nname = 42\n").unwrap();
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
