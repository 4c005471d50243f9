//! stacksim configuration definition & utilities.
//!
//! This module handles the configuration file of the deduplication tools (mostly its parsing).
//! The library itself takes every parameter explicitly; the configuration exists so that a
//! deduplication setup can be pinned in one TOML file and shared between runs.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    distance::DistanceType,
    error::{ErrorKind, StackSimError},
};

/// A configuration for the deduplication tools.
#[derive(Serialize, Deserialize, Debug)]
pub struct Config {
    /// The distance metric used when comparing threads.
    #[serde(default = "Config::default_distance_metric")]
    pub distance_metric: DistanceType,
    /// The largest distance at which two threads still count as duplicates.
    /// See [cluster_threads](crate::clustering::cluster_threads).
    #[serde(default = "Config::default_dedup_threshold")]
    pub dedup_threshold: f32,
}

impl Config {
    /// The default distance metric.
    const fn default_distance_metric() -> DistanceType {
        DistanceType::Levenshtein
    }
    /// The default deduplication threshold.
    const fn default_dedup_threshold() -> f32 {
        0.3
    }

    /// Load a configuration from file.
    ///
    /// # Arguments
    /// * `file` - The file to load the configuration from.
    pub fn load(file: &Path) -> Result<Self, StackSimError> {
        let config_toml = fs::read_to_string(file).map_err(|err| {
            error!(
                ErrorKind::InvalidArgument,
                "failed to read configuration from {}: {}.",
                file.display(),
                err
            )
        })?;

        toml::from_str(&config_toml).map_err(|err| {
            error!(
                ErrorKind::InvalidArgument,
                "failed to deserialize config TOML: {}.",
                err
            )
        })
    }

    /// Save a configuration to a file.
    ///
    /// # Arguments
    /// * `file` - The file to save the configuration to.
    pub fn save(&self, file: &Path) -> Result<(), StackSimError> {
        let config_toml = toml::to_string(&self).expect("failed to serialize config TOML.");

        fs::write(file, config_toml).map_err(|err| {
            error!(
                ErrorKind::InvalidArgument,
                "could not save config to file {}: {}.",
                file.display(),
                err
            )
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            distance_metric: Self::default_distance_metric(),
            dedup_threshold: Self::default_dedup_threshold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Missing fields fall back to the documented defaults.
    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.distance_metric, DistanceType::Levenshtein);
        assert_eq!(config.dedup_threshold, 0.3);
    }

    /// Metric names in the file use the same kebab-case spelling as the CLI.
    #[test]
    fn metric_names_are_kebab_case() {
        let config: Config =
            toml::from_str("distance_metric = \"damerau-levenshtein\"\ndedup_threshold = 0.1\n")
                .unwrap();

        assert_eq!(config.distance_metric, DistanceType::DamerauLevenshtein);
        assert_eq!(config.dedup_threshold, 0.1);
    }

    /// An unknown metric name in the file is a deserialization error.
    #[test]
    fn unknown_metric_is_rejected() {
        assert!(toml::from_str::<Config>("distance_metric = \"hamming\"\n").is_err());
    }

    #[test]
    fn config_round_trips_through_file() {
        let file = std::env::temp_dir().join("stacksim_config_round_trip.toml");
        let config = Config {
            distance_metric: DistanceType::JaroWinkler,
            dedup_threshold: 0.25,
        };

        config.save(&file).unwrap();
        let loaded = Config::load(&file).unwrap();
        let _ = fs::remove_file(&file);

        assert_eq!(loaded.distance_metric, DistanceType::JaroWinkler);
        assert_eq!(loaded.dedup_threshold, 0.25);
    }

    #[test]
    fn missing_config_file_is_invalid_argument() {
        let err = Config::load(Path::new("/nonexistent/stacksim.toml")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }
}
