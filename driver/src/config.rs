use std::{env, num::NonZeroUsize};

use crate::error::{DriverErr, Result};

/// The sample count of the reference harness.
pub const DEFAULT_SAMPLES: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// Immutable bounds for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    samples: NonZeroUsize,
    parallel: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            parallel: true,
        }
    }
}

impl DriverConfig {
    /// Creates a new driver configuration.
    ///
    /// # Args
    /// * `samples` - Number of samples in every batch.
    /// * `parallel` - Whether to spread the evaluations over the rayon pool.
    ///
    /// # Returns
    /// A `DriverConfig` instance.
    pub fn new(samples: NonZeroUsize, parallel: bool) -> Self {
        Self { samples, parallel }
    }

    /// Builds the configuration from the `SAMPLES` and `PARALLEL` environment variables,
    /// falling back to the defaults for the ones that are not set.
    ///
    /// # Errors
    /// Returns `DriverErr::InvalidConfig` if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var("SAMPLES").ok(), env::var("PARALLEL").ok())
    }

    fn from_vars(samples: Option<String>, parallel: Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(samples) = samples {
            config.samples = samples
                .trim()
                .parse()
                .map_err(|e| DriverErr::InvalidConfig(format!("SAMPLES={samples}: {e}")))?;
        }

        if let Some(parallel) = parallel {
            config.parallel = match parallel.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(DriverErr::InvalidConfig(format!(
                        "PARALLEL={parallel}: expected a boolean"
                    )));
                }
            };
        }

        Ok(config)
    }

    /// Returns the number of samples per batch.
    pub fn samples(&self) -> usize {
        self.samples.get()
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Returns the amount of floats an input buffer holds.
    pub fn input_len(&self) -> usize {
        self.samples() * 2
    }

    /// Returns the amount of floats an output buffer holds.
    pub fn output_len(&self) -> usize {
        self.samples() * programs::PROGRAM_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_harness() {
        let config = DriverConfig::from_vars(None, None).unwrap();

        assert_eq!(config, DriverConfig::default());
        assert_eq!(config.samples(), 10);
        assert_eq!(config.input_len(), 20);
        assert_eq!(config.output_len(), 50);
        assert!(config.parallel());
    }

    #[test]
    fn vars_override_defaults() {
        let config = DriverConfig::from_vars(Some("194".into()), Some("false".into())).unwrap();

        assert_eq!(config.samples(), 194);
        assert!(!config.parallel());
    }

    #[test]
    fn bad_vars_are_rejected() {
        for (samples, parallel) in [(Some("0"), None), (Some("ten"), None), (None, Some("maybe"))] {
            let res = DriverConfig::from_vars(samples.map(Into::into), parallel.map(Into::into));
            assert!(matches!(res, Err(DriverErr::InvalidConfig(_))));
        }
    }
}
