//! Engine configuration.
//!
//! [`EngineConfig`] holds the parameters that stay fixed for the lifetime
//! of an [`Engine`](super::Engine).

use crate::error::EngineError;

/// Configuration for the evolutionary engine.
///
/// # Defaults
///
/// ```
/// use u_evolve::ga::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.elite_count, 1);
/// assert!(config.seed.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_elite_ratio(0.1, 50)
///     .with_seed(42);
/// assert_eq!(config.elite_count, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of best solutions carried unchanged into each generation.
    ///
    /// Must be smaller than the population size.
    pub elite_count: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            elite_count: 1,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the elite count.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the elite count as a fraction of `population_size` (rounded down).
    pub fn with_elite_ratio(mut self, ratio: f64, population_size: usize) -> Self {
        self.elite_count = (population_size as f64 * ratio.clamp(0.0, 1.0)) as usize;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration against a population size.
    pub fn validate(&self, population_size: usize) -> Result<(), EngineError> {
        check_elite_count(self.elite_count, population_size)
    }
}

pub(crate) fn check_elite_count(
    elite_count: usize,
    population_size: usize,
) -> Result<(), EngineError> {
    if elite_count >= population_size {
        return Err(EngineError::Configuration {
            elite_count,
            population_size,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.elite_count, 1);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default().with_elite_count(4).with_seed(42);
        assert_eq!(config.elite_count, 4);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_elite_ratio_rounds_down() {
        let config = EngineConfig::default().with_elite_ratio(0.15, 30);
        assert_eq!(config.elite_count, 4);
    }

    #[test]
    fn test_elite_ratio_clamps() {
        assert_eq!(
            EngineConfig::default().with_elite_ratio(-0.5, 10).elite_count,
            0
        );
        assert_eq!(
            EngineConfig::default().with_elite_ratio(1.5, 10).elite_count,
            10
        );
    }

    #[test]
    fn test_validate_ok() {
        assert!(EngineConfig::default().validate(2).is_ok());
        assert!(EngineConfig::default().with_elite_count(0).validate(1).is_ok());
    }

    #[test]
    fn test_validate_elite_fills_population() {
        let config = EngineConfig::default().with_elite_count(5);
        assert_eq!(
            config.validate(5),
            Err(EngineError::Configuration {
                elite_count: 5,
                population_size: 5,
            })
        );
        assert!(config.validate(3).is_err());
    }

    #[test]
    fn test_validate_empty_population() {
        let config = EngineConfig::default().with_elite_count(0);
        assert!(config.validate(0).is_err());
    }
}
