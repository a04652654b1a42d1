//! # Configuration Loading
//!
//! Pipeline parameters are plain `serde` structs. They can be built in code
//! or loaded from TOML; either way they pass through [`Validate`] before any
//! generation happens.

use serde::de::DeserializeOwned;

use crate::error::{GenerationError, GenerationResult};

/// A configuration that can check its own invariants.
pub trait Validate {
    /// Checks every option against its documented domain.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidConfig`] naming the first bad option.
    fn validate(&self) -> GenerationResult<()>;
}

/// Parses a TOML document into a validated configuration.
///
/// # Errors
///
/// Returns [`GenerationError::ConfigParse`] for malformed TOML and
/// [`GenerationError::InvalidConfig`] when a value is out of range.
pub fn load_toml<T>(text: &str) -> GenerationResult<T>
where
    T: DeserializeOwned + Validate,
{
    let config: T = toml::from_str(text).map_err(|e| GenerationError::ConfigParse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Checks that `value` lies in `[0, 1]`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidConfig`] when it does not (NaN included).
pub fn require_unit_interval(name: &str, value: f32) -> GenerationResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GenerationError::config(format!("{name} must be in [0, 1], got {value}")))
    }
}

/// Checks that `value` is finite and strictly positive.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidConfig`] when it is not.
pub fn require_positive(name: &str, value: f32) -> GenerationResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GenerationError::config(format!("{name} must be > 0, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        radius: f32,
        density: f32,
    }

    impl Validate for Sample {
        fn validate(&self) -> GenerationResult<()> {
            require_positive("radius", self.radius)?;
            require_unit_interval("density", self.density)
        }
    }

    #[test]
    fn test_load_valid() {
        let sample: Sample = load_toml("radius = 5.0\ndensity = 0.5\n").unwrap();
        assert_eq!(sample.radius, 5.0);
        assert_eq!(sample.density, 0.5);
    }

    #[test]
    fn test_load_rejects_out_of_range() {
        let err = load_toml::<Sample>("radius = 5.0\ndensity = 1.5\n").unwrap_err();
        assert!(matches!(err, GenerationError::InvalidConfig(_)), "got {err:?}");
    }

    #[test]
    fn test_load_rejects_malformed() {
        let err = load_toml::<Sample>("radius = = 5").unwrap_err();
        assert!(matches!(err, GenerationError::ConfigParse(_)), "got {err:?}");
    }

    #[test]
    fn test_unit_interval_rejects_nan() {
        assert!(require_unit_interval("p", f32::NAN).is_err());
        assert!(require_unit_interval("p", 0.0).is_ok());
        assert!(require_unit_interval("p", 1.0).is_ok());
    }

    #[test]
    fn test_positive() {
        assert!(require_positive("r", 0.0).is_err());
        assert!(require_positive("r", f32::INFINITY).is_err());
        assert!(require_positive("r", 0.1).is_ok());
    }
}
