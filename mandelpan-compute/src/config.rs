use mandelpan_core::FractalError;
use serde::{Deserialize, Serialize};

/// Immutable fractal parameters, fixed at engine construction.
///
/// The engine holds one of these instead of reading process-wide mutable
/// state, so two engines with different settings can coexist and a render is
/// fully described by (config, bounds, canvas size).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Iteration cap; reaching it classifies the point as interior.
    pub max_iterations: u32,
    /// Orbit magnitude beyond which a point has escaped.
    pub escape_radius: f64,
    /// Exponent of the recurrence `z <- z^power + c`. No UI changes this;
    /// it exists as a parameter only.
    pub power: u32,
    /// Integer ratio between canvas resolution and the logical computation
    /// buffer. 1 = full resolution.
    pub downsample_factor: u32,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), FractalError> {
        if self.max_iterations == 0 {
            return Err(FractalError::invalid_viewport(
                "max_iterations must be at least 1",
            ));
        }
        if !self.escape_radius.is_finite() || self.escape_radius <= 0.0 {
            return Err(FractalError::invalid_viewport(format!(
                "escape_radius must be finite and positive, got {}",
                self.escape_radius
            )));
        }
        if self.power < 2 {
            return Err(FractalError::invalid_viewport(
                "power must be at least 2",
            ));
        }
        if self.downsample_factor == 0 {
            return Err(FractalError::invalid_viewport(
                "downsample_factor must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            escape_radius: 2.0,
            power: 2,
            downsample_factor: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_parameters() {
        let config = EngineConfig::default();
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.escape_radius, 2.0);
        assert_eq!(config.power, 2);
        assert_eq!(config.downsample_factor, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_downsample_factor_rejected() {
        let config = EngineConfig {
            downsample_factor: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_positive_escape_radius_rejected() {
        for radius in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let config = EngineConfig {
                escape_radius: radius,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "radius {radius} accepted");
        }
    }

    #[test]
    fn zero_iteration_cap_rejected() {
        let config = EngineConfig {
            max_iterations: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn serialization_roundtrip_preserves_config() {
        let original = EngineConfig {
            max_iterations: 500,
            escape_radius: 4.0,
            power: 3,
            downsample_factor: 1,
        };
        let json = serde_json::to_string(&original).unwrap();
        let restored: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }
}
