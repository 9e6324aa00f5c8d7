use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse Error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DriverGearConfig {
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub teeth: u32,
    pub rpm: f32,
}

impl Default for DriverGearConfig {
    fn default() -> Self {
        Self {
            outer_radius: 1.0,
            inner_radius: 0.5,
            teeth: 60,
            rpm: 1.0,
        }
    }
}

/// The driven gear carries no rpm of its own; its rate is derived from the
/// driver via the tooth ratio.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DrivenGearConfig {
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub teeth: u32,
}

impl Default for DrivenGearConfig {
    fn default() -> Self {
        Self {
            outer_radius: 0.2,
            inner_radius: 0.1,
            teeth: 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HandConfig {
    pub length: f32,
    pub thickness: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub driver_gear: DriverGearConfig,
    pub driven_gear: DrivenGearConfig,
    pub second_hand: HandConfig,
    pub minute_hand: HandConfig,
    pub hour_hand: HandConfig,
    pub marker: HandConfig,
    /// Uniform phase offset in degrees applied to hand and marker angles.
    pub phase_deg: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            driver_gear: DriverGearConfig::default(),
            driven_gear: DrivenGearConfig::default(),
            second_hand: HandConfig {
                length: 0.9,
                thickness: 0.02,
            },
            minute_hand: HandConfig {
                length: 0.75,
                thickness: 0.03,
            },
            hour_hand: HandConfig {
                length: 0.5,
                thickness: 0.04,
            },
            marker: HandConfig {
                length: 0.08,
                thickness: 0.02,
            },
            phase_deg: 0.0,
        }
    }
}

impl SceneConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_scene() {
        let config = SceneConfig::default();
        assert_eq!(config.driver_gear.teeth, 60);
        assert_eq!(config.driver_gear.rpm, 1.0);
        assert_eq!(config.driven_gear.teeth, 12);
        assert_eq!(
            config.driver_gear.outer_radius + config.driven_gear.outer_radius,
            1.2
        );
        assert_eq!(config.phase_deg, 0.0);
    }

    #[test]
    fn parse_partial_toml_fills_defaults() {
        let config: SceneConfig = toml::from_str(
            r#"
            phase_deg = 90.0

            [driver_gear]
            teeth = 48
            rpm = 2.0
            "#,
        )
        .unwrap();
        assert_eq!(config.phase_deg, 90.0);
        assert_eq!(config.driver_gear.teeth, 48);
        assert_eq!(config.driver_gear.rpm, 2.0);
        // untouched sections keep their defaults
        assert_eq!(config.driver_gear.outer_radius, 1.0);
        assert_eq!(config.driven_gear.teeth, 12);
        assert_eq!(config.second_hand.thickness, 0.02);
    }

    #[test]
    fn parse_garbage_is_an_error() {
        let result: Result<SceneConfig, _> = toml::from_str("driver_gear = 3");
        assert!(result.is_err());
    }
}
