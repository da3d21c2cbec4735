//! Game rules configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Limits on the size of a case
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    /// Suspects when the player does not ask for a number
    #[serde(default = "default_suspects")]
    pub default_suspects: usize,

    /// Fewest suspects a case may have
    #[serde(default = "default_min_suspects")]
    pub min_suspects: usize,

    /// Most suspects a case may have
    #[serde(default = "default_max_suspects")]
    pub max_suspects: usize,
}

impl GameConfig {
    /// Validate game configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let ordered = self.min_suspects >= 1
            && self.min_suspects <= self.default_suspects
            && self.default_suspects <= self.max_suspects;
        if !ordered {
            return Err(ValidationError::InvalidSuspectBounds {
                min: self.min_suspects,
                default: self.default_suspects,
                max: self.max_suspects,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_suspects: default_suspects(),
            min_suspects: default_min_suspects(),
            max_suspects: default_max_suspects(),
        }
    }
}

fn default_suspects() -> usize {
    4
}

fn default_min_suspects() -> usize {
    2
}

fn default_max_suspects() -> usize {
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.default_suspects, 4);
        assert_eq!(config.min_suspects, 2);
        assert_eq!(config.max_suspects, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_outside_bounds_is_invalid() {
        let config = GameConfig {
            default_suspects: 10,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSuspectBounds { default: 10, .. })
        ));
    }

    #[test]
    fn test_zero_minimum_is_invalid() {
        let config = GameConfig {
            min_suspects: 0,
            default_suspects: 1,
            max_suspects: 3,
        };
        assert!(config.validate().is_err());
    }
}
