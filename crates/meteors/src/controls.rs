//! Control mapping from keys to game actions

use arcade_engine::config::ConfigError;
use arcade_engine::input::{InputState, KeyCode};
use bitflags::bitflags;

use crate::config::ControlsConfig;

bitflags! {
    /// Actions held during a tick
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Controls: u8 {
        /// Turn counter-clockwise
        const ROTATE_LEFT = 1 << 0;
        /// Turn clockwise
        const ROTATE_RIGHT = 1 << 1;
        /// Shoot
        const FIRE = 1 << 2;
    }
}

/// Which key drives each action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    /// Key for [`Controls::ROTATE_LEFT`]
    pub rotate_left: KeyCode,
    /// Key for [`Controls::ROTATE_RIGHT`]
    pub rotate_right: KeyCode,
    /// Key for [`Controls::FIRE`]
    pub fire: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            rotate_left: KeyCode::A,
            rotate_right: KeyCode::D,
            fire: KeyCode::Space,
        }
    }
}

impl KeyBindings {
    /// Parse the key names in a controls config
    pub fn from_config(config: &ControlsConfig) -> Result<Self, ConfigError> {
        let parse = |name: &str| {
            name.parse::<KeyCode>()
                .map_err(|e| ConfigError::Invalid(e.to_string()))
        };

        Ok(Self {
            rotate_left: parse(&config.rotate_left)?,
            rotate_right: parse(&config.rotate_right)?,
            fire: parse(&config.fire)?,
        })
    }

    /// Read the held actions from the current key state
    pub fn sample(&self, input: &dyn InputState) -> Controls {
        let mut controls = Controls::empty();
        controls.set(Controls::ROTATE_LEFT, input.is_key_pressed(self.rotate_left));
        controls.set(Controls::ROTATE_RIGHT, input.is_key_pressed(self.rotate_right));
        controls.set(Controls::FIRE, input.is_key_pressed(self.fire));
        controls
    }
}
