//! Input management system
//!
//! Games only ask "is this key currently held". The host feeds key events
//! into an [`InputManager`], which answers that query through the
//! [`InputState`] trait.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Read-only view of which keys are currently held
pub trait InputState {
    /// Whether `key` is held down right now
    fn is_key_pressed(&self, key: KeyCode) -> bool;
}

/// Input manager tracking held keys
#[derive(Debug, Default, Clone)]
pub struct InputManager {
    held: HashSet<KeyCode>,
}

impl InputManager {
    /// Create a new input manager with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    /// Mark a key as held
    pub fn press(&mut self, key: KeyCode) {
        self.handle_key_input(key, true);
    }

    /// Mark a key as released
    pub fn release(&mut self, key: KeyCode) {
        self.handle_key_input(key, false);
    }

    /// Release every key (e.g. on focus loss)
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

impl InputState for InputManager {
    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

impl KeyCode {
    const ALL: [KeyCode; 33] = [
        KeyCode::A, KeyCode::B, KeyCode::C, KeyCode::D, KeyCode::E, KeyCode::F,
        KeyCode::G, KeyCode::H, KeyCode::I, KeyCode::J, KeyCode::K, KeyCode::L,
        KeyCode::M, KeyCode::N, KeyCode::O, KeyCode::P, KeyCode::Q, KeyCode::R,
        KeyCode::S, KeyCode::T, KeyCode::U, KeyCode::V, KeyCode::W, KeyCode::X,
        KeyCode::Y, KeyCode::Z, KeyCode::Space, KeyCode::Enter, KeyCode::Escape,
        KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right,
    ];
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Error returned when a key name does not match any [`KeyCode`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown key name: {0}")]
pub struct UnknownKey(pub String);

impl FromStr for KeyCode {
    type Err = UnknownKey;

    /// Parse a key name such as `"A"`, `"space"` or `"Left"` (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}
