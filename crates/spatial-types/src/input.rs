//! Keys, navigation profiles and directions.
//!
//! Hosts hand over raw key names (as reported by the browser, e.g.
//! `"ArrowUp"` or `"w"`). Only keys belonging to the active
//! [`NavigationProfile`] map to a movement [`Direction`].

use serde::{Deserialize, Serialize};

/// Keys the navigator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
    Escape,
}

impl Key {
    /// Parse a key name case-insensitively. Unknown keys yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "arrowup" => Some(Self::ArrowUp),
            "arrowdown" => Some(Self::ArrowDown),
            "arrowleft" => Some(Self::ArrowLeft),
            "arrowright" => Some(Self::ArrowRight),
            "w" => Some(Self::W),
            "a" => Some(Self::A),
            "s" => Some(Self::S),
            "d" => Some(Self::D),
            "escape" => Some(Self::Escape),
            _ => None,
        }
    }

    /// The profile this key belongs to, if it is a movement key.
    pub fn profile(self) -> Option<NavigationProfile> {
        match self {
            Self::ArrowUp | Self::ArrowDown | Self::ArrowLeft | Self::ArrowRight => {
                Some(NavigationProfile::ArrowKeys)
            },
            Self::W | Self::A | Self::S | Self::D => Some(NavigationProfile::Wasd),
            Self::Escape => None,
        }
    }

    /// Direction this key moves in, regardless of the active profile.
    fn raw_direction(self) -> Direction {
        match self {
            Self::ArrowUp | Self::W => Direction::Up,
            Self::ArrowDown | Self::S => Direction::Down,
            Self::ArrowLeft | Self::A => Direction::Left,
            Self::ArrowRight | Self::D => Direction::Right,
            Self::Escape => Direction::None,
        }
    }
}

/// Which key set drives navigation. The two sets are mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationProfile {
    #[default]
    #[serde(rename = "arrow-keys")]
    ArrowKeys,
    #[serde(rename = "wasd")]
    Wasd,
}

/// Returns true if `key` is one of the movement keys of `profile`.
pub fn is_key_in_profile(key: &str, profile: NavigationProfile) -> bool {
    Key::parse(key).and_then(Key::profile) == Some(profile)
}

/// A requested movement direction.
///
/// `None` stands for "not a navigation key in the active profile" and is
/// never handed to the search engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// Map a raw key name through the active profile.
    pub fn from_key(key: &str, profile: NavigationProfile) -> Self {
        match Key::parse(key) {
            Some(k) if k.profile() == Some(profile) => k.raw_direction(),
            _ => Self::None,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}
