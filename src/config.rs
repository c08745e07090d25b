use serde::{Deserialize, Serialize};

use crate::types::Color;

/// Which diagonal of the centre cross each color starts on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opening {
    /// d4=white, e4=black, d5=black, e5=white.
    #[default]
    Standard,
    /// d4=black, e4=white, d5=white, e5=black.
    Swapped,
}

impl Opening {
    /// Color of the discs on (3,3) and (4,4).
    pub fn main_diagonal(self) -> Color {
        match self {
            Opening::Standard => Color::White,
            Opening::Swapped => Color::Black,
        }
    }
}

/// Settings fixed for the lifetime of one engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub opening: Opening,
}
