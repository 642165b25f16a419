//! Participant domain type
//!
//! A named entry in the rotation together with its remaining turn allowance.

use serde::{Deserialize, Serialize};

/// A participant in the turn rotation
///
/// A `turns` value of zero or less means the participant has an unlimited
/// number of turns and is never removed from the rotation. Names are not
/// validated; two participants with the same name are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name
    pub name: String,

    /// Remaining turn allowance; zero or less means unlimited
    pub turns: i32,
}

impl Participant {
    /// Create a new participant with the given turn allowance
    pub fn new(name: impl Into<String>, turns: i32) -> Self {
        Self {
            name: name.into(),
            turns,
        }
    }

    /// Whether this participant cycles through the rotation forever
    pub fn has_unlimited_turns(&self) -> bool {
        self.turns <= 0
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_unlimited_turns() {
            write!(f, "{} (forever)", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.turns)
        }
    }
}
