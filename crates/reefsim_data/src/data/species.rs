use serde::{Deserialize, Serialize};
use std::fmt;

/// Every species that can occupy the reef.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    Shark,
    Whale,
    Clownfish,
    Salmon,
    Sardine,
}

impl Species {
    /// All species in seeding and reporting order.
    pub const ALL: [Species; 5] = [
        Species::Shark,
        Species::Whale,
        Species::Clownfish,
        Species::Salmon,
        Species::Sardine,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Species::Shark => "Shark",
            Species::Whale => "Whale",
            Species::Clownfish => "Clownfish",
            Species::Salmon => "Salmon",
            Species::Sardine => "Sardine",
        }
    }

    #[must_use]
    pub fn symbol(&self) -> char {
        match self {
            Species::Shark => 'S',
            Species::Whale => 'W',
            Species::Clownfish => 'c',
            Species::Salmon => 's',
            Species::Sardine => 'd',
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
