use serde::{Deserialize, Serialize};

/// Polly voices offered to the client for selection.
///
/// Each variant name matches the Polly voice id exactly so serde payloads
/// carry the vendor identifier without a mapping table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Voice {
    #[default]
    Joanna,
    Matthew,
    Salli,
    Lupe,
    Lea,
    Vicki,
    Bianca,
    Ines,
}

impl Voice {
    /// The Polly voice id as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Joanna => "Joanna",
            Voice::Matthew => "Matthew",
            Voice::Salli => "Salli",
            Voice::Lupe => "Lupe",
            Voice::Lea => "Lea",
            Voice::Vicki => "Vicki",
            Voice::Bianca => "Bianca",
            Voice::Ines => "Ines",
        }
    }

    /// Human-readable label for voice pickers
    pub fn display_name(&self) -> &'static str {
        match self {
            Voice::Joanna => "English (US) - Joanna",
            Voice::Matthew => "English (US) - Matthew",
            Voice::Salli => "English (US) - Salli",
            Voice::Lupe => "Spanish (US) - Lupe",
            Voice::Lea => "French - Lea",
            Voice::Vicki => "German - Vicki",
            Voice::Bianca => "Italian - Bianca",
            Voice::Ines => "Portuguese - Ines",
        }
    }

    /// All supported voices, in display order
    pub fn all() -> &'static [Voice] {
        &[
            Voice::Joanna,
            Voice::Matthew,
            Voice::Salli,
            Voice::Lupe,
            Voice::Lea,
            Voice::Vicki,
            Voice::Bianca,
            Voice::Ines,
        ]
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
