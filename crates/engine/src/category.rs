//! Fixed set of cost categories.

use serde::{Deserialize, Serialize};

use crate::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Health,
    Housing,
    Sport,
    Education,
}

impl Category {
    /// Every category, in the order reports list them.
    pub const ALL: [Category; 5] = [
        Self::Food,
        Self::Health,
        Self::Housing,
        Self::Sport,
        Self::Education,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Health => "health",
            Self::Housing => "housing",
            Self::Sport => "sport",
            Self::Education => "education",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "food" => Ok(Self::Food),
            "health" => Ok(Self::Health),
            "housing" => Ok(Self::Housing),
            "sport" => Ok(Self::Sport),
            "education" => Ok(Self::Education),
            other => Err(EngineError::InvalidCategory(other.to_string())),
        }
    }
}
