//! Behavior categories and per-cycle predictions.

use serde::{Deserialize, Serialize};

use super::behavior::BehaviorKind;
use crate::constants::CATEGORY_COUNT;

/// The eight behavior categories, with stable indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorCategory {
    Navigation = 0,
    Search = 1,
    Details = 2,
    Contact = 3,
    Media = 4,
    Form = 5,
    Social = 6,
    Exit = 7,
}

impl BehaviorCategory {
    pub const ALL: [BehaviorCategory; CATEGORY_COUNT] = [
        Self::Navigation,
        Self::Search,
        Self::Details,
        Self::Contact,
        Self::Media,
        Self::Form,
        Self::Social,
        Self::Exit,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Search => "search",
            Self::Details => "details",
            Self::Contact => "contact",
            Self::Media => "media",
            Self::Form => "form",
            Self::Social => "social",
            Self::Exit => "exit",
        }
    }

    /// Interaction kinds that confirm a prediction of this category.
    pub fn expected_kinds(self) -> &'static [BehaviorKind] {
        match self {
            Self::Navigation | Self::Details | Self::Contact | Self::Media | Self::Social => {
                &[BehaviorKind::Click]
            }
            Self::Search | Self::Form => &[BehaviorKind::Focus, BehaviorKind::Key],
            Self::Exit => &[BehaviorKind::Move],
        }
    }
}

impl std::fmt::Display for BehaviorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked category with its probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub category: BehaviorCategory,
    /// Probability in `[0, 1]`.
    pub probability: f64,
}

impl Prediction {
    pub fn new(category: BehaviorCategory, probability: f64) -> Self {
        Self {
            category,
            probability,
        }
    }
}
