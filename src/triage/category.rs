//! The closed set of symptom categories a user can pick from.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::base::types::Err;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymptomCategory {
    Fever,
    Cough,
    SoreThroat,
    Headache,
    StomachPain,
    ChestPain,
    Rash,
    Injury,
    MentalHealth,
}

impl SymptomCategory {
    /// Every category, in the order they are offered to the user.
    pub const ALL: [SymptomCategory; 9] = [
        SymptomCategory::Fever,
        SymptomCategory::Cough,
        SymptomCategory::SoreThroat,
        SymptomCategory::Headache,
        SymptomCategory::StomachPain,
        SymptomCategory::ChestPain,
        SymptomCategory::Rash,
        SymptomCategory::Injury,
        SymptomCategory::MentalHealth,
    ];

    /// Parses a boundary identifier; `None` for anything outside the closed set.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.id() == id)
    }

    pub fn id(&self) -> &'static str {
        match self {
            SymptomCategory::Fever => "fever",
            SymptomCategory::Cough => "cough",
            SymptomCategory::SoreThroat => "sore-throat",
            SymptomCategory::Headache => "headache",
            SymptomCategory::StomachPain => "stomach-pain",
            SymptomCategory::ChestPain => "chest-pain",
            SymptomCategory::Rash => "rash",
            SymptomCategory::Injury => "injury",
            SymptomCategory::MentalHealth => "mental-health",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SymptomCategory::Fever => "Fever",
            SymptomCategory::Cough => "Cough",
            SymptomCategory::SoreThroat => "Sore Throat",
            SymptomCategory::Headache => "Headache",
            SymptomCategory::StomachPain => "Stomach Pain",
            SymptomCategory::ChestPain => "Chest Pain",
            SymptomCategory::Rash => "Rash",
            SymptomCategory::Injury => "Injury",
            SymptomCategory::MentalHealth => "Mental Health",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            SymptomCategory::Fever => "🤒",
            SymptomCategory::Cough => "😷",
            SymptomCategory::SoreThroat => "😣",
            SymptomCategory::Headache => "🤕",
            SymptomCategory::StomachPain => "😖",
            SymptomCategory::ChestPain => "💔",
            SymptomCategory::Rash => "🫨",
            SymptomCategory::Injury => "🩹",
            SymptomCategory::MentalHealth => "🧠",
        }
    }

    /// One-line prompt shown next to the category name.
    pub fn blurb(&self) -> &'static str {
        match self {
            SymptomCategory::Fever => "Feeling hot or chilly?",
            SymptomCategory::Cough => "Dry, productive, or persistent?",
            SymptomCategory::SoreThroat => "Pain or difficulty swallowing?",
            SymptomCategory::Headache => "Dull, sharp, or pulsating?",
            SymptomCategory::StomachPain => "Cramps, sharp pain, or general discomfort?",
            SymptomCategory::ChestPain => "Pressure, tightness, or sharp pain?",
            SymptomCategory::Rash => "Itchy, raised, or spreading?",
            SymptomCategory::Injury => "Cuts, sprains, or possible breaks?",
            SymptomCategory::MentalHealth => "Feeling low, anxious, or overwhelmed?",
        }
    }
}

impl fmt::Display for SymptomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

impl FromStr for SymptomCategory {
    type Err = Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| anyhow::anyhow!("Unknown symptom category: `{s}`."))
    }
}

// Tests.
