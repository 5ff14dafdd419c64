//! The built-in question bank.

use std::sync::Arc;

use crate::{base::types::AnswerValue, triage::category::SymptomCategory};

use super::{AnswerOption, GenericQuestionnaire, Question, QuestionnaireClient};

// Extra methods on `QuestionnaireClient` applied by the built-in implementation.

impl QuestionnaireClient {
    pub fn builtin() -> Self {
        Self { inner: Arc::new(BuiltinQuestionnaire) }
    }
}

// Specific implementations.

/// Questionnaire backed by static tables compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinQuestionnaire;

impl GenericQuestionnaire for BuiltinQuestionnaire {
    fn symptoms(&self) -> &[SymptomCategory] {
        &SymptomCategory::ALL
    }

    fn questions_for(&self, category: &str) -> &[Question] {
        let Some(category) = SymptomCategory::from_id(category) else {
            return &[];
        };

        match category {
            SymptomCategory::Fever => FEVER,
            SymptomCategory::Cough => COUGH,
            SymptomCategory::SoreThroat => SORE_THROAT,
            SymptomCategory::Headache => HEADACHE,
            SymptomCategory::StomachPain => STOMACH_PAIN,
            SymptomCategory::ChestPain => CHEST_PAIN,
            SymptomCategory::Rash => RASH,
            SymptomCategory::Injury => INJURY,
            SymptomCategory::MentalHealth => MENTAL_HEALTH,
        }
    }
}

// Helpers.

/// An option whose value is its own id.
const fn choice(id: &'static str, label: &'static str, emoji: &'static str) -> AnswerOption {
    AnswerOption {
        id,
        label,
        emoji,
        value: AnswerValue::text(id),
    }
}

/// An option carrying a yes/no flag.
const fn flag(id: &'static str, label: &'static str, emoji: &'static str, value: bool) -> AnswerOption {
    AnswerOption {
        id,
        label,
        emoji,
        value: AnswerValue::Flag(value),
    }
}

// Tables.

static FEVER: &[Question] = &[
    Question {
        id: "fever-temp",
        prompt: "How high is your temperature? 🌡️",
        options: &[
            choice("low", "Just a bit warm (up to 100°F/38°C)", "🙂"),
            choice("medium", "Quite hot (100-102°F/38-39°C)", "😓"),
            choice("high", "Very high (103°F/39.5°C or higher)", "🥵"),
            choice("unknown", "I haven't checked", "🤷"),
        ],
    },
    Question {
        id: "fever-duration",
        prompt: "How long have you had this fever? ⏱️",
        options: &[
            choice("short", "Less than a day", "🕐"),
            choice("medium", "1-3 days", "📅"),
            choice("long", "More than 3 days", "📆"),
        ],
    },
    Question {
        id: "fever-other-symptoms",
        prompt: "Any other concerning symptoms? 🧐",
        options: &[
            choice("none", "No other major symptoms", "👍"),
            choice("mild", "Mild cough/sore throat", "😕"),
            choice("rash", "Unusual rash", "🫨"),
            choice("severe", "Severe headache or stiff neck", "😣"),
        ],
    },
];

static COUGH: &[Question] = &[
    Question {
        id: "cough-type",
        prompt: "What kind of cough is it? 🤔",
        options: &[
            choice("dry", "Dry and tickly", "😮‍💨"),
            choice("productive", "Producing mucus/phlegm", "🤧"),
            choice("severe", "Severe/barking/wheezing", "😰"),
        ],
    },
    Question {
        id: "cough-duration",
        prompt: "How long have you been coughing? ⏱️",
        options: &[
            choice("short", "Just started (less than 3 days)", "🕐"),
            choice("medium", "Several days to a week", "📅"),
            choice("long", "More than a week", "📆"),
        ],
    },
    Question {
        id: "cough-breathing",
        prompt: "Any trouble with breathing? 💨",
        options: &[
            choice("none", "Breathing normally", "😌"),
            choice("mild", "Slightly harder to breathe", "😕"),
            choice("severe", "Difficult to breathe", "😰"),
        ],
    },
];

static CHEST_PAIN: &[Question] = &[
    Question {
        id: "chest-pain-type",
        prompt: "How would you describe the pain? 💭",
        options: &[
            choice("sharp", "Sharp and stabbing", "🔪"),
            choice("pressure", "Pressure or squeezing", "✊"),
            choice("burning", "Burning sensation", "🔥"),
            choice("mild", "Mild discomfort", "😕"),
        ],
    },
    Question {
        id: "chest-pain-duration",
        prompt: "How long has it been hurting? ⏱️",
        options: &[
            choice("minutes", "Just minutes", "⏱️"),
            choice("hours", "Hours", "🕐"),
            choice("days", "Days", "📅"),
        ],
    },
    Question {
        id: "chest-pain-breathing",
        prompt: "Any trouble breathing with the pain? 😮‍💨",
        options: &[flag("none", "Breathing normally", "😌", false), flag("yes", "Yes, hard to breathe", "😰", true)],
    },
    Question {
        id: "chest-pain-radiation",
        prompt: "Does the pain spread to your arm, jaw, or back? 🤔",
        options: &[flag("no", "No, just in my chest", "👍", false), flag("yes", "Yes, it spreads", "😨", true)],
    },
];

static HEADACHE: &[Question] = &[
    Question {
        id: "headache-severity",
        prompt: "How bad is your headache? 😵",
        options: &[
            choice("mild", "Mild annoyance", "🙂"),
            choice("moderate", "Moderately painful", "😣"),
            choice("severe", "Severe/worst ever", "😫"),
        ],
    },
    Question {
        id: "headache-duration",
        prompt: "How long has it been hurting? ⏱️",
        options: &[
            choice("hours", "Hours", "🕐"),
            choice("days", "Days", "📅"),
            choice("week", "A week or more", "📆"),
        ],
    },
    Question {
        id: "headache-other-symptoms",
        prompt: "Any other symptoms with your headache? 🤔",
        options: &[
            choice("none", "Just the headache", "👍"),
            choice("nausea", "Nausea or vomiting", "🤢"),
            choice("vision", "Vision changes", "👁️"),
            choice("neck", "Stiff neck", "😖"),
        ],
    },
    Question {
        id: "headache-injury",
        prompt: "Any recent head injury? 🩹",
        options: &[flag("no", "No injury", "👍", false), flag("yes", "Yes, I hit my head", "💥", true)],
    },
];

static SORE_THROAT: &[Question] = &[
    Question {
        id: "sore-throat-severity",
        prompt: "How sore is your throat? 😣",
        options: &[
            choice("mild", "Mildly scratchy", "🙂"),
            choice("moderate", "Quite painful", "😣"),
            choice("severe", "Severe pain when swallowing", "😫"),
        ],
    },
    Question {
        id: "sore-throat-duration",
        prompt: "How long has it been sore? ⏱️",
        options: &[
            choice("short", "1-2 days", "🕐"),
            choice("medium", "3-5 days", "📅"),
            choice("long", "More than 5 days", "📆"),
        ],
    },
    Question {
        id: "sore-throat-other-symptoms",
        prompt: "Any other symptoms? 🤔",
        options: &[
            choice("none", "Just the sore throat", "👍"),
            choice("cold", "Runny nose/sneezing", "🤧"),
            choice("fever", "Fever", "🤒"),
            choice("spots", "White spots in throat", "👀"),
        ],
    },
];

static STOMACH_PAIN: &[Question] = &[
    Question {
        id: "stomach-pain-location",
        prompt: "Where exactly is the pain? 🤔",
        options: &[
            choice("general", "All over abdomen", "⭕"),
            choice("upper", "Upper abdomen", "⬆️"),
            choice("lower", "Lower abdomen", "⬇️"),
            choice("right", "Lower right side", "↘️"),
        ],
    },
    Question {
        id: "stomach-pain-severity",
        prompt: "How bad is the pain? 😣",
        options: &[
            choice("mild", "Mild discomfort", "🙂"),
            choice("moderate", "Moderate pain", "😣"),
            choice("severe", "Severe pain", "😫"),
        ],
    },
    Question {
        id: "stomach-pain-other-symptoms",
        prompt: "Any other symptoms? 🤔",
        options: &[
            choice("none", "Just the pain", "👍"),
            choice("nausea", "Nausea or vomiting", "🤢"),
            choice("diarrhea", "Diarrhea", "💨"),
            choice("fever", "Fever", "🤒"),
        ],
    },
];

static RASH: &[Question] = &[
    Question {
        id: "rash-appearance",
        prompt: "What does the rash look like? 👀",
        options: &[
            choice("red", "Flat red patches", "🟥"),
            choice("bumps", "Raised bumps", "🔴"),
            choice("blisters", "Blisters or pus-filled spots", "💧"),
            choice("hives", "Hives or welts", "🫨"),
        ],
    },
    Question {
        id: "rash-itching",
        prompt: "Is it itchy? 🤔",
        options: &[
            choice("none", "Not itchy at all", "👍"),
            choice("mild", "Mildly itchy", "🙂"),
            choice("severe", "Extremely itchy", "😫"),
        ],
    },
    Question {
        id: "rash-spreading",
        prompt: "Is the rash spreading? 👀",
        options: &[flag("no", "No, staying in one area", "👍", false), flag("yes", "Yes, it's spreading", "😨", true)],
    },
    Question {
        id: "rash-other-symptoms",
        prompt: "Any other symptoms? 🤔",
        options: &[
            choice("none", "Just the rash", "👍"),
            choice("fever", "Fever", "🤒"),
            choice("breathing", "Difficulty breathing", "😰"),
            choice("swelling", "Facial swelling", "😵"),
        ],
    },
];

static INJURY: &[Question] = &[
    Question {
        id: "injury-type",
        prompt: "What kind of injury is it? 🤔",
        options: &[
            choice("cut", "Cut or scrape", "✂️"),
            choice("burn", "Burn", "🔥"),
            choice("sprain", "Sprain or strain", "🤕"),
            choice("suspected-break", "Possible broken bone", "😨"),
            choice("head", "Head injury", "💥"),
        ],
    },
    Question {
        id: "injury-severity",
        prompt: "How severe is it? 😣",
        options: &[
            choice("mild", "Mild - minor pain/bleeding", "🙂"),
            choice("moderate", "Moderate - quite painful", "😣"),
            choice("severe", "Severe - extreme pain/bleeding", "😫"),
        ],
    },
    Question {
        id: "injury-other-symptoms",
        prompt: "Any concerning symptoms? 🤔",
        options: &[
            choice("none", "No other symptoms", "👍"),
            choice("dizziness", "Dizziness", "😵"),
            choice("nausea", "Nausea or vomiting", "🤢"),
            choice("numbness", "Numbness or tingling", "🥴"),
        ],
    },
];

static MENTAL_HEALTH: &[Question] = &[
    Question {
        id: "mental-health-mood",
        prompt: "How has your mood been lately? 💭",
        options: &[
            choice("good", "Pretty good", "😊"),
            choice("okay", "Up and down, but okay", "🙂"),
            choice("low", "Low or flat", "😔"),
            choice("very-low", "Very low, hard to get through the day", "😞"),
        ],
    },
    Question {
        id: "mental-health-anxiety",
        prompt: "How often do you feel anxious or on edge? 😟",
        options: &[
            choice("rarely", "Rarely", "😌"),
            choice("sometimes", "Sometimes", "😕"),
            choice("often", "Most days", "😰"),
        ],
    },
    Question {
        id: "mental-health-sleep",
        prompt: "How is your sleep? 😴",
        options: &[
            choice("normal", "Sleeping fine", "🛌"),
            choice("some", "A few rough nights", "🥱"),
            choice("significant", "Barely sleeping or sleeping all the time", "😵"),
        ],
    },
    Question {
        id: "mental-health-duration",
        prompt: "How long have you been feeling this way? ⏱️",
        options: &[
            choice("days", "A few days", "🕐"),
            choice("weeks", "A couple of weeks", "📅"),
            choice("months", "A month or longer", "📆"),
        ],
    },
    Question {
        id: "mental-health-thoughts",
        prompt: "Have you had thoughts of hurting yourself? 💬",
        options: &[choice("no", "No", "👍"), choice("yes", "Yes", "🫂")],
    },
];
