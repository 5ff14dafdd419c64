//! Outcome templates keyed by symptom category and severity.
//!
//! Each tier carries a default template that covers unknown categories and
//! any known category without a specific entry. A handful of explanations
//! branch on a single answer.

use crate::base::types::{AnswerSet, Severity, TriageResult};

use super::category::SymptomCategory;

const URGENT_TITLE: &str = "Please seek urgent medical care";
const URGENT_EMOJI: &str = "🚨";
const CAUTION_TITLE: &str = "Best to call a doctor soon";
const CAUTION_EMOJI: &str = "⚠️";
const SAFE_TITLE: &str = "You're probably okay";
const SAFE_EMOJI: &str = "✅";

/// Static text bundle for one (category, severity) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub severity: Severity,
    pub title: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub explanation: &'static str,
    pub suspected_condition: Option<&'static str>,
}

impl Outcome {
    const fn urgent(description: &'static str, explanation: &'static str) -> Self {
        Self {
            severity: Severity::Urgent,
            title: URGENT_TITLE,
            emoji: URGENT_EMOJI,
            description,
            explanation,
            suspected_condition: None,
        }
    }

    const fn caution(description: &'static str, explanation: &'static str) -> Self {
        Self {
            severity: Severity::Caution,
            title: CAUTION_TITLE,
            emoji: CAUTION_EMOJI,
            description,
            explanation,
            suspected_condition: None,
        }
    }

    const fn safe(description: &'static str, explanation: &'static str) -> Self {
        Self {
            severity: Severity::Safe,
            title: SAFE_TITLE,
            emoji: SAFE_EMOJI,
            description,
            explanation,
            suspected_condition: None,
        }
    }

    const fn suspecting(mut self, condition: &'static str) -> Self {
        self.suspected_condition = Some(condition);
        self
    }

    const fn titled(mut self, title: &'static str, emoji: &'static str) -> Self {
        self.title = title;
        self.emoji = emoji;
        self
    }

    /// Materializes the template into an owned result.
    pub fn into_result(self, supportive_message: Option<String>) -> TriageResult {
        TriageResult {
            severity: self.severity,
            title: self.title.to_string(),
            emoji: self.emoji.to_string(),
            description: self.description.to_string(),
            explanation: self.explanation.to_string(),
            suspected_condition: self.suspected_condition.map(str::to_string),
            supportive_message,
        }
    }
}

pub const DEFAULT_URGENT: Outcome = Outcome::urgent(
    "Your symptoms need immediate attention.",
    "Based on what you've described, these symptoms could indicate something serious that needs immediate evaluation. Better to be safe!",
);

pub const DEFAULT_CAUTION: Outcome = Outcome::caution(
    "Your symptoms should be evaluated.",
    "Based on what you've told me, it would be a good idea to have a healthcare provider take a look at this in the next day or so. Better to be cautious!",
);

pub const DEFAULT_SAFE: Outcome = Outcome::safe(
    "Rest and monitor your symptoms.",
    "Based on what you've shared, your symptoms seem mild and can typically be managed at home with rest and self-care. If things change or worsen, don't hesitate to check back in!",
);

/// The default template for a tier.
pub fn default_outcome(severity: Severity) -> Outcome {
    match severity {
        Severity::Urgent => DEFAULT_URGENT,
        Severity::Caution => DEFAULT_CAUTION,
        Severity::Safe => DEFAULT_SAFE,
    }
}

/// Resolves the template for a category (`None` when unknown) at a tier.
pub fn outcome_for(category: Option<SymptomCategory>, severity: Severity, answers: &AnswerSet) -> Outcome {
    let Some(category) = category else {
        return default_outcome(severity);
    };

    match severity {
        Severity::Urgent => urgent_outcome(category, answers),
        Severity::Caution => caution_outcome(category, answers),
        Severity::Safe => safe_outcome(category),
    }
}

fn urgent_outcome(category: SymptomCategory, answers: &AnswerSet) -> Outcome {
    use SymptomCategory::*;

    match category {
        ChestPain => Outcome::urgent(
            "These chest pain symptoms need immediate attention.",
            "Chest pain with breathing difficulty or that radiates to your arm, jaw, or back could be signs of a serious heart condition. It's best to get this checked right away, honey!",
        )
        .suspecting("Possible heart-related condition"),
        Headache => Outcome::urgent(
            "Your headache symptoms need immediate attention.",
            if answers.is_set("headache-injury") {
                "Head injuries with nausea or vomiting could indicate something serious. Better safe than sorry, let's get this checked now!"
            } else {
                "Severe headache with a stiff neck could indicate a serious condition like meningitis. Please don't wait to get help!"
            },
        ),
        Fever => Outcome::urgent(
            "Your fever requires immediate medical attention.",
            "High fevers or fevers with severe headache or stiff neck can be signs of serious infections. Trust me, this isn't something to wait on!",
        ),
        Injury => Outcome::urgent(
            "Your injury needs immediate attention.",
            if answers.is("injury-type", "head") {
                "Head injuries with symptoms like dizziness or nausea need immediate evaluation. This isn't something to mess around with!"
            } else {
                "Severe injuries or possible broken bones need proper medical care. Let's get you fixed up properly!"
            },
        ),
        Rash => Outcome::urgent(
            "Your rash symptoms need immediate attention.",
            "A rash with breathing difficulties or facial swelling could indicate a severe allergic reaction. This requires immediate medical attention!",
        )
        .suspecting("Possible severe allergic reaction"),
        MentalHealth => Outcome::urgent(
            "What you're feeling deserves support right now.",
            "Thoughts of hurting yourself, or feeling very low for weeks at a time, are signs that you deserve help today. Please contact a crisis line, emergency services, or someone you trust right now. You don't have to face this alone.",
        )
        .titled("Please reach out for support right now", "🆘")
        .suspecting("Possible severe depression or crisis"),
        Cough | SoreThroat | StomachPain => DEFAULT_URGENT,
    }
}

fn caution_outcome(category: SymptomCategory, answers: &AnswerSet) -> Outcome {
    use SymptomCategory::*;

    match category {
        ChestPain => Outcome::caution(
            "Your chest pain should be evaluated by a healthcare provider.",
            "While this doesn't seem immediately life-threatening, chest pain should always be checked out. Try to get an appointment in the next day or so!",
        )
        .suspecting("Possible muscle or lung irritation"),
        Headache => Outcome::caution(
            "Your headache should be evaluated.",
            "Severe or prolonged headaches, especially with vision changes, should be checked by a doctor. Let's not take chances with your noggin!",
        ),
        Fever => Outcome::caution(
            "Your fever should be evaluated.",
            "A moderate fever that's lasted for several days or comes with a rash should be checked out. Your body is telling you something!",
        ),
        SoreThroat => Outcome::caution(
            "Your sore throat should be evaluated.",
            "A severe or prolonged sore throat, especially with white spots, could be strep throat or another infection that needs treatment. Time to get this looked at!",
        )
        .suspecting("Possible strep throat"),
        Cough => Outcome::caution(
            "Your cough should be evaluated.",
            "A cough with breathing difficulties or one that's productive and lasting a long time should be checked out. Let's make sure your lungs are happy!",
        ),
        StomachPain => Outcome::caution(
            "Your stomach pain should be evaluated.",
            if answers.is("stomach-pain-location", "right") {
                "Pain in the lower right abdomen could potentially be appendicitis or another condition requiring attention. This needs a professional opinion!"
            } else {
                "Severe abdominal pain or pain with fever should be evaluated by a healthcare provider. Your tummy deserves some professional care!"
            },
        ),
        Rash => Outcome::caution(
            "Your rash should be evaluated.",
            "A spreading rash or one accompanied by fever could indicate an infection or other condition that needs treatment. Let's get those spots checked out!",
        ),
        Injury => Outcome::caution(
            "Your injury should be evaluated.",
            "Moderate injuries, burns, or injuries with numbness should be properly assessed. No need to tough this one out alone!",
        ),
        MentalHealth => Outcome::caution(
            "Your wellbeing deserves some extra care.",
            "Frequent anxiety, disrupted sleep, or a low mood that keeps hanging around are worth talking through with a doctor or counselor. Reaching out early can make a real difference!",
        )
        .titled("It may help to talk to someone soon", "💛")
        .suspecting("Possible anxiety or mild depression"),
    }
}

fn safe_outcome(category: SymptomCategory) -> Outcome {
    use SymptomCategory::*;

    match category {
        ChestPain => Outcome::safe(
            "Monitor your symptoms at home.",
            "Mild chest discomfort without other concerning symptoms can often be due to muscle strain or mild heartburn. Rest and take it easy, but if anything changes, don't hesitate to reach out for help!",
        )
        .suspecting("Likely muscle strain or mild indigestion"),
        Headache => Outcome::safe(
            "Rest and monitor your symptoms.",
            "Mild to moderate headaches without other symptoms are often due to tension, dehydration, or lack of sleep. Try drinking water, resting in a dark room, and taking over-the-counter pain relievers if needed!",
        ),
        Fever => Outcome::safe(
            "Rest, hydrate, and monitor your symptoms.",
            "Low-grade fevers of short duration are often part of your body fighting off a minor infection. Rest, drink plenty of fluids, and use fever reducers if needed. You've got this!",
        ),
        SoreThroat => Outcome::safe(
            "Rest your voice and stay hydrated.",
            "Mild to moderate sore throats without other concerning symptoms are often viral and resolve on their own. Warm tea with honey, throat lozenges, and rest can help you feel better!",
        ),
        Cough => Outcome::safe(
            "Rest and monitor your symptoms.",
            "Mild coughs without breathing difficulties are often due to minor irritations or viruses. Stay hydrated, use cough drops if needed, and get plenty of rest. Your body knows what to do!",
        ),
        StomachPain => Outcome::safe(
            "Rest your digestive system.",
            "Mild abdominal discomfort without other concerning symptoms is often due to gas, indigestion, or minor stomach bugs. Try a bland diet, stay hydrated, and let your tummy settle down!",
        ),
        Rash => Outcome::safe(
            "Monitor your rash for changes.",
            "Mild, non-spreading rashes without other symptoms are often due to minor irritations or allergies. Keep the area clean, avoid scratching, and try over-the-counter anti-itch cream if needed!",
        ),
        Injury => Outcome::safe(
            "Rest and care for your injury at home.",
            "Minor cuts, scrapes, or strains can typically be managed at home. Clean wounds with soap and water, apply antibiotic ointment and bandages. For strains, remember RICE: Rest, Ice, Compression, and Elevation!",
        ),
        MentalHealth => Outcome::safe(
            "Keep looking after yourself.",
            "It sounds like you're managing things right now. Keep up the routines that help you feel grounded: sleep, movement, and time with people you trust. Check back in whenever you need to!",
        )
        .titled("You seem to be doing okay", "🌱"),
    }
}

// Tests.
