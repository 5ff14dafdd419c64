//! Supportive message selection for non-safe outcomes.

use rand::{Rng, seq::SliceRandom};

use crate::base::messages::{MENTAL_HEALTH_MESSAGES, PHYSICAL_HEALTH_MESSAGES};

use super::category::SymptomCategory;

/// The pool a category draws from; unknown categories use the physical pool.
pub fn pool_for(category: Option<SymptomCategory>) -> &'static [&'static str] {
    match category {
        Some(SymptomCategory::MentalHealth) => MENTAL_HEALTH_MESSAGES,
        _ => PHYSICAL_HEALTH_MESSAGES,
    }
}

/// Picks one message uniformly at random from the category's pool.
pub fn supportive_message<R>(category: Option<SymptomCategory>, rng: &mut R) -> &'static str
where
    R: Rng + ?Sized,
{
    pool_for(category).choose(rng).copied().unwrap_or_default()
}

// Tests.
