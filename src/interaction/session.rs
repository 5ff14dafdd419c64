//! Linear question-by-question triage flow.
//!
//! A session walks the questions for one category in order, collecting one
//! answer per step, and runs the evaluator exactly once when consumed by
//! [`TriageSession::finish`].

use rand::Rng;
use tracing::debug;

use crate::{
    base::types::{AnswerSet, Res, TriageResult},
    service::questionnaire::{Question, QuestionnaireClient},
    triage,
};

/// What happened after an answer was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// More questions remain.
    Next,
    /// Every question has been answered; call `finish`.
    Complete,
}

pub struct TriageSession {
    category: String,
    questionnaire: QuestionnaireClient,
    index: usize,
    answers: AnswerSet,
}

impl TriageSession {
    pub fn new(category: impl Into<String>, questionnaire: QuestionnaireClient) -> Self {
        Self {
            category: category.into(),
            questionnaire,
            index: 0,
            answers: AnswerSet::new(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Answered and total question counts.
    pub fn position(&self) -> (usize, usize) {
        (self.index, self.questions().len())
    }

    /// The question awaiting an answer; `None` once complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions().get(self.index)
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.questions().len()
    }

    /// Resolves input against the current question's options and advances.
    pub fn answer(&mut self, input: &str) -> Res<Progress> {
        let question = self
            .current_question()
            .ok_or_else(|| anyhow::anyhow!("Every question for `{}` has already been answered.", self.category))?;

        let value = self.questionnaire.parse_answer(&self.category, question.id, input)?;
        let question_id = question.id;

        debug!("Answered `{}` with `{}`.", question_id, value);

        self.answers.insert(question_id, value);
        self.index += 1;

        Ok(if self.is_complete() { Progress::Complete } else { Progress::Next })
    }

    /// Consumes the session and evaluates the collected answers.
    pub fn finish<R>(self, rng: &mut R) -> Res<TriageResult>
    where
        R: Rng + ?Sized,
    {
        if !self.is_complete() {
            let (answered, total) = self.position();
            return Err(anyhow::anyhow!("Only {answered} of {total} questions for `{}` have been answered.", self.category));
        }

        Ok(triage::evaluate_with_rng(&self.category, &self.answers, rng))
    }

    fn questions(&self) -> &[Question] {
        self.questionnaire.questions_for(&self.category)
    }
}

// Tests.
