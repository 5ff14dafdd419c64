//! Runtime services and shared state for symptom-triage.

use rand::{SeedableRng, rngs::StdRng};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use crate::{
    base::{
        config::Config,
        types::{AnswerSet, Res, TriageResult},
    },
    interaction::{record::handle_triage_record, session::TriageSession},
    service::{
        history::{HistoryClient, SymptomTrend, analyze_trends},
        questionnaire::QuestionnaireClient,
    },
    triage,
};

/// A finished evaluation and, when history is enabled, the pending write.
pub struct TriageOutcome {
    pub result: TriageResult,
    /// Awaiting this is optional; the result is final either way.
    pub recording: Option<JoinHandle<()>>,
}

/// Runtime service context that can be shared across the application.
///
/// This struct holds the configuration, questionnaire provider, and history sink.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The questionnaire provider.
    pub questionnaire: QuestionnaireClient,
    /// The history sink.
    pub history: HistoryClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        // Initialize the questionnaire.
        let questionnaire = QuestionnaireClient::builtin();

        // Initialize the history sink.
        let history = match &config.history_path {
            Some(path) => {
                info!("Using history file `{}`.", path);
                HistoryClient::file(path)
            }
            None => {
                debug!("No history path configured; keeping history in memory.");
                HistoryClient::memory()
            }
        };

        Ok(Self { config, questionnaire, history })
    }

    /// Evaluates answers for a category and hands the result to history.
    ///
    /// Answers are first checked against the questionnaire; unknown questions
    /// and illegal values are dropped (and logged) before classification.
    /// Must be called from within a tokio runtime when history is enabled.
    #[instrument(skip(self, answers))]
    pub fn triage(&self, category: &str, answers: &AnswerSet) -> TriageOutcome {
        let answers = self.questionnaire.validate(category, answers);
        let classification = triage::classify(category, &answers);

        match classification.rule {
            Some(rule) => debug!("Rule `{}` escalated to `{}`.", rule.id, classification.severity),
            None if classification.category.is_none() => debug!("Unknown category `{}`; using default templates.", category),
            None => debug!("No rule matched."),
        }

        let result = match self.config.supportive_message_seed {
            Some(seed) => triage::render(&classification, &answers, &mut StdRng::seed_from_u64(seed)),
            None => triage::render(&classification, &answers, &mut rand::thread_rng()),
        };

        info!("Triage for `{}` resolved to `{}`.", category, result.severity);

        let recording = self.config.history_enabled.then(|| handle_triage_record(category, &result, self.history.clone()));

        TriageOutcome { result, recording }
    }

    /// Parses `question=answer` pairs against the questionnaire.
    pub fn parse_answers<S>(&self, category: &str, pairs: &[S]) -> Res<AnswerSet>
    where
        S: AsRef<str>,
    {
        let mut answers = AnswerSet::new();

        for pair in pairs {
            let pair = pair.as_ref();
            let (question_id, input) = pair.split_once('=').ok_or_else(|| anyhow::anyhow!("Expected `question=answer`, got `{pair}`."))?;
            let question_id = question_id.trim();

            let value = self.questionnaire.parse_answer(category, question_id, input)?;
            answers.insert(question_id.to_string(), value);
        }

        Ok(answers)
    }

    /// Starts a question-by-question session for a category.
    pub fn session(&self, category: &str) -> TriageSession {
        TriageSession::new(category, self.questionnaire.clone())
    }

    /// Evaluates a fully answered session and hands the result to history.
    #[instrument(skip_all, fields(category = session.category()))]
    pub fn finish_session(&self, session: TriageSession) -> Res<TriageOutcome> {
        let category = session.category().to_string();

        let result = match self.config.supportive_message_seed {
            Some(seed) => session.finish(&mut StdRng::seed_from_u64(seed))?,
            None => session.finish(&mut rand::thread_rng())?,
        };

        info!("Session for `{}` resolved to `{}`.", category, result.severity);

        let recording = self.config.history_enabled.then(|| handle_triage_record(&category, &result, self.history.clone()));

        Ok(TriageOutcome { result, recording })
    }

    /// Trend analysis over everything in history.
    #[instrument(skip_all)]
    pub async fn trends(&self) -> Res<Vec<SymptomTrend>> {
        let entries = self.history.entries().await?;

        Ok(analyze_trends(&entries, self.config.trend_window))
    }
}

// Tests.
