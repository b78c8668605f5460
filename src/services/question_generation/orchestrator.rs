use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::difficulty::DifficultyLevel;
use super::model_client::{ChatMessage, ChatRequest, ModelClient, ModelError};
use super::normalizer::{normalize_question, GeneratedQuestion};
use super::parser::{parse_question_array, ParseError};
use super::prompt::{build_prompt, PromptRequest, PromptVariant};
use crate::core::metrics::{
    GENERATION_CALLS_TOTAL, GENERATION_FAILURES_TOTAL, GENERATION_MODEL_CALLS_TOTAL,
    GENERATION_SHORTFALL_TOTAL,
};

pub(crate) const SYSTEM_INSTRUCTION: &str =
    "You generate aptitude questions and output strict JSON only.";

#[derive(Debug, Error)]
pub(crate) enum GenerationError {
    #[error("subject must not be empty")]
    InvalidSubject,
    #[error("model returned no valid questions")]
    EmptyBatch,
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl GenerationError {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::InvalidSubject => "invalid_subject",
            Self::EmptyBatch => "empty_batch",
            Self::Parse(_) => "parse",
            Self::Model(_) => "model",
        }
    }
}

/// Questions accepted so far in one run, in first-seen order.
#[derive(Debug, Default)]
struct Accepted {
    questions: Vec<GeneratedQuestion>,
    keys: HashSet<String>,
}

impl Accepted {
    fn len(&self) -> usize {
        self.questions.len()
    }

    fn insert(&mut self, question: GeneratedQuestion) -> bool {
        if !self.keys.insert(question.dedup_key()) {
            return false;
        }
        self.questions.push(question);
        true
    }

    fn texts(&self) -> Vec<String> {
        self.questions.iter().map(|question| question.question_text.clone()).collect()
    }
}

/// Drives the model until enough distinct questions are collected or the
/// attempt budget runs out. Holds no state between runs.
#[derive(Clone)]
pub(crate) struct QuestionGenerator {
    client: Arc<dyn ModelClient>,
    max_attempts: u32,
    temperature: f32,
}

impl QuestionGenerator {
    pub(crate) fn new(client: Arc<dyn ModelClient>, max_attempts: u32, temperature: f32) -> Self {
        Self { client, max_attempts: max_attempts.max(1), temperature }
    }

    pub(crate) fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns at most `requested_count` distinct questions in random order.
    /// A shortfall after the attempt budget is a success; a batch with no
    /// valid questions aborts the run.
    pub(crate) async fn generate(
        &self,
        subject: &str,
        difficulty: DifficultyLevel,
        requested_count: usize,
        variant: PromptVariant,
    ) -> Result<Vec<GeneratedQuestion>, GenerationError> {
        let mut questions = self.collect(subject, difficulty, requested_count, variant).await?;
        let mut rng = rand::thread_rng();
        shuffle_questions(&mut questions, &mut rng);
        Ok(questions)
    }

    /// The generation loop without the final shuffle.
    pub(crate) async fn collect(
        &self,
        subject: &str,
        difficulty: DifficultyLevel,
        requested_count: usize,
        variant: PromptVariant,
    ) -> Result<Vec<GeneratedQuestion>, GenerationError> {
        metrics::counter!(GENERATION_CALLS_TOTAL, "variant" => variant.as_str()).increment(1);

        let result = self.run_attempts(subject, difficulty, requested_count, variant).await;
        match &result {
            Ok(questions) if questions.len() < requested_count => {
                metrics::counter!(GENERATION_SHORTFALL_TOTAL).increment(1);
                tracing::warn!(
                    subject = subject.trim(),
                    requested = requested_count,
                    generated = questions.len(),
                    "Question generation finished short of the requested count"
                );
            }
            Ok(questions) => {
                tracing::info!(
                    subject = subject.trim(),
                    generated = questions.len(),
                    "Question generation finished"
                );
            }
            Err(err) => {
                metrics::counter!(GENERATION_FAILURES_TOTAL, "kind" => err.kind()).increment(1);
                tracing::error!(subject = subject.trim(), error = %err, "Question generation failed");
            }
        }
        result
    }

    async fn run_attempts(
        &self,
        subject: &str,
        difficulty: DifficultyLevel,
        requested_count: usize,
        variant: PromptVariant,
    ) -> Result<Vec<GeneratedQuestion>, GenerationError> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(GenerationError::InvalidSubject);
        }

        let mut accepted = Accepted::default();
        let mut attempt = 0;

        while accepted.len() < requested_count && attempt < self.max_attempts {
            attempt += 1;
            let remaining = requested_count - accepted.len();
            let avoid = accepted.texts();

            let batch =
                self.request_batch(subject, difficulty, remaining, &avoid, variant).await?;
            if batch.is_empty() {
                return Err(GenerationError::EmptyBatch);
            }

            let batch_size = batch.len();
            let mut added = 0;
            for question in batch {
                if accepted.insert(question) {
                    added += 1;
                }
            }

            tracing::debug!(
                subject,
                attempt,
                remaining,
                batch_size,
                added,
                accepted = accepted.len(),
                "Question batch merged"
            );
        }

        let mut questions = accepted.questions;
        questions.truncate(requested_count);
        Ok(questions)
    }

    async fn request_batch(
        &self,
        subject: &str,
        difficulty: DifficultyLevel,
        count: usize,
        avoid: &[String],
        variant: PromptVariant,
    ) -> Result<Vec<GeneratedQuestion>, GenerationError> {
        let prompt = build_prompt(&PromptRequest { subject, difficulty, count, avoid, variant });
        let request = ChatRequest {
            messages: vec![ChatMessage::system(SYSTEM_INSTRUCTION), ChatMessage::user(prompt)],
            temperature: self.temperature,
        };

        metrics::counter!(GENERATION_MODEL_CALLS_TOTAL).increment(1);
        let content = self.client.complete(request).await?;

        let raw_items = parse_question_array(&content)?;
        Ok(raw_items.iter().filter_map(normalize_question).collect())
    }
}

/// Uniform in-place shuffle (Fisher-Yates).
pub(crate) fn shuffle_questions<R: Rng + ?Sized>(questions: &mut [GeneratedQuestion], rng: &mut R) {
    questions.shuffle(rng);
}
