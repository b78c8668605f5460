//! Multiple-choice question generation backed by a chat-completion model.
//!
//! A run builds a prompt for the questions still missing, asks the model,
//! parses and normalizes the reply, and merges new questions by their
//! lowercased text. It repeats until the requested count is reached or the
//! attempt budget is spent, then shuffles the result.

mod difficulty;
mod model_client;
mod normalizer;
mod orchestrator;
mod parser;
mod prompt;

use std::sync::Arc;

use difficulty::difficulty_for;
#[cfg(test)]
pub(crate) use model_client::{ChatRequest, ModelClient};
pub(crate) use model_client::ModelError;
use model_client::OpenAiModelClient;
pub(crate) use normalizer::GeneratedQuestion;
pub(crate) use orchestrator::{GenerationError, QuestionGenerator};
pub(crate) use prompt::PromptVariant;

use crate::core::config::Settings;

impl QuestionGenerator {
    pub(crate) fn from_settings(settings: &Settings) -> Result<Self, ModelError> {
        let client = OpenAiModelClient::from_settings(settings.ai())?;
        Ok(Self::new(
            Arc::new(client),
            settings.generation().max_attempts,
            settings.ai().temperature,
        ))
    }

    /// Quantitative aptitude questions for a degree course.
    pub(crate) async fn generate_questions_for_course(
        &self,
        course: &str,
        count: usize,
    ) -> Result<Vec<GeneratedQuestion>, GenerationError> {
        self.generate(course, difficulty_for(course), count, PromptVariant::Course).await
    }

    /// Applied reasoning questions for a walk-in stream.
    pub(crate) async fn generate_questions_for_stream(
        &self,
        stream: &str,
        count: usize,
    ) -> Result<Vec<GeneratedQuestion>, GenerationError> {
        self.generate(stream, difficulty_for(stream), count, PromptVariant::Stream).await
    }
}
