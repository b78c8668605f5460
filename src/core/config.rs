mod parsing;
mod settings;
mod types;

pub(crate) use types::{AiProvider, AiSettings, GenerationSettings, Settings};
