pub(crate) mod question_generation;
pub(crate) mod scoring;
