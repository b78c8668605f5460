use std::fmt::Write as _;

use super::difficulty::DifficultyLevel;

/// Which question mix a prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PromptVariant {
    /// Quantitative aptitude for a degree course.
    Course,
    /// Applied and analytical reasoning for a walk-in stream.
    Stream,
}

impl PromptVariant {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::Stream => "stream",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PromptRequest<'a> {
    pub(crate) subject: &'a str,
    pub(crate) difficulty: DifficultyLevel,
    pub(crate) count: usize,
    pub(crate) avoid: &'a [String],
    pub(crate) variant: PromptVariant,
}

pub(crate) fn build_prompt(request: &PromptRequest<'_>) -> String {
    let mut prompt = String::new();

    match request.variant {
        PromptVariant::Course => {
            let _ = writeln!(
                prompt,
                "Generate {} quantitative aptitude questions for the course \"{}\".",
                request.count, request.subject
            );
            let _ = writeln!(prompt, "Difficulty should be {}.", request.difficulty);
            prompt.push_str(
                "Focus mainly on quantitative aptitude (percentages, ratios, \
                 time-speed-distance, algebra, number systems, probability, \
                 permutations/combinations, work/time, averages).\n",
            );
            prompt.push_str(
                "You may include a small number of reasoning questions, but avoid \
                 subject-specific technical questions.\n",
            );
        }
        PromptVariant::Stream => {
            let _ = writeln!(
                prompt,
                "Generate {} analytical and applied reasoning questions for the walk-in stream \"{}\".",
                request.count, request.subject
            );
            let _ = writeln!(prompt, "Difficulty should be {}.", request.difficulty);
            prompt.push_str(
                "Prioritize data and analytics scenarios (data interpretation, logical \
                 reasoning, real-world problem solving, metrics, business math, estimations) \
                 that a walk-in candidate should master.\n",
            );
        }
    }

    if !request.avoid.is_empty() {
        prompt.push_str("Avoid these exact question texts:\n");
        for text in request.avoid {
            let _ = writeln!(prompt, "- {text}");
        }
    }

    prompt.push_str(
        "Return ONLY a JSON array of objects with these exact keys:\n\
         question_text, option_a, option_b, option_c, option_d, correct_answer\n\
         Rules:\n\
         - correct_answer must be one of: A, B, C, D\n\
         - exactly 4 options, only one correct\n\
         - no markdown, no extra text\n",
    );

    match request.variant {
        PromptVariant::Course => prompt.push_str("- make questions different from each other\n"),
        PromptVariant::Stream => {
            prompt.push_str("- keep options concise and varied\n");
            prompt.push_str("- make questions different from each other\n");
        }
    }

    prompt
}
