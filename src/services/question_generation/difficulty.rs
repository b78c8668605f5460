use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a course or stream name to a difficulty by case-insensitive substring,
/// checked in order: `mtech`, then `mca`/`btech`, then `bca`/`bsc`.
pub(crate) fn difficulty_for(subject: &str) -> DifficultyLevel {
    let subject = subject.to_lowercase();

    if subject.contains("mtech") {
        DifficultyLevel::Hard
    } else if subject.contains("mca") || subject.contains("btech") {
        DifficultyLevel::Medium
    } else if subject.contains("bca") || subject.contains("bsc") {
        DifficultyLevel::Easy
    } else {
        DifficultyLevel::Medium
    }
}
