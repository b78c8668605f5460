use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub(crate) enum ResultStatus {
    Pass,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ScoreOutcome {
    pub(crate) correct: u32,
    pub(crate) total: u32,
    pub(crate) score_percent: f64,
    pub(crate) cutoff_percentage: f64,
    pub(crate) result_status: ResultStatus,
}

impl ScoreOutcome {
    /// `"correct/total"`, as shown on the result card.
    pub(crate) fn total_marks(&self) -> String {
        format!("{}/{}", self.correct, self.total)
    }
}

/// Pass iff the percentage of correct answers reaches the cutoff.
/// An exam without questions scores 0%.
pub(crate) fn evaluate(correct: u32, total: u32, cutoff_percentage: f64) -> ScoreOutcome {
    let raw_percent =
        if total == 0 { 0.0 } else { f64::from(correct) / f64::from(total) * 100.0 };

    let result_status =
        if raw_percent >= cutoff_percentage { ResultStatus::Pass } else { ResultStatus::Fail };

    // Rounded for display only; the verdict uses the exact ratio.
    let score_percent = (raw_percent * 100.0).round() / 100.0;

    ScoreOutcome { correct, total, score_percent, cutoff_percentage, result_status }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeting_the_cutoff_passes() {
        let outcome = evaluate(6, 10, 60.0);
        assert_eq!(outcome.result_status, ResultStatus::Pass);
        assert_eq!(outcome.score_percent, 60.0);
        assert_eq!(outcome.total_marks(), "6/10");
    }

    #[test]
    fn below_cutoff_fails() {
        let outcome = evaluate(5, 10, 60.0);
        assert_eq!(outcome.result_status, ResultStatus::Fail);
    }

    #[test]
    fn percentages_are_rounded_to_two_places() {
        assert_eq!(evaluate(1, 3, 0.0).score_percent, 33.33);
        assert_eq!(evaluate(2, 3, 0.0).score_percent, 66.67);
    }

    #[test]
    fn verdict_uses_unrounded_percentage() {
        // 2/3 is 66.666..%, displayed as 66.67 but still short of a 66.67 cutoff.
        let outcome = evaluate(2, 3, 66.67);
        assert_eq!(outcome.score_percent, 66.67);
        assert_eq!(outcome.result_status, ResultStatus::Fail);
    }

    #[test]
    fn zero_questions_scores_zero() {
        assert_eq!(evaluate(0, 0, 40.0).result_status, ResultStatus::Fail);
        assert_eq!(evaluate(0, 0, 0.0).result_status, ResultStatus::Pass);
    }

    #[test]
    fn status_serializes_uppercase() {
        assert_eq!(serde_json::to_value(ResultStatus::Pass).unwrap(), "PASS");
    }
}
