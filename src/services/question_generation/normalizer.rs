use serde::Serialize;
use serde_json::Value;

use crate::db::types::AnswerOption;

/// A multiple-choice question that passed normalization. All text fields are
/// trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct GeneratedQuestion {
    pub(crate) question_text: String,
    pub(crate) option_a: String,
    pub(crate) option_b: String,
    pub(crate) option_c: String,
    pub(crate) option_d: String,
    pub(crate) correct_answer: AnswerOption,
}

impl GeneratedQuestion {
    /// Key used to recognise repeats within one generation run.
    pub(crate) fn dedup_key(&self) -> String {
        self.question_text.to_lowercase()
    }
}

/// Returns `None` for malformed items; the caller drops them silently.
pub(crate) fn normalize_question(raw: &Value) -> Option<GeneratedQuestion> {
    let question_text = text_field(raw, "question_text");
    let option_a = text_field(raw, "option_a");
    let option_b = text_field(raw, "option_b");
    let option_c = text_field(raw, "option_c");
    let option_d = text_field(raw, "option_d");

    if [&question_text, &option_a, &option_b, &option_c, &option_d]
        .iter()
        .any(|value| value.is_empty())
    {
        return None;
    }

    let correct_answer = AnswerOption::parse(&text_field(raw, "correct_answer"))?;

    Some(GeneratedQuestion {
        question_text,
        option_a,
        option_b,
        option_c,
        option_d,
        correct_answer,
    })
}

/// Strings are trimmed and numbers keep their JSON spelling; anything else
/// reads as empty.
fn text_field(raw: &Value, key: &str) -> String {
    match raw.get(key) {
        Some(Value::String(text)) => text.trim().to_string(),
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "question_text": "  What is 15% of 200?  ",
            "option_a": "20",
            "option_b": " 30 ",
            "option_c": "35",
            "option_d": "40",
            "correct_answer": " b "
        })
    }

    #[test]
    fn trims_fields_and_uppercases_answer() {
        let question = normalize_question(&valid()).expect("accepted");

        assert_eq!(question.question_text, "What is 15% of 200?");
        assert_eq!(question.option_b, "30");
        assert_eq!(question.correct_answer, AnswerOption::B);
    }

    #[test]
    fn rejects_missing_or_blank_text_fields() {
        for key in ["question_text", "option_a", "option_b", "option_c", "option_d"] {
            let mut missing = valid();
            missing.as_object_mut().unwrap().remove(key);
            assert_eq!(normalize_question(&missing), None, "missing {key}");

            let mut blank = valid();
            blank[key] = json!("   ");
            assert_eq!(normalize_question(&blank), None, "blank {key}");
        }
    }

    #[test]
    fn rejects_answers_outside_a_to_d() {
        for answer in [json!("E"), json!(""), json!("AB"), json!(1), json!(null)] {
            let mut item = valid();
            item["correct_answer"] = answer.clone();
            assert_eq!(normalize_question(&item), None, "answer {answer}");
        }
    }

    #[test]
    fn numeric_options_are_kept_as_text() {
        let item = json!({
            "question_text": "What is 4 x 5?",
            "option_a": 20,
            "option_b": 25,
            "option_c": 0,
            "option_d": 2.5,
            "correct_answer": "A"
        });

        let question = normalize_question(&item).expect("accepted");
        assert_eq!(question.option_a, "20");
        assert_eq!(question.option_b, "25");
        assert_eq!(question.option_c, "0");
        assert_eq!(question.option_d, "2.5");
    }

    #[test]
    fn non_scalar_fields_count_as_empty() {
        for value in [json!(true), json!(null), json!(["35"]), json!({"text": "35"})] {
            let mut item = valid();
            item["option_c"] = value.clone();
            assert_eq!(normalize_question(&item), None, "option_c {value}");
        }

        assert_eq!(normalize_question(&json!("not an object")), None);
    }

    #[test]
    fn dedup_key_ignores_case() {
        let mut upper = valid();
        upper["question_text"] = json!("WHAT IS 15% OF 200?");
        let a = normalize_question(&valid()).unwrap();
        let b = normalize_question(&upper).unwrap();
        assert_eq!(a.dedup_key(), b.dedup_key());
    }
}
