use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Scoring strategy of a question. Unknown type strings are tolerated and
/// scored like free text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    Likert,
    Text,
    #[serde(other)]
    Other,
}

impl From<&str> for QuestionType {
    fn from(raw: &str) -> Self {
        match raw {
            "multiple_choice" => QuestionType::MultipleChoice,
            "likert" => QuestionType::Likert,
            "text" => QuestionType::Text,
            _ => QuestionType::Other,
        }
    }
}

/// One selectable option of a multiple-choice question.
///
/// `value` is the caller-assigned point weight. It is not required to be
/// 1..N; reverse-scored items simply permute the values. A value that is not a
/// JSON number decodes as `None` and carries no weight. `label` and `text` are
/// display-only and accept whatever the author stored (numbers, null).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionOption {
    #[serde(default, deserialize_with = "lenient_text")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_f64))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

fn lenient_options<'de, D>(deserializer: D) -> Result<Option<Vec<QuestionOption>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(decode_options))
}

/// Decodes stored options one element at a time. Elements that are not
/// objects are skipped; anything other than an array means "no options".
pub fn decode_options(raw: Value) -> Option<Vec<QuestionOption>> {
    match raw {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    }
}

/// A response joined with the metadata of the question it answers.
/// The scoring engine never fetches question data on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseWithQuestion {
    pub question_id: Uuid,
    #[serde(default)]
    pub answer_value: Option<String>,
    #[serde(default)]
    pub score_value: Option<f64>,
    pub question_type: QuestionType,
    #[serde(default)]
    pub question_category: Option<String>,
    #[serde(default, deserialize_with = "lenient_options")]
    pub question_options: Option<Vec<QuestionOption>>,
}

/// Raw row produced by joining `responses` with `questions`.
#[derive(Debug, Clone, FromRow)]
pub struct ResponseQuestionRow {
    pub question_id: Uuid,
    pub answer_value: Option<String>,
    pub score_value: Option<f64>,
    pub question_type: String,
    pub question_category: Option<String>,
    pub question_options: Option<Value>,
}

impl From<ResponseQuestionRow> for ResponseWithQuestion {
    fn from(row: ResponseQuestionRow) -> Self {
        let question_options = row.question_options.and_then(decode_options);

        ResponseWithQuestion {
            question_id: row.question_id,
            answer_value: row.answer_value,
            score_value: row.score_value,
            question_type: QuestionType::from(row.question_type.as_str()),
            question_category: row.question_category,
            question_options,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentRow {
    pub id: Uuid,
    pub code: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(question_type: &str, options: Option<Value>) -> ResponseQuestionRow {
        ResponseQuestionRow {
            question_id: Uuid::new_v4(),
            answer_value: Some("2".to_string()),
            score_value: None,
            question_type: question_type.to_string(),
            question_category: Some("Logic".to_string()),
            question_options: options,
        }
    }

    #[test]
    fn test_unknown_question_type_is_other() {
        assert_eq!(QuestionType::from("essay"), QuestionType::Other);
        let parsed: QuestionType = serde_json::from_value(json!("ranking")).unwrap();
        assert_eq!(parsed, QuestionType::Other);
    }

    #[test]
    fn test_option_value_must_be_numeric() {
        let options: Vec<QuestionOption> = serde_json::from_value(json!([
            {"label": "A", "value": 3, "text": "Always"},
            {"label": "B", "value": "4", "text": "Often"},
            {"label": "C"}
        ]))
        .unwrap();
        assert_eq!(options[0].value, Some(3.0));
        assert_eq!(options[1].value, None);
        assert_eq!(options[2].value, None);
        assert_eq!(options[2].text, "");
    }

    #[test]
    fn test_row_conversion_keeps_valid_options() {
        let converted = ResponseWithQuestion::from(row(
            "multiple_choice",
            Some(json!([{"label": "A", "value": 1, "text": "x"}])),
        ));
        assert_eq!(converted.question_type, QuestionType::MultipleChoice);
        assert_eq!(converted.question_options.map(|o| o.len()), Some(1));
    }

    #[test]
    fn test_null_text_keeps_option_weights() {
        let converted = ResponseWithQuestion::from(row(
            "multiple_choice",
            Some(json!([
                {"label": "A", "value": 1, "text": null},
                {"label": "B", "value": 2},
                {"label": "C", "value": 3}
            ])),
        ));
        let options = converted.question_options.unwrap();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].text, "");
        assert_eq!(options[2].value, Some(3.0));
    }

    #[test]
    fn test_numeric_labels_keep_option_weights() {
        let converted = ResponseWithQuestion::from(row(
            "multiple_choice",
            Some(json!([{"label": 1, "value": 1}, {"label": 2, "value": 3}])),
        ));
        let options = converted.question_options.unwrap();
        assert_eq!(options[0].label, "1");
        assert_eq!(options[1].value, Some(3.0));
    }

    #[test]
    fn test_non_object_option_elements_are_skipped() {
        let options = decode_options(json!([{"label": "A", "value": 2}, 7, "B", null])).unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, Some(2.0));
    }

    #[test]
    fn test_request_body_uses_same_option_decoding() {
        let parsed: ResponseWithQuestion = serde_json::from_value(json!({
            "question_id": Uuid::new_v4(),
            "answer_value": "1",
            "question_type": "multiple_choice",
            "question_category": "Logic",
            "question_options": "A,B,C"
        }))
        .unwrap();
        assert!(parsed.question_options.is_none());

        let parsed: ResponseWithQuestion = serde_json::from_value(json!({
            "question_id": Uuid::new_v4(),
            "question_type": "multiple_choice",
            "question_options": [{"label": 1, "value": 4, "text": null}]
        }))
        .unwrap();
        assert_eq!(parsed.question_options.unwrap()[0].value, Some(4.0));
    }

    #[test]
    fn test_row_conversion_drops_unreadable_options() {
        let converted = ResponseWithQuestion::from(row("multiple_choice", Some(json!("A,B,C"))));
        assert!(converted.question_options.is_none());
    }
}
