//! Per-question point extraction.
//!
//! Answers arrive as text written by the assessment runner: usually a JSON
//! number (`"3"`), sometimes a JSON object carrying a display label next to
//! the value (`{"label":"A","value":2}`), occasionally something else
//! entirely. Each parse attempt is a function returning `Option<f64>`; the
//! first one that succeeds wins and an exhausted chain scores zero.

use serde_json::Value;
use tracing::debug;

use crate::models::assessment::{QuestionOption, QuestionType, ResponseWithQuestion};

pub const LIKERT_MIN: f64 = 1.0;
pub const LIKERT_MAX: f64 = 5.0;

/// Points, floor and ceiling contributed by one response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestionPoints {
    pub points: f64,
    pub min: f64,
    pub max: f64,
}

type ParseAttempt = fn(&str) -> Option<f64>;

const ANSWER_PARSERS: &[ParseAttempt] = &[json_number, json_object_value, plain_number];

pub fn extract_points(response: &ResponseWithQuestion) -> QuestionPoints {
    QuestionPoints {
        points: answer_points(response.answer_value.as_deref(), response.score_value),
        min: min_for_question(response.question_type),
        max: max_for_question(response.question_type, response.question_options.as_deref()),
    }
}

/// A present `score_value` is authoritative. Otherwise the answer text runs
/// through the parse chain; anything unparseable is worth zero points.
pub fn answer_points(answer_value: Option<&str>, score_value: Option<f64>) -> f64 {
    if let Some(score) = score_value {
        return score;
    }

    let raw = match answer_value {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return 0.0,
    };

    match ANSWER_PARSERS
        .iter()
        .find_map(|parse| parse(raw).filter(|v| v.is_finite()))
    {
        Some(points) => points,
        None => {
            debug!("Unparseable answer value {raw:?}; scoring as 0");
            0.0
        }
    }
}

fn json_number(raw: &str) -> Option<f64> {
    match serde_json::from_str::<Value>(raw).ok()? {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn json_object_value(raw: &str) -> Option<f64> {
    serde_json::from_str::<Value>(raw)
        .ok()?
        .as_object()?
        .get("value")?
        .as_f64()
}

/// Reads the longest leading decimal number (`"4 - Setuju"` → 4). Only
/// sign, digits, one decimal point and an exponent are accepted, so words like
/// `inf` or `NaN` never parse.
fn plain_number(raw: &str) -> Option<f64> {
    let text = raw.trim().as_bytes();
    let digits_from = |mut i: usize| {
        while i < text.len() && text[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(text.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if text.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(text.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(text.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    std::str::from_utf8(&text[..end]).ok()?.parse::<f64>().ok()
}

pub fn min_for_question(question_type: QuestionType) -> f64 {
    match question_type {
        QuestionType::Likert => LIKERT_MIN,
        _ => 0.0,
    }
}

/// Likert items top out at 5. Multiple-choice items are worth their heaviest
/// option, or 1 when no option carries a positive weight. Anything else is a
/// binary 0/1 item.
pub fn max_for_question(question_type: QuestionType, options: Option<&[QuestionOption]>) -> f64 {
    match question_type {
        QuestionType::Likert => LIKERT_MAX,
        QuestionType::MultipleChoice => {
            let heaviest = options
                .unwrap_or_default()
                .iter()
                .filter_map(|opt| opt.value)
                .fold(0.0_f64, f64::max);
            if heaviest > 0.0 {
                heaviest
            } else {
                1.0
            }
        }
        QuestionType::Text | QuestionType::Other => 1.0,
    }
}
