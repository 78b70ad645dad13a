use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One selectable answer of a question. `fraction` keeps the wire weight when known.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: i64,
    pub question_id: i64,
    pub answer_text: String,
    pub is_correct: bool,
    pub fraction: Option<f64>,
    pub option_order: i32,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub question_id: i64,
    pub answer_text: String,
    pub is_correct: bool,
    pub fraction: Option<f64>,
    pub option_order: i32,
    pub created_at: DateTime<Utc>,
}

impl Insert {
    pub fn from_option(question_id: i64, option: &AnswerOption, created_at: DateTime<Utc>) -> Self {
        Self {
            question_id,
            answer_text: option.answer_text.clone(),
            is_correct: option.is_correct,
            fraction: option.fraction,
            option_order: option.option_order,
            created_at,
        }
    }
}
