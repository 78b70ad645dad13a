use crate::core::models::option::AnswerOption;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct AnswerOptionRow {
    pub id: i64,
    pub question_id: i64,
    pub answer_text: String,
    pub is_correct: bool,
    pub fraction: Option<f64>,
    pub option_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<AnswerOptionRow> for AnswerOption {
    fn from(row: AnswerOptionRow) -> Self {
        Self {
            id: row.id,
            question_id: row.question_id,
            answer_text: row.answer_text,
            is_correct: row.is_correct,
            fraction: row.fraction,
            option_order: row.option_order,
            created_at: Some(row.created_at),
        }
    }
}
