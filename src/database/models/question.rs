use crate::core::models::question::Question;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct QuestionRow {
    pub id: i64,
    pub question_text: String,
    pub source_document_id: Option<i64>,
    pub creator_id: i64,
    pub is_approved: bool,
    pub approved_by: Option<i64>,
    pub approved_at: Option<DateTime<Utc>>,
    pub moodle_name: Option<String>,
    pub moodle_question_id: Option<i64>,
    pub default_grade: f64,
    pub penalty: f64,
    pub shuffle_answers: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: row.id,
            question_text: row.question_text,
            source_document_id: row.source_document_id,
            creator_id: row.creator_id,
            is_approved: row.is_approved,
            approved_by: row.approved_by,
            approved_at: row.approved_at,
            moodle_name: row.moodle_name,
            moodle_question_id: row.moodle_question_id,
            default_grade: row.default_grade,
            penalty: row.penalty,
            shuffle_answers: row.shuffle_answers,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            answer_options: Vec::new(),
        }
    }
}
