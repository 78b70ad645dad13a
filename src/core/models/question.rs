use crate::core::models::option::AnswerOption;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GRADE: f64 = 1.0;
pub const DEFAULT_PENALTY: f64 = 0.3333333;

/// A single-answer multiple-choice question together with its answer options.
///
/// `id` is 0 until the question has been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
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
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub answer_options: Vec<AnswerOption>,
}

impl Default for Question {
    fn default() -> Self {
        Self {
            id: 0,
            question_text: String::new(),
            source_document_id: None,
            creator_id: 0,
            is_approved: false,
            approved_by: None,
            approved_at: None,
            moodle_name: None,
            moodle_question_id: None,
            default_grade: DEFAULT_GRADE,
            penalty: DEFAULT_PENALTY,
            shuffle_answers: true,
            created_at: None,
            updated_at: None,
            answer_options: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Insert {
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
}

impl Insert {
    pub fn from_question(question: &Question, created_at: DateTime<Utc>) -> Self {
        Self {
            question_text: question.question_text.clone(),
            source_document_id: question.source_document_id,
            creator_id: question.creator_id,
            is_approved: question.is_approved,
            approved_by: question.approved_by,
            approved_at: question.approved_at,
            moodle_name: question.moodle_name.clone(),
            moodle_question_id: question.moodle_question_id,
            default_grade: question.default_grade,
            penalty: question.penalty,
            shuffle_answers: question.shuffle_answers,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Query {
    pub id_in: Option<Vec<i64>>,
    pub is_approved_eq: Option<bool>,
}
