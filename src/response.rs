use crate::core::models::question::Question;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub message: String,
    pub questions_count: usize,
    pub questions: Vec<Question>,
}

impl ImportResponse {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            message: "questions imported successfully".into(),
            questions_count: questions.len(),
            questions,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
}
