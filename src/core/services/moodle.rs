use crate::core::models::question::Question;
use crate::core::moodle::{exporter, parser};
use crate::core::ports::repository::Manager;
use crate::core::services::question::{all_questions, approved_questions, create_questions, questions_by_ids};
use crate::error::Error;
use log::{debug, info};
use std::io::Read;

/// Entry point for the HTTP layer: Moodle XML in, persisted questions out, and back.
pub struct MoodleService<M> {
    manager: M,
}

impl<M> MoodleService<M>
where
    M: Manager,
{
    pub fn new(manager: M) -> Self {
        Self { manager }
    }

    pub async fn import_from_xml<R: Read>(&self, reader: R, creator_id: i64) -> Result<Vec<Question>, Error> {
        let parsed = parser::parse_with_diagnostics(reader)?;
        for diagnostic in &parsed.diagnostics {
            debug!("skipped during import: {diagnostic:?}");
        }
        if parsed.questions.is_empty() {
            return Err(Error::ValidationError("no valid questions found in XML".into()));
        }
        let tx = self.manager.tx().await?;
        let questions = create_questions(tx, parsed.questions, creator_id).await?;
        info!("imported {} questions for user {}", questions.len(), creator_id);
        Ok(questions)
    }

    pub async fn export_to_xml(&self, ids: &[i64]) -> Result<Vec<u8>, Error> {
        let mut db = self.manager.db().await?;
        let questions = questions_by_ids(&mut db, ids).await?;
        if questions.is_empty() {
            return Err(Error::ValidationError("no questions found".into()));
        }
        let xml = exporter::export(&questions)?;
        info!("exported {} of {} requested questions", questions.len(), ids.len());
        Ok(xml)
    }

    pub async fn export_approved_to_xml(&self) -> Result<Vec<u8>, Error> {
        let mut db = self.manager.db().await?;
        let questions = approved_questions(&mut db).await?;
        if questions.is_empty() {
            return Err(Error::ValidationError("no approved questions found".into()));
        }
        let xml = exporter::export(&questions)?;
        info!("exported {} approved questions", questions.len());
        Ok(xml)
    }

    pub async fn all_questions(&self) -> Result<Vec<Question>, Error> {
        let mut db = self.manager.db().await?;
        all_questions(&mut db).await
    }
}
