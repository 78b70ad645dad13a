use crate::context::UserInfo;
use crate::core::models::question::Question;
use crate::core::ports::repository::Manager;
use crate::core::services::moodle::MoodleService;
use crate::error::Error;
use crate::request::{ExportQuery, ExportRequest};
use crate::response::ImportResponse;
use actix_multipart::Multipart;
use actix_web::web::{Data, Json, Query};
use actix_web::HttpResponse;
use futures_util::TryStreamExt;
use log::info;

const EXPORT_FILENAME: &str = "moodle_questions.xml";
const APPROVED_EXPORT_FILENAME: &str = "moodle_approved_questions.xml";

fn xml_attachment(body: Vec<u8>, filename: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/xml")
        .insert_header(("Content-Disposition", format!("attachment; filename={filename}")))
        .body(body)
}

/// Reads the multipart field named `file`; other fields are drained and ignored.
async fn read_file_field(mut payload: Multipart) -> Result<Vec<u8>, Error> {
    let mut file = None;
    while let Some(mut field) = payload.try_next().await? {
        let is_file = field.content_disposition().get_name() == Some("file");
        let mut content = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            content.extend_from_slice(&chunk);
        }
        if is_file && file.is_none() {
            file = Some(content);
        }
    }
    file.ok_or_else(|| Error::BadRequest("file is required".into()))
}

pub async fn import<M>(user_info: UserInfo, payload: Multipart, service: Data<MoodleService<M>>) -> Result<Json<ImportResponse>, Error>
where
    M: Manager + 'static,
{
    let content = read_file_field(payload).await?;
    info!("received Moodle XML upload of {} bytes from user {}", content.len(), user_info.id);
    let questions = service.import_from_xml(content.as_slice(), user_info.id).await?;
    Ok(Json(ImportResponse::new(questions)))
}

pub async fn export<M>(Json(ExportRequest { question_ids }): Json<ExportRequest>, service: Data<MoodleService<M>>) -> Result<HttpResponse, Error>
where
    M: Manager + 'static,
{
    if question_ids.is_empty() {
        return Err(Error::BadRequest("question_ids is required".into()));
    }
    let xml = service.export_to_xml(&question_ids).await?;
    Ok(xml_attachment(xml, EXPORT_FILENAME))
}

pub async fn export_by_ids<M>(query: Query<ExportQuery>, service: Data<MoodleService<M>>) -> Result<HttpResponse, Error>
where
    M: Manager + 'static,
{
    let ids = query.question_ids()?;
    let xml = service.export_to_xml(&ids).await?;
    Ok(xml_attachment(xml, EXPORT_FILENAME))
}

pub async fn export_approved<M>(service: Data<MoodleService<M>>) -> Result<HttpResponse, Error>
where
    M: Manager + 'static,
{
    let xml = service.export_approved_to_xml().await?;
    Ok(xml_attachment(xml, APPROVED_EXPORT_FILENAME))
}

pub async fn questions<M>(service: Data<MoodleService<M>>) -> Result<Json<Vec<Question>>, Error>
where
    M: Manager + 'static,
{
    Ok(Json(service.all_questions().await?))
}
