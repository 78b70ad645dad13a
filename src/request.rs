use crate::error::Error;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub question_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub ids: Option<String>,
}

impl ExportQuery {
    /// Parses `ids=1,2,3`. Blank segments are skipped; anything else that is not an
    /// integer rejects the whole request.
    pub fn question_ids(&self) -> Result<Vec<i64>, Error> {
        let raw = self.ids.as_deref().unwrap_or_default();
        let ids = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<i64>().map_err(|_| Error::BadRequest(format!("invalid question id: {s}"))))
            .collect::<Result<Vec<_>, _>>()?;
        if ids.is_empty() {
            return Err(Error::BadRequest("ids parameter is required".into()));
        }
        Ok(ids)
    }
}
