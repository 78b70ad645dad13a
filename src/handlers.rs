pub mod moodle;

use crate::core::ports::repository::Manager;
use crate::middlewares::identity::Identity;
use crate::response::Health;
use actix_web::middleware::DefaultHeaders;
use actix_web::web::{get, post, scope, Json, ServiceConfig};

pub const SERVICE_NAME: &str = "moodle-integration-service";

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        service: SERVICE_NAME,
    })
}

/// Permissive CORS headers attached to every response.
pub fn cors() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Origin, Content-Type, Accept, Authorization"))
}

/// Route table. Expects `Data<MoodleService<M>>` to be registered on the app.
pub fn routes<M>(default_user_id: i64) -> impl FnOnce(&mut ServiceConfig)
where
    M: Manager + 'static,
{
    move |cfg| {
        cfg.route("/health", get().to(health)).service(
            scope("/api/moodle")
                .wrap(Identity::new(default_user_id))
                .route("/import", post().to(moodle::import::<M>))
                .route("/export", post().to(moodle::export::<M>))
                .route("/export", get().to(moodle::export_by_ids::<M>))
                .route("/export/approved", get().to(moodle::export_approved::<M>))
                .route("/questions", get().to(moodle::questions::<M>)),
        );
    }
}
