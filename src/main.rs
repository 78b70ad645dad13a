use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use log::info;
use moodle_integration::config::Config;
use moodle_integration::core::services::moodle::MoodleService;
use moodle_integration::database::{self, sqlx::SqlxManager};
use moodle_integration::handlers;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    let default_filter = if config.debug { "debug" } else { "info,actix_web=info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let pool = database::connect(&config.database_url, config.db_max_connections)
        .await
        .context("failed to connect to database")?;
    let service = Data::new(MoodleService::new(SqlxManager::new(pool)));
    let default_user_id = config.default_user_id;

    info!("{} listening on {}:{}", handlers::SERVICE_NAME, config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(handlers::cors())
            .app_data(service.clone())
            .configure(handlers::routes::<SqlxManager>(default_user_id))
    })
    .bind(config.bind_addr())
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;
    Ok(())
}
