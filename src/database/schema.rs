use crate::error::Error;
use log::info;
use sqlx::SqlitePool;

const STATEMENTS: [&str; 5] = [
    "CREATE TABLE IF NOT EXISTS questions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question_text TEXT NOT NULL,
        source_document_id INTEGER,
        creator_id INTEGER NOT NULL,
        is_approved BOOLEAN NOT NULL DEFAULT 0,
        approved_by INTEGER,
        approved_at TEXT,
        moodle_name VARCHAR(255),
        moodle_question_id INTEGER,
        default_grade REAL NOT NULL DEFAULT 1.0,
        penalty REAL NOT NULL DEFAULT 0.3333333,
        shuffle_answers BOOLEAN NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE INDEX IF NOT EXISTS idx_questions_creator_id ON questions (creator_id)",
    "CREATE INDEX IF NOT EXISTS idx_questions_source_document_id ON questions (source_document_id)",
    "CREATE TABLE IF NOT EXISTS answer_options (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question_id INTEGER NOT NULL REFERENCES questions (id) ON DELETE CASCADE,
        answer_text TEXT NOT NULL,
        is_correct BOOLEAN NOT NULL DEFAULT 0,
        fraction REAL,
        option_order INTEGER NOT NULL,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE INDEX IF NOT EXISTS idx_answer_options_question_id ON answer_options (question_id)",
];

/// Creates the `questions` and `answer_options` tables when they are missing.
pub async fn migrate(pool: &SqlitePool) -> Result<(), Error> {
    for stmt in STATEMENTS {
        sqlx::query(stmt).execute(pool).await.map_err(Error::persistence("create schema", None))?;
    }
    info!("database schema is ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn pool() -> SqlitePool {
        SqlitePoolOptions::new().max_connections(1).connect("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn migrate_is_idempotent() {
        let pool = pool().await;
        migrate(&pool).await.unwrap();
        migrate(&pool).await.unwrap();
        let tables: Vec<String> = sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('questions', 'answer_options') ORDER BY name")
            .fetch_all(&pool)
            .await
            .unwrap();
        assert_eq!(tables, vec!["answer_options", "questions"]);
    }

    #[tokio::test]
    async fn deleting_question_cascades_to_answer_options() {
        let pool = pool().await;
        migrate(&pool).await.unwrap();
        let id: i64 = sqlx::query_scalar("INSERT INTO questions (question_text, creator_id) VALUES ('q', 1) RETURNING id")
            .fetch_one(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO answer_options (question_id, answer_text, option_order) VALUES (?, 'a', 1), (?, 'b', 2)")
            .bind(id)
            .bind(id)
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("DELETE FROM questions WHERE id = ?").bind(id).execute(&pool).await.unwrap();
        let left: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM answer_options").fetch_one(&pool).await.unwrap();
        assert_eq!(left, 0);
    }

    #[tokio::test]
    async fn answer_option_requires_existing_question() {
        let pool = pool().await;
        migrate(&pool).await.unwrap();
        let res = sqlx::query("INSERT INTO answer_options (question_id, answer_text, option_order) VALUES (999, 'a', 1)")
            .execute(&pool)
            .await;
        assert!(res.is_err());
    }
}
