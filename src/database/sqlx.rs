use crate::core::models::{
    option::{AnswerOption, Insert as OptionInsert},
    question::{Insert as QuestionInsert, Query as QuestionQuery, Question},
};
use crate::core::ports::repository::{Common, Manager, OptionCommon, QuestionCommon, Store, TxStore};
use crate::database::models::{option::AnswerOptionRow, question::QuestionRow};
use crate::error::Error;
use sqlx::pool::PoolConnection;
use sqlx::{query_scalar, QueryBuilder, Sqlite, SqliteConnection, SqlitePool, Transaction};
use std::ops::DerefMut;

/// Upper bound on ids bound into one `IN (...)` list, well under SQLite's variable limit.
const MAX_BIND_PARAMS: usize = 500;

/// Repository backed by anything that hands out a `SqliteConnection`: a pooled
/// connection for reads, a transaction for writes.
pub struct Sqlx<E>
where
    E: DerefMut<Target = SqliteConnection>,
{
    executor: E,
}

impl<E> Sqlx<E>
where
    E: DerefMut<Target = SqliteConnection>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

impl<E> QuestionCommon for Sqlx<E>
where
    E: DerefMut<Target = SqliteConnection>,
{
    async fn insert(&mut self, question: QuestionInsert) -> Result<i64, Error> {
        let id: i64 = query_scalar(
            "INSERT INTO questions (
                question_text, source_document_id, creator_id, is_approved, approved_by, approved_at,
                moodle_name, moodle_question_id, default_grade, penalty, shuffle_answers, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id",
        )
        .bind(question.question_text)
        .bind(question.source_document_id)
        .bind(question.creator_id)
        .bind(question.is_approved)
        .bind(question.approved_by)
        .bind(question.approved_at)
        .bind(question.moodle_name)
        .bind(question.moodle_question_id)
        .bind(question.default_grade)
        .bind(question.penalty)
        .bind(question.shuffle_answers)
        .bind(question.created_at)
        .bind(question.created_at)
        .fetch_one(&mut *self.executor)
        .await
        .map_err(Error::persistence("insert question", None))?;
        Ok(id)
    }

    async fn query(&mut self, query: &QuestionQuery) -> Result<Vec<Question>, Error> {
        let mut stmt = QueryBuilder::<Sqlite>::new("SELECT * FROM questions WHERE 1 = 1");
        if let Some(ids) = &query.id_in {
            if ids.is_empty() {
                return Ok(Vec::new());
            }
            stmt.push(" AND id IN (");
            let mut list = stmt.separated(", ");
            for id in ids {
                list.push_bind(*id);
            }
            list.push_unseparated(")");
        }
        if let Some(approved) = query.is_approved_eq {
            stmt.push(" AND is_approved = ").push_bind(approved);
        }
        stmt.push(" ORDER BY id");
        let rows: Vec<QuestionRow> = stmt
            .build_query_as()
            .fetch_all(&mut *self.executor)
            .await
            .map_err(Error::persistence("query questions", None))?;
        Ok(rows.into_iter().map(Question::from).collect())
    }
}

impl<E> OptionCommon for Sqlx<E>
where
    E: DerefMut<Target = SqliteConnection>,
{
    async fn insert(&mut self, option: OptionInsert) -> Result<i64, Error> {
        let question_id = option.question_id;
        let id: i64 = query_scalar(
            "INSERT INTO answer_options (question_id, answer_text, is_correct, fraction, option_order, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id",
        )
        .bind(option.question_id)
        .bind(option.answer_text)
        .bind(option.is_correct)
        .bind(option.fraction)
        .bind(option.option_order)
        .bind(option.created_at)
        .fetch_one(&mut *self.executor)
        .await
        .map_err(Error::persistence("insert answer option", Some(question_id)))?;
        Ok(id)
    }

    async fn query_by_questions(&mut self, question_ids: &[i64]) -> Result<Vec<AnswerOption>, Error> {
        let mut rows: Vec<AnswerOptionRow> = Vec::new();
        for chunk in question_ids.chunks(MAX_BIND_PARAMS) {
            let mut stmt = QueryBuilder::<Sqlite>::new("SELECT * FROM answer_options WHERE question_id IN (");
            let mut list = stmt.separated(", ");
            for id in chunk {
                list.push_bind(*id);
            }
            list.push_unseparated(")");
            let mut part: Vec<AnswerOptionRow> = stmt
                .build_query_as()
                .fetch_all(&mut *self.executor)
                .await
                .map_err(Error::persistence("query answer options", None))?;
            rows.append(&mut part);
        }
        rows.sort_by_key(|r| (r.question_id, r.option_order, r.id));
        Ok(rows.into_iter().map(AnswerOption::from).collect())
    }
}

impl<E> Common for Sqlx<E> where E: DerefMut<Target = SqliteConnection> {}
impl<E> Store for Sqlx<E> where E: DerefMut<Target = SqliteConnection> {}

impl TxStore for Sqlx<Transaction<'static, Sqlite>> {
    async fn commit(self) -> Result<(), Error> {
        self.executor.commit().await.map_err(Error::persistence("commit transaction", None))?;
        Ok(())
    }

    async fn rollback(self) -> Result<(), Error> {
        self.executor.rollback().await.map_err(Error::persistence("roll back transaction", None))?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SqlxManager {
    pool: SqlitePool,
}

impl SqlxManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Manager for SqlxManager {
    type Store = Sqlx<PoolConnection<Sqlite>>;
    type TxStore = Sqlx<Transaction<'static, Sqlite>>;

    async fn db(&self) -> Result<Self::Store, Error> {
        let conn = self.pool.acquire().await.map_err(Error::persistence("acquire connection", None))?;
        Ok(Sqlx::new(conn))
    }

    async fn tx(&self) -> Result<Self::TxStore, Error> {
        let tx = self.pool.begin().await.map_err(Error::persistence("begin transaction", None))?;
        Ok(Sqlx::new(tx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::schema;
    use chrono::Utc;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn manager() -> SqlxManager {
        let pool = SqlitePoolOptions::new().max_connections(1).connect("sqlite::memory:").await.unwrap();
        schema::migrate(&pool).await.unwrap();
        SqlxManager::new(pool)
    }

    fn question(text: &str, approved: bool) -> QuestionInsert {
        QuestionInsert {
            question_text: text.into(),
            source_document_id: None,
            creator_id: 3,
            is_approved: approved,
            approved_by: approved.then_some(9),
            approved_at: approved.then(Utc::now),
            moodle_name: Some(format!("{text} name")),
            moodle_question_id: None,
            default_grade: 2.0,
            penalty: 0.1,
            shuffle_answers: false,
            created_at: Utc::now(),
        }
    }

    fn option(question_id: i64, text: &str, order: i32) -> OptionInsert {
        OptionInsert {
            question_id,
            answer_text: text.into(),
            is_correct: order == 1,
            fraction: Some(if order == 1 { 100.0 } else { 0.0 }),
            option_order: order,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn insert_and_query_questions() {
        let manager = manager().await;
        let mut db = manager.db().await.unwrap();
        let first = QuestionCommon::insert(&mut db, question("first", false)).await.unwrap();
        let second = QuestionCommon::insert(&mut db, question("second", true)).await.unwrap();
        assert!(second > first);

        let all = QuestionCommon::query(&mut db, &QuestionQuery::default()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].question_text, "first");
        assert_eq!(all[0].moodle_name.as_deref(), Some("first name"));
        assert_eq!(all[0].default_grade, 2.0);
        assert!(!all[0].shuffle_answers);
        assert!(all[0].approved_by.is_none());
        assert!(all[0].created_at.is_some());

        let approved = QuestionCommon::query(
            &mut db,
            &QuestionQuery {
                is_approved_eq: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].id, second);
        assert_eq!(approved[0].approved_by, Some(9));
        assert!(approved[0].approved_at.is_some());

        let by_ids = QuestionCommon::query(
            &mut db,
            &QuestionQuery {
                id_in: Some(vec![second, 1000]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(by_ids.iter().map(|q| q.id).collect::<Vec<_>>(), vec![second]);

        let none = QuestionCommon::query(
            &mut db,
            &QuestionQuery {
                id_in: Some(Vec::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn answer_options_come_back_grouped_and_ordered() {
        let manager = manager().await;
        let mut db = manager.db().await.unwrap();
        let q1 = QuestionCommon::insert(&mut db, question("q1", false)).await.unwrap();
        let q2 = QuestionCommon::insert(&mut db, question("q2", false)).await.unwrap();
        OptionCommon::insert(&mut db, option(q2, "b2", 2)).await.unwrap();
        OptionCommon::insert(&mut db, option(q1, "a2", 2)).await.unwrap();
        OptionCommon::insert(&mut db, option(q1, "a1", 1)).await.unwrap();
        OptionCommon::insert(&mut db, option(q2, "b1", 1)).await.unwrap();

        let options = OptionCommon::query_by_questions(&mut db, &[q1, q2]).await.unwrap();
        let texts: Vec<&str> = options.iter().map(|o| o.answer_text.as_str()).collect();
        assert_eq!(texts, vec!["a1", "a2", "b1", "b2"]);
        assert!(options[0].is_correct);
        assert_eq!(options[0].fraction, Some(100.0));
        assert_eq!(options[0].question_id, q1);

        assert!(OptionCommon::query_by_questions(&mut db, &[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn answer_options_for_more_ids_than_one_statement_binds() {
        let manager = manager().await;
        let mut db = manager.db().await.unwrap();
        let mut ids = Vec::new();
        for i in 0..3 {
            let id = QuestionCommon::insert(&mut db, question(&format!("q{i}"), false)).await.unwrap();
            OptionCommon::insert(&mut db, option(id, &format!("q{i} second"), 2)).await.unwrap();
            OptionCommon::insert(&mut db, option(id, &format!("q{i} first"), 1)).await.unwrap();
            ids.push(id);
        }
        let mut wanted: Vec<i64> = (10_000..10_000 + 2 * MAX_BIND_PARAMS as i64).collect();
        wanted.insert(MAX_BIND_PARAMS + 7, ids[0]);
        wanted.push(ids[2]);
        wanted.insert(3, ids[1]);

        let options = OptionCommon::query_by_questions(&mut db, &wanted).await.unwrap();
        let texts: Vec<&str> = options.iter().map(|o| o.answer_text.as_str()).collect();
        assert_eq!(texts, vec!["q0 first", "q0 second", "q1 first", "q1 second", "q2 first", "q2 second"]);
    }

    #[tokio::test]
    async fn rolled_back_transaction_leaves_nothing_behind() {
        let manager = manager().await;
        let mut tx = manager.tx().await.unwrap();
        let id = QuestionCommon::insert(&mut tx, question("temp", false)).await.unwrap();
        OptionCommon::insert(&mut tx, option(id, "x", 1)).await.unwrap();
        tx.rollback().await.unwrap();

        let mut db = manager.db().await.unwrap();
        assert!(QuestionCommon::query(&mut db, &QuestionQuery::default()).await.unwrap().is_empty());
        assert!(OptionCommon::query_by_questions(&mut db, &[id]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn option_for_missing_question_is_a_persistence_error() {
        let manager = manager().await;
        let mut db = manager.db().await.unwrap();
        let err = OptionCommon::insert(&mut db, option(404, "orphan", 1)).await.unwrap_err();
        assert!(matches!(
            err,
            Error::PersistenceError {
                operation: "insert answer option",
                id: Some(404),
                ..
            }
        ));
    }
}
