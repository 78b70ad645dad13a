use crate::core::models::{
    option::Insert as OptionInsert,
    question::{Insert as QuestionInsert, Query as QuestionQuery, Question},
};
use crate::core::ports::repository::{OptionCommon, QuestionCommon, Store, TxStore};
use crate::error::Error;
use chrono::Utc;
use itertools::Itertools;
use log::error;

/// Persists every question and its answer options inside `storer`'s transaction.
/// Either the whole batch is committed or the transaction is rolled back and the
/// first error is returned.
pub async fn create_questions<T>(mut storer: T, mut questions: Vec<Question>, creator_id: i64) -> Result<Vec<Question>, Error>
where
    T: TxStore,
{
    match insert_questions(&mut storer, &mut questions, creator_id).await {
        Ok(()) => {
            storer.commit().await?;
            Ok(questions)
        }
        Err(e) => {
            if let Err(rollback_err) = storer.rollback().await {
                error!("failed to roll back question batch: {rollback_err}");
            }
            Err(e)
        }
    }
}

async fn insert_questions<S>(storer: &mut S, questions: &mut [Question], creator_id: i64) -> Result<(), Error>
where
    S: Store,
{
    let now = Utc::now();
    for q in questions.iter_mut() {
        q.creator_id = creator_id;
        let qid = QuestionCommon::insert(storer, QuestionInsert::from_question(q, now)).await?;
        q.id = qid;
        q.created_at = Some(now);
        q.updated_at = Some(now);
        for opt in q.answer_options.iter_mut() {
            opt.id = OptionCommon::insert(storer, OptionInsert::from_option(qid, opt, now)).await?;
            opt.question_id = qid;
            opt.created_at = Some(now);
        }
    }
    Ok(())
}

pub async fn questions_by_ids<S>(storer: &mut S, ids: &[i64]) -> Result<Vec<Question>, Error>
where
    S: Store,
{
    let questions = QuestionCommon::query(
        storer,
        &QuestionQuery {
            id_in: Some(ids.to_vec()),
            ..Default::default()
        },
    )
    .await?;
    load_answer_options(storer, questions).await
}

pub async fn approved_questions<S>(storer: &mut S) -> Result<Vec<Question>, Error>
where
    S: Store,
{
    let questions = QuestionCommon::query(
        storer,
        &QuestionQuery {
            is_approved_eq: Some(true),
            ..Default::default()
        },
    )
    .await?;
    load_answer_options(storer, questions).await
}

pub async fn all_questions<S>(storer: &mut S) -> Result<Vec<Question>, Error>
where
    S: Store,
{
    let questions = QuestionCommon::query(storer, &QuestionQuery::default()).await?;
    load_answer_options(storer, questions).await
}

/// Eager load: one query for the answer options of every question in the set.
pub async fn load_answer_options<S>(storer: &mut S, mut questions: Vec<Question>) -> Result<Vec<Question>, Error>
where
    S: Store,
{
    let ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
    let mut options = OptionCommon::query_by_questions(storer, &ids)
        .await?
        .into_iter()
        .into_group_map_by(|o| o.question_id);
    for q in questions.iter_mut() {
        q.answer_options = options.remove(&q.id).unwrap_or_default();
    }
    Ok(questions)
}
