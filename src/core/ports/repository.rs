use crate::core::models::{
    option::{AnswerOption, Insert as OptionInsert},
    question::{Insert as QuestionInsert, Query as QuestionQuery, Question},
};
use crate::error::Error;

pub trait QuestionCommon {
    async fn insert(&mut self, question: QuestionInsert) -> Result<i64, Error>;
    /// Questions matching the query in id order. Answer options are left empty.
    async fn query(&mut self, query: &QuestionQuery) -> Result<Vec<Question>, Error>;
}

pub trait OptionCommon {
    async fn insert(&mut self, option: OptionInsert) -> Result<i64, Error>;
    async fn query_by_questions(&mut self, question_ids: &[i64]) -> Result<Vec<AnswerOption>, Error>;
}

pub trait Common: QuestionCommon + OptionCommon {}

pub trait Store: Common {}

pub trait TxStore: Store {
    async fn commit(self) -> Result<(), Error>;
    async fn rollback(self) -> Result<(), Error>;
}

pub trait Manager {
    type Store: Store;
    type TxStore: TxStore;
    async fn db(&self) -> Result<Self::Store, Error>;
    async fn tx(&self) -> Result<Self::TxStore, Error>;
}
