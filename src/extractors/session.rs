//! One store transaction per request.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use sqlx::{Sqlite, SqliteConnection, Transaction};
use std::ops::{Deref, DerefMut};

/// Transaction bound to the lifetime of one request.
///
/// Begun when the handler's arguments are extracted. Handlers call
/// [`Session::commit`] on success; on any other exit path the transaction is
/// dropped and sqlx rolls it back before the connection returns to the pool.
pub struct Session(Transaction<'static, Sqlite>);

impl Session {
    pub async fn begin(state: &AppState) -> Result<Self, AppError> {
        Ok(Session(state.pool.begin().await?))
    }

    pub async fn commit(self) -> Result<(), AppError> {
        self.0.commit().await?;
        Ok(())
    }
}

impl Deref for Session {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Session::begin(&AppState::from_ref(state)).await
    }
}
