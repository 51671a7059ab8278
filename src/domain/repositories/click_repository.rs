//! Repository trait for click audit persistence.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only store for click audit records.
///
/// Invoked only by the background click worker, never from the request
/// path: a slow or failed write must never delay or fail the redirect.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL
/// - Test mocks auto-generated with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one audit record to the `clicks` collection.
    ///
    /// Record identity and the `clicked_at` timestamp are assigned by the
    /// store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn append(&self, new_click: NewClick) -> Result<Click, AppError>;
}
