//! Click entity representing a persisted audit record.

use chrono::{DateTime, Utc};

use crate::domain::click_event::ClickEvent;

/// A persisted click audit record.
///
/// `clicked_at` is server-assigned by the database at insert time; every
/// other field is fixed when the record is built.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub clicked_at: DateTime<Utc>,
    pub target_url: String,
    pub asin: Option<String>,
    pub tag: String,
    pub src: Option<String>,
    pub created_by: Option<String>,
    pub created_at_label: Option<String>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

/// Input data for persisting a new click audit record.
///
/// Label fields are already trimmed and truncated by the
/// [`ClickEvent`] builder before they reach this type.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub target_url: String,
    pub asin: Option<String>,
    pub tag: String,
    pub src: Option<String>,
    pub created_by: Option<String>,
    pub created_at_label: Option<String>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl From<ClickEvent> for NewClick {
    fn from(event: ClickEvent) -> Self {
        Self {
            target_url: event.target_url,
            asin: event.asin,
            tag: event.tag,
            src: event.src,
            created_by: event.created_by,
            created_at_label: event.created_at,
            ip: event.ip,
            user_agent: event.user_agent,
        }
    }
}
