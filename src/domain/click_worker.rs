use std::sync::Arc;
use tokio::sync::mpsc;

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::NewClick;
use crate::domain::repositories::ClickRepository;

/// Drains click events from the channel into the repository.
///
/// Persistence is best-effort: a failed write is logged at `warn` and
/// dropped, never retried, and never reaches the request path. The worker
/// exits when every sender has been dropped.
pub async fn run_click_worker(mut rx: mpsc::Receiver<ClickEvent>, repository: Arc<dyn ClickRepository>) {
    while let Some(event) = rx.recv().await {
        match repository.append(NewClick::from(event)).await {
            Ok(click) => {
                tracing::debug!(click_id = click.id, "click recorded");
            }
            Err(e) => {
                tracing::warn!(error = ?e, "failed to record click");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Click;
    use crate::domain::repositories::MockClickRepository;
    use crate::error::AppError;
    use chrono::Utc;

    fn event(target_url: &str) -> ClickEvent {
        ClickEvent {
            target_url: target_url.to_string(),
            asin: Some("B08N5WRWNW".to_string()),
            tag: "gateway-21".to_string(),
            src: None,
            created_by: None,
            created_at: None,
            ip: None,
            user_agent: None,
        }
    }

    #[tokio::test]
    async fn test_worker_appends_events() {
        let mut repository = MockClickRepository::new();
        repository.expect_append().times(2).returning(|new_click| {
            Ok(Click {
                id: 1,
                clicked_at: Utc::now(),
                target_url: new_click.target_url,
                asin: new_click.asin,
                tag: new_click.tag,
                src: new_click.src,
                created_by: new_click.created_by,
                created_at_label: new_click.created_at_label,
                ip: new_click.ip,
                user_agent: new_click.user_agent,
            })
        });

        let (tx, rx) = mpsc::channel(10);
        tx.send(event("https://amzn.to/a")).await.unwrap();
        tx.send(event("https://amzn.to/b")).await.unwrap();
        drop(tx);

        run_click_worker(rx, Arc::new(repository)).await;
    }

    #[tokio::test]
    async fn test_worker_survives_append_failure() {
        let mut repository = MockClickRepository::new();
        repository
            .expect_append()
            .times(2)
            .returning(|_| Err(AppError::internal("write failed")));

        let (tx, rx) = mpsc::channel(10);
        tx.send(event("https://amzn.to/a")).await.unwrap();
        tx.send(event("https://amzn.to/b")).await.unwrap();
        drop(tx);

        // Both events are consumed despite the failures; the worker only
        // returns once the channel is drained and closed.
        run_click_worker(rx, Arc::new(repository)).await;
    }
}
