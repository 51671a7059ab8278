use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::RedirectService;
use crate::domain::click_event::ClickEvent;

/// Shared application state.
///
/// Everything here is immutable for the process lifetime; requests share
/// no lock, queue, or counter beyond the bounded click channel.
#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService>,
    /// `None` when click logging is disabled.
    pub click_sender: Option<mpsc::Sender<ClickEvent>>,
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(
        redirect_service: Arc<RedirectService>,
        click_sender: Option<mpsc::Sender<ClickEvent>>,
        behind_proxy: bool,
    ) -> Self {
        Self {
            redirect_service,
            click_sender,
            behind_proxy,
        }
    }
}
