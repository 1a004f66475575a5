//! Application state shared across handlers

use crate::client::ServerClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub client: ServerClient,
}
