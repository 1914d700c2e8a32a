use std::sync::Arc;

use service::blog::BlogRepository;

/// Shared handler state. The repository is built once at startup and
/// injected here; handlers never reach for a global.
#[derive(Clone)]
pub struct ServerState {
    pub repo: Arc<dyn BlogRepository>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn BlogRepository>) -> Self { Self { repo } }
}
