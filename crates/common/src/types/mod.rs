use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Response envelope shared by every `/` and `/api/*` route: the payload is
/// always nested under an `api` key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiBody<T> {
    pub api: T,
}

impl<T> ApiBody<T> {
    pub fn new(api: T) -> Self {
        Self { api }
    }
}
