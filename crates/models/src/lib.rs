pub mod errors;
pub mod db;
pub mod post;
pub mod comment;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store on insert, rendered as `{ "id": 123 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertedId {
    pub id: i32,
}

#[cfg(test)]
mod tests;
