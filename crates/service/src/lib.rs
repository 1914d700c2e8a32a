//! Service layer exposing the persistence collaborator used by the HTTP router.
//! - `blog::repository::BlogRepository` is the contract the router depends on.
//! - Entity definitions and SQL live in the `models` crate.

pub mod errors;
pub mod blog;
#[cfg(test)]
pub mod test_support;
