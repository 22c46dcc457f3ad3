//! Repository modules implementing CRUD operations for all BugFlow entities.
//!
//! Each module adds methods to `BugFlowDb` via `impl BugFlowDb` blocks. Every
//! public method calls `ensure_ready()` before touching the connection.
//! Deletes live in `crate::cascade`.

pub mod comment;
pub mod issue;
pub mod member;
pub mod meta;
pub mod project;
