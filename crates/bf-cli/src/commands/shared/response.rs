use bf_core::enums::EntityKind;
use serde::Serialize;

/// Acknowledgement printed after a delete.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: EntityKind,
    pub id: i64,
}
