//! Entity structs for all BugFlow domain objects.
//!
//! Each entity maps to one table in the libSQL store. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`.
//!
//! Identity is `Option<i64>`: `None` until the entity is first saved, then the
//! row id assigned by the store.

mod comment;
mod issue;
mod member;
mod project;
mod tree;

pub use comment::Comment;
pub use issue::Issue;
pub use member::Member;
pub use project::Project;
pub use tree::{IssueWithComments, ProjectTree};

use crate::enums::EntityKind;

/// Common surface of the four persisted entity types.
pub trait Entity {
    /// Which table this entity lives in.
    const KIND: EntityKind;

    /// Stored identity, or `None` for a transient instance.
    fn id(&self) -> Option<i64>;

    /// Whether this instance has been saved at least once.
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}

macro_rules! impl_entity {
    ($ty:ty, $kind:expr) => {
        impl Entity for $ty {
            const KIND: EntityKind = $kind;

            fn id(&self) -> Option<i64> {
                self.id
            }
        }
    };
}

impl_entity!(Project, EntityKind::Project);
impl_entity!(Member, EntityKind::Member);
impl_entity!(Issue, EntityKind::Issue);
impl_entity!(Comment, EntityKind::Comment);
