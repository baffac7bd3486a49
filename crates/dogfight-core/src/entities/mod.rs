//! Typed entity records, one struct per kind.
//!
//! Every kind carries an explicit, enumerated set of settable fields.
//! Mutation goes through per-field setters that compare, assign, and
//! record into a change cache passed explicitly by the caller; an
//! entity never holds a cache handle of its own. Reads go through
//! plain accessors.

use std::collections::BTreeMap;

use crate::delta::FieldValue;
use crate::enums::EntityKind;
use crate::types::EntityId;

mod flag;
mod ground;
mod hill;
mod plane;
mod player;
mod runway;
mod tower;
mod trooper;
mod water;

pub use flag::Flag;
pub use ground::Ground;
pub use hill::Hill;
pub use plane::Plane;
pub use player::Player;
pub use runway::Runway;
pub use tower::Tower;
pub use trooper::Trooper;
pub use water::Water;

/// Shared contract implemented by every entity kind.
pub trait Entity {
    /// The kind tag, fixed per implementing type.
    const KIND: EntityKind;

    fn id(&self) -> EntityId;

    /// Complete, self-contained record of the public fields.
    ///
    /// Used for full-state queries and creation entries, not deltas.
    fn snapshot(&self) -> BTreeMap<String, FieldValue>;
}

/// Generates compare-and-record setters for the listed fields.
///
/// Each setter assigns only on an actual value change and routes the
/// change into the cache under the field's own name.
macro_rules! recorded_setters {
    ($kind:expr => { $($setter:ident($field:ident: $ty:ty);)+ }) => {
        $(
            pub fn $setter(
                &mut self,
                cache: &mut $crate::delta::ChangeCache,
                value: $ty,
            ) {
                if self.$field != value {
                    self.$field = value;
                    cache.record(self.id, $kind, stringify!($field), value.into());
                }
            }
        )+
    };
}

pub(crate) use recorded_setters;
