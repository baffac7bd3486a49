use std::collections::BTreeMap;

use super::{recorded_setters, Entity};
use crate::delta::{ChangeCache, FieldValue};
use crate::enums::EntityKind;
use crate::map::GroundData;
use crate::types::EntityId;

/// A strip of solid terrain.
#[derive(Debug, Clone)]
pub struct Ground {
    id: EntityId,
    x: f64,
    y: f64,
    width: f64,
}

impl Ground {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            x: 0.0,
            y: 0.0,
            width: 0.0,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    recorded_setters!(EntityKind::Ground => {
        set_x(x: f64);
        set_y(y: f64);
        set_width(width: f64);
    });

    /// Apply a map field-set, one independent comparison per field.
    pub fn apply(&mut self, cache: &mut ChangeCache, data: &GroundData) {
        self.set_x(cache, data.x);
        self.set_y(cache, data.y);
        self.set_width(cache, data.width);
    }
}

impl Entity for Ground {
    const KIND: EntityKind = EntityKind::Ground;

    fn id(&self) -> EntityId {
        self.id
    }

    fn snapshot(&self) -> BTreeMap<String, FieldValue> {
        BTreeMap::from([
            ("x".to_string(), self.x.into()),
            ("y".to_string(), self.y.into()),
            ("width".to_string(), self.width.into()),
        ])
    }
}
