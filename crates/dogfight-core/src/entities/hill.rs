use std::collections::BTreeMap;

use super::{recorded_setters, Entity};
use crate::delta::{ChangeCache, FieldValue};
use crate::enums::EntityKind;
use crate::map::HillData;
use crate::types::EntityId;

/// Background hill scenery. Position only.
#[derive(Debug, Clone)]
pub struct Hill {
    id: EntityId,
    x: f64,
    y: f64,
}

impl Hill {
    pub fn new(id: EntityId) -> Self {
        Self { id, x: 0.0, y: 0.0 }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    recorded_setters!(EntityKind::Hill => {
        set_x(x: f64);
        set_y(y: f64);
    });

    pub fn apply(&mut self, cache: &mut ChangeCache, data: &HillData) {
        self.set_x(cache, data.x);
        self.set_y(cache, data.y);
    }
}

impl Entity for Hill {
    const KIND: EntityKind = EntityKind::Hill;

    fn id(&self) -> EntityId {
        self.id
    }

    fn snapshot(&self) -> BTreeMap<String, FieldValue> {
        BTreeMap::from([
            ("x".to_string(), self.x.into()),
            ("y".to_string(), self.y.into()),
        ])
    }
}
