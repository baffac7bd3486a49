use std::collections::BTreeMap;

use super::{recorded_setters, Entity};
use crate::delta::{ChangeCache, FieldValue};
use crate::enums::{EntityKind, FacingDirection};
use crate::map::WaterData;
use crate::types::EntityId;

/// A body of water. The facing direction picks the wave sprite variant
/// on the client; the simulation only stores it.
#[derive(Debug, Clone)]
pub struct Water {
    id: EntityId,
    x: f64,
    y: f64,
    width: f64,
    direction: FacingDirection,
}

impl Water {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            direction: FacingDirection::Right,
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

    pub fn direction(&self) -> FacingDirection {
        self.direction
    }

    recorded_setters!(EntityKind::Water => {
        set_x(x: f64);
        set_y(y: f64);
        set_width(width: f64);
        set_direction(direction: FacingDirection);
    });

    pub fn apply(&mut self, cache: &mut ChangeCache, data: &WaterData) {
        self.set_x(cache, data.x);
        self.set_y(cache, data.y);
        self.set_width(cache, data.width);
        self.set_direction(cache, data.direction);
    }
}

impl Entity for Water {
    const KIND: EntityKind = EntityKind::Water;

    fn id(&self) -> EntityId {
        self.id
    }

    fn snapshot(&self) -> BTreeMap<String, FieldValue> {
        BTreeMap::from([
            ("x".to_string(), self.x.into()),
            ("y".to_string(), self.y.into()),
            ("width".to_string(), self.width.into()),
            ("direction".to_string(), self.direction.into()),
        ])
    }
}
