use std::collections::BTreeMap;

use super::{recorded_setters, Entity};
use crate::constants::{PLANE_HEALTH_MAX, ROTATION_DIRECTIONS};
use crate::delta::{ChangeCache, FieldValue};
use crate::enums::{EntityKind, PlaneType, RotationDirection, Team};
use crate::types::{heading_vector, EntityId};

/// A controllable plane.
///
/// Heading is quantized into `ROTATION_DIRECTIONS` steps; direction 0
/// points along +x. The fractional turn accumulator carries sub-step
/// rotation between ticks and is not part of the networked state.
#[derive(Debug, Clone)]
pub struct Plane {
    id: EntityId,
    plane_type: PlaneType,
    team: Team,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    direction: u16,
    flipped: bool,
    engine_on: bool,
    rotation: RotationDirection,
    fuel: f64,
    health: i32,
    turn_accum: f64,
}

impl Plane {
    pub fn new(id: EntityId, plane_type: PlaneType, team: Team) -> Self {
        Self {
            id,
            plane_type,
            team,
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            direction: 0,
            flipped: false,
            engine_on: true,
            rotation: RotationDirection::None,
            fuel: plane_type.fuel_capacity(),
            health: PLANE_HEALTH_MAX,
            turn_accum: 0.0,
        }
    }

    pub fn plane_type(&self) -> PlaneType {
        self.plane_type
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn vx(&self) -> f64 {
        self.vx
    }

    pub fn vy(&self) -> f64 {
        self.vy
    }

    pub fn direction(&self) -> u16 {
        self.direction
    }

    pub fn flipped(&self) -> bool {
        self.flipped
    }

    pub fn engine_on(&self) -> bool {
        self.engine_on
    }

    pub fn rotation(&self) -> RotationDirection {
        self.rotation
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    recorded_setters!(EntityKind::Plane => {
        set_x(x: f64);
        set_y(y: f64);
        set_vx(vx: f64);
        set_vy(vy: f64);
        set_direction(direction: u16);
        set_flipped(flipped: bool);
        set_engine_on(engine_on: bool);
        set_rotation(rotation: RotationDirection);
        set_fuel(fuel: f64);
        set_health(health: i32);
    });

    pub fn set_pos(&mut self, cache: &mut ChangeCache, x: f64, y: f64) {
        self.set_x(cache, x);
        self.set_y(cache, y);
    }

    pub fn set_velocity(&mut self, cache: &mut ChangeCache, vx: f64, vy: f64) {
        self.set_vx(cache, vx);
        self.set_vy(cache, vy);
    }

    /// Advance kinematics by `delta_ms`.
    ///
    /// Every observable mutation goes through the recording setters.
    /// Rotating left increments the direction, rotating right
    /// decrements it, wrapping modulo `ROTATION_DIRECTIONS`.
    pub fn advance(&mut self, cache: &mut ChangeCache, delta_ms: u64) {
        let dt = delta_ms as f64 / 1000.0;

        // Turn: accumulate fractional steps, apply whole steps.
        if self.rotation != RotationDirection::None {
            let sign = match self.rotation {
                RotationDirection::Left => 1.0,
                RotationDirection::Right => -1.0,
                RotationDirection::None => unreachable!(),
            };
            self.turn_accum += sign * self.plane_type.turn_rate() * dt;
            let whole = self.turn_accum.trunc();
            if whole != 0.0 {
                self.turn_accum -= whole;
                let steps = ROTATION_DIRECTIONS as i32;
                let next = (self.direction as i32 + whole as i32).rem_euclid(steps) as u16;
                self.set_direction(cache, next);
            }
        }

        // Thrust toward max speed while burning, drag toward zero when
        // coasting; velocity re-projects along the current heading.
        let speed = (self.vx * self.vx + self.vy * self.vy).sqrt();
        let target = if self.engine_on && self.fuel > 0.0 {
            (speed + self.plane_type.acceleration() * dt).min(self.plane_type.max_speed())
        } else {
            (speed - self.plane_type.acceleration() * dt).max(0.0)
        };
        let velocity = heading_vector(self.direction) * target;
        self.set_velocity(cache, velocity.x, velocity.y);

        // Integrate position.
        self.set_pos(cache, self.x + self.vx * dt, self.y + self.vy * dt);

        // Fuel burn; a dry tank kills the engine.
        if self.engine_on {
            let fuel = (self.fuel - dt).max(0.0);
            self.set_fuel(cache, fuel);
            if fuel <= 0.0 {
                self.set_engine_on(cache, false);
            }
        }
    }
}

impl Entity for Plane {
    const KIND: EntityKind = EntityKind::Plane;

    fn id(&self) -> EntityId {
        self.id
    }

    fn snapshot(&self) -> BTreeMap<String, FieldValue> {
        BTreeMap::from([
            ("plane_type".to_string(), self.plane_type.into()),
            ("team".to_string(), self.team.into()),
            ("x".to_string(), self.x.into()),
            ("y".to_string(), self.y.into()),
            ("vx".to_string(), self.vx.into()),
            ("vy".to_string(), self.vy.into()),
            ("direction".to_string(), self.direction.into()),
            ("flipped".to_string(), self.flipped.into()),
            ("engine_on".to_string(), self.engine_on.into()),
            ("rotation".to_string(), self.rotation.into()),
            ("fuel".to_string(), self.fuel.into()),
            ("health".to_string(), self.health.into()),
        ])
    }
}
