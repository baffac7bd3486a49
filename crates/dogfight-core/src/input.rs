//! Input submission types.
//!
//! Key-state changes are queued between ticks and resolved into
//! control actions during the input phase. Per player and per key,
//! the last queued write wins.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::InputKey;
use crate::types::EntityId;

/// Held-state snapshot of a player's logical keys.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct KeySet {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
}

impl KeySet {
    pub fn get(&self, key: InputKey) -> bool {
        match key {
            InputKey::Left => self.left,
            InputKey::Right => self.right,
            InputKey::Up => self.up,
            InputKey::Down => self.down,
            InputKey::Jump => self.jump,
        }
    }

    pub fn set(&mut self, key: InputKey, pressed: bool) {
        match key {
            InputKey::Left => self.left = pressed,
            InputKey::Right => self.right = pressed,
            InputKey::Up => self.up = pressed,
            InputKey::Down => self.down = pressed,
            InputKey::Jump => self.jump = pressed,
        }
    }
}

/// Key-state transitions for one player since the last tick.
pub type KeyChanges = BTreeMap<InputKey, bool>;

/// Pending transitions for all players, drained once per tick.
/// Ordered maps keep the drain order deterministic.
pub type InputQueue = BTreeMap<EntityId, KeyChanges>;
