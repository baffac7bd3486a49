//! Core types and definitions for the dogfight simulation.
//!
//! This crate defines the vocabulary shared across the server crates:
//! entity kinds, the change cache, typed entity records, input and
//! takeoff types, the map format, and tuning constants. It has no
//! dependency on any runtime framework.

pub mod constants;
pub mod delta;
pub mod entities;
pub mod enums;
pub mod input;
pub mod map;
pub mod takeoff;
pub mod types;
