//! World orchestration for the dogfight simulation.
//!
//! `GameWorld` owns the entity registry, the change cache, and the
//! input/takeoff queues, and drives the fixed sequence of per-tick
//! phases. Completely headless and deterministic.

pub mod registry;
pub mod systems;
pub mod world;

#[cfg(test)]
mod tests;
