//! Headless embedding of the dogfight simulation: a game loop thread
//! plus a command channel for driving it.

pub mod game_loop;
