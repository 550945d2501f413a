//! Jewel Hunt game core: world graph, inventory rules, command dispatch,
//! and the win-condition state machine. The engine here is synchronous and
//! turn-based; the binary shell owns reading lines and printing
//! observations.

pub mod commands;
pub mod engine;
pub mod errors;
pub mod inventory;
pub mod types;
pub mod world;

pub use commands::{Command, Verb};
pub use engine::{GameEngine, Signal, Turn};
pub use errors::GameError;
pub use types::{Character, Direction, Item, Player, Room};
pub use world::{
    canonical_guardian, canonical_stranger, canonical_world_seed, WorldGraph, GOAL_ROOM_ID,
    REQUIRED_JEWELS, START_ROOM_ID, WANDERER_NAME,
};
