//! # Jewel Hunt
//!
//! Jewel Hunt is a small text-driven exploration game. The player wanders a
//! fixed graph of enchanted locations, collects jewels under a carry-weight
//! limit, trades fruit with a wandering Stranger, and wins by returning all
//! eight jewels to the Temple of Jewels.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jewelhunt::config::Config;
//! use jewelhunt::game::{Command, GameEngine, Signal};
//!
//! # fn main() {
//! let config = Config::default();
//! let mut engine = GameEngine::new(&config.game);
//! let command = Command::from_tokens(&["go", "north"]).unwrap();
//! let turn = engine.process_command(&command);
//! println!("{}", turn.text);
//! assert_eq!(turn.signal, Signal::Continue);
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - The engine core: world graph, inventory, command dispatch,
//!   win condition, and the wandering NPC
//! - [`config`] - TOML configuration loading and validation
//! - [`logutil`] - Log sanitization helpers for raw player input
//!
//! The engine is strictly synchronous and turn-based: one command is fully
//! processed before the next is read. The binary in `src/main.rs` wraps it
//! in a line-reading shell and renders the engine's observations.

pub mod config;
pub mod game;
pub mod logutil;
