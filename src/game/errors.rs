//! User-facing failures raised while processing a command. Every variant is
//! recoverable: the engine renders it as a diagnostic observation and leaves
//! all game state untouched.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    /// Verb outside the recognised command set.
    #[error("I don't know what that means")]
    UnknownCommand,

    /// Recognised verb with missing or extra arguments. Carries the
    /// verb-specific usage nudge ("Go where?", "Quit what?", ...).
    #[error("{0}")]
    Malformed(&'static str),

    /// No exit defined in the requested direction.
    #[error("Go where?")]
    NoExit,

    /// The named item is not in the current room.
    #[error("That item is not in this room.")]
    ItemNotInRoom,

    /// The item exists here but is fixed in place.
    #[error("You cannot pick up {0}.")]
    NotPickable(String),

    /// An item of that name is already in the inventory.
    #[error("You already have {0} in your inventory.")]
    AlreadyHeld(String),

    /// Adding the item would push carried weight past the limit.
    #[error("You can't carry that much weight!")]
    CapacityExceeded,

    /// The named item is not in the inventory.
    #[error("You don't have that item.")]
    NotHeld,

    /// `give` with an item the player does not hold.
    #[error("You don't have that item to give.")]
    NothingToGive,

    /// `give` aimed at anyone but the Stranger.
    #[error("You can only give items to the Stranger.")]
    InvalidRecipient,
}
