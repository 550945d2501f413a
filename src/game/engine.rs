//! The game engine: command dispatch, win evaluation, and the wandering
//! Stranger.
//!
//! The engine owns every piece of mutable session state - world graph,
//! player, characters, room history, and the game-over flag - and processes
//! exactly one command at a time. Failures never escape as errors: each one
//! is rendered into the turn's observation text with all state unchanged.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;

use super::commands::{Command, Verb};
use super::errors::GameError;
use super::inventory;
use super::types::{Character, Direction, Player, Room};
use super::world::{self, WorldGraph, GOAL_ROOM_ID, REQUIRED_JEWELS, START_ROOM_ID, WANDERER_NAME};

/// Session signal attached to each processed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Keep reading commands.
    Continue,
    /// The player quit; end the session without setting game-over.
    Quit,
    /// The win condition fired; the session is complete.
    GameOver,
}

/// Outcome of one processed command: text for the renderer plus a signal
/// telling the shell whether the session continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub text: String,
    pub signal: Signal,
}

/// Single-playthrough game state and command processor.
pub struct GameEngine {
    world: WorldGraph,
    player: Player,
    stranger: Character,
    guardian: Character,
    history: Vec<String>,
    game_over: bool,
    rng: StdRng,
}

impl GameEngine {
    /// Build a fresh playthrough over the canonical world. The RNG driving
    /// the Stranger comes from `rng_seed` when set, so scripted sessions
    /// and tests can wander deterministically.
    pub fn new(config: &GameConfig) -> Self {
        let world = WorldGraph::from_rooms(world::canonical_world_seed());
        let seed = config.rng_seed.unwrap_or_else(|| rand::thread_rng().gen());
        debug!("world seeded with {} rooms, rng seed {}", world.len(), seed);
        let player = Player::new(&config.player_name, config.max_carry_weight, START_ROOM_ID);
        let mut engine = Self {
            world,
            player,
            stranger: world::canonical_stranger(),
            guardian: world::canonical_guardian(),
            history: Vec::new(),
            game_over: false,
            rng: StdRng::seed_from_u64(seed),
        };
        engine.relocate_stranger();
        engine
    }

    /// Process one command: dispatch, mutate, then let the Stranger drift.
    /// Quitting is the only path that skips the drift - the session ends
    /// with no further mutation.
    pub fn process_command(&mut self, command: &Command) -> Turn {
        let turn = match self.dispatch(command) {
            Ok(turn) => turn,
            Err(err) => Turn {
                text: format!("\n{}\n", err),
                signal: Signal::Continue,
            },
        };
        if turn.signal != Signal::Quit {
            self.relocate_stranger();
        }
        turn
    }

    fn dispatch(&mut self, command: &Command) -> Result<Turn, GameError> {
        let verb = Verb::parse(&command.verb).ok_or(GameError::UnknownCommand)?;
        debug!("dispatching {:?}", verb);
        let arg1 = command.arg1.as_deref();
        let arg2 = command.arg2.as_deref();
        let text = match verb {
            Verb::Go => self.handle_go(arg1)?,
            Verb::Take => self.handle_take(arg1)?,
            Verb::Drop => self.handle_drop(arg1)?,
            Verb::Give => self.handle_give(arg1, arg2)?,
            Verb::Inventory => inventory::format_inventory(&self.player),
            Verb::Back => self.handle_back(),
            Verb::Help => self.handle_help(),
            Verb::Quit => return self.handle_quit(arg1),
        };
        let signal = if self.game_over { Signal::GameOver } else { Signal::Continue };
        Ok(Turn { text, signal })
    }

    fn handle_go(&mut self, argument: Option<&str>) -> Result<String, GameError> {
        let word = argument.ok_or(GameError::Malformed("Go where?"))?;
        let direction = Direction::parse(word).ok_or(GameError::NoExit)?;
        let destination = self
            .current_room()
            .exit(direction)
            .ok_or(GameError::NoExit)?
            .to_string();

        self.history.push(self.player.room_id.clone());
        self.player.room_id = destination;
        debug!("moved {} to {}", direction.label(), self.player.room_id);

        let mut text = self.describe_location();
        text.push_str(&self.check_for_win());
        if self.game_over {
            return Ok(text);
        }
        if self.stranger.room_id.as_deref() == Some(self.player.room_id.as_str()) {
            text.push_str(&format!("\nThere's someone here: {}\n", self.stranger.description));
            if !self.stranger.dialogue.is_empty() {
                text.push_str(&format!("{}\n", self.stranger.dialogue));
            }
        }
        Ok(text)
    }

    fn handle_take(&mut self, argument: Option<&str>) -> Result<String, GameError> {
        let name = argument.ok_or(GameError::Malformed("Take what?"))?;
        let room_id = self.player.room_id.clone();
        let room = self
            .world
            .room_mut(&room_id)
            .expect("player is always in a seeded room");

        let item = room.item(name).ok_or(GameError::ItemNotInRoom)?;
        if !item.pickable {
            return Err(GameError::NotPickable(item.name.clone()));
        }
        // Confirm acceptance before the item leaves the room; a rejected
        // take must leave both containers untouched.
        inventory::can_add(&self.player, item)?;

        let item = room.remove_item(name).ok_or(GameError::ItemNotInRoom)?;
        let taken = item.name.clone();
        inventory::add_item(&mut self.player, item)?;
        debug!("took {} in {}", taken, room_id);
        Ok(format!("\nYou picked up: {}.\n", taken))
    }

    fn handle_drop(&mut self, argument: Option<&str>) -> Result<String, GameError> {
        let name = argument.ok_or(GameError::Malformed("Drop what?"))?;
        let item = inventory::remove_item(&mut self.player, name).ok_or(GameError::NotHeld)?;
        let dropped = item.name.clone();
        let room_id = self.player.room_id.clone();
        self.world
            .room_mut(&room_id)
            .expect("player is always in a seeded room")
            .add_item(item);
        debug!("dropped {} in {}", dropped, room_id);
        Ok(format!("\nYou dropped: {}.\n", dropped))
    }

    fn handle_give(&mut self, item: Option<&str>, recipient: Option<&str>) -> Result<String, GameError> {
        let (name, recipient) = match (item, recipient) {
            (Some(name), Some(recipient)) => (name, recipient),
            _ => return Err(GameError::Malformed("Give what to whom?")),
        };
        if !inventory::holds(&self.player, name) {
            return Err(GameError::NothingToGive);
        }
        if !recipient.eq_ignore_ascii_case(WANDERER_NAME) {
            return Err(GameError::InvalidRecipient);
        }

        let item = inventory::remove_item(&mut self.player, name).ok_or(GameError::NothingToGive)?;
        // The gift may shadow a same-named item left in the room; clear it
        // so the world never holds two copies.
        let room_id = self.player.room_id.clone();
        if let Some(room) = self.world.room_mut(&room_id) {
            room.remove_item(&item.name);
        }

        let mut text = format!("\nYou gave your {} to the Stranger.\n", item.name);
        text.push_str(&format!("The Stranger says: 'Thank you for the {}!'\n", item.name));

        self.stranger.update(
            "",
            "The Stranger is content and happily eating the fruit you gave them.",
        );
        self.relocate_stranger();
        text.push_str("The Stranger is eating gratefully and will not bother you again.\n");
        info!("gave {} to the stranger", item.name);
        Ok(text)
    }

    fn handle_back(&mut self) -> String {
        match self.history.pop() {
            Some(previous) => {
                self.player.room_id = previous;
                let mut text = format!("\nYou have returned to: {}\n", self.current_room().name);
                text.push_str(&self.describe_location());
                text
            }
            None => "\nYou are back at the starting location.\n".to_string(),
        }
    }

    fn handle_help(&self) -> String {
        let mut text = String::from(
            "\nYou are trapped here unless you find all the jewels\n\
             Collect them and bring them to the Temple of Jewels.\n\n\
             Your command words are:\n",
        );
        text.push_str(&Verb::listing());
        text.push('\n');
        text.push_str(&self.describe_location());
        text
    }

    fn handle_quit(&self, argument: Option<&str>) -> Result<Turn, GameError> {
        if argument.is_some() {
            return Err(GameError::Malformed("Quit what?"));
        }
        info!("player quit the session");
        Ok(Turn {
            text: "\nYou have quit Jewel Hunt.\n\nThank you for playing!\n\nGood bye!\n".to_string(),
            signal: Signal::Quit,
        })
    }

    /// Evaluate the win condition. Only meaningful right after entering a
    /// room; outside the goal room this is a no-op.
    fn check_for_win(&mut self) -> String {
        if self.player.room_id != GOAL_ROOM_ID {
            return String::new();
        }
        let mut text = format!(
            "\nThere's someone here: {}\n{}\n",
            self.guardian.description, self.guardian.dialogue
        );
        let missing: Vec<&str> = REQUIRED_JEWELS
            .iter()
            .copied()
            .filter(|jewel| !inventory::holds(&self.player, jewel))
            .collect();
        if missing.is_empty() {
            self.game_over = true;
            info!("all jewels returned to the temple; game over");
            text.push_str(
                "\nCongratulations! You have collected all the jewels and brought them \
                 to the Temple. You have won the game!\n",
            );
        } else {
            text.push_str("The Guardian says: 'You do not have all the jewels yet. Keep looking!'\n");
            text.push_str(&format!("\nMissing jewels: {}\n", missing.join(", ")));
        }
        text
    }

    /// Send the Stranger to a uniformly-random room. Staying put is legal.
    fn relocate_stranger(&mut self) {
        if self.world.is_empty() {
            return;
        }
        let ids = self.world.room_ids();
        let destination = ids[self.rng.gen_range(0..ids.len())].clone();
        debug!("the stranger drifts to {}", destination);
        self.stranger.room_id = Some(destination);
    }

    /// Current room description, item listing, and exits.
    pub fn describe_location(&self) -> String {
        let room = self.current_room();
        let mut text = format!("\nYou are {}", room.describe());
        text.push_str("Exits:");
        for direction in Direction::ALL {
            if room.exit(direction).is_some() {
                text.push(' ');
                text.push_str(direction.label());
            }
        }
        text.push('\n');
        text
    }

    pub fn current_room(&self) -> &Room {
        self.world
            .room(&self.player.room_id)
            .expect("player is always in a seeded room")
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn stranger(&self) -> &Character {
        &self.stranger
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}
