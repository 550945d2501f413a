//! Core value types for the Jewel Hunt world: directions, items, rooms,
//! characters, and the player record. Rooms reference their neighbours and
//! characters reference their location by room id rather than by pointer, so
//! the world graph stays a plain registry with no reference cycles.

use std::collections::HashMap;

/// Cardinal and vertical travel directions recognised by the world graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Direction {
    /// Fixed presentation order for exit listings.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse a direction word, case-insensitively. Returns `None` for
    /// anything outside the closed set.
    pub fn parse(word: &str) -> Option<Direction> {
        match word.to_ascii_lowercase().as_str() {
            "north" => Some(Direction::North),
            "south" => Some(Direction::South),
            "east" => Some(Direction::East),
            "west" => Some(Direction::West),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Lowercase label used in exit listings and logs.
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// A game object that can sit in a room or be carried. Immutable after
/// creation; moving an item between containers moves the whole value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub weight: u32,
    pub pickable: bool,
}

impl Item {
    pub fn new(name: &str, description: &str, weight: u32, pickable: bool) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            weight,
            pickable,
        }
    }
}

/// One location in the world. Exits map a direction to the id of the
/// neighbouring room; exits are directed and need not be reciprocal.
/// Items are keyed by lowercase name, at most one item per name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub description: String,
    pub exits: HashMap<Direction, String>,
    pub items: HashMap<String, Item>,
}

impl Room {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            exits: HashMap::new(),
            items: HashMap::new(),
        }
    }

    pub fn with_exit(mut self, direction: Direction, destination: &str) -> Self {
        self.exits.insert(direction, destination.to_string());
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.add_item(item);
        self
    }

    /// Destination room id for an exit, or `None` if the direction is
    /// undefined here.
    pub fn exit(&self, direction: Direction) -> Option<&str> {
        self.exits.get(&direction).map(String::as_str)
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.insert(item.name.to_lowercase(), item);
    }

    /// Remove an item by name, case-insensitively. Removing an absent name
    /// is a no-op returning `None`.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        self.items.remove(&name.to_lowercase())
    }

    /// Look up an item by name, case-insensitively.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.get(&name.to_lowercase())
    }

    /// Room description plus a listing of contained items.
    pub fn describe(&self) -> String {
        format!("{}.\n{}", self.description, self.item_listing())
    }

    fn item_listing(&self) -> String {
        if self.items.is_empty() {
            return "\nThis room is empty.\n".to_string();
        }
        let mut listing = String::from("\nItems\n");
        for item in self.items.values() {
            listing.push_str(&format!("- {}: {}\n", item.name, item.description));
        }
        listing
    }
}

/// A non-player character. `room_id` is the id of the room the character
/// currently occupies; the engine relocates the wanderer by rewriting it.
/// Description and dialogue are mutable so story beats can rewrite them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub description: String,
    pub dialogue: String,
    pub room_id: Option<String>,
}

impl Character {
    pub fn new(name: &str, description: &str, dialogue: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            dialogue: dialogue.to_string(),
            room_id: None,
        }
    }

    pub fn with_room(mut self, room_id: &str) -> Self {
        self.room_id = Some(room_id.to_string());
        self
    }

    /// Rewrite dialogue and description together, e.g. after a gift.
    pub fn update(&mut self, dialogue: &str, description: &str) {
        self.dialogue = dialogue.to_string();
        self.description = description.to_string();
    }
}

/// The player: carried items under a weight budget plus a current room.
/// Inventory keys keep the item's original casing; the carried-weight
/// counter must equal the sum of held item weights at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub current_weight: u32,
    pub max_weight: u32,
    pub inventory: HashMap<String, Item>,
    pub room_id: String,
}

impl Player {
    pub fn new(name: &str, max_weight: u32, room_id: &str) -> Self {
        Self {
            name: name.to_string(),
            current_weight: 0,
            max_weight,
            inventory: HashMap::new(),
            room_id: room_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parse_is_case_insensitive() {
        assert_eq!(Direction::parse("north"), Some(Direction::North));
        assert_eq!(Direction::parse("NORTH"), Some(Direction::North));
        assert_eq!(Direction::parse("Up"), Some(Direction::Up));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn room_exit_lookup() {
        let room = Room::new("cave", "Cave", "in a deep, dark, and damp cave")
            .with_exit(Direction::East, "island");
        assert_eq!(room.exit(Direction::East), Some("island"));
        assert_eq!(room.exit(Direction::West), None);
    }

    #[test]
    fn room_items_are_keyed_case_insensitively() {
        let mut room = Room::new("jungle", "Jungle", "in a dense jungle");
        room.add_item(Item::new("Emerald", "A glowing green gemstone", 100, true));

        assert!(room.item("emerald").is_some());
        assert!(room.item("EMERALD").is_some());
        assert!(room.item("ruby").is_none());

        let removed = room.remove_item("Emerald").unwrap();
        assert_eq!(removed.name, "Emerald");
        assert!(room.item("emerald").is_none());
        // removing again is a no-op
        assert!(room.remove_item("Emerald").is_none());
    }

    #[test]
    fn empty_room_describes_itself_as_empty() {
        let room = Room::new("temple", "Temple of Jewels", "in the temple of jewels");
        assert!(room.describe().contains("This room is empty."));
    }

    #[test]
    fn character_update_rewrites_both_fields() {
        let mut stranger = Character::new("Stranger", "A mysterious figure", "Hello");
        stranger.update("", "Content and well fed.");
        assert_eq!(stranger.dialogue, "");
        assert_eq!(stranger.description, "Content and well fed.");
    }
}
