//! The fixed world of Jewel Hunt: room registry plus the canonical seed.
//!
//! Rooms are stored under snake_case ids and looked up by id everywhere, so
//! exits and character locations are plain string references into the
//! registry. The seed builds the whole map once at startup; nothing about
//! the layout changes afterwards.

use std::collections::HashMap;

use super::types::{Character, Direction, Item, Room};

/// Room where every playthrough starts.
pub const START_ROOM_ID: &str = "entrance";

/// Room where the win condition is evaluated.
pub const GOAL_ROOM_ID: &str = "temple";

/// The jewels that must all be carried into the goal room to win.
pub const REQUIRED_JEWELS: [&str; 8] = [
    "Ruby",
    "Pearl",
    "Emerald",
    "Diamond",
    "Sapphire",
    "Topaz",
    "Amethyst",
    "Moonstone",
];

/// Name of the wandering character, the only valid `give` recipient.
pub const WANDERER_NAME: &str = "Stranger";

/// Owning registry of every room, keyed by id. Keeps a stable insertion
/// order so uniform random sampling is reproducible under a seeded RNG.
#[derive(Debug, Clone)]
pub struct WorldGraph {
    rooms: HashMap<String, Room>,
    order: Vec<String>,
}

impl WorldGraph {
    pub fn from_rooms(rooms: Vec<Room>) -> Self {
        let order: Vec<String> = rooms.iter().map(|room| room.id.clone()).collect();
        let rooms = rooms.into_iter().map(|room| (room.id.clone(), room)).collect();
        Self { rooms, order }
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Room ids in seed order.
    pub fn room_ids(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Build the canonical thirteen-room map with its items and exits.
pub fn canonical_world_seed() -> Vec<Room> {
    let mut rooms = Vec::new();

    rooms.push(
        Room::new(
            START_ROOM_ID,
            "Entrance of the Enchanted Jungle",
            "at the entrance to the enchanted jungle",
        )
        .with_exit(Direction::North, "jungle"),
    );

    rooms.push(
        Room::new(
            "jungle",
            "Jungle",
            "in a dense, winding jungle filled with towering trees",
        )
        .with_exit(Direction::North, GOAL_ROOM_ID)
        .with_exit(Direction::East, "tower_bottom")
        .with_exit(Direction::South, START_ROOM_ID)
        .with_exit(Direction::West, "mountain_bottom")
        .with_item(Item::new("Emerald", "A glowing green gemstone", 100, true))
        .with_item(Item::new("Mango", "A mango", 100, true)),
    );

    rooms.push(
        Room::new(
            "mountain_bottom",
            "Bottom of the Mountain",
            "at the bottom of a snowy mountain",
        )
        .with_exit(Direction::Up, "mountain_top")
        .with_exit(Direction::North, "river")
        .with_exit(Direction::East, "jungle"),
    );

    rooms.push(
        Room::new("mountain_top", "Top of the Mountain", "on top of the snowy mountain")
            .with_exit(Direction::Down, "mountain_bottom")
            .with_item(Item::new("Ruby", "A sparkling red jewel", 100, true))
            .with_item(Item::new("Apple", "An apple", 100, false)),
    );

    rooms.push(
        Room::new("river", "River", "by a fast-flowing river")
            .with_exit(Direction::North, "cave")
            .with_exit(Direction::East, GOAL_ROOM_ID)
            .with_exit(Direction::South, "mountain_bottom")
            .with_item(Item::new("Diamond", "A pure white stone", 100, true))
            .with_item(Item::new("Water", "A canteen of water", 100, false)),
    );

    rooms.push(
        Room::new("cave", "Cave", "in a deep, dark, and damp cave")
            .with_exit(Direction::East, "island")
            .with_exit(Direction::South, "river")
            .with_item(Item::new("Sapphire", "A shimmering blue gem", 100, true))
            .with_item(Item::new("Fig", "A fig", 100, false)),
    );

    rooms.push(
        Room::new("island", "Island", "on a vast, deserted island")
            .with_exit(Direction::East, "garden")
            .with_exit(Direction::South, GOAL_ROOM_ID)
            .with_exit(Direction::West, "cave")
            .with_item(Item::new("Pearl", "A polished shiny pearl", 100, true))
            .with_item(Item::new("Dates", "A handful of dates", 100, true)),
    );

    rooms.push(
        Room::new(
            "garden",
            "Garden",
            "in a floral garden filled with blooming tulips and berry bushes",
        )
        .with_exit(Direction::South, "castle_bottom")
        .with_exit(Direction::West, "island")
        .with_item(Item::new("Amethyst", "A vibrant purple jewel", 100, true))
        .with_item(Item::new("Strawberry", "A handful of strawberries", 100, false)),
    );

    rooms.push(
        Room::new(
            "castle_bottom",
            "Bottom of the Castle",
            "in a grand, ancient, and abandoned castle",
        )
        .with_exit(Direction::Up, "castle_top")
        .with_exit(Direction::North, "garden")
        .with_exit(Direction::South, "tower_bottom")
        .with_exit(Direction::West, GOAL_ROOM_ID),
    );

    rooms.push(
        Room::new("castle_top", "Top of the Castle", "at the top floor of the castle")
            .with_exit(Direction::Down, "castle_bottom")
            .with_item(Item::new("Topaz", "A magnificent orange jewel", 100, true))
            .with_item(Item::new("Orange", "An orange", 100, true)),
    );

    rooms.push(
        Room::new("tower_bottom", "Bottom of the Tower", "in a mysterious tower")
            .with_exit(Direction::Up, "tower_top")
            .with_exit(Direction::North, "castle_bottom")
            .with_exit(Direction::West, "jungle"),
    );

    rooms.push(
        Room::new("tower_top", "Top of the Tower", "at the top of the tower")
            .with_exit(Direction::Down, "tower_bottom")
            .with_item(Item::new("Moonstone", "A soft white stone", 100, true))
            .with_item(Item::new("Pomegranate", "A pomegranate", 100, true)),
    );

    rooms.push(
        Room::new(GOAL_ROOM_ID, "Temple of Jewels", "in the temple of jewels")
            .with_exit(Direction::North, "island")
            .with_exit(Direction::East, "castle_bottom")
            .with_exit(Direction::South, "jungle")
            .with_exit(Direction::West, "river"),
    );

    rooms
}

/// The wandering Stranger, unplaced until the engine's first relocation.
pub fn canonical_stranger() -> Character {
    Character::new(
        WANDERER_NAME,
        "A mysterious figure who wanders the jungle.",
        "The Stranger says: 'Do you have any fruit for me? I'm feeling hungry.'",
    )
}

/// The Guardian of Jewels, fixed in the goal room. Voices the win check.
pub fn canonical_guardian() -> Character {
    Character::new(
        "Guardian of Jewels",
        "A wise and ancient being who watches over the temple.",
        "The Guardian says: 'Give me my jewels if you want to escape.'",
    )
    .with_room(GOAL_ROOM_ID)
}
