//! Inventory operations over the player record.
//!
//! The carry rules live here so every call site enforces them identically:
//! at most one item per name, and the carried-weight counter never exceeds
//! the player's limit. `can_add` is split from `add_item` so callers can
//! verify acceptance before removing the item from its current container.

use super::errors::GameError;
use super::types::{Item, Player};

/// Check whether the player could accept `item` without mutating anything.
pub fn can_add(player: &Player, item: &Item) -> Result<(), GameError> {
    if player.inventory.contains_key(&item.name) {
        return Err(GameError::AlreadyHeld(item.name.clone()));
    }
    if player.current_weight + item.weight > player.max_weight {
        return Err(GameError::CapacityExceeded);
    }
    Ok(())
}

/// Add an item to the inventory, taking ownership of it. On rejection the
/// item is returned untouched inside the error path by the caller keeping
/// its original container.
pub fn add_item(player: &mut Player, item: Item) -> Result<(), GameError> {
    can_add(player, &item)?;
    player.current_weight += item.weight;
    player.inventory.insert(item.name.clone(), item);
    Ok(())
}

/// Remove an item by its exact name, returning it for relocation. Names are
/// matched case-sensitively against the inventory keys.
pub fn remove_item(player: &mut Player, name: &str) -> Option<Item> {
    let item = player.inventory.remove(name)?;
    player.current_weight -= item.weight;
    Some(item)
}

/// Whether the player holds an item under exactly this name.
pub fn holds(player: &Player, name: &str) -> bool {
    player.inventory.contains_key(name)
}

/// Human-readable inventory listing with the weight total, or an explicit
/// empty notice.
pub fn format_inventory(player: &Player) -> String {
    if player.inventory.is_empty() {
        return "\nYour inventory is empty.\n".to_string();
    }
    let mut listing = String::from("\nYou are carrying:\n");
    for item in player.inventory.values() {
        listing.push_str(&format!("- {}: {}\n", item.name, item.description));
    }
    listing.push_str(&format!(
        "Total weight: {}/{}.\n",
        player.current_weight, player.max_weight
    ));
    listing
}
