//! Inventory slots and the pickup/drop flows.

use tracing::debug;

use crate::capability::Capability;
use crate::item::Item;
use crate::types::EntityId;
use crate::world::World;

/// Fixed-slot item storage: the `InventoryHolder` capability state.
///
/// Slots are independent: removing an item leaves a hole, and new items
/// always land in the first empty slot. The slot count never changes after
/// construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    slots: Vec<Option<Item>>,
}

impl Inventory {
    pub fn with_slots(count: usize) -> Self {
        Self {
            slots: vec![None; count],
        }
    }

    pub fn slots(&self) -> &[Option<Item>] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, slot: usize) -> Option<&Item> {
        self.slots.get(slot).and_then(|s| s.as_ref())
    }

    /// Stores the item in the first empty slot. Returns false when every
    /// slot is taken; callers that cannot afford to lose the item check
    /// `has_room` first.
    pub fn add(&mut self, item: Item) -> bool {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.is_none()) {
            *slot = Some(item);
            true
        } else {
            false
        }
    }

    /// Clears the slot and returns what it held.
    pub fn remove(&mut self, slot: usize) -> Option<Item> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    pub fn has_room(&self) -> bool {
        self.slots.iter().any(Option::is_none)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Occupied slots, as (slot index, item) pairs.
    pub fn carried(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|item| (i, item)))
    }
}

impl World {
    /// Moves items from the stack underfoot into the actor's inventory.
    ///
    /// `indices` address the stack as returned by `items_at`, and must be
    /// ascending; picked items are spliced out, and the remainder keeps its
    /// order. Stops early when the inventory fills up. Returns true when at
    /// least one item moved, which is what makes the attempt cost a turn.
    pub fn pick_up(&mut self, actor: EntityId, indices: &[usize]) -> bool {
        if !self.map().entity(actor).has_capability(Capability::InventoryHolder) {
            return false;
        }
        let position = self.map().entity(actor).position();
        let mut stack = self.map_mut().take_items(position);
        if stack.is_empty() {
            self.send_message(actor, "There is nothing to pick up here.");
            return false;
        }

        let mut added = 0usize;
        let mut filled = false;
        let mut last_picked: Option<String> = None;
        for &index in indices {
            if index < added {
                continue;
            }
            // Earlier picks shifted the stack left.
            let shifted = index - added;
            if shifted >= stack.len() {
                continue;
            }
            let entity = self.map_mut().entity_mut(actor);
            let inventory = entity
                .inventory
                .as_mut()
                .expect("inventory holder without slots");
            if !inventory.has_room() {
                filled = true;
                break;
            }
            let item = stack.remove(shifted);
            last_picked = Some(item.describe_a());
            inventory.add(item);
            added += 1;
        }
        self.map_mut().set_items_at(position, stack);

        if filled {
            if added == 0 {
                self.send_message(actor, "Your inventory is full! Nothing was picked up.");
            } else {
                self.send_message(actor, "Your inventory is full! Not all items were picked up.");
            }
        } else if added == 1 {
            if let Some(description) = last_picked {
                self.send_message(actor, format!("You pick up {description}."));
            }
        } else if added > 1 {
            self.send_message(actor, format!("You pick up {added} items."));
        }
        debug!(target: "core::map", %actor, added, "pickup resolved");
        added > 0
    }

    /// Drops the item in the actor's inventory slot onto the cell underfoot.
    ///
    /// Returns true when an item actually dropped; an empty slot costs
    /// nothing.
    pub fn drop_item(&mut self, actor: EntityId, slot: usize) -> bool {
        let position = self.map().entity(actor).position();
        let item = self
            .map_mut()
            .entity_mut(actor)
            .inventory
            .as_mut()
            .and_then(|inventory| inventory.remove(slot));
        let Some(item) = item else {
            self.send_message(actor, "There is nothing in that slot.");
            return false;
        };
        let description = item.describe_a();
        self.map_mut().add_item(position, item);
        self.send_message(actor, format!("You drop {description}."));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{Color, Glyph};
    use crate::map::{DungeonMap, MapDimensions};
    use crate::template::EntityTemplate;
    use crate::tile::TileKind;
    use crate::types::Position;

    fn item(name: &str) -> Item {
        Item::new(name, Glyph::on_black(',', Color::White), "test item")
    }

    fn world_with_carrier(slots: usize) -> (World, EntityId) {
        let dimensions = MapDimensions::new(6, 6, 1);
        let tiles = vec![TileKind::Floor; dimensions.cell_count()];
        let mut world = World::new(DungeonMap::new(dimensions, tiles), 5);
        let template = EntityTemplate::builder("carrier")
            .inventory_slots(slots)
            .capabilities(&[Capability::InventoryHolder, Capability::MessageRecipient])
            .build();
        let id = world.map_mut().spawn(&template, Position::new(3, 3, 0));
        (world, id)
    }

    #[test]
    fn add_fills_first_empty_slot() {
        let mut inventory = Inventory::with_slots(3);
        assert!(inventory.add(item("rock")));
        assert!(inventory.add(item("moss")));
        assert!(inventory.remove(0).is_some());
        // Slot 0 is free again and gets refilled first.
        assert!(inventory.add(item("bone")));
        assert_eq!(inventory.get(0).unwrap().name(), "bone");
        assert_eq!(inventory.get(1).unwrap().name(), "moss");
    }

    #[test]
    fn add_fails_when_full() {
        let mut inventory = Inventory::with_slots(1);
        assert!(inventory.add(item("rock")));
        assert!(!inventory.add(item("moss")));
        assert!(!inventory.has_room());
    }

    #[test]
    fn pick_up_splices_selected_indices() {
        let (mut world, carrier) = world_with_carrier(10);
        let position = world.map().entity(carrier).position();
        for name in ["first", "second", "third"] {
            world.map_mut().add_item(position, item(name));
        }
        assert!(world.pick_up(carrier, &[0, 2]));
        let names: Vec<&str> = world
            .map()
            .entity(carrier)
            .inventory()
            .unwrap()
            .carried()
            .map(|(_, i)| i.name())
            .collect();
        assert_eq!(names, vec!["first", "third"]);
        let leftover: Vec<&str> = world
            .map()
            .items_at(position)
            .iter()
            .map(Item::name)
            .collect();
        assert_eq!(leftover, vec!["second"]);
    }

    #[test]
    fn pick_up_stops_when_inventory_fills() {
        let (mut world, carrier) = world_with_carrier(1);
        let position = world.map().entity(carrier).position();
        for name in ["first", "second", "third"] {
            world.map_mut().add_item(position, item(name));
        }
        assert!(world.pick_up(carrier, &[0, 1, 2]));
        let leftover: Vec<&str> = world
            .map()
            .items_at(position)
            .iter()
            .map(Item::name)
            .collect();
        assert_eq!(leftover, vec!["second", "third"]);
        let messages = world.drain_messages(carrier);
        assert!(messages.iter().any(|m| m.contains("Not all items")));
    }

    #[test]
    fn pick_up_with_nothing_underfoot_costs_no_turn() {
        let (mut world, carrier) = world_with_carrier(10);
        assert!(!world.pick_up(carrier, &[0]));
        let messages = world.drain_messages(carrier);
        assert_eq!(messages, vec!["There is nothing to pick up here."]);
    }

    #[test]
    fn picking_up_the_whole_stack_clears_the_cell() {
        let (mut world, carrier) = world_with_carrier(10);
        let position = world.map().entity(carrier).position();
        world.map_mut().add_item(position, item("rock"));
        assert!(world.pick_up(carrier, &[0]));
        assert!(!world.map().has_items(position));
        let messages = world.drain_messages(carrier);
        assert_eq!(messages, vec!["You pick up a rock."]);
    }

    #[test]
    fn drop_appends_to_the_cell_stack() {
        let (mut world, carrier) = world_with_carrier(10);
        let position = world.map().entity(carrier).position();
        world.map_mut().add_item(position, item("old"));
        world
            .map_mut()
            .entity_mut(carrier)
            .inventory
            .as_mut()
            .unwrap()
            .add(item("new"));
        assert!(world.drop_item(carrier, 0));
        let names: Vec<&str> = world
            .map()
            .items_at(position)
            .iter()
            .map(Item::name)
            .collect();
        // Dropped items arrive on top of what was already there.
        assert_eq!(names, vec!["old", "new"]);
    }

    #[test]
    fn dropping_an_empty_slot_costs_no_turn() {
        let (mut world, carrier) = world_with_carrier(10);
        assert!(!world.drop_item(carrier, 4));
        let messages = world.drain_messages(carrier);
        assert_eq!(messages, vec!["There is nothing in that slot."]);
    }
}
