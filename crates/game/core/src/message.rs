//! Per-entity message queues.
//!
//! Gameplay text is addressed to entities, not to a global log. Anything
//! with the `MessageRecipient` capability owns a [`Mailbox`]; sending to
//! anything else is a silent no-op, so action code never has to check who
//! can read before narrating.

use crate::types::{EntityId, Position};
use crate::world::World;

/// Ordered, unbounded queue of gameplay messages: the `MessageRecipient`
/// capability state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mailbox {
    messages: Vec<String>,
}

impl Mailbox {
    pub fn push(&mut self, message: String) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Reads and clears the queue in one step.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl World {
    /// Queues a message for one entity. Entities without the
    /// `MessageRecipient` capability silently ignore it.
    pub fn send_message(&mut self, recipient: EntityId, message: impl Into<String>) {
        if !self.map().contains(recipient) {
            return;
        }
        if let Some(mailbox) = self.map_mut().entity_mut(recipient).mailbox.as_mut() {
            mailbox.push(message.into());
        }
    }

    /// Broadcasts a message to every recipient inside the axis-aligned
    /// square of `radius` around `center`, on the center's depth.
    pub fn send_message_nearby(
        &mut self,
        center: Position,
        radius: i32,
        message: impl Into<String>,
    ) {
        let message = message.into();
        let nearby = self.map().entities_within_radius(center, radius);
        for entity in nearby {
            self.send_message(entity, message.clone());
        }
    }

    /// Takes everything queued for the entity, clearing its mailbox.
    ///
    /// The driving client calls this once per player turn; between drains,
    /// messages accumulate in arrival order.
    pub fn drain_messages(&mut self, recipient: EntityId) -> Vec<String> {
        self.map_mut()
            .entity_mut(recipient)
            .mailbox
            .as_mut()
            .map_or_else(Vec::new, Mailbox::drain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capability;
    use crate::map::{DungeonMap, MapDimensions};
    use crate::template::EntityTemplate;
    use crate::tile::TileKind;

    fn open_world() -> World {
        let dimensions = MapDimensions::new(16, 16, 2);
        let tiles = vec![TileKind::Floor; dimensions.cell_count()];
        World::new(DungeonMap::new(dimensions, tiles), 3)
    }

    fn recipient() -> EntityTemplate {
        EntityTemplate::builder("listener")
            .capabilities(&[Capability::MessageRecipient])
            .build()
    }

    fn mute() -> EntityTemplate {
        EntityTemplate::builder("statue").build()
    }

    #[test]
    fn messages_arrive_in_order() {
        let mut world = open_world();
        let id = world.map_mut().spawn(&recipient(), Position::new(1, 1, 0));
        world.send_message(id, "first");
        world.send_message(id, "second");
        assert_eq!(world.drain_messages(id), vec!["first", "second"]);
        assert!(world.drain_messages(id).is_empty());
    }

    #[test]
    fn sending_to_a_non_recipient_is_a_no_op() {
        let mut world = open_world();
        let id = world.map_mut().spawn(&mute(), Position::new(1, 1, 0));
        world.send_message(id, "anyone there?");
        assert!(world.drain_messages(id).is_empty());
    }

    #[test]
    fn nearby_broadcast_is_a_square_on_one_depth() {
        let mut world = open_world();
        let center = Position::new(8, 8, 0);
        let corner = world.map_mut().spawn(&recipient(), Position::new(11, 11, 0));
        let outside = world.map_mut().spawn(&recipient(), Position::new(12, 8, 0));
        let below = world.map_mut().spawn(&recipient(), Position::new(8, 8, 1));
        world.send_message_nearby(center, 3, "rumble");
        assert_eq!(world.drain_messages(corner), vec!["rumble"]);
        assert!(world.drain_messages(outside).is_empty());
        assert!(world.drain_messages(below).is_empty());
    }
}
