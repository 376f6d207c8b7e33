//! Ordered list of live (updatable) entities.
//!
//! The order of [`LiveEntities`] is both the update order and the draw order.
//! Tanks are appended when the session starts; bullets are inserted at the
//! front so they are drawn beneath everything already on screen.
use std::collections::VecDeque;

use bevy_ecs::prelude::*;

#[derive(Resource, Debug, Clone, Default)]
pub struct LiveEntities {
    order: VecDeque<Entity>,
}

impl LiveEntities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, entity: Entity) {
        self.order.push_back(entity);
    }

    pub fn push_front(&mut self, entity: Entity) {
        self.order.push_front(entity);
    }

    /// Remove `entity`, keeping the order of the rest. Returns whether it was present.
    pub fn remove(&mut self, entity: Entity) -> bool {
        match self.order.iter().position(|e| *e == entity) {
            Some(index) => {
                self.order.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.order.iter().copied()
    }

    /// Snapshot of the current order.
    pub fn to_vec(&self) -> Vec<Entity> {
        self.order.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_insertions_precede_existing_entries() {
        let mut world = World::new();
        let tank_a = world.spawn_empty().id();
        let tank_b = world.spawn_empty().id();
        let bullet = world.spawn_empty().id();

        let mut live = LiveEntities::new();
        live.push_back(tank_a);
        live.push_back(tank_b);
        live.push_front(bullet);

        assert_eq!(live.to_vec(), vec![bullet, tank_a, tank_b]);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let c = world.spawn_empty().id();

        let mut live = LiveEntities::new();
        live.push_back(a);
        live.push_back(b);
        live.push_back(c);

        assert!(live.remove(b));
        assert!(!live.remove(b));
        assert_eq!(live.to_vec(), vec![a, c]);
    }
}
