//! Tank movement and firing.
//!
//! Each tick a tank re-resolves its [`Direction`] from the key state, moves
//! by `delta * speed` per axis and checks its fire key. Firing only produces
//! a [`FireMessage`]; creating the bullet is the consumer's business.
use crate::components::direction::Direction;
use crate::components::keybinding::KeyBinding;
use crate::components::mapposition::MapPosition;
use crate::components::tank::Tank;
use crate::events::fire::FireMessage;
use crate::resources::gameconfig::FireMode;
use crate::resources::keystate::KeyState;
use crate::systems::direction::resolve_direction;
use bevy_ecs::prelude::Entity;

/// Move one tank and report whether it fired this tick.
pub fn move_tank(
    entity: Entity,
    tank: &mut Tank,
    binding: &KeyBinding,
    direction: &mut Direction,
    position: &mut MapPosition,
    keys: &KeyState,
    fire_mode: FireMode,
) -> Option<FireMessage> {
    *direction = resolve_direction(keys, binding, direction);
    position.translate(direction.dx, direction.dy, tank.speed);

    let fire_down = binding.fire.is_some_and(|code| keys.is_pressed(code));
    let fires = match fire_mode {
        FireMode::Edge => fire_down && !tank.fire_held,
        FireMode::Held => fire_down,
    };
    tank.fire_held = fire_down;

    fires.then_some(FireMessage {
        firer: entity,
        x: position.x,
        y: position.y,
        dx: direction.dx,
        dy: direction.dy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::direction::Heading;
    use crate::components::keybinding::KeyCode;
    use bevy_ecs::world::World;

    struct Fixture {
        entity: Entity,
        tank: Tank,
        binding: KeyBinding,
        direction: Direction,
        position: MapPosition,
        keys: KeyState,
    }

    impl Fixture {
        fn new() -> Self {
            let mut world = World::new();
            Self {
                entity: world.spawn_empty().id(),
                tank: Tank::new(10.0),
                binding: KeyBinding::arrows(),
                direction: Direction::default(),
                position: MapPosition::new(50.0, 50.0),
                keys: KeyState::new(),
            }
        }

        fn step(&mut self, mode: FireMode) -> Option<FireMessage> {
            move_tank(
                self.entity,
                &mut self.tank,
                &self.binding,
                &mut self.direction,
                &mut self.position,
                &self.keys,
                mode,
            )
        }
    }

    #[test]
    fn moves_by_delta_times_speed() {
        let mut f = Fixture::new();
        f.keys.set_pressed(KeyCode::DOWN, true);
        f.keys.set_pressed(KeyCode::RIGHT, true);
        assert!(f.step(FireMode::Edge).is_none());
        assert_eq!(f.position, MapPosition::new(60.0, 60.0));
        assert_eq!(f.direction.heading, Heading::SouthEast);
    }

    #[test]
    fn edge_mode_fires_once_per_press() {
        let mut f = Fixture::new();
        f.keys.set_pressed(KeyCode::UP, true);
        f.keys.set_pressed(KeyCode::ENTER, true);

        let shot = f.step(FireMode::Edge).expect("fires on press");
        assert_eq!((shot.x, shot.y), (50.0, 40.0));
        assert_eq!((shot.dx, shot.dy), (0, -1));
        assert_eq!(shot.firer, f.entity);

        assert!(f.step(FireMode::Edge).is_none());
        assert!(f.step(FireMode::Edge).is_none());

        f.keys.set_pressed(KeyCode::ENTER, false);
        assert!(f.step(FireMode::Edge).is_none());
        f.keys.set_pressed(KeyCode::ENTER, true);
        assert!(f.step(FireMode::Edge).is_some());
    }

    #[test]
    fn held_mode_fires_every_tick() {
        let mut f = Fixture::new();
        f.keys.set_pressed(KeyCode::ENTER, true);
        assert!(f.step(FireMode::Held).is_some());
        assert!(f.step(FireMode::Held).is_some());
    }

    #[test]
    fn no_fire_key_never_fires() {
        let mut f = Fixture::new();
        f.binding.fire = None;
        f.keys.set_pressed(KeyCode::ENTER, true);
        assert!(f.step(FireMode::Held).is_none());
    }

    #[test]
    fn stationary_tank_keeps_heading_and_position() {
        let mut f = Fixture::new();
        f.direction = Direction::facing(Heading::East);
        f.step(FireMode::Edge);
        assert_eq!(f.direction, Direction::facing(Heading::East));
        assert_eq!(f.position, MapPosition::new(50.0, 50.0));
    }
}
