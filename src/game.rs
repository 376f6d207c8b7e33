//! Session setup and the fixed-rate tick driver.
//!
//! [`Game`] owns the ECS [`World`] and the per-tick [`Schedule`]. A host
//! feeds key events in through [`Game::sender`] (or [`Game::press`] /
//! [`Game::release`]), calls [`Game::tick`] once per fixed interval and
//! replays [`Game::present`] into its drawing surface.
//!
//! # Tick Order
//!
//! 1. apply queued key events to the key state
//! 2. update every live entity in list order (tanks may write fire messages)
//! 3. spawn bullets for this tick's fire messages, at the front of the list
//! 4. despawn bullets that left the arena (when configured)
//! 5. build the draw list: clear, map tiles, live entities in list order
//! 6. advance animation frames of moving entities
//! 7. advance the fire message queue and the tick counter

use std::time::Duration;

use bevy_ecs::prelude::*;
use crossbeam_channel::Sender;
use log::info;

use crate::components::animation::Animation;
use crate::components::bullet::Bullet;
use crate::components::direction::Direction;
use crate::components::keybinding::KeyCode;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::{SheetCell, Sprite};
use crate::components::tank::Tank;
use crate::events::fire::FireMessage;
use crate::events::input::KeyEvent;
use crate::replay::Replay;
use crate::resources::drawlist::{DrawList, DrawSink, Rect};
use crate::resources::gameconfig::{GameConfig, TankSetup};
use crate::resources::input::InputBridge;
use crate::resources::keystate::KeyState;
use crate::resources::liveentities::LiveEntities;
use crate::resources::tilemap::{DEFAULT_ARENA, TileMap};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation_system;
use crate::systems::bullet::{spawn_bullets, update_fire_messages};
use crate::systems::input::apply_key_events;
use crate::systems::lifetime::{arena_rect, despawn_out_of_bounds_bullets};
use crate::systems::render::render_system;
use crate::systems::tilemap::spawn_map_tiles;
use crate::systems::time::advance_world_time;
use crate::systems::update::update_live_entities;

pub struct Game {
    world: World,
    schedule: Schedule,
    tanks: Vec<Entity>,
}

impl Game {
    /// Build a session from `config`, loading the configured map file if any.
    pub fn new(config: GameConfig) -> Result<Self, String> {
        let map = match &config.map_path {
            Some(path) => TileMap::load(path, config.tile_size)?,
            None => TileMap::parse_with_tile_size(DEFAULT_ARENA, config.tile_size, config.tile_size),
        };
        Ok(Self::with_map(config, Some(map)))
    }

    /// Build a session with an explicit map, or no background at all.
    pub fn with_map(config: GameConfig, map: Option<TileMap>) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::with_delta(config.tick_ms as f32 / 1000.0));
        world.insert_resource(KeyState::new());
        world.insert_resource(InputBridge::new());
        world.insert_resource(LiveEntities::new());
        world.insert_resource(DrawList::default());
        world.init_resource::<Messages<FireMessage>>();
        if let Some(map) = map {
            world.insert_resource(map);
        }

        spawn_map_tiles(&mut world);
        let tanks: Vec<Entity> = config
            .tanks
            .iter()
            .map(|setup| spawn_tank(&mut world, setup, &config))
            .collect();
        info!(
            "Session ready: {} tank(s), tick every {} ms",
            tanks.len(),
            config.tick_ms
        );
        world.insert_resource(config);

        Self {
            world,
            schedule: build_schedule(),
            tanks,
        }
    }

    /// A handle host input callbacks can send key events through.
    pub fn sender(&self) -> Sender<KeyEvent> {
        self.world.resource::<InputBridge>().sender()
    }

    pub fn send(&self, event: KeyEvent) {
        // the receiver lives in the world, so this only fails after drop
        let _ = self.world.resource::<InputBridge>().sender().send(event);
    }

    pub fn press(&self, code: KeyCode) {
        self.send(KeyEvent::down(code));
    }

    pub fn release(&self, code: KeyCode) {
        self.send(KeyEvent::up(code));
    }

    /// Run one fixed tick.
    pub fn tick(&mut self) {
        self.schedule.run(&mut self.world);
        advance_world_time(&mut self.world);
        self.world.clear_trackers();
    }

    /// Replay the last tick's draw commands into `sink`.
    pub fn present(&self, sink: &mut impl DrawSink) {
        self.draw_list().present(sink);
    }

    pub fn draw_list(&self) -> &DrawList {
        self.world.resource::<DrawList>()
    }

    /// Tanks in spawn order.
    pub fn tanks(&self) -> &[Entity] {
        &self.tanks
    }

    /// Live entities in update/draw order.
    pub fn live_entities(&self) -> Vec<Entity> {
        self.world.resource::<LiveEntities>().to_vec()
    }

    /// Live bullets in draw order.
    pub fn bullets(&self) -> Vec<Entity> {
        self.world
            .resource::<LiveEntities>()
            .iter()
            .filter(|e| self.world.get::<Bullet>(*e).is_some())
            .collect()
    }

    pub fn position(&self, entity: Entity) -> Option<MapPosition> {
        self.world.get::<MapPosition>(entity).copied()
    }

    pub fn direction(&self, entity: Entity) -> Option<Direction> {
        self.world.get::<Direction>(entity).copied()
    }

    pub fn tick_count(&self) -> u64 {
        self.world.resource::<WorldTime>().tick
    }

    pub fn config(&self) -> &GameConfig {
        self.world.resource::<GameConfig>()
    }

    /// Playfield in pixels: the tile map's size, or the configured arena
    /// size when there is no map.
    pub fn arena(&self) -> Rect {
        arena_rect(self.config(), self.world.get_resource::<TileMap>())
    }

    pub fn tick_interval(&self) -> Duration {
        self.config().tick_interval()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Tick without a window, presenting each tick into `sink`.
    ///
    /// Stops after `max_ticks` when given; otherwise stops one tick after the
    /// last replay event, or never when there is no replay. Returns the number
    /// of ticks run.
    pub fn run_headless(&mut self, sink: &mut impl DrawSink, options: &RunOptions) -> u64 {
        let mut ran = 0;
        loop {
            if options.max_ticks.is_some_and(|max| ran >= max) {
                break;
            }
            let tick = self.tick_count();
            if let Some(replay) = &options.replay {
                if options.max_ticks.is_none() && replay.last_tick().is_none_or(|last| tick > last)
                {
                    break;
                }
                for event in replay.events_at(tick) {
                    self.send(event);
                }
            }

            self.tick();
            self.present(sink);
            ran += 1;

            if options.realtime {
                std::thread::sleep(self.tick_interval());
            }
        }
        info!("Headless run finished after {} tick(s)", ran);
        ran
    }
}

/// Options for [`Game::run_headless`].
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub max_ticks: Option<u64>,
    pub replay: Option<Replay>,
    /// Sleep one tick interval between ticks.
    pub realtime: bool,
}

fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            apply_key_events,
            update_live_entities,
            spawn_bullets,
            despawn_out_of_bounds_bullets,
            render_system,
            animation_system,
            update_fire_messages,
        )
            .chain(),
    );
    update
}

/// Spawn a tank from `setup` and append it to the live list.
pub fn spawn_tank(world: &mut World, setup: &TankSetup, config: &GameConfig) -> Entity {
    let animation = Animation::new(setup.frames.clone());
    let size = config.tile_size as f32;
    let sprite = Sprite {
        cell: SheetCell::from_frame(animation.current_frame(), config.sheet_columns),
        width: size,
        height: size,
        rotates: true,
    };
    let entity = world
        .spawn((
            Tank::new(setup.speed),
            setup.binding,
            Direction::default(),
            animation,
            sprite,
            MapPosition::new(setup.x, setup.y),
        ))
        .id();
    world.resource_mut::<LiveEntities>().push_back(entity);
    entity
}

/// Fixed-step accumulator turning variable frame times into whole ticks.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    interval: f32,
    accumulator: f32,
}

impl TickClock {
    /// At most this many ticks are run for a single long frame.
    pub const MAX_CATCH_UP: u32 = 5;

    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f32().max(f32::EPSILON),
            accumulator: 0.0,
        }
    }

    /// Add `dt` seconds and return how many ticks are due.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.max(0.0);
        let mut due = 0;
        while self.accumulator >= self.interval && due < Self::MAX_CATCH_UP {
            self.accumulator -= self.interval;
            due += 1;
        }
        if due == Self::MAX_CATCH_UP {
            // drop the backlog rather than spiral
            self.accumulator = self.accumulator.min(self.interval);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_counts_whole_intervals() {
        let mut clock = TickClock::new(Duration::from_millis(100));
        assert_eq!(clock.advance(0.05), 0);
        assert_eq!(clock.advance(0.06), 1);
        assert_eq!(clock.advance(0.25), 2);
    }

    #[test]
    fn clock_caps_catch_up() {
        let mut clock = TickClock::new(Duration::from_millis(100));
        assert_eq!(clock.advance(10.0), TickClock::MAX_CATCH_UP);
        assert!(clock.advance(0.0) <= 1);
    }

    #[test]
    fn default_session_has_two_tanks_in_live_order() {
        let game = Game::new(GameConfig::new()).expect("default map");
        assert_eq!(game.tanks().len(), 2);
        assert_eq!(game.live_entities(), game.tanks().to_vec());
        assert_eq!(
            game.position(game.tanks()[1]),
            Some(MapPosition::new(450.0, 450.0))
        );
    }
}
