//! Tankyard: a two-player top-down tank arena.
//!
//! The simulation is a `bevy_ecs` world ticked at a fixed rate. Hosts feed
//! key events in and replay each tick's draw list into a drawing surface.
//!
//! - [`components`] – ECS components (tanks, bullets, directions, sprites)
//! - [`events`] – key events and fire messages
//! - [`game`] – session setup and the tick driver
//! - [`replay`] – scripted key events for headless runs
//! - [`resources`] – key state, live entity list, tile map, config, draw list
//! - [`systems`] – per-tick systems and the direction resolver

pub mod components;
pub mod events;
#[cfg(feature = "raylib")]
pub mod frontend;
pub mod game;
pub mod replay;
pub mod resources;
pub mod systems;
