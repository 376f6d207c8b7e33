//! Game systems.
//!
//! Submodules overview
//! - [`animation`] – advance animation frames of moving entities
//! - [`bullet`] – spawn bullets from fire messages and move them
//! - [`direction`] – resolve key state into movement delta and heading
//! - [`input`] – apply queued host key events to [`crate::resources::keystate::KeyState`]
//! - [`lifetime`] – optional despawn of bullets that left the arena
//! - [`render`] – build the draw list for the tick
//! - [`tank`] – move a tank and decide whether it fires
//! - [`tilemap`] – spawn background tiles from the tile map
//! - [`time`] – advance the tick counter
//! - [`update`] – walk the live-entity list and move every entity

pub mod animation;
pub mod bullet;
pub mod direction;
pub mod input;
pub mod lifetime;
pub mod render;
pub mod tank;
pub mod tilemap;
pub mod time;
pub mod update;
