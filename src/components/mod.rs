//! ECS components for entities.
//!
//! Components hold per-entity data. Entity variants are expressed by which
//! components an entity carries rather than by type:
//! - tanks: [`tank::Tank`] + [`keybinding::KeyBinding`] + [`direction::Direction`]
//!   + [`animation::Animation`]
//! - bullets: [`bullet::Bullet`]
//! - background tiles: [`maptile::MapTile`]
//!
//! Every drawable entity also carries [`sprite::Sprite`] and
//! [`mapposition::MapPosition`].
//!
//! Submodules overview:
//! - [`animation`] – frame sequence and current frame index
//! - [`bullet`] – fixed travel vector and speed of a projectile
//! - [`direction`] – movement delta plus compass heading
//! - [`keybinding`] – key-codes bound to the directional and fire roles
//! - [`mapposition`] – world-space position in pixels
//! - [`maptile`] – grid coordinates of a background tile
//! - [`sprite`] – tile-sheet cell and size to draw
//! - [`tank`] – speed and fire-key latch of a tank

pub mod animation;
pub mod bullet;
pub mod direction;
pub mod keybinding;
pub mod mapposition;
pub mod maptile;
pub mod sprite;
pub mod tank;
