//! ECS resources made available to systems.
//!
//! Overview
//! - `drawlist` – draw commands produced each tick and the sink trait that consumes them
//! - `gameconfig` – INI-backed session settings and tank specs
//! - `input` – channel bridge carrying host key events into the world
//! - `keystate` – pressed/released state of every reported key-code
//! - `liveentities` – ordered list of entities that update and draw each tick
//! - `tilemap` – static glyph grid drawn as the background
//! - `worldtime` – tick counter and simulated time
pub mod drawlist;
pub mod gameconfig;
pub mod input;
pub mod keystate;
pub mod liveentities;
pub mod tilemap;
pub mod worldtime;
