//! Time update system.
//!
//! Advances the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource after each completed tick.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

pub fn advance_world_time(world: &mut World) {
    let mut wt = world.resource_mut::<WorldTime>();
    let delta = wt.delta;
    wt.tick += 1;
    wt.elapsed += delta;
}
