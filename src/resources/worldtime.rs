use bevy_ecs::prelude::Resource;

/// Simulation clock advanced once per fixed tick.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Seconds simulated so far.
    pub elapsed: f32,
    /// Length of one tick in seconds.
    pub delta: f32,
    /// Number of completed ticks.
    pub tick: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.1,
            tick: 0,
        }
    }
}

impl WorldTime {
    pub fn with_delta(delta: f32) -> Self {
        Self {
            delta,
            ..Self::default()
        }
    }
}
