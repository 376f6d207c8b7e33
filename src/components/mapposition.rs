//! World-space position component.
//!
//! [`MapPosition`] is the top-left corner of an entity's sprite in pixels.
//! Tanks rotate around the centre of their sprite, but the stored position is
//! always the unrotated top-left corner.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by an integer unit vector scaled by `speed`, per axis.
    pub fn translate(&mut self, dx: i8, dy: i8, speed: f32) {
        self.x += dx as f32 * speed;
        self.y += dy as f32 * speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_scales_each_axis() {
        let mut pos = MapPosition::new(50.0, 50.0);
        pos.translate(-1, 1, 10.0);
        assert_eq!(pos, MapPosition::new(40.0, 60.0));
    }

    #[test]
    fn translate_zero_vector_is_noop() {
        let mut pos = MapPosition::new(3.5, 7.25);
        pos.translate(0, 0, 20.0);
        assert_eq!(pos, MapPosition::new(3.5, 7.25));
    }
}
