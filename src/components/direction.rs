//! Facing and movement direction of an entity.
//!
//! A [`Direction`] couples a movement delta (`dx`, `dy`, each in `-1..=1`)
//! with a [`Heading`]. The two are resolved independently from the pressed
//! keys (see [`crate::systems::direction`]) and may disagree: holding `left`
//! and `right` together cancels the horizontal delta while the heading still
//! follows the priority order.
//!
//! The heading only changes when at least one directional key is pressed; a
//! stationary entity keeps facing where it last moved.

use bevy_ecs::prelude::Component;
use std::f32::consts::PI;

/// One of the eight compass headings, clockwise from north (screen up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Heading {
    pub const ALL: [Heading; 8] = [
        Heading::North,
        Heading::NorthEast,
        Heading::East,
        Heading::SouthEast,
        Heading::South,
        Heading::SouthWest,
        Heading::West,
        Heading::NorthWest,
    ];

    /// Angle in degrees, one of 0, 45, ..., 315.
    pub fn degrees(self) -> u16 {
        match self {
            Heading::North => 0,
            Heading::NorthEast => 45,
            Heading::East => 90,
            Heading::SouthEast => 135,
            Heading::South => 180,
            Heading::SouthWest => 225,
            Heading::West => 270,
            Heading::NorthWest => 315,
        }
    }

    pub fn radians(self) -> f32 {
        self.degrees() as f32 * PI / 180.0
    }

    /// Inverse of [`Heading::degrees`]. Any other angle yields `None`.
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.degrees() == degrees)
    }
}

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
    pub heading: Heading,
}

impl Direction {
    /// Not moving, facing `heading`.
    pub fn facing(heading: Heading) -> Self {
        Self {
            dx: 0,
            dy: 0,
            heading,
        }
    }

    pub fn is_stationary(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl Default for Direction {
    /// Tanks start stationary and facing down the screen.
    fn default() -> Self {
        Self::facing(Heading::South)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_round_trip_for_all_headings() {
        for heading in Heading::ALL {
            assert_eq!(Heading::from_degrees(heading.degrees()), Some(heading));
        }
        assert_eq!(Heading::from_degrees(10), None);
        assert_eq!(Heading::from_degrees(360), None);
    }

    #[test]
    fn radians_of_east_is_half_pi() {
        assert!((Heading::East.radians() - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn default_direction_faces_south_and_is_stationary() {
        let d = Direction::default();
        assert_eq!(d.heading.degrees(), 180);
        assert!(d.is_stationary());
    }
}
