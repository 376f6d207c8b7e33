//! Frame-sequence animation state.
//!
//! An [`Animation`] walks an ordered list of tile-sheet frame numbers. It is
//! advanced once per tick by [`crate::systems::animation`], and only while the
//! owning entity is moving; a stationary entity holds its current frame.

use bevy_ecs::prelude::Component;

#[derive(Debug, Clone, Component, PartialEq, Eq)]
pub struct Animation {
    frames: Vec<u32>,
    frame_index: usize,
}

impl Animation {
    /// An empty sequence is replaced by the single frame `0`.
    pub fn new(frames: impl Into<Vec<u32>>) -> Self {
        let mut frames = frames.into();
        if frames.is_empty() {
            frames.push(0);
        }
        Self {
            frames,
            frame_index: 0,
        }
    }

    /// Step to the next frame, wrapping to the first after the last.
    pub fn advance(&mut self) {
        self.frame_index += 1;
        if self.frame_index >= self.frames.len() {
            self.frame_index = 0;
        }
    }

    pub fn current_frame(&self) -> u32 {
        self.frames[self.frame_index]
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn frames(&self) -> &[u32] {
        &self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_at_sequence_length() {
        let mut anim = Animation::new(vec![9, 10, 11]);
        assert_eq!(anim.current_frame(), 9);
        anim.advance();
        anim.advance();
        assert_eq!(anim.frame_index(), 2);
        assert_eq!(anim.current_frame(), 11);
        anim.advance();
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(anim.current_frame(), 9);
    }

    #[test]
    fn index_stays_in_range_over_many_advances() {
        let mut anim = Animation::new(vec![1, 2, 3, 4, 5, 6, 7, 8]);
        for _ in 0..1000 {
            anim.advance();
            assert!(anim.frame_index() < anim.frames().len());
        }
    }

    #[test]
    fn empty_sequence_falls_back_to_frame_zero() {
        let mut anim = Animation::new(Vec::new());
        assert_eq!(anim.current_frame(), 0);
        anim.advance();
        assert_eq!(anim.frame_index(), 0);
    }
}
