//! Render boundary.
//!
//! The render system never talks to a graphics API. It appends
//! [`DrawCommand`]s to the [`DrawList`] resource, and the host replays them
//! into whatever [`DrawSink`] it owns (a raylib window, a log, a test
//! recorder).
use bevy_ecs::prelude::*;
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole target.
    Clear { color: Rgba },
    FillRect { rect: Rect, color: Rgba },
    /// Copy `src` from the tile sheet into `dest`, rotated by `rotation`
    /// radians about the centre of `dest` when present.
    Blit {
        src: Rect,
        dest: Rect,
        rotation: Option<f32>,
    },
}

/// Commands produced by the last render pass, in paint order.
#[derive(Resource, Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn blits(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Blit { .. }))
    }

    /// Replay every command into `sink`.
    pub fn present(&self, sink: &mut impl DrawSink) {
        for command in &self.commands {
            sink.execute(command);
        }
    }
}

/// Anything able to carry out draw commands.
pub trait DrawSink {
    fn execute(&mut self, command: &DrawCommand);
}

impl DrawSink for Vec<DrawCommand> {
    fn execute(&mut self, command: &DrawCommand) {
        self.push(*command);
    }
}

/// Sink for headless runs: traces each command and counts them.
#[derive(Debug, Default)]
pub struct LogSink {
    pub executed: u64,
}

impl DrawSink for LogSink {
    fn execute(&mut self, command: &DrawCommand) {
        self.executed += 1;
        trace!("draw {:?}", command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_replays_in_order() {
        let mut list = DrawList::default();
        list.push(DrawCommand::Clear { color: Rgba::BLACK });
        list.push(DrawCommand::Blit {
            src: Rect::new(0.0, 0.0, 32.0, 32.0),
            dest: Rect::new(10.0, 10.0, 32.0, 32.0),
            rotation: None,
        });

        let mut recorded: Vec<DrawCommand> = Vec::new();
        list.present(&mut recorded);
        assert_eq!(recorded, list.commands);
        assert_eq!(list.blits().count(), 1);

        let mut log = LogSink::default();
        list.present(&mut log);
        assert_eq!(log.executed, 2);
    }

    #[test]
    fn rect_center() {
        let r = Rect::new(10.0, 20.0, 32.0, 16.0);
        assert_eq!(r.center(), (26.0, 28.0));
    }
}
