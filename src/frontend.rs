//! Windowed host on raylib.
//!
//! Polls the keys the session's tanks are bound to, forwards transitions as
//! key events, ticks at the configured rate and draws the last draw list
//! with the tile sheet texture.

use log::{error, info};
use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::keybinding::{KeyBinding, KeyCode};
use crate::events::input::KeyEvent;
use crate::game::{Game, TickClock};
use crate::resources::drawlist::{DrawCommand, DrawSink, Rect, Rgba};

/// Map a browser key code to raylib's numbering.
///
/// Letters, digits and space coincide; arrows and enter do not.
pub fn raylib_key(code: KeyCode) -> i32 {
    match code {
        KeyCode::ENTER => 257,
        KeyCode::RIGHT => 262,
        KeyCode::LEFT => 263,
        KeyCode::DOWN => 264,
        KeyCode::UP => 265,
        KeyCode(other) => other as i32,
    }
}

fn color(c: Rgba) -> Color {
    Color::new(c.r, c.g, c.b, c.a)
}

fn rectangle(r: Rect) -> Rectangle {
    Rectangle::new(r.x, r.y, r.width, r.height)
}

struct RaylibSink<'a, D: RaylibDraw> {
    d: &'a mut D,
    sheet: &'a Texture2D,
}

impl<D: RaylibDraw> DrawSink for RaylibSink<'_, D> {
    fn execute(&mut self, command: &DrawCommand) {
        match *command {
            DrawCommand::Clear { color: c } => self.d.clear_background(color(c)),
            DrawCommand::FillRect { rect, color: c } => {
                self.d.draw_rectangle_rec(rectangle(rect), color(c))
            }
            DrawCommand::Blit {
                src,
                dest,
                rotation,
            } => {
                // raylib rotates about `origin`, measured from the dest corner
                let (cx, cy) = dest.center();
                let centred = Rectangle::new(cx, cy, dest.width, dest.height);
                let origin = Vector2::new(dest.width / 2.0, dest.height / 2.0);
                self.d.draw_texture_pro(
                    self.sheet,
                    rectangle(src),
                    centred,
                    origin,
                    rotation.unwrap_or(0.0).to_degrees(),
                    Color::WHITE,
                );
            }
        }
    }
}

/// Open a window and run `game` until it is closed.
pub fn run_window(mut game: Game) {
    let arena = game.arena();
    let (mut rl, thread) = raylib::init()
        .size(arena.width as i32, arena.height as i32)
        .title("Tankyard")
        .build();
    rl.set_target_fps(60);

    let sheet_path = game.config().tile_sheet.clone();
    let sheet = match rl.load_texture(&thread, &sheet_path.to_string_lossy()) {
        Ok(texture) => texture,
        Err(e) => {
            error!("Failed to load tile sheet {}: {}", sheet_path.display(), e);
            return;
        }
    };
    info!("Loaded tile sheet {}", sheet_path.display());

    let watched: Vec<KeyCode> = game
        .tanks()
        .iter()
        .filter_map(|tank| game.world().get::<KeyBinding>(*tank).copied())
        .flat_map(|binding| binding.codes().collect::<Vec<_>>())
        .collect();
    let mut held: FxHashMap<KeyCode, bool> = FxHashMap::default();
    let sender = game.sender();
    let mut clock = TickClock::new(game.tick_interval());

    while !rl.window_should_close() {
        for code in &watched {
            let down = unsafe { raylib::ffi::IsKeyDown(raylib_key(*code)) };
            let was = held.insert(*code, down).unwrap_or(false);
            if down != was {
                let _ = sender.send(KeyEvent {
                    code: *code,
                    pressed: down,
                });
            }
        }

        for _ in 0..clock.advance(rl.get_frame_time()) {
            game.tick();
        }

        let mut d = rl.begin_drawing(&thread);
        let mut sink = RaylibSink {
            d: &mut d,
            sheet: &sheet,
        };
        game.present(&mut sink);
    }
    info!("Window closed after {} tick(s)", game.tick_count());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_enter_are_remapped() {
        assert_eq!(raylib_key(KeyCode::UP), 265);
        assert_eq!(raylib_key(KeyCode::ENTER), 257);
        assert_eq!(raylib_key(KeyCode::W), 87);
        assert_eq!(raylib_key(KeyCode::SPACE), 32);
    }
}
