//! Game configuration resource.
//!
//! Manages session settings loaded from an INI configuration file. Provides
//! defaults that reproduce the classic two-tank arena and methods to
//! load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [game]
//! tick_ms = 100
//! tile_size = 32
//! sheet_columns = 8
//! tile_sheet = images/tanks_sheet.png
//! map = maps/arena.txt
//! arena_width = 672
//! arena_height = 544
//!
//! [bullet]
//! speed = 20
//! frame = 21
//! fire_mode = edge
//! lifetime = unbounded
//!
//! [tank.1]
//! x = 50
//! y = 50
//! speed = 10
//! frames = 1,2,3,4,5,6,7,8
//! up = 38
//! down = 40
//! left = 37
//! right = 39
//! fire = 13
//! ```
//!
//! Each `[tank.N]` section adds one tank; tanks are spawned in order of `N`.
//! When the file names no tank, the two default tanks are used. Tanks past
//! the second should name all four directional keys.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};

use crate::components::keybinding::{KeyBinding, KeyCode};

/// Default safe values for startup
const DEFAULT_TICK_MS: u64 = 100;
const DEFAULT_TILE_SIZE: u32 = 32;
const DEFAULT_SHEET_COLUMNS: u32 = 8;
const DEFAULT_TILE_SHEET: &str = "images/tanks_sheet.png";
const DEFAULT_ARENA_WIDTH: u32 = 672;
const DEFAULT_ARENA_HEIGHT: u32 = 544;
const DEFAULT_BULLET_SPEED: f32 = 20.0;
const DEFAULT_BULLET_FRAME: u32 = 21;
const DEFAULT_TANK_SPEED: f32 = 10.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// When a tank's fire key triggers a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FireMode {
    /// Once, on the tick the key is first seen held.
    #[default]
    Edge,
    /// Every tick while the key is held.
    Held,
}

/// What happens to bullets after they are fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulletLifetime {
    /// Bullets are never removed.
    #[default]
    Unbounded,
    /// Bullets leaving the arena rectangle are despawned.
    OutOfBounds,
}

impl FromStr for FireMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "edge" => Ok(FireMode::Edge),
            "held" => Ok(FireMode::Held),
            other => Err(format!("Unknown fire_mode '{}', expected edge or held", other)),
        }
    }
}

impl fmt::Display for FireMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FireMode::Edge => "edge",
            FireMode::Held => "held",
        })
    }
}

impl FromStr for BulletLifetime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unbounded" => Ok(BulletLifetime::Unbounded),
            "out_of_bounds" => Ok(BulletLifetime::OutOfBounds),
            other => Err(format!(
                "Unknown lifetime '{}', expected unbounded or out_of_bounds",
                other
            )),
        }
    }
}

impl fmt::Display for BulletLifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BulletLifetime::Unbounded => "unbounded",
            BulletLifetime::OutOfBounds => "out_of_bounds",
        })
    }
}

/// Startup parameters of one tank.
#[derive(Debug, Clone, PartialEq)]
pub struct TankSetup {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub frames: Vec<u32>,
    pub binding: KeyBinding,
}

impl TankSetup {
    /// Arrow keys, green frames, top-left corner.
    pub fn player_one() -> Self {
        Self {
            x: 50.0,
            y: 50.0,
            speed: DEFAULT_TANK_SPEED,
            frames: (1..=8).collect(),
            binding: KeyBinding::arrows(),
        }
    }

    /// WASD, blue frames, bottom-right corner.
    pub fn player_two() -> Self {
        Self {
            x: 450.0,
            y: 450.0,
            speed: DEFAULT_TANK_SPEED,
            frames: (9..=16).collect(),
            binding: KeyBinding::wasd(),
        }
    }
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Fixed interval between ticks in milliseconds.
    pub tick_ms: u64,
    /// Width and height of one sheet cell and one map tile, in pixels.
    pub tile_size: u32,
    /// Number of cells per row in the tile sheet.
    pub sheet_columns: u32,
    /// Tile sheet image path (only used by windowed front ends).
    pub tile_sheet: PathBuf,
    /// Optional map file; the built-in arena is used otherwise.
    pub map_path: Option<PathBuf>,
    /// Arena size in pixels when there is no map to measure.
    pub arena_width: u32,
    pub arena_height: u32,
    pub bullet_speed: f32,
    /// Sheet frame number drawn for bullets.
    pub bullet_frame: u32,
    pub fire_mode: FireMode,
    pub bullet_lifetime: BulletLifetime,
    pub tanks: Vec<TankSetup>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            tile_size: DEFAULT_TILE_SIZE,
            sheet_columns: DEFAULT_SHEET_COLUMNS,
            tile_sheet: PathBuf::from(DEFAULT_TILE_SHEET),
            map_path: None,
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            bullet_speed: DEFAULT_BULLET_SPEED,
            bullet_frame: DEFAULT_BULLET_FRAME,
            fire_mode: FireMode::default(),
            bullet_lifetime: BulletLifetime::default(),
            tanks: vec![TankSetup::player_one(), TankSetup::player_two()],
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or a value is malformed;
    /// nothing is applied in that case.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_all(&config)?;

        info!(
            "Loaded config from {:?}: tick={}ms, {} tank(s), fire_mode={}, lifetime={}",
            self.config_path,
            self.tick_ms,
            self.tanks.len(),
            self.fire_mode,
            self.bullet_lifetime
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_all(&config)
    }

    /// Apply every value or none: a bad value leaves `self` untouched.
    fn apply_all(&mut self, config: &Ini) -> Result<(), String> {
        let mut next = self.clone();
        next.apply(config)?;
        *self = next;
        Ok(())
    }

    fn apply(&mut self, config: &Ini) -> Result<(), String> {
        // [game] section
        if let Some(ms) = config.getuint("game", "tick_ms")? {
            self.tick_ms = ms;
        }
        if let Some(size) = config.getuint("game", "tile_size")? {
            self.tile_size = size as u32;
        }
        if let Some(columns) = config.getuint("game", "sheet_columns")? {
            self.sheet_columns = columns as u32;
        }
        if let Some(sheet) = config.get("game", "tile_sheet") {
            self.tile_sheet = PathBuf::from(sheet);
        }
        if let Some(map) = config.get("game", "map") {
            self.map_path = (!map.trim().is_empty()).then(|| PathBuf::from(map.trim()));
        }
        if let Some(width) = config.getuint("game", "arena_width")? {
            self.arena_width = width as u32;
        }
        if let Some(height) = config.getuint("game", "arena_height")? {
            self.arena_height = height as u32;
        }

        // [bullet] section
        if let Some(speed) = config.getfloat("bullet", "speed")? {
            self.bullet_speed = speed as f32;
        }
        if let Some(frame) = config.getuint("bullet", "frame")? {
            self.bullet_frame = frame as u32;
        }
        if let Some(mode) = config.get("bullet", "fire_mode") {
            self.fire_mode = mode.parse()?;
        }
        if let Some(lifetime) = config.get("bullet", "lifetime") {
            self.bullet_lifetime = lifetime.parse()?;
        }

        // [tank.N] sections
        let mut sections: Vec<String> = config
            .sections()
            .into_iter()
            .filter(|s| s.starts_with("tank"))
            .collect();
        sections.sort_by_key(|s| (tank_number(s), s.clone()));
        if !sections.is_empty() {
            self.tanks = sections
                .iter()
                .enumerate()
                .map(|(index, section)| read_tank(config, section, index))
                .collect::<Result<Vec<_>, String>>()?;
        }

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Render the configuration as INI text.
    pub fn to_ini_string(&self) -> String {
        self.to_ini().writes()
    }

    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();

        // [game] section
        config.set("game", "tick_ms", Some(self.tick_ms.to_string()));
        config.set("game", "tile_size", Some(self.tile_size.to_string()));
        config.set("game", "sheet_columns", Some(self.sheet_columns.to_string()));
        config.set(
            "game",
            "tile_sheet",
            Some(self.tile_sheet.display().to_string()),
        );
        if let Some(map) = &self.map_path {
            config.set("game", "map", Some(map.display().to_string()));
        }
        config.set("game", "arena_width", Some(self.arena_width.to_string()));
        config.set("game", "arena_height", Some(self.arena_height.to_string()));

        // [bullet] section
        config.set("bullet", "speed", Some(self.bullet_speed.to_string()));
        config.set("bullet", "frame", Some(self.bullet_frame.to_string()));
        config.set("bullet", "fire_mode", Some(self.fire_mode.to_string()));
        config.set("bullet", "lifetime", Some(self.bullet_lifetime.to_string()));

        for (index, tank) in self.tanks.iter().enumerate() {
            let section = format!("tank.{}", index + 1);
            config.set(&section, "x", Some(tank.x.to_string()));
            config.set(&section, "y", Some(tank.y.to_string()));
            config.set(&section, "speed", Some(tank.speed.to_string()));
            let frames: Vec<String> = tank.frames.iter().map(u32::to_string).collect();
            config.set(&section, "frames", Some(frames.join(",")));
            config.set(&section, "up", Some(tank.binding.up.0.to_string()));
            config.set(&section, "down", Some(tank.binding.down.0.to_string()));
            config.set(&section, "left", Some(tank.binding.left.0.to_string()));
            config.set(&section, "right", Some(tank.binding.right.0.to_string()));
            let fire = tank
                .binding
                .fire
                .map(|code| code.0.to_string())
                .unwrap_or_else(|| "none".to_string());
            config.set(&section, "fire", Some(fire));
        }

        config
    }

    /// Tick interval as a [`std::time::Duration`].
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_ms.max(1))
    }
}

/// Numeric suffix of a `[tank.N]` section; unnumbered sections sort last.
fn tank_number(section: &str) -> u32 {
    section
        .trim_start_matches("tank")
        .trim_start_matches('.')
        .parse()
        .unwrap_or(u32::MAX)
}

fn read_tank(config: &Ini, section: &str, index: usize) -> Result<TankSetup, String> {
    let mut tank = match index {
        0 => TankSetup::player_one(),
        1 => TankSetup::player_two(),
        _ => {
            let unbound: Vec<&str> = ["up", "down", "left", "right"]
                .into_iter()
                .filter(|key| config.get(section, key).is_none())
                .collect();
            if !unbound.is_empty() {
                warn!(
                    "[{}] has no {} key(s); they fall back to the arrow keys shared with the first tank",
                    section,
                    unbound.join("/")
                );
            }
            TankSetup::player_one()
        }
    };

    if let Some(x) = config.getfloat(section, "x")? {
        tank.x = x as f32;
    }
    if let Some(y) = config.getfloat(section, "y")? {
        tank.y = y as f32;
    }
    if let Some(speed) = config.getfloat(section, "speed")? {
        tank.speed = speed as f32;
    }
    if let Some(frames) = config.get(section, "frames") {
        tank.frames = parse_frames(&frames)
            .map_err(|e| format!("[{}] frames: {}", section, e))?;
    }
    if let Some(code) = read_key(config, section, "up")? {
        tank.binding.up = code;
    }
    if let Some(code) = read_key(config, section, "down")? {
        tank.binding.down = code;
    }
    if let Some(code) = read_key(config, section, "left")? {
        tank.binding.left = code;
    }
    if let Some(code) = read_key(config, section, "right")? {
        tank.binding.right = code;
    }
    if let Some(fire) = config.get(section, "fire") {
        tank.binding.fire = match fire.trim().to_ascii_lowercase().as_str() {
            "" | "none" => None,
            code => Some(parse_key(code).map_err(|e| format!("[{}] fire: {}", section, e))?),
        };
    }

    Ok(tank)
}

fn read_key(config: &Ini, section: &str, key: &str) -> Result<Option<KeyCode>, String> {
    config
        .get(section, key)
        .map(|value| parse_key(&value).map_err(|e| format!("[{}] {}: {}", section, key, e)))
        .transpose()
}

fn parse_key(value: &str) -> Result<KeyCode, String> {
    value
        .trim()
        .parse::<u32>()
        .map(KeyCode)
        .map_err(|e| format!("invalid key-code '{}': {}", value.trim(), e))
}

/// Parse a comma separated list of frame numbers. Blank entries are skipped.
pub fn parse_frames(value: &str) -> Result<Vec<u32>, String> {
    let frames = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|e| format!("invalid frame '{}': {}", s, e))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if frames.is_empty() {
        warn!("Empty frame list, falling back to frame 0");
    }
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_two_tank_arena() {
        let config = GameConfig::new();
        assert_eq!(config.tick_ms, 100);
        assert_eq!(config.tanks.len(), 2);
        assert_eq!(config.tanks[0].binding, KeyBinding::arrows());
        assert_eq!(config.tanks[1].binding, KeyBinding::wasd());
        assert_eq!(config.tanks[1].frames, vec![9, 10, 11, 12, 13, 14, 15, 16]);
        assert_eq!(config.fire_mode, FireMode::Edge);
        assert_eq!(config.bullet_lifetime, BulletLifetime::Unbounded);
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[game]\ntick_ms = 50\n")
            .expect("valid config");
        assert_eq!(config.tick_ms, 50);
        assert_eq!(config.tile_size, 32);
        assert_eq!(config.tanks.len(), 2);
    }

    #[test]
    fn tank_sections_replace_default_tanks() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[tank.1]\nx = 10\ny = 20\nframes = 3, 4\nfire = none\n\n[bullet]\nfire_mode = held\nlifetime = out_of_bounds\n",
            )
            .expect("valid config");
        assert_eq!(config.tanks.len(), 1);
        let tank = &config.tanks[0];
        assert_eq!((tank.x, tank.y), (10.0, 20.0));
        assert_eq!(tank.frames, vec![3, 4]);
        assert_eq!(tank.binding.fire, None);
        assert_eq!(tank.binding.up, KeyCode::UP);
        assert_eq!(config.fire_mode, FireMode::Held);
        assert_eq!(config.bullet_lifetime, BulletLifetime::OutOfBounds);
    }

    #[test]
    fn malformed_values_are_errors() {
        let mut config = GameConfig::new();
        assert!(config.load_from_str("[bullet]\nfire_mode = sometimes\n").is_err());

        let mut config = GameConfig::new();
        assert!(config.load_from_str("[tank.1]\nup = arrow\n").is_err());
    }

    #[test]
    fn ini_text_round_trips_through_loader() {
        let mut original = GameConfig::new();
        original.bullet_lifetime = BulletLifetime::OutOfBounds;
        original.tanks[1].binding.fire = None;

        let mut reloaded = GameConfig::new();
        reloaded
            .load_from_str(&original.to_ini_string())
            .expect("written config parses");
        assert_eq!(reloaded.tanks, original.tanks);
        assert_eq!(reloaded.bullet_lifetime, BulletLifetime::OutOfBounds);
        assert_eq!(reloaded.tick_ms, original.tick_ms);
    }

    #[test]
    fn failed_load_leaves_config_untouched() {
        let mut config = GameConfig::new();
        let result = config.load_from_str(
            "[game]\ntick_ms = 5\ntile_size = 7\n\n[bullet]\nspeed = 99\nfire_mode = sometimes\n",
        );
        assert!(result.is_err());
        assert_eq!(config.tick_ms, 100);
        assert_eq!(config.tile_size, 32);
        assert_eq!(config.bullet_speed, 20.0);
        assert_eq!(config.fire_mode, FireMode::Edge);

        let result = config.load_from_str("[tank.1]\nx = 1\n\n[tank.2]\nup = north\n");
        assert!(result.is_err());
        assert_eq!(config.tanks, GameConfig::new().tanks);
    }

    #[test]
    fn tank_sections_sort_numerically() {
        let mut text = String::new();
        for n in 1..=10 {
            text.push_str(&format!(
                "[tank.{n}]\nx = {n}\nup = {}\ndown = 1\nleft = 2\nright = 3\n\n",
                100 + n
            ));
        }
        let mut config = GameConfig::new();
        config.load_from_str(&text).expect("valid config");

        let xs: Vec<f32> = config.tanks.iter().map(|t| t.x).collect();
        assert_eq!(xs, (1..=10).map(|n| n as f32).collect::<Vec<_>>());
        assert_eq!(config.tanks[9].binding.up, KeyCode(110));
        assert_eq!(config.tanks[1].binding.up, KeyCode(102));
    }

    #[test]
    fn tank_number_reads_suffix() {
        assert_eq!(tank_number("tank.2"), 2);
        assert_eq!(tank_number("tank.10"), 10);
        assert_eq!(tank_number("tank"), u32::MAX);
    }

    #[test]
    fn parse_frames_rejects_garbage() {
        assert_eq!(parse_frames("1,2, 3,").unwrap(), vec![1, 2, 3]);
        assert!(parse_frames("1,b").is_err());
    }
}
