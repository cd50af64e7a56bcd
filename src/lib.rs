//! Pokébase Console - a terminal slash-command client for the Pokébase API
//!
//! Core modules:
//! - `sim`: Deterministic bubble-field simulation (physics, collisions, snapshots)
//! - `command`: Slash-command parsing, arity validation, and suggestions
//! - `history`: Command recall (newest-first, bounded)
//! - `api`: Blocking HTTP client for the Pokébase backend
//! - `console`: Raw-mode line editor and command dispatch
//! - `field_view`: Crossterm rendering of the bubble field

pub mod api;
pub mod command;
pub mod console;
pub mod field_view;
pub mod history;
pub mod settings;
pub mod sim;

pub use api::ApiClient;
pub use command::Command;
pub use history::CommandHistory;
pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// Bubbles spawned by default
    pub const DEFAULT_BUBBLE_COUNT: usize = 20;

    /// Reference viewport used when no real dimensions are known (pixels)
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1200.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 800.0;

    /// Positions live in normalized viewport units, [0, FIELD_MAX] per axis
    pub const FIELD_MAX: f32 = 100.0;

    /// Spawn inset so bubbles never start flush against an edge
    pub const SPAWN_X_MIN: f32 = 10.0;
    pub const SPAWN_X_MAX: f32 = 90.0;
    pub const SPAWN_Y_MIN: f32 = 10.0;
    pub const SPAWN_Y_MAX: f32 = 80.0;

    /// Initial velocity components are uniform in +/- SPAWN_SPEED (units/frame)
    pub const SPAWN_SPEED: f32 = 0.2;

    /// Bubble diameter range (pixels), fixed at spawn
    pub const SIZE_MIN: u32 = 80;
    pub const SIZE_MAX: u32 = 150;

    /// Jitter added per velocity component by a perturb (+/-)
    pub const PERTURB_JITTER: f32 = 0.08;

    /// Frame pacing for the terminal field view
    pub const FIELD_FPS: u64 = 30;
}

/// Diameter in pixels to radius in normalized field units.
///
/// Width is the sole unit basis: the field is visually square-normalized, so
/// height never enters the conversion.
#[inline]
pub fn pixel_radius(size_px: f32, viewport_width: f32) -> f32 {
    size_px / viewport_width * 50.0
}
