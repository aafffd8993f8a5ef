//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Default time between simulation ticks, in milliseconds
pub(crate) const TICK_PERIOD_MS: u64 = 50;

/// Default distance the head travels each tick, in play-area units
pub(crate) const SPEED: f64 = 3.0;

/// Default width of the play area, in play-area units
pub(crate) const AREA_WIDTH: f64 = 300.0;

/// Default height of the play area, in play-area units
pub(crate) const AREA_HEIGHT: f64 = 300.0;

/// Default diameter of the head and of each body segment
pub(crate) const SNAKE_DIAMETER: f64 = 20.0;

/// Default diameter of the food
pub(crate) const FOOD_DIAMETER: f64 = 15.0;

/// Default number of past positions a segment retains before relaying one to
/// its child
pub(crate) const TRAIL_CAPACITY: usize = 5;

/// Default number of segments appended per food consumed
pub(crate) const CHUNK_SIZE: usize = 5;

/// The self-collision check skips the first `chunk size × SELF_SKIP_FACTOR`
/// chain slots nearest the head, so that the head's trailing neighbors and
/// freshly grown segments never register as collisions.
pub(crate) const SELF_SKIP_FACTOR: usize = 3;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Size of the bordered block the play area is drawn in, in terminal cells
pub(crate) const CANVAS_SIZE: Size = Size {
    width: 64,
    height: 21,
};

/// Color of the snake's head and body on the play-area canvas
pub(crate) const SNAKE_COLOR: Color = Color::Green;

/// Color of the food on the play-area canvas
pub(crate) const FOOD_COLOR: Color = Color::LightRed;

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the "GAME OVER" message
pub(crate) const GAME_OVER_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::BOLD);
