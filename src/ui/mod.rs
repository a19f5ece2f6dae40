mod button;

pub use button::{Button, ButtonAction};

use macroquad::prelude::{screen_height, screen_width};

// UI constants
pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const BUTTON_SPACING: f32 = 46.0;

/// Edge length of one cell on screen, in pixels
pub const CELL_SIZE: f32 = 20.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Map a pixel position inside the grid area to cell indices
pub fn pixel_to_cell(pixel_x: f32, pixel_y: f32) -> (i32, i32) {
    (
        (pixel_x / CELL_SIZE).floor() as i32,
        (pixel_y / CELL_SIZE).floor() as i32,
    )
}

/// Create the simulation control buttons, one per engine operation
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    let controls = [
        (ButtonAction::Start, "Start"),
        (ButtonAction::Pause, "Pause"),
        (ButtonAction::Clear, "Clear"),
        (ButtonAction::Randomize, "Random"),
        (ButtonAction::Faster, "Faster"),
        (ButtonAction::Slower, "Slower"),
    ];

    controls
        .into_iter()
        .enumerate()
        .map(|(i, (action, label))| {
            Button::new(
                px,
                20.0 + i as f32 * BUTTON_SPACING,
                PANEL_WIDTH,
                BUTTON_HEIGHT,
                label,
                action,
            )
        })
        .collect()
}
