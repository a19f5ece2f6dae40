use macroquad::prelude::*;

use crate::application::GameState;
use crate::ui::{Button, ButtonAction, grid_area_width, pixel_to_cell};

/// Apply one named control trigger to the game state
pub fn apply_action(state: GameState, action: ButtonAction) -> GameState {
    match action {
        ButtonAction::Start => state.resume(),
        ButtonAction::Pause => state.pause(),
        ButtonAction::Clear => state.clear(),
        ButtonAction::Randomize => state.randomize(),
        ButtonAction::Faster => state.speed_up(),
        ButtonAction::Slower => state.slow_down(),
    }
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> GameState {
    buttons.iter().fold(state, |s, btn| {
        if btn.is_clicked(mouse_pos) {
            apply_action(s, btn.action)
        } else {
            s
        }
    })
}

/// Handle click-to-toggle editing on the grid area.
/// One toggle per press; clicks on the control panel are left alone.
pub fn handle_mouse_toggle(state: &mut GameState, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) || mouse_pos.0 >= grid_area_width() {
        return;
    }

    let (x, y) = pixel_to_cell(mouse_pos.0, mouse_pos.1);
    let (cols, rows) = state.board.dimensions();
    if x < 0 || y < 0 || x >= cols as i32 || y >= rows as i32 {
        return;
    }

    state.toggle_cell(x as usize, y as usize);
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::Up, GameState::speed_up),
        (KeyCode::Down, GameState::slow_down),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
