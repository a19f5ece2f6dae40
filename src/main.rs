use life_canvas::{GameState, input, rendering, ui};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 980,
        window_height: 600,
        // Board dimensions are fixed at construction, so the window is too.
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let cols = (ui::grid_area_width() / ui::CELL_SIZE) as usize;
    let rows = (ui::grid_area_height() / ui::CELL_SIZE) as usize;

    let mut state = match GameState::new(cols, rows) {
        Ok(state) => state,
        Err(err) => {
            error!("failed to initialize board: {err}");
            return;
        }
    };
    info!("board ready: {cols}x{rows} cells");

    let buttons = ui::create_buttons();

    loop {
        let mouse_pos = mouse_position();

        state = input::process_button_clicks(state, &buttons, mouse_pos);
        input::handle_mouse_toggle(&mut state, mouse_pos);
        state = input::process_keyboard_input(state);

        state = state.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_board(&state.board);
        rendering::draw_controls(&state, &buttons, mouse_pos);

        next_frame().await;
    }
}
