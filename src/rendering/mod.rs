use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Board;
use crate::ui::{Button, CELL_SIZE, PANEL_WIDTH, panel_x};

/// Draw the board: a filled square per live cell, a stroked border per cell
pub fn draw_board(board: &Board) {
    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let border_color = Color::from_rgba(40, 40, 40, 255);

    for (x, y, cell) in board.iter_cells() {
        let screen_x = x as f32 * CELL_SIZE;
        let screen_y = y as f32 * CELL_SIZE;

        if cell.is_alive() {
            draw_rectangle(screen_x, screen_y, CELL_SIZE, CELL_SIZE, alive_color);
        }
        draw_rectangle_lines(screen_x, screen_y, CELL_SIZE, CELL_SIZE, 1.0, border_color);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons and simulation info
pub fn draw_controls(state: &GameState, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x() + 8.0;

    // Key bindings help - positioned below the buttons
    let controls = [
        ("Controls:", px, 320.0, 14.0, WHITE),
        ("LMB: Toggle cell", px, 336.0, 12.0, GRAY),
        ("Space: Play/Pause", px, 349.0, 12.0, GRAY),
        ("C: Clear", px, 362.0, 12.0, GRAY),
        ("R: Random", px, 375.0, 12.0, GRAY),
        ("Up/Down: Speed", px, 388.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });

    let interval_label = format!("{} ms/gen", state.interval_ms);
    let generation_label = format!("{}", state.generation);

    let labels = [
        ("Speed:", px, 430.0, 16.0, WHITE),
        (
            interval_label.as_str(),
            px,
            450.0,
            14.0,
            Color::from_rgba(180, 180, 180, 255),
        ),
        ("Generation:", px, 480.0, 16.0, WHITE),
        (
            generation_label.as_str(),
            px,
            500.0,
            20.0,
            Color::from_rgba(0, 255, 150, 255),
        ),
        ("Status:", px, 535.0, 16.0, WHITE),
        (
            if state.is_running { "Running" } else { "Paused" },
            px,
            555.0,
            16.0,
            if state.is_running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
    ];
    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });
}
