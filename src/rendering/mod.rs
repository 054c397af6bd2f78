use macroquad::prelude::*;

use crate::application::{Camera, GameState, LifeEngine, fit_cell_size};

pub const PANEL_WIDTH: f32 = 180.0;

/// Get the width of the board area (everything left of the panel)
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the board area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Pixel size of one cell before zoom, so the whole board fits the window
pub fn base_cell_size(engine: &dyn LifeEngine) -> f32 {
    fit_cell_size(engine.size(), grid_area_width(), grid_area_height())
}

/// Draw the board with camera support.
/// Live cells use the foreground colour; only the visible window is read.
pub fn draw_board(engine: &dyn LifeEngine, camera: &Camera) {
    let base = base_cell_size(engine);
    let cell_size = base * camera.zoom;
    let (rows, cols) = camera.visible_cells(
        grid_area_width(),
        grid_area_height(),
        base,
        engine.size(),
    );

    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);
    let draw_grid_lines = cell_size >= 6.0;

    for row in rows {
        for col in cols.clone() {
            let (x, y) = camera.cell_to_screen(row, col, base);
            if engine.cell(row, col).is_some_and(|cell| cell.is_alive()) {
                draw_rectangle(x, y, cell_size, cell_size, alive_color);
            }
            if draw_grid_lines {
                draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, grid_line_color);
            }
        }
    }
}

/// Draw the side panel with simulation info and key help
pub fn draw_panel(state: &GameState, camera: &Camera, status: Option<&str>) {
    let px = grid_area_width();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let x = px + 10.0;
    let engine = &state.engine;
    let info = Color::from_rgba(180, 180, 180, 255);

    let labels = [
        ("Rule:".to_owned(), 30.0, 16.0, WHITE),
        (engine.rule().to_string(), 50.0, 18.0, Color::from_rgba(0, 255, 150, 255)),
        ("Generation:".to_owned(), 85.0, 16.0, WHITE),
        (engine.generation().to_string(), 105.0, 20.0, Color::from_rgba(0, 255, 150, 255)),
        ("Population:".to_owned(), 140.0, 16.0, WHITE),
        (engine.population().to_string(), 160.0, 18.0, info),
        (format!("Board: {0}x{0}", engine.size()), 190.0, 14.0, info),
        (format!("Step: {}", engine.algorithm().name()), 208.0, 14.0, info),
        (format!("Evolve: {:.1}ms", state.last_evolution_time_ms), 226.0, 13.0, GRAY),
        (format!("Render: {:.1}ms", state.last_render_time_ms), 242.0, 13.0, GRAY),
        (format!("Speed: {:.0} gen/s", state.updates_per_second), 270.0, 14.0, info),
        (format!("Zoom: {:.1}x", camera.zoom), 288.0, 14.0, info),
    ];
    for (text, y, size, color) in &labels {
        draw_text(text, x, *y, *size, *color);
    }

    let (status_text, status_color) = if state.is_running {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };
    draw_text(status_text, x, 320.0, 18.0, status_color);

    let controls = [
        "Controls:",
        "Space: Play/Pause",
        "N: Step",
        "Up/Down: Speed",
        "S: Save PNG",
        "Wheel: Zoom",
        "Mid-drag: Pan",
        "H: Reset view",
        "Esc: Quit",
    ];
    for (i, line) in controls.iter().enumerate() {
        let color = if i == 0 { WHITE } else { GRAY };
        draw_text(line, x, 360.0 + i as f32 * 15.0, 13.0, color);
    }

    if let Some(status) = status {
        draw_text(status, x, screen_height() - 20.0, 12.0, YELLOW);
    }
}
