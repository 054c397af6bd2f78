use macroquad::prelude::*;

use crate::application::{Camera, GameState};

/// What the viewer loop should do besides updating state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerAction {
    None,
    Save,
    Quit,
}

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_by(1.1);
    } else if wheel < 0.0 {
        camera.zoom_by(1.0 / 1.1);
    }
}

/// Handle pan with middle mouse button drag.
/// `last_pos` carries the previous drag position between frames.
pub fn handle_pan(camera: &mut Camera, mouse_pos: (f32, f32), last_pos: &mut Option<(f32, f32)>) {
    if is_mouse_button_down(MouseButton::Middle) {
        if let Some(last) = *last_pos {
            camera.pan(mouse_pos.0 - last.0, mouse_pos.1 - last.1);
        }
        *last_pos = Some(mouse_pos);
    } else {
        *last_pos = None;
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState, camera: &mut Camera) -> (GameState, ViewerAction) {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 4] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::N, GameState::step_once),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let new_state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }

    let action = if is_key_pressed(KeyCode::Escape) {
        ViewerAction::Quit
    } else if is_key_pressed(KeyCode::S) {
        ViewerAction::Save
    } else {
        ViewerAction::None
    };
    (new_state, action)
}
