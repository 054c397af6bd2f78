use std::time::Instant;

use super::{GameOfLife, LifeEngine};

/// GameState drives an engine at a fixed rate for the interactive viewer.
pub struct GameState {
    pub engine: GameOfLife,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_evolution_time_ms: f32,
    pub last_render_time_ms: f32,
}

impl GameState {
    pub fn new(engine: GameOfLife) -> Self {
        Self {
            engine,
            is_running: false,
            update_timer: 0.0,
            updates_per_second: 10.0,
            last_evolution_time_ms: 0.0,
            last_render_time_ms: 0.0,
        }
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Advance exactly one generation, whether running or paused
    pub fn step_once(mut self) -> Self {
        let start = Instant::now();
        self.engine.step();
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= 1.0 / self.updates_per_second {
            self.update_timer = 0.0;
            return self.step_once();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Grid, LifeRule};

    fn paused_state() -> GameState {
        let engine = GameOfLife::from_grid(Grid::new(10), LifeRule::parse("B3/S23").unwrap());
        GameState::new(engine)
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let state = paused_state().tick(10.0);
        assert_eq!(state.engine.generation(), 0);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let state = paused_state().with_running(true);
        let state = state.tick(0.05);
        assert_eq!(state.engine.generation(), 0);
        let state = state.tick(0.06);
        assert_eq!(state.engine.generation(), 1);
        assert_eq!(state.update_timer, 0.0);
    }

    #[test]
    fn test_step_once_while_paused() {
        let state = paused_state().step_once().step_once();
        assert_eq!(state.engine.generation(), 2);
        assert!(!state.is_running);
    }

    #[test]
    fn test_speed_is_clamped() {
        let state = paused_state().adjust_speed(100.0);
        assert_eq!(state.updates_per_second, 60.0);
        let state = state.adjust_speed(-100.0);
        assert_eq!(state.updates_per_second, 1.0);
    }

    #[test]
    fn test_toggle_running() {
        let state = paused_state().toggle_running();
        assert!(state.is_running);
        assert!(!state.toggle_running().is_running);
    }
}
