//! Frame clock: turns real frame deltas into simulation steps
//!
//! Fixed mode accumulates time and runs whole `fixed_dt` steps (capped per
//! frame). Variable mode simulates the frame delta itself, split into steps
//! no longer than `MAX_STEP_DT`.

use super::state::SimulationState;
use super::tick::advance;
use crate::consts::MAX_STEP_DT;
use crate::settings::{Settings, TimestepMode};

/// Step scheduler owned by the game loop
#[derive(Debug, Clone)]
pub struct FrameClock {
    mode: TimestepMode,
    fixed_dt: f32,
    max_substeps: u32,
    max_frame_dt: f32,
    accumulator: f32,
}

impl FrameClock {
    pub fn new(settings: &Settings) -> Self {
        Self {
            mode: settings.timestep,
            fixed_dt: settings.fixed_dt,
            max_substeps: settings.max_substeps,
            max_frame_dt: settings.max_frame_dt,
            accumulator: 0.0,
        }
    }

    pub fn mode(&self) -> TimestepMode {
        self.mode
    }

    /// Leftover time not yet simulated
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Fraction of a fixed step left over, for render interpolation
    pub fn alpha(&self) -> f32 {
        match self.mode {
            TimestepMode::Fixed => self.accumulator / self.fixed_dt,
            TimestepMode::Variable => 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// Run the steps owed for a frame of `frame_dt` seconds; returns steps taken
    pub fn tick_frame(&mut self, state: &mut SimulationState, frame_dt: f32) -> u32 {
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, self.max_frame_dt)
        } else {
            log::warn!("Non-finite frame delta, skipping frame");
            0.0
        };

        match self.mode {
            TimestepMode::Variable => {
                let mut remaining = frame_dt;
                let mut steps = 0;
                loop {
                    let step = remaining.min(MAX_STEP_DT);
                    advance(state, step);
                    steps += 1;
                    remaining -= step;
                    if remaining <= 0.0 {
                        break;
                    }
                }
                steps
            }
            TimestepMode::Fixed => {
                self.accumulator += frame_dt;

                let mut substeps = 0;
                while self.accumulator >= self.fixed_dt && substeps < self.max_substeps {
                    advance(state, self.fixed_dt);
                    self.accumulator -= self.fixed_dt;
                    substeps += 1;
                }

                if substeps == self.max_substeps && self.accumulator >= self.fixed_dt {
                    log::warn!(
                        "Dropping {:.3}s of simulation time (substep cap {})",
                        self.accumulator,
                        self.max_substeps
                    );
                    self.accumulator %= self.fixed_dt;
                }
                substeps
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn fixed_settings() -> Settings {
        Settings {
            timestep: TimestepMode::Fixed,
            ..Settings::default()
        }
    }

    #[test]
    fn test_fixed_accumulates_partial_frames() {
        let mut clock = FrameClock::new(&fixed_settings());
        let mut state = SimulationState::new(1);

        assert_eq!(clock.tick_frame(&mut state, SIM_DT * 0.5), 0);
        assert_eq!(state.elapsed_seconds, 0.0);
        assert_eq!(clock.tick_frame(&mut state, SIM_DT * 0.6), 1);
        assert!((state.elapsed_seconds - SIM_DT).abs() < 1e-6);
        assert!(clock.alpha() > 0.0 && clock.alpha() < 1.0);
    }

    #[test]
    fn test_substeps_capped() {
        let settings = Settings {
            max_frame_dt: 1.0,
            ..fixed_settings()
        };
        let mut clock = FrameClock::new(&settings);
        let mut state = SimulationState::new(1);
        state.obstacle_x = 100.0;

        // 1s owed is 60 steps; only the cap runs, the rest is dropped
        let steps = clock.tick_frame(&mut state, 10.0);
        assert_eq!(steps, settings.max_substeps);
        assert_eq!(steps, MAX_SUBSTEPS);
        assert!(clock.accumulator() < settings.fixed_dt);
        assert!((state.elapsed_seconds - MAX_SUBSTEPS as f32 * SIM_DT).abs() < 1e-5);
    }

    #[test]
    fn test_variable_uses_frame_delta() {
        let settings = Settings {
            timestep: TimestepMode::Variable,
            ..Settings::default()
        };
        let mut clock = FrameClock::new(&settings);
        let mut state = SimulationState::new(1);

        assert_eq!(clock.tick_frame(&mut state, 0.02), 1);
        assert!((state.elapsed_seconds - 0.02).abs() < 1e-6);
        assert_eq!(clock.alpha(), 0.0);
    }

    #[test]
    fn test_variable_long_frames_keep_real_time() {
        let settings = Settings {
            timestep: TimestepMode::Variable,
            ..Settings::default()
        };
        let mut clock = FrameClock::new(&settings);
        let mut state = SimulationState::new(1);

        for _ in 0..10 {
            // 0.05 + 0.03
            assert_eq!(clock.tick_frame(&mut state, 0.08), 2);
        }
        assert!((state.elapsed_seconds - 0.8).abs() < 1e-4);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_non_finite_frame_is_skipped() {
        let mut clock = FrameClock::new(&fixed_settings());
        let mut state = SimulationState::new(1);
        assert_eq!(clock.tick_frame(&mut state, f32::NAN), 0);
        assert_eq!(clock.tick_frame(&mut state, f32::INFINITY), 0);
        assert_eq!(state.elapsed_seconds, 0.0);
    }
}
