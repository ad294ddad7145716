//! Game driver
//!
//! Owns the simulation and everything around it. The host calls `handle_input`
//! from its event callbacks and `frame` once per rendered frame; queued
//! commands are applied before the frame's simulation steps.

use crate::highscores::HighScores;
use crate::input::{CommandQueue, InputAdapter, RawInput};
use crate::settings::Settings;
use crate::sim::{
    Command, FrameClock, GameEvent, SimulationState, Snapshot, apply_command,
};

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    state: SimulationState,
    clock: FrameClock,
    input: InputAdapter,
    queue: CommandQueue,
    high_scores: HighScores,
    runs_finished: u32,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        log::info!(
            "Starting run (seed {}, {} timestep)",
            settings.seed,
            settings.timestep.as_str()
        );
        Self {
            state: SimulationState::new(settings.seed),
            clock: FrameClock::new(settings),
            input: InputAdapter::new(settings),
            queue: CommandQueue::new(),
            high_scores: HighScores::with_capacity(settings.leaderboard_size),
            runs_finished: 0,
        }
    }

    /// Translate and queue a platform event
    pub fn handle_input(&mut self, input: RawInput) {
        let command = self.input.translate(&mut self.state, input);
        self.queue.push(command);
    }

    /// Queue a command directly (scripted play, tests)
    pub fn push_command(&mut self, command: Command) {
        self.queue.push(command);
    }

    /// Apply queued commands, then step the simulation for `frame_dt` seconds.
    /// Returns the events raised during the frame.
    pub fn frame(&mut self, frame_dt: f32) -> Vec<GameEvent> {
        let mut restarted = false;
        for command in self.queue.drain() {
            apply_command(&mut self.state, command);
            restarted |= command == Command::Restart;
        }
        if restarted {
            self.clock.reset();
        }

        self.clock.tick_frame(&mut self.state, frame_dt);

        let events = self.state.drain_events();
        for event in &events {
            if let GameEvent::GameOver { score } = *event {
                self.runs_finished += 1;
                self.high_scores.add_score(
                    score,
                    self.state.size_level,
                    self.state.elapsed_seconds,
                );
            }
        }
        events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn runs_finished(&self) -> u32 {
        self.runs_finished
    }

    /// Leftover fraction of a step, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.clock.alpha()
    }
}
