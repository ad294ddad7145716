//! Input adapter
//!
//! Platform callbacks push `RawInput`s here; they are translated into
//! `Command`s and queued until the game loop drains them before the next step.

use std::collections::VecDeque;

use crate::settings::Settings;
use crate::sim::{Command, JumpKind, SimulationState};

/// A platform input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput {
    /// Pointer or touch tap anywhere
    Tap,
    /// Space key pressed (key repeat already filtered out)
    SpaceDown { timestamp_ms: u64 },
}

/// Translates raw events into commands
#[derive(Debug, Clone, Copy)]
pub struct InputAdapter {
    tap_jump: JumpKind,
    double_press_window_ms: u64,
}

impl InputAdapter {
    pub fn new(settings: &Settings) -> Self {
        Self {
            tap_jump: settings.tap_jump,
            double_press_window_ms: settings.double_press_window_ms,
        }
    }

    /// Map an event to a command given the current state
    ///
    /// Space presses are recorded in `state.last_space_down_ms` even when
    /// the run is over.
    pub fn translate(&self, state: &mut SimulationState, input: RawInput) -> Command {
        match input {
            RawInput::Tap => tap_command(state, self.tap_jump),
            RawInput::SpaceDown { timestamp_ms } => {
                let is_double =
                    state.register_space_down(timestamp_ms, self.double_press_window_ms);
                space_command(state, is_double)
            }
        }
    }
}

/// Restart when the run is over, otherwise jump with `tap_jump`
pub fn tap_command(state: &SimulationState, tap_jump: JumpKind) -> Command {
    if state.is_game_over() {
        Command::Restart
    } else {
        Command::Jump(tap_jump)
    }
}

/// Restart when the run is over, otherwise a high jump on double press
pub fn space_command(state: &SimulationState, is_double_press: bool) -> Command {
    if state.is_game_over() {
        Command::Restart
    } else if is_double_press {
        Command::Jump(JumpKind::High)
    } else {
        Command::Jump(JumpKind::Short)
    }
}

/// FIFO of commands waiting for the next simulation step
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and yield commands in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.pending.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[test]
    fn test_tap_jumps_or_restarts() {
        let mut state = SimulationState::new(1);
        assert_eq!(tap_command(&state, JumpKind::Short), Command::Jump(JumpKind::Short));
        assert_eq!(tap_command(&state, JumpKind::High), Command::Jump(JumpKind::High));

        state.phase = GamePhase::GameOver;
        assert_eq!(tap_command(&state, JumpKind::Short), Command::Restart);
    }

    #[test]
    fn test_space_double_press() {
        let adapter = InputAdapter::new(&Settings::default());
        let mut state = SimulationState::new(1);

        let first = adapter.translate(&mut state, RawInput::SpaceDown { timestamp_ms: 5_000 });
        assert_eq!(first, Command::Jump(JumpKind::Short));

        let second = adapter.translate(&mut state, RawInput::SpaceDown { timestamp_ms: 5_200 });
        assert_eq!(second, Command::Jump(JumpKind::High));

        let late = adapter.translate(&mut state, RawInput::SpaceDown { timestamp_ms: 5_451 });
        assert_eq!(late, Command::Jump(JumpKind::Short));
        assert_eq!(state.last_space_down_ms, Some(5_451));
    }

    #[test]
    fn test_space_restarts_when_over() {
        let adapter = InputAdapter::new(&Settings::default());
        let mut state = SimulationState::new(1);
        state.phase = GamePhase::GameOver;
        let cmd = adapter.translate(&mut state, RawInput::SpaceDown { timestamp_ms: 10 });
        assert_eq!(cmd, Command::Restart);
    }

    #[test]
    fn test_tap_uses_configured_jump() {
        let settings = Settings {
            tap_jump: JumpKind::High,
            ..Settings::default()
        };
        let adapter = InputAdapter::new(&settings);
        let mut state = SimulationState::new(1);
        assert_eq!(
            adapter.translate(&mut state, RawInput::Tap),
            Command::Jump(JumpKind::High)
        );
    }

    #[test]
    fn test_queue_preserves_order() {
        let mut queue = CommandQueue::new();
        queue.push(Command::Jump(JumpKind::Short));
        queue.push(Command::Restart);
        assert_eq!(queue.len(), 2);
        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained, vec![Command::Jump(JumpKind::Short), Command::Restart]);
        assert!(queue.is_empty());
    }
}
