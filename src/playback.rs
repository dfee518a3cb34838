//! Playback controller for a step sequence
//!
//! [`Player`] holds the position into a [`StepSequence`] and the play/pause state.
//! It only ever reads steps; a new run replaces the sequence wholesale.

use crate::settings::speed::DEFAULT_SPEED;
use crate::snapshot::{Step, StepSequence};
use std::time::Duration;
use thiserror::Error;

/// Time between steps at 1x speed
pub const BASE_INTERVAL: Duration = Duration::from_millis(1000);

/// Navigation that could not move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("already at the first step")]
    AtStart,

    #[error("already at the last step")]
    AtEnd,
}

#[derive(Debug, Clone)]
pub struct Player {
    steps: StepSequence,
    position: usize,
    is_playing: bool,
    speed: f64,
}

impl Player {
    pub fn new(steps: StepSequence) -> Self {
        Player {
            steps,
            position: 0,
            is_playing: false,
            speed: DEFAULT_SPEED,
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.set_speed(speed);
        self
    }

    pub fn steps(&self) -> &StepSequence {
        &self.steps
    }

    /// Step at the current position
    pub fn current(&self) -> Option<&Step> {
        self.steps.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Non-positive speeds are ignored
    pub fn set_speed(&mut self, speed: f64) {
        if speed > 0.0 {
            self.speed = speed;
        }
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.steps.len()
    }

    /// Delay between automatic advances at the current speed
    pub fn interval(&self) -> Duration {
        BASE_INTERVAL.div_f64(self.speed)
    }

    /// Move one step forward. Manual navigation pauses playback.
    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        self.is_playing = false;
        self.advance()
    }

    /// Move one step backward. Manual navigation pauses playback.
    pub fn step_backward(&mut self) -> Result<(), PlaybackError> {
        self.is_playing = false;
        if self.position == 0 {
            return Err(PlaybackError::AtStart);
        }
        self.position -= 1;
        Ok(())
    }

    fn advance(&mut self) -> Result<(), PlaybackError> {
        if self.is_at_end() {
            return Err(PlaybackError::AtEnd);
        }
        self.position += 1;
        Ok(())
    }

    /// Toggle play/pause. Playing from the last step restarts from the first.
    pub fn toggle_play(&mut self) {
        if self.is_playing {
            self.is_playing = false;
        } else {
            if self.is_at_end() {
                self.position = 0;
            }
            self.is_playing = !self.steps.is_empty();
        }
    }

    /// Back to the first step, paused
    pub fn reset(&mut self) {
        self.position = 0;
        self.is_playing = false;
    }

    /// Jump to `index` (clamped to the last step), paused
    pub fn seek(&mut self, index: usize) {
        self.position = index.min(self.steps.len().saturating_sub(1));
        self.is_playing = false;
    }

    pub fn seek_end(&mut self) {
        self.seek(usize::MAX);
    }

    /// Swap in the steps of a new run
    pub fn replace(&mut self, steps: StepSequence) {
        self.steps = steps;
        self.reset();
    }

    /// Advance one step if playing and `elapsed` covers the interval.
    ///
    /// Returns whether the position moved. Playback pauses on reaching the end.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.is_playing || elapsed < self.interval() {
            return false;
        }
        let moved = self.advance().is_ok();
        if self.is_at_end() {
            self.is_playing = false;
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::generate;

    fn player() -> Player {
        // 1 + 7 + 1 steps
        Player::new(generate(&["ab".to_string()]))
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut player = player();
        assert_eq!(player.step_backward(), Err(PlaybackError::AtStart));

        for _ in 0..8 {
            player.step_forward().expect("step forward");
        }
        assert!(player.is_at_end());
        assert_eq!(player.step_forward(), Err(PlaybackError::AtEnd));
        assert_eq!(player.position(), 8);

        player.step_backward().expect("step backward");
        assert_eq!(player.position(), 7);
    }

    #[test]
    fn test_toggle_at_end_restarts() {
        let mut player = player();
        player.seek_end();
        player.toggle_play();
        assert!(player.is_playing());
        assert_eq!(player.position(), 0);

        player.toggle_play();
        assert!(!player.is_playing());
    }

    #[test]
    fn test_tick_respects_interval_and_speed() {
        let mut player = player().with_speed(2.0);
        assert_eq!(player.interval(), Duration::from_millis(500));

        assert!(!player.tick(Duration::from_secs(5)), "paused players never move");

        player.toggle_play();
        assert!(!player.tick(Duration::from_millis(499)));
        assert!(player.tick(Duration::from_millis(500)));
        assert_eq!(player.position(), 1);
    }

    #[test]
    fn test_tick_stops_at_end() {
        let mut player = player();
        player.seek(7);
        player.toggle_play();
        assert!(player.tick(BASE_INTERVAL));
        assert!(player.is_at_end());
        assert!(!player.is_playing());
        assert!(!player.tick(BASE_INTERVAL));
    }

    #[test]
    fn test_manual_step_pauses() {
        let mut player = player();
        player.toggle_play();
        player.step_forward().expect("step forward");
        assert!(!player.is_playing());
    }

    #[test]
    fn test_seek_and_replace() {
        let mut player = player();
        player.seek(100);
        assert_eq!(player.position(), 8);

        player.replace(generate(&["a".to_string(), "b".to_string()]));
        assert_eq!(player.position(), 0);
        assert_eq!(player.len(), 16);
        assert_eq!(
            player.current().map(|s| s.step_index),
            Some(0)
        );
    }

    #[test]
    fn test_invalid_speed_is_ignored() {
        let mut player = player();
        player.set_speed(0.0);
        assert_eq!(player.speed(), DEFAULT_SPEED);
    }
}
