//! Headless frontends
//!
//! Null and recording implementations of the boundary traits, used by the
//! demo binary and by tests. None of them touch a display, a keyboard or a
//! sound device.

use super::audio::{AudioCue, SoundEffect};
use super::input::{InputSource, InputState};
use super::render::{Renderer, ScoreDisplay, Sprite};

/// Renderer and score display that drop every call
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _sprite: Sprite, _x: i32, _y: i32) {}
}

impl ScoreDisplay for NullRenderer {
    fn draw_score(&mut self, _value: u32, _x: i32, _y: i32) {}
}

/// Renderer and score display that record every call for inspection
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub draws: Vec<(Sprite, i32, i32)>,
    pub scores: Vec<(u32, i32, i32)>,
    pub frames_presented: u32,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, sprite: Sprite, x: i32, y: i32) {
        self.draws.push((sprite, x, y));
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

impl ScoreDisplay for RecordingRenderer {
    fn draw_score(&mut self, value: u32, x: i32, y: i32) {
        self.scores.push((value, x, y));
    }
}

/// Audio sink that counts cues instead of playing them
#[derive(Debug, Default)]
pub struct CountingAudio {
    pub bounces: u32,
}

impl AudioCue for CountingAudio {
    fn play(&mut self, effect: SoundEffect) {
        match effect {
            SoundEffect::PaddleBounce => self.bounces += 1,
        }
    }
}

/// Input source that reports idle controls forever
#[derive(Debug, Default)]
pub struct IdleInput;

impl InputSource for IdleInput {
    fn poll(&mut self) -> InputState {
        InputState::default()
    }
}

/// Input source that replays a fixed script.
///
/// Frames past the end of the script report idle controls with no quit.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: Vec<InputState>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(script: Vec<InputState>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputState {
        let state = self.script.get(self.cursor).copied().unwrap_or_default();
        self.cursor += 1;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{PaddleCommand, TickInput};

    #[test]
    fn test_scripted_input_goes_idle_past_the_end() {
        let step = InputState {
            commands: TickInput {
                left: PaddleCommand::Up,
                right: PaddleCommand::Idle,
            },
            quit: false,
        };
        let mut input = ScriptedInput::new(vec![step]);

        assert_eq!(input.poll(), step);
        assert_eq!(input.poll(), InputState::default());
        assert_eq!(input.poll(), InputState::default());
    }

    #[test]
    fn test_counting_audio_counts_bounces() {
        let mut audio = CountingAudio::default();
        audio.play(SoundEffect::PaddleBounce);
        audio.play(SoundEffect::PaddleBounce);
        assert_eq!(audio.bounces, 2);
    }
}
