//! Platform abstraction layer
//!
//! The simulation never touches a window, a keyboard or a sound device; it
//! talks to the outside world through the traits here:
//! - `InputSource`: per-frame sampling of decoded control states
//! - `Renderer` / `ScoreDisplay`: sprite blitting and score glyphs
//! - `AudioCue`: fire-and-forget sound effects
//! - `FrameLimiter`: best-effort frame pacing
//!
//! Real frontends (SDL, terminal, ...) implement these; `headless` ships
//! null and recording implementations for the demo binary and tests.

pub mod audio;
pub mod headless;
pub mod input;
pub mod render;
pub mod time;

pub use audio::{AudioCue, SoundEffect};
pub use input::{InputSource, InputState};
pub use render::{Renderer, ScoreDisplay, Sprite};
pub use time::FrameLimiter;
