//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, integer pixel arithmetic only
//! - No rendering, audio or platform dependencies
//! - No clocks; real-time pauses are the frame loop's job

pub mod state;
pub mod tick;

pub use state::{Ball, MatchState, Paddle, PaddleCommand, RallyPhase, Side};
pub use tick::{TickEvents, TickInput, tick};
