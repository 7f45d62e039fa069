//! Input sampling boundary

use crate::sim::TickInput;

/// Everything sampled from the player controls for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// Decoded per-paddle control states
    pub commands: TickInput,
    /// The player asked to close the game
    pub quit: bool,
}

/// Source of per-frame control states.
///
/// Implementations own the raw event plumbing (key down/up tracking, window
/// close events) and hand the simulation an already-decoded discrete state
/// per paddle. The simulation never sees raw events.
pub trait InputSource {
    /// Sample the current control state. Called exactly once per frame.
    fn poll(&mut self) -> InputState;
}
