//! Sound cue boundary

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball bounced off a paddle
    PaddleBounce,
}

/// Fire-and-forget sound playback; the core never consumes a result
pub trait AudioCue {
    fn play(&mut self, effect: SoundEffect);
}
