//! The per-frame application loop
//!
//! Composes the simulation with the boundary traits in a fixed order:
//! poll input, tick, sound cues, render, frame cap, point resolution.
//! Single-threaded and cooperative; the only suspensions are the frame-cap
//! sleep and the one-second pause after a point.

use std::thread;

use log::{debug, info};

use crate::consts::*;
use crate::platform::{AudioCue, FrameLimiter, InputSource, Renderer, ScoreDisplay, SoundEffect, Sprite};
use crate::sim::{MatchState, RallyPhase, tick};

/// Owns the match state and the frontend collaborators
pub struct App<R, S, I, A> {
    pub state: MatchState,
    pub renderer: R,
    pub scoreboard: S,
    pub input: I,
    pub audio: A,
    limiter: FrameLimiter,
}

impl<R, S, I, A> App<R, S, I, A>
where
    R: Renderer,
    S: ScoreDisplay,
    I: InputSource,
    A: AudioCue,
{
    pub fn new(renderer: R, scoreboard: S, input: I, audio: A) -> Self {
        Self {
            state: MatchState::new(),
            renderer,
            scoreboard,
            input,
            audio,
            limiter: FrameLimiter::new(FRAME_INTERVAL),
        }
    }

    /// Run frames until the input source reports a quit request
    pub fn run(&mut self) {
        info!("match started");
        while self.step() {}
        info!(
            "match ended {} - {}",
            self.state.score_left, self.state.score_right
        );
    }

    /// One full frame. Returns false once the player asked to quit.
    ///
    /// Blocks for the frame cap, and for `POINT_PAUSE` in a frame that
    /// decides a point. A quit arriving during either sleep is not observed
    /// until the next frame's poll.
    pub fn step(&mut self) -> bool {
        self.limiter.start_frame();

        let input = self.input.poll();
        if input.quit {
            return false;
        }

        let events = tick(&mut self.state, &input.commands);
        if events.paddle_bounce {
            self.audio.play(SoundEffect::PaddleBounce);
        }

        self.render_frame();
        self.limiter.cap();

        if let RallyPhase::JustScored(scorer) = self.state.phase {
            debug!("point to {scorer:?}");
            thread::sleep(POINT_PAUSE);
            self.state.resolve_point();
            info!(
                "score {} - {}",
                self.state.score_left, self.state.score_right
            );
        }

        true
    }

    /// Draw the complete frame in a fixed order: field furniture and scores
    /// first, then the moving pieces.
    fn render_frame(&mut self) {
        self.renderer.draw(Sprite::Background, 0, 0);

        let left_pos = if self.state.score_left > 9 {
            LEFT_SCORE_WIDE_POS
        } else {
            LEFT_SCORE_POS
        };
        self.scoreboard
            .draw_score(self.state.score_left, left_pos.x, left_pos.y);
        self.scoreboard
            .draw_score(self.state.score_right, RIGHT_SCORE_POS.x, RIGHT_SCORE_POS.y);

        self.renderer.draw(Sprite::Wall, TOP_WALL_POS.x, TOP_WALL_POS.y);
        self.renderer
            .draw(Sprite::Wall, BOTTOM_WALL_POS.x, BOTTOM_WALL_POS.y);
        self.renderer.draw(Sprite::Net, NET_POS.x, NET_POS.y);

        let left = self.state.left_paddle.pos;
        self.renderer.draw(Sprite::Paddle, left.x, left.y);
        let right = self.state.right_paddle.pos;
        self.renderer.draw(Sprite::Paddle, right.x, right.y);

        let ball = self.state.ball.pos;
        self.renderer.draw(Sprite::Ball, ball.x, ball.y);

        self.renderer.present();
    }
}
