//! Per-frame simulation step
//!
//! `tick` advances the whole match by exactly one frame: paddles first,
//! then the ball, then the scoring check. It is pure and deterministic;
//! real-time concerns (the frame cap, the post-point pause) belong to the
//! caller.

use serde::{Deserialize, Serialize};

use super::state::{MatchState, PaddleCommand, RallyPhase, Side};
use crate::consts::{FREEZE_LEFT_X, FREEZE_RIGHT_X};

/// Control states for one frame, both paddles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: PaddleCommand,
    pub right: PaddleCommand,
}

/// What happened during a tick that the outside world may care about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// The ball bounced off a paddle this frame
    pub paddle_bounce: bool,
    /// A point was decided this frame; the side is the scorer
    pub point: Option<Side>,
}

/// Advance the match by one frame.
///
/// While the phase is `JustScored` the match does not advance; the caller
/// must run `MatchState::resolve_point` before play continues.
pub fn tick(state: &mut MatchState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();

    if matches!(state.phase, RallyPhase::JustScored(_)) {
        return events;
    }

    state.left_paddle.handle_input(input.left);
    state.right_paddle.handle_input(input.right);
    state.left_paddle.advance();
    state.right_paddle.advance();

    events.paddle_bounce = state
        .ball
        .advance(state.left_paddle.pos.y, state.right_paddle.pos.y);

    // Scoring check: an exited ball rests on a field edge, and an edge
    // position means the opposite player took the point.
    let scorer = match state.ball.pos.x {
        FREEZE_LEFT_X => Some(Side::Right),
        FREEZE_RIGHT_X => Some(Side::Left),
        _ => None,
    };
    if let Some(side) = scorer {
        state.phase = RallyPhase::JustScored(side);
        events.point = Some(side);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::IVec2;

    /// Drive ticks until a point is decided or the frame budget runs out.
    fn play_until_point(state: &mut MatchState, input: &TickInput, max_frames: u32) -> (Side, u32) {
        for frame in 1..=max_frames {
            let events = tick(state, input);
            if let Some(scorer) = events.point {
                return (scorer, frame);
            }
        }
        panic!("no point decided within {max_frames} frames");
    }

    #[test]
    fn test_idle_frame_leaves_paddles_in_place() {
        let mut state = MatchState::new();
        let input = TickInput::default();

        tick(&mut state, &input);

        assert_eq!(state.left_paddle.pos.y, PADDLE_START_Y);
        assert_eq!(state.right_paddle.pos.y, PADDLE_START_Y);
        assert_eq!(state.ball.pos, IVec2::new(90, 305));
    }

    #[test]
    fn test_paddle_commands_move_both_paddles() {
        let mut state = MatchState::new();
        let input = TickInput {
            left: PaddleCommand::Up,
            right: PaddleCommand::Down,
        };

        tick(&mut state, &input);

        assert_eq!(state.left_paddle.pos.y, PADDLE_START_Y - PADDLE_SPEED);
        assert_eq!(state.right_paddle.pos.y, PADDLE_START_Y + PADDLE_SPEED);
    }

    #[test]
    fn test_opening_serve_scores_for_left_against_idle_paddles() {
        let mut state = MatchState::new();
        let input = TickInput::default();

        let (scorer, frame) = play_until_point(&mut state, &input, 500);

        // (780 - 85) / 5 frames from serve to the right edge.
        assert_eq!(scorer, Side::Left);
        assert_eq!(frame, 139);
        assert_eq!(state.ball.pos.x, FREEZE_RIGHT_X);
        assert_eq!(state.phase, RallyPhase::JustScored(Side::Left));

        state.resolve_point();
        assert_eq!(state.score_left, 1);
        assert_eq!(state.score_right, 0);
        assert_eq!(state.ball.pos, SERVE_TOWARD_RIGHT_POS);
        assert_eq!(state.ball.vel, SERVE_TOWARD_RIGHT_VEL);
    }

    #[test]
    fn test_leftward_serve_scores_for_right_against_idle_paddles() {
        let mut state = MatchState::new();
        state.ball.serve(Side::Left);
        let input = TickInput::default();

        let (scorer, _) = play_until_point(&mut state, &input, 500);

        assert_eq!(scorer, Side::Right);
        assert_eq!(state.ball.pos.x, FREEZE_LEFT_X);

        state.resolve_point();
        assert_eq!(state.score_right, 1);
        assert_eq!(state.ball.pos, SERVE_TOWARD_LEFT_POS);
        assert_eq!(state.ball.vel, SERVE_TOWARD_LEFT_VEL);
    }

    #[test]
    fn test_intercepting_paddle_bounces_ball_exactly_once() {
        let mut state = MatchState::new();

        // Raise the right paddle for 15 frames so its strike window covers
        // the ball's arrival at the right plane, then hold still.
        let mut bounces = 0u32;
        let mut bounce_frame = 0u32;
        let mut scorer = None;
        for frame in 1..=500u32 {
            let input = TickInput {
                left: PaddleCommand::Idle,
                right: if frame <= 15 {
                    PaddleCommand::Up
                } else {
                    PaddleCommand::Idle
                },
            };
            let events = tick(&mut state, &input);
            if events.paddle_bounce {
                bounces += 1;
                bounce_frame = frame;
                assert_eq!(state.ball.vel.x, -5);
            }
            if events.point.is_some() {
                scorer = events.point;
                break;
            }
        }

        // The ball reaches x = 705 on frame 124 at y = 145, inside the
        // raised paddle's window, and is returned past the idle left paddle.
        assert_eq!(bounces, 1);
        assert_eq!(bounce_frame, 124);
        assert_eq!(scorer, Some(Side::Right));
    }

    #[test]
    fn test_tick_is_inert_while_point_pending() {
        let mut state = MatchState::new();
        state.phase = RallyPhase::JustScored(Side::Left);
        let before = state.clone();

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(events, TickEvents::default());
        assert_eq!(state, before);
    }

    #[test]
    fn test_tick_is_deterministic() {
        let mut a = MatchState::new();
        let mut b = MatchState::new();

        let inputs = [
            TickInput {
                left: PaddleCommand::Up,
                right: PaddleCommand::Down,
            },
            TickInput::default(),
            TickInput {
                left: PaddleCommand::Down,
                right: PaddleCommand::Down,
            },
        ];

        for input in inputs.iter().cycle().take(300) {
            tick(&mut a, input);
            tick(&mut b, input);
        }

        assert_eq!(a, b);
    }
}
