//! Drawing boundary
//!
//! The core asks a `Renderer` to blit named sprites at absolute screen
//! positions and a `ScoreDisplay` to draw score glyphs. How either maps a
//! sprite to pixels is entirely the frontend's business.

/// The fixed set of images the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Background,
    /// Top and bottom wall strip (the same image, drawn twice)
    Wall,
    Net,
    /// Either paddle
    Paddle,
    Ball,
}

/// Blits sprites at absolute screen positions
pub trait Renderer {
    /// Draw a sprite with its top-left corner at (x, y)
    fn draw(&mut self, sprite: Sprite, x: i32, y: i32);

    /// Flip the finished frame to the screen
    fn present(&mut self) {}
}

/// Turns an integer score into a drawable glyph at a screen position
pub trait ScoreDisplay {
    fn draw_score(&mut self, value: u32, x: i32, y: i32);
}
