//! Drawing surface used by the card layout
//!
//! Layout code only talks to [`Canvas`]. [`PdfCanvas`] renders through
//! printpdf; [`RecordingCanvas`] keeps the calls in memory.

mod markup;
mod pdf;
mod recording;

pub use markup::{Script, TextRun, parse_markup};
pub use pdf::PdfCanvas;
pub use recording::{DrawCall, RecordingCanvas};

use crate::constants::mm_to_pt;
use crate::types::Result;

/// A rectangular area in millimeters, origin at the bottom-left of the page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// A straight line in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// Single-line, centered text that shrinks to fit its box
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    /// Display string, possibly with `<sup>`/`<sub>` tags and escaped `<`/`>`
    pub text: String,
    pub rect: Rect,
    /// Size used when the text fits comfortably
    pub max_font_size_pt: f32,
    /// Floor for shrinking; zero means the text may shrink arbitrarily
    pub min_font_size_pt: f32,
    /// Vertical space reserved around the line
    pub leading_pt: f32,
}

impl TextBox {
    /// Font size that keeps the line inside the box.
    ///
    /// `width_per_pt` is the rendered width of the text at a 1pt font size.
    pub fn fit_font_size(&self, width_per_pt: f32) -> f32 {
        let box_width_pt = mm_to_pt(self.rect.width);
        let box_height_pt = mm_to_pt(self.rect.height);

        let mut size = self
            .max_font_size_pt
            .min((box_height_pt - self.leading_pt).max(0.0));
        if width_per_pt > 0.0 {
            size = size.min(box_width_pt / width_per_pt);
        }
        size.max(self.min_font_size_pt)
    }
}

/// The narrow drawing interface the card layout needs
pub trait Canvas {
    /// What the finished document turns into
    type Output;

    /// Start a new page; later calls draw onto it
    fn begin_page(&mut self);

    fn draw_rect(&mut self, rect: Rect, line_width_pt: f32);

    fn draw_line(&mut self, line: Segment, line_width_pt: f32);

    fn draw_text_box(&mut self, text_box: &TextBox);

    /// Render the document. Consumes the canvas so it is finished once.
    fn finish(self) -> Result<Self::Output>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::POINTS_PER_MM;

    fn pt_to_mm(pt: f32) -> f32 {
        pt / POINTS_PER_MM
    }

    fn text_box(width_pt: f32, height_pt: f32) -> TextBox {
        TextBox {
            text: "x".to_string(),
            rect: Rect::new(0.0, 0.0, pt_to_mm(width_pt), pt_to_mm(height_pt)),
            max_font_size_pt: 100.0,
            min_font_size_pt: 0.0,
            leading_pt: 2.0,
        }
    }

    #[test]
    fn test_fit_limited_by_height() {
        let size = text_box(500.0, 20.0).fit_font_size(1.0);
        assert!((size - 18.0).abs() < 0.01);
    }

    #[test]
    fn test_fit_limited_by_width() {
        let size = text_box(50.0, 200.0).fit_font_size(5.0);
        assert!((size - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_fit_limited_by_max() {
        let size = text_box(5000.0, 5000.0).fit_font_size(1.0);
        assert_eq!(size, 100.0);
    }

    #[test]
    fn test_fit_never_negative() {
        let size = text_box(0.0, 1.0).fit_font_size(3.0);
        assert_eq!(size, 0.0);
    }
}
