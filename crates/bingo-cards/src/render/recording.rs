use super::{Canvas, Rect, Segment, TextBox};
use crate::types::Result;

/// One call made against a [`RecordingCanvas`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    BeginPage,
    Rect { rect: Rect, line_width_pt: f32 },
    Line { line: Segment, line_width_pt: f32 },
    Text(TextBox),
}

/// Canvas that stores draw calls instead of rendering them
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn page_count(&self) -> usize {
        self.count(|call| matches!(call, DrawCall::BeginPage))
    }

    pub fn rect_count(&self) -> usize {
        self.count(|call| matches!(call, DrawCall::Rect { .. }))
    }

    pub fn line_count(&self) -> usize {
        self.count(|call| matches!(call, DrawCall::Line { .. }))
    }

    pub fn text_count(&self) -> usize {
        self.count(|call| matches!(call, DrawCall::Text(_)))
    }

    /// Text boxes in draw order
    pub fn text_boxes(&self) -> impl Iterator<Item = &TextBox> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text(text_box) => Some(text_box),
            _ => None,
        })
    }

    /// Calls grouped by page, without the page markers
    pub fn pages(&self) -> Vec<&[DrawCall]> {
        self.calls
            .split(|call| matches!(call, DrawCall::BeginPage))
            .skip(1)
            .collect()
    }

    fn count(&self, predicate: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|&call| predicate(call)).count()
    }
}

impl Canvas for RecordingCanvas {
    type Output = Vec<DrawCall>;

    fn begin_page(&mut self) {
        self.calls.push(DrawCall::BeginPage);
    }

    fn draw_rect(&mut self, rect: Rect, line_width_pt: f32) {
        self.calls.push(DrawCall::Rect {
            rect,
            line_width_pt,
        });
    }

    fn draw_line(&mut self, line: Segment, line_width_pt: f32) {
        self.calls.push(DrawCall::Line {
            line,
            line_width_pt,
        });
    }

    fn draw_text_box(&mut self, text_box: &TextBox) {
        self.calls.push(DrawCall::Text(text_box.clone()));
    }

    fn finish(self) -> Result<Vec<DrawCall>> {
        Ok(self.calls)
    }
}
