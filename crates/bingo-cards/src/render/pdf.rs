use super::markup::{TextRun, parse_markup};
use super::{Canvas, Rect, Segment, TextBox};
use crate::constants::{CAP_HEIGHT_RATIO, mm_to_pt};
use crate::types::{BingoError, Result};
use printpdf::*;

/// DejaVu Sans, embedded when no other font is configured
pub const DEFAULT_FONT: &[u8] = include_bytes!("../../fonts/DejaVuSans.ttf");

struct PdfFont {
    id: FontId,
    font: ParsedFont,
    units_per_em: f32,
}

impl PdfFont {
    fn parse(doc: &mut PdfDocument, bytes: &[u8]) -> Result<Self> {
        let mut font_warnings = Vec::new();
        let font = ParsedFont::from_bytes(bytes, 0, &mut font_warnings)
            .ok_or_else(|| BingoError::Font("Failed to parse font".to_string()))?;
        for warning in &font_warnings {
            log::debug!("Font: {warning:?}");
        }

        let units_per_em = match font.font_metrics.units_per_em {
            0 => return Err(BingoError::Font("Font reports 0 units per em".to_string())),
            units => units as f32,
        };
        let id = doc.add_font(&font);

        Ok(Self {
            id,
            font,
            units_per_em,
        })
    }

    /// Width of `text` in points at a 1pt font size
    fn width_per_pt(&self, text: &str) -> f32 {
        let advance: u32 = text
            .chars()
            .filter_map(|ch| self.font.lookup_glyph_index(ch as u32))
            .map(|glyph_id| self.font.get_horizontal_advance(glyph_id) as u32)
            .sum();
        advance as f32 / self.units_per_em
    }

    fn runs_width_per_pt(&self, runs: &[TextRun]) -> f32 {
        runs.iter()
            .map(|run| self.width_per_pt(&run.text) * run.script.size_ratio())
            .sum()
    }

    fn missing_glyphs(&self, text: &str) -> Vec<char> {
        text.chars()
            .filter(|ch| !ch.is_whitespace())
            .filter(|&ch| self.font.lookup_glyph_index(ch as u32).is_none())
            .collect()
    }
}

/// printpdf document under construction
///
/// Pages are accumulated as op lists; the open page is pushed onto the
/// document when the next one begins or when the canvas is finished.
pub struct PdfCanvas {
    doc: PdfDocument,
    font: PdfFont,
    page_width_mm: f32,
    page_height_mm: f32,
    ops: Vec<Op>,
    page_open: bool,
}

impl PdfCanvas {
    /// Create a canvas embedding `font_bytes`, or [`DEFAULT_FONT`] when `None`
    pub fn new(
        title: &str,
        page_width_mm: f32,
        page_height_mm: f32,
        font_bytes: Option<&[u8]>,
    ) -> Result<Self> {
        let mut doc = PdfDocument::new(title);

        let font = PdfFont::parse(&mut doc, font_bytes.unwrap_or(DEFAULT_FONT))?;

        Ok(Self {
            doc,
            font,
            page_width_mm,
            page_height_mm,
            ops: Vec::new(),
            page_open: false,
        })
    }

    fn flush_page(&mut self) {
        if self.page_open {
            let ops = std::mem::take(&mut self.ops);
            self.doc.pages.push(PdfPage::new(
                Mm(self.page_width_mm),
                Mm(self.page_height_mm),
                ops,
            ));
        }
    }

    fn stroke(&mut self, points: &[(f32, f32)], is_closed: bool, line_width_pt: f32) {
        self.ops.push(Op::SetOutlineThickness {
            pt: Pt(line_width_pt),
        });
        self.ops.push(Op::DrawLine {
            line: Line {
                points: points
                    .iter()
                    .map(|&(x, y)| LinePoint {
                        p: Point {
                            x: Mm(x).into_pt(),
                            y: Mm(y).into_pt(),
                        },
                        bezier: false,
                    })
                    .collect(),
                is_closed,
            },
        });
    }

    fn write_run(&mut self, run: &TextRun, size_pt: f32, x_pt: f32, y_pt: f32) {
        let font = self.font.id.clone();
        self.ops.extend([
            Op::StartTextSection,
            Op::SetFontSize {
                font: font.clone(),
                size: Pt(size_pt),
            },
            Op::SetTextMatrix {
                matrix: TextMatrix::Translate(Pt(x_pt), Pt(y_pt)),
            },
            Op::WriteText {
                items: vec![TextItem::Text(run.text.clone())],
                font,
            },
            Op::EndTextSection,
        ]);
    }
}

impl Canvas for PdfCanvas {
    type Output = Vec<u8>;

    fn begin_page(&mut self) {
        self.flush_page();
        self.page_open = true;
    }

    fn draw_rect(&mut self, rect: Rect, line_width_pt: f32) {
        let corners = [
            (rect.x, rect.y),
            (rect.right(), rect.y),
            (rect.right(), rect.top()),
            (rect.x, rect.top()),
        ];
        self.stroke(&corners, true, line_width_pt);
    }

    fn draw_line(&mut self, line: Segment, line_width_pt: f32) {
        self.stroke(&[(line.x1, line.y1), (line.x2, line.y2)], false, line_width_pt);
    }

    fn draw_text_box(&mut self, text_box: &TextBox) {
        let runs = parse_markup(&text_box.text);
        if runs.is_empty() {
            return;
        }

        for run in &runs {
            let missing = self.font.missing_glyphs(&run.text);
            if !missing.is_empty() {
                log::warn!("Font has no glyph for {missing:?} in {:?}", run.text);
            }
        }

        let width_per_pt = self.font.runs_width_per_pt(&runs);
        let size = text_box.fit_font_size(width_per_pt);
        if size <= 0.0 {
            return;
        }

        let mut x = mm_to_pt(text_box.rect.center_x()) - width_per_pt * size / 2.0;
        let baseline = mm_to_pt(text_box.rect.center_y()) - size * CAP_HEIGHT_RATIO / 2.0;

        for run in &runs {
            let run_size = size * run.script.size_ratio();
            let y = baseline + size * run.script.baseline_shift();
            self.write_run(run, run_size, x, y);
            x += self.font.width_per_pt(&run.text) * run_size;
        }
    }

    fn finish(mut self) -> Result<Vec<u8>> {
        self.flush_page();

        let mut warnings = Vec::new();
        let bytes = self.doc.save(&PdfSaveOptions::default(), &mut warnings);
        for warning in &warnings {
            log::warn!("PDF save: {warning:?}");
        }

        Ok(bytes)
    }
}
