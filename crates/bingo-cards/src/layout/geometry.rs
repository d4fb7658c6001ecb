//! Page, card and cell geometry
//!
//! Sizes are in millimeters with the origin at the bottom-left of the page.
//! Cards stack from the top margin downwards; within a card, row 0 is the
//! bottom row, so the last row (the header row) sits at the top.

use crate::constants::*;
use crate::render::{Rect, Segment, TextBox};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGeometry {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub rows: usize,
    pub cols: usize,
    pub cards_per_page: usize,
    /// Vertical space between stacked cards
    pub gap_mm: f32,
    pub card_width_mm: f32,
    pub card_height_mm: f32,
    pub cell_width_mm: f32,
    pub cell_height_mm: f32,
    /// Cell size relative to the reference cell (square root of the area ratio)
    pub scale: f32,
    pub line_width_pt: f32,
    pub leading_pt: f32,
    /// Upper bound for text size; text boxes shrink below it as needed
    pub max_font_size_pt: f32,
}

/// Gap between cards for a given density
pub fn card_gap_mm(cards_per_page: usize) -> f32 {
    let cards_per_page = cards_per_page.max(1) as f32;
    BASE_CARD_GAP_MM / (cards_per_page / REFERENCE_CARDS_PER_PAGE as f32).sqrt()
}

struct Cells {
    gap: f32,
    card_width: f32,
    card_height: f32,
    cell_width: f32,
    cell_height: f32,
}

fn cells(page: (f32, f32), rows: usize, cols: usize, cards_per_page: usize) -> Cells {
    let (page_width, page_height) = page;
    let usable_width = (page_width - 2.0 * PAGE_MARGIN_MM).max(0.0);
    let usable_height = (page_height - 2.0 * PAGE_MARGIN_MM).max(0.0);

    let gap = card_gap_mm(cards_per_page);
    let card_width = usable_width;
    let card_height =
        ((usable_height - (cards_per_page - 1) as f32 * gap) / cards_per_page as f32).max(0.0);

    Cells {
        gap,
        card_width,
        card_height,
        cell_width: card_width / cols as f32,
        cell_height: card_height / rows as f32,
    }
}

impl CardGeometry {
    /// Compute geometry for `page` (width, height in mm). Counts below one
    /// are treated as one.
    pub fn compute(page: (f32, f32), rows: usize, cols: usize, cards_per_page: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let cards_per_page = cards_per_page.max(1);

        let actual = cells(page, rows, cols, cards_per_page);
        let reference = cells(
            page,
            REFERENCE_ROWS,
            REFERENCE_COLS,
            REFERENCE_CARDS_PER_PAGE,
        );

        let reference_area = reference.cell_width * reference.cell_height;
        let area = actual.cell_width * actual.cell_height;
        let scale = if reference_area > 0.0 {
            (area / reference_area).sqrt()
        } else {
            0.0
        };

        Self {
            page_width_mm: page.0,
            page_height_mm: page.1,
            rows,
            cols,
            cards_per_page,
            gap_mm: actual.gap,
            card_width_mm: actual.card_width,
            card_height_mm: actual.card_height,
            cell_width_mm: actual.cell_width,
            cell_height_mm: actual.cell_height,
            scale,
            line_width_pt: REFERENCE_LINE_WIDTH_PT * scale,
            leading_pt: REFERENCE_LEADING_PT * scale,
            max_font_size_pt: mm_to_pt(actual.cell_width.max(actual.cell_height)),
        }
    }

    /// Outline of the card in `slot` (0 = top of the page)
    pub fn card_rect(&self, slot: usize) -> Rect {
        let top = self.page_height_mm
            - PAGE_MARGIN_MM
            - slot as f32 * (self.card_height_mm + self.gap_mm);
        Rect::new(
            PAGE_MARGIN_MM,
            top - self.card_height_mm,
            self.card_width_mm,
            self.card_height_mm,
        )
    }

    pub fn cell_rect(&self, slot: usize, row: usize, col: usize) -> Rect {
        let card = self.card_rect(slot);
        Rect::new(
            card.x + col as f32 * self.cell_width_mm,
            card.y + row as f32 * self.cell_height_mm,
            self.cell_width_mm,
            self.cell_height_mm,
        )
    }

    pub fn is_header_row(&self, row: usize) -> bool {
        row + 1 == self.rows
    }

    /// Line separating a header cell from the grid below it
    pub fn header_underline(&self, cell: Rect) -> Segment {
        Segment {
            x1: cell.x,
            y1: cell.y,
            x2: cell.right(),
            y2: cell.y,
        }
    }

    pub fn header_underline_width_pt(&self) -> f32 {
        self.line_width_pt * HEADER_UNDERLINE_FACTOR
    }

    /// Text box height as a fraction of the cell height
    pub fn text_box_height_fraction(&self, header: bool) -> f32 {
        if header {
            return HEADER_BOX_FRACTION;
        }
        if self.cell_height_mm <= 0.0 {
            return 0.0;
        }
        ((self.cell_width_mm / TEXT_BOX_HEIGHT_DIVISOR) / self.cell_height_mm).min(1.0)
    }

    /// Centered text box for a cell
    pub fn text_box(&self, text: String, cell: Rect, header: bool) -> TextBox {
        let width = cell.width * TEXT_BOX_WIDTH_FRACTION;
        let height = cell.height * self.text_box_height_fraction(header);

        TextBox {
            text,
            rect: Rect::new(
                cell.center_x() - width / 2.0,
                cell.center_y() - height / 2.0,
                width,
                height,
            ),
            max_font_size_pt: self.max_font_size_pt,
            min_font_size_pt: 0.0,
            leading_pt: self.leading_pt,
        }
    }
}
