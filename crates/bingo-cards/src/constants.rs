//! Reference constants for card layout
//!
//! Every size here belongs to the reference configuration (2 cards per page,
//! 5×5 grid). Other configurations scale these by the square root of their
//! cell area relative to the reference cell.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Reference Configuration
// =============================================================================

pub const REFERENCE_CARDS_PER_PAGE: usize = 2;
pub const REFERENCE_ROWS: usize = 5;
pub const REFERENCE_COLS: usize = 5;

/// Page margin on every side (mm)
pub const PAGE_MARGIN_MM: f32 = 10.0;

/// Gap between stacked cards at the reference density (mm)
pub const BASE_CARD_GAP_MM: f32 = 10.0;

/// Cell border width for the reference cell (points)
pub const REFERENCE_LINE_WIDTH_PT: f32 = 1.0;

/// Text leading for the reference cell (points)
pub const REFERENCE_LEADING_PT: f32 = 2.0;

// =============================================================================
// Cells
// =============================================================================

/// Fraction of the cell width used by the text box
pub const TEXT_BOX_WIDTH_FRACTION: f32 = 0.9;

/// Cell width divisor giving the ordinary text box height
pub const TEXT_BOX_HEIGHT_DIVISOR: f32 = 8.5;

/// Text box height as a fraction of cell height for header cells
pub const HEADER_BOX_FRACTION: f32 = 0.6;

/// Header underline width relative to the cell border width
pub const HEADER_UNDERLINE_FACTOR: f32 = 3.0;

// =============================================================================
// Text
// =============================================================================

/// Font size ratio for superscript and subscript runs
pub const SCRIPT_SIZE_RATIO: f32 = 0.6;

/// Baseline shift for superscript runs, relative to the font size
pub const SUPERSCRIPT_RISE: f32 = 0.4;

/// Baseline shift for subscript runs, relative to the font size
pub const SUBSCRIPT_DROP: f32 = 0.15;

/// Cap height relative to font size, used to center text vertically
pub const CAP_HEIGHT_RATIO: f32 = 0.7;

// =============================================================================
// Pools
// =============================================================================

/// Upper bound on values produced by one range directive
pub const MAX_RANGE_VALUES: usize = 100_000;
