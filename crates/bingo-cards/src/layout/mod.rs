//! Card layout: places shuffled pool values onto each card's grid
//!
//! 1. Compute geometry once for the run
//! 2. For every card, shuffle fresh pools and a fresh cell order
//! 3. Draw each cell's border, the header underline, and its text box

mod geometry;

pub use geometry::{CardGeometry, card_gap_mm};

use crate::options::BingoOptions;
use crate::pool::PoolSource;
use crate::render::Canvas;
use crate::types::*;
use rand::Rng;
use rand::seq::SliceRandom;

/// Lay out `options.num_cards` cards onto `canvas`.
///
/// Pages are started as needed; the last page may hold fewer than
/// `cards_per_page` cards. The canvas is left open for the caller to finish.
pub fn generate_cards<C, R>(
    canvas: &mut C,
    source: &PoolSource,
    options: &BingoOptions,
    rng: &mut R,
) -> Result<GenerationReport>
where
    C: Canvas,
    R: Rng + ?Sized,
{
    options.validate()?;

    let geometry = CardGeometry::compute(
        options.paper_size.dimensions_mm(),
        options.rows,
        options.cols,
        options.cards_per_page,
    );
    let header = options.header_words();

    let mut coordinates: Vec<(usize, usize)> = (0..geometry.rows)
        .flat_map(|row| (0..geometry.cols).map(move |col| (row, col)))
        .collect();

    log::debug!(
        "Cells are {:.1}×{:.1}mm, gap {:.1}mm, line width {:.2}pt",
        geometry.cell_width_mm,
        geometry.cell_height_mm,
        geometry.gap_mm,
        geometry.line_width_pt
    );

    let mut report = GenerationReport::default();

    while report.cards_generated < options.num_cards {
        canvas.begin_page();
        report.pages += 1;

        for slot in 0..geometry.cards_per_page {
            if report.cards_generated >= options.num_cards {
                break;
            }

            let mut pools = source.shuffled(rng);
            coordinates.shuffle(rng);
            let mut exhausted = false;

            for &(row, col) in &coordinates {
                let cell = geometry.cell_rect(slot, row, col);
                canvas.draw_rect(cell, geometry.line_width_pt);

                let header_row = header.as_deref().filter(|_| geometry.is_header_row(row));
                let text = match header_row {
                    Some(words) => {
                        canvas.draw_line(
                            geometry.header_underline(cell),
                            geometry.header_underline_width_pt(),
                        );
                        header_word(words, geometry.cols, col)
                            .unwrap_or_default()
                            .to_string()
                    }
                    None => pools.next_value().unwrap_or_else(|| {
                        exhausted = true;
                        String::new()
                    }),
                };

                canvas.draw_text_box(&geometry.text_box(text, cell, header_row.is_some()));
            }

            if exhausted {
                log::warn!(
                    "Card {} ran out of values; remaining cells are empty",
                    report.cards_generated + 1
                );
            }

            report.cards_generated += 1;
            log::debug!(
                "Card {} placed on page {}",
                report.cards_generated,
                report.pages
            );
        }
    }

    log::info!(
        "Laid out {} cards on {} pages",
        report.cards_generated,
        report.pages
    );

    Ok(report)
}

/// Header word shown in column `col` when `words` are centered across
/// `cols` columns. Words that fall outside the grid are dropped.
pub fn header_word<'a>(words: &[&'a str], cols: usize, col: usize) -> Option<&'a str> {
    let offset = (cols as i64 - words.len() as i64).div_euclid(2);
    let index = col as i64 - offset;
    usize::try_from(index)
        .ok()
        .and_then(|index| words.get(index).copied())
}
