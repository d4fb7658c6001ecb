use bingo_cards::render::DrawCall;
use bingo_cards::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

fn numbered_source(count: usize) -> PoolSource {
    let text: String = (1..=count).map(|n| format!("value {}\n", n)).collect();
    PoolSource::parse(&text).unwrap()
}

fn options(rows: usize, cols: usize, num_cards: usize, cards_per_page: usize) -> BingoOptions {
    BingoOptions {
        rows,
        cols,
        num_cards,
        cards_per_page,
        header: None,
        ..Default::default()
    }
}

fn record(source: &PoolSource, options: &BingoOptions, seed: u64) -> (RecordingCanvas, GenerationReport) {
    let mut canvas = RecordingCanvas::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let report = generate_cards(&mut canvas, source, options, &mut rng).unwrap();
    (canvas, report)
}

#[test]
fn test_single_card_draw_calls() {
    let source = numbered_source(40);
    let (canvas, report) = record(&source, &options(5, 5, 1, 1), 1);

    assert_eq!(canvas.rect_count(), 25);
    assert_eq!(canvas.text_count(), 25);
    assert_eq!(canvas.line_count(), 0);
    assert_eq!(canvas.page_count(), 1);
    assert_eq!(report.cards_generated, 1);
    assert_eq!(report.pages, 1);
}

#[test]
fn test_last_page_holds_remaining_cards() {
    let source = numbered_source(40);
    let mut opts = options(5, 5, 7, 3);
    opts.header = Some("B I N G O".to_string());
    let (canvas, report) = record(&source, &opts, 2);

    assert_eq!(report.cards_generated, 7);
    assert_eq!(report.pages, 3);

    let pages = canvas.pages();
    assert_eq!(pages.len(), 3);
    let texts_on = |page: &[DrawCall]| {
        page.iter()
            .filter(|call| matches!(call, DrawCall::Text(_)))
            .count()
    };
    assert_eq!(texts_on(pages[0]), 75);
    assert_eq!(texts_on(pages[1]), 75);
    assert_eq!(texts_on(pages[2]), 25);

    // One underline per header cell on every card
    assert_eq!(canvas.line_count(), 7 * 5);
}

#[test]
fn test_header_words_placed_in_header_row() {
    let source = numbered_source(40);
    let mut opts = options(5, 5, 1, 1);
    opts.header = Some("B I N G O".to_string());
    let (canvas, _) = record(&source, &opts, 3);

    let header_texts: HashSet<&str> = canvas
        .text_boxes()
        .map(|text_box| text_box.text.as_str())
        .filter(|text| ["B", "I", "N", "G", "O"].contains(text))
        .collect();
    assert_eq!(header_texts.len(), 5);

    // Only the four grid rows consume pool values
    let values = canvas
        .text_boxes()
        .filter(|text_box| text_box.text.starts_with("value"))
        .count();
    assert_eq!(values, 20);
}

#[test]
fn test_no_duplicates_within_card() {
    let source = numbered_source(30);
    let (canvas, _) = record(&source, &options(5, 5, 4, 2), 4);

    let texts: Vec<&str> = canvas
        .text_boxes()
        .map(|text_box| text_box.text.as_str())
        .collect();
    for card in texts.chunks(25) {
        let unique: HashSet<&str> = card.iter().copied().collect();
        assert_eq!(unique.len(), 25);
        assert!(!unique.contains(""));
    }
}

#[test]
fn test_exhausted_pool_leaves_empty_cells() {
    let source = numbered_source(10);
    let (canvas, report) = record(&source, &options(5, 5, 1, 1), 5);

    let texts: Vec<&str> = canvas
        .text_boxes()
        .map(|text_box| text_box.text.as_str())
        .collect();
    let filled: HashSet<&str> = texts.iter().copied().filter(|t| !t.is_empty()).collect();
    assert_eq!(filled.len(), 10);
    assert_eq!(texts.iter().filter(|t| t.is_empty()).count(), 15);
    assert_eq!(report.cards_generated, 1);
}

#[test]
fn test_priority_values_on_every_card() {
    let mut text = String::from("star\nmoon\nsun\n---\n");
    for n in 1..=50 {
        text.push_str(&format!("filler {}\n", n));
    }
    let source = PoolSource::parse(&text).unwrap();
    let (canvas, _) = record(&source, &options(3, 3, 5, 5), 6);

    let texts: Vec<&str> = canvas
        .text_boxes()
        .map(|text_box| text_box.text.as_str())
        .collect();
    for card in texts.chunks(9) {
        for priority in ["star", "moon", "sun"] {
            assert!(card.contains(&priority));
        }
    }
}

#[test]
fn test_cards_are_shuffled_independently() {
    let source = numbered_source(25);
    let (canvas, _) = record(&source, &options(5, 5, 2, 2), 7);

    let texts: Vec<&str> = canvas
        .text_boxes()
        .map(|text_box| text_box.text.as_str())
        .collect();
    assert_ne!(texts[..25], texts[25..]);
}

#[test]
fn test_seed_reproduces_layout() {
    let source = numbered_source(40);
    let opts = options(4, 6, 3, 2);
    let (first, _) = record(&source, &opts, 99);
    let (second, _) = record(&source, &opts, 99);
    assert_eq!(first.calls(), second.calls());
}

#[test]
fn test_invalid_options_rejected_before_drawing() {
    let source = numbered_source(5);
    let mut canvas = RecordingCanvas::new();
    let mut rng = StdRng::seed_from_u64(0);
    let result = generate_cards(&mut canvas, &source, &options(5, 5, 0, 1), &mut rng);

    assert!(matches!(result, Err(BingoError::Config(_))));
    assert!(canvas.calls().is_empty());
}

#[test]
fn test_geometry_never_negative() {
    for rows in [1, 2, 5, 13, 40] {
        for cols in [1, 3, 5, 17] {
            for cards_per_page in [1, 2, 3, 8, 50, 1000] {
                let geometry =
                    CardGeometry::compute(PaperSize::A4.dimensions_mm(), rows, cols, cards_per_page);
                assert!(geometry.card_width_mm >= 0.0);
                assert!(geometry.card_height_mm >= 0.0);
                assert!(geometry.cell_width_mm >= 0.0);
                assert!(geometry.cell_height_mm >= 0.0);
                assert!(geometry.line_width_pt >= 0.0);
                assert!(geometry.max_font_size_pt >= 0.0);
            }
        }
    }
}

#[test]
fn test_doubling_density_shrinks_gap() {
    let page = PaperSize::Letter.dimensions_mm();
    let mut cards_per_page = 1;
    while cards_per_page < 64 {
        let sparse = CardGeometry::compute(page, 5, 5, cards_per_page);
        let dense = CardGeometry::compute(page, 5, 5, cards_per_page * 2);
        assert!(dense.gap_mm < sparse.gap_mm);
        cards_per_page *= 2;
    }
}
