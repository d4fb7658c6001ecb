use bingo_cards::*;
use lopdf::{Document, Object};
use tempfile::TempDir;

const VALUES: &str = "\
cat
dog
bird
! from:1 to:40 step:1
---
x <= 4
3/7
";

fn options(num_cards: usize, cards_per_page: usize) -> BingoOptions {
    BingoOptions {
        num_cards,
        cards_per_page,
        seed: Some(11),
        ..Default::default()
    }
}

#[test]
fn test_render_pdf_bytes_page_count() {
    let source = PoolSource::parse(VALUES).unwrap();
    let (report, bytes) = render_pdf_bytes(&source, &options(7, 3), None).unwrap();

    assert_eq!(report.cards_generated, 7);
    assert_eq!(report.pages, 3);
    assert!(bytes.starts_with(b"%PDF"));

    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 3);
}

fn stream_text(doc: &Document) -> Vec<String> {
    doc.objects
        .values()
        .filter_map(|object| match object {
            Object::Stream(stream) => {
                let content = stream
                    .decompressed_content()
                    .unwrap_or_else(|_| stream.content.clone());
                Some(String::from_utf8_lossy(&content).into_owned())
            }
            _ => None,
        })
        .collect()
}

#[test]
fn test_comparison_glyph_reaches_pdf() {
    let source = PoolSource::parse("x >= 2\n").unwrap();
    let opts = BingoOptions {
        rows: 1,
        cols: 1,
        header: None,
        seed: Some(1),
        ..Default::default()
    };
    let (_, bytes) = render_pdf_bytes(&source, &opts, None).unwrap();

    let doc = Document::load_mem(&bytes).unwrap();
    let streams = stream_text(&doc);

    // The embedded font's ToUnicode map carries U+2265 for the ≥ glyph
    assert!(
        streams.iter().any(|text| text.contains("2265")),
        "no stream maps a glyph to U+2265"
    );
}

#[tokio::test]
async fn test_generate_pdf_writes_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("cards.pdf");
    let source = PoolSource::parse(VALUES).unwrap();

    let result = generate_pdf(&source, &options(2, 2), &output).await.unwrap();

    assert_eq!(result.files, vec![output.clone()]);
    assert_eq!(result.report.pages, 1);
    let doc = Document::load(&output).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[tokio::test]
async fn test_copies_are_numbered() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("cards.pdf");
    let source = PoolSource::parse(VALUES).unwrap();
    let mut opts = options(1, 1);
    opts.copies = 3;

    let result = generate_pdf(&source, &opts, &output).await.unwrap();

    let expected: Vec<_> = (1..=3)
        .map(|n| dir.path().join(format!("cards_{}.pdf", n)))
        .collect();
    assert_eq!(result.files, expected);
    assert!(!output.exists());

    let first = std::fs::read(&expected[0]).unwrap();
    for path in &expected[1..] {
        assert_eq!(std::fs::read(path).unwrap(), first);
    }
}

#[tokio::test]
async fn test_generate_from_missing_file_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("cards.pdf");

    let result = generate_from_file(dir.path().join("missing.txt"), &options(1, 1), &output).await;

    assert!(matches!(result, Err(BingoError::SourceRead { .. })));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_generate_from_file_with_bad_range_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("values.txt");
    let output = dir.path().join("cards.pdf");
    std::fs::write(&input, "a\n! from:1 to:five step:1\n").unwrap();

    let result = generate_from_file(&input, &options(1, 1), &output).await;

    assert!(matches!(result, Err(BingoError::MalformedRange { line: 2, .. })));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_missing_font_is_reported() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("cards.pdf");
    let source = PoolSource::parse(VALUES).unwrap();
    let mut opts = options(1, 1);
    opts.font_path = Some(dir.path().join("nope.ttf"));

    let result = generate_pdf(&source, &opts, &output).await;
    assert!(matches!(result, Err(BingoError::Io(_))));
}
