use crate::layout::generate_cards;
use crate::options::BingoOptions;
use crate::pool::{PoolSource, load_pool_source};
use crate::render::{Canvas, PdfCanvas};
use crate::types::*;
use std::path::{Path, PathBuf};

const DOCUMENT_TITLE: &str = "Bingo Cards";

/// Result of writing cards to disk
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOutput {
    pub report: GenerationReport,
    /// Every file written, in copy order
    pub files: Vec<PathBuf>,
}

/// Read the value specification at `input` and write cards to `output_path`
pub async fn generate_from_file(
    input: impl AsRef<Path>,
    options: &BingoOptions,
    output_path: impl AsRef<Path>,
) -> Result<PdfOutput> {
    let source = load_pool_source(input).await?;
    generate_pdf(&source, options, output_path).await
}

/// Lay out and render cards, then write the PDF (and any extra copies)
pub async fn generate_pdf(
    source: &PoolSource,
    options: &BingoOptions,
    output_path: impl AsRef<Path>,
) -> Result<PdfOutput> {
    options.validate()?;

    let source = source.clone();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    let font_bytes = match &options.font_path {
        Some(path) => Some(tokio::fs::read(path).await?),
        None => None,
    };

    let copies = options.copies;
    let (report, bytes) = tokio::task::spawn_blocking(move || {
        render_pdf_bytes(&source, &options, font_bytes.as_deref())
    })
    .await??;

    tokio::fs::write(&output_path, bytes).await?;
    let files = write_copies(&output_path, copies).await?;

    log::info!("Wrote {} file(s) for {} cards", files.len(), report.cards_generated);

    Ok(PdfOutput { report, files })
}

/// Render cards to PDF bytes without touching the file system
pub fn render_pdf_bytes(
    source: &PoolSource,
    options: &BingoOptions,
    font_bytes: Option<&[u8]>,
) -> Result<(GenerationReport, Vec<u8>)> {
    let (page_width_mm, page_height_mm) = options.paper_size.dimensions_mm();
    let mut canvas = PdfCanvas::new(DOCUMENT_TITLE, page_width_mm, page_height_mm, font_bytes)?;
    let mut rng = options.rng();

    let report = generate_cards(&mut canvas, source, options, &mut rng)?;
    let bytes = canvas.finish()?;

    Ok((report, bytes))
}

/// `cards.pdf` numbered 3 becomes `cards_3.pdf`
pub fn numbered_path(path: &Path, number: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, number, ext.to_string_lossy()),
        None => format!("{}_{}", stem, number),
    };
    path.with_file_name(name)
}

/// Duplicate the rendered file so there are `copies` numbered files, the
/// original being renamed to copy 1. A single copy keeps its name.
async fn write_copies(path: &Path, copies: usize) -> Result<Vec<PathBuf>> {
    if copies <= 1 {
        return Ok(vec![path.to_owned()]);
    }

    let mut files = Vec::with_capacity(copies);
    for number in 2..=copies {
        let target = numbered_path(path, number);
        tokio::fs::copy(path, &target).await?;
        files.push(target);
    }

    let first = numbered_path(path, 1);
    tokio::fs::rename(path, &first).await?;
    files.insert(0, first);

    Ok(files)
}
