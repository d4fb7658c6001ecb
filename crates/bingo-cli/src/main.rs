mod logger;

use anyhow::Result;
use bingo_cards::{BingoOptions, PaperSize, RecordingCanvas};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bingo", about = "Generate printable bingo cards", version)]
struct Cli {
    /// Value specification file
    #[arg(short, long, default_value = "bingo.txt")]
    input: PathBuf,

    /// Output PDF file
    #[arg(short, long, default_value = "bingo.pdf")]
    output: PathBuf,

    /// JSON options file; flags given on the command line override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective options to this JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Rows per card (fractions are truncated)
    #[arg(long)]
    rows: Option<f64>,

    /// Columns per card (fractions are truncated)
    #[arg(long)]
    cols: Option<f64>,

    /// Number of cards to generate
    #[arg(long)]
    cards: Option<usize>,

    /// Cards stacked on each page
    #[arg(long)]
    per_page: Option<usize>,

    /// Phrase spread across the last row, one word per cell
    #[arg(long, conflicts_with = "no_header")]
    header: Option<String>,

    /// Use every row for values
    #[arg(long)]
    no_header: bool,

    /// Number of numbered output files
    #[arg(long)]
    copies: Option<usize>,

    /// Output paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// RNG seed for reproducible cards
    #[arg(long)]
    seed: Option<u64>,

    /// TrueType font to embed instead of the bundled DejaVu Sans
    #[arg(long)]
    font: Option<PathBuf>,

    /// Lay out the cards and report, without writing a PDF
    #[arg(long)]
    dry_run: bool,

    /// Show per-card progress
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

impl From<PaperArg> for PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl Cli {
    /// Start from the config file (or defaults) and apply explicit flags
    async fn options(&self) -> Result<BingoOptions> {
        let mut options = match &self.config {
            Some(path) => BingoOptions::load(path).await?,
            None => BingoOptions::default(),
        };

        if let Some(rows) = self.rows {
            options.rows = bingo_cards::grid_dimension(rows);
        }
        if let Some(cols) = self.cols {
            options.cols = bingo_cards::grid_dimension(cols);
        }
        if let Some(cards) = self.cards {
            options.num_cards = cards;
        }
        if let Some(per_page) = self.per_page {
            options.cards_per_page = per_page;
        }
        if self.no_header {
            options.header = None;
        } else if let Some(header) = &self.header {
            options.header = Some(header.clone());
        }
        if let Some(copies) = self.copies {
            options.copies = copies;
        }
        if let Some(paper) = self.paper {
            options.paper_size = paper.into();
        }
        if let Some(seed) = self.seed {
            options.seed = Some(seed);
        }
        if let Some(font) = &self.font {
            options.font_path = Some(font.clone());
        }

        options.validate()?;
        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::new(cli.verbose).init()?;

    let options = cli.options().await?;

    if let Some(path) = &cli.save_config {
        options.save(path).await?;
        println!("Saved options → {}", path.display());
    }

    let source = bingo_cards::load_pool_source(&cli.input).await?;

    if cli.dry_run {
        let mut canvas = RecordingCanvas::new();
        let mut rng = options.rng();
        let report = bingo_cards::generate_cards(&mut canvas, &source, &options, &mut rng)?;
        println!("Dry run:");
        println!("  Values: {} priority, {} filler", source.priority().len(), source.filler().len());
        println!("  Cards: {}", report.cards_generated);
        println!("  Pages: {}", report.pages);
        println!("  Cells drawn: {}", canvas.rect_count());
        return Ok(());
    }

    let output = bingo_cards::generate_pdf(&source, &options, &cli.output).await?;
    println!(
        "Generated {} bingo cards on {} pages →",
        output.report.cards_generated, output.report.pages
    );
    for file in &output.files {
        println!("  {}", file.display());
    }

    Ok(())
}
