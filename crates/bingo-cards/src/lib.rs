pub mod constants;
pub mod layout;
mod options;
mod output;
pub mod pool;
pub mod render;
mod types;

pub use layout::{CardGeometry, generate_cards};
pub use options::*;
pub use output::{PdfOutput, generate_from_file, generate_pdf, numbered_path, render_pdf_bytes};
pub use pool::{PoolSource, Pools, load_pool_source, parse_pools};
pub use render::{Canvas, PdfCanvas, RecordingCanvas};
pub use types::*;
