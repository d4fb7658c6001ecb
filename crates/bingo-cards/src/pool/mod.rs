//! Answer pools parsed from the line-oriented value specification
//!
//! Lines before the `---` separator fill the priority pool, lines after it
//! the filler pool. Parsing is pure; shuffling is a separate step so every
//! card can draw from its own ordering of the same content.

mod line;
mod range;
mod symbols;

pub use line::{SpecLine, classify};
pub use range::{RangeDirective, RangeNumber};
pub use symbols::{
    display_string, markup_to_tags, substitute_comparisons, substitute_fractions,
    substitute_symbols,
};

use crate::types::*;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActivePool {
    Priority,
    Filler,
}

/// Parsed pool content in specification order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoolSource {
    priority: Vec<String>,
    filler: Vec<String>,
}

impl PoolSource {
    /// Parse specification text into unshuffled pools
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        let mut source = PoolSource::default();
        let mut active = ActivePool::Priority;

        for (idx, raw) in text.lines().enumerate() {
            let line_num = idx + 1;
            let target = match active {
                ActivePool::Priority => &mut source.priority,
                ActivePool::Filler => &mut source.filler,
            };

            match classify(raw, line_num)? {
                SpecLine::Blank | SpecLine::Comment => {}
                SpecLine::Separator => active = ActivePool::Filler,
                SpecLine::Range(directive) => target.extend(directive.expand(line_num)?),
                SpecLine::Literal(value) => target.push(display_string(value)),
            }
        }

        log::debug!(
            "Parsed {} priority and {} filler values",
            source.priority.len(),
            source.filler.len()
        );

        Ok(source)
    }

    pub fn priority(&self) -> &[String] {
        &self.priority
    }

    pub fn filler(&self) -> &[String] {
        &self.filler
    }

    /// Total number of values across both pools
    pub fn len(&self) -> usize {
        self.priority.len() + self.filler.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Independently shuffled copies of both pools, ready for one card
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Pools {
        let mut priority = self.priority.clone();
        let mut filler = self.filler.clone();
        priority.shuffle(rng);
        filler.shuffle(rng);

        Pools {
            priority: priority.into(),
            filler: filler.into(),
        }
    }
}

/// Shuffled pools owned by a single card
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pools {
    pub priority: VecDeque<String>,
    pub filler: VecDeque<String>,
}

impl Pools {
    /// Next value from the priority pool, then the filler pool
    pub fn next_value(&mut self) -> Option<String> {
        self.priority
            .pop_front()
            .or_else(|| self.filler.pop_front())
    }

    pub fn is_exhausted(&self) -> bool {
        self.priority.is_empty() && self.filler.is_empty()
    }
}

/// Parse specification text and shuffle both pools
pub fn parse_pools<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Result<Pools> {
    Ok(PoolSource::parse(text)?.shuffled(rng))
}

/// Read and parse a specification file
pub async fn load_pool_source(path: impl AsRef<Path>) -> Result<PoolSource> {
    let path = path.as_ref().to_owned();

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| BingoError::SourceRead {
            path: path.clone(),
            source,
        })?;
    let text = String::from_utf8(bytes).map_err(|source| BingoError::SourceEncoding {
        path: path.clone(),
        source,
    })?;

    PoolSource::parse(&text)
}
