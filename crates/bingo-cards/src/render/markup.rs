//! Inline markup understood by the canvases: `<sup>`, `<sub>` and the
//! `&gt;`, `&lt;`, `&amp;` entities

use crate::constants::{SCRIPT_SIZE_RATIO, SUBSCRIPT_DROP, SUPERSCRIPT_RISE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    #[default]
    Normal,
    Super,
    Sub,
}

impl Script {
    /// Font size relative to the surrounding text
    pub fn size_ratio(self) -> f32 {
        match self {
            Script::Normal => 1.0,
            Script::Super | Script::Sub => SCRIPT_SIZE_RATIO,
        }
    }

    /// Baseline offset relative to the surrounding font size
    pub fn baseline_shift(self) -> f32 {
        match self {
            Script::Normal => 0.0,
            Script::Super => SUPERSCRIPT_RISE,
            Script::Sub => -SUBSCRIPT_DROP,
        }
    }
}

/// A stretch of text sharing one script position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub script: Script,
}

const TAGS: &[(&str, Script)] = &[
    ("<sup>", Script::Super),
    ("</sup>", Script::Normal),
    ("<sub>", Script::Sub),
    ("</sub>", Script::Normal),
];

const ENTITIES: &[(&str, char)] = &[("&gt;", '>'), ("&lt;", '<'), ("&amp;", '&')];

/// Split marked-up text into runs. Unknown tags are kept as text.
pub fn parse_markup(text: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut current = String::new();
    let mut script = Script::Normal;
    let mut rest = text;

    'outer: while let Some(c) = rest.chars().next() {
        if c == '<' {
            for (tag, next_script) in TAGS {
                if let Some(after) = rest.strip_prefix(tag) {
                    if !current.is_empty() {
                        runs.push(TextRun {
                            text: std::mem::take(&mut current),
                            script,
                        });
                    }
                    script = *next_script;
                    rest = after;
                    continue 'outer;
                }
            }
        } else if c == '&' {
            for (entity, decoded) in ENTITIES {
                if let Some(after) = rest.strip_prefix(entity) {
                    current.push(*decoded);
                    rest = after;
                    continue 'outer;
                }
            }
        }

        current.push(c);
        rest = &rest[c.len_utf8()..];
    }

    if !current.is_empty() {
        runs.push(TextRun {
            text: current,
            script,
        });
    }

    runs
}
