//! Text substitution passes for literal values
//!
//! Each pass takes and returns a plain string; `display_string` composes them
//! in their fixed order.

/// Unicode fraction slash placed between synthesized numerator and denominator
pub const FRACTION_SLASH: char = '\u{2044}';

/// Tokens replaced by a single glyph
pub const SPECIAL_SYMBOLS: &[(&str, &str)] = &[
    (":pi:", "π"),
    (":deg:", "°"),
    (":sqrt:", "√"),
    (":promille:", "‰"),
];

/// Run every pass over a literal line
pub fn display_string(text: &str) -> String {
    let text = substitute_comparisons(text);
    let text = substitute_fractions(&text);
    let text = substitute_symbols(&text);
    markup_to_tags(&text)
}

/// `>=` and `<=` become their glyphs; bare `>` and `<` are escaped so they
/// cannot be mistaken for inline tags
pub fn substitute_comparisons(text: &str) -> String {
    text.replace(">=", "≥")
        .replace("<=", "≤")
        .replace('>', "&gt;")
        .replace('<', "&lt;")
}

/// Replace every `word/word` with a fraction glyph, or with
/// `^{numerator}⁄_{denominator}` markup when no glyph exists
pub fn substitute_fractions(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut flushed = 0;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '/' {
            i += 1;
            continue;
        }

        let mut start = i;
        while start > flushed && is_word_char(chars[start - 1]) {
            start -= 1;
        }
        let mut end = i + 1;
        while end < chars.len() && is_word_char(chars[end]) {
            end += 1;
        }

        if start == i || end == i + 1 {
            i += 1;
            continue;
        }

        out.extend(&chars[flushed..start]);
        let numerator: String = chars[start..i].iter().collect();
        let denominator: String = chars[i + 1..end].iter().collect();
        match fraction_glyph(&numerator, &denominator) {
            Some(glyph) => out.push(glyph),
            None => {
                out.push_str(&format!(
                    "^{{{}}}{}_{{{}}}",
                    numerator, FRACTION_SLASH, denominator
                ));
            }
        }
        flushed = end;
        i = end;
    }

    out.extend(&chars[flushed..]);
    out
}

pub fn substitute_symbols(text: &str) -> String {
    SPECIAL_SYMBOLS
        .iter()
        .fold(text.to_string(), |acc, (token, glyph)| acc.replace(token, glyph))
}

/// Convert `^{x}` and `_{x}` markup into `<sup>x</sup>` and `<sub>x</sub>`.
/// Markers without a closed brace group are left as written.
pub fn markup_to_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(|c: char| c == '^' || c == '_') {
        let (before, marked) = rest.split_at(pos);
        out.push_str(before);

        let tag = if marked.starts_with('^') { "sup" } else { "sub" };
        let after_marker = &marked[1..];
        let group = after_marker
            .strip_prefix('{')
            .and_then(|body| body.find('}').map(|end| (&body[..end], &body[end + 1..])));

        match group {
            Some((inner, remainder)) => {
                out.push_str(&format!("<{}>{}</{}>", tag, inner, tag));
                rest = remainder;
            }
            None => {
                out.push_str(&marked[..1]);
                rest = after_marker;
            }
        }
    }

    out.push_str(rest);
    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn fraction_glyph(numerator: &str, denominator: &str) -> Option<char> {
    let glyph = match (numerator, denominator) {
        ("1", "2") => '½',
        ("1", "3") => '⅓',
        ("2", "3") => '⅔',
        ("1", "4") => '¼',
        ("3", "4") => '¾',
        ("1", "5") => '⅕',
        ("2", "5") => '⅖',
        ("3", "5") => '⅗',
        ("4", "5") => '⅘',
        ("1", "6") => '⅙',
        ("5", "6") => '⅚',
        ("1", "7") => '⅐',
        ("1", "8") => '⅛',
        ("3", "8") => '⅜',
        ("5", "8") => '⅝',
        ("7", "8") => '⅞',
        ("1", "9") => '⅑',
        ("1", "10") => '⅒',
        _ => return None,
    };
    Some(glyph)
}
