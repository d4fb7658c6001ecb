//! Numeric range directives: `! from:<num> to:<num> step:<num>`
//!
//! Numbers are held as integers scaled by a power of ten so stepping is exact
//! and `to` is reached whenever it lies a whole number of steps from `from`.

use crate::constants::MAX_RANGE_VALUES;
use crate::types::{BingoError, Result};

/// Most decimal places accepted in a range literal
const MAX_DECIMALS: u32 = 9;

/// A signed number exactly as written in the directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeNumber {
    /// Value multiplied by `10^decimals`
    scaled: i64,
    /// Digits after the decimal point
    decimals: u32,
    /// Whether the literal contained a decimal point
    is_decimal: bool,
}

impl RangeNumber {
    pub fn parse(literal: &str) -> Option<Self> {
        let (negative, unsigned) = match literal.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, literal.strip_prefix('+').unwrap_or(literal)),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (unsigned, None),
        };
        let frac = frac_part.unwrap_or("");

        if int_part.is_empty() && frac.is_empty() {
            return None;
        }
        if !int_part.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
            return None;
        }

        let decimals = frac.len() as u32;
        if decimals > MAX_DECIMALS {
            return None;
        }

        let mut scaled: i64 = 0;
        for digit in int_part.chars().chain(frac.chars()) {
            let digit = i64::from(digit.to_digit(10)?);
            scaled = scaled.checked_mul(10)?.checked_add(digit)?;
        }

        Some(Self {
            scaled: if negative { -scaled } else { scaled },
            decimals,
            is_decimal: frac_part.is_some(),
        })
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn is_decimal(&self) -> bool {
        self.is_decimal
    }

    fn rescaled(self, decimals: u32) -> Option<i64> {
        let factor = 10i64.checked_pow(decimals - self.decimals)?;
        self.scaled.checked_mul(factor)
    }
}

/// A parsed `from`/`to`/`step` directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeDirective {
    pub from: RangeNumber,
    pub to: RangeNumber,
    pub step: RangeNumber,
}

impl RangeDirective {
    /// Parse the text following the range marker
    pub fn parse(body: &str, line: usize) -> Result<Self> {
        let mut tokens = body.split_whitespace();
        let from = take_field(&mut tokens, "from", line)?;
        let to = take_field(&mut tokens, "to", line)?;
        let step = take_field(&mut tokens, "step", line)?;

        if let Some(extra) = tokens.next() {
            return Err(malformed(line, format!("unexpected `{}`", extra)));
        }

        Ok(Self { from, to, step })
    }

    /// Largest number of decimal places among the three literals
    pub fn max_decimals(&self) -> u32 {
        self.from
            .decimals
            .max(self.to.decimals)
            .max(self.step.decimals)
    }

    /// Expand into display strings, inclusive of `to` when a whole number of
    /// steps reaches it. A step pointing away from `to` yields nothing.
    ///
    /// Values stay integer-typed while both the start and the step are
    /// integer literals (the start alone is integer-typed before the first
    /// step is added); those render without decimals. Every other value
    /// renders with `max_decimals` places.
    pub fn expand(&self, line: usize) -> Result<Vec<String>> {
        let decimals = self.max_decimals();
        let overflow = || malformed(line, "number out of range".to_string());
        let from = self.from.rescaled(decimals).ok_or_else(overflow)?;
        let to = self.to.rescaled(decimals).ok_or_else(overflow)?;
        let step = self.step.rescaled(decimals).ok_or_else(overflow)?;

        if step == 0 {
            return Err(malformed(line, "step must not be zero".to_string()));
        }

        let integer_start = !self.from.is_decimal;
        let integer_step = !self.step.is_decimal;

        let mut values = Vec::new();
        let mut current = from;
        loop {
            let in_range = if step > 0 { current <= to } else { current >= to };
            if !in_range {
                break;
            }
            if values.len() >= MAX_RANGE_VALUES {
                return Err(malformed(
                    line,
                    format!("expands to more than {} values", MAX_RANGE_VALUES),
                ));
            }

            let integer_typed = integer_start && (integer_step || values.is_empty());
            values.push(format_scaled(current, decimals, !integer_typed));

            match current.checked_add(step) {
                Some(next) => current = next,
                None => break,
            }
        }

        Ok(values)
    }
}

fn take_field<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    key: &str,
    line: usize,
) -> Result<RangeNumber> {
    let token = tokens
        .next()
        .ok_or_else(|| malformed(line, format!("missing `{}:`", key)))?;
    let value = token
        .strip_prefix(key)
        .and_then(|rest| rest.strip_prefix(':'))
        .ok_or_else(|| malformed(line, format!("expected `{}:`, found `{}`", key, token)))?;

    // Allow `from: 3` as well as `from:3`
    let value = if value.is_empty() {
        tokens
            .next()
            .ok_or_else(|| malformed(line, format!("missing value for `{}:`", key)))?
    } else {
        value
    };

    RangeNumber::parse(value)
        .ok_or_else(|| malformed(line, format!("`{}` is not a number for `{}:`", value, key)))
}

fn malformed(line: usize, reason: String) -> BingoError {
    BingoError::MalformedRange { line, reason }
}

/// Render a value scaled by `10^scale`
fn format_scaled(value: i64, scale: u32, with_decimals: bool) -> String {
    let divisor = 10u64.pow(scale);
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    let whole = magnitude / divisor;

    if with_decimals && scale > 0 {
        let frac = magnitude % divisor;
        format!("{}{}.{:0width$}", sign, whole, frac, width = scale as usize)
    } else {
        format!("{}{}", sign, whole)
    }
}
