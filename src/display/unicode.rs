//! Unicode formatting utilities
use std::ops::Range;

use crate::value::Value;

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Format a floating point number as a string
///
/// # Parameters
/// - `n`: The number to format
/// - `fixed_range`: Values inside this range are written in fixed notation, everything else in scientific
/// - `precision`: The number of decimal places to include
pub fn float<T: Value>(n: T, fixed_range: Option<Range<T>>, precision: usize) -> String {
    match fixed_range {
        Some(range) if range.contains(&n) => format!("{n:.precision$}"),
        _ => format!("{n:.precision$e}"),
    }
}

/// Convert a string into a superscript string, ignoring characters with no superscript form
pub fn superscript(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            '0'..='9' => digit(&SUPERSCRIPT_DIGITS, c),
            '+' => Some('⁺'),
            '-' => Some('⁻'),
            'n' => Some('ⁿ'),
            _ => None,
        })
        .collect()
}

/// Convert a string into a subscript string, ignoring characters with no subscript form
pub fn subscript(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            '0'..='9' => digit(&SUBSCRIPT_DIGITS, c),
            '+' => Some('₊'),
            '-' => Some('₋'),
            'n' => Some('ₙ'),
            's' => Some('ₛ'),
            _ => None,
        })
        .collect()
}

fn digit(table: &[char; 10], c: char) -> Option<char> {
    let i = c.to_digit(10)?;
    table.get(i as usize).copied()
}
