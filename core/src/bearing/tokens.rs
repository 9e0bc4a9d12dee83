//! Numeric token extraction for angle text.
//!
//! Each maximal run of digits, with at most one embedded decimal point, is a
//! token. Everything else separates tokens. The first non-blank character
//! after a token is kept as its unit mark so that misplaced seconds can be
//! reported.

/// Unit symbol written after a number (`°`, `'`, `"` and their look-alikes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitMark {
    Degrees,
    Minutes,
    Seconds,
}

impl UnitMark {
    /// Positional slot the mark names: 0 degrees, 1 minutes, 2 seconds.
    pub fn slot(self) -> usize {
        match self {
            UnitMark::Degrees => 0,
            UnitMark::Minutes => 1,
            UnitMark::Seconds => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericToken {
    pub value: f64,
    pub mark: Option<UnitMark>,
}

pub fn extract(text: &str) -> Vec<NumericToken> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut idx = 0;

    while idx < chars.len() {
        if !starts_number(&chars, idx) {
            idx += 1;
            continue;
        }

        let start = idx;
        let mut seen_point = false;
        while idx < chars.len() {
            let c = chars[idx];
            if c.is_ascii_digit() {
                idx += 1;
            } else if c == '.' && !seen_point && next_is_digit(&chars, idx) {
                seen_point = true;
                idx += 1;
            } else {
                break;
            }
        }

        let literal: String = chars[start..idx].iter().collect();
        if let Ok(value) = literal.parse::<f64>() {
            tokens.push(NumericToken {
                value,
                mark: mark_at(&chars, idx),
            });
        }
    }

    tokens
}

/// True when the text begins with a digit, or a `.` followed by one.
pub fn starts_with_number(text: &str) -> bool {
    let chars: Vec<char> = text.chars().take(2).collect();
    !chars.is_empty() && starts_number(&chars, 0)
}

fn next_is_digit(chars: &[char], idx: usize) -> bool {
    chars.get(idx + 1).is_some_and(|c| c.is_ascii_digit())
}

fn starts_number(chars: &[char], idx: usize) -> bool {
    match chars[idx] {
        c if c.is_ascii_digit() => true,
        '.' => next_is_digit(chars, idx),
        _ => false,
    }
}

fn mark_at(chars: &[char], from: usize) -> Option<UnitMark> {
    let mut rest = chars[from..].iter().skip_while(|c| c.is_whitespace());
    match rest.next()? {
        '°' | 'º' | '˚' | '*' | 'd' | 'D' => Some(UnitMark::Degrees),
        '\'' | '’' => match rest.next() {
            Some('\'') | Some('’') => Some(UnitMark::Seconds),
            _ => Some(UnitMark::Minutes),
        },
        '′' | 'm' | 'M' => Some(UnitMark::Minutes),
        '"' | '″' | '”' | 's' | 'S' => Some(UnitMark::Seconds),
        _ => None,
    }
}
