use regex::Regex;
use std::collections::BTreeMap;

use crate::domain::model::RealtimeSnapshot;
use crate::utils::error::{PulseError, Result};

const FOOTER_PREFIX: &str = "Powered By";

/// Splits the raw container text into logical lines: wrapped continuations
/// (lines starting with a space) are merged into the previous line, and the
/// "Powered By" footer is dropped.
pub fn normalize_lines(raw: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in raw.trim().lines() {
        if line.starts_with(' ') {
            current.push_str(line.trim());
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = line.trim().to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.retain(|line| !line.starts_with(FOOTER_PREFIX));
    lines
}

/// Dictionary variant: every "Key: value" line becomes an entry. A
/// parenthesized group inside the value replaces the raw value. Lines without
/// a colon are ignored.
pub fn parse_key_values(raw: &str) -> BTreeMap<String, String> {
    let re = Regex::new(r"\(([^)]+)\)").unwrap();

    let mut data = BTreeMap::new();
    for line in normalize_lines(raw) {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = match re.captures(value) {
            Some(caps) => caps[1].to_string(),
            None => value.trim().to_string(),
        };
        data.insert(key.trim().to_string(), value);
    }
    data
}

/// Collects every numeric token in order. A "used / total" fraction is a
/// single token contributing its numerator.
pub fn numeric_tokens(raw: &str) -> Vec<u32> {
    let re = Regex::new(r"(\d+)(?:\s*/\s*(\d+))?").unwrap();

    let mut tokens = Vec::new();
    for line in normalize_lines(raw) {
        for caps in re.captures_iter(&line) {
            if let Ok(n) = caps[1].parse::<u32>() {
                tokens.push(n);
            }
        }
    }
    tokens
}

/// Positional variant: the first four numeric tokens map to people,
/// percentage, functional and condition, in that order.
pub fn parse_realtime(raw: &str) -> Result<RealtimeSnapshot> {
    let tokens = numeric_tokens(raw);
    if tokens.len() < 4 {
        return Err(PulseError::ProcessingError {
            message: format!(
                "expected 4 numeric fields in realtime text, found {}",
                tokens.len()
            ),
        });
    }

    Ok(RealtimeSnapshot {
        people: tokens[0],
        percentage: tokens[1],
        functional: tokens[2],
        condition: tokens[3],
    })
}
