use std::borrow::Cow;
use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use super::dictionary::SKILL_DICTIONARY;

/// Characters of surrounding text collected on each side of an occurrence.
const CONTEXT_WINDOW: usize = 50;

/// Confidence contributed per occurrence, capped before context boosts.
const OCCURRENCE_STEP: f64 = 0.3;
const OCCURRENCE_CAP: f64 = 0.9;

lazy_static! {
    // Prebuilt case-insensitive literal matchers for every dictionary
    // token, so the extraction hot path never recompiles them.
    static ref LITERAL_MATCHERS: HashMap<&'static str, Regex> = SKILL_DICTIONARY
        .iter()
        .map(|token| (*token, compile_literal(token)))
        .collect();
}

fn compile_literal(token: &str) -> Regex {
    // regex::escape guarantees the pattern is a valid literal
    Regex::new(&format!("(?i){}", regex::escape(token))).expect("escaped literal pattern")
}

fn literal_matcher(token: &str) -> Cow<'static, Regex> {
    match LITERAL_MATCHERS.get(token) {
        Some(matcher) => Cow::Borrowed(matcher),
        None => Cow::Owned(compile_literal(token)),
    }
}

/// Estimate how confident we are that `skill` is a real competency of the
/// text's author, from occurrence count plus context cues.
///
/// Base confidence is `min(occurrences * 0.3, 0.9)`. Surrounding context
/// mentioning "experience"/"years" adds 0.2 and "expert"/"advanced" adds
/// 0.1; both boosts can stack. The result never exceeds 1.0 and is 0.0
/// when the token does not occur at all.
pub fn calculate_confidence(text: &str, skill: &str) -> f64 {
    if skill.is_empty() {
        return 0.0;
    }

    let matcher = literal_matcher(skill);
    let ranges: Vec<(usize, usize)> = matcher
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();
    if ranges.is_empty() {
        return 0.0;
    }

    let mut confidence = (ranges.len() as f64 * OCCURRENCE_STEP).min(OCCURRENCE_CAP);

    let context = context_around(text, &ranges);
    if context.contains("experience") || context.contains("years") {
        confidence += 0.2;
    }
    if context.contains("expert") || context.contains("advanced") {
        confidence += 0.1;
    }

    confidence.min(1.0)
}

/// Collect up to 50 characters on each side of every occurrence of `skill`
/// in `text`, concatenated and lowercased. Window edges land on char
/// boundaries, so multi-byte text never splits a code point.
pub fn skill_context(text: &str, skill: &str) -> String {
    if skill.is_empty() {
        return String::new();
    }

    let matcher = literal_matcher(skill);
    let ranges: Vec<(usize, usize)> = matcher
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();
    context_around(text, &ranges)
}

fn context_around(text: &str, ranges: &[(usize, usize)]) -> String {
    let mut combined = String::new();
    for &(start, end) in ranges {
        let from = step_back(text, start, CONTEXT_WINDOW);
        let to = step_forward(text, end, CONTEXT_WINDOW);
        combined.push_str(&text[from..to]);
        combined.push(' ');
    }
    combined.to_lowercase()
}

fn step_back(text: &str, byte: usize, chars: usize) -> usize {
    text[..byte]
        .char_indices()
        .rev()
        .nth(chars.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn step_forward(text: &str, byte: usize, chars: usize) -> usize {
    text[byte..]
        .char_indices()
        .nth(chars)
        .map(|(i, _)| byte + i)
        .unwrap_or(text.len())
}
