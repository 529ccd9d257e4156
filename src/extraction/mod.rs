use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::{SkillLevel, SkillRecord};

pub mod confidence;
pub mod dictionary;

pub use confidence::{calculate_confidence, skill_context};
use dictionary::{pattern_families, SKILL_DICTIONARY};

/// Flat confidence assigned to skills found only by the pattern pass.
const PATTERN_PASS_CONFIDENCE: f64 = 0.8;

/// Extract skill records from free-form profile or resume text.
///
/// Two passes feed an insertion-ordered accumulator keyed by canonical
/// name: a dictionary containment pass with per-skill confidence from
/// [`calculate_confidence`], then five regex families whose matches are
/// canonicalized and added at a flat 0.8 only when the name is not
/// already present (dictionary hits win ties). The result is deduplicated
/// by name and stably sorted by descending confidence, so equal-confidence
/// records keep their encounter order.
pub fn extract_skills_from_text(text: &str) -> Vec<SkillRecord> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let mut seen: HashSet<String> = HashSet::new();
    let mut records: Vec<SkillRecord> = Vec::new();

    for &token in SKILL_DICTIONARY {
        if lowered.contains(token) && seen.insert(token.to_string()) {
            records.push(SkillRecord {
                name: token.to_string(),
                level: SkillLevel::Intermediate,
                ai_extracted: true,
                confidence: calculate_confidence(text, token),
            });
        }
    }

    for family in pattern_families() {
        for m in family.find_iter(text) {
            let name = canonical_name(m.as_str());
            if name.is_empty() {
                continue;
            }
            if seen.insert(name.clone()) {
                records.push(SkillRecord {
                    name,
                    level: SkillLevel::Intermediate,
                    ai_extracted: true,
                    confidence: PATTERN_PASS_CONFIDENCE,
                });
            }
        }
    }

    // Stable sort: ties keep first-pass-first encounter order
    records.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });

    debug!(skills = records.len(), "extracted skills from text");
    records
}

/// Lowercase and strip non-word characters, so "React.js" and "React JS"
/// both collapse to "reactjs".
fn canonical_name(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
