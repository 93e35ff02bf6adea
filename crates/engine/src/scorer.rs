//! Compatibility scoring for one (student, offer) pair.

use crate::similarity::{fuzzy_match, normalize};
use serde::{Deserialize, Serialize};
use stagematch_types::{Offer, StudentProfile};

/// Weights of the score components. They sum to 100 when the level bonus
/// applies; empty skill buckets grant their weight flat.
const REQUIRED_WEIGHT: f64 = 70.0;
const OPTIONAL_WEIGHT: f64 = 20.0;
const LEVEL_BONUS: f64 = 10.0;

/// Outcome of scoring one (student, offer) pair.
///
/// `matched` and `missing` hold normalized skill names, deduplicated and
/// disjoint, in first-seen order (mandatory requirements first, then
/// nice-to-haves). `missing` only ever names mandatory skills: gaps on
/// nice-to-have requirements are not reported back to the student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Compatibility score, 0 to 100.
    pub score: u8,
    /// Requirement names the student satisfies.
    pub matched: Vec<String>,
    /// Mandatory requirement names the student lacks.
    pub missing: Vec<String>,
}

/// Score how well a student profile fits one offer.
///
/// 70 points are prorated over the offer's mandatory skills and 20 over
/// its nice-to-haves, with either bucket granted flat when the offer
/// lists nothing in it. A 10 point bonus applies when the offer targets
/// the student's study level. The sum is rounded and capped at 100.
///
/// The computation never fails: an offer without requirements scores at
/// least 90 for everyone, a student without a declared level simply
/// forfeits the bonus, and empty skill lists mean empty matches.
pub fn compute_compatibility(student: &StudentProfile, offer: &Offer) -> MatchResult {
    // Held names are normalized but not deduplicated; duplicates do not
    // change any outcome since only "some entry matches" is ever asked.
    let held: Vec<String> = student
        .skills
        .iter()
        .map(|skill| normalize(&skill.name))
        .collect();

    let mut required_names = Vec::new();
    let mut optional_names = Vec::new();
    for requirement in &offer.required_skills {
        let name = normalize(&requirement.name);
        if requirement.required {
            required_names.push(name);
        } else {
            optional_names.push(name);
        }
    }

    let mut matched: Vec<String> = Vec::new();
    let mut missing: Vec<String> = Vec::new();

    let mut required_hits = 0usize;
    for name in &required_names {
        if held.iter().any(|skill| fuzzy_match(skill, name)) {
            required_hits += 1;
            push_unique(&mut matched, name);
        } else {
            push_unique(&mut missing, name);
        }
    }

    let mut optional_hits = 0usize;
    for name in &optional_names {
        if held.iter().any(|skill| fuzzy_match(skill, name)) {
            optional_hits += 1;
            push_unique(&mut matched, name);
        }
    }

    let required_component = if required_names.is_empty() {
        REQUIRED_WEIGHT
    } else {
        REQUIRED_WEIGHT * required_hits as f64 / required_names.len() as f64
    };

    let optional_component = if optional_names.is_empty() {
        OPTIONAL_WEIGHT
    } else {
        OPTIONAL_WEIGHT * optional_hits as f64 / optional_names.len() as f64
    };

    let level_bonus = match student.level {
        Some(level) if offer.target_level.contains(&level) => LEVEL_BONUS,
        _ => 0.0,
    };

    let total = required_component + optional_component + level_bonus;
    let score = (total.round() as u8).min(100);

    MatchResult {
        score,
        matched,
        missing,
    }
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|existing| existing == name) {
        names.push(name.to_string());
    }
}
