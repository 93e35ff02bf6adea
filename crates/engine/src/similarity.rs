//! Bigram similarity and tolerant skill-name matching.
//!
//! Skill names on the platform come from free-text input and have to be
//! compared across students and companies: "reactjs" vs "React",
//! "PostgreSQL" vs "postgres", the occasional typo. Matching runs on
//! normalized names and combines cheap substring checks with a Dice
//! bigram similarity for everything the substring checks miss.

use std::collections::HashMap;

/// Similarity above which two skill names count as the same skill.
pub const SIMILARITY_THRESHOLD: f64 = 0.75;

/// Normalize a skill name for comparison: trim and lowercase.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Dice coefficient over character bigrams, in [0.0, 1.0].
///
/// Bigrams form a multiset: "aaaa" holds three "aa" bigrams, and each
/// occurrence in one string can match at most one occurrence in the
/// other. Equal strings score 1.0 outright; otherwise strings shorter
/// than two characters have no bigrams and score 0.0. Characters are
/// Unicode scalar values, so accented names compare cleanly.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.len() < 2 || b_chars.len() < 2 {
        return 0.0;
    }

    let mut bigrams: HashMap<(char, char), u32> = HashMap::new();
    for pair in a_chars.windows(2) {
        *bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut intersection: u32 = 0;
    for pair in b_chars.windows(2) {
        if let Some(remaining) = bigrams.get_mut(&(pair[0], pair[1])) {
            if *remaining > 0 {
                *remaining -= 1;
                intersection += 1;
            }
        }
    }

    f64::from(2 * intersection) / (a_chars.len() + b_chars.len() - 2) as f64
}

/// Tolerant equality between a held skill name and a required one.
///
/// Both inputs are expected to be normalized already (see [`normalize`]).
/// Substring containment in either direction catches the common naming
/// variants ("react" in "reactjs", "sql" in "postgresql"); the similarity
/// threshold catches spacing and spelling variants without a full
/// edit-distance pass.
pub fn fuzzy_match(held: &str, required: &str) -> bool {
    if held == required {
        return true;
    }
    if held.contains(required) || required.contains(held) {
        return true;
    }
    similarity(held, required) > SIMILARITY_THRESHOLD
}
