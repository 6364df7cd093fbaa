//! Edit distance for typo suggestions.

use crate::config::SUGGESTION_MAX_DISTANCE;
use crate::shell::Command;

/// Levenshtein distance between two strings, counted in chars.
///
/// Insertions, deletions and substitutions each cost 1.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }

    // prev[j] = distance between a[..i] and b[..j]
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Closest known command name, if it is within the suggestion threshold.
///
/// Ties go to the name listed first in [`Command::names`].
pub fn suggest_command(name: &str) -> Option<&'static str> {
    let name = name.to_lowercase();
    let (best, distance) = Command::names()
        .iter()
        .map(|candidate| (*candidate, edit_distance(&name, candidate)))
        .min_by_key(|(_, distance)| *distance)?;

    (distance <= SUGGESTION_MAX_DISTANCE).then_some(best)
}
