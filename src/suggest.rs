//! "Did you mean?" suggestions.
//!
//! Bounded Levenshtein matching between a misspelled identifier and a
//! candidate set. Candidate sets can be every member of a type, so work is
//! bounded per candidate: a length prefilter skips hopeless candidates
//! outright and the distance computation aborts as soon as it can no
//! longer come in under the threshold.

use crate::diagnostic::Suggestion;

/// Levenshtein distance capped at `max + 1`.
///
/// Two-row dynamic program. Once every cell of the current row exceeds
/// `max` no later row can shrink below it, so the scan stops there and
/// reports `max + 1`.
fn bounded_levenshtein(a: &str, b: &str, max: usize) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len().min(max + 1);
    }
    if b_chars.is_empty() {
        return a_chars.len().min(max + 1);
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0; b_chars.len() + 1];

    for (i, &a_char) in a_chars.iter().enumerate() {
        current[0] = i + 1;
        let mut row_min = current[0];

        for (j, &b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            current[j + 1] = (prev[j + 1] + 1) // deletion
                .min(current[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
            row_min = row_min.min(current[j + 1]);
        }

        if row_min > max {
            return max + 1;
        }
        std::mem::swap(&mut prev, &mut current);
    }

    prev[b_chars.len()].min(max + 1)
}

/// Best candidate within `max_distance` of `query`, or `None`.
///
/// Candidates identical to the query are skipped: an identical name cannot
/// be the fix for an unknown-identifier diagnostic. Ties on distance break
/// to the shorter candidate, then the lexicographically first, so the
/// result is deterministic regardless of candidate order.
pub fn suggest(query: &str, candidates: &[String], max_distance: usize) -> Option<Suggestion> {
    let query_len = query.chars().count();
    let mut best: Option<(usize, &String)> = None;

    for candidate in candidates {
        if candidate == query {
            continue;
        }
        // An insertion or deletion is needed per length difference; skip
        // without running the DP when that alone exceeds the threshold.
        let candidate_len = candidate.chars().count();
        if candidate_len.abs_diff(query_len) > max_distance {
            continue;
        }

        let distance = bounded_levenshtein(query, candidate, max_distance);
        if distance > max_distance {
            continue;
        }

        let better = match best {
            None => true,
            Some((best_distance, best_candidate)) => {
                distance < best_distance
                    || (distance == best_distance
                        && (candidate.len() < best_candidate.len()
                            || (candidate.len() == best_candidate.len()
                                && candidate < best_candidate)))
            }
        };
        if better {
            best = Some((distance, candidate));
        }
    }

    best.map(|(distance, candidate)| Suggestion {
        candidate: candidate.clone(),
        distance,
    })
}
