// crates/railfence-core/src/fence.rs
//
// Rail fence transposition:
// - encode: distribute characters across rails in zigzag order, then read
//   the rails top to bottom.
// - decode: slice the ciphertext into per-rail runs from occupancy counts,
//   then replay the zigzag to restore the original order.
//
// Degenerate range (`rails == 1` or `rails >= len`, chars) is an explicit
// identity short-circuit, including the `rails == len` boundary.

use crate::error::{RailError, Result};
use crate::validate::validate_rails;
use crate::zigzag::{occupancy, rail_pattern};

/// Encode `text` across `rails` zigzag rails.
///
/// The ciphertext is a permutation of the input characters: same length,
/// same multiset, only positions change.
pub fn encode(text: &str, rails: usize) -> Result<String> {
    validate_rails(rails)?;

    let chars: Vec<char> = text.chars().collect();
    if rails == 1 || rails >= chars.len() {
        return Ok(text.to_string());
    }

    let pattern = rail_pattern(chars.len(), rails);

    let mut buckets: Vec<String> = vec![String::new(); rails];
    for (&ch, &rail) in chars.iter().zip(pattern.iter()) {
        buckets[rail].push(ch);
    }

    let mut out = String::with_capacity(text.len());
    for bucket in &buckets {
        out.push_str(bucket);
    }

    Ok(out)
}

/// Decode a rail fence ciphertext produced with the same `rails`.
///
/// Exact inverse of `encode` for every `rails >= 1`, the degenerate range
/// included (where both are the identity).
pub fn decode(ciphertext: &str, rails: usize) -> Result<String> {
    validate_rails(rails)?;

    let chars: Vec<char> = ciphertext.chars().collect();
    if rails == 1 || rails >= chars.len() {
        return Ok(ciphertext.to_string());
    }

    let pattern = rail_pattern(chars.len(), rails);
    let counts = occupancy(&pattern, rails);

    let total: usize = counts.iter().sum();
    if total != chars.len() {
        return Err(RailError::Validation(format!(
            "occupancy mismatch: rails hold {} chars, ciphertext has {}",
            total,
            chars.len()
        )));
    }

    // One contiguous run per rail, in rail order. This undoes the
    // encoder's bucket concatenation.
    let mut runs: Vec<&[char]> = Vec::with_capacity(rails);
    let mut start = 0usize;
    for &count in &counts {
        runs.push(&chars[start..start + count]);
        start += count;
    }

    // Replay the zigzag with one read cursor per rail.
    let mut cursors = vec![0usize; rails];
    let mut out = String::with_capacity(ciphertext.len());
    for &rail in &pattern {
        let pos = cursors[rail];
        if pos >= runs[rail].len() {
            return Err(RailError::Validation(format!(
                "rail {rail} exhausted while replaying pattern"
            )));
        }
        out.push(runs[rail][pos]);
        cursors[rail] = pos + 1;
    }

    Ok(out)
}
