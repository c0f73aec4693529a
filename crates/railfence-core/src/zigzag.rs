// crates/railfence-core/src/zigzag.rs
//
// Zigzag traversal over k rails:
//   rail 0 -> 1 -> ... -> k-1 -> k-2 -> ... -> 0 -> 1 -> ...
// One rail index per character position. This is the leaf the encoder,
// decoder, and renderer are all built on.

/// Rail index for each of `len` positions when traversing `rails` rails in
/// a zigzag.
///
/// - `rails <= 1` yields all zeros (single-rail identity; every position
///   stays on rail 0).
/// - Deterministic: the same `(len, rails)` always yields the same sequence.
pub fn rail_pattern(len: usize, rails: usize) -> Vec<usize> {
    if rails <= 1 {
        return vec![0; len];
    }

    let mut out = Vec::with_capacity(len);
    let mut rail = 0usize;
    let mut down = true;

    for _ in 0..len {
        out.push(rail);

        // Re-evaluated on every step; only flips at the boundary rails.
        if rail == 0 {
            down = true;
        } else if rail == rails - 1 {
            down = false;
        }

        if down {
            rail += 1;
        } else {
            rail -= 1;
        }
    }

    out
}

/// How many positions of `pattern` land on each of the `rails` rails.
///
/// The sum of the counts equals `pattern.len()`.
pub fn occupancy(pattern: &[usize], rails: usize) -> Vec<usize> {
    let mut counts = vec![0usize; rails];
    for &r in pattern {
        counts[r] += 1;
    }
    counts
}
