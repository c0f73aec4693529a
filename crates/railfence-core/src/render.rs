// crates/railfence-core/src/render.rs
//
// Debug/teaching aid: draw the zigzag layout the encoder walks. Has no
// effect on encode/decode correctness.

use crate::error::Result;
use crate::validate::validate_rails;
use crate::zigzag::rail_pattern;

/// Render the zigzag layout of `text` over `rails` rails.
///
/// Returns `rails` lines of `text.chars().count()` columns each: line `i`
/// holds character `j` at column `j` iff the pattern puts position `j` on
/// rail `i`, space elsewhere.
///
/// The degenerate range (`rails == 1` or `rails >= len`) returns
/// `Ok(None)`: there is no zigzag to draw, and the caller owns the
/// human-readable notice.
pub fn render(text: &str, rails: usize) -> Result<Option<Vec<String>>> {
    validate_rails(rails)?;

    let chars: Vec<char> = text.chars().collect();
    if rails == 1 || rails >= chars.len() {
        return Ok(None);
    }

    let pattern = rail_pattern(chars.len(), rails);

    let mut lines = Vec::with_capacity(rails);
    for rail in 0..rails {
        let mut line = String::with_capacity(chars.len());
        for (j, &ch) in chars.iter().enumerate() {
            line.push(if pattern[j] == rail { ch } else { ' ' });
        }
        lines.push(line);
    }

    Ok(Some(lines))
}
