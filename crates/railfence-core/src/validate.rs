use crate::error::{RailError, Result};

/// Reject `rails == 0` before any cipher work.
///
/// `rails == 1` is NOT an error: it is the valid single-rail identity and
/// is handled by the degenerate short-circuit in encode/decode.
pub fn validate_rails(rails: usize) -> Result<()> {
    if rails == 0 {
        return Err(RailError::Validation("rails must be >= 1".into()));
    }
    Ok(())
}
