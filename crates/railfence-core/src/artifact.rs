// crates/railfence-core/src/artifact.rs
//
// .rfz container: a ciphertext that carries the rail count it was encoded
// with, so decode never has to guess k.
//
// Layout (little-endian):
// MAGIC[4]        "RFZ1"
// version:u16
// rails:u32
// data_len:u64
// data_bytes[data_len]   (ciphertext, UTF-8)
// crc32:u32              (over everything before crc32)

use crate::error::{RailError, Result};

const MAGIC: &[u8; 4] = b"RFZ1";
pub const VERSION: u16 = 1;

pub fn encode(rails: usize, ciphertext: &str) -> Vec<u8> {
    let data = ciphertext.as_bytes();

    let mut out = Vec::with_capacity(4 + 2 + 4 + 8 + data.len() + 4);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&(rails as u32).to_le_bytes());
    out.extend_from_slice(&(data.len() as u64).to_le_bytes());
    out.extend_from_slice(data);

    let crc = crc32(&out);
    out.extend_from_slice(&crc.to_le_bytes());

    out
}

/// Decode an .rfz blob into `(rails, ciphertext)`.
///
/// Validates magic, version, the rail count, length bookkeeping (no
/// trailing bytes), the crc32, and that the payload is UTF-8.
pub fn decode(bytes: &[u8]) -> Result<(usize, String)> {
    // magic + version + rails + data_len + crc
    if bytes.len() < 4 + 2 + 4 + 8 + 4 {
        return Err(RailError::ArtifactFormat("rfz too small".into()));
    }
    if &bytes[0..4] != MAGIC {
        return Err(RailError::ArtifactFormat("bad rfz magic".into()));
    }

    // Verify crc before trusting any field.
    let crc_off = bytes.len() - 4;
    let crc_expected = u32::from_le_bytes(bytes[crc_off..].try_into().unwrap());
    let crc_actual = crc32(&bytes[..crc_off]);
    if crc_expected != crc_actual {
        return Err(RailError::ArtifactFormat("rfz crc32 mismatch".into()));
    }

    let mut i = 4usize;

    let version = read_u16(bytes, &mut i)?;
    if version != VERSION {
        return Err(RailError::ArtifactFormat(format!("bad rfz version {version}")));
    }

    let rails = read_u32(bytes, &mut i)? as usize;
    if rails == 0 {
        return Err(RailError::ArtifactFormat("rfz rails must be >= 1".into()));
    }

    let data_len = read_u64(bytes, &mut i)? as usize;
    let data_end = i
        .checked_add(data_len)
        .ok_or_else(|| RailError::ArtifactFormat("rfz data_len overflow".into()))?;
    if data_end != crc_off {
        return Err(RailError::ArtifactFormat("rfz data_len mismatch".into()));
    }

    let ciphertext = std::str::from_utf8(&bytes[i..data_end])
        .map_err(|_| RailError::ArtifactFormat("rfz data is not UTF-8".into()))?
        .to_string();

    Ok((rails, ciphertext))
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

fn need(bytes: &[u8], i: usize, n: usize) -> Result<()> {
    if bytes.len() < i + n {
        return Err(RailError::ArtifactFormat("unexpected eof".into()));
    }
    Ok(())
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    need(bytes, *i, 2)?;
    let v = u16::from_le_bytes(bytes[*i..*i + 2].try_into().unwrap());
    *i += 2;
    Ok(v)
}

fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    need(bytes, *i, 4)?;
    let v = u32::from_le_bytes(bytes[*i..*i + 4].try_into().unwrap());
    *i += 4;
    Ok(v)
}

fn read_u64(bytes: &[u8], i: &mut usize) -> Result<u64> {
    need(bytes, *i, 8)?;
    let v = u64::from_le_bytes(bytes[*i..*i + 8].try_into().unwrap());
    *i += 8;
    Ok(v)
}
