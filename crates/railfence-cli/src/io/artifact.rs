use anyhow::Context;
use railfence_core::artifact;

pub fn write_rfz(path: &str, rails: usize, ciphertext: &str) -> anyhow::Result<()> {
    let bytes = artifact::encode(rails, ciphertext);
    std::fs::write(path, bytes).with_context(|| format!("write {path}"))?;
    Ok(())
}

/// Read an .rfz file and return `(rails, ciphertext)`.
pub fn read_rfz(path: &str) -> anyhow::Result<(usize, String)> {
    let bytes = std::fs::read(path).with_context(|| format!("read {path}"))?;
    Ok(artifact::decode(&bytes)?)
}
