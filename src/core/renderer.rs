use crate::domain::model::Record;
use crate::utils::error::{Result, ScoreError};
use std::io::Write;

/// 以兩格縮排的 JSON 陣列序列化選取結果
pub fn render(selection: &[Record]) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec_pretty(selection)?;
    Ok(bytes)
}

/// Writes rendered bytes plus the trailing newline.
pub fn write_output<W: Write>(out: &mut W, rendered: &[u8]) -> Result<()> {
    out.write_all(rendered)
        .and_then(|_| out.write_all(b"\n"))
        .and_then(|_| out.flush())
        .map_err(ScoreError::OutputError)
}
