use crate::domain::model::{ParsedLine, Record, SkipReason};
use crate::utils::error::ParseError;
use serde_json::{Map, Value};
use std::num::ParseIntError;

/// Parses one `<score>:<json-object>` line.
///
/// Blank lines and zero scores are skipped rather than rejected. Every other
/// deviation from the grammar is a [`ParseError`].
pub fn parse_record(line: &str) -> Result<ParsedLine, ParseError> {
    if line.trim().is_empty() {
        return Ok(ParsedLine::Skip(SkipReason::Blank));
    }

    let (score_token, payload) = line
        .split_once(':')
        .ok_or_else(|| ParseError::MalformedRecord {
            record: line.to_string(),
        })?;

    let score = parse_score(score_token)?;
    let id = parse_id(payload)?;

    // 分數 0 保留為「略過此行」
    if score == 0 {
        return Ok(ParsedLine::Skip(SkipReason::ZeroScore));
    }

    Ok(ParsedLine::Record(Record { score, id }))
}

/// 只接受十進位數字。u64::from_str 允許前導 '+'，此處以單獨的 "+"
/// 取得相同的 InvalidDigit 錯誤。
fn parse_score(token: &str) -> Result<u64, ParseIntError> {
    token
        .strip_prefix('+')
        .map_or_else(|| token.parse(), |_| "+".parse())
}

fn parse_id(payload: &str) -> Result<String, ParseError> {
    let mut object: Map<String, Value> =
        serde_json::from_str(payload).map_err(ParseError::InvalidJson)?;

    match object.remove("id") {
        Some(Value::String(id)) if !id.is_empty() => Ok(id),
        _ => Err(ParseError::MissingId),
    }
}
