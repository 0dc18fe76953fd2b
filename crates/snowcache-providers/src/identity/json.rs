//! JSON identity extractor
//!
//! Two-phase identifier resolution for JSON payloads:
//!
//! 1. A bytewise scan for the top-level `"id"` key that never allocates.
//!    It only accepts an unambiguous, well-formed, non-zero decimal value.
//! 2. If the scan gives up for any reason, a structured decode of just the
//!    `id` field. Correctness never depends on the scan succeeding.

use serde::Deserialize;
use snowcache_domain::constants::{ENTITY_ID_FIELD, SNOWFLAKE_MAX_DIGITS};
use snowcache_domain::error::{Error, Result};
use snowcache_domain::ports::IdentityExtractor;
use snowcache_domain::value_objects::Snowflake;
use tracing::trace;

/// Identity extractor for JSON entity payloads
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonIdentityExtractor;

impl JsonIdentityExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }
}

impl IdentityExtractor for JsonIdentityExtractor {
    fn extract_id(&self, raw: &[u8]) -> Result<Snowflake> {
        if let Some(id) = scan_root_id(raw) {
            return Ok(id);
        }
        trace!("Identifier scan inconclusive, decoding id field");
        decode_root_id(raw)
    }
}

#[derive(Deserialize)]
struct RootId {
    #[serde(default)]
    id: Option<Snowflake>,
}

/// Structured fallback: decode only the top-level `id` field
fn decode_root_id(raw: &[u8]) -> Result<Snowflake> {
    let root: RootId = serde_json::from_slice(raw)
        .map_err(|e| Error::decode_with_source("cannot decode payload identifier", e))?;

    match root.id {
        Some(id) if !id.is_empty() => Ok(id),
        Some(_) => Err(Error::identity_not_found("identifier is zero")),
        None => Err(Error::identity_not_found("payload has no identifier field")),
    }
}

/// Fast path: locate the top-level `"id"` member without decoding.
///
/// Returns `None` when the payload is not an object, the key is missing or
/// repeated, or its value is not a plain non-zero snowflake.
fn scan_root_id(data: &[u8]) -> Option<Snowflake> {
    let mut pos = skip_whitespace(data, 0);
    if data.get(pos) != Some(&b'{') {
        return None;
    }
    pos += 1;

    let key = ENTITY_ID_FIELD.as_bytes();
    let mut depth = 1usize;
    let mut found = None;

    while pos < data.len() {
        match data[pos] {
            b'"' => {
                let end = string_end(data, pos)?;
                let is_member_key = depth == 1 && &data[pos + 1..end] == key && {
                    let colon = skip_whitespace(data, end + 1);
                    data.get(colon) == Some(&b':')
                };

                if is_member_key {
                    if found.is_some() {
                        return None;
                    }
                    let colon = skip_whitespace(data, end + 1);
                    let (id, next) = parse_snowflake_value(data, colon + 1)?;
                    found = Some(id);
                    pos = next;
                    continue;
                }
                pos = end + 1;
            }
            b'{' | b'[' => {
                depth += 1;
                pos += 1;
            }
            b'}' | b']' => {
                depth = depth.checked_sub(1)?;
                pos += 1;
                if depth == 0 {
                    break;
                }
            }
            _ => pos += 1,
        }
    }

    if depth != 0 {
        return None;
    }
    found.filter(|id| !id.is_empty())
}

fn skip_whitespace(data: &[u8], mut pos: usize) -> usize {
    while pos < data.len() && data[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

/// Index of the closing quote of the string starting at `start`
fn string_end(data: &[u8], start: usize) -> Option<usize> {
    let mut pos = start + 1;
    while pos < data.len() {
        match data[pos] {
            b'\\' => pos += 2,
            b'"' => return Some(pos),
            _ => pos += 1,
        }
    }
    None
}

/// Parse `"123"` or `123` at `pos`; returns the id and the index after it
fn parse_snowflake_value(data: &[u8], pos: usize) -> Option<(Snowflake, usize)> {
    let mut pos = skip_whitespace(data, pos);
    let quoted = data.get(pos) == Some(&b'"');
    if quoted {
        pos += 1;
    }

    let start = pos;
    while pos < data.len() && data[pos].is_ascii_digit() {
        pos += 1;
    }
    let digits = &data[start..pos];
    if digits.is_empty() || digits.len() > SNOWFLAKE_MAX_DIGITS {
        return None;
    }

    if quoted {
        if data.get(pos) != Some(&b'"') {
            return None;
        }
        pos += 1;
    }

    // The value must end at a member boundary
    let after = skip_whitespace(data, pos);
    if !matches!(data.get(after), Some(b',' | b'}')) {
        return None;
    }

    let value = std::str::from_utf8(digits).ok()?.parse::<u64>().ok()?;
    Some((Snowflake::new(value), after))
}
