//! Cached Entities
//!
//! An [`Entity`] is a remote object mirrored locally. The trait captures the
//! three ways a cache needs to build or update one:
//!
//! | Operation | Used by | Semantics |
//! |-----------|---------|-----------|
//! | [`Entity::decode`] | stream update, unknown id | fresh value, absent fields defaulted |
//! | [`Entity::merge_from_slice`] | stream update, known id | only fields present in the payload change |
//! | [`Entity::copy_over_to`] | snapshot response, known id | every field overwritten |

/// User entity
pub mod user;

pub use user::User;

use crate::error::{Error, Result};
use crate::value_objects::Snowflake;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Capability required of every entity type held by an entity cache
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Human-readable entity kind, used in logs and type mismatch errors
    const KIND: &'static str;

    /// Identifier of this entity
    fn id(&self) -> Snowflake;

    /// Decode a fresh entity from a raw JSON payload
    fn decode(raw: &[u8]) -> Result<Self> {
        serde_json::from_slice(raw)
            .map_err(|e| Error::decode_with_source(format!("invalid {} payload", Self::KIND), e))
    }

    /// Apply a possibly partial raw payload onto this entity
    ///
    /// Fields missing from `raw` keep their current values. On error `self`
    /// is left untouched.
    fn merge_from_slice(&mut self, raw: &[u8]) -> Result<()> {
        overlay_fields(self, raw, Self::KIND)
    }

    /// Overwrite every field of `cached` with this entity's values
    fn copy_over_to(&self, cached: &mut Self) {
        cached.clone_from(self);
    }
}

/// Overlay the top-level fields of a JSON object onto `target`.
///
/// The merged document is decoded in full before `target` is replaced, so a
/// malformed field never leaves a half-applied update behind.
pub fn overlay_fields<T>(target: &mut T, raw: &[u8], kind: &str) -> Result<()>
where
    T: Serialize + DeserializeOwned,
{
    let patch: Value = serde_json::from_slice(raw)
        .map_err(|e| Error::decode_with_source(format!("invalid {kind} payload"), e))?;
    let Value::Object(patch) = patch else {
        return Err(Error::decode(format!("{kind} payload is not a JSON object")));
    };

    let mut current = serde_json::to_value(&*target)
        .map_err(|e| Error::decode_with_source(format!("cannot re-encode cached {kind}"), e))?;
    let Value::Object(fields) = &mut current else {
        return Err(Error::decode(format!("cached {kind} is not a JSON object")));
    };
    fields.extend(patch);

    *target = serde_json::from_value(current)
        .map_err(|e| Error::decode_with_source(format!("invalid {kind} update"), e))?;
    Ok(())
}
