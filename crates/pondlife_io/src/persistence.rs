//! Snapshot files.
//!
//! Decoding is lenient: a snapshot written by an older or newer build, or one
//! that was hand-edited, still loads. Fields that are missing or malformed
//! fall back to their defaults, and individuals that cannot be read are
//! skipped. Structural repair (capacity, dangling pairs, bounds) is left to
//! `PondEngine::restore`.

use crate::error::{IoError, Result};
use crate::serialization::to_json_pretty;
use pondlife_core::PondSnapshot;
use pondlife_data::{BreedingPair, Individual, Pond, Produce};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::Path;

/// Reads one field, falling back to `None` when it is absent or malformed.
fn field<T: DeserializeOwned>(obj: &Map<String, Value>, key: &str) -> Option<T> {
    let value = obj.get(key)?;
    match serde_json::from_value(value.clone()) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(field = key, error = %e, "Unreadable snapshot field, using default");
            None
        }
    }
}

/// Decodes each element on its own, dropping the ones that fail.
fn items<T: DeserializeOwned>(obj: &Map<String, Value>, key: &str) -> Vec<T> {
    let Some(Value::Array(values)) = obj.get(key) else {
        return Vec::new();
    };
    values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| match serde_json::from_value(v.clone()) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(field = key, index = i, error = %e, "Skipping unreadable entry");
                None
            }
        })
        .collect()
}

fn decode_pond(obj: &Map<String, Value>) -> Pond {
    let defaults = Pond::default();
    Pond {
        built: field(obj, "built").unwrap_or(defaults.built),
        level: field(obj, "level").unwrap_or(defaults.level),
        individuals: items::<Individual>(obj, "individuals"),
        water_quality: field(obj, "water_quality").unwrap_or(defaults.water_quality),
        fed_today: field(obj, "fed_today").unwrap_or(defaults.fed_today),
        collected_today: field(obj, "collected_today").unwrap_or(defaults.collected_today),
        breeding_pair: field::<Option<BreedingPair>>(obj, "breeding_pair").flatten(),
        pending_output: items::<Produce>(obj, "pending_output"),
    }
}

/// Decodes a snapshot from JSON text.
///
/// Only text that is not JSON at all is an error.
pub fn decode_snapshot(json: &str) -> Result<PondSnapshot> {
    if json.trim().is_empty() {
        return Err(IoError::validation("Empty snapshot"));
    }
    let root: Value = serde_json::from_str(json)?;
    let Value::Object(root) = root else {
        tracing::warn!("Snapshot is not a JSON object, starting fresh");
        return Ok(PondSnapshot::default());
    };

    let pond = match root.get("pond") {
        Some(Value::Object(obj)) => decode_pond(obj),
        _ => Pond::default(),
    };
    let discovered = items::<String>(&root, "discovered");
    Ok(PondSnapshot { pond, discovered })
}

/// Writes a snapshot as pretty JSON.
///
/// The data goes to a `.tmp` sibling first and is renamed over the target,
/// so an interrupted save never leaves a truncated file behind.
pub fn save_snapshot<P: AsRef<Path>>(snapshot: &PondSnapshot, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = to_json_pretty(snapshot)?;
    let tmp_path = path.with_extension("tmp");
    std::fs::write(&tmp_path, json).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("writing snapshot to {:?}", tmp_path))
    })?;
    std::fs::rename(&tmp_path, path).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("replacing snapshot at {:?}", path))
    })?;
    tracing::debug!(path = ?path, "Snapshot saved");
    Ok(())
}

/// Loads a snapshot, or a fresh one when the file does not exist.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<PondSnapshot> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!(path = ?path, "No snapshot found, starting fresh");
        return Ok(PondSnapshot::default());
    }
    let json = std::fs::read_to_string(path).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("reading snapshot from {:?}", path))
    })?;
    decode_snapshot(&json).map_err(|e| e.with_context(format!("decoding {:?}", path)))
}
