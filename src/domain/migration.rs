//! Legacy data migration - free-text sense descriptions into the
//! structured sense record
//!
//! Historical creature documents carried user-entered prose at
//! `traits.senses` ("Darkvision 60 ft, Keen smell"). The upgrade pass
//! parses what it can into `attributes.senses` and preserves the rest
//! verbatim in the `special` field. Malformed input never aborts a
//! migration: the source data accepted arbitrary prose, and a stricter
//! policy would silently drop information.

use std::sync::OnceLock;

use serde_json::{Map, Value};

use crate::domain::value_objects::{round_to_half, SenseTypes};

// Segment shape: leading word, range number, optional unit word.
// The unit word is matched but unused; record units are fixed elsewhere.
static SENSE_SEGMENT_REGEX: OnceLock<regex_lite::Regex> = OnceLock::new();

fn sense_segment_regex() -> &'static regex_lite::Regex {
    SENSE_SEGMENT_REGEX.get_or_init(|| {
        regex_lite::Regex::new(r"^([A-Za-z]+)\s*(\d+(?:\.\d+)?)\s*([A-Za-z]+)?")
            .expect("SENSE_SEGMENT_REGEX pattern is invalid")
    })
}

/// Upgrade a creature document's legacy free-text sense description into
/// the structured record at `attributes.senses`.
///
/// Mutates `doc` in place and never fails. Comma-separated segments that
/// parse into a recognized sense type are written as numeric ranges,
/// rounded to the nearest half unit; segments that do not are skipped.
/// When no segment at all is recognized, the original text is preserved
/// verbatim in the `special` field. The legacy field itself is left in
/// place for the caller to clean up, and running the migration again
/// produces the same result.
pub fn migrate_senses(doc: &mut Value, types: &SenseTypes) {
    let Some(root) = doc.as_object_mut() else {
        return;
    };

    let original = match root.get("traits").and_then(|traits| traits.get("senses")) {
        Some(Value::String(text)) => text.clone(),
        _ => return,
    };

    let attributes = ensure_object(root, "attributes");
    let senses = ensure_object(attributes, "senses");

    let regex = sense_segment_regex();
    let mut matched = false;

    for segment in original.split(',') {
        let Some(captures) = regex.captures(segment.trim()) else {
            continue;
        };

        let name = captures[1].to_lowercase();
        if !types.contains(&name) {
            continue;
        }

        let Ok(range) = captures[2].parse::<f64>() else {
            continue;
        };

        senses.insert(name, Value::from(round_to_half(range)));
        matched = true;
    }

    if !matched && !original.is_empty() {
        senses.insert("special".to_string(), Value::String(original));
    }
}

/// Fetch `parent[key]` as a mutable object, creating or replacing as
/// needed without touching sibling values.
fn ensure_object<'a>(parent: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    let slot = parent
        .entry(key)
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just set to an object"),
    }
}
