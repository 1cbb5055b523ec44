//! Baseline-keyed payload merge for partial updates

use serde_json::{Map, Value};

/// Flat record mapping as stored by the remote service.
pub type RecordMap = Map<String, Value>;

/// Build the outgoing payload from a freshly fetched baseline and the
/// current form values.
///
/// Only keys present in the baseline are emitted. For each of them the
/// form's value wins when the form defines the key; otherwise the
/// baseline's own value is echoed back unchanged. Form-only keys are
/// dropped, so fields the form knows about but the store does not are
/// never sent.
pub fn merge_into_baseline(baseline: &RecordMap, current: &RecordMap) -> RecordMap {
    baseline
        .iter()
        .map(|(key, baseline_value)| {
            let value = current.get(key).unwrap_or(baseline_value).clone();
            (key.clone(), value)
        })
        .collect()
}
