//! Record synchronization: load on startup, merge-and-patch on submit

use super::dates;
use super::merge::{merge_into_baseline, RecordMap};
use crate::api::{ApiError, RecordStore};
use crate::state::ApplicationForm;
use serde_json::Value;

/// Record keys the store expects in `DD-MMM-YYYY` format.
const SPANISH_DATE_KEYS: [&str; 2] = ["labBirthDay", "labInicioLaboral"];

/// Fetch the record for `id` and populate the form from it.
///
/// On failure the form is left exactly as it was; the caller surfaces the
/// error as a notification.
pub async fn load_into<S: RecordStore>(
    store: &S,
    id: &str,
    form: &mut ApplicationForm,
) -> Result<(), ApiError> {
    let record = store.fetch_record(id).await?;
    tracing::debug!(keys = record.len(), "loaded record {id}");
    form.apply_record(&record);
    Ok(())
}

/// Merge the form into a fresh baseline and send the partial update.
///
/// The baseline is re-fetched here rather than reused from load time, so
/// fields unknown to this form are echoed back at their latest values.
pub async fn submit<S: RecordStore>(
    store: &S,
    id: &str,
    form: &ApplicationForm,
) -> Result<(), ApiError> {
    let baseline = store.fetch_record(id).await?;
    let payload = build_payload(&baseline, form);
    tracing::debug!(keys = payload.len(), "sending record update for {id}");
    store.patch_record(&payload).await
}

/// Build the outgoing payload: baseline keys only, form values preferred,
/// and the two date keys converted back to the store's format.
fn build_payload(baseline: &RecordMap, form: &ApplicationForm) -> RecordMap {
    let mut payload = merge_into_baseline(baseline, &form.values());
    for key in SPANISH_DATE_KEYS {
        let text = match payload.get(key) {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            _ => continue,
        };
        match dates::iso_to_spanish(&text) {
            Ok(spanish) => {
                payload.insert(key.to_string(), Value::String(spanish));
            }
            Err(err) => {
                // Non-ISO values (a baseline echo, typically) pass through.
                tracing::debug!("leaving {key} unconverted: {err}");
            }
        }
    }
    payload
}
