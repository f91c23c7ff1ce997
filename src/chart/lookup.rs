//! Series Config Lookup
//!
//! Tooltips and legends both need to find the config entry that describes a
//! payload item. The key they start from is usually a field name (a data key
//! or a name key); when the item, or the data row it was plotted from,
//! carries a string under that field, its value is the series key instead.

use super::config::{ChartConfig, SeriesConfig};
use super::payload::PayloadItem;

/// First candidate that is set and non-empty
pub(crate) fn first_present<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

/// The key the config is consulted with first for `item`
pub fn effective_key<'a>(item: &'a PayloadItem, key: &'a str) -> &'a str {
    item.string_field(key)
        .or_else(|| item.row_string_field(key))
        .unwrap_or(key)
}

/// Find the config entry describing `item`.
///
/// Tries the effective key first, then `key` itself. `None` means the caller
/// falls back to raw payload values.
pub fn lookup<'c>(config: &'c ChartConfig, item: &PayloadItem, key: &str) -> Option<&'c SeriesConfig> {
    let resolved = effective_key(item, key);
    let entry = config.get(resolved).or_else(|| config.get(key));
    if entry.is_none() {
        tracing::trace!(key, resolved, "No chart config entry for payload item");
    }
    entry
}
