//! Query-string parsing.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::{Address, UriError};

/// Parses the query of `address` into a key/value map.
///
/// A single leading `?` is stripped, the rest is split on `&` and each token
/// on `=`. The value is the text between the first and second `=`; further
/// segments are dropped. When a key repeats, the first value is kept. Empty
/// tokens (trailing `&`, `&&`, empty query) are skipped. A non-empty token
/// without `=` is [`UriError::MalformedInput`]. Nothing is percent-decoded.
pub fn parameters_query(address: &Address) -> Result<HashMap<String, String>, UriError> {
    let query = address.query().unwrap_or_default();
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut parameters = HashMap::new();
    for token in query.split('&').filter(|token| !token.is_empty()) {
        let mut parts = token.split('=');
        let key = parts.next().unwrap_or_default();
        let value = parts
            .next()
            .ok_or_else(|| UriError::malformed(token, "query parameter has no '=' separator"))?;

        match parameters.entry(key.to_string()) {
            Entry::Occupied(_) => {
                tracing::debug!(key, value, "ignoring repeated query parameter");
            }
            Entry::Vacant(slot) => {
                slot.insert(value.to_string());
            }
        }
    }

    Ok(parameters)
}
