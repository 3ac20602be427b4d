//! Query-string building.

use super::{Address, UriError};

/// Concatenates `key=value&` for every pair, in order.
///
/// Nothing is percent-encoded and the trailing `&` is kept.
pub fn to_query_string<I, K, V>(parameters: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    parameters
        .into_iter()
        .fold(String::new(), |mut query, (key, value)| {
            query.push_str(key.as_ref());
            query.push('=');
            query.push_str(value.as_ref());
            query.push('&');
            query
        })
}

/// Appends `?` and the query built from `parameters` to `address`.
///
/// The result has the same kind (absolute or relative) as `address`. An
/// empty parameter list yields `<address>?`. Callers pre-encode keys and
/// values that contain `&`, `=`, `#` or other unsafe characters.
///
/// The text is concatenated as is. If `address` already has a query, the
/// result reads `…?a=1?x=1&` and the new first key is glued onto the old
/// query; if it has a fragment, the new parameters land inside the fragment
/// and [`parameters_query`](super::parameters_query) will not see them.
///
/// # Examples
///
/// - `http://example.com` + `[("x", "1"), ("y", "2")]` → `http://example.com?x=1&y=2&`
pub fn add_parameters<I, K, V>(address: &Address, parameters: I) -> Result<Address, UriError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let text = format!("{}?{}", address.as_str(), to_query_string(parameters));
    Address::parse_as(&text, address.kind())
}

/// Appends `#anchor` to `address`, keeping its kind.
pub fn with_anchor(address: &Address, anchor: &str) -> Result<Address, UriError> {
    let text = format!("{}#{}", address.as_str(), anchor);
    Address::parse_as(&text, address.kind())
}
