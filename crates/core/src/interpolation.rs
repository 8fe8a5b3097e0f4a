use indexmap::IndexSet;

use crate::config_file::ConfigMap;

/// Marker placed on both sides of a key to form a token
pub const TOKEN_MARKER: &str = "%%";

/// The token standing for `key`, e.g. `%%NAME%%`.
pub fn token_for(key: &str) -> String {
    format!("{TOKEN_MARKER}{key}{TOKEN_MARKER}")
}

/// Replaces every `%%key%%` in `body` with its configured value.
///
/// Keys are applied one after another in mapping order, each as a literal,
/// non-overlapping, left-to-right replacement of the text left by the
/// previous keys. A value containing token syntax can therefore be expanded
/// by a later key. Tokens for unknown keys are kept verbatim.
pub fn substitute(body: &str, keys: &ConfigMap) -> String {
    let mut text = body.to_string();

    for (key, value) in keys {
        text = text.replace(&token_for(key), value);
    }

    text
}

/// Find the keys of all tokens still present in `text`, in order of first
/// appearance.
///
/// Only marker pairs enclosing a non-empty key without whitespace count as
/// tokens.
pub fn get_tokens(text: &str) -> IndexSet<String> {
    let mut tokens = IndexSet::new();
    let mut rest = text;

    while let Some(start) = rest.find(TOKEN_MARKER) {
        let after_marker = &rest[start + TOKEN_MARKER.len()..];
        let Some(end) = after_marker.find(TOKEN_MARKER) else {
            break;
        };

        let key = &after_marker[..end];
        if !key.is_empty() && !key.contains(char::is_whitespace) {
            tokens.insert(key.to_string());
            rest = &after_marker[end + TOKEN_MARKER.len()..];
        } else {
            // The closing marker may open the next token.
            rest = &after_marker[end..];
        }
    }

    tokens
}
