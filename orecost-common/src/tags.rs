//! Player/clan tag normalization
//!
//! Callers supply tags in three conventions: bare (`ABC123`), human-readable
//! (`#ABC123`), or already upstream-encoded (`%23ABC123`). The upstream API
//! only accepts the encoded form in URL paths.

/// Normalize a tag into the upstream-encoded form.
///
/// Trims whitespace; an already-encoded tag passes through unchanged, a
/// `#` prefix is replaced with `%23`, and anything else gets `%23`
/// prepended. An empty (or all-whitespace) tag stays empty.
pub fn normalize_tag(tag: &str) -> String {
    let tag = tag.trim();
    if tag.is_empty() {
        return String::new();
    }
    if tag.starts_with("%23") {
        return tag.to_string();
    }
    if let Some(rest) = tag.strip_prefix('#') {
        return format!("%23{rest}");
    }
    format!("%23{tag}")
}

/// Check that every `%` in a path-supplied tag starts a valid two-digit
/// hex escape. Malformed escapes would otherwise be forwarded verbatim
/// into the upstream URL.
pub fn percent_ok(tag: &str) -> bool {
    let bytes = tag.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
