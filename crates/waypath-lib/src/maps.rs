//! Navigation link builder.

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir";

/// Directions link from `start` to `goal` for an external map viewer.
///
/// Each name is percent-encoded as a single path segment.
pub fn directions_url(start: &str, goal: &str) -> String {
    format!(
        "{DIRECTIONS_BASE}/{}/{}",
        encode_segment(start.trim()),
        encode_segment(goal.trim())
    )
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}
