//! Path-segment encoding for free-form identifiers.
//!
//! Resource ids on a system mapping are URL paths themselves (`/sap/bc/...`)
//! and cannot be dropped into a request path as-is. The connector expects
//! them in an escaped form where `/` becomes `-`; literal `+` and `-` are
//! escaped first so that the mapping stays reversible.

/// Encode an identifier so it can be used as a single path segment.
///
/// Passes run in order over the whole string: `+` → `+2B`, `-` → `+2D`,
/// then `/` → `-`. Only identifier segments go through here, never the
/// structural literals of a path template.
pub fn encode_segment(raw: &str) -> String {
    raw.replace('+', "+2B").replace('-', "+2D").replace('/', "-")
}

/// Inverse of [`encode_segment`].
///
/// Not needed on the request path (the connector decodes on its side) but
/// handy when rendering server-side identifiers back to users.
pub fn decode_segment(encoded: &str) -> String {
    let mut out = String::with_capacity(encoded.len());
    let mut chars = encoded.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '-' => out.push('/'),
            '+' => {
                let escape: String = chars.clone().take(2).collect();
                match escape.as_str() {
                    "2B" => {
                        out.push('+');
                        chars.nth(1);
                    }
                    "2D" => {
                        out.push('-');
                        chars.nth(1);
                    }
                    _ => out.push('+'),
                }
            }
            other => out.push(other),
        }
    }

    out
}
