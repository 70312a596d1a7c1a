use std::borrow::Cow;

const BYTE_ORDER_MARK: &[u8] = b"\xEF\xBB\xBF";

/// Remove a leading UTF-8 byte order mark and normalize `\r\n` to `\n`.
///
/// Bytes that aren't valid UTF-8 are replaced instead of failing the whole file.
pub fn strip_preamble(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(BYTE_ORDER_MARK).unwrap_or(bytes);
    let content = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = content {
        log::warn!("Input is not valid UTF-8, invalid bytes were replaced");
    }
    content.replace("\r\n", "\n")
}
