// Lenient byte decoding for uploaded documents.
//
// Invalid UTF-8 sequences are dropped rather than replaced with U+FFFD, so a
// stray byte in the middle of a word doesn't split it in two.

/// Decode `bytes` as UTF-8, skipping any invalid sequences.
pub fn decode_lenient(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
