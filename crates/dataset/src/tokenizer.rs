//! Row tokenizer: splits one raw line into its field strings.
//!
//! Quoting rules (RFC4180-like):
//! - A field that starts with `"` runs until the next `"` that is not
//!   immediately followed by another `"`. The outer quotes are stripped;
//!   doubled `""` escapes inside the span are returned as-is, unexpanded.
//! - Any other field runs until the next `,` or end of line and is
//!   returned verbatim, whitespace included. Empty fields are legal.

use crate::error::MalformedRowError;

/// Tokenize one line (no embedded newlines) into its raw field strings.
///
/// An opened quote with no closing quote is an unrecoverable failure for
/// the line; the loader turns that into a whole-load failure.
pub fn tokenize(line: &str) -> Result<Vec<String>, MalformedRowError> {
    let bytes = line.as_bytes();
    let mut fields = Vec::new();
    let mut pos = 0;

    loop {
        if bytes.get(pos) == Some(&b'"') {
            // Quoted field: scan for a closing quote, stepping over "" escapes.
            // Quote and comma are single ASCII bytes, so byte scanning is
            // UTF-8 safe: multi-byte sequences never contain them.
            let start = pos + 1;
            let mut end = start;
            loop {
                match bytes.get(end) {
                    Some(b'"') if bytes.get(end + 1) == Some(&b'"') => end += 2,
                    Some(b'"') => break,
                    Some(_) => end += 1,
                    None => return Err(MalformedRowError::UnterminatedQuote),
                }
            }
            fields.push(line[start..end].to_string());
            pos = end + 1;
        } else {
            let start = pos;
            while pos < bytes.len() && bytes[pos] != b',' {
                pos += 1;
            }
            fields.push(line[start..pos].to_string());
        }

        match bytes.get(pos) {
            Some(b',') => {
                pos += 1;
                // A trailing delimiter encodes one final empty field
                if pos == bytes.len() {
                    fields.push(String::new());
                    break;
                }
            }
            _ => break,
        }
    }

    Ok(fields)
}
