//! Backslash escape grammar for string and character literals
//!
//! [unescape] recognizes:
//!
//!     - `\n \t \r \b \f \s \\ \" \'`
//!     - `\uXXXX`, with any number of `u` markers (`\uu0041`); a UTF-16 surrogate pair written
//!       as two consecutive escapes decodes to a single character
//!     - octal escapes `\0` through `\377`
//!
//! Anything it cannot decode (unknown markers, malformed or lone-surrogate `\u` escapes, a
//! trailing backslash) is kept verbatim.
//!
//! [escape] is the inverse for a given delimiter: it escapes control characters, the
//! backslash, and that one quote character. Other non-printable characters are written as
//! `\uXXXX`. `unescape(escape(s, q)) == s` holds for every `s`.

/// Decode a single-character escape marker such as `n` or `"`
fn decode_basic_escape(marker: char) -> Option<char> {
    match marker {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        's' => Some(' '),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}

/// Replace escape sequences in a literal body with the characters they denote
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let sequence = &rest[pos..];
        let consumed = unescape_sequence(sequence, &mut out);
        rest = &sequence[consumed..];
    }
    out.push_str(rest);

    out
}

/// Decode the escape at the start of `sequence` (which begins with a backslash) into `out`.
/// Returns the number of bytes consumed.
fn unescape_sequence(sequence: &str, out: &mut String) -> usize {
    let Some(marker) = sequence[1..].chars().next() else {
        out.push('\\');
        return 1;
    };

    if let Some(ch) = decode_basic_escape(marker) {
        out.push(ch);
        return 1 + marker.len_utf8();
    }

    match marker {
        'u' => match decode_unicode(sequence) {
            Some((ch, len)) => {
                out.push(ch);
                len
            }
            None => {
                out.push_str("\\u");
                2
            }
        },
        '0'..='7' => {
            let (value, len) = decode_octal(&sequence[1..]);
            out.push(char::from(value));
            1 + len
        }
        _ => {
            out.push('\\');
            out.push(marker);
            1 + marker.len_utf8()
        }
    }
}

/// Octal escapes take up to three digits, but only up to `\377`
fn decode_octal(digits: &str) -> (u8, usize) {
    let bytes = digits.as_bytes();
    let max_len = if bytes[0] <= b'3' { 3 } else { 2 };
    let len = bytes
        .iter()
        .take(max_len)
        .take_while(|b| (b'0'..=b'7').contains(*b))
        .count();
    let value = bytes[..len]
        .iter()
        .fold(0u8, |acc, b| acc * 8 + (b - b'0'));
    (value, len)
}

/// Parse `\u+XXXX` into a UTF-16 code unit and the escape length in bytes
fn parse_code_unit(sequence: &str) -> Option<(u16, usize)> {
    let after_u = sequence.get(1..)?.trim_start_matches('u');
    let markers = sequence.len() - 1 - after_u.len();
    if markers == 0 {
        return None;
    }
    let hex = after_u.get(..4)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let unit = u16::from_str_radix(hex, 16).ok()?;
    Some((unit, 1 + markers + 4))
}

fn decode_unicode(sequence: &str) -> Option<(char, usize)> {
    let (unit, len) = parse_code_unit(sequence)?;
    if let Some(ch) = char::from_u32(u32::from(unit)) {
        return Some((ch, len));
    }

    // A high surrogate needs its low half in the next escape
    if !(0xD800..0xDC00).contains(&unit) {
        return None;
    }
    let next = &sequence[len..];
    if !next.starts_with('\\') {
        return None;
    }
    let (low, low_len) = parse_code_unit(next)?;
    if !(0xDC00..0xE000).contains(&low) {
        return None;
    }
    let scalar = 0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    char::from_u32(scalar).map(|ch| (ch, len + low_len))
}

/// Escape `text` for a literal delimited by `quote`
pub fn escape(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, quote, &mut out);
    out
}

/// Escape `text` for a literal delimited by `quote`, appending to `out`
pub fn escape_into(text: &str, quote: char, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            _ if ch == quote => {
                out.push('\\');
                out.push(ch);
            }
            _ if is_printable(ch) => out.push(ch),
            _ => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04X}", unit));
                }
            }
        }
    }
}

fn is_printable(ch: char) -> bool {
    !(ch.is_control()
        || matches!(
            ch,
            '\u{00AD}'
                | '\u{200B}'..='\u{200F}'
                | '\u{2028}'..='\u{202E}'
                | '\u{2060}'..='\u{2064}'
                | '\u{FEFF}'
                | '\u{E000}'..='\u{F8FF}'
                | '\u{F0000}'..='\u{10FFFF}'
        ))
}
