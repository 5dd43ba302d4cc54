//! Loose character-level normalization and fuzzy token matching.
//!
//! Locale engines decorate their output with bidirectional control marks
//! and width-variant spaces, and render minus signs with a whole family of
//! dash code points. Everything that compares engine output with user
//! input goes through these helpers so both sides meet in a canonical
//! form: bidi marks removed, dashes unified to ASCII `-`, space separators
//! stripped.

/// Bidirectional/invisible control marks, ignored entirely.
pub fn is_bidi_mark(c: char) -> bool {
    matches!(c,
        '\u{AD}'
        | '\u{600}'..='\u{605}'
        | '\u{61C}'
        | '\u{6DD}'
        | '\u{70F}'
        | '\u{8E2}'
        | '\u{180E}'
        | '\u{200B}'..='\u{200F}'
        | '\u{202A}'..='\u{202E}'
        | '\u{2060}'..='\u{2064}'
        | '\u{2066}'..='\u{206F}'
        | '\u{FEFF}'
        | '\u{FFF9}'..='\u{FFFB}'
        | '\u{110BD}'
        | '\u{110CD}'
        | '\u{13430}'..='\u{13438}'
        | '\u{1BCA0}'..='\u{1BCA3}'
        | '\u{1D173}'..='\u{1D17A}'
        | '\u{E0001}'
        | '\u{E0020}'..='\u{E007F}')
}

/// Dash/minus variants, unified to ASCII `-`.
pub fn is_dash(c: char) -> bool {
    matches!(c,
        '\u{2D}'
        | '\u{58A}'
        | '\u{5BE}'
        | '\u{1400}'
        | '\u{1806}'
        | '\u{2010}'..='\u{2015}'
        | '\u{2212}'
        | '\u{2E17}'
        | '\u{2E1A}'
        | '\u{2E3A}'
        | '\u{2E3B}'
        | '\u{2E40}'
        | '\u{301C}'
        | '\u{3030}'
        | '\u{30A0}'
        | '\u{FE31}'
        | '\u{FE32}'
        | '\u{FE58}'
        | '\u{FE63}'
        | '\u{FF0D}'
        | '\u{10EAD}')
}

/// Unicode space separators, stripped during normalization.
pub fn is_space_separator(c: char) -> bool {
    matches!(c,
        '\u{20}'
        | '\u{A0}'
        | '\u{1680}'
        | '\u{2000}'..='\u{200A}'
        | '\u{202F}'
        | '\u{205F}'
        | '\u{3000}')
}

fn is_ignorable(c: char) -> bool {
    is_space_separator(c) || is_bidi_mark(c)
}

/// Canonical form used on both sides of every structural comparison:
/// bidi marks removed, dashes unified, space separators stripped.
pub fn loose_normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if is_bidi_mark(c) || is_space_separator(c) {
            continue;
        }
        if is_dash(c) {
            out.push('-');
        } else {
            out.push(c);
        }
    }
    out
}

/// Like [`loose_normalize`], but space separators are unified to ASCII
/// space instead of stripped. Date parsing uses this form: a space is
/// often the only thing separating two numeric fields, so it must survive
/// normalization.
pub fn loose_unify_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if is_bidi_mark(c) {
            continue;
        }
        if is_dash(c) {
            out.push('-');
        } else if is_space_separator(c) {
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

/// Byte offset of the first non-ignorable character at or after `index`.
pub(crate) fn skip_ignorable(input: &str, index: usize) -> usize {
    let mut i = index;
    while let Some(c) = input[i..].chars().next() {
        if is_ignorable(c) {
            i += c.len_utf8();
        } else {
            break;
        }
    }
    i
}

fn chars_match(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn next_significant(s: &str, pos: &mut usize) -> Option<char> {
    while let Some(c) = s[*pos..].chars().next() {
        if is_ignorable(c) {
            *pos += c.len_utf8();
        } else {
            return Some(c);
        }
    }
    None
}

/// Compare `token` against `input` starting at byte offset `index`,
/// case-insensitively, skipping ignorable characters on both sides
/// independently. Returns the input offset just past the match, or `None`.
/// Never a partial match: the whole token must be consumed.
pub fn compare_token_at(token: &str, input: &str, index: usize) -> Option<usize> {
    let mut i = 0usize;
    let mut j = index;
    loop {
        let Some(tc) = next_significant(token, &mut i) else {
            return Some(j);
        };
        let ic = next_significant(input, &mut j)?;
        if !chars_match(tc, ic) {
            return None;
        }
        i += tc.len_utf8();
        j += ic.len_utf8();
    }
}

/// Strict positional match of a separator/exponent symbol at a cursor:
/// character-by-character, case-insensitive, no skipping. Returns the new
/// cursor offset on success.
pub(crate) fn symbol_at(symbol: &str, input: &str, index: usize) -> Option<usize> {
    let mut j = index;
    for sc in symbol.chars() {
        let ic = input[j..].chars().next()?;
        if !chars_match(sc, ic) {
            return None;
        }
        j += ic.len_utf8();
    }
    Some(j)
}

/// Match one locale digit glyph at a cursor. Returns the new cursor offset
/// and the digit value 0–9.
pub(crate) fn digit_at(glyphs: &[String; 10], input: &str, index: usize) -> Option<(usize, u8)> {
    let rest = &input[index..];
    for (value, glyph) in glyphs.iter().enumerate() {
        if !glyph.is_empty() && rest.starts_with(glyph.as_str()) {
            return Some((index + glyph.len(), value as u8));
        }
    }
    None
}

/// Whether `text` is one uninterrupted run of locale digit glyphs.
pub(crate) fn is_digit_run(text: &str, glyphs: &[String; 10]) -> bool {
    if text.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < text.len() {
        match digit_at(glyphs, text, i) {
            Some((next, _)) => i = next,
            None => return false,
        }
    }
    true
}
