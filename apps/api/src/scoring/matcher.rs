//! Text primitives shared by the scorers: tokenization and word-boundary-aware
//! phrase search.
//!
//! A phrase occurrence only counts when it is not glued to a neighbouring
//! alphanumeric character, so `go` does not match inside `ongoing` and `git`
//! does not match inside `digital`. The boundary is only enforced on a side
//! where the phrase itself ends in an alphanumeric character, which keeps
//! `c++` and `.net` searchable.
//!
//! A regex `\b` cannot express this: after a symbol-edged skill such as
//! `c++` it would demand a following word character, and before `.net` a
//! preceding one.
//!
//! Callers are expected to lower-case both sides first.

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Splits text into alphanumeric runs. A hyphen between two alphanumerics is
/// kept inside the token (`full-stack`).
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if is_word_char(c) {
            start.get_or_insert(idx);
            continue;
        }

        let joins_hyphenated = c == '-'
            && start.is_some()
            && chars.peek().is_some_and(|&(_, next)| is_word_char(next));
        if joins_hyphenated {
            continue;
        }

        if let Some(s) = start.take() {
            tokens.push(&text[s..idx]);
        }
    }

    if let Some(s) = start {
        tokens.push(&text[s..]);
    }
    tokens
}

/// True when `phrase` occurs in `text` at a word boundary.
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    occurrences(text, phrase).next().is_some()
}

/// Byte offsets of every bounded occurrence, overlapping ones included.
fn occurrences<'a>(text: &'a str, phrase: &'a str) -> impl Iterator<Item = usize> + 'a {
    let needs_left = phrase.chars().next().is_some_and(is_word_char);
    let needs_right = phrase.chars().next_back().is_some_and(is_word_char);
    let mut from = if phrase.is_empty() { text.len() + 1 } else { 0 };

    std::iter::from_fn(move || {
        while from <= text.len() {
            let idx = from + text[from..].find(phrase)?;
            let end = idx + phrase.len();
            from = idx + text[idx..].chars().next().map_or(1, char::len_utf8);

            let left_ok = !needs_left || !text[..idx].chars().next_back().is_some_and(is_word_char);
            let right_ok = !needs_right || !text[end..].chars().next().is_some_and(is_word_char);
            if left_ok && right_ok {
                return Some(idx);
            }
        }
        None
    })
}
