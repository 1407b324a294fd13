//! Pure text transforms applied to component values and abbreviations.

/// Non-breaking space joining an abbreviation with its value.
pub const NBSP: &str = "\u{00a0}";
/// Hyphen bracketed with word joiners so a segment never wraps on it.
pub const NB_HYPHEN: &str = "\u{2060}-\u{2060}";
/// Slash bracketed with word joiners.
pub const NB_SLASH: &str = "\u{2060}/\u{2060}";

/// The "named after" marker that takes a trailing period when it stands
/// alone as a word.
const POSSESSIVE_MARKER: &str = "им";

/// Dots the possessive marker: "проспект им Ленина" -> "проспект им. Ленина".
/// Only whole words are dotted, "1им" and "им1" stay untouched.
pub fn possessive_dot(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    let mut word = String::new();

    for ch in value.chars() {
        if ch.is_whitespace() {
            push_marked(&mut out, &word);
            word.clear();
            out.push(ch);
        } else {
            word.push(ch);
        }
    }
    push_marked(&mut out, &word);

    out
}

fn push_marked(out: &mut String, word: &str) {
    out.push_str(word);
    if word == POSSESSIVE_MARKER {
        out.push('.');
    }
}

/// Inserts a space after every period not already followed by whitespace,
/// including a period that ends the string.
pub fn space_after_dot(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    let mut chars = value.chars().peekable();

    while let Some(ch) = chars.next() {
        out.push(ch);
        if ch == '.' && chars.peek().map_or(true, |next| !next.is_whitespace()) {
            out.push(' ');
        }
    }

    out
}

/// Terminates a single-word abbreviation with a period. Abbreviations
/// carrying punctuation ("р-н", "с/п") keep their spelling.
pub fn dot_after_word(abbreviation: &str) -> String {
    let single_word = !abbreviation.is_empty()
        && abbreviation
            .chars()
            .all(|ch| ch.is_alphanumeric() || ch == '_');

    if single_word {
        format!("{abbreviation}.")
    } else {
        abbreviation.to_string()
    }
}

/// Final wrap-protection pass over a formatted value. Only the space
/// introduced by [`space_after_dot`] becomes non-breaking; ordinary word
/// separators inside the value may still wrap. Hyphens and slashes are
/// protected throughout. Must run exactly once, after all period and
/// space insertion.
pub fn non_breaking_value(value: &str) -> String {
    value
        .replace(". ", ".\u{00a0}")
        .replace('-', NB_HYPHEN)
        .replace('/', NB_SLASH)
}

/// Wrap protection for abbreviations: every separator becomes non-breaking.
pub fn non_breaking_abbreviation(abbreviation: &str) -> String {
    abbreviation
        .replace(' ', NBSP)
        .replace('-', NB_HYPHEN)
        .replace('/', NB_SLASH)
}
