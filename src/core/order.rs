//! Word-order decision: does the abbreviated type open the portion
//! ("ул. Ленина") or trail the value ("1-я лин.")?

/// Decides whether the abbreviated type opens the address portion.
///
/// The value is scanned word by word. Purely numeric words carry no
/// grammatical ending and are skipped, as are words already shaped like
/// an adjectival form (either the hyphenated numeral "1-я" or a bare
/// ending such as "Майская"). The first word matching neither pattern
/// settles the question: the value names something on its own, so the
/// type must lead. A value made up entirely of adjectival and numeric
/// words already carries its qualifier and pushes the type to the back.
pub fn starts_with_type(value: &str, endings: &[&str]) -> bool {
    if value.is_empty() {
        return false;
    }

    // No adjectival form is possible for this type, it always leads.
    if endings.is_empty() {
        return true;
    }

    for word in value.split(' ') {
        if word.chars().all(|ch| ch.is_ascii_digit()) {
            continue;
        }

        if numeral_adjective(word, endings) {
            continue;
        }

        if endings.iter().any(|ending| word.ends_with(ending)) {
            continue;
        }

        return true;
    }

    false
}

/// True when the word is a numeral-adjectival form such as "1-я" or
/// "2-ой": an ending from the set, or its final letter, hyphenated onto
/// a purely numeric stem. The stem is measured against the full ending
/// even when only its final letter matched, so a too-short stem counts
/// as numeric.
fn numeral_adjective(word: &str, endings: &[&str]) -> bool {
    let matched = endings.iter().find(|ending| {
        word.ends_with(&format!("-{ending}"))
            || ending
                .chars()
                .last()
                .map_or(false, |last| word.ends_with(&format!("-{last}")))
    });

    let Some(ending) = matched else {
        return false;
    };

    let stem_len = word
        .chars()
        .count()
        .saturating_sub(ending.chars().count() + 1);

    word.chars()
        .take(stem_len)
        .all(|ch| ch.is_ascii_digit())
}
