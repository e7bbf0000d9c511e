//! Title slugification.
//!
//! Folds a display title into a lowercase, hyphen-delimited, ASCII path
//! segment. Accented characters are folded through a fixed pair of parallel
//! tables; nothing outside the tables is transliterated.

/// Characters folded to ASCII. Parallel to [`FOLD_TO`], position by position.
const FOLD_FROM: &str = "àáâäæãåāăąçćčđďèéêëēėęěğǵḧîïíīįìłḿñńǹňôöòóœøōõőṕŕřßśšşșťțûüùúūǘůűųẃẍÿýžźż·/_,:;";
const FOLD_TO: &str = "aaaaaaaaaacccddeeeeeeeegghiiiiiilmnnnnoooooooooprrsssssttuuuuuuuuuwxyyzzz------";

/// Look up the ASCII replacement for a folded character.
fn fold(c: char) -> Option<char> {
    let idx = FOLD_FROM.chars().position(|f| f == c)?;
    FOLD_TO.chars().nth(idx)
}

/// Whitespace as matched by an ECMAScript `\s` class.
///
/// Differs from [`char::is_whitespace`]: U+0085 is excluded, U+FEFF is included.
fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Slugify a display title.
///
/// - runs of whitespace become a single `-`
/// - table characters fold to ASCII
/// - `&` becomes `-and-`
/// - anything else outside `[a-z0-9_-]` is dropped
/// - hyphen runs collapse, leading/trailing hyphens are trimmed
///
/// Total and deterministic: the result only contains `[a-z0-9-]`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify("Café Program"), "cafe-program");
/// assert_eq!(slugify("Research & Innovation"), "research-and-innovation");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_space = false;

    for c in lowered.chars() {
        if is_space(c) {
            if !in_space {
                push_hyphen(&mut slug);
            }
            in_space = true;
            continue;
        }
        in_space = false;

        if let Some(ascii) = fold(c) {
            push_char(&mut slug, ascii);
        } else if c == '&' {
            push_hyphen(&mut slug);
            slug.push_str("and");
            push_hyphen(&mut slug);
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            push_char(&mut slug, c);
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[inline]
fn push_char(slug: &mut String, c: char) {
    if c == '-' {
        push_hyphen(slug);
    } else {
        slug.push(c);
    }
}

/// Push a hyphen unless it would lead the slug or double an existing one.
#[inline]
fn push_hyphen(slug: &mut String) {
    if !slug.is_empty() && !slug.ends_with('-') {
        slug.push('-');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_clean(slug: &str) {
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "unexpected character in {slug:?}"
        );
        assert!(!slug.starts_with('-'), "leading hyphen in {slug:?}");
        assert!(!slug.ends_with('-'), "trailing hyphen in {slug:?}");
        assert!(!slug.contains("--"), "doubled hyphen in {slug:?}");
    }

    #[test]
    fn test_tables_are_parallel() {
        assert_eq!(FOLD_FROM.chars().count(), FOLD_TO.chars().count());
        assert!(FOLD_TO.is_ascii());
    }

    #[test]
    fn test_basic_titles() {
        assert_eq!(slugify("Biomedical Science"), "biomedical-science");
        assert_eq!(slugify("Café Program"), "cafe-program");
        assert_eq!(slugify("  Leading and trailing  "), "leading-and-trailing");
    }

    #[test]
    fn test_diacritics_fold() {
        assert_eq!(slugify("Économie Générale"), "economie-generale");
        assert_eq!(slugify("Straße"), "strase");
        assert_eq!(slugify("Łódź"), "lodz");
        assert_eq!(slugify("Ñandú"), "nandu");
    }

    #[test]
    fn test_ampersand() {
        assert_eq!(slugify("Research & Innovation"), "research-and-innovation");
        assert_eq!(slugify("R&D"), "r-and-d");
        assert_eq!(slugify("&"), "and");
    }

    #[test]
    fn test_punctuation_table_becomes_hyphen() {
        assert_eq!(slugify("a/b_c,d:e;f·g"), "a-b-c-d-e-f-g");
        assert_eq!(slugify("Q&A: Admissions"), "q-and-a-admissions");
    }

    #[test]
    fn test_strips_other_characters() {
        assert_eq!(slugify("What's New?!"), "whats-new");
        assert_eq!(slugify("100% (online)"), "100-online");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn test_collapses_hyphens() {
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("--a---b--"), "a-b");
        assert_eq!(slugify("a - ! - b"), "a-b");
    }

    #[test]
    fn test_whitespace_set() {
        assert_eq!(slugify("a\u{feff}b"), "a-b");
        assert_eq!(slugify("a\u{3000}\u{2009}b"), "a-b");
        assert_eq!(slugify("a\u{85}b"), "ab");
        assert_eq!(slugify("a\u{200b}b"), "ab");
    }

    #[test]
    fn test_deterministic() {
        let title = "Master of Science (M.Sc.) in Food Safety & Quality";
        assert_eq!(slugify(title), slugify(title));
        assert_eq!(
            slugify(title),
            "master-of-science-msc-in-food-safety-and-quality"
        );
    }

    #[test]
    fn test_output_alphabet() {
        for input in [
            "",
            " ",
            "---",
            "Ça va?",
            "tab\tseparated\nlines",
            "Ünïcödé ÀÁÂ àáâ",
            "under_score & slash/",
            "emoji 🎓 degree",
            "Mixed CASE 2024 Intake",
            "ıİ",
        ] {
            assert_clean(&slugify(input));
        }
    }
}
