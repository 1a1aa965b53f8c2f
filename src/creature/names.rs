//! Display-name normalisation for upstream identifiers.
//!
//! Upstream names are lower-case slugs (`thunder-shock`, `mr-mime`).
//! Cards show them title-cased with spaces.

/// Title-case a string: the first letter of every run of letters is
/// upper-cased and the rest lower-cased.
///
/// Any non-letter (space, hyphen, digit, apostrophe) starts a new word.
///
/// ```
/// use tcg_catalog::creature::names::title_case;
///
/// assert_eq!(title_case("thunder shock"), "Thunder Shock");
/// assert_eq!(title_case("KANTO"), "Kanto");
/// ```
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Upper-case the first character and lower-case the rest.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Card-facing move name: hyphens become spaces, then title case.
#[must_use]
pub fn move_display_name(slug: &str) -> String {
    title_case(&slug.replace('-', " "))
}
