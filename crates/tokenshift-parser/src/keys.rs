//! Identifier casing for token key paths.
//!
//! Every generator derives its identifiers through these functions, so the
//! same raw key always produces the same name in every output format.

/// Convert an arbitrary string to kebab-case.
///
/// A hyphen is inserted at each lowercase→uppercase boundary, every character
/// outside `[A-Za-z0-9-]` becomes a hyphen, hyphen runs collapse to one and
/// leading/trailing hyphens are trimmed.
///
/// ```
/// use tokenshift_parser::keys::to_kebab_case;
///
/// assert_eq!(to_kebab_case("skyblueBase"), "skyblue-base");
/// assert_eq!(to_kebab_case("Gray / 100"), "gray-100");
/// ```
pub fn to_kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;

    for ch in input.chars() {
        let mapped = if ch.is_ascii_alphanumeric() { ch } else { '-' };

        if mapped.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            push_hyphen(&mut out);
        }

        if mapped == '-' {
            push_hyphen(&mut out);
        } else {
            out.push(mapped.to_ascii_lowercase());
        }
        prev = Some(ch);
    }

    if out.ends_with('-') {
        out.pop();
    }
    out
}

/// Push a hyphen unless the output is empty or already ends with one.
fn push_hyphen(out: &mut String) {
    if !out.is_empty() && !out.ends_with('-') {
        out.push('-');
    }
}

/// Convert an arbitrary string to camelCase.
///
/// Anything that is not a Unicode letter or digit (whitespace, `_`, `-`,
/// punctuation) acts as a separator: it is dropped and the character following
/// it is uppercased. Letters without case, such as Hangul, pass through. The
/// first character of the result is lowercased; the casing of everything else
/// is kept.
///
/// ```
/// use tokenshift_parser::keys::to_camel_case;
///
/// assert_eq!(to_camel_case("typo-mobile-kr-title1-700"), "typoMobileKrTitle1700");
/// assert_eq!(to_camel_case("typo-mobile-kr-제목"), "typoMobileKr제목");
/// ```
pub fn to_camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper_next = false;

    for ch in input.chars() {
        if !ch.is_alphanumeric() {
            upper_next = !out.is_empty();
            continue;
        }
        if out.is_empty() {
            out.extend(ch.to_lowercase());
        } else if upper_next {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        upper_next = false;
    }

    out
}

/// Key for a font family in config maps: `"Noto Sans KR"` → `"noto-sans-kr"`.
///
/// Whitespace runs become a single hyphen; anything else outside `[a-z0-9-]`
/// is dropped.
pub fn family_slug(family: &str) -> String {
    let mut out = String::with_capacity(family.len());
    let mut in_space = false;

    for ch in family.chars().flat_map(char::to_lowercase) {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            out.push(ch);
        }
    }

    out
}

/// Compact font family key: `"Noto Sans KR"` → `"notosanskr"`.
pub fn family_compact(family: &str) -> String {
    family
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}
