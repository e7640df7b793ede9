//! Normalization applied to raw pattern captures.

use regex::Captures;

/// Labels that OCR text tends to run into the end of a name.
const NAME_STOP_TOKENS: [&str; 2] = ["TERMINAL", "FLIGHT"];

/// Words a bare route pattern picks up from fare wording like `ONE-WAY`.
const ROUTE_STOP_WORDS: [&str; 3] = ["ONE", "WAY", "NON"];

/// Separator used when rendering a route.
pub const ROUTE_SEPARATOR: &str = "→";

/// Normalization function of a catalog field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalizer {
    /// Trim only.
    PassThrough,
    /// Trim and uppercase.
    Upper,
    /// Collapse whitespace and uppercase.
    Clock,
    /// Two airport codes rendered as `XXX → YYY`. Fare words are rejected.
    Route,
    /// Collapse whitespace, drop stray labels, title-case.
    PersonName,
}

impl Normalizer {
    /// Normalize a match. Returns `None` when nothing usable is left.
    pub fn apply(self, caps: &Captures<'_>) -> Option<String> {
        let first = caps.get(1)?.as_str();

        let value = match self {
            Normalizer::PassThrough => first.trim().to_string(),
            Normalizer::Upper => first.trim().to_uppercase(),
            Normalizer::Clock => collapse_whitespace(first).to_uppercase(),
            Normalizer::Route => {
                let to = caps.get(2)?.as_str();
                if is_route_stop_word(first) || is_route_stop_word(to) {
                    return None;
                }
                format_route(first, to)
            }
            Normalizer::PersonName => normalize_name(first),
        };

        (!value.is_empty()).then_some(value)
    }
}

fn is_route_stop_word(code: &str) -> bool {
    ROUTE_STOP_WORDS
        .iter()
        .any(|stop| code.trim().eq_ignore_ascii_case(stop))
}

/// Render a route between two airport codes.
pub fn format_route(from: &str, to: &str) -> String {
    format!(
        "{} {} {}",
        from.trim().to_uppercase(),
        ROUTE_SEPARATOR,
        to.trim().to_uppercase()
    )
}

/// Normalize a captured person name.
pub fn normalize_name(raw: &str) -> String {
    let kept: Vec<&str> = raw
        .split_whitespace()
        .filter(|token| {
            !NAME_STOP_TOKENS
                .iter()
                .any(|stop| token.eq_ignore_ascii_case(stop))
        })
        .collect();

    title_case(&kept.join(" "))
}

/// Join whitespace-separated tokens with single spaces.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercase the first letter of every word, lowercase the rest.
///
/// A word starts at any letter that does not follow another letter, so
/// `O'BRIEN-SMITH` becomes `O'Brien-Smith`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regex::Regex;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("VENKATESH KUMAR"), "Venkatesh Kumar");
        assert_eq!(title_case("o'brien-SMITH"), "O'Brien-Smith");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_normalize_name_strips_stray_labels() {
        assert_eq!(normalize_name("  PRIYA   SHARMA  TERMINAL"), "Priya Sharma");
        assert_eq!(normalize_name("RAVI flight"), "Ravi");
        assert_eq!(normalize_name("TERMINAL"), "");
    }

    #[test]
    fn test_format_route() {
        assert_eq!(format_route("del", " bom"), "DEL → BOM");
    }

    #[test]
    fn test_apply_rejects_empty_values() {
        let re = Regex::new(r"NAME:(.*)").unwrap();
        let caps = re.captures("NAME: FLIGHT").unwrap();
        assert_eq!(Normalizer::PersonName.apply(&caps), None);

        let caps = re.captures("NAME:   ").unwrap();
        assert_eq!(Normalizer::PassThrough.apply(&caps), None);
    }

    #[test]
    fn test_apply_route_needs_both_codes() {
        let re = Regex::new(r"(\w{3})(?:-(\w{3}))?").unwrap();

        let caps = re.captures("del-bom").unwrap();
        assert_eq!(Normalizer::Route.apply(&caps).as_deref(), Some("DEL → BOM"));

        let caps = re.captures("del").unwrap();
        assert_eq!(Normalizer::Route.apply(&caps), None);
    }

    #[test]
    fn test_apply_route_rejects_fare_words() {
        let re = Regex::new(r"(\w{3})-(\w{3})").unwrap();

        let caps = re.captures("ONE-WAY").unwrap();
        assert_eq!(Normalizer::Route.apply(&caps), None);

        let caps = re.captures("non-DEL").unwrap();
        assert_eq!(Normalizer::Route.apply(&caps), None);
    }

    #[test]
    fn test_clock_normalization() {
        let re = Regex::new(r"(\d+:\d+\s*[ap]m)").unwrap();
        let caps = re.captures("8:05   pm").unwrap();
        assert_eq!(Normalizer::Clock.apply(&caps).as_deref(), Some("8:05 PM"));
    }
}
