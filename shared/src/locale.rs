//! Site languages and the bilingual route map.
//!
//! Every page with a language-specific URL appears in [`ROUTE_PAIRS`]
//! exactly once, as a pair of equivalent Romanian/English path prefixes.
//! Two consumers share the table: the header's language switcher (rewrites
//! the current URL when the visitor switches language) and the route guard
//! (redirects a visited URL to the active language's variant). Common
//! routes like `/contact` or `/login` are absent from the table and never
//! rewritten.

use serde::{Deserialize, Serialize};

/// Site language.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Romanian (the default).
    Ro,
    /// English.
    En,
}

impl Lang {
    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Lang::Ro => "ro",
            Lang::En => "en",
        }
    }

    /// Parse a language code, accepting regional variants.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "ro" | "ro-ro" => Some(Lang::Ro),
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            _ => None,
        }
    }

    /// The other site language.
    pub fn other(self) -> Self {
        match self {
            Lang::Ro => Lang::En,
            Lang::En => Lang::Ro,
        }
    }

    /// Pick the variant of a translation pair for this language.
    pub fn t<'a>(self, ro: &'a str, en: &'a str) -> &'a str {
        match self {
            Lang::Ro => ro,
            Lang::En => en,
        }
    }

    /// [`Lang::t`] over a `(ro, en)` tuple, the shape the `i18n` constant
    /// tables use.
    pub fn pick(self, pair: (&'static str, &'static str)) -> &'static str {
        self.t(pair.0, pair.1)
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Ro
    }
}

/// One semantic destination in its two URL forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutePair {
    /// Romanian path prefix, e.g. `/despre`.
    pub ro: &'static str,
    /// English path prefix, e.g. `/about`.
    pub en: &'static str,
}

impl RoutePair {
    /// The prefix registered for `lang`.
    pub fn prefix(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Ro => self.ro,
            Lang::En => self.en,
        }
    }
}

/// The full bilingual route map. Fixed and insertion-ordered; detail pages
/// share their section's prefix, so four pairs cover the whole site.
pub const ROUTE_PAIRS: &[RoutePair] = &[
    RoutePair { ro: "/despre", en: "/about" },
    RoutePair { ro: "/avocati", en: "/lawyers" },
    RoutePair { ro: "/servicii", en: "/services" },
    RoutePair { ro: "/noutati", en: "/news" },
];

/// Does `path` live under `prefix`?
///
/// Segment-aware: `/despre/x` matches `/despre`, `/despre-vechi` does not.
fn matches_prefix(path: &str, prefix: &str) -> bool {
    path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
}

/// Longest registered prefix of `path` for `lang`, together with its pair.
///
/// Longest-prefix-wins keeps the rewrite deterministic even if a nested
/// prefix is ever added to the table.
fn best_match(path: &str, lang: Lang) -> Option<&'static RoutePair> {
    ROUTE_PAIRS
        .iter()
        .filter(|pair| matches_prefix(path, pair.prefix(lang)))
        .max_by_key(|pair| pair.prefix(lang).len())
}

/// Which language's prefix set does `path` belong to? `None` for common
/// routes (`/`, `/contact`, `/login`, the admin area...).
pub fn path_lang(path: &str) -> Option<Lang> {
    if best_match(path, Lang::Ro).is_some() {
        Some(Lang::Ro)
    } else if best_match(path, Lang::En).is_some() {
        Some(Lang::En)
    } else {
        None
    }
}

/// Rewrite `path` into `target`'s URL form, preserving everything after
/// the matched prefix. `None` when the path is not bilingual; rewriting a
/// path already in `target`'s form returns it unchanged, which makes the
/// route guard idempotent.
pub fn localize_path(path: &str, target: Lang) -> Option<String> {
    if best_match(path, target).is_some() {
        // Already in the target language.
        return Some(path.to_string());
    }
    let source = target.other();
    let pair = best_match(path, source)?;
    let rest = &path[pair.prefix(source).len()..];
    Some(format!("{}{}", pair.prefix(target), rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_prefix_is_unique_across_the_map() {
        let mut seen = Vec::new();
        for pair in ROUTE_PAIRS {
            for prefix in [pair.ro, pair.en] {
                assert!(!seen.contains(&prefix), "duplicate prefix {}", prefix);
                seen.push(prefix);
            }
        }
    }

    #[test]
    fn each_pair_round_trips_in_both_directions() {
        for pair in ROUTE_PAIRS {
            assert_eq!(localize_path(pair.ro, Lang::En).as_deref(), Some(pair.en));
            assert_eq!(localize_path(pair.en, Lang::Ro).as_deref(), Some(pair.ro));
        }
    }

    #[test]
    fn detail_paths_keep_their_tail() {
        assert_eq!(
            localize_path("/noutati/noutati-legislative-2024", Lang::En).as_deref(),
            Some("/news/noutati-legislative-2024"),
        );
        assert_eq!(localize_path("/lawyers/ana-valean", Lang::Ro).as_deref(), Some("/avocati/ana-valean"));
    }

    #[test]
    fn localizing_is_idempotent() {
        let once = localize_path("/about", Lang::Ro).expect("bilingual path");
        let twice = localize_path(&once, Lang::Ro).expect("bilingual path");
        assert_eq!(once, twice);
        assert_eq!(once, "/despre");
    }

    #[test]
    fn common_routes_never_redirect() {
        for path in ["/", "/contact", "/login", "/admin", "/admin/articole/new"] {
            assert_eq!(path_lang(path), None);
            assert_eq!(localize_path(path, Lang::Ro), None);
            assert_eq!(localize_path(path, Lang::En), None);
        }
    }

    #[test]
    fn prefix_match_is_segment_aware() {
        assert_eq!(path_lang("/despre"), Some(Lang::Ro));
        assert_eq!(path_lang("/despre/echipa"), Some(Lang::Ro));
        assert_eq!(path_lang("/despre-vechi"), None);
        assert_eq!(path_lang("/newsletter"), None);
    }

    #[test]
    fn detects_language_of_visited_paths() {
        assert_eq!(path_lang("/news/some-slug"), Some(Lang::En));
        assert_eq!(path_lang("/servicii"), Some(Lang::Ro));
    }

    #[test]
    fn language_codes_round_trip() {
        assert_eq!(Lang::from_code("ro"), Some(Lang::Ro));
        assert_eq!(Lang::from_code("en-US"), Some(Lang::En));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::Ro.code(), "ro");
    }

    #[test]
    fn pick_selects_by_language() {
        let pair = ("Despre noi", "About us");
        assert_eq!(Lang::Ro.pick(pair), "Despre noi");
        assert_eq!(Lang::En.pick(pair), "About us");
    }
}
