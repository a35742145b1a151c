// SPDX-License-Identifier: MPL-2.0
//! Locale candidates and the bundle names derived from them.
//!
//! Platforms report preferred languages in several spellings: BCP-47
//! (`en-US`), POSIX (`en_US.UTF-8`), or bare languages (`fr`). Every
//! spelling is reduced to one canonical `language-REGION` form so a single
//! set of bundle files serves all of them.

use unic_langid::LanguageIdentifier;

/// Prefix shared by every translation bundle name.
pub const BUNDLE_PREFIX: &str = "AddressBook_";

/// Returns the user's preferred UI languages, most preferred first.
///
/// Duplicates are dropped, keeping the first occurrence. The list may be
/// empty when the platform reports nothing.
#[must_use]
pub fn system_ui_languages() -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();
    for locale in sys_locale::get_locales() {
        if !languages.contains(&locale) {
            languages.push(locale);
        }
    }
    languages
}

/// Reduces a locale identifier to the `language-REGION` form bundles are
/// packaged under.
///
/// Missing regions are filled in from likely-subtag data (`fr` becomes
/// `fr-FR`, `zh-Hant` becomes `zh-TW`). Returns `None` for identifiers
/// that name no language, such as `C` or `POSIX`. Extension and
/// private-use parts (`-u-co-phonebk`, `-x-private`) are ignored.
#[must_use]
pub fn canonical_name(candidate: &str) -> Option<String> {
    let trimmed = strip_posix_suffixes(candidate.trim());
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("c")
        || trimmed.eq_ignore_ascii_case("posix")
    {
        return None;
    }

    let mut langid: LanguageIdentifier = strip_extensions(trimmed).parse().ok()?;
    if langid.language.to_string() == "und" {
        return None;
    }
    langid.maximize();

    Some(match langid.region {
        Some(region) => format!("{}-{}", langid.language, region),
        None => langid.language.to_string(),
    })
}

/// Bundle name for a candidate locale: [`BUNDLE_PREFIX`] followed by its
/// canonical name.
#[must_use]
pub fn resource_name(candidate: &str) -> Option<String> {
    canonical_name(candidate).map(|name| format!("{BUNDLE_PREFIX}{name}"))
}

/// Normalizes separators to `-` and cuts the tag at its first singleton
/// subtag, where BCP-47 extensions and private-use parts begin.
fn strip_extensions(tag: &str) -> String {
    tag.split(['-', '_'])
        .take_while(|subtag| subtag.len() != 1)
        .collect::<Vec<_>>()
        .join("-")
}

/// Drops the `.codeset` and `@modifier` parts of a POSIX locale name.
fn strip_posix_suffixes(locale: &str) -> &str {
    let end = locale.find(['.', '@']).unwrap_or(locale.len());
    &locale[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bcp47_name_is_kept() {
        assert_eq!(canonical_name("en-US").as_deref(), Some("en-US"));
        assert_eq!(canonical_name("fr-FR").as_deref(), Some("fr-FR"));
    }

    #[test]
    fn case_is_normalized() {
        assert_eq!(canonical_name("en-us").as_deref(), Some("en-US"));
        assert_eq!(canonical_name("DE-de").as_deref(), Some("de-DE"));
    }

    #[test]
    fn posix_name_is_normalized() {
        assert_eq!(canonical_name("en_US.UTF-8").as_deref(), Some("en-US"));
        assert_eq!(canonical_name("de_DE@euro").as_deref(), Some("de-DE"));
        assert_eq!(canonical_name("fr_FR.UTF-8@euro").as_deref(), Some("fr-FR"));
    }

    #[test]
    fn bare_language_gains_likely_region() {
        assert_eq!(canonical_name("fr").as_deref(), Some("fr-FR"));
        assert_eq!(canonical_name("en").as_deref(), Some("en-US"));
    }

    #[test]
    fn script_is_dropped_after_maximizing() {
        assert_eq!(canonical_name("zh-Hant").as_deref(), Some("zh-TW"));
        assert_eq!(canonical_name("sr-Latn-RS").as_deref(), Some("sr-RS"));
    }

    #[test]
    fn unknown_language_keeps_given_region() {
        assert_eq!(canonical_name("xx-XX").as_deref(), Some("xx-XX"));
    }

    #[test]
    fn extensions_and_private_use_are_ignored() {
        assert_eq!(canonical_name("de-DE-u-co-phonebk").as_deref(), Some("de-DE"));
        assert_eq!(canonical_name("en-US-x-private").as_deref(), Some("en-US"));
        assert_eq!(canonical_name("ja-JP-u-ca-japanese").as_deref(), Some("ja-JP"));
        assert_eq!(canonical_name("fr-t-en").as_deref(), Some("fr-FR"));
    }

    #[test]
    fn tag_starting_with_singleton_has_no_canonical_name() {
        assert_eq!(canonical_name("x-private"), None);
    }

    #[test]
    fn non_languages_have_no_canonical_name() {
        assert_eq!(canonical_name(""), None);
        assert_eq!(canonical_name("C"), None);
        assert_eq!(canonical_name("C.UTF-8"), None);
        assert_eq!(canonical_name("POSIX"), None);
        assert_eq!(canonical_name("und"), None);
        assert_eq!(canonical_name("not a locale"), None);
    }

    #[test]
    fn resource_name_prefixes_canonical_name() {
        assert_eq!(
            resource_name("en_US.UTF-8").as_deref(),
            Some("AddressBook_en-US")
        );
        assert_eq!(resource_name("C"), None);
    }

    #[test]
    fn resource_name_is_deterministic() {
        let first = resource_name("fr");
        let second = resource_name("fr");
        assert_eq!(first, second);
    }

    #[test]
    fn system_ui_languages_has_no_duplicates() {
        let languages = system_ui_languages();
        for (index, language) in languages.iter().enumerate() {
            assert!(!languages[index + 1..].contains(language));
        }
    }
}
