// SPDX-License-Identifier: MPL-2.0
use crate::error::{Result, TranslationError};
use crate::i18n::locale::BUNDLE_PREFIX;
use crate::i18n::resources::ResourceSource;
use fluent_bundle::{FluentBundle, FluentResource};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// File extension of translation bundles.
const BUNDLE_EXTENSION: &str = ".ftl";

/// One loaded translation bundle.
pub struct Translator {
    bundle: FluentBundle<FluentResource>,
    locale: LanguageIdentifier,
    path: String,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.locale)
            .field("path", &self.path)
            .finish()
    }
}

impl Translator {
    /// Loads the bundle at the virtual `path`, e.g. `:/i18n/AddressBook_fr-FR`.
    ///
    /// The `.ftl` extension is appended when missing. Fails if the bundle
    /// does not exist, is not UTF-8, or has any Fluent syntax error.
    pub fn load<S: ResourceSource + ?Sized>(source: &S, path: &str) -> Result<Self> {
        let path = if path.ends_with(BUNDLE_EXTENSION) {
            path.to_string()
        } else {
            format!("{path}{BUNDLE_EXTENSION}")
        };

        let data = source
            .read(&path)
            .ok_or_else(|| TranslationError::NotFound(path.clone()))?;
        let content = String::from_utf8(data.into_owned())
            .map_err(|_| TranslationError::InvalidEncoding(path.clone()))?;
        let resource = FluentResource::try_new(content).map_err(|(_, errors)| {
            TranslationError::Parse {
                path: path.clone(),
                errors: errors.len(),
            }
        })?;

        let locale = locale_from_path(&path);
        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        bundle.set_use_isolating(false);
        // A freshly parsed resource cannot collide with anything in an
        // empty bundle.
        let _ = bundle.add_resource(resource);

        Ok(Self {
            bundle,
            locale,
            path,
        })
    }

    #[must_use]
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Virtual path the bundle was loaded from, with its extension.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Formats the message `key`, or `None` when the bundle lacks it or
    /// formatting reported errors.
    #[must_use]
    pub fn translate(&self, key: &str) -> Option<String> {
        let pattern = self.bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = self.bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            None
        }
    }
}

/// Reads the locale out of a bundle path such as
/// `:/i18n/AddressBook_fr-FR.ftl`. Unrecognised names yield `und`.
fn locale_from_path(path: &str) -> LanguageIdentifier {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    file_name
        .strip_suffix(BUNDLE_EXTENSION)
        .and_then(|stem| stem.strip_prefix(BUNDLE_PREFIX))
        .and_then(|locale| locale.parse().ok())
        .unwrap_or_default()
}
