// SPDX-License-Identifier: MPL-2.0
//! Application bootstrap.
//!
//! [`run`] is the whole startup sequence: build the [`ApplicationContext`],
//! install the first translation bundle matching the user's preferred
//! locales, build and show the [`AddressBook`] window, then hand both to
//! the [`Host`] run loop and return its exit code.

pub mod context;
pub mod host;
mod message;

pub use context::ApplicationContext;
pub use host::{Host, IcedHost};
pub use message::Message;

use crate::i18n::fluent::Translator;
use crate::i18n::locale;
use crate::i18n::resources::{ResourceSource, TRANSLATIONS_ROOT};
use crate::ui::address_book::AddressBook;
use std::ffi::OsString;

/// Runs the application and returns the process exit code.
///
/// Translation bundles come from `resources`; a locale whose bundle is
/// missing or broken is skipped without telling the user. Arguments are
/// stored in the context untouched.
pub fn run<H, R>(host: H, resources: &R, args: Vec<OsString>) -> i32
where
    H: Host,
    R: ResourceSource + ?Sized,
{
    let mut context = ApplicationContext::new(args);

    let candidates = host.ui_languages();
    if let Some(translator) = find_translator(resources, &candidates) {
        context.install_translator(translator);
    }

    let mut window = AddressBook::new(&context);
    window.show();

    host.exec(context, window)
}

/// Loads the bundle of the first candidate that has one.
///
/// Candidates are tried strictly in order and the search stops at the
/// first bundle that loads; later candidates are never touched.
pub fn find_translator<R>(resources: &R, candidates: &[String]) -> Option<Translator>
where
    R: ResourceSource + ?Sized,
{
    for candidate in candidates {
        let Some(name) = locale::resource_name(candidate) else {
            tracing::debug!(candidate = %candidate, "no language in locale, skipping");
            continue;
        };

        match Translator::load(resources, &format!("{TRANSLATIONS_ROOT}{name}")) {
            Ok(translator) => return Some(translator),
            Err(err) => {
                tracing::debug!(candidate = %candidate, error = %err, "translation unavailable");
            }
        }
    }
    tracing::debug!(
        candidates = candidates.len(),
        "no translation bundle matched, using built-in text"
    );
    None
}
