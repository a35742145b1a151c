// SPDX-License-Identifier: MPL-2.0
//! Process-wide application state owned by the bootstrap sequence.

use crate::i18n::fluent::Translator;
use std::ffi::OsString;

/// Holds the raw process arguments and the installed translators.
///
/// One context exists per run. It is created at the start of
/// [`crate::app::run`], handed to the run loop, and dropped when the loop
/// returns.
#[derive(Debug, Default)]
pub struct ApplicationContext {
    args: Vec<OsString>,
    translators: Vec<Translator>,
}

impl ApplicationContext {
    #[must_use]
    pub fn new(args: Vec<OsString>) -> Self {
        Self {
            args,
            translators: Vec::new(),
        }
    }

    /// Process arguments exactly as received, program name included.
    #[must_use]
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Installs a translator. Lookups consult the most recently installed
    /// translator first.
    pub fn install_translator(&mut self, translator: Translator) {
        tracing::info!(
            locale = %translator.locale(),
            path = translator.path(),
            "installed translator"
        );
        self.translators.push(translator);
    }

    #[must_use]
    pub fn translators(&self) -> &[Translator] {
        &self.translators
    }

    /// Translation of `key` from the installed translators, if any has it.
    #[must_use]
    pub fn translate(&self, key: &str) -> Option<String> {
        self.translators
            .iter()
            .rev()
            .find_map(|translator| translator.translate(key))
    }

    /// Translation of `key`, or the built-in `default` text.
    #[must_use]
    pub fn tr(&self, key: &str, default: &str) -> String {
        self.translate(key).unwrap_or_else(|| default.to_string())
    }
}
