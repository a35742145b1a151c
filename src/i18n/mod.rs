// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles locale name canonicalization, the resource namespace that bundles
//! live in, and loading a bundle into a [`fluent::Translator`].
//!
//! # Features
//!
//! - System locale detection through `sys-locale`
//! - Bundles embedded in the binary, or read from a directory
//! - Fallback to built-in text when no bundle matches

pub mod fluent;
pub mod locale;
pub mod resources;
