// SPDX-License-Identifier: MPL-2.0
//! `address_book` is a small address book built with the Iced GUI framework.
//!
//! Startup picks the first translation bundle matching the user's preferred
//! locales, builds the main window with that language, and runs the event
//! loop until the window is closed. See [`app::run`].

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
