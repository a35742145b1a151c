// SPDX-License-Identifier: MPL-2.0
//! User interface: the main window and its styling.

pub mod address_book;
pub mod design_tokens;
pub mod theming;
