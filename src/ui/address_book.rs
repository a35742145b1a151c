// SPDX-License-Identifier: MPL-2.0
//! The address book main window.
//!
//! All user-facing text is resolved once, when the window is constructed,
//! against whatever translator the [`ApplicationContext`] has installed at
//! that moment.

use crate::app::context::ApplicationContext;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{container, Column, Text},
    Element, Length,
};

/// Built-in (untranslated) text, keyed by Fluent message id.
pub mod strings {
    pub const WINDOW_TITLE: (&str, &str) = ("window-title", "Address Book");
    pub const HEADING: (&str, &str) = ("address-book-heading", "Contacts");
    pub const EMPTY_HINT: (&str, &str) =
        ("address-book-empty-hint", "Your address book is empty.");
}

/// The application's single top-level window.
#[derive(Debug, Clone)]
pub struct AddressBook {
    title: String,
    heading: String,
    empty_hint: String,
    visible: bool,
}

impl AddressBook {
    /// Creates the window, hidden, with text taken from `ctx`.
    #[must_use]
    pub fn new(ctx: &ApplicationContext) -> Self {
        let tr = |(key, default): (&str, &str)| ctx.tr(key, default);
        Self {
            title: tr(strings::WINDOW_TITLE),
            heading: tr(strings::HEADING),
            empty_hint: tr(strings::EMPTY_HINT),
            visible: false,
        }
    }

    /// Marks the window visible. The host opens it visible when the run
    /// loop starts.
    pub fn show(&mut self) {
        self.visible = true;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    #[must_use]
    pub fn empty_hint(&self) -> &str {
        &self.empty_hint
    }

    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(Text::new(self.heading.as_str()).size(typography::TITLE_LG))
            .push(Text::new(self.empty_hint.as_str()).size(typography::BODY));

        container(content)
            .padding(spacing::LG)
            .center(Length::Fill)
            .into()
    }
}
