// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the run loop.

/// Messages consumed by [`super::host::Session::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}
