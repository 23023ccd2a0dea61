// SPDX-License-Identifier: MPL-2.0

pub mod settings;
pub mod ui;

pub use settings::{AppSettings, SettingsError};
pub use ui::{CommentDraft, Dialogs, UiState};
