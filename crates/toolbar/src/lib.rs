mod button;
mod context_toolbar;
mod menu;
mod navbar;
mod swatch;

pub use button::*;
pub use context_toolbar::*;
pub use navbar::*;
pub use swatch::*;

use gpui::{App, KeyBinding, SharedString, actions};
use gpui_manos_toolbar_core::FormatCommand;

/// Key context for the editing region both toolbars act on.
pub const CONTEXT: &str = "FormattingSurface";

actions!(
    formatting_toolbar,
    [ToggleBold, ToggleItalic, ToggleUnderline, DismissContextToolbar]
);

pub fn init(cx: &mut App) {
    cx.bind_keys([
        #[cfg(target_os = "macos")]
        KeyBinding::new("cmd-b", ToggleBold, Some(CONTEXT)),
        #[cfg(not(target_os = "macos"))]
        KeyBinding::new("ctrl-b", ToggleBold, Some(CONTEXT)),
        #[cfg(target_os = "macos")]
        KeyBinding::new("cmd-i", ToggleItalic, Some(CONTEXT)),
        #[cfg(not(target_os = "macos"))]
        KeyBinding::new("ctrl-i", ToggleItalic, Some(CONTEXT)),
        #[cfg(target_os = "macos")]
        KeyBinding::new("cmd-u", ToggleUnderline, Some(CONTEXT)),
        #[cfg(not(target_os = "macos"))]
        KeyBinding::new("ctrl-u", ToggleUnderline, Some(CONTEXT)),
        KeyBinding::new("escape", DismissContextToolbar, Some(CONTEXT)),
    ]);
}

/// Emitted by both toolbars so the host view can re-render.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarEvent {
    Dispatched { command: FormatCommand, applied: bool },
    TitleChanged(SharedString),
}
