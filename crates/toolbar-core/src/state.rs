use serde::{Deserialize, Serialize};

use crate::command::{FormatCommand, TokenError};
use crate::palette::{ColorKind, ColorSwatch, SwatchIndicator, normalize_hex};
use crate::surface::{CommandApplicationFailure, SurfaceAdapter};

pub const DEFAULT_DOCUMENT_TITLE: &str = "Untitled Document";

/// The last color the user picked for one [`ColorKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSelection {
    pub label: String,
    pub hex: String,
    pub class: String,
}

impl ColorSelection {
    /// A free color outside the palettes. Validated and normalized to `#rrggbb`.
    pub fn custom(hex: &str) -> Result<Self, TokenError> {
        Ok(Self {
            label: "Custom".to_string(),
            hex: normalize_hex(hex)?,
            class: "custom".to_string(),
        })
    }

    pub fn matches(&self, swatch: &ColorSwatch) -> bool {
        self.hex.eq_ignore_ascii_case(swatch.hex)
    }
}

impl From<&ColorSwatch> for ColorSelection {
    fn from(swatch: &ColorSwatch) -> Self {
        Self {
            label: swatch.label.to_string(),
            hex: swatch.hex.to_string(),
            class: swatch.class.to_string(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ToolbarConfig {
    pub document_title: Option<String>,
    pub text_swatch: usize,
    pub highlight_swatch: usize,
}

impl ToolbarConfig {
    pub fn with_defaults(mut self) -> Self {
        if self.document_title.is_none() {
            self.document_title = Some(DEFAULT_DOCUMENT_TITLE.to_string());
        }
        if self.text_swatch >= ColorKind::Text.palette().len() {
            self.text_swatch = 0;
        }
        if self.highlight_swatch >= ColorKind::Highlight.palette().len() {
            self.highlight_swatch = 0;
        }
        self
    }
}

/// Per-surface toolbar state. Every field is an independent last-write-wins cell.
///
/// The color fields record the last color *chosen* through this toolbar, not the
/// formatting under the caret: the editing surface offers no way to query it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarState {
    text_color: ColorSelection,
    highlight_color: ColorSelection,
    document_title: String,
    mobile_menu_open: bool,
}

impl ToolbarState {
    pub fn new(config: ToolbarConfig) -> Self {
        let config = config.with_defaults();
        Self {
            text_color: ColorSelection::from(&ColorKind::Text.palette()[config.text_swatch]),
            highlight_color: ColorSelection::from(
                &ColorKind::Highlight.palette()[config.highlight_swatch],
            ),
            document_title: config.document_title.unwrap_or_default(),
            mobile_menu_open: false,
        }
    }

    pub fn color(&self, kind: ColorKind) -> &ColorSelection {
        match kind {
            ColorKind::Text => &self.text_color,
            ColorKind::Highlight => &self.highlight_color,
        }
    }

    /// Records `color` as the selection for `kind`, then applies it to the surface.
    ///
    /// The selection is stored even when the surface rejects the command; the
    /// outcome is returned so the caller can decide what to do about it.
    pub fn select_color(
        &mut self,
        kind: ColorKind,
        color: ColorSelection,
        adapter: &SurfaceAdapter,
    ) -> Result<(), CommandApplicationFailure> {
        let command = FormatCommand::with_value(kind.command(), color.hex.clone());
        match kind {
            ColorKind::Text => self.text_color = color,
            ColorKind::Highlight => self.highlight_color = color,
        }
        adapter.apply(&command)
    }

    pub fn indicator(&self, kind: ColorKind, swatch: &ColorSwatch) -> SwatchIndicator {
        if self.color(kind).matches(swatch) {
            SwatchIndicator::Active
        } else {
            SwatchIndicator::Idle
        }
    }

    pub fn document_title(&self) -> &str {
        &self.document_title
    }

    pub fn set_document_title(&mut self, title: impl Into<String>) {
        self.document_title = title.into();
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self::new(ToolbarConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_falls_back_to_first_swatch() {
        let state = ToolbarState::new(ToolbarConfig {
            document_title: Some("Notes".to_string()),
            text_swatch: 42,
            highlight_swatch: 3,
        });
        assert_eq!(state.document_title(), "Notes");
        assert_eq!(state.color(ColorKind::Text).hex, "#ffffff");
        assert_eq!(state.color(ColorKind::Highlight).hex, "#ca8a04");
    }

    #[test]
    fn default_state() {
        let state = ToolbarState::default();
        assert_eq!(state.document_title(), DEFAULT_DOCUMENT_TITLE);
        assert!(!state.is_mobile_menu_open());
        assert_eq!(state.color(ColorKind::Highlight).label, "Black");
    }

    #[test]
    fn custom_color_matches_swatch_ignoring_case() {
        let custom = ColorSelection::custom("#22C55E").unwrap();
        assert_eq!(custom.hex, "#22c55e");
        assert!(custom.matches(&ColorKind::Text.palette()[4]));
        assert!(ColorSelection::custom("#22c5").is_err());
    }
}
