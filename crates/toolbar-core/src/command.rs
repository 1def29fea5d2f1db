use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Unknown command name ({0})")]
    UnknownCommand(String),

    #[error("Malformed command token ({0})")]
    Malformed(String),

    #[error("Command {0} requires a value")]
    MissingValue(CommandName),

    #[error("Invalid color ({0})")]
    InvalidColor(String),

    #[error("Font size ordinal out of range ({0})")]
    FontSizeOutOfRange(String),
}

/// The closed vocabulary of formatting commands understood by the editing surface.
///
/// Serialized as the canonical kebab-case wire name. Parsing also accepts the
/// host-native spellings (`bold`, `formatBlock`, `foreColor`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandName {
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    ToggleStrikethrough,
    Superscript,
    Subscript,
    Undo,
    Redo,
    AlignLeft,
    AlignCenter,
    AlignRight,
    AlignJustify,
    InsertUnorderedList,
    InsertOrderedList,
    FormatBlock,
    FontFamily,
    FontSize,
    TextColor,
    HighlightColor,
}

impl CommandName {
    pub const ALL: [CommandName; 19] = [
        CommandName::ToggleBold,
        CommandName::ToggleItalic,
        CommandName::ToggleUnderline,
        CommandName::ToggleStrikethrough,
        CommandName::Superscript,
        CommandName::Subscript,
        CommandName::Undo,
        CommandName::Redo,
        CommandName::AlignLeft,
        CommandName::AlignCenter,
        CommandName::AlignRight,
        CommandName::AlignJustify,
        CommandName::InsertUnorderedList,
        CommandName::InsertOrderedList,
        CommandName::FormatBlock,
        CommandName::FontFamily,
        CommandName::FontSize,
        CommandName::TextColor,
        CommandName::HighlightColor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToggleBold => "toggle-bold",
            Self::ToggleItalic => "toggle-italic",
            Self::ToggleUnderline => "toggle-underline",
            Self::ToggleStrikethrough => "toggle-strikethrough",
            Self::Superscript => "superscript",
            Self::Subscript => "subscript",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::AlignLeft => "align-left",
            Self::AlignCenter => "align-center",
            Self::AlignRight => "align-right",
            Self::AlignJustify => "align-justify",
            Self::InsertUnorderedList => "insert-unordered-list",
            Self::InsertOrderedList => "insert-ordered-list",
            Self::FormatBlock => "format-block",
            Self::FontFamily => "font-family",
            Self::FontSize => "font-size",
            Self::TextColor => "text-color",
            Self::HighlightColor => "highlight-color",
        }
    }

    fn from_native(name: &str) -> Option<Self> {
        Some(match name {
            "bold" => Self::ToggleBold,
            "italic" => Self::ToggleItalic,
            "underline" => Self::ToggleUnderline,
            "strikeThrough" | "strikethrough" => Self::ToggleStrikethrough,
            "justifyLeft" => Self::AlignLeft,
            "justifyCenter" => Self::AlignCenter,
            "justifyRight" => Self::AlignRight,
            "justifyFull" => Self::AlignJustify,
            "insertUnorderedList" => Self::InsertUnorderedList,
            "insertOrderedList" => Self::InsertOrderedList,
            "formatBlock" => Self::FormatBlock,
            "fontName" => Self::FontFamily,
            "fontSize" => Self::FontSize,
            "foreColor" => Self::TextColor,
            "hiliteColor" | "backColor" => Self::HighlightColor,
            _ => return None,
        })
    }

    /// Parameterized commands carry a value (block tag, font, size ordinal or hex color).
    pub fn requires_value(self) -> bool {
        matches!(
            self,
            Self::FormatBlock
                | Self::FontFamily
                | Self::FontSize
                | Self::TextColor
                | Self::HighlightColor
        )
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandName {
    type Err = TokenError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|command| command.as_str() == name)
            .or_else(|| Self::from_native(name))
            .ok_or_else(|| TokenError::UnknownCommand(name.to_string()))
    }
}

/// One formatting intent: a command name plus its optional parameter.
///
/// Produced by the encoder, consumed right away by the surface adapter. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatCommand {
    pub name: CommandName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FormatCommand {
    pub fn new(name: CommandName) -> Self {
        Self { name, value: None }
    }

    pub fn with_value(name: CommandName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: Some(value.into()),
        }
    }

    /// Splits a compact `"<name>,<value>"` token. A token without a comma
    /// yields a command without value.
    pub fn from_token(token: &str) -> Result<Self, TokenError> {
        let mut parts = token.split(',');
        let name = parts.next().unwrap_or_default();
        let value = parts.next();
        if parts.next().is_some() || name.is_empty() || value.is_some_and(str::is_empty) {
            return Err(TokenError::Malformed(token.to_string()));
        }

        let name = name.parse::<CommandName>()?;
        match value {
            Some(value) => Ok(Self::with_value(name, value)),
            None if name.requires_value() => Err(TokenError::MissingValue(name)),
            None => Ok(Self::new(name)),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for FormatCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}({value})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_round_trip_through_from_str() {
        for command in CommandName::ALL {
            assert_eq!(command.as_str().parse::<CommandName>(), Ok(command));
        }
    }

    #[test]
    fn native_spellings_map_to_canonical_commands() {
        assert_eq!("bold".parse(), Ok(CommandName::ToggleBold));
        assert_eq!("justifyFull".parse(), Ok(CommandName::AlignJustify));
        assert_eq!("hiliteColor".parse(), Ok(CommandName::HighlightColor));
        assert_eq!("foreColor".parse(), Ok(CommandName::TextColor));
        assert!("Bold".parse::<CommandName>().is_err());
    }

    #[test]
    fn from_token_rejects_extra_separators() {
        assert_eq!(
            FormatCommand::from_token("formatBlock,<p>,x"),
            Err(TokenError::Malformed("formatBlock,<p>,x".to_string()))
        );
        assert_eq!(
            FormatCommand::from_token("formatBlock,"),
            Err(TokenError::Malformed("formatBlock,".to_string()))
        );
        assert_eq!(
            FormatCommand::from_token(""),
            Err(TokenError::Malformed(String::new()))
        );
    }

    #[test]
    fn from_token_requires_value_for_parameterized_commands() {
        assert_eq!(
            FormatCommand::from_token("formatBlock"),
            Err(TokenError::MissingValue(CommandName::FormatBlock))
        );
    }

    #[test]
    fn json_omits_missing_value() {
        assert_eq!(
            FormatCommand::new(CommandName::Undo).to_json(),
            serde_json::json!({ "name": "undo" })
        );
        assert_eq!(
            FormatCommand::with_value(CommandName::TextColor, "#22c55e").to_json(),
            serde_json::json!({ "name": "text-color", "value": "#22c55e" })
        );
    }
}
