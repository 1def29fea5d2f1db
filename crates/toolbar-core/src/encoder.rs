use serde::{Deserialize, Serialize};

use crate::command::{CommandName, FormatCommand, TokenError};
use crate::palette::ColorKind;
use crate::state::ColorSelection;

/// Fixed-command buttons. None of them carries a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonCommand {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Superscript,
    Subscript,
    Undo,
    Redo,
    AlignLeft,
    AlignCenter,
    AlignRight,
    AlignJustify,
    UnorderedList,
    OrderedList,
}

impl ButtonCommand {
    pub const ALL: [ButtonCommand; 14] = [
        ButtonCommand::Bold,
        ButtonCommand::Italic,
        ButtonCommand::Underline,
        ButtonCommand::Strikethrough,
        ButtonCommand::Superscript,
        ButtonCommand::Subscript,
        ButtonCommand::Undo,
        ButtonCommand::Redo,
        ButtonCommand::AlignLeft,
        ButtonCommand::AlignCenter,
        ButtonCommand::AlignRight,
        ButtonCommand::AlignJustify,
        ButtonCommand::UnorderedList,
        ButtonCommand::OrderedList,
    ];

    pub fn command_name(self) -> CommandName {
        match self {
            Self::Bold => CommandName::ToggleBold,
            Self::Italic => CommandName::ToggleItalic,
            Self::Underline => CommandName::ToggleUnderline,
            Self::Strikethrough => CommandName::ToggleStrikethrough,
            Self::Superscript => CommandName::Superscript,
            Self::Subscript => CommandName::Subscript,
            Self::Undo => CommandName::Undo,
            Self::Redo => CommandName::Redo,
            Self::AlignLeft => CommandName::AlignLeft,
            Self::AlignCenter => CommandName::AlignCenter,
            Self::AlignRight => CommandName::AlignRight,
            Self::AlignJustify => CommandName::AlignJustify,
            Self::UnorderedList => CommandName::InsertUnorderedList,
            Self::OrderedList => CommandName::InsertOrderedList,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bold => "B",
            Self::Italic => "I",
            Self::Underline => "U",
            Self::Strikethrough => "S",
            Self::Superscript => "x²",
            Self::Subscript => "x₂",
            Self::Undo => "↶",
            Self::Redo => "↷",
            Self::AlignLeft => "⇤",
            Self::AlignCenter => "↔",
            Self::AlignRight => "⇥",
            Self::AlignJustify => "☰",
            Self::UnorderedList => "•",
            Self::OrderedList => "1.",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
            Self::Strikethrough => "Strikethrough",
            Self::Superscript => "Superscript",
            Self::Subscript => "Subscript",
            Self::Undo => "Undo",
            Self::Redo => "Redo",
            Self::AlignLeft => "Align left",
            Self::AlignCenter => "Align center",
            Self::AlignRight => "Align right",
            Self::AlignJustify => "Justify",
            Self::UnorderedList => "Bulleted list",
            Self::OrderedList => "Numbered list",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockType {
    Paragraph,
    Heading { level: u8 },
    UnorderedList,
    OrderedList,
}

impl BlockType {
    pub const ALL: [BlockType; 9] = [
        BlockType::Paragraph,
        BlockType::Heading { level: 1 },
        BlockType::Heading { level: 2 },
        BlockType::Heading { level: 3 },
        BlockType::Heading { level: 4 },
        BlockType::Heading { level: 5 },
        BlockType::Heading { level: 6 },
        BlockType::UnorderedList,
        BlockType::OrderedList,
    ];

    /// Heading levels outside 1..=6 are pinned to the nearest valid level.
    pub fn normalized(self) -> Self {
        match self {
            Self::Heading { level } => Self::Heading {
                level: level.clamp(1, 6),
            },
            other => other,
        }
    }

    pub fn label(self) -> &'static str {
        match self.normalized() {
            Self::Paragraph => "Text",
            Self::Heading { level: 1 } => "Heading 1",
            Self::Heading { level: 2 } => "Heading 2",
            Self::Heading { level: 3 } => "Heading 3",
            Self::Heading { level: 4 } => "Heading 4",
            Self::Heading { level: 5 } => "Heading 5",
            Self::Heading { .. } => "Heading 6",
            Self::UnorderedList => "Bulleted list",
            Self::OrderedList => "Numbered list",
        }
    }

    /// Compact `"<name>,<value>"` token in the host-native spelling.
    pub fn token(self) -> &'static str {
        match self.normalized() {
            Self::Paragraph => "formatBlock,<p>",
            Self::Heading { level: 1 } => "formatBlock,<h1>",
            Self::Heading { level: 2 } => "formatBlock,<h2>",
            Self::Heading { level: 3 } => "formatBlock,<h3>",
            Self::Heading { level: 4 } => "formatBlock,<h4>",
            Self::Heading { level: 5 } => "formatBlock,<h5>",
            Self::Heading { .. } => "formatBlock,<h6>",
            Self::UnorderedList => "insertUnorderedList",
            Self::OrderedList => "insertOrderedList",
        }
    }

    pub fn command(self) -> FormatCommand {
        match self.normalized() {
            Self::Paragraph => FormatCommand::with_value(CommandName::FormatBlock, "<p>"),
            Self::Heading { level } => {
                FormatCommand::with_value(CommandName::FormatBlock, format!("<h{level}>"))
            }
            Self::UnorderedList => FormatCommand::new(CommandName::InsertUnorderedList),
            Self::OrderedList => FormatCommand::new(CommandName::InsertOrderedList),
        }
    }

    /// Inverse of the `format-block` value, e.g. `"<h2>"`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let inner = tag.trim().strip_prefix('<')?.strip_suffix('>')?;
        match inner.to_ascii_lowercase().as_str() {
            "p" => Some(Self::Paragraph),
            heading => {
                let level = heading.strip_prefix('h')?.parse::<u8>().ok()?;
                (1..=6).contains(&level).then_some(Self::Heading { level })
            }
        }
    }
}

pub const FONT_FAMILIES: &[&str] = &[
    "Arial",
    "Verdana",
    "Tahoma",
    "Times New Roman",
    "Georgia",
    "Garamond",
    "Courier New",
    "Consolas",
    "Lucida Console",
    "Segoe UI",
    "Impact",
];

/// Ordinal font size, 1..=7, the scale the editing surface expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontSize(u8);

impl FontSize {
    const POINTS: [u8; 7] = [8, 10, 12, 14, 16, 18, 24];

    pub fn all() -> impl Iterator<Item = FontSize> {
        (1..=7).map(FontSize)
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        (1..=7).contains(&ordinal).then_some(Self(ordinal))
    }

    pub fn parse(token: &str) -> Result<Self, TokenError> {
        token
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_ordinal)
            .ok_or_else(|| TokenError::FontSizeOutOfRange(token.to_string()))
    }

    pub fn ordinal(self) -> u8 {
        self.0
    }

    pub fn points(self) -> u8 {
        Self::POINTS[usize::from(self.0 - 1)]
    }

    pub fn label(self) -> String {
        format!("{}pt", self.points())
    }
}

/// A UI gesture, before it is encoded into a [`FormatCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarAction {
    Button(ButtonCommand),
    Block(BlockType),
    FontFamily(String),
    FontSize(FontSize),
    Color(ColorKind, ColorSelection),
}

impl ToolbarAction {
    pub fn encode(&self) -> FormatCommand {
        match self {
            Self::Button(button) => FormatCommand::new(button.command_name()),
            Self::Block(block) => block.command(),
            Self::FontFamily(family) => {
                FormatCommand::with_value(CommandName::FontFamily, family.clone())
            }
            Self::FontSize(size) => {
                FormatCommand::with_value(CommandName::FontSize, size.ordinal().to_string())
            }
            Self::Color(kind, color) => FormatCommand::with_value(kind.command(), color.hex.clone()),
        }
    }
}

impl From<ButtonCommand> for ToolbarAction {
    fn from(button: ButtonCommand) -> Self {
        Self::Button(button)
    }
}

impl From<BlockType> for ToolbarAction {
    fn from(block: BlockType) -> Self {
        Self::Block(block)
    }
}

impl From<FontSize> for ToolbarAction {
    fn from(size: FontSize) -> Self {
        Self::FontSize(size)
    }
}
