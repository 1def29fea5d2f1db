use std::collections::VecDeque;

use gpui_manos_toolbar_core::{
    BlockType, CommandName, EditableSurface, FONT_FAMILIES, FontSize, SurfaceError, parse_hex,
};

const HISTORY_LIMIT: usize = 100;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    #[default]
    Normal,
    Superscript,
    Subscript,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Formatting applied to the whole preview region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSnapshot {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub script: Script,
    pub align: Align,
    pub block: BlockType,
    pub font_family: Option<String>,
    pub font_size: Option<FontSize>,
    pub text_color: Option<u32>,
    pub highlight_color: Option<u32>,
}

impl Default for FormatSnapshot {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            script: Script::Normal,
            align: Align::Left,
            block: BlockType::Paragraph,
            font_family: None,
            font_size: None,
            text_color: None,
            highlight_color: None,
        }
    }
}

/// Demo editing host: formats its whole region at once and keeps a
/// bounded undo/redo history of snapshots.
#[derive(Debug, Default)]
pub struct PreviewSurface {
    current: FormatSnapshot,
    undo: VecDeque<FormatSnapshot>,
    redo: Vec<FormatSnapshot>,
}

impl PreviewSurface {
    pub fn snapshot(&self) -> &FormatSnapshot {
        &self.current
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    fn undo(&mut self) -> bool {
        let Some(previous) = self.undo.pop_back() else {
            return false;
        };
        self.redo.push(std::mem::replace(&mut self.current, previous));
        true
    }

    fn redo(&mut self) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        self.undo.push_back(std::mem::replace(&mut self.current, next));
        true
    }

    fn commit(&mut self, next: FormatSnapshot) {
        if next == self.current {
            return;
        }
        if self.undo.len() == HISTORY_LIMIT {
            self.undo.pop_front();
        }
        self.undo.push_back(std::mem::replace(&mut self.current, next));
        self.redo.clear();
    }
}

fn required<'a>(name: CommandName, value: Option<&'a str>) -> Result<&'a str, SurfaceError> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| SurfaceError::Failed(format!("{name} needs a value")))
}

fn toggle_script(current: Script, script: Script) -> Script {
    if current == script {
        Script::Normal
    } else {
        script
    }
}

fn toggle_list(current: BlockType, list: BlockType) -> BlockType {
    if current == list {
        BlockType::Paragraph
    } else {
        list
    }
}

fn color(name: CommandName, value: Option<&str>) -> Result<u32, SurfaceError> {
    let value = required(name, value)?;
    parse_hex(value).ok_or_else(|| SurfaceError::Failed(format!("not a color: {value}")))
}

impl EditableSurface for PreviewSurface {
    fn exec_command(&mut self, name: &str, value: Option<&str>) -> Result<bool, SurfaceError> {
        let name: CommandName = name.parse().map_err(|_| SurfaceError::Unsupported)?;
        let mut next = self.current.clone();

        match name {
            CommandName::Undo => return Ok(self.undo()),
            CommandName::Redo => return Ok(self.redo()),
            CommandName::ToggleBold => next.bold = !next.bold,
            CommandName::ToggleItalic => next.italic = !next.italic,
            CommandName::ToggleUnderline => next.underline = !next.underline,
            CommandName::ToggleStrikethrough => next.strikethrough = !next.strikethrough,
            CommandName::Superscript => next.script = toggle_script(next.script, Script::Superscript),
            CommandName::Subscript => next.script = toggle_script(next.script, Script::Subscript),
            CommandName::AlignLeft => next.align = Align::Left,
            CommandName::AlignCenter => next.align = Align::Center,
            CommandName::AlignRight => next.align = Align::Right,
            CommandName::AlignJustify => next.align = Align::Justify,
            CommandName::InsertUnorderedList => {
                next.block = toggle_list(next.block, BlockType::UnorderedList)
            }
            CommandName::InsertOrderedList => {
                next.block = toggle_list(next.block, BlockType::OrderedList)
            }
            CommandName::FormatBlock => {
                let tag = required(name, value)?;
                next.block = BlockType::from_tag(tag)
                    .ok_or_else(|| SurfaceError::Failed(format!("unknown block tag {tag}")))?;
            }
            CommandName::FontFamily => {
                let family = required(name, value)?;
                if !FONT_FAMILIES.iter().any(|known| *known == family) {
                    log::info!("font family {family:?} is not in the toolbar list, using it anyway");
                }
                next.font_family = Some(family.to_string());
            }
            CommandName::FontSize => {
                let size = required(name, value)?;
                next.font_size = Some(
                    FontSize::parse(size).map_err(|err| SurfaceError::Failed(err.to_string()))?,
                );
            }
            CommandName::TextColor => next.text_color = Some(color(name, value)?),
            CommandName::HighlightColor => next.highlight_color = Some(color(name, value)?),
        }

        self.commit(next);
        Ok(true)
    }
}
