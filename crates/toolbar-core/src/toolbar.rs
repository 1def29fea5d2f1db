use crate::command::{FormatCommand, TokenError};
use crate::encoder::{BlockType, ButtonCommand, ToolbarAction};
use crate::palette::ColorKind;
use crate::state::{ColorSelection, ToolbarConfig, ToolbarState};
use crate::surface::{CommandApplicationFailure, SurfaceAdapter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// Always-visible bar with title, history and font controls.
    Persistent,
    /// Popup opened by a secondary click over the editing region.
    Contextual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Title,
    MobileMenu,
    Button(ButtonCommand),
    BlockType,
    FontFamily,
    FontSize,
    Palette(ColorKind),
    CustomColor(ColorKind),
}

#[derive(Debug, Clone, Copy)]
pub struct ControlGroup {
    pub id: &'static str,
    pub controls: &'static [Control],
}

const PERSISTENT_LAYOUT: &[ControlGroup] = &[
    ControlGroup {
        id: "header",
        controls: &[Control::Title, Control::MobileMenu],
    },
    ControlGroup {
        id: "history",
        controls: &[
            Control::Button(ButtonCommand::Undo),
            Control::Button(ButtonCommand::Redo),
        ],
    },
    ControlGroup {
        id: "font",
        controls: &[Control::FontFamily, Control::FontSize],
    },
    ControlGroup {
        id: "marks",
        controls: &[
            Control::Button(ButtonCommand::Bold),
            Control::Button(ButtonCommand::Italic),
            Control::Button(ButtonCommand::Underline),
            Control::Button(ButtonCommand::Strikethrough),
            Control::Palette(ColorKind::Text),
            Control::CustomColor(ColorKind::Text),
            Control::Palette(ColorKind::Highlight),
            Control::CustomColor(ColorKind::Highlight),
        ],
    },
    ControlGroup {
        id: "align",
        controls: &[
            Control::Button(ButtonCommand::AlignLeft),
            Control::Button(ButtonCommand::AlignCenter),
            Control::Button(ButtonCommand::AlignRight),
            Control::Button(ButtonCommand::AlignJustify),
        ],
    },
    ControlGroup {
        id: "lists",
        controls: &[
            Control::Button(ButtonCommand::UnorderedList),
            Control::Button(ButtonCommand::OrderedList),
        ],
    },
];

const CONTEXTUAL_LAYOUT: &[ControlGroup] = &[
    ControlGroup {
        id: "block",
        controls: &[Control::BlockType],
    },
    ControlGroup {
        id: "marks",
        controls: &[
            Control::Button(ButtonCommand::Bold),
            Control::Button(ButtonCommand::Italic),
            Control::Button(ButtonCommand::Underline),
            Control::Button(ButtonCommand::Strikethrough),
        ],
    },
    ControlGroup {
        id: "colors",
        controls: &[
            Control::Palette(ColorKind::Text),
            Control::Palette(ColorKind::Highlight),
        ],
    },
    ControlGroup {
        id: "more",
        controls: &[
            Control::Button(ButtonCommand::Superscript),
            Control::Button(ButtonCommand::Subscript),
            Control::Button(ButtonCommand::AlignLeft),
            Control::Button(ButtonCommand::AlignCenter),
            Control::Button(ButtonCommand::AlignRight),
            Control::Button(ButtonCommand::AlignJustify),
        ],
    },
];

impl SurfaceKind {
    pub fn layout(self) -> &'static [ControlGroup] {
        match self {
            Self::Persistent => PERSISTENT_LAYOUT,
            Self::Contextual => CONTEXTUAL_LAYOUT,
        }
    }

    pub fn has_control(self, control: Control) -> bool {
        self.layout()
            .iter()
            .any(|group| group.controls.contains(&control))
    }
}

/// Result of one dispatch: the encoded command and what the surface made of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub command: FormatCommand,
    pub result: Result<(), CommandApplicationFailure>,
}

impl Dispatched {
    pub fn applied(&self) -> bool {
        self.result.is_ok()
    }
}

/// One toolbar presentation with its own [`ToolbarState`].
///
/// Surfaces share the editing surface through their adapters but never share
/// indicator state: picking a color in one leaves the other untouched.
pub struct ToolbarSurface {
    kind: SurfaceKind,
    state: ToolbarState,
    adapter: SurfaceAdapter,
    block_type: Option<BlockType>,
}

impl ToolbarSurface {
    pub fn new(kind: SurfaceKind, adapter: SurfaceAdapter, config: ToolbarConfig) -> Self {
        Self {
            kind,
            state: ToolbarState::new(config),
            adapter,
            block_type: None,
        }
    }

    pub fn persistent(adapter: SurfaceAdapter) -> Self {
        Self::new(SurfaceKind::Persistent, adapter, ToolbarConfig::default())
    }

    pub fn contextual(adapter: SurfaceAdapter) -> Self {
        Self::new(SurfaceKind::Contextual, adapter, ToolbarConfig::default())
    }

    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    pub fn state(&self) -> &ToolbarState {
        &self.state
    }

    pub fn adapter(&self) -> &SurfaceAdapter {
        &self.adapter
    }

    /// The block type last picked through this surface, for the dropdown label.
    pub fn block_type(&self) -> Option<BlockType> {
        self.block_type
    }

    pub fn offers(&self, action: &ToolbarAction) -> bool {
        let control = match action {
            ToolbarAction::Button(button) => Control::Button(*button),
            ToolbarAction::Block(_) => Control::BlockType,
            ToolbarAction::FontFamily(_) => Control::FontFamily,
            ToolbarAction::FontSize(_) => Control::FontSize,
            ToolbarAction::Color(kind, color) => {
                if kind.palette().iter().any(|swatch| color.matches(swatch)) {
                    Control::Palette(*kind)
                } else {
                    Control::CustomColor(*kind)
                }
            }
        };
        self.kind.has_control(control)
    }

    pub fn dispatch(&mut self, action: ToolbarAction) -> Dispatched {
        if !self.offers(&action) {
            log::debug!("{:?} toolbar dispatching {action:?} outside its layout", self.kind);
        }

        let command = action.encode();
        log::debug!("{:?} toolbar dispatch {}", self.kind, command.to_json());
        let result = match action {
            ToolbarAction::Block(block) => {
                self.block_type = Some(block.normalized());
                self.adapter.apply(&command)
            }
            ToolbarAction::Color(kind, color) => {
                self.state.select_color(kind, color, &self.adapter)
            }
            _ => self.adapter.apply(&command),
        };
        Dispatched { command, result }
    }

    pub fn select_color(&mut self, kind: ColorKind, color: ColorSelection) -> Dispatched {
        self.dispatch(ToolbarAction::Color(kind, color))
    }

    /// Validates a free hex color; nothing is stored or dispatched when it is invalid.
    pub fn select_custom_color(
        &mut self,
        kind: ColorKind,
        hex: &str,
    ) -> Result<Dispatched, TokenError> {
        let color = ColorSelection::custom(hex)?;
        Ok(self.select_color(kind, color))
    }

    pub fn set_document_title(&mut self, title: impl Into<String>) {
        self.state.set_document_title(title);
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.state.toggle_mobile_menu()
    }
}
