use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::Disableable as _;
use gpui_component::popover::Popover;
use gpui_manos_toolbar_core::{
    BlockType, ButtonCommand, ColorKind, SurfaceAdapter, SurfaceKind, ToolbarAction,
    ToolbarConfig, ToolbarSurface, parse_hex,
};

use crate::ToolbarEvent;
use crate::button::{ToolbarButton, ToolbarDropdownButton, ToolbarSeparator};
use crate::menu::{menu_label, menu_panel, menu_row};
use crate::swatch::SwatchGrid;

const OVERFLOW_COMMANDS: [ButtonCommand; 6] = [
    ButtonCommand::Superscript,
    ButtonCommand::Subscript,
    ButtonCommand::AlignLeft,
    ButtonCommand::AlignCenter,
    ButtonCommand::AlignRight,
    ButtonCommand::AlignJustify,
];

/// Floating toolbar opened by a secondary click over the editing region.
///
/// Holds its own [`ToolbarSurface`], so colors picked here never show up as
/// the selection of the persistent bar.
pub struct ContextToolbar {
    toolbar: ToolbarSurface,
    position: Option<Point<Pixels>>,
}

impl EventEmitter<ToolbarEvent> for ContextToolbar {}

impl ContextToolbar {
    pub fn view(adapter: SurfaceAdapter, config: ToolbarConfig, cx: &mut App) -> Entity<Self> {
        cx.new(|_| Self::new(adapter, config))
    }

    pub fn new(adapter: SurfaceAdapter, config: ToolbarConfig) -> Self {
        Self {
            toolbar: ToolbarSurface::new(SurfaceKind::Contextual, adapter, config),
            position: None,
        }
    }

    pub fn toolbar(&self) -> &ToolbarSurface {
        &self.toolbar
    }

    pub fn is_open(&self) -> bool {
        self.position.is_some()
    }

    pub fn open(&mut self, position: Point<Pixels>, cx: &mut Context<Self>) {
        self.position = Some(position);
        cx.notify();
    }

    pub fn dismiss(&mut self, cx: &mut Context<Self>) {
        if self.position.take().is_some() {
            cx.notify();
        }
    }

    pub fn dispatch(&mut self, action: ToolbarAction, cx: &mut Context<Self>) -> bool {
        let dispatched = self.toolbar.dispatch(action);
        let applied = dispatched.applied();
        cx.emit(ToolbarEvent::Dispatched {
            command: dispatched.command,
            applied,
        });
        cx.notify();
        applied
    }

    /// Buttons go inert once the editing surface is gone.
    fn button(&self, button: ButtonCommand, cx: &Context<Self>) -> ToolbarButton {
        ToolbarButton::label(
            SharedString::from(format!("context-{}", button.command_name())),
            button.label(),
        )
        .tooltip(button.tooltip())
        .disabled(!self.toolbar.adapter().is_attached())
        .on_click(cx.listener(move |this, _, _, cx| {
            this.dispatch(button.into(), cx);
        }))
    }

    fn render_block_type(&self, toolbar: Entity<Self>) -> impl IntoElement {
        let active = self.toolbar.block_type();
        let label = active.map_or(BlockType::Paragraph.label(), BlockType::label);

        Popover::new("context-block-type")
            .appearance(false)
            .trigger(
                ToolbarDropdownButton::new("context-block-type-trigger")
                    .tooltip("Block type")
                    .min_width(px(110.))
                    .child(label),
            )
            .content(move |_, _window, cx| {
                let theme = cx.theme();
                let popover = cx.entity();

                let items = BlockType::ALL.iter().copied().enumerate().map(|(ix, block)| {
                    let toolbar = toolbar.clone();
                    let popover = popover.clone();
                    menu_row(
                        SharedString::from(format!("context-block-{ix}")),
                        active == Some(block),
                        theme,
                    )
                    .child(block.label())
                    .on_mouse_down(MouseButton::Left, move |_, window, cx| {
                        window.prevent_default();
                        toolbar.update(cx, |this, cx| {
                            this.dispatch(block.into(), cx);
                        });
                        popover.update(cx, |state, cx| state.dismiss(window, cx));
                    })
                });

                menu_panel(theme)
                    .w(px(180.))
                    .child(menu_label(theme, "Turn into"))
                    .children(items)
            })
    }

    fn render_colors(&self, toolbar: Entity<Self>, cx: &App) -> impl IntoElement {
        let theme = cx.theme();
        let text = self.toolbar.state().color(ColorKind::Text).clone();
        let highlight = self.toolbar.state().color(ColorKind::Highlight).clone();

        Popover::new("context-colors")
            .appearance(false)
            .trigger(
                ToolbarDropdownButton::new("context-colors-trigger")
                    .tooltip("Colors")
                    .child(
                        div()
                            .px(px(4.))
                            .rounded(px(4.))
                            .font_weight(FontWeight::BOLD)
                            .text_color(rgb(parse_hex(&text.hex).unwrap_or_default()))
                            .bg(rgb(parse_hex(&highlight.hex).unwrap_or_default()))
                            .border_1()
                            .border_color(theme.border)
                            .child("A"),
                    ),
            )
            .content(move |_, _window, cx| {
                let state = toolbar.read(cx).toolbar().state().clone();
                let theme = cx.theme();

                let grid = |kind: ColorKind| {
                    let toolbar = toolbar.clone();
                    SwatchGrid::new(
                        SharedString::from(format!("context-{}-grid", kind.command())),
                        kind,
                        &state,
                    )
                    .on_pick(move |color, _window, cx| {
                        toolbar.update(cx, |this, cx| {
                            this.dispatch(ToolbarAction::Color(kind, color), cx);
                        });
                    })
                };

                menu_panel(theme)
                    .p(px(12.))
                    .gap(px(12.))
                    .child(grid(ColorKind::Text))
                    .child(grid(ColorKind::Highlight))
            })
    }

    fn render_overflow(toolbar: Entity<Self>) -> impl IntoElement {
        Popover::new("context-overflow")
            .appearance(false)
            .trigger(
                ToolbarDropdownButton::new("context-overflow-trigger")
                    .tooltip("More")
                    .child("…"),
            )
            .content(move |_, _window, cx| {
                let theme = cx.theme();
                let popover = cx.entity();

                let items = OVERFLOW_COMMANDS.iter().copied().map(|button| {
                    let toolbar = toolbar.clone();
                    let popover = popover.clone();
                    menu_row(
                        SharedString::from(format!("context-more-{}", button.command_name())),
                        false,
                        theme,
                    )
                    .child(div().w(px(24.)).child(button.label()))
                    .child(button.tooltip())
                    .on_mouse_down(MouseButton::Left, move |_, window, cx| {
                        window.prevent_default();
                        toolbar.update(cx, |this, cx| {
                            this.dispatch(button.into(), cx);
                        });
                        popover.update(cx, |state, cx| state.dismiss(window, cx));
                    })
                });

                menu_panel(theme).w(px(200.)).children(items)
            })
    }
}

impl Render for ContextToolbar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let Some(position) = self.position else {
            return div().into_any_element();
        };

        let toolbar = cx.entity();
        let colors = self.render_colors(toolbar.clone(), cx);
        let close = ToolbarButton::label("context-close", "✕")
            .tooltip("Close")
            .on_click(cx.listener(|this, _, _, cx| this.dismiss(cx)));

        let theme = cx.theme();

        div()
            .id("context-toolbar")
            .absolute()
            .left(position.x)
            .top(position.y)
            .flex()
            .flex_row()
            .items_center()
            .gap(px(2.))
            .p(px(4.))
            .bg(theme.popover)
            .border_1()
            .border_color(theme.border)
            .rounded(theme.radius)
            .shadow_lg()
            // Clicks inside the bar must not reach the editor, which dismisses it.
            .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
            .on_mouse_down(MouseButton::Right, |_, _, cx| cx.stop_propagation())
            .child(self.render_block_type(toolbar.clone()))
            .child(ToolbarSeparator)
            .child(self.button(ButtonCommand::Bold, cx).font_weight(FontWeight::BOLD))
            .child(self.button(ButtonCommand::Italic, cx).italic())
            .child(self.button(ButtonCommand::Underline, cx).underline())
            .child(self.button(ButtonCommand::Strikethrough, cx).line_through())
            .child(ToolbarSeparator)
            .child(colors)
            .child(Self::render_overflow(toolbar))
            .child(ToolbarSeparator)
            .child(close)
            .into_any_element()
    }
}
