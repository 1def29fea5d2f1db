use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::Disableable as _;
use gpui_component::input::{Input, InputEvent, InputState};
use gpui_component::popover::Popover;
use gpui_manos_toolbar_core::{
    ButtonCommand, ColorKind, FONT_FAMILIES, FontSize, SurfaceAdapter, SurfaceKind, ToolbarAction,
    ToolbarConfig, ToolbarSurface, parse_hex,
};

use crate::ToolbarEvent;
use crate::button::{ToolbarButton, ToolbarDropdownButton, ToolbarSeparator};
use crate::menu::{menu_label, menu_panel, menu_row};
use crate::swatch::SwatchGrid;

/// Below this width the command groups collapse behind the menu toggle.
const NARROW_VIEWPORT_WIDTH: f32 = 768.;

/// The persistent toolbar: title, history, fonts, marks, colors, alignment and lists.
pub struct Navbar {
    toolbar: ToolbarSurface,
    title_input: Entity<InputState>,
    text_hex_input: Entity<InputState>,
    highlight_hex_input: Entity<InputState>,
    font_family: Option<SharedString>,
    font_size: Option<FontSize>,
    color_errors: CustomColorErrors,
}

/// Rejected custom hex input, kept apart per [`ColorKind`].
#[derive(Debug, Default)]
struct CustomColorErrors {
    text: Option<SharedString>,
    highlight: Option<SharedString>,
}

impl CustomColorErrors {
    fn get(&self, kind: ColorKind) -> Option<&SharedString> {
        match kind {
            ColorKind::Text => self.text.as_ref(),
            ColorKind::Highlight => self.highlight.as_ref(),
        }
    }

    fn set(&mut self, kind: ColorKind, error: Option<SharedString>) {
        match kind {
            ColorKind::Text => self.text = error,
            ColorKind::Highlight => self.highlight = error,
        }
    }
}

impl EventEmitter<ToolbarEvent> for Navbar {}

impl Navbar {
    pub fn view(
        adapter: SurfaceAdapter,
        config: ToolbarConfig,
        window: &mut Window,
        cx: &mut App,
    ) -> Entity<Self> {
        cx.new(|cx| Self::new(adapter, config, window, cx))
    }

    pub fn new(
        adapter: SurfaceAdapter,
        config: ToolbarConfig,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let toolbar = ToolbarSurface::new(SurfaceKind::Persistent, adapter, config);

        let title = toolbar.state().document_title().to_string();
        let title_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Document title")
                .default_value(title)
        });
        let text_hex_input = cx.new(|cx| InputState::new(window, cx).placeholder("#rrggbb"));
        let highlight_hex_input =
            cx.new(|cx| InputState::new(window, cx).placeholder("#rrggbb"));

        cx.subscribe(&title_input, |this, input, event: &InputEvent, cx| {
            if matches!(event, InputEvent::Change { .. }) {
                let title = input.read(cx).value().to_string();
                this.set_document_title(title, cx);
            }
        })
        .detach();

        for (kind, input) in [
            (ColorKind::Text, &text_hex_input),
            (ColorKind::Highlight, &highlight_hex_input),
        ] {
            cx.subscribe(input, move |this, input, event: &InputEvent, cx| {
                if matches!(event, InputEvent::PressEnter { .. }) {
                    let hex = input.read(cx).value().to_string();
                    this.select_custom_color(kind, &hex, cx);
                }
            })
            .detach();
        }

        Self {
            toolbar,
            title_input,
            text_hex_input,
            highlight_hex_input,
            font_family: None,
            font_size: None,
            color_errors: CustomColorErrors::default(),
        }
    }

    pub fn toolbar(&self) -> &ToolbarSurface {
        &self.toolbar
    }

    /// The last rejected custom hex for `kind`, shown under its input.
    pub fn color_error(&self, kind: ColorKind) -> Option<&SharedString> {
        self.color_errors.get(kind)
    }

    pub fn dispatch(&mut self, action: ToolbarAction, cx: &mut Context<Self>) -> bool {
        let color_kind = match &action {
            ToolbarAction::FontFamily(family) => {
                self.font_family = Some(family.clone().into());
                None
            }
            ToolbarAction::FontSize(size) => {
                self.font_size = Some(*size);
                None
            }
            ToolbarAction::Color(kind, _) => Some(*kind),
            _ => None,
        };

        let dispatched = self.toolbar.dispatch(action);
        let applied = dispatched.applied();
        if let Some(kind) = color_kind {
            self.color_errors.set(kind, None);
        }
        cx.emit(ToolbarEvent::Dispatched {
            command: dispatched.command,
            applied,
        });
        cx.notify();
        applied
    }

    fn select_custom_color(&mut self, kind: ColorKind, hex: &str, cx: &mut Context<Self>) {
        match self.toolbar.select_custom_color(kind, hex) {
            Ok(dispatched) => {
                self.color_errors.set(kind, None);
                cx.emit(ToolbarEvent::Dispatched {
                    applied: dispatched.applied(),
                    command: dispatched.command,
                });
            }
            Err(err) => {
                log::warn!("ignoring custom {kind:?} color: {err}");
                self.color_errors.set(kind, Some(err.to_string().into()));
            }
        }
        cx.notify();
    }

    pub fn set_document_title(&mut self, title: String, cx: &mut Context<Self>) {
        if self.toolbar.state().document_title() == title {
            return;
        }
        self.toolbar.set_document_title(title.clone());
        cx.emit(ToolbarEvent::TitleChanged(title.into()));
        cx.notify();
    }

    pub fn toggle_mobile_menu(&mut self, cx: &mut Context<Self>) {
        self.toolbar.toggle_mobile_menu();
        cx.notify();
    }

    /// Buttons go inert once the editing surface is gone.
    fn button(&self, button: ButtonCommand, cx: &Context<Self>) -> ToolbarButton {
        ToolbarButton::label(
            SharedString::from(format!("navbar-{}", button.command_name())),
            button.label(),
        )
        .tooltip(button.tooltip())
        .disabled(!self.toolbar.adapter().is_attached())
        .on_click(cx.listener(move |this, _, _, cx| {
            this.dispatch(button.into(), cx);
        }))
    }

    fn render_font_family(&self, navbar: Entity<Self>) -> impl IntoElement {
        let active = self.font_family.clone();
        let label = active.clone().unwrap_or_else(|| "Font family".into());

        Popover::new("navbar-font-family")
            .appearance(false)
            .trigger(
                ToolbarDropdownButton::new("navbar-font-family-trigger")
                    .tooltip("Font family")
                    .min_width(px(180.))
                    .child(label),
            )
            .content(move |_, _window, cx| {
                let theme = cx.theme();
                let popover = cx.entity();

                let items = FONT_FAMILIES.iter().copied().map(|family| {
                    let navbar = navbar.clone();
                    let popover = popover.clone();
                    menu_row(
                        SharedString::from(format!("navbar-font-{family}")),
                        active.as_ref().map(SharedString::as_str) == Some(family),
                        theme,
                    )
                    .font_family(family)
                    .child(family)
                    .on_mouse_down(MouseButton::Left, move |_, window, cx| {
                        window.prevent_default();
                        navbar.update(cx, |this, cx| {
                            this.dispatch(ToolbarAction::FontFamily(family.to_string()), cx);
                        });
                        popover.update(cx, |state, cx| state.dismiss(window, cx));
                    })
                });

                menu_panel(theme)
                    .w(px(220.))
                    .child(menu_label(theme, "Fonts"))
                    .children(items)
            })
    }

    fn render_font_size(&self, navbar: Entity<Self>) -> impl IntoElement {
        let active = self.font_size;
        let label: SharedString = active
            .map(|size| size.label().into())
            .unwrap_or_else(|| "Font size".into());

        Popover::new("navbar-font-size")
            .appearance(false)
            .trigger(
                ToolbarDropdownButton::new("navbar-font-size-trigger")
                    .tooltip("Font size")
                    .min_width(px(96.))
                    .child(label),
            )
            .content(move |_, _window, cx| {
                let theme = cx.theme();
                let popover = cx.entity();

                let items = FontSize::all().map(|size| {
                    let navbar = navbar.clone();
                    let popover = popover.clone();
                    menu_row(
                        SharedString::from(format!("navbar-font-size-{}", size.ordinal())),
                        active == Some(size),
                        theme,
                    )
                    .child(size.label())
                    .on_mouse_down(MouseButton::Left, move |_, window, cx| {
                        window.prevent_default();
                        navbar.update(cx, |this, cx| {
                            this.dispatch(size.into(), cx);
                        });
                        popover.update(cx, |state, cx| state.dismiss(window, cx));
                    })
                });

                menu_panel(theme)
                    .w(px(140.))
                    .child(menu_label(theme, "Font sizes"))
                    .children(items)
            })
    }

    fn render_color(&self, kind: ColorKind, navbar: Entity<Self>, cx: &App) -> impl IntoElement {
        let theme = cx.theme();
        let current = rgb(parse_hex(&self.toolbar.state().color(kind).hex).unwrap_or_default());
        let hex_input = match kind {
            ColorKind::Text => self.text_hex_input.clone(),
            ColorKind::Highlight => self.highlight_hex_input.clone(),
        };

        Popover::new(SharedString::from(format!("navbar-{}", kind.command())))
            .appearance(false)
            .trigger(
                ToolbarDropdownButton::new(SharedString::from(format!(
                    "navbar-{}-trigger",
                    kind.command()
                )))
                .tooltip(kind.title())
                .child(
                    div()
                        .size(px(16.))
                        .rounded_full()
                        .border_1()
                        .border_color(theme.border)
                        .bg(current),
                ),
            )
            .content(move |_, _window, cx| {
                let state = navbar.read(cx).toolbar().state().clone();
                let error = navbar.read(cx).color_error(kind).cloned();
                let theme = cx.theme();
                let navbar = navbar.clone();

                menu_panel(theme)
                    .p(px(12.))
                    .gap(px(12.))
                    .child(
                        SwatchGrid::new(
                            SharedString::from(format!("navbar-{}-grid", kind.command())),
                            kind,
                            &state,
                        )
                        .on_pick(move |color, _window, cx| {
                            navbar.update(cx, |this, cx| {
                                this.dispatch(ToolbarAction::Color(kind, color), cx);
                            });
                        }),
                    )
                    .child(menu_label(theme, "Custom (press Enter)"))
                    .child(Input::new(&hex_input).w(px(160.)))
                    .when_some(error, |this, error| {
                        this.child(div().text_xs().text_color(theme.danger).child(error))
                    })
            })
    }
}

impl Render for Navbar {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let navbar = cx.entity();
        let narrow = window.viewport_size().width < px(NARROW_VIEWPORT_WIDTH);
        let menu_open = self.toolbar.state().is_mobile_menu_open();
        let show_groups = !narrow || menu_open;

        let history = div()
            .flex()
            .items_center()
            .child(self.button(ButtonCommand::Undo, cx))
            .child(self.button(ButtonCommand::Redo, cx));
        let fonts = div()
            .flex()
            .items_center()
            .gap(px(4.))
            .child(self.render_font_family(navbar.clone()))
            .child(self.render_font_size(navbar.clone()));
        let marks = div()
            .flex()
            .items_center()
            .child(self.button(ButtonCommand::Bold, cx).font_weight(FontWeight::BOLD))
            .child(self.button(ButtonCommand::Italic, cx).italic())
            .child(self.button(ButtonCommand::Underline, cx).underline())
            .child(self.button(ButtonCommand::Strikethrough, cx).line_through())
            .child(self.render_color(ColorKind::Text, navbar.clone(), cx))
            .child(self.render_color(ColorKind::Highlight, navbar.clone(), cx));
        let align = div()
            .flex()
            .items_center()
            .child(self.button(ButtonCommand::AlignLeft, cx))
            .child(self.button(ButtonCommand::AlignCenter, cx))
            .child(self.button(ButtonCommand::AlignRight, cx))
            .child(self.button(ButtonCommand::AlignJustify, cx));
        let lists = div()
            .flex()
            .items_center()
            .child(self.button(ButtonCommand::UnorderedList, cx))
            .child(self.button(ButtonCommand::OrderedList, cx));

        let theme = cx.theme();

        div()
            .w_full()
            .flex()
            .flex_col()
            .p(px(12.))
            .gap(px(8.))
            .bg(theme.background)
            .border_b_1()
            .border_color(theme.border)
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .justify_between()
                    .gap(px(8.))
                    .pb(px(8.))
                    .border_b_1()
                    .border_color(theme.border)
                    .child(
                        div()
                            .text_size(px(14.))
                            .font_weight(FontWeight::SEMIBOLD)
                            .child("Editor"),
                    )
                    .child(
                        div()
                            .flex_1()
                            .max_w(px(360.))
                            .child(Input::new(&self.title_input).w_full()),
                    )
                    .when(narrow, |this| {
                        this.child(
                            ToolbarButton::label(
                                "navbar-mobile-menu",
                                if menu_open { "✕" } else { "☰" },
                            )
                            .tooltip(if menu_open { "Hide tools" } else { "Show tools" })
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.toggle_mobile_menu(cx);
                            })),
                        )
                    }),
            )
            .when(show_groups, |this| {
                this.child(
                    div()
                        .flex()
                        .flex_row()
                        .flex_wrap()
                        .items_center()
                        .gap(px(4.))
                        .child(history)
                        .child(fonts)
                        .child(ToolbarSeparator)
                        .child(marks)
                        .child(ToolbarSeparator)
                        .child(align)
                        .child(ToolbarSeparator)
                        .child(lists),
                )
            })
    }
}
