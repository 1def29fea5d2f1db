use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::input::{Input, InputState};
use gpui_manos_toolbar::{
    CONTEXT, ContextToolbar, DismissContextToolbar, Navbar, ToggleBold, ToggleItalic,
    ToggleUnderline, ToolbarEvent,
};
use gpui_manos_toolbar_core::{BlockType, ButtonCommand, SurfaceHandle, ToolbarConfig};

use crate::preview::{Align, FormatSnapshot, PreviewSurface, Script};

const DEMO_TEXT: &str = "Select some text and format it from the toolbar.\n\
Right-click inside the editor to open the floating toolbar.\n\
Every command is applied to the whole preview below.";

/// Base size of the preview when no font size was picked.
const BASE_TEXT_SIZE: f32 = 15.;

pub struct ToolbarExample {
    surface: SurfaceHandle<PreviewSurface>,
    text: Entity<InputState>,
    navbar: Entity<Navbar>,
    context_toolbar: Entity<ContextToolbar>,
    window_title: SharedString,
    last_dispatch: Option<(SharedString, bool)>,
}

impl ToolbarExample {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let surface = SurfaceHandle::new(PreviewSurface::default());
        let config = ToolbarConfig::default();

        let text = cx.new(|cx| {
            InputState::new(window, cx)
                .multi_line()
                .rows(6)
                .placeholder("Start typing…")
                .default_value(DEMO_TEXT)
        });
        let navbar = Navbar::view(surface.adapter(), config.clone(), window, cx);
        let context_toolbar = ContextToolbar::view(surface.adapter(), config, cx);

        cx.subscribe(&navbar, |this, _, event: &ToolbarEvent, cx| {
            this.on_toolbar_event(event, cx);
        })
        .detach();
        cx.subscribe(&context_toolbar, |this, _, event: &ToolbarEvent, cx| {
            this.on_toolbar_event(event, cx);
        })
        .detach();

        Self {
            surface,
            text,
            navbar,
            context_toolbar,
            window_title: SharedString::default(),
            last_dispatch: None,
        }
    }

    pub fn view(window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| Self::new(window, cx))
    }

    fn on_toolbar_event(&mut self, event: &ToolbarEvent, cx: &mut Context<Self>) {
        if let ToolbarEvent::Dispatched { command, applied } = event {
            self.last_dispatch = Some((command.to_string().into(), *applied));
        }
        cx.notify();
    }

    fn dispatch_shortcut(&mut self, button: ButtonCommand, cx: &mut Context<Self>) {
        self.navbar.update(cx, |navbar, cx| {
            navbar.dispatch(button.into(), cx);
        });
    }

    fn sync_window_title(&mut self, window: &mut Window, cx: &App) {
        let title = self.navbar.read(cx).toolbar().state().document_title();
        if self.window_title.as_ref() != title {
            self.window_title = SharedString::from(title.to_string());
            window.set_window_title(&self.window_title);
        }
    }

    fn render_preview(&self, snapshot: &FormatSnapshot, cx: &App) -> Div {
        let theme = cx.theme();
        let content = self.text.read(cx).value();

        let mut size = snapshot
            .font_size
            .map(|size| f32::from(size.points()) * 1.25)
            .unwrap_or(BASE_TEXT_SIZE);
        if let BlockType::Heading { level } = snapshot.block {
            size *= 2.2 - f32::from(level) * 0.2;
        }
        if snapshot.script != Script::Normal {
            size *= 0.7;
        }

        let lines = content.lines().enumerate().map(|(ix, line)| {
            let marker = match snapshot.block {
                BlockType::UnorderedList => Some(SharedString::from("•")),
                BlockType::OrderedList => Some(SharedString::from(format!("{}.", ix + 1))),
                _ => None,
            };
            div()
                .flex()
                .flex_row()
                .gap(px(8.))
                .when_some(marker, |this, marker| this.child(div().w(px(20.)).child(marker)))
                .child(div().flex_1().child(SharedString::from(line.to_string())))
        });

        div()
            .flex()
            .flex_col()
            .gap(px(4.))
            .p(px(16.))
            .rounded(theme.radius)
            .border_1()
            .border_color(theme.border)
            .bg(theme.background)
            .text_size(px(size))
            .when(
                matches!(snapshot.block, BlockType::Heading { .. }) || snapshot.bold,
                |this| this.font_weight(FontWeight::BOLD),
            )
            .when(snapshot.italic, |this| this.italic())
            .when(snapshot.underline, |this| this.underline())
            .when(snapshot.strikethrough, |this| this.line_through())
            .when_some(snapshot.font_family.clone(), |this, family| {
                this.font_family(SharedString::from(family))
            })
            .when_some(snapshot.text_color, |this, color| this.text_color(rgb(color)))
            .when_some(snapshot.highlight_color, |this, color| this.bg(rgb(color)))
            .map(|this| match snapshot.align {
                Align::Left | Align::Justify => this.text_left(),
                Align::Center => this.text_center(),
                Align::Right => this.text_right(),
            })
            .when(snapshot.script == Script::Superscript, |this| this.pb(px(size * 0.5)))
            .when(snapshot.script == Script::Subscript, |this| this.pt(px(size * 0.5)))
            .children(lines)
    }
}

impl Render for ToolbarExample {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.sync_window_title(window, cx);

        let snapshot = self
            .surface
            .read(|surface| surface.snapshot().clone())
            .unwrap_or_default();
        let history = self
            .surface
            .read(|surface| (surface.can_undo(), surface.can_redo()))
            .unwrap_or_default();
        let preview = self.render_preview(&snapshot, cx);
        let theme = cx.theme();

        let status: SharedString = match &self.last_dispatch {
            Some((command, true)) => format!("Applied {command}").into(),
            Some((command, false)) => format!("Not applied: {command}").into(),
            None => "Ready".into(),
        };

        div()
            .id("toolbar-example")
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .bg(theme.muted)
            .key_context(CONTEXT)
            .on_action(cx.listener(|this, _: &ToggleBold, _, cx| {
                this.dispatch_shortcut(ButtonCommand::Bold, cx);
            }))
            .on_action(cx.listener(|this, _: &ToggleItalic, _, cx| {
                this.dispatch_shortcut(ButtonCommand::Italic, cx);
            }))
            .on_action(cx.listener(|this, _: &ToggleUnderline, _, cx| {
                this.dispatch_shortcut(ButtonCommand::Underline, cx);
            }))
            .on_action(cx.listener(|this, _: &DismissContextToolbar, _, cx| {
                this.context_toolbar
                    .update(cx, |toolbar, cx| toolbar.dismiss(cx));
            }))
            .child(self.navbar.clone())
            .child(
                div()
                    .id("toolbar-example-editor")
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap(px(12.))
                    .p(px(16.))
                    .overflow_y_scroll()
                    .on_mouse_down(
                        MouseButton::Right,
                        cx.listener(|this, event: &MouseDownEvent, _, cx| {
                            let position = event.position;
                            this.context_toolbar
                                .update(cx, |toolbar, cx| toolbar.open(position, cx));
                        }),
                    )
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _: &MouseDownEvent, _, cx| {
                            this.context_toolbar
                                .update(cx, |toolbar, cx| toolbar.dismiss(cx));
                        }),
                    )
                    .child(Input::new(&self.text).h(px(160.)))
                    .child(preview),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .justify_between()
                    .px(px(16.))
                    .py(px(6.))
                    .border_t_1()
                    .border_color(theme.border)
                    .bg(theme.background)
                    .text_xs()
                    .text_color(theme.muted_foreground)
                    .child(status)
                    .child(format!(
                        "undo {} · redo {}",
                        if history.0 { "available" } else { "empty" },
                        if history.1 { "available" } else { "empty" },
                    )),
            )
            .child(self.context_toolbar.clone())
    }
}
