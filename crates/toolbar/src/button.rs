use std::rc::Rc;

use gpui::InteractiveElement as _;
use gpui::StatefulInteractiveElement as _;
use gpui::prelude::FluentBuilder as _;
use gpui::{
    AnyElement, App, ClickEvent, ElementId, IntoElement, MouseButton, ParentElement, Pixels,
    RenderOnce, SharedString, StyleRefinement, Styled, Window, div, px,
};
use gpui_component::ActiveTheme as _;
use gpui_component::Disableable;
use gpui_component::Selectable;
use gpui_component::StyledExt as _;
use gpui_component::tooltip::Tooltip;
use gpui_component::{Icon, IconName};

type ClickHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut App)>;

/// Flat toolbar button. Never takes focus, so the editing region keeps its selection.
#[derive(IntoElement)]
pub struct ToolbarButton {
    id: ElementId,
    style: StyleRefinement,
    tooltip: Option<SharedString>,
    disabled: bool,
    selected: bool,
    children: Vec<AnyElement>,
    on_click: Option<ClickHandler>,
    min_width: Pixels,
}

impl ToolbarButton {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            style: StyleRefinement::default(),
            tooltip: None,
            disabled: false,
            selected: false,
            children: Vec::new(),
            on_click: None,
            min_width: px(32.),
        }
    }

    pub fn label(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id).child(label.into())
    }

    pub fn tooltip(mut self, tooltip: impl Into<SharedString>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }

    pub fn min_width(mut self, min_width: Pixels) -> Self {
        self.min_width = min_width;
        self
    }

}

impl ParentElement for ToolbarButton {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for ToolbarButton {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl Selectable for ToolbarButton {
    fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn is_selected(&self) -> bool {
        self.selected
    }
}

impl Disableable for ToolbarButton {
    fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl RenderOnce for ToolbarButton {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let disabled = self.disabled;
        let clickable = self.on_click.is_some() && !disabled;

        let mut disabled_fg = theme.muted_foreground;
        disabled_fg.a *= 0.6;

        div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .gap(px(8.))
            .h(px(32.))
            .min_w(self.min_width)
            .px(px(6.))
            .rounded(px(6.))
            .text_size(px(13.))
            .font_weight(gpui::FontWeight::MEDIUM)
            .bg(theme.transparent)
            .text_color(if disabled { disabled_fg } else { theme.foreground })
            .when(!disabled, |this| {
                this.cursor_pointer()
                    .hover(|this| this.bg(theme.muted).text_color(theme.muted_foreground))
                    .active(|this| this.bg(theme.accent).text_color(theme.accent_foreground))
            })
            .when(self.selected, |this| {
                this.bg(theme.accent).text_color(theme.accent_foreground)
            })
            .refine_style(&self.style)
            .on_mouse_down(MouseButton::Left, move |_, window, cx| {
                if !clickable {
                    cx.stop_propagation();
                    return;
                }

                // Keep focus (and the selection) in the editing region.
                window.prevent_default();
            })
            .when_some(self.on_click, |this, on_click| {
                this.on_click(move |event, window, cx| {
                    if !clickable {
                        cx.stop_propagation();
                        return;
                    }
                    (on_click)(event, window, cx);
                })
            })
            .children(self.children)
            .when_some(self.tooltip, |this, tooltip| {
                this.tooltip(move |window, cx| Tooltip::new(tooltip.clone()).build(window, cx))
            })
    }
}

/// Trigger for a toolbar dropdown: label on the left, chevron on the right.
#[derive(IntoElement)]
pub struct ToolbarDropdownButton {
    id: ElementId,
    style: StyleRefinement,
    tooltip: Option<SharedString>,
    selected: bool,
    left: Vec<AnyElement>,
    min_width: Pixels,
}

impl ToolbarDropdownButton {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            style: StyleRefinement::default(),
            tooltip: None,
            selected: false,
            left: Vec::new(),
            min_width: px(32.),
        }
    }

    pub fn tooltip(mut self, tooltip: impl Into<SharedString>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn min_width(mut self, min_width: Pixels) -> Self {
        self.min_width = min_width;
        self
    }
}

impl ParentElement for ToolbarDropdownButton {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.left.extend(elements);
    }
}

impl Styled for ToolbarDropdownButton {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl Selectable for ToolbarDropdownButton {
    fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn is_selected(&self) -> bool {
        self.selected
    }
}

impl RenderOnce for ToolbarDropdownButton {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        let chevron = Icon::new(IconName::ChevronDown)
            .size_3p5()
            .text_color(theme.muted_foreground);

        let mut button = ToolbarButton::new(self.id)
            .min_width(self.min_width)
            .selected(self.selected)
            .justify_between()
            .refine_style(&self.style)
            .child(
                div()
                    .flex_1()
                    .flex()
                    .items_center()
                    .gap(px(8.))
                    .children(self.left),
            )
            .child(chevron)
            // Popover triggers need a click handler to be treated as enabled.
            .on_click(|_, _, _| {});

        if let Some(tooltip) = self.tooltip {
            button = button.tooltip(tooltip);
        }

        button.render(window, cx)
    }
}

#[derive(IntoElement)]
pub struct ToolbarSeparator;

impl RenderOnce for ToolbarSeparator {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        div()
            .mx(px(6.))
            .py(px(2.))
            .child(div().h(px(18.)).w(px(1.)).bg(theme.border))
    }
}
