use gpui::InteractiveElement as _;
use gpui::StatefulInteractiveElement as _;
use gpui::prelude::FluentBuilder as _;
use gpui::{Div, ElementId, ParentElement as _, Stateful, Styled as _, div, px};
use gpui_component::Theme;

/// Container for dropdown content opened from a toolbar.
pub(crate) fn menu_panel(theme: &Theme) -> Div {
    div()
        .p(px(4.))
        .bg(theme.popover)
        .border_1()
        .border_color(theme.border)
        .rounded(theme.radius)
        .shadow_md()
        .flex()
        .flex_col()
        .gap(px(2.))
}

/// One selectable row inside [`menu_panel`]. The caller attaches the handler.
pub(crate) fn menu_row(id: impl Into<ElementId>, active: bool, theme: &Theme) -> Stateful<Div> {
    div()
        .id(id)
        .flex()
        .items_center()
        .gap(px(8.))
        .h(px(28.))
        .px(px(10.))
        .rounded(px(6.))
        .text_sm()
        .cursor_pointer()
        .text_color(theme.popover_foreground)
        .hover(|this| {
            this.bg(theme.accent.alpha(0.4))
                .text_color(theme.accent_foreground)
        })
        .active(|this| this.bg(theme.accent).text_color(theme.accent_foreground))
        .when(active, |this| {
            this.bg(theme.accent).text_color(theme.accent_foreground)
        })
}

pub(crate) fn menu_label(theme: &Theme, label: &'static str) -> Div {
    div()
        .px(px(6.))
        .py(px(4.))
        .text_xs()
        .text_color(theme.muted_foreground)
        .child(label)
}
