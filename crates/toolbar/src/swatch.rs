use std::rc::Rc;

use gpui::InteractiveElement as _;
use gpui::StatefulInteractiveElement as _;
use gpui::prelude::FluentBuilder as _;
use gpui::{
    App, ElementId, IntoElement, MouseButton, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, px, rgb,
};
use gpui_component::ActiveTheme as _;
use gpui_component::tooltip::Tooltip;
use gpui_manos_toolbar_core::{ColorKind, ColorSelection, ColorSwatch, SwatchIndicator, ToolbarState};

type PickHandler = Rc<dyn Fn(ColorSelection, &mut Window, &mut App)>;

/// One palette rendered as a grid of round swatches, the last pick ringed.
#[derive(IntoElement)]
pub struct SwatchGrid {
    id: ElementId,
    kind: ColorKind,
    indicators: Vec<(ColorSwatch, SwatchIndicator)>,
    on_pick: Option<PickHandler>,
}

impl SwatchGrid {
    pub fn new(id: impl Into<ElementId>, kind: ColorKind, state: &ToolbarState) -> Self {
        let indicators = kind
            .palette()
            .iter()
            .map(|swatch| (*swatch, state.indicator(kind, swatch)))
            .collect();
        Self {
            id: id.into(),
            kind,
            indicators,
            on_pick: None,
        }
    }

    pub fn on_pick(
        mut self,
        on_pick: impl Fn(ColorSelection, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_pick = Some(Rc::new(on_pick));
        self
    }
}

impl RenderOnce for SwatchGrid {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let columns = match self.kind {
            ColorKind::Text => 4,
            ColorKind::Highlight => 5,
        };
        let kind = self.kind;

        let rows = self.indicators.chunks(columns).enumerate().map(|(row, chunk)| {
            div()
                .flex()
                .flex_row()
                .gap(px(8.))
                .children(chunk.iter().enumerate().map(|(col, (swatch, indicator))| {
                    let swatch = *swatch;
                    let on_pick = self.on_pick.clone();
                    let tooltip: SharedString = swatch.label.into();
                    let color = rgb(swatch.rgb());

                    div()
                        .id(SharedString::from(format!(
                            "{}-swatch-{}",
                            kind.command(),
                            row * columns + col
                        )))
                        .flex()
                        .items_center()
                        .justify_center()
                        .size(px(22.))
                        .rounded_full()
                        .cursor_pointer()
                        .text_size(px(12.))
                        .font_weight(gpui::FontWeight::BOLD)
                        .when(indicator.is_active(), |this| {
                            this.border_2().border_color(theme.ring)
                        })
                        .when(!indicator.is_active(), |this| {
                            this.border_1().border_color(theme.border)
                        })
                        .when(matches!(kind, ColorKind::Text), |this| {
                            this.text_color(color).child("A")
                        })
                        .when(matches!(kind, ColorKind::Highlight), |this| this.bg(color))
                        .on_mouse_down(MouseButton::Left, move |_, window, cx| {
                            window.prevent_default();
                            if let Some(on_pick) = on_pick.as_ref() {
                                on_pick(ColorSelection::from(&swatch), window, cx);
                            }
                        })
                        .tooltip(move |window, cx| Tooltip::new(tooltip.clone()).build(window, cx))
                }))
        });

        div()
            .id(self.id)
            .flex()
            .flex_col()
            .gap(px(8.))
            .child(
                div()
                    .text_xs()
                    .text_color(theme.muted_foreground)
                    .child(kind.title()),
            )
            .children(rows)
    }
}
