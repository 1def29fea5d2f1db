mod support;

use gpui_manos_toolbar_core::{
    ColorKind, ColorSelection, CommandApplicationFailure, HIGHLIGHT_PALETTE, SurfaceAdapter,
    SurfaceHandle, SwatchIndicator, TEXT_PALETTE, ToolbarState,
};
use support::{RecordingSurface, call};

#[test]
fn select_text_color_stores_and_dispatches_once() {
    for (ix, swatch) in TEXT_PALETTE.iter().enumerate() {
        let handle = SurfaceHandle::new(RecordingSurface::default());
        let mut state = ToolbarState::default();

        state
            .select_color(ColorKind::Text, ColorSelection::from(swatch), &handle.adapter())
            .unwrap();

        assert_eq!(state.color(ColorKind::Text), &ColorSelection::from(&TEXT_PALETTE[ix]));
        assert_eq!(
            handle.read(|surface| surface.calls.clone()),
            Some(vec![call("text-color", Some(swatch.hex))])
        );
    }
}

#[test]
fn select_highlight_color_leaves_text_color_alone() {
    let handle = SurfaceHandle::new(RecordingSurface::default());
    let mut state = ToolbarState::default();
    let before = state.color(ColorKind::Text).clone();

    state
        .select_color(
            ColorKind::Highlight,
            ColorSelection::from(&HIGHLIGHT_PALETTE[6]),
            &handle.adapter(),
        )
        .unwrap();

    assert_eq!(state.color(ColorKind::Highlight).hex, "#3b82f6");
    assert_eq!(state.color(ColorKind::Text), &before);
    assert_eq!(
        handle.read(|surface| surface.calls.clone()),
        Some(vec![call("highlight-color", Some("#3b82f6"))])
    );
}

#[test]
fn selection_is_recorded_even_when_surface_rejects() {
    let handle = SurfaceHandle::new(RecordingSurface::rejecting(&["text-color"]));
    let mut state = ToolbarState::default();
    let pink = ColorSelection::from(&TEXT_PALETTE[7]);

    let result = state.select_color(ColorKind::Text, pink.clone(), &handle.adapter());

    assert_eq!(
        result,
        Err(CommandApplicationFailure::Rejected {
            command: "text-color".to_string()
        })
    );
    assert_eq!(state.color(ColorKind::Text), &pink);
    assert_eq!(handle.read(|surface| surface.calls.len()), Some(1));
}

#[test]
fn selection_is_recorded_without_a_surface() {
    let mut state = ToolbarState::default();
    let gray = ColorSelection::from(&TEXT_PALETTE[1]);

    assert!(
        state
            .select_color(ColorKind::Text, gray.clone(), &SurfaceAdapter::detached())
            .is_err()
    );
    assert_eq!(state.color(ColorKind::Text), &gray);
}

#[test]
fn exactly_one_swatch_is_active() {
    let handle = SurfaceHandle::new(RecordingSurface::default());
    let mut state = ToolbarState::default();
    let green = &TEXT_PALETTE[4];

    assert_eq!(
        state.indicator(ColorKind::Text, green),
        SwatchIndicator::Idle
    );
    assert_eq!(state.indicator(ColorKind::Text, green).class(), "ring-1");

    state
        .select_color(ColorKind::Text, ColorSelection::from(green), &handle.adapter())
        .unwrap();

    for swatch in TEXT_PALETTE {
        let expected = if swatch.hex == "#22c55e" { "ring-2" } else { "ring-1" };
        assert_eq!(
            state.indicator(ColorKind::Text, swatch).class(),
            expected,
            "{}",
            swatch.label
        );
    }
}

#[test]
fn document_title_is_free_form() {
    let mut state = ToolbarState::default();
    assert_eq!(state.document_title(), "Untitled Document");

    state.set_document_title("");
    assert_eq!(state.document_title(), "");

    state.set_document_title("  Quarterly   report\n");
    assert_eq!(state.document_title(), "  Quarterly   report\n");
}

#[test]
fn mobile_menu_toggle_pairs_restore_the_original_value() {
    let mut state = ToolbarState::default();
    let original = state.is_mobile_menu_open();

    assert_eq!(state.toggle_mobile_menu(), !original);
    assert_eq!(state.toggle_mobile_menu(), original);
    assert_eq!(state.is_mobile_menu_open(), original);
}
