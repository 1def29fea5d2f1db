mod support;

use gpui_manos_toolbar_core::{
    BlockType, ButtonCommand, ColorKind, ColorSelection, CommandName, Control, FontSize,
    FormatCommand, HIGHLIGHT_PALETTE, SurfaceHandle, SurfaceKind, TEXT_PALETTE, TokenError,
    ToolbarAction, ToolbarSurface,
};
use support::{RecordingSurface, call};

#[test]
fn surfaces_keep_independent_color_state() {
    let handle = SurfaceHandle::new(RecordingSurface::default());
    let mut navbar = ToolbarSurface::persistent(handle.adapter());
    let mut context = ToolbarSurface::contextual(handle.adapter());

    let purple = ColorSelection::from(&TEXT_PALETTE[6]);
    assert!(context.select_color(ColorKind::Text, purple.clone()).applied());

    assert_eq!(context.state().color(ColorKind::Text), &purple);
    assert_eq!(navbar.state().color(ColorKind::Text).label, "White");

    let lime = ColorSelection::from(&HIGHLIGHT_PALETTE[4]);
    assert!(navbar.select_color(ColorKind::Highlight, lime.clone()).applied());

    assert_eq!(navbar.state().color(ColorKind::Highlight), &lime);
    assert_eq!(context.state().color(ColorKind::Highlight).label, "Black");
    assert_eq!(context.state().color(ColorKind::Text), &purple);

    assert_eq!(
        handle.read(|surface| surface.calls.clone()),
        Some(vec![
            call("text-color", Some("#a855f7")),
            call("highlight-color", Some("#65a30d")),
        ])
    );
}

#[test]
fn bold_dispatch_leaves_state_untouched() {
    let handle = SurfaceHandle::new(RecordingSurface::default());
    let mut navbar = ToolbarSurface::persistent(handle.adapter());
    let before = navbar.state().clone();

    let dispatched = navbar.dispatch(ButtonCommand::Bold.into());

    assert!(dispatched.applied());
    assert_eq!(dispatched.command, FormatCommand::new(CommandName::ToggleBold));
    assert_eq!(navbar.state(), &before);
    assert_eq!(
        handle.read(|surface| surface.calls.clone()),
        Some(vec![call("toggle-bold", None)])
    );
}

#[test]
fn green_swatch_switches_ring() {
    let handle = SurfaceHandle::new(RecordingSurface::default());
    let mut context = ToolbarSurface::contextual(handle.adapter());
    let green = TEXT_PALETTE
        .iter()
        .find(|swatch| swatch.hex == "#22c55e")
        .unwrap();

    assert_eq!(context.state().indicator(ColorKind::Text, green).class(), "ring-1");

    let dispatched = context.dispatch(ToolbarAction::Color(
        ColorKind::Text,
        ColorSelection::from(green),
    ));

    assert_eq!(
        dispatched.command,
        FormatCommand::with_value(CommandName::TextColor, "#22c55e")
    );
    assert_eq!(context.state().color(ColorKind::Text).label, "Green");
    let active: Vec<&str> = TEXT_PALETTE
        .iter()
        .filter(|swatch| context.state().indicator(ColorKind::Text, swatch).is_active())
        .map(|swatch| swatch.label)
        .collect();
    assert_eq!(active, ["Green"]);
}

#[test]
fn block_dispatch_reaches_surface_as_format_block() {
    let handle = SurfaceHandle::new(RecordingSurface::default());
    let mut context = ToolbarSurface::contextual(handle.adapter());

    context.dispatch(BlockType::Heading { level: 2 }.into());
    context.dispatch(BlockType::OrderedList.into());

    assert_eq!(
        handle.read(|surface| surface.calls.clone()),
        Some(vec![
            call("format-block", Some("<h2>")),
            call("insert-ordered-list", None),
        ])
    );
}

#[test]
fn failed_dispatch_is_reported_to_the_caller() {
    let handle = SurfaceHandle::new(RecordingSurface::rejecting(&["font-size"]));
    let mut navbar = ToolbarSurface::persistent(handle.adapter());

    let dispatched = navbar.dispatch(FontSize::from_ordinal(4).unwrap().into());

    assert!(!dispatched.applied());
    assert_eq!(dispatched.command.value(), Some("4"));
}

#[test]
fn custom_color_is_validated_before_dispatch() {
    let handle = SurfaceHandle::new(RecordingSurface::default());
    let mut navbar = ToolbarSurface::persistent(handle.adapter());

    assert_eq!(
        navbar
            .select_custom_color(ColorKind::Text, "#12")
            .unwrap_err(),
        TokenError::InvalidColor("#12".to_string())
    );
    assert_eq!(handle.read(|surface| surface.calls.len()), Some(0));
    assert_eq!(navbar.state().color(ColorKind::Text).label, "White");

    let dispatched = navbar
        .select_custom_color(ColorKind::Highlight, "#0F0")
        .unwrap();
    assert!(dispatched.applied());
    assert_eq!(navbar.state().color(ColorKind::Highlight).hex, "#00ff00");
    assert!(
        HIGHLIGHT_PALETTE
            .iter()
            .all(|swatch| !navbar.state().indicator(ColorKind::Highlight, swatch).is_active())
    );
}

#[test]
fn layouts_differ_between_surfaces() {
    let persistent = SurfaceKind::Persistent;
    let contextual = SurfaceKind::Contextual;

    for control in [
        Control::Title,
        Control::MobileMenu,
        Control::FontFamily,
        Control::FontSize,
        Control::Button(ButtonCommand::Undo),
        Control::Button(ButtonCommand::Redo),
        Control::CustomColor(ColorKind::Text),
    ] {
        assert!(persistent.has_control(control), "{control:?}");
        assert!(!contextual.has_control(control), "{control:?}");
    }

    for control in [
        Control::BlockType,
        Control::Button(ButtonCommand::Superscript),
        Control::Button(ButtonCommand::Subscript),
    ] {
        assert!(contextual.has_control(control), "{control:?}");
        assert!(!persistent.has_control(control), "{control:?}");
    }

    for control in [
        Control::Button(ButtonCommand::Bold),
        Control::Button(ButtonCommand::AlignJustify),
        Control::Palette(ColorKind::Text),
        Control::Palette(ColorKind::Highlight),
    ] {
        assert!(persistent.has_control(control), "{control:?}");
        assert!(contextual.has_control(control), "{control:?}");
    }
}

#[test]
fn offers_follows_the_layout_but_dispatch_still_forwards() {
    let handle = SurfaceHandle::new(RecordingSurface::default());
    let mut context = ToolbarSurface::contextual(handle.adapter());

    let undo = ToolbarAction::Button(ButtonCommand::Undo);
    assert!(!context.offers(&undo));
    assert!(context.dispatch(undo).applied());

    let custom = ToolbarAction::Color(
        ColorKind::Text,
        ColorSelection::custom("#123456").unwrap(),
    );
    assert!(!context.offers(&custom));
    assert!(ToolbarSurface::persistent(handle.adapter()).offers(&custom));
}

#[test]
fn title_and_mobile_menu_never_touch_the_surface() {
    let handle = SurfaceHandle::new(RecordingSurface::default());
    let mut navbar = ToolbarSurface::persistent(handle.adapter());

    navbar.set_document_title("Draft");
    navbar.toggle_mobile_menu();
    navbar.toggle_mobile_menu();

    assert_eq!(navbar.state().document_title(), "Draft");
    assert!(!navbar.state().is_mobile_menu_open());
    assert_eq!(handle.read(|surface| surface.calls.len()), Some(0));
}

#[test]
fn block_dropdown_remembers_the_last_pick() {
    let handle = SurfaceHandle::new(RecordingSurface::rejecting(&["insert-ordered-list"]));
    let mut context = ToolbarSurface::contextual(handle.adapter());
    assert_eq!(context.block_type(), None);

    context.dispatch(BlockType::Heading { level: 3 }.into());
    assert_eq!(context.block_type(), Some(BlockType::Heading { level: 3 }));
    assert_eq!(context.block_type().map(BlockType::label), Some("Heading 3"));

    let dispatched = context.dispatch(BlockType::OrderedList.into());
    assert!(!dispatched.applied());
    assert_eq!(context.block_type(), Some(BlockType::OrderedList));

    context.dispatch(BlockType::Heading { level: 9 }.into());
    assert_eq!(context.block_type(), Some(BlockType::Heading { level: 6 }));

    context.dispatch(ButtonCommand::Bold.into());
    assert_eq!(context.block_type(), Some(BlockType::Heading { level: 6 }));
}

#[test]
fn adapters_report_detachment_once_the_region_is_gone() {
    let handle = SurfaceHandle::new(RecordingSurface::default());
    let navbar = ToolbarSurface::persistent(handle.adapter());
    let context = ToolbarSurface::contextual(handle.adapter());
    assert!(navbar.adapter().is_attached());
    assert!(context.adapter().is_attached());

    drop(handle);

    assert!(!navbar.adapter().is_attached());
    assert!(!context.adapter().is_attached());
}
