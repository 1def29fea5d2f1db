mod support;

use gpui_manos_toolbar_core::{
    CommandApplicationFailure, CommandName, FormatCommand, SurfaceAdapter, SurfaceError,
    SurfaceHandle,
};
use support::{RecordingSurface, call};

#[test]
fn apply_forwards_name_and_value() {
    let handle = SurfaceHandle::new(RecordingSurface::default());
    let adapter = handle.adapter();

    assert_eq!(adapter.apply(&FormatCommand::new(CommandName::ToggleBold)), Ok(()));
    assert_eq!(
        adapter.apply(&FormatCommand::with_value(CommandName::FontSize, "5")),
        Ok(())
    );

    assert_eq!(
        handle.read(|surface| surface.calls.clone()),
        Some(vec![
            call("toggle-bold", None),
            call("font-size", Some("5")),
        ])
    );
}

#[test]
fn declined_command_is_a_rejection() {
    let handle = SurfaceHandle::new(RecordingSurface::rejecting(&["subscript"]));
    let adapter = handle.adapter();

    let err = adapter
        .apply(&FormatCommand::new(CommandName::Subscript))
        .unwrap_err();
    assert_eq!(
        err,
        CommandApplicationFailure::Rejected {
            command: "subscript".to_string()
        }
    );
    assert_eq!(err.command(), "subscript");
    assert!(!adapter.apply_raw("subscript", None));
}

#[test]
fn host_error_is_reduced_to_failure() {
    let handle = SurfaceHandle::new(RecordingSurface::failing(&["redo"]));
    let adapter = handle.adapter();

    assert_eq!(
        adapter.apply(&FormatCommand::new(CommandName::Redo)),
        Err(CommandApplicationFailure::Host {
            command: "redo".to_string(),
            source: SurfaceError::Failed("cannot redo".to_string()),
        })
    );
    assert!(!adapter.apply_raw("redo", None));
}

#[test]
fn host_panic_never_escapes_apply() {
    let handle = SurfaceHandle::new(RecordingSurface::panicking(&["toggle-italic"]));
    let adapter = handle.adapter();

    assert!(!adapter.apply_raw("toggle-italic", None));
    assert_eq!(
        adapter.apply(&FormatCommand::new(CommandName::ToggleItalic)),
        Err(CommandApplicationFailure::Panicked {
            command: "toggle-italic".to_string()
        })
    );

    // The surface is still usable afterwards.
    assert!(adapter.apply_raw("toggle-bold", None));
    assert_eq!(handle.read(|surface| surface.calls.len()), Some(3));
}

#[test]
fn unknown_names_are_forwarded_unchecked() {
    let handle = SurfaceHandle::new(RecordingSurface::default());
    let adapter = handle.adapter();

    assert!(adapter.apply_raw("insertHorizontalRule", None));
    assert_eq!(
        handle.read(|surface| surface.calls.clone()),
        Some(vec![call("insertHorizontalRule", None)])
    );
}

#[test]
fn dropped_handle_makes_surface_unavailable() {
    let handle = SurfaceHandle::new(RecordingSurface::default());
    let adapter = handle.adapter();
    assert!(adapter.is_attached());

    drop(handle);

    assert!(!adapter.is_attached());
    assert_eq!(
        adapter.apply(&FormatCommand::new(CommandName::Undo)),
        Err(CommandApplicationFailure::SurfaceUnavailable {
            command: "undo".to_string()
        })
    );
    assert!(!SurfaceAdapter::detached().apply_raw("undo", None));
}

#[test]
fn reentrant_apply_reports_busy() {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gpui_manos_toolbar_core::EditableSurface;

    struct Reentrant {
        adapter: Rc<RefCell<Option<SurfaceAdapter>>>,
        nested: Option<Result<(), CommandApplicationFailure>>,
    }

    impl EditableSurface for Reentrant {
        fn exec_command(&mut self, _: &str, _: Option<&str>) -> Result<bool, SurfaceError> {
            if let Some(adapter) = self.adapter.borrow().as_ref() {
                self.nested = Some(adapter.apply(&FormatCommand::new(CommandName::Undo)));
            }
            Ok(true)
        }
    }

    let slot = Rc::new(RefCell::new(None));
    let handle = SurfaceHandle::new(Reentrant {
        adapter: slot.clone(),
        nested: None,
    });
    *slot.borrow_mut() = Some(handle.adapter());

    assert!(handle.adapter().apply_raw("redo", None));
    assert_eq!(
        handle.read(|surface| surface.nested.clone()),
        Some(Some(Err(CommandApplicationFailure::SurfaceBusy {
            command: "undo".to_string()
        })))
    );
}
