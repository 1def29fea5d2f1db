use std::cell::RefCell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::{Rc, Weak};

use thiserror::Error;

use crate::command::{CommandName, FormatCommand};

/// Failure reported by a host editing surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("command is not supported by this surface")]
    Unsupported,

    #[error("{0}")]
    Failed(String),
}

/// The host's editable region. Owns content, selection and its own history.
///
/// `Ok(true)` means the command was executed, `Ok(false)` that the host declined it.
pub trait EditableSurface {
    fn exec_command(&mut self, name: &str, value: Option<&str>) -> Result<bool, SurfaceError>;
}

/// Why a command did not reach the editing surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandApplicationFailure {
    #[error("{command}: editing surface is unavailable")]
    SurfaceUnavailable { command: String },

    #[error("{command}: editing surface is busy")]
    SurfaceBusy { command: String },

    #[error("{command}: rejected by the editing surface")]
    Rejected { command: String },

    #[error("{command}: {source}")]
    Host {
        command: String,
        #[source]
        source: SurfaceError,
    },

    #[error("{command}: editing surface panicked")]
    Panicked { command: String },
}

impl CommandApplicationFailure {
    pub fn command(&self) -> &str {
        match self {
            Self::SurfaceUnavailable { command }
            | Self::SurfaceBusy { command }
            | Self::Rejected { command }
            | Self::Host { command, .. }
            | Self::Panicked { command } => command,
        }
    }
}

/// Owning handle to the single editing region.
///
/// Created and dropped by the view that mounts the region. Adapters only hold a
/// weak reference, so once the handle is dropped every dispatch reports
/// [`CommandApplicationFailure::SurfaceUnavailable`].
pub struct SurfaceHandle<S: EditableSurface + 'static> {
    surface: Rc<RefCell<S>>,
}

impl<S: EditableSurface + 'static> SurfaceHandle<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface: Rc::new(RefCell::new(surface)),
        }
    }

    pub fn adapter(&self) -> SurfaceAdapter {
        let surface = Rc::downgrade(&self.surface);
        let surface: Weak<RefCell<dyn EditableSurface>> = surface;
        SurfaceAdapter { surface }
    }

    /// Read-only access for rendering. Mutation goes through [`SurfaceAdapter`].
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.surface.try_borrow().ok().map(|surface| f(&surface))
    }
}

/// The single entry point through which toolbar actions reach the editing surface.
#[derive(Clone)]
pub struct SurfaceAdapter {
    surface: Weak<RefCell<dyn EditableSurface>>,
}

impl SurfaceAdapter {
    /// An adapter that is not attached to any surface. Every dispatch fails.
    pub fn detached() -> Self {
        let surface = Weak::<RefCell<DetachedSurface>>::new();
        let surface: Weak<RefCell<dyn EditableSurface>> = surface;
        Self { surface }
    }

    pub fn is_attached(&self) -> bool {
        self.surface.strong_count() > 0
    }

    pub fn apply(&self, command: &FormatCommand) -> Result<(), CommandApplicationFailure> {
        self.apply_name(command.name.as_str(), command.value())
    }

    /// Wire-level form: any name is forwarded unchecked, the host decides.
    pub fn apply_raw(&self, name: &str, value: Option<&str>) -> bool {
        if name.parse::<CommandName>().is_err() {
            log::debug!("forwarding unknown command {name:?} to the editing surface");
        }
        self.apply_name(name, value).is_ok()
    }

    fn apply_name(&self, name: &str, value: Option<&str>) -> Result<(), CommandApplicationFailure> {
        let result = self.exec(name, value);
        match &result {
            Ok(()) => log::debug!("applied {name} {value:?}"),
            Err(CommandApplicationFailure::Panicked { .. }) => {
                log::error!("editing surface panicked while applying {name} {value:?}")
            }
            Err(err) => log::warn!("failed to apply command: {err}"),
        }
        result
    }

    fn exec(&self, name: &str, value: Option<&str>) -> Result<(), CommandApplicationFailure> {
        let command = name.to_string();
        let Some(surface) = self.surface.upgrade() else {
            return Err(CommandApplicationFailure::SurfaceUnavailable { command });
        };
        let Ok(mut surface) = surface.try_borrow_mut() else {
            return Err(CommandApplicationFailure::SurfaceBusy { command });
        };

        match catch_unwind(AssertUnwindSafe(|| surface.exec_command(name, value))) {
            Ok(Ok(true)) => Ok(()),
            Ok(Ok(false)) => Err(CommandApplicationFailure::Rejected { command }),
            Ok(Err(source)) => Err(CommandApplicationFailure::Host { command, source }),
            Err(_) => Err(CommandApplicationFailure::Panicked { command }),
        }
    }
}

impl Default for SurfaceAdapter {
    fn default() -> Self {
        Self::detached()
    }
}

struct DetachedSurface;

impl EditableSurface for DetachedSurface {
    fn exec_command(&mut self, _: &str, _: Option<&str>) -> Result<bool, SurfaceError> {
        Ok(false)
    }
}
