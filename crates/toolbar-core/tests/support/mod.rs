#![allow(dead_code)]

use gpui_manos_toolbar_core::{EditableSurface, SurfaceError};

pub type Call = (String, Option<String>);

/// Accepts everything and remembers what it was asked to do.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
    pub reject: Vec<&'static str>,
    pub fail: Vec<&'static str>,
    pub panic_on: Vec<&'static str>,
}

impl RecordingSurface {
    pub fn rejecting(names: &[&'static str]) -> Self {
        Self {
            reject: names.to_vec(),
            ..Self::default()
        }
    }

    pub fn failing(names: &[&'static str]) -> Self {
        Self {
            fail: names.to_vec(),
            ..Self::default()
        }
    }

    pub fn panicking(names: &[&'static str]) -> Self {
        Self {
            panic_on: names.to_vec(),
            ..Self::default()
        }
    }
}

impl EditableSurface for RecordingSurface {
    fn exec_command(&mut self, name: &str, value: Option<&str>) -> Result<bool, SurfaceError> {
        self.calls
            .push((name.to_string(), value.map(str::to_string)));
        if self.panic_on.contains(&name) {
            panic!("host blew up on {name}");
        }
        if self.fail.contains(&name) {
            return Err(SurfaceError::Failed(format!("cannot {name}")));
        }
        Ok(!self.reject.contains(&name))
    }
}

pub fn call(name: &str, value: Option<&str>) -> Call {
    (name.to_string(), value.map(str::to_string))
}
