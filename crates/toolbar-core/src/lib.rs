mod command;
mod encoder;
mod palette;
mod state;
mod surface;
mod toolbar;

pub use crate::command::*;
pub use crate::encoder::*;
pub use crate::palette::*;
pub use crate::state::*;
pub use crate::surface::*;
pub use crate::toolbar::*;
