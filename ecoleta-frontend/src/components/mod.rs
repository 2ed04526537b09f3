mod dropzone;
mod item_grid;
mod map;
mod remote_error;
mod select;

pub use self::{dropzone::*, item_grid::*, map::*, remote_error::*, select::*};
