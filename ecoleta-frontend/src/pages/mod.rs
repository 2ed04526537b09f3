mod create_point;
mod home;

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    #[default]
    Home,
    CreatePoint,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::CreatePoint => "/create-point",
        }
    }
}

pub use self::{create_point::*, home::*};
