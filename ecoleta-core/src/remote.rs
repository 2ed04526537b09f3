use crate::error::GatewayError;

/// Load state of data that is fetched from a remote service.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    NotAsked,
    Loading,
    Loaded(T),
    Failed(GatewayError),
}

impl<T> Remote<T> {
    pub fn from_result(result: Result<T, GatewayError>) -> Self {
        match result {
            Ok(data) => Self::Loaded(data),
            Err(err) => Self::Failed(err),
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// A (re)load may only be started if nothing is pending or loaded.
    pub const fn can_load(&self) -> bool {
        matches!(self, Self::NotAsked | Self::Failed(_))
    }

    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub const fn error(&self) -> Option<&GatewayError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> Remote<Vec<T>> {
    /// The loaded elements or nothing.
    pub fn as_slice(&self) -> &[T] {
        self.loaded().map(Vec::as_slice).unwrap_or_default()
    }
}
