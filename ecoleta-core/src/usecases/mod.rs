//! Asynchronous steps of the "create point" workflow.
//!
//! A use case never touches [`CreatePointState`](crate::state::CreatePointState)
//! directly: the caller issues a request, awaits the use case and
//! applies the outcome. This keeps the state transitions synchronous
//! and independent of the async runtime.

mod bootstrap;
mod catalog;
mod geography;
mod submit;

#[cfg(test)]
pub mod tests;

pub use self::{bootstrap::*, catalog::*, geography::*, submit::*};

mod prelude {
    pub use crate::{entities::*, gateways::*};
}
