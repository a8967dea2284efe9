//! Trellis: form-field widgets and a dropdown menu over a markdom tree.

pub mod config;
pub mod error;
pub mod handler_context;
pub mod logging;
pub mod prelude;
pub mod runtime;
pub mod state;
pub mod theme;
pub mod widgets;

pub use error::TrellisError;
pub use handler_context::{Callback, Handler, HandlerContext, HandlerRegistry, Listener};
pub use runtime::{DispatchResult, Runtime, View};
pub use state::State;
