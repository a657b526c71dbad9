//! Core data model for a stream pipeline flow editor: named flows of typed
//! URI-like step descriptors with validated mutation, positional reordering,
//! snapshot undo/redo history, and a JSON interchange document.
//!
//! Rendering and interaction live in a separate presentation layer that calls
//! into these modules and re-renders from the returned state; nothing here
//! executes a step descriptor.
#![forbid(unsafe_code)]

pub mod error;
pub mod filter;
pub mod history;
pub mod interchange;
pub mod model;
pub mod session;
pub mod step;
pub mod store;

pub use error::{FlowError, Result};
pub use history::HistoryLog;
pub use model::{Flow, FlowId};
pub use session::EditSession;
pub use step::{StepKind, classify, validate};
pub use store::FlowCollection;
