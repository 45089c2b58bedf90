//! The ticket purchase flow.
//!
//! A small state machine spanning modal visibility, ticket-type and quantity
//! selection, derived total computation, and validated submission. The modal
//! session owns its selection: it is created on open and destroyed on close,
//! cancel, or successful submit, and the displayed total is recomputed by
//! every path that changes its inputs.

mod actions;
mod processor;
mod reducer;
mod types;

pub use actions::PurchaseAction;
pub use processor::{
    MockOrderProcessor, OrderProcessor, OrderProcessorError, OrderReceipt, ProcessorResult,
    RecordingOrderProcessor,
};
pub use reducer::{PurchaseEnvironment, PurchaseReducer};
pub use types::{
    ContactDetails, ModalState, Order, PurchaseError, PurchaseSelection, PurchaseState, Quantity,
};
