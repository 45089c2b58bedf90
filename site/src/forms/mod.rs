//! Contact and newsletter form submissions.
//!
//! Both forms validate locally and surface the outcome as a notice; there is
//! no backend to deliver to, so a valid submission simply thanks the user.

mod reducer;
mod types;

pub use reducer::FormsReducer;
pub use types::{FormsAction, FormsState};
