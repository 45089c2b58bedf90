//! Actions for the purchase flow.

use crate::catalog::TicketType;
use crate::purchase::types::ContactDetails;
use serde::{Deserialize, Serialize};

/// Actions processed by the purchase reducer
///
/// These are the named input events of the purchase state machine. The shell
/// forwards ticket-card clicks, quantity changes, form submissions, and
/// close/backdrop clicks as these actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PurchaseAction {
    /// Open the purchase modal for a ticket type
    ///
    /// Starts a fresh modal session: quantity one, total equal to the unit
    /// price. Requires a catalog entry for the type.
    OpenFor {
        /// The ticket type to purchase
        ticket_type: TicketType,
    },

    /// Change the selected quantity
    ///
    /// The raw count is normalized: anything below one becomes one. The
    /// displayed total is recomputed before the change is considered settled.
    /// Ignored while the modal is closed.
    SetQuantity {
        /// Requested count, as coerced from the quantity control
        requested: i64,
    },

    /// Submit the purchase with the buyer's details
    ///
    /// Validates (missing fields first, then email shape), and on success
    /// hands the order off and closes the modal. On failure the session stays
    /// open, selection intact, for retry.
    Submit {
        /// Buyer details collected from the form
        details: ContactDetails,
    },

    /// Close the modal without purchasing
    ///
    /// Triggered by the explicit close control or a click on the modal
    /// backdrop. A no-op when already closed.
    Cancel,
}
