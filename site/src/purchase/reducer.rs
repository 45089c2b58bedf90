//! Reducer for the purchase flow.

use crate::catalog::TicketCatalog;
use crate::chrome::viewport::Viewport;
use crate::notifications::Notice;
use crate::purchase::actions::PurchaseAction;
use crate::purchase::processor::OrderProcessor;
use crate::purchase::types::{
    ContactDetails, Order, PurchaseError, PurchaseSelection, PurchaseState, Quantity,
};
use crate::validation::is_valid_email;
use stagepass_core::{SmallVec, effect::Effect, environment::Clock, reducer::Reducer, smallvec};
use std::sync::Arc;

/// Environment dependencies for the purchase reducer
#[derive(Clone)]
pub struct PurchaseEnvironment {
    /// Clock for time-based operations
    pub clock: Arc<dyn Clock>,
    /// The immutable pricing table
    pub catalog: Arc<TicketCatalog>,
    /// External payment/order system
    pub processor: Arc<dyn OrderProcessor>,
    /// The page, for background scroll locking while the modal is open
    pub viewport: Arc<dyn Viewport>,
}

impl PurchaseEnvironment {
    /// Creates a new `PurchaseEnvironment`
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        catalog: Arc<TicketCatalog>,
        processor: Arc<dyn OrderProcessor>,
        viewport: Arc<dyn Viewport>,
    ) -> Self {
        Self {
            clock,
            catalog,
            processor,
            viewport,
        }
    }
}

/// Reducer for the ticket purchase state machine
///
/// States are `Closed` and `Open(selection)`; the transitions are:
///
/// - `Closed --OpenFor--> Open` (requires a catalog entry)
/// - `Open --SetQuantity--> Open` (total recomputed)
/// - `Open --Submit--> Closed` on success, `Open` unchanged on validation
///   failure
/// - `Open --Cancel--> Closed`
///
/// No operation can leave the session open with a quantity below one or
/// without a ticket type, and the displayed total is recomputed before any
/// quantity or type change settles.
#[derive(Clone, Debug)]
pub struct PurchaseReducer;

impl PurchaseReducer {
    /// Creates a new `PurchaseReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates submitted contact details, failing fast on the first problem
    fn validate(details: &ContactDetails) -> Result<(), PurchaseError> {
        if details.full_name.is_empty() || details.email.is_empty() || details.phone.is_empty() {
            return Err(PurchaseError::MissingFields);
        }

        if !is_valid_email(&details.email) {
            return Err(PurchaseError::InvalidEmail);
        }

        Ok(())
    }

    /// The fire-and-forget hand-off to the order processor
    ///
    /// Nothing is fed back: the stub cannot fail, and no retry or pending
    /// state exists for it. The acknowledgement is logged and dropped.
    fn hand_off(
        processor: Arc<dyn OrderProcessor>,
        order: Order,
    ) -> Effect<PurchaseAction> {
        Effect::Future(Box::pin(async move {
            match processor.submit(order).await {
                Ok(receipt) => {
                    tracing::debug!(
                        confirmation_id = %receipt.confirmation_id,
                        "Order hand-off acknowledged"
                    );
                },
                Err(error) => {
                    tracing::error!(%error, "Order hand-off failed");
                },
            }
            None
        }))
    }

    fn scroll_lock(viewport: Arc<dyn Viewport>, locked: bool) -> Effect<PurchaseAction> {
        Effect::Future(Box::pin(async move {
            viewport.set_scroll_lock(locked);
            None
        }))
    }
}

impl Default for PurchaseReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for PurchaseReducer {
    type State = PurchaseState;
    type Action = PurchaseAction;
    type Environment = PurchaseEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            PurchaseAction::OpenFor { ticket_type } => {
                let entry = match env.catalog.entry(ticket_type) {
                    Ok(entry) => entry,
                    Err(error) => {
                        // Mis-edited catalog configuration; refuse the open
                        // and leave state untouched
                        tracing::error!(%error, "Refusing to open purchase modal");
                        state.push_notice(Notice::error(
                            "Tickets of this type are currently unavailable",
                        ));
                        return smallvec![Effect::None];
                    },
                };

                tracing::info!(%ticket_type, "Opening purchase modal");
                state.open(PurchaseSelection::new(entry));

                smallvec![Self::scroll_lock(Arc::clone(&env.viewport), true)]
            },

            PurchaseAction::SetQuantity { requested } => {
                let Some(selection) = state.selection_mut() else {
                    tracing::debug!("Quantity change with no open modal, ignoring");
                    return smallvec![Effect::None];
                };

                selection.set_quantity(Quantity::clamp(requested));
                smallvec![Effect::None]
            },

            PurchaseAction::Submit { details } => {
                let Some(selection) = state.selection() else {
                    tracing::debug!("Submit with no open modal, ignoring");
                    return smallvec![Effect::None];
                };

                if let Err(error) = Self::validate(&details) {
                    tracing::info!(%error, "Purchase submission rejected");
                    state.push_notice(Notice::error(error.to_string()));
                    // Session stays open, selection intact, for retry
                    return smallvec![Effect::None];
                }

                let order = Order {
                    ticket_type: selection.ticket_type(),
                    display_name: selection.display_name().to_string(),
                    quantity: selection.quantity().get(),
                    full_name: details.full_name,
                    email: details.email,
                    phone: details.phone,
                    total: selection.total(),
                };

                tracing::info!(
                    ticket_type = %order.ticket_type,
                    quantity = order.quantity,
                    total = %order.total,
                    "Purchase submitted"
                );

                state.close();
                state.push_notice(Notice::success(
                    "Ticket purchase successful! Check your email for confirmation.",
                ));

                smallvec![
                    Self::hand_off(Arc::clone(&env.processor), order),
                    Self::scroll_lock(Arc::clone(&env.viewport), false),
                ]
            },

            PurchaseAction::Cancel => {
                if !state.is_open() {
                    // Idempotent: cancelling a closed modal changes nothing
                    return smallvec![Effect::None];
                }

                tracing::info!("Purchase modal cancelled");
                state.close();

                smallvec![Self::scroll_lock(Arc::clone(&env.viewport), false)]
            },
        }
    }
}
