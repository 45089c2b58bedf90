//! Types for the purchase flow.

use crate::catalog::{CatalogEntry, Price, TicketType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of tickets in a selection, always at least one
///
/// The quantity control accepts arbitrary input; anything that does not
/// coerce to a positive integer is normalized to one. This is the shipped
/// fallback behavior, kept deliberately: the selector defaults to a valid
/// order rather than rejecting garbage input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Quantity(u32);

impl Quantity {
    /// The minimum (and default) quantity
    pub const ONE: Self = Self(1);

    /// Normalizes a requested count to a valid quantity
    ///
    /// Values below one (including zero and negatives) become one; values
    /// beyond `u32::MAX` saturate.
    #[must_use]
    pub fn clamp(requested: i64) -> Self {
        if requested < 1 {
            return Self::ONE;
        }
        Self(u32::try_from(requested).unwrap_or(u32::MAX))
    }

    /// Parses free-form input, falling back to one on garbage
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.trim().parse::<i64>().map_or(Self::ONE, Self::clamp)
    }

    /// The count as a plain integer
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Buyer details collected at submit time
///
/// Ephemeral: the purchase flow never stores these; they exist only inside
/// the submit action and the resulting order hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    /// Buyer's full name
    pub full_name: String,
    /// Buyer's email address
    pub email: String,
    /// Buyer's phone number
    pub phone: String,
}

/// The user's in-progress choice during an open modal session
///
/// Invariant: `total == unit_price × quantity` at all times. Both mutating
/// paths (construction and `set_quantity`) recompute the total, so it can
/// never drift from its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSelection {
    ticket_type: TicketType,
    display_name: String,
    unit_price: Price,
    quantity: Quantity,
    total: Price,
}

impl PurchaseSelection {
    /// Starts a selection for a catalog entry with quantity one
    #[must_use]
    pub fn new(entry: &CatalogEntry) -> Self {
        let quantity = Quantity::ONE;
        Self {
            ticket_type: entry.ticket_type,
            display_name: entry.display_name.clone(),
            unit_price: entry.unit_price,
            quantity,
            total: entry.unit_price.total(quantity.get()),
        }
    }

    /// Changes the quantity, recomputing the total
    pub fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
        self.total = self.unit_price.total(quantity.get());
    }

    /// The selected ticket type
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Display name of the selected ticket type
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Unit price of the selected ticket type
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Selected quantity
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// The derived total: unit price × quantity
    #[must_use]
    pub const fn total(&self) -> Price {
        self.total
    }
}

/// Visibility of the single purchase modal
///
/// A selection exists exactly while the modal is open, so "modal open with no
/// ticket type" is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalState {
    /// Modal hidden, no selection
    Closed,
    /// Modal visible with the session's selection
    Open(PurchaseSelection),
}

impl Default for ModalState {
    fn default() -> Self {
        Self::Closed
    }
}

/// The order payload handed to the external processor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Selected ticket type
    pub ticket_type: TicketType,
    /// Display name of the ticket type
    pub display_name: String,
    /// Number of tickets
    pub quantity: u32,
    /// Buyer's full name
    pub full_name: String,
    /// Buyer's email address
    pub email: String,
    /// Buyer's phone number
    pub phone: String,
    /// Total price at hand-off time
    pub total: Price,
}

/// User-recoverable validation failures during submit
///
/// The display strings are the user-facing notification messages. Validation
/// fails fast: missing fields are reported before email shape, and only the
/// first failure is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// One or more required fields were left empty
    #[error("Please fill in all required fields")]
    MissingFields,

    /// The email address does not match the required shape
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// State of the purchase feature
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchaseState {
    modal: ModalState,
    pending_notice: Option<crate::notifications::Notice>,
}

impl PurchaseState {
    /// Creates a closed purchase state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the modal is open
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.modal, ModalState::Open(_))
    }

    /// The current modal state
    #[must_use]
    pub const fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// The open session's selection, if any
    #[must_use]
    pub const fn selection(&self) -> Option<&PurchaseSelection> {
        match &self.modal {
            ModalState::Open(selection) => Some(selection),
            ModalState::Closed => None,
        }
    }

    /// Mutable access to the open session's selection
    pub(crate) fn selection_mut(&mut self) -> Option<&mut PurchaseSelection> {
        match &mut self.modal {
            ModalState::Open(selection) => Some(selection),
            ModalState::Closed => None,
        }
    }

    /// Opens a modal session with the given selection
    pub(crate) fn open(&mut self, selection: PurchaseSelection) {
        self.modal = ModalState::Open(selection);
    }

    /// Closes the modal session, destroying the selection
    pub(crate) fn close(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Records a notice for the site-level reducer to surface
    pub(crate) fn push_notice(&mut self, notice: crate::notifications::Notice) {
        self.pending_notice = Some(notice);
    }

    /// Drains the pending notice, if any
    pub fn take_notice(&mut self) -> Option<crate::notifications::Notice> {
        self.pending_notice.take()
    }
}
