//! The ticket pricing table.
//!
//! A static, immutable mapping from ticket type to unit price and display
//! name, built once at startup from configuration. Changing prices or names
//! is a configuration edit, not a code change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// The ticket types the event sells
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    /// Entry for one day
    Single,
    /// Entry for all three days
    Festival,
    /// All days plus backstage perks
    Vip,
}

impl TicketType {
    /// Stable lowercase identifier, as used in markup hooks and config
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Festival => "festival",
            Self::Vip => "vip",
        }
    }
}

impl std::fmt::Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TicketType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "festival" => Ok(Self::Festival),
            "vip" => Ok(Self::Vip),
            other => Err(CatalogError::UnknownTicketType {
                ticket_type: other.to_string(),
            }),
        }
    }
}

/// A price in whole currency units
///
/// Ticket prices are whole numbers (89, 199, 399) with no minor units, so the
/// representation is a plain integer rather than a cents-based amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(u64);

impl Price {
    /// Creates a price from whole currency units
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// Returns the price in whole currency units
    #[must_use]
    pub const fn units(self) -> u64 {
        self.0
    }

    /// The total for `quantity` tickets at this unit price
    ///
    /// Saturates on overflow rather than wrapping; real catalogs never get
    /// near the boundary.
    #[must_use]
    pub const fn total(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the pricing table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// The ticket type this entry prices
    pub ticket_type: TicketType,
    /// Unit price in whole currency units
    pub unit_price: Price,
    /// Human-readable name shown in the purchase modal
    pub display_name: String,
}

impl CatalogEntry {
    /// Creates a catalog entry
    #[must_use]
    pub fn new(ticket_type: TicketType, unit_price: u64, display_name: impl Into<String>) -> Self {
        Self {
            ticket_type,
            unit_price: Price::from_units(unit_price),
            display_name: display_name.into(),
        }
    }
}

/// Errors raised by catalog lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The requested ticket type has no catalog entry
    ///
    /// With a well-formed catalog this cannot happen; it indicates a
    /// mis-edited configuration rather than a user mistake.
    #[error("no catalog entry for ticket type \"{ticket_type}\"")]
    UnknownTicketType {
        /// The identifier that failed to resolve
        ticket_type: String,
    },
}

/// The immutable pricing table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketCatalog {
    entries: BTreeMap<TicketType, CatalogEntry>,
}

impl TicketCatalog {
    /// Builds a catalog from entries (last entry wins on duplicates)
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.ticket_type, entry))
                .collect(),
        }
    }

    /// Looks up the entry for a ticket type
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownTicketType`] when the type has no entry.
    pub fn entry(&self, ticket_type: TicketType) -> Result<&CatalogEntry, CatalogError> {
        self.entries
            .get(&ticket_type)
            .ok_or_else(|| CatalogError::UnknownTicketType {
                ticket_type: ticket_type.to_string(),
            })
    }

    /// Number of entries in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in ticket-type order
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }
}

impl Default for TicketCatalog {
    /// The event's standard offering
    fn default() -> Self {
        Self::new(vec![
            CatalogEntry::new(TicketType::Single, 89, "Single Day Pass"),
            CatalogEntry::new(TicketType::Festival, 199, "3-Day Festival Pass"),
            CatalogEntry::new(TicketType::Vip, 399, "VIP Experience"),
        ])
    }
}
