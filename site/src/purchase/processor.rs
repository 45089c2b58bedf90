//! Order processor hand-off boundary.
//!
//! The purchase flow hands completed orders to an external payment/order
//! system and does not await the outcome. The trait keeps that boundary
//! explicit; the mock implementation stands in for a real integration and
//! always succeeds.

use crate::purchase::types::Order;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Order processor result
pub type ProcessorResult<T> = Result<T, OrderProcessorError>;

/// Order processor error
///
/// The mock never produces these; a real integration would.
#[derive(Debug, Clone, Error)]
pub enum OrderProcessorError {
    /// The processor refused the order
    #[error("Order rejected: {reason}")]
    Rejected {
        /// Why the order was refused
        reason: String,
    },

    /// The processor did not answer in time
    #[error("Processor timeout")]
    Timeout,
}

/// Acknowledgement returned by the processor
#[derive(Debug, Clone)]
pub struct OrderReceipt {
    /// Processor-assigned confirmation identifier
    pub confirmation_id: String,
}

/// Abstraction over the external payment/order system
pub trait OrderProcessor: Send + Sync {
    /// Submit an order for processing
    ///
    /// # Errors
    ///
    /// Returns an error if the processor refuses or times out.
    fn submit(&self, order: Order) -> Pin<Box<dyn Future<Output = ProcessorResult<OrderReceipt>> + Send>>;
}

/// Mock order processor (always succeeds for development)
///
/// Simulates a short processing delay and logs the hand-off. In production,
/// replace with a real payment/order integration.
#[derive(Clone, Debug)]
pub struct MockOrderProcessor;

impl MockOrderProcessor {
    /// Creates a new mock order processor
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn OrderProcessor> {
        Arc::new(Self::new())
    }
}

impl Default for MockOrderProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderProcessor for MockOrderProcessor {
    fn submit(&self, order: Order) -> Pin<Box<dyn Future<Output = ProcessorResult<OrderReceipt>> + Send>> {
        Box::pin(async move {
            // Simulate processing delay
            tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

            let confirmation_id = format!("mock_order_{}", uuid::Uuid::new_v4());

            tracing::info!(
                ticket_type = %order.ticket_type,
                quantity = order.quantity,
                total = %order.total,
                confirmation_id = %confirmation_id,
                "Mock order processed successfully"
            );

            Ok(OrderReceipt { confirmation_id })
        })
    }
}

/// Order processor test double that records submitted orders
///
/// Succeeds immediately; inspect [`submitted`](Self::submitted) to assert on
/// the hand-off payload.
#[derive(Clone, Debug, Default)]
pub struct RecordingOrderProcessor {
    submitted: Arc<Mutex<Vec<Order>>>,
}

impl RecordingOrderProcessor {
    /// Creates a new recording processor
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders submitted so far, in submission order
    #[must_use]
    pub fn submitted(&self) -> Vec<Order> {
        self.submitted.lock().map(|orders| orders.clone()).unwrap_or_default()
    }
}

impl OrderProcessor for RecordingOrderProcessor {
    fn submit(&self, order: Order) -> Pin<Box<dyn Future<Output = ProcessorResult<OrderReceipt>> + Send>> {
        let submitted = Arc::clone(&self.submitted);
        Box::pin(async move {
            let confirmation_id = format!("recorded_order_{}", uuid::Uuid::new_v4());
            if let Ok(mut orders) = submitted.lock() {
                orders.push(order);
            }
            Ok(OrderReceipt { confirmation_id })
        })
    }
}
