//! Allocation of an order line across candidate batches.

use tracing::{debug, warn};

use stockroom_core::{BatchRef, DomainError, DomainResult};

use crate::batch::{Batch, OrderLine};

/// Allocate an order line to the preferred capable batch.
///
/// Preference is the eta order: in-stock batches (`eta == None`) before
/// incoming shipments, earlier arrivals before later ones, the first-listed
/// batch winning ties. In-stock supply minimizes fulfillment latency; the
/// earliest shipment minimizes customer wait when it doesn't suffice.
/// Exactly one batch is mutated; its reference is returned.
///
/// # Errors
///
/// Returns [`DomainError::OutOfStock`] when no candidate matches the line's
/// sku with enough available quantity. No batch is mutated in that case.
pub fn allocate(line: &OrderLine, batches: &mut [Batch]) -> DomainResult<BatchRef> {
    let preferred = batches
        .iter_mut()
        .filter(|batch| batch.can_allocate(line))
        .min_by_key(|batch| batch.eta());

    match preferred {
        Some(batch) => {
            batch.allocate(line.clone());
            debug!(
                batch = %batch.reference(),
                order_id = %line.order_id,
                sku = %line.sku,
                quantity = line.quantity,
                "allocated order line"
            );
            Ok(batch.reference().clone())
        }
        None => {
            warn!(sku = %line.sku, quantity = line.quantity, "out of stock");
            Err(DomainError::out_of_stock(line.sku.as_str()))
        }
    }
}
