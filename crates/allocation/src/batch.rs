use core::hash::{Hash, Hasher};
use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{BatchRef, Entity, OrderId, Sku, ValueObject};

/// Order line: one requested quantity of one product for one order.
///
/// Compared and hashed by its full attribute set, so batches can hold their
/// allocations in a set and repeat allocations of the same value dedupe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderLine {
    pub order_id: OrderId,
    pub sku: Sku,
    /// Requested quantity. Non-negative by caller contract; not validated here.
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(order_id: impl Into<OrderId>, sku: impl Into<Sku>, quantity: i64) -> Self {
        Self {
            order_id: order_id.into(),
            sku: sku.into(),
            quantity,
        }
    }
}

impl ValueObject for OrderLine {}

/// Aggregate root: Batch.
///
/// A discrete quantity of one sku, either already in the warehouse
/// (`eta == None`) or expected to arrive on a given date. Owns the set of
/// order lines allocated against it; available quantity is derived from that
/// set on every read, never cached.
#[derive(Debug, Clone)]
pub struct Batch {
    reference: BatchRef,
    sku: Sku,
    purchased_quantity: i64,
    eta: Option<NaiveDate>,
    allocations: HashSet<OrderLine>,
}

impl Batch {
    /// Create a batch with its full purchased quantity still available.
    pub fn new(
        reference: impl Into<BatchRef>,
        sku: impl Into<Sku>,
        purchased_quantity: i64,
        eta: Option<NaiveDate>,
    ) -> Self {
        Self {
            reference: reference.into(),
            sku: sku.into(),
            purchased_quantity,
            eta,
            allocations: HashSet::new(),
        }
    }

    pub fn reference(&self) -> &BatchRef {
        &self.reference
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    /// Arrival date of the shipment; `None` means the stock is already in
    /// the warehouse.
    ///
    /// `Option`'s natural order (`None` first, then ascending dates) is the
    /// allocation preference order, so this doubles as a sort key:
    /// `batches.sort_by_key(Batch::eta)`.
    pub fn eta(&self) -> Option<NaiveDate> {
        self.eta
    }

    pub fn purchased_quantity(&self) -> i64 {
        self.purchased_quantity
    }

    /// Sum of the quantities of all currently allocated lines.
    pub fn allocated_quantity(&self) -> i64 {
        self.allocations.iter().map(|line| line.quantity).sum()
    }

    /// Purchased quantity minus allocated quantity.
    ///
    /// Negative only if a caller allocated without checking `can_allocate`.
    pub fn available_quantity(&self) -> i64 {
        self.purchased_quantity - self.allocated_quantity()
    }

    /// Lines currently allocated against this batch.
    pub fn allocations(&self) -> &HashSet<OrderLine> {
        &self.allocations
    }

    /// True iff the line's sku matches and enough quantity is available.
    ///
    /// Pure predicate, no side effects. Boundary equality
    /// (`available == requested`) is allowed.
    pub fn can_allocate(&self, line: &OrderLine) -> bool {
        self.sku == line.sku && self.available_quantity() >= line.quantity
    }

    /// Allocate a line against this batch.
    ///
    /// Set semantics: re-allocating a line value that is already present
    /// changes nothing. Does not re-check `can_allocate` - the cheap
    /// predicate stays separate so selection code can probe candidates
    /// without committing, and callers that skip it own the consequences.
    pub fn allocate(&mut self, line: OrderLine) {
        self.allocations.insert(line);
    }

    /// Remove a line if present; no-op otherwise.
    pub fn deallocate(&mut self, line: &OrderLine) {
        self.allocations.remove(line);
    }
}

impl Entity for Batch {
    type Id = BatchRef;

    fn id(&self) -> &Self::Id {
        &self.reference
    }
}

// Entity semantics: identity is the reference, not the attribute values.
impl PartialEq for Batch {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference
    }
}

impl Eq for Batch {}

impl Hash for Batch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reference.hash(state);
    }
}
