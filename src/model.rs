//! Core domain types for the booking engine.

use chrono::{DateTime, Utc};

use crate::Amount;

/// User account identifier.
pub type UserId = u32;

/// Order identifier, assigned by the engine in booking order.
pub type OrderId = u32;

/// Ledger entry identifier, assigned by the engine.
pub type EntryId = u32;

/// Pickup location identifier.
pub type PickupId = u32;

/// A command representing the possible inputs of the engine.
#[derive(Debug, Clone)]
pub enum Command {
    /// Register a user account: zero-balance wallet plus rate table.
    Register { user: UserId },
    /// Credit funds to a user's wallet.
    TopUp { user: UserId, amount: Amount },
    /// Quote the shipping cost for a parcel. Read-only.
    Estimate {
        user: UserId,
        route: Route,
        parcel: Parcel,
    },
    /// Book an order, debiting the wallet by the computed total.
    Create { user: UserId, request: OrderRequest },
    /// Admin dispatch: assign an AWB and mark the order ready to ship.
    Approve { order: OrderId, awb: String },
    /// Cancel a booked order, crediting back what it debited.
    Reject { order: OrderId },
}

/// Origin/destination pincodes. Accepted by the estimate path but not
/// priced; rating is weight-only.
#[derive(Debug, Clone, Default)]
pub struct Route {
    pub from_pincode: String,
    pub to_pincode: String,
}

/// Physical package: dimensions in centimeters, weight in kilograms.
#[derive(Debug, Clone, Copy)]
pub struct Parcel {
    pub length_cm: f64,
    pub breadth_cm: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
}

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Credit,
    Debit,
}

/// Immutable wallet ledger entry. Created once, never mutated.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    pub id: EntryId,
    pub direction: Direction,
    /// Always positive; the direction carries the sign.
    pub amount: Amount,
    pub reason: String,
    /// The order this entry pays for or refunds, if any.
    pub order: Option<OrderId>,
    pub created_at: DateTime<Utc>,
}

/// Order lifecycle: BOOKED until an admin approves (READY_TO_SHIP) or the
/// reversal flow cancels it. Both exits are terminal for this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Booked,
    ReadyToShip,
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default)]
pub struct AddressDetails {
    pub line: String,
    pub city: String,
    pub pincode: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProductDetails {
    pub description: String,
    pub declared_value: Amount,
}

/// Everything a caller supplies to book an order.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    pub customer: CustomerDetails,
    pub delivery: AddressDetails,
    pub product: ProductDetails,
    pub pickup: PickupId,
    pub parcel: Parcel,
    pub insured: bool,
}

/// Computed total cost, fixed at booking time.
#[derive(Debug, Clone, Copy)]
pub struct OrderPricing {
    pub total: Amount,
}

/// Shipment tracking reference. The AWB stays unassigned until dispatch.
#[derive(Debug, Clone, Default)]
pub struct Shipment {
    pub awb: Option<String>,
}

/// One shipment request and its booking state.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub user: UserId,
    pub customer: CustomerDetails,
    pub delivery: AddressDetails,
    pub product: ProductDetails,
    pub pickup: PickupId,
    pub parcel: Parcel,
    pub insured: bool,
    pub status: OrderStatus,
    pub pricing: OrderPricing,
    pub shipment: Shipment,
    pub created_at: DateTime<Utc>,
}
