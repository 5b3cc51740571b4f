//! Order booking engine.
//!
//! The engine owns wallets, rate tables, and orders, and processes booking
//! commands: registration, top-up, rate estimation, order creation with a
//! wallet debit, admin approval, and the compensating rejection flow.
//! Also supports an async stream of commands.
//!
//! Every mutating operation takes `&mut self` and validates fully before
//! its first write, so a command either lands whole or leaves no trace.
//! Draining commands one at a time is what serializes the balance check
//! against the debit that follows it: two bookings against the same wallet
//! can never both pass the funds check on a stale balance.

use std::collections::HashMap;

use chrono::Utc;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, info};

use crate::Amount;
use crate::model::{
    Command, EntryId, Order, OrderId, OrderPricing, OrderRequest, OrderStatus, Parcel, Route,
    Shipment, UserId,
};
use crate::rating::{self, RateTable};

mod state;
pub use state::Wallet;

mod error;
pub use error::EngineError;

/// Ledger reason for the debit booked with an order.
pub const REASON_ORDER_PAYMENT: &str = "Order Payment";
/// Ledger reason for the credit written when a booked order is rejected.
pub const REASON_ORDER_REJECTED: &str = "Order Rejected";
/// Ledger reason for a manual wallet top-up.
pub const REASON_TOP_UP: &str = "Wallet Top-up";

/// Flat surcharge applied when an order is insured, unless overridden via
/// [`Engine::with_insurance_fee`].
pub const DEFAULT_INSURANCE_FEE: Amount = Amount::from_scaled(1_000_000); // 100.0

/// The order booking engine.
///
/// Maintains per-user wallets and rate tables, and the orders booked
/// against them.
pub struct Engine {
    wallets: HashMap<UserId, Wallet>,
    rates: HashMap<UserId, RateTable>,
    orders: HashMap<OrderId, Order>,
    next_order: OrderId,
    next_entry: EntryId,
    insurance_fee: Amount,
}

/// Public API
impl Engine {
    pub fn new() -> Self {
        Self::with_insurance_fee(DEFAULT_INSURANCE_FEE)
    }

    pub fn with_insurance_fee(insurance_fee: Amount) -> Self {
        Self {
            wallets: HashMap::new(),
            rates: HashMap::new(),
            orders: HashMap::new(),
            next_order: 1,
            next_entry: 1,
            insurance_fee,
        }
    }

    /// Run the engine over the given command stream.
    pub async fn run(&mut self, mut stream: impl Stream<Item = Command> + Unpin) {
        while let Some(cmd) = stream.next().await {
            // a failed command should not stop the engine
            let _ = self.apply(cmd);
        }
    }

    /// Return the state of all wallets.
    pub fn wallets(&self) -> impl Iterator<Item = &Wallet> + '_ {
        self.wallets.values()
    }

    /// Return one user's wallet.
    pub fn wallet(&self, user: UserId) -> Option<&Wallet> {
        self.wallets.get(&user)
    }

    /// Return all orders.
    pub fn orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.values()
    }

    /// Return one order.
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// Apply a single command on top of the current engine state.
    pub fn apply(&mut self, cmd: Command) -> Result<(), EngineError> {
        match cmd {
            Command::Register { user } => {
                let result = self.register(user, RateTable::standard());
                match &result {
                    Ok(()) => info!(user, "account registered"),
                    Err(e) => info!(user, reason = %e, "register skipped"),
                }
                result
            }
            Command::TopUp { user, amount } => {
                let result = self.top_up(user, amount);
                match &result {
                    Ok(()) => info!(user, amount = %amount, "top-up applied"),
                    Err(e) => info!(user, amount = %amount, reason = %e, "top-up skipped"),
                }
                result
            }
            Command::Estimate {
                user,
                route,
                parcel,
            } => match self.estimate_rate(user, &route, &parcel) {
                Ok(cost) => {
                    info!(user, cost = %cost, "rate estimated");
                    Ok(())
                }
                Err(e) => {
                    info!(user, reason = %e, "estimate skipped");
                    Err(e)
                }
            },
            Command::Create { user, request } => match self.create_order(user, request) {
                Ok(order) => {
                    info!(user, order, "order booked");
                    Ok(())
                }
                Err(e) => {
                    info!(user, reason = %e, "order skipped");
                    Err(e)
                }
            },
            Command::Approve { order, awb } => {
                let result = self.approve_order(order, awb);
                match &result {
                    Ok(()) => info!(order, "order ready to ship"),
                    Err(e) => info!(order, reason = %e, "approve skipped"),
                }
                result
            }
            Command::Reject { order } => {
                let result = self.reject_order(order);
                match &result {
                    Ok(()) => info!(order, "order cancelled"),
                    Err(e) => info!(order, reason = %e, "reject skipped"),
                }
                result
            }
        }
    }

    /// Register a user: create the zero-balance wallet and install the rate
    /// table. Fails if the user already has a wallet.
    pub fn register(&mut self, user: UserId, rates: RateTable) -> Result<(), EngineError> {
        if self.wallets.contains_key(&user) {
            return Err(EngineError::UserExists(user));
        }
        self.wallets.insert(user, Wallet::new(user));
        self.rates.insert(user, rates);
        Ok(())
    }

    /// Credit a positive amount to a user's wallet.
    pub fn top_up(&mut self, user: UserId, amount: Amount) -> Result<(), EngineError> {
        if amount <= Amount::default() {
            return Err(EngineError::InvalidTopUp(user, amount));
        }
        let wallet = self
            .wallets
            .get_mut(&user)
            .ok_or(EngineError::WalletNotFound(user))?;

        let entry = self.next_entry;
        self.next_entry += 1;
        wallet.credit(entry, amount, REASON_TOP_UP, None);
        Ok(())
    }

    /// Quote the base shipping cost for a parcel against the user's rate
    /// table. Read-only; the insurance surcharge is applied at booking,
    /// not here.
    pub fn estimate_rate(
        &self,
        user: UserId,
        route: &Route,
        parcel: &Parcel,
    ) -> Result<Amount, EngineError> {
        // Pricing is weight-only; the route is carried for interface
        // compatibility with callers that submit it.
        debug!(
            from = %route.from_pincode,
            to = %route.to_pincode,
            "route does not affect pricing"
        );

        let rates = self
            .rates
            .get(&user)
            .ok_or(EngineError::RateListNotFound(user))?;
        let chargeable = rating::chargeable_weight(parcel)?;
        Ok(rates.price_for(chargeable)?)
    }

    /// Book an order:
    /// - Resolve the chargeable weight and bracket price
    /// - Add the insurance surcharge if requested
    /// - Ensure the wallet covers the total
    /// - Create the order (BOOKED) with its pricing and shipment placeholder,
    ///   and debit the wallet with a linked ledger entry, as one unit
    ///
    /// Zero-cost orders book without a ledger entry.
    pub fn create_order(
        &mut self,
        user: UserId,
        request: OrderRequest,
    ) -> Result<OrderId, EngineError> {
        let rates = self
            .rates
            .get(&user)
            .ok_or(EngineError::RateListNotFound(user))?;
        let chargeable = rating::chargeable_weight(&request.parcel)?;
        let base = rates.price_for(chargeable)?;
        let total = if request.insured {
            base + self.insurance_fee
        } else {
            base
        };

        let wallet = self
            .wallets
            .get_mut(&user)
            .ok_or(EngineError::WalletNotFound(user))?;
        if wallet.balance() < total {
            return Err(EngineError::InsufficientFunds(user, wallet.balance(), total));
        }

        // All checks passed; everything below lands together.
        let id = self.next_order;
        self.next_order += 1;

        if !total.is_zero() {
            let entry = self.next_entry;
            self.next_entry += 1;
            wallet.debit(entry, total, REASON_ORDER_PAYMENT, Some(id));
        }

        let OrderRequest {
            customer,
            delivery,
            product,
            pickup,
            parcel,
            insured,
        } = request;
        self.orders.insert(
            id,
            Order {
                id,
                user,
                customer,
                delivery,
                product,
                pickup,
                parcel,
                insured,
                status: OrderStatus::Booked,
                pricing: OrderPricing { total },
                shipment: Shipment::default(),
                created_at: Utc::now(),
            },
        );

        Ok(id)
    }

    /// Admin dispatch: assign the AWB into the shipment placeholder and move
    /// the order to READY_TO_SHIP. Only BOOKED orders can be approved.
    pub fn approve_order(&mut self, order_id: OrderId, awb: String) -> Result<(), EngineError> {
        let order = self
            .orders
            .get_mut(&order_id)
            .ok_or(EngineError::OrderNotFound(order_id))?;
        if order.status != OrderStatus::Booked {
            return Err(EngineError::OrderNotFound(order_id));
        }

        order.shipment.awb = Some(awb);
        order.status = OrderStatus::ReadyToShip;
        Ok(())
    }

    /// Reject a BOOKED order:
    /// - Look up the debit entry that paid for it (zero-cost orders have none)
    /// - Credit the wallet back by that amount with a linked ledger entry
    /// - Mark the order CANCELLED
    ///
    /// An order that is absent, already cancelled, or ready to ship is
    /// reported as not found; a second rejection can therefore never credit
    /// the wallet twice.
    pub fn reject_order(&mut self, order_id: OrderId) -> Result<(), EngineError> {
        let order = self
            .orders
            .get(&order_id)
            .ok_or(EngineError::OrderNotFound(order_id))?;
        if order.status != OrderStatus::Booked {
            return Err(EngineError::OrderNotFound(order_id));
        }
        let user = order.user;

        let wallet = self
            .wallets
            .get_mut(&user)
            .ok_or(EngineError::WalletNotFound(user))?;

        if let Some(amount) = wallet.debit_for(order_id) {
            let entry = self.next_entry;
            self.next_entry += 1;
            wallet.credit(entry, amount, REASON_ORDER_REJECTED, Some(order_id));
        }

        if let Some(order) = self.orders.get_mut(&order_id) {
            order.status = OrderStatus::Cancelled;
        }
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AddressDetails, CustomerDetails, Direction, ProductDetails};
    use crate::rating::RatingError;
    use tokio_stream::wrappers::ReceiverStream;

    // test utils
    //
    // Standard-table prices used below: 1kg bracket = 60, 2kg bracket = 80.

    fn parcel(l: f64, b: f64, h: f64, w: f64) -> Parcel {
        Parcel {
            length_cm: l,
            breadth_cm: b,
            height_cm: h,
            weight_kg: w,
        }
    }

    /// Dense 1kg parcel: volumetric 0.2kg, chargeable 1kg.
    fn small_parcel() -> Parcel {
        parcel(10.0, 10.0, 10.0, 1.0)
    }

    fn request(parcel: Parcel, insured: bool) -> OrderRequest {
        OrderRequest {
            customer: CustomerDetails {
                name: "Asha Rao".into(),
                phone: "9000000001".into(),
            },
            delivery: AddressDetails {
                line: "12 Mint Street".into(),
                city: "Chennai".into(),
                pincode: "600001".into(),
            },
            product: ProductDetails {
                description: "books".into(),
                declared_value: Amount::from_float(900.0),
            },
            pickup: 1,
            parcel,
            insured,
        }
    }

    /// Engine with user 1 registered on the standard table and topped up.
    fn engine_with_funds(balance: f64) -> Engine {
        let mut engine = Engine::new();
        engine.register(1, RateTable::standard()).unwrap();
        engine.top_up(1, Amount::from_float(balance)).unwrap();
        engine
    }

    // Registration

    #[test]
    fn register_creates_zero_balance_wallet() {
        let mut engine = Engine::new();
        engine.register(1, RateTable::standard()).unwrap();

        let wallet = engine.wallet(1).unwrap();
        assert_eq!(wallet.balance(), Amount::default());
        assert!(wallet.entries().is_empty());
    }

    #[test]
    fn register_duplicate_user_fails() {
        let mut engine = Engine::new();
        engine.register(1, RateTable::standard()).unwrap();

        let result = engine.register(1, RateTable::standard());
        assert!(matches!(result, Err(EngineError::UserExists(1))));
    }

    // Top-up

    #[test]
    fn top_up_credits_wallet_and_writes_entry() {
        let engine = engine_with_funds(500.0);

        let wallet = engine.wallet(1).unwrap();
        assert_eq!(wallet.balance(), Amount::from_float(500.0));
        assert_eq!(wallet.credit_count(), 1);
        assert_eq!(wallet.entries()[0].reason, REASON_TOP_UP);
    }

    #[test]
    fn top_up_unknown_user_fails() {
        let mut engine = Engine::new();
        let result = engine.top_up(9, Amount::from_float(100.0));
        assert!(matches!(result, Err(EngineError::WalletNotFound(9))));
    }

    #[test]
    fn top_up_non_positive_amount_fails() {
        let mut engine = Engine::new();
        engine.register(1, RateTable::standard()).unwrap();

        for bad in [Amount::default(), Amount::from_float(-10.0)] {
            let result = engine.top_up(1, bad);
            assert!(matches!(result, Err(EngineError::InvalidTopUp(1, _))));
        }
        assert!(engine.wallet(1).unwrap().entries().is_empty());
    }

    // Estimate

    #[test]
    fn estimate_returns_bracket_price() {
        let engine = engine_with_funds(0.1);
        let cost = engine
            .estimate_rate(1, &Route::default(), &small_parcel())
            .unwrap();
        assert_eq!(cost, Amount::from_float(60.0));
    }

    #[test]
    fn estimate_ignores_route() {
        let engine = engine_with_funds(0.1);
        let near = Route {
            from_pincode: "600001".into(),
            to_pincode: "600002".into(),
        };
        let far = Route {
            from_pincode: "600001".into(),
            to_pincode: "110001".into(),
        };
        let parcel = small_parcel();

        assert_eq!(
            engine.estimate_rate(1, &near, &parcel).unwrap(),
            engine.estimate_rate(1, &far, &parcel).unwrap()
        );
    }

    #[test]
    fn estimate_invalid_dimensions_fails() {
        let engine = engine_with_funds(0.1);
        let result = engine.estimate_rate(1, &Route::default(), &parcel(0.0, 10.0, 10.0, 1.0));
        assert!(matches!(
            result,
            Err(EngineError::Rating(RatingError::InvalidDimensions(..)))
        ));
    }

    #[test]
    fn estimate_over_weight_limit_fails() {
        let engine = engine_with_funds(0.1);
        let result = engine.estimate_rate(1, &Route::default(), &parcel(10.0, 10.0, 10.0, 50.01));
        assert!(matches!(
            result,
            Err(EngineError::Rating(
                RatingError::WeightExceedsSupportedLimit(_)
            ))
        ));
    }

    #[test]
    fn estimate_without_rate_list_fails() {
        let engine = Engine::new();
        let result = engine.estimate_rate(1, &Route::default(), &small_parcel());
        assert!(matches!(result, Err(EngineError::RateListNotFound(1))));
    }

    // Order creation

    #[test]
    fn create_books_order_and_debits_wallet() {
        let mut engine = engine_with_funds(500.0);
        let id = engine.create_order(1, request(small_parcel(), false)).unwrap();

        let order = engine.order(id).unwrap();
        assert_eq!(order.status, OrderStatus::Booked);
        assert_eq!(order.pricing.total, Amount::from_float(60.0));
        assert!(order.shipment.awb.is_none());

        let wallet = engine.wallet(1).unwrap();
        assert_eq!(wallet.balance(), Amount::from_float(440.0));
        assert_eq!(wallet.debit_count(), 1);

        let debit = wallet
            .entries()
            .iter()
            .find(|e| e.direction == Direction::Debit)
            .unwrap();
        assert_eq!(debit.amount, Amount::from_float(60.0));
        assert_eq!(debit.reason, REASON_ORDER_PAYMENT);
        assert_eq!(debit.order, Some(id));
    }

    #[test]
    fn create_insured_order_adds_surcharge() {
        let mut engine = Engine::with_insurance_fee(Amount::from_float(25.0));
        engine.register(1, RateTable::standard()).unwrap();
        engine.top_up(1, Amount::from_float(500.0)).unwrap();

        let id = engine.create_order(1, request(small_parcel(), true)).unwrap();
        assert_eq!(
            engine.order(id).unwrap().pricing.total,
            Amount::from_float(85.0)
        );
        assert_eq!(
            engine.wallet(1).unwrap().balance(),
            Amount::from_float(415.0)
        );
    }

    #[test]
    fn create_uses_chargeable_not_physical_weight() {
        let mut engine = engine_with_funds(500.0);
        // 30x20x10 at 1kg: volumetric 1.2kg, prices in the 2kg bracket
        let id = engine
            .create_order(1, request(parcel(30.0, 20.0, 10.0, 1.0), false))
            .unwrap();
        assert_eq!(
            engine.order(id).unwrap().pricing.total,
            Amount::from_float(80.0)
        );
    }

    #[test]
    fn create_with_insufficient_funds_leaves_no_trace() {
        let mut engine = engine_with_funds(50.0);
        let result = engine.create_order(1, request(small_parcel(), false));
        assert!(matches!(
            result,
            Err(EngineError::InsufficientFunds(1, _, _))
        ));

        assert_eq!(engine.orders().count(), 0);
        let wallet = engine.wallet(1).unwrap();
        assert_eq!(wallet.balance(), Amount::from_float(50.0));
        assert_eq!(wallet.debit_count(), 0);
    }

    #[test]
    fn create_with_exact_balance_succeeds() {
        let mut engine = engine_with_funds(60.0);
        engine.create_order(1, request(small_parcel(), false)).unwrap();
        assert_eq!(engine.wallet(1).unwrap().balance(), Amount::default());
    }

    #[test]
    fn create_without_rate_list_fails() {
        let mut engine = engine_with_funds(500.0);
        engine.rates.remove(&1);

        let result = engine.create_order(1, request(small_parcel(), false));
        assert!(matches!(result, Err(EngineError::RateListNotFound(1))));
    }

    #[test]
    fn create_without_wallet_fails() {
        let mut engine = engine_with_funds(500.0);
        engine.wallets.remove(&1);

        let result = engine.create_order(1, request(small_parcel(), false));
        assert!(matches!(result, Err(EngineError::WalletNotFound(1))));
    }

    #[test]
    fn create_zero_cost_order_writes_no_ledger_entry() {
        let mut engine = Engine::new();
        engine
            .register(1, RateTable::new([Amount::default(); 19]))
            .unwrap();

        let id = engine.create_order(1, request(small_parcel(), false)).unwrap();
        assert_eq!(engine.order(id).unwrap().status, OrderStatus::Booked);
        assert!(engine.wallet(1).unwrap().entries().is_empty());
    }

    #[test]
    fn estimate_matches_charged_amount() {
        let mut engine = engine_with_funds(500.0);
        let parcel = parcel(30.0, 20.0, 10.0, 1.0);

        let estimate = engine
            .estimate_rate(1, &Route::default(), &parcel)
            .unwrap();
        let id = engine.create_order(1, request(parcel, false)).unwrap();
        assert_eq!(engine.order(id).unwrap().pricing.total, estimate);
    }

    // Rejection

    #[test]
    fn reject_round_trip_restores_balance() {
        let mut engine = engine_with_funds(500.0);
        let id = engine.create_order(1, request(small_parcel(), false)).unwrap();
        engine.reject_order(id).unwrap();

        assert_eq!(engine.order(id).unwrap().status, OrderStatus::Cancelled);

        let wallet = engine.wallet(1).unwrap();
        assert_eq!(wallet.balance(), Amount::from_float(500.0));
        assert_eq!(wallet.debit_count(), 1);
        // top-up plus the refund
        assert_eq!(wallet.credit_count(), 2);

        let refund = wallet
            .entries()
            .iter()
            .find(|e| e.reason == REASON_ORDER_REJECTED)
            .unwrap();
        assert_eq!(refund.amount, wallet.debit_for(id).unwrap());
        assert_eq!(refund.order, Some(id));
    }

    #[test]
    fn reject_twice_fails_without_double_credit() {
        let mut engine = engine_with_funds(500.0);
        let id = engine.create_order(1, request(small_parcel(), false)).unwrap();
        engine.reject_order(id).unwrap();

        let result = engine.reject_order(id);
        assert!(matches!(result, Err(EngineError::OrderNotFound(_))));

        let wallet = engine.wallet(1).unwrap();
        assert_eq!(wallet.balance(), Amount::from_float(500.0));
        assert_eq!(wallet.credit_count(), 2);
    }

    #[test]
    fn reject_unknown_order_fails() {
        let mut engine = engine_with_funds(500.0);
        let result = engine.reject_order(99);
        assert!(matches!(result, Err(EngineError::OrderNotFound(99))));
    }

    #[test]
    fn reject_ready_to_ship_order_fails() {
        let mut engine = engine_with_funds(500.0);
        let id = engine.create_order(1, request(small_parcel(), false)).unwrap();
        engine.approve_order(id, "AWB123456".into()).unwrap();

        let result = engine.reject_order(id);
        assert!(matches!(result, Err(EngineError::OrderNotFound(_))));
        assert_eq!(
            engine.wallet(1).unwrap().balance(),
            Amount::from_float(440.0)
        );
    }

    #[test]
    fn reject_zero_cost_order_is_a_no_op_credit() {
        let mut engine = Engine::new();
        engine
            .register(1, RateTable::new([Amount::default(); 19]))
            .unwrap();
        let id = engine.create_order(1, request(small_parcel(), false)).unwrap();

        engine.reject_order(id).unwrap();
        assert_eq!(engine.order(id).unwrap().status, OrderStatus::Cancelled);
        assert!(engine.wallet(1).unwrap().entries().is_empty());
    }

    // Approval

    #[test]
    fn approve_assigns_awb_and_marks_ready() {
        let mut engine = engine_with_funds(500.0);
        let id = engine.create_order(1, request(small_parcel(), false)).unwrap();
        engine.approve_order(id, "AWB123456".into()).unwrap();

        let order = engine.order(id).unwrap();
        assert_eq!(order.status, OrderStatus::ReadyToShip);
        assert_eq!(order.shipment.awb.as_deref(), Some("AWB123456"));
    }

    #[test]
    fn approve_cancelled_order_fails() {
        let mut engine = engine_with_funds(500.0);
        let id = engine.create_order(1, request(small_parcel(), false)).unwrap();
        engine.reject_order(id).unwrap();

        let result = engine.approve_order(id, "AWB123456".into());
        assert!(matches!(result, Err(EngineError::OrderNotFound(_))));
    }

    // Async run()

    #[tokio::test]
    async fn run_processes_all_commands() {
        let mut engine = Engine::new();
        let commands = vec![
            Command::Register { user: 1 },
            Command::TopUp {
                user: 1,
                amount: Amount::from_float(500.0),
            },
            Command::Create {
                user: 1,
                request: request(small_parcel(), false),
            },
        ];

        engine.run(tokio_stream::iter(commands)).await;

        assert_eq!(engine.orders().count(), 1);
        assert_eq!(
            engine.wallet(1).unwrap().balance(),
            Amount::from_float(440.0)
        );
    }

    #[tokio::test]
    async fn run_skips_failed_commands_and_continues() {
        let mut engine = Engine::new();
        let commands = vec![
            Command::Register { user: 1 },
            Command::Create {
                user: 1,
                request: request(small_parcel(), false),
            }, // fails: empty wallet
            Command::TopUp {
                user: 1,
                amount: Amount::from_float(100.0),
            }, // still processes
        ];

        engine.run(tokio_stream::iter(commands)).await;

        assert_eq!(engine.orders().count(), 0);
        assert_eq!(
            engine.wallet(1).unwrap().balance(),
            Amount::from_float(100.0)
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_creates_never_overdraw() {
        let mut engine = engine_with_funds(100.0);

        let (sender, receiver) = tokio::sync::mpsc::channel(16);
        let mut producers = Vec::new();
        for _ in 0..10 {
            let sender = sender.clone();
            producers.push(tokio::spawn(async move {
                sender
                    .send(Command::Create {
                        user: 1,
                        request: request(small_parcel(), false),
                    })
                    .await
                    .unwrap();
            }));
        }
        drop(sender);

        engine.run(ReceiverStream::new(receiver)).await;
        for producer in producers {
            producer.await.unwrap();
        }

        // 100 in the wallet buys exactly one 60.0 order
        let booked = engine
            .orders()
            .filter(|o| o.status == OrderStatus::Booked)
            .count();
        assert_eq!(booked, 1);

        let wallet = engine.wallet(1).unwrap();
        assert_eq!(wallet.balance(), Amount::from_float(40.0));
        assert_eq!(wallet.debit_count(), booked);
        assert!(wallet.balance() >= Amount::default());
    }
}
