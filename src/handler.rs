//! Balance mutation rules, one per operation.
//!
//! Handlers are stateless and never fail. Rejecting a negative result is the
//! processor's job, so the same check covers every handler.

/// Computes an item's new balance from its current balance and a quantity.
///
/// `quantity` comes straight from the record and is never re-validated here.
pub trait TransactionHandler {
    fn apply(&self, current: i64, quantity: u32) -> i64;
}

/// Sets the balance to the quantity, ignoring the prior value.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceHandler;

impl TransactionHandler for BalanceHandler {
    fn apply(&self, _current: i64, quantity: u32) -> i64 {
        i64::from(quantity)
    }
}

/// Adds incoming stock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SupplyHandler;

impl TransactionHandler for SupplyHandler {
    fn apply(&self, current: i64, quantity: u32) -> i64 {
        current + i64::from(quantity)
    }
}

/// Removes sold stock. The result may be negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseHandler;

impl TransactionHandler for PurchaseHandler {
    fn apply(&self, current: i64, quantity: u32) -> i64 {
        current - i64::from(quantity)
    }
}

/// Re-adds returned stock. Same arithmetic as [`SupplyHandler`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnHandler;

impl TransactionHandler for ReturnHandler {
    fn apply(&self, current: i64, quantity: u32) -> i64 {
        current + i64::from(quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_overwrites_current() {
        assert_eq!(BalanceHandler.apply(0, 20), 20);
        assert_eq!(BalanceHandler.apply(35, 5), 5);
    }

    #[test]
    fn test_supply_adds() {
        assert_eq!(SupplyHandler.apply(10, 5), 15);
        assert_eq!(SupplyHandler.apply(0, 0), 0);
    }

    #[test]
    fn test_purchase_subtracts_and_may_go_negative() {
        assert_eq!(PurchaseHandler.apply(10, 4), 6);
        assert_eq!(PurchaseHandler.apply(5, 10), -5);
    }

    #[test]
    fn test_return_matches_supply() {
        for (current, qty) in [(0, 0), (3, 7), (100, 1)] {
            assert_eq!(ReturnHandler.apply(current, qty), SupplyHandler.apply(current, qty));
        }
    }

    #[test]
    fn test_large_quantity_does_not_overflow() {
        assert_eq!(SupplyHandler.apply(i64::from(u32::MAX), u32::MAX), 2 * i64::from(u32::MAX));
    }
}
