//! Lookup table from operation code to handler.

use crate::error::{Result, StockError};
use crate::handler::{
    BalanceHandler, PurchaseHandler, ReturnHandler, SupplyHandler, TransactionHandler,
};
use crate::operation::Operation;
use std::collections::HashMap;

/// Maps operation codes to their [`TransactionHandler`].
///
/// Built once and handed to the processor; the processor only reads it.
pub struct OperationRegistry {
    handlers: HashMap<String, Box<dyn TransactionHandler>>,
}

impl OperationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        OperationRegistry {
            handlers: HashMap::new(),
        }
    }

    /// Creates a registry with the four standard operations bound.
    pub fn with_default_handlers() -> Self {
        let mut registry = OperationRegistry::new();
        for op in Operation::ALL {
            let handler: Box<dyn TransactionHandler> = match op {
                Operation::Balance => Box::new(BalanceHandler),
                Operation::Supply => Box::new(SupplyHandler),
                Operation::Purchase => Box::new(PurchaseHandler),
                Operation::Return => Box::new(ReturnHandler),
            };
            registry.handlers.insert(op.code().to_string(), handler);
        }
        registry
    }

    /// Binds `code` to `handler`, replacing any previous binding.
    pub fn register<H>(&mut self, code: impl Into<String>, handler: H) -> &mut Self
    where
        H: TransactionHandler + 'static,
    {
        self.handlers.insert(code.into(), Box::new(handler));
        self
    }

    /// Returns the handler bound to `code`.
    pub fn lookup(&self, code: &str) -> Result<&dyn TransactionHandler> {
        self.handlers
            .get(code)
            .map(|h| h.as_ref())
            .ok_or_else(|| StockError::UnknownOperation {
                code: code.to_string(),
            })
    }

    /// Returns `true` if `code` has a handler bound.
    pub fn contains(&self, code: &str) -> bool {
        self.handlers.contains_key(code)
    }

    /// Number of bound operation codes.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no operation code is bound.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::with_default_handlers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubling;

    impl TransactionHandler for Doubling {
        fn apply(&self, current: i64, _quantity: u32) -> i64 {
            current * 2
        }
    }

    #[test]
    fn test_default_registry_binds_all_codes() {
        let registry = OperationRegistry::default();
        assert_eq!(registry.len(), 4);
        for op in Operation::ALL {
            assert!(registry.contains(op.code()), "missing {}", op);
        }
    }

    #[test]
    fn test_lookup_dispatches_to_bound_handler() {
        let registry = OperationRegistry::with_default_handlers();
        assert_eq!(registry.lookup("b").unwrap().apply(7, 3), 3);
        assert_eq!(registry.lookup("s").unwrap().apply(7, 3), 10);
        assert_eq!(registry.lookup("p").unwrap().apply(7, 3), 4);
        assert_eq!(registry.lookup("r").unwrap().apply(7, 3), 10);
    }

    #[test]
    fn test_lookup_unknown_code_fails() {
        let registry = OperationRegistry::with_default_handlers();
        match registry.lookup("x") {
            Err(StockError::UnknownOperation { code }) => assert_eq!(code, "x"),
            _ => panic!("Expected UnknownOperation"),
        }
    }

    #[test]
    fn test_empty_registry_knows_nothing() {
        let registry = OperationRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.lookup("b").is_err());
    }

    #[test]
    fn test_register_custom_handler() {
        let mut registry = OperationRegistry::new();
        registry.register("d", Doubling).register("s", SupplyHandler);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("d").unwrap().apply(6, 0), 12);
    }

    #[test]
    fn test_register_replaces_existing_binding() {
        let mut registry = OperationRegistry::with_default_handlers();
        registry.register("s", Doubling);

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.lookup("s").unwrap().apply(5, 100), 10);
    }
}
