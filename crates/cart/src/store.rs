//! Single-writer cart store with explicit subscribe/notify.

use std::sync::Mutex;

use rust_decimal::Decimal;

use shopfront_core::{AggregateRoot, CartId, DomainError, DomainResult};
use shopfront_events::{EventBus, InMemoryEventBus, Subscription, execute};

use crate::cart::{Cart, CartCommand, CartEvent, CartLine};
use crate::totals;

/// Single authority over one session's [`Cart`].
///
/// All mutation happens through [`CartStore::dispatch`]; all reads are of a
/// [`CartSnapshot`]. Subscribers are notified only after a command's events
/// have been fully applied, in application order, so they never observe an
/// in-progress mutation.
pub struct CartStore {
    cart: Mutex<Cart>,
    bus: InMemoryEventBus<CartEvent>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::with_id(CartId::new())
    }

    pub fn with_id(id: CartId) -> Self {
        Self {
            cart: Mutex::new(Cart::empty(id)),
            bus: InMemoryEventBus::new(),
        }
    }

    /// Apply a command and notify subscribers.
    ///
    /// Returns the emitted events; a no-op command emits none and notifies
    /// nobody. Publishing happens under the same lock as the mutation so the
    /// notification order always matches the state order.
    pub fn dispatch(&self, command: CartCommand) -> DomainResult<Vec<CartEvent>> {
        let mut cart = self
            .cart
            .lock()
            .map_err(|_| DomainError::invariant("cart store lock poisoned"))?;

        let events = execute(&mut *cart, &command)?;
        tracing::debug!(emitted = events.len(), "cart command dispatched");

        for event in &events {
            self.bus
                .publish(event.clone())
                .map_err(|_| DomainError::invariant("cart notification bus poisoned"))?;
        }

        Ok(events)
    }

    /// Subscribe to cart events (the view layer's re-render trigger).
    pub fn subscribe(&self) -> Subscription<CartEvent> {
        self.bus.subscribe()
    }

    /// Atomic read of the current state.
    pub fn snapshot(&self) -> DomainResult<CartSnapshot> {
        let cart = self
            .cart
            .lock()
            .map_err(|_| DomainError::invariant("cart store lock poisoned"))?;

        Ok(CartSnapshot {
            lines: cart.lines().to_vec(),
            version: cart.version(),
        })
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully-applied view of the cart at one version.
///
/// Derived values are computed here, on read; nothing is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub version: u64,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (the navbar badge).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total number of items across all lines.
    pub fn item_count(&self) -> u64 {
        totals::item_count(&self.lines)
    }

    /// Exact total price.
    pub fn total(&self) -> Decimal {
        totals::subtotal(&self.lines)
    }

    /// Total price rendered with thousands grouping.
    pub fn display_total(&self) -> String {
        totals::format_amount(self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{AddItem, ClearCart, DecreaseQuantity, RemoveItem};
    use chrono::Utc;
    use shopfront_catalog::{Product, ProductId};

    fn product(id: u64, price: &str) -> Product {
        Product {
            id: ProductId(id),
            title: format!("product {id}"),
            price: price.parse().unwrap(),
            category: "misc".to_string(),
            description: String::new(),
            image: String::new(),
        }
    }

    fn add(store: &CartStore, p: Product) {
        store
            .dispatch(CartCommand::AddItem(AddItem {
                product: p,
                occurred_at: Utc::now(),
            }))
            .unwrap();
    }

    #[test]
    fn dispatch_then_snapshot_reflects_the_change() {
        let store = CartStore::new();
        add(&store, product(1, "10.00"));
        add(&store, product(1, "10.00"));
        add(&store, product(2, "5.50"));

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.line_count(), 2);
        assert_eq!(snapshot.item_count(), 3);
        assert_eq!(snapshot.total(), Decimal::new(2550, 2));
        assert_eq!(snapshot.version, 3);
    }

    #[test]
    fn subscribers_are_notified_after_the_state_is_applied() {
        let store = CartStore::new();
        let sub = store.subscribe();

        add(&store, product(1, "10.00"));

        let event = sub.try_recv().unwrap();
        assert!(matches!(event, CartEvent::ItemAdded(_)));

        // By the time the notification is observable, the snapshot already
        // contains the fully-applied state.
        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.line_count(), 1);
    }

    #[test]
    fn noop_commands_notify_nobody() {
        let store = CartStore::new();
        let sub = store.subscribe();

        let events = store
            .dispatch(CartCommand::RemoveItem(RemoveItem {
                product_id: ProductId(42),
                occurred_at: Utc::now(),
            }))
            .unwrap();

        assert!(events.is_empty());
        assert!(sub.try_recv().is_err());
        assert_eq!(store.snapshot().unwrap().version, 0);
    }

    #[test]
    fn clear_resets_to_empty() {
        let store = CartStore::new();
        add(&store, product(1, "10.00"));

        store
            .dispatch(CartCommand::ClearCart(ClearCart {
                occurred_at: Utc::now(),
            }))
            .unwrap();

        let snapshot = store.snapshot().unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.total(), Decimal::ZERO);
        assert_eq!(snapshot.display_total(), "0");
    }

    #[test]
    fn display_total_groups_thousands() {
        let store = CartStore::new();
        add(&store, product(1, "1234567.89"));

        assert_eq!(store.snapshot().unwrap().display_total(), "1,234,567.89");
    }

    #[test]
    fn decrease_to_zero_drops_the_line_from_snapshots() {
        let store = CartStore::new();
        add(&store, product(1, "10.00"));

        store
            .dispatch(CartCommand::DecreaseQuantity(DecreaseQuantity {
                product_id: ProductId(1),
                occurred_at: Utc::now(),
            }))
            .unwrap();

        assert!(store.snapshot().unwrap().is_empty());
    }
}
