//! `shopfront-cart` — the shopper's cart: a single-writer state container
//! with pure command/event transition semantics.
//!
//! All mutation goes through [`CartStore::dispatch`]; all reads are of a
//! [`CartSnapshot`]. Derived values (line count, item count, subtotal) are
//! computed on read, never stored.

pub mod cart;
pub mod store;
pub mod totals;

pub use cart::{
    AddItem, Cart, CartCommand, CartEvent, CartLine, ClearCart, DecreaseQuantity,
    IncreaseQuantity, ItemAdded, LineRemoved, QuantityDecreased, QuantityIncreased, RemoveItem,
};
pub use store::{CartSnapshot, CartStore};
pub use totals::{format_amount, item_count, subtotal};
