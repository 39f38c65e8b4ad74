use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopfront_catalog::{Product, ProductId};
use shopfront_core::{Aggregate, AggregateRoot, CartId, DomainError, Entity};
use shopfront_events::Event;

use crate::totals;

/// One product in the cart plus how many of it the shopper wants.
///
/// Identity is the product id: at most one line per product exists at any
/// time, and `quantity` is never observed at 0 — lines are removed, not
/// zeroed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.product.price.amount() * Decimal::from(self.quantity)
    }
}

impl Entity for CartLine {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product.id
    }
}

/// Aggregate root: the session cart.
///
/// An ordered sequence of [`CartLine`], insertion order preserved; re-adding
/// an existing product mutates its line's quantity instead of appending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    lines: Vec<CartLine>,
    version: u64,
}

impl Cart {
    /// Create the empty cart a session starts with.
    pub fn empty(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            version: 0,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

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

    /// Exact sum of unit price × quantity over all lines.
    pub fn subtotal(&self) -> Decimal {
        totals::subtotal(&self.lines)
    }

    fn find_line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == product_id)
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product.id == product_id)
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem. Carries the full product; a new line starts at
/// quantity 1, an existing line is incremented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: IncreaseQuantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncreaseQuantity {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: DecreaseQuantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecreaseQuantity {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ClearCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCart {
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
    IncreaseQuantity(IncreaseQuantity),
    DecreaseQuantity(DecreaseQuantity),
    ClearCart(ClearCart),
}

/// Event: ItemAdded (a new line at quantity 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityIncreased (existing line, +1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityIncreased {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityDecreased (existing line above quantity 1, -1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityDecreased {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: LineRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRemoved {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCleared {
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    QuantityIncreased(QuantityIncreased),
    QuantityDecreased(QuantityDecreased),
    LineRemoved(LineRemoved),
    CartCleared(CartCleared),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item.added",
            CartEvent::QuantityIncreased(_) => "cart.line.quantity_increased",
            CartEvent::QuantityDecreased(_) => "cart.line.quantity_decreased",
            CartEvent::LineRemoved(_) => "cart.line.removed",
            CartEvent::CartCleared(_) => "cart.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::QuantityIncreased(e) => e.occurred_at,
            CartEvent::QuantityDecreased(e) => e.occurred_at,
            CartEvent::LineRemoved(e) => e.occurred_at,
            CartEvent::CartCleared(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => {
                self.lines.push(CartLine {
                    product: e.product.clone(),
                    quantity: 1,
                });
            }
            CartEvent::QuantityIncreased(e) => {
                if let Some(line) = self.line_mut(e.product_id) {
                    line.quantity += 1;
                }
            }
            CartEvent::QuantityDecreased(e) => {
                if let Some(line) = self.line_mut(e.product_id) {
                    if line.quantity > 1 {
                        line.quantity -= 1;
                    }
                }
                // Enforced invariant: no zero-quantity line survives a decrease.
                self.lines.retain(|line| line.quantity > 0);
            }
            CartEvent::LineRemoved(e) => {
                self.lines.retain(|line| line.product.id != e.product_id);
            }
            CartEvent::CartCleared(_) => {
                self.lines.clear();
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddItem(cmd) => Ok(self.handle_add(cmd)),
            CartCommand::RemoveItem(cmd) => Ok(self.handle_remove(cmd)),
            CartCommand::IncreaseQuantity(cmd) => Ok(self.handle_increase(cmd)),
            CartCommand::DecreaseQuantity(cmd) => Ok(self.handle_decrease(cmd)),
            CartCommand::ClearCart(cmd) => Ok(self.handle_clear(cmd)),
        }
    }
}

impl Cart {
    fn handle_add(&self, cmd: &AddItem) -> Vec<CartEvent> {
        // No upper bound on quantity, no stock validation.
        if self.find_line(cmd.product.id).is_some() {
            vec![CartEvent::QuantityIncreased(QuantityIncreased {
                product_id: cmd.product.id,
                occurred_at: cmd.occurred_at,
            })]
        } else {
            vec![CartEvent::ItemAdded(ItemAdded {
                product: cmd.product.clone(),
                occurred_at: cmd.occurred_at,
            })]
        }
    }

    fn handle_remove(&self, cmd: &RemoveItem) -> Vec<CartEvent> {
        // Removing an absent id is a no-op, not an error.
        match self.find_line(cmd.product_id) {
            Some(_) => vec![CartEvent::LineRemoved(LineRemoved {
                product_id: cmd.product_id,
                occurred_at: cmd.occurred_at,
            })],
            None => Vec::new(),
        }
    }

    fn handle_increase(&self, cmd: &IncreaseQuantity) -> Vec<CartEvent> {
        match self.find_line(cmd.product_id) {
            Some(_) => vec![CartEvent::QuantityIncreased(QuantityIncreased {
                product_id: cmd.product_id,
                occurred_at: cmd.occurred_at,
            })],
            None => Vec::new(),
        }
    }

    fn handle_decrease(&self, cmd: &DecreaseQuantity) -> Vec<CartEvent> {
        // A line at quantity 1 is dropped rather than decremented to 0.
        match self.find_line(cmd.product_id) {
            Some(line) if line.quantity > 1 => {
                vec![CartEvent::QuantityDecreased(QuantityDecreased {
                    product_id: cmd.product_id,
                    occurred_at: cmd.occurred_at,
                })]
            }
            Some(_) => vec![CartEvent::LineRemoved(LineRemoved {
                product_id: cmd.product_id,
                occurred_at: cmd.occurred_at,
            })],
            None => Vec::new(),
        }
    }

    fn handle_clear(&self, cmd: &ClearCart) -> Vec<CartEvent> {
        vec![CartEvent::CartCleared(CartCleared {
            occurred_at: cmd.occurred_at,
        })]
    }
}
