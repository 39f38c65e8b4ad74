//! `shopfront-events` — event trait, notification bus, and the reducer driver.
//!
//! Stores in this workspace mutate state synchronously and then notify
//! subscribers. This crate provides the pieces that make the notify side
//! explicit: the [`Event`] trait, the [`EventBus`]/[`Subscription`] seam,
//! an in-memory bus, and [`execute`], the decide-then-evolve helper.

pub mod bus;
pub mod event;
pub mod handler;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use handler::execute;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
