//! Customers-and-orders domain: model and in-memory repositories.
//!
//! Pure domain logic; no HTTP, no storage infrastructure. All data is
//! seeded once at construction and never mutated afterwards, so the
//! repositories are safe to share across request handlers without locks.

pub mod customer;
pub mod order;
pub mod repository;

pub use customer::Customer;
pub use order::{LineItem, Order};
pub use repository::{Customers, InMemoryCustomers, InMemoryOrders, Orders};
