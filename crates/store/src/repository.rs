//! Repository seams and seeded in-memory implementations.
//!
//! Absence is represented as `None` / an empty list, never as an error;
//! callers decide how that maps to HTTP.

use hypershop_core::{CustomerId, DomainError, DomainResult, Entity, OrderId};

use crate::customer::Customer;
use crate::order::{LineItem, Order};

/// Read access to customers.
pub trait Customers: Send + Sync {
    /// All customers in insertion order.
    fn find_all(&self) -> Vec<Customer>;

    /// The customer with the given id, if any.
    fn find_one(&self, id: CustomerId) -> Option<Customer>;
}

/// Read access to orders.
pub trait Orders: Send + Sync {
    /// All orders in insertion order.
    fn find_all(&self) -> Vec<Order>;

    /// The order with the given id, if any.
    fn find_one(&self, id: OrderId) -> Option<Order>;

    /// All orders placed by the given customer, in insertion order.
    fn find_by_owner(&self, customer: &Customer) -> Vec<Order>;
}

/// In-memory customer directory, fixed at construction.
#[derive(Debug, Clone)]
pub struct InMemoryCustomers {
    customers: Vec<Customer>,
}

impl InMemoryCustomers {
    /// Seeds the well-known sample customers.
    pub fn seeded() -> Self {
        Self {
            customers: vec![
                Customer::new(CustomerId::new(1), "Dave", "Matthews"),
                Customer::new(CustomerId::new(2), "Carter", "Beauford"),
            ],
        }
    }
}

impl Customers for InMemoryCustomers {
    fn find_all(&self) -> Vec<Customer> {
        self.customers.clone()
    }

    fn find_one(&self, id: CustomerId) -> Option<Customer> {
        self.customers.iter().find(|c| c.id() == id).cloned()
    }
}

/// In-memory order book, fixed at construction.
#[derive(Debug, Clone)]
pub struct InMemoryOrders {
    orders: Vec<Order>,
}

impl InMemoryOrders {
    /// Seeds the sample order placed by customer 1.
    ///
    /// Fails when the owning customer is missing from `customers`.
    pub fn seeded(customers: &dyn Customers) -> DomainResult<Self> {
        let customer = customers
            .find_one(CustomerId::new(1))
            .ok_or(DomainError::NotFound)?;

        let order = Order::new(OrderId::new(1), customer)
            .add(LineItem::new("iPhone"))
            .add(LineItem::new("iPad"));

        Ok(Self {
            orders: vec![order],
        })
    }
}

impl Orders for InMemoryOrders {
    fn find_all(&self) -> Vec<Order> {
        self.orders.clone()
    }

    fn find_one(&self, id: OrderId) -> Option<Order> {
        self.orders.iter().find(|o| o.id() == id).cloned()
    }

    fn find_by_owner(&self, customer: &Customer) -> Vec<Order> {
        self.orders
            .iter()
            .filter(|o| o.belongs_to(customer))
            .cloned()
            .collect()
    }
}
