use serde::Serialize;

use hypershop_core::{Entity, OrderId, ValueObject};

use crate::customer::Customer;

/// A single named position within an [`Order`]. No identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    name: String,
}

impl LineItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ValueObject for LineItem {}

/// An order placed by a [`Customer`].
///
/// Identity-based equality on `id`. The owning customer is embedded so the
/// plain representation can expose it without a second lookup.
#[derive(Debug, Clone, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: OrderId,
    customer: Customer,
    line_items: Vec<LineItem>,
}

impl Order {
    pub fn new(id: OrderId, customer: Customer) -> Self {
        Self {
            id,
            customer,
            line_items: Vec::new(),
        }
    }

    /// Appends a line item; chainable for seed-time construction.
    pub fn add(mut self, item: LineItem) -> Self {
        self.line_items.push(item);
        self
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Whether this order was placed by the given customer (identity compare).
    pub fn belongs_to(&self, customer: &Customer) -> bool {
        self.customer == *customer
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl core::hash::Hash for Order {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use hypershop_core::CustomerId;

    use super::*;

    fn dave() -> Customer {
        Customer::new(CustomerId::new(1), "Dave", "Matthews")
    }

    #[test]
    fn keeps_line_items_in_insertion_order() {
        let order = Order::new(OrderId::new(1), dave())
            .add(LineItem::new("iPhone"))
            .add(LineItem::new("iPad"));

        let names: Vec<_> = order.line_items().iter().map(LineItem::name).collect();
        assert_eq!(names, ["iPhone", "iPad"]);
    }

    #[test]
    fn belongs_to_compares_customer_identity() {
        let order = Order::new(OrderId::new(1), dave());
        let carter = Customer::new(CustomerId::new(2), "Carter", "Beauford");

        assert!(order.belongs_to(&dave()));
        assert!(!order.belongs_to(&carter));
    }
}
