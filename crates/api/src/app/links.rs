//! Route registry: one entry per endpoint, used both to register dispatch
//! paths and to build links back to those endpoints.

use core::fmt;

use hypershop_hypermedia::{ExpandError, LinkBuilder, expand};

/// The service's endpoints.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Route {
    Customers,
    Customer,
    Orders,
    Order,
    CustomerOrders,
}

impl Route {
    /// Template with `{variable}` placeholders, for reverse link generation.
    pub const fn template(self) -> &'static str {
        match self {
            Route::Customers => "/customers",
            Route::Customer => "/customers/{id}",
            Route::Orders => "/orders",
            Route::Order => "/orders/{id}",
            Route::CustomerOrders => "/customers/{id}/orders",
        }
    }

    /// The same route in the router's capture syntax.
    pub const fn dispatch_path(self) -> &'static str {
        match self {
            Route::Customers => "/customers",
            Route::Customer => "/customers/:id",
            Route::Orders => "/orders",
            Route::Order => "/orders/:id",
            Route::CustomerOrders => "/customers/:id/orders",
        }
    }

    /// Builder over the raw template. Meant for parameterless routes,
    /// optionally extended with [`LinkBuilder::slash`] segments.
    pub fn link(self) -> LinkBuilder {
        LinkBuilder::new(self.template())
    }

    /// Builder with the template's placeholders substituted in declaration
    /// order.
    pub fn expand(self, params: &[&dyn fmt::Display]) -> Result<LinkBuilder, ExpandError> {
        expand(self.template(), params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Route; 5] = [
        Route::Customers,
        Route::Customer,
        Route::Orders,
        Route::Order,
        Route::CustomerOrders,
    ];

    #[test]
    fn dispatch_paths_agree_with_templates() {
        for route in ALL {
            assert_eq!(route.template().replace("{id}", ":id"), route.dispatch_path());
        }
    }

    #[test]
    fn expands_parameterized_routes() {
        let link = Route::CustomerOrders
            .expand(&[&1u64])
            .unwrap()
            .with_self_rel();
        assert_eq!(link.href(), "/customers/1/orders");

        let link = Route::Order.expand(&[&7u64]).unwrap().with_rel("order");
        assert_eq!(link.href(), "/orders/7");
    }

    #[test]
    fn entity_links_build_from_the_collection_base() {
        let link = Route::Customers.link().slash(1).with_self_rel();
        assert_eq!(link.href(), "/customers/1");
        assert_eq!(link.rel(), "self");
    }
}
