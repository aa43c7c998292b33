//! Shared model and state-tree fixtures for StateKit testing surfaces.

use serde::{Deserialize, Serialize};
use statekit::prelude::*;
use std::any::Any;

///
/// Customer
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
}

impl Customer {
    #[must_use]
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }

    #[must_use]
    pub fn key(&self) -> Key {
        Key::Uint(self.id)
    }
}

///
/// Order
///
/// Keyed by a text code, so tests cover non-numeric keys.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Order {
    pub code: String,
    pub customer_id: u64,
    pub total: u64,
}

impl Order {
    #[must_use]
    pub fn new(code: &str, customer_id: u64, total: u64) -> Self {
        Self {
            code: code.to_string(),
            customer_id,
            total,
        }
    }

    #[must_use]
    pub fn key(&self) -> Key {
        Key::Text(self.code.clone())
    }
}

///
/// AuditEntry
///
/// Lives only inside the admin feature area.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AuditEntry {
    pub id: u64,
    pub message: String,
}

impl AuditEntry {
    #[must_use]
    pub fn new(id: u64, message: &str) -> Self {
        Self {
            id,
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn key(&self) -> Key {
        Key::Uint(self.id)
    }
}

/// Declares every fixture model with its key. Safe to call from concurrent
/// tests; redeclaration writes the same values.
pub fn declare_fixture_entities() {
    declare_entity::<Customer>(EntityOptions::new("Customer"));
    declare_keys::<Customer>(&["id"]);

    declare_entity::<Order>(EntityOptions::new("Order"));
    declare_keys::<Order>(&["code"]);

    declare_entity::<AuditEntry>(EntityOptions::new("AuditEntry"));
    declare_keys::<AuditEntry>(&["id"]);
}

///
/// AppState
///
/// Root tree hosting the flat slices plus the optional admin feature area.
///

#[derive(Default)]
pub struct AppState {
    pub customer: EntityState<Customer>,
    pub order: EntityState<Order>,
    pub admin: Option<AdminState>,
}

impl StateTree for AppState {
    fn slice(&self, name: &str) -> Option<&dyn Any> {
        match name {
            "customer" => Some(&self.customer),
            "order" => Some(&self.order),
            _ => None,
        }
    }
}

///
/// AdminState
///

#[derive(Default)]
pub struct AdminState {
    pub audit_entry: EntityState<AuditEntry>,
}

impl StateTree for AdminState {
    fn slice(&self, name: &str) -> Option<&dyn Any> {
        match name {
            "auditEntry" => Some(&self.audit_entry),
            _ => None,
        }
    }
}

#[must_use]
pub fn admin_of(app: &AppState) -> Option<&AdminState> {
    app.admin.as_ref()
}

/// An `AppState` with three customers, two orders, and an empty admin area.
/// Presentation order is insertion order.
#[must_use]
pub fn seeded_app() -> AppState {
    let customers = [
        Customer::new(1, "Ada"),
        Customer::new(2, "Grace"),
        Customer::new(3, "Alan"),
    ];
    let orders = [Order::new("A-100", 1, 250), Order::new("A-200", 2, 990)];

    let mut app = AppState::default();
    for customer in customers {
        app.customer.ids.push(customer.key());
        app.customer.entities.insert(customer.key(), customer);
    }
    for order in orders {
        app.order.ids.push(order.key());
        app.order.entities.insert(order.key(), order);
    }
    app.admin = Some(AdminState::default());

    app
}
