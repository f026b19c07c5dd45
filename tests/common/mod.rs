//! Shared sample domain for integration tests: a small order-list service
//! speaking an XML-like document dialect.
#![allow(dead_code)]

use polycall::client::{CallError, Invoke};
use polycall::codec::{Decode, Encode};
use polycall::context::Context;
use polycall::wire::WireValue;

// =============================================================================
// Domain Types
// =============================================================================

/// Request for the order list of one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderListRequest {
    pub user_id: String,
}

impl Encode for OrderListRequest {
    fn encode(&self) -> WireValue {
        WireValue::element("Order").with_attribute("UserId", self.user_id.clone())
    }
}

/// One order in a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: String,
}

/// The decoded order-list response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderList {
    pub orders: Vec<Order>,
}

impl Encode for OrderList {
    fn encode(&self) -> WireValue {
        self.orders
            .iter()
            .fold(WireValue::element("OrderList"), |document, order| {
                document.with_child(WireValue::element("Order").with_attribute("Id", order.id.clone()))
            })
    }
}

impl Decode<CallError> for OrderList {
    fn decode(wire: WireValue) -> Result<Self, CallError> {
        if wire.name() != "OrderList" {
            return Err(CallError::malformed(format!(
                "expected OrderList, got {}",
                wire.name()
            )));
        }
        let orders = wire
            .children()
            .iter()
            .map(|child| {
                if child.name() != "Order" {
                    return Err(CallError::malformed(format!(
                        "unexpected child {}",
                        child.name()
                    )));
                }
                child
                    .attribute("Id")
                    .map(|id| Order { id: id.to_string() })
                    .ok_or_else(|| CallError::malformed("Order element without Id"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { orders })
    }
}

// =============================================================================
// Wire Fixtures
// =============================================================================

/// Builds an order-list document carrying the given order ids.
pub fn order_list_wire(ids: &[&str]) -> WireValue {
    ids.iter().fold(WireValue::element("OrderList"), |document, id| {
        document.with_child(WireValue::element("Order").with_attribute("Id", *id))
    })
}

// =============================================================================
// Invoker Doubles
// =============================================================================

/// An invoker resolving every call to the same precomputed outcome,
/// generic over the context the client targets.
#[derive(Debug, Clone)]
pub struct ScriptedInvoker {
    response: Result<WireValue, CallError>,
}

impl ScriptedInvoker {
    pub fn resolving(response: WireValue) -> Self {
        Self {
            response: Ok(response),
        }
    }

    pub fn failing(error: CallError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl<Ctx> Invoke<Ctx, CallError> for ScriptedInvoker
where
    Ctx: Context<CallError, Value = WireValue>,
{
    fn invoke(&self, _request: WireValue, _operation: &str) -> Ctx {
        Ctx::from(self.response.clone())
    }
}
