//! End-to-end client behavior with the blocking context.

mod common;

use common::{Order, OrderList, OrderListRequest, ScriptedInvoker, order_list_wire};
use polycall::client::{BlockingClient, CallError, Client};
use polycall::codec::Decode;
use polycall::context::{Context, Immediate};
use polycall::wire::WireValue;

fn request() -> OrderListRequest {
    OrderListRequest {
        user_id: "0001".to_string(),
    }
}

// =============================================================================
// Successful Round Trip
// =============================================================================

#[test]
fn run_encodes_invokes_and_decodes() {
    // The invoker sees the encoded request and the operation name, and
    // answers with an empty order list.
    let invoker = |request: WireValue, operation: &str| -> Immediate<WireValue, CallError> {
        assert_eq!(operation, "getOrderList");
        assert_eq!(request.to_string(), r#"<Order UserId="0001"/>"#);
        Immediate::Resolved(WireValue::element("OrderList"))
    };

    let client: BlockingClient<_> = Client::new(invoker);
    let get_order_list = client.operation::<OrderListRequest, OrderList>("getOrderList");

    let outcome = get_order_list.run(request());
    assert_eq!(outcome.run(), Ok(OrderList { orders: vec![] }));
}

#[test]
fn run_decodes_populated_response() {
    let client: BlockingClient<ScriptedInvoker> =
        Client::new(ScriptedInvoker::resolving(order_list_wire(&["7", "8"])));
    let get_order_list = client.operation::<OrderListRequest, OrderList>("getOrderList");

    let outcome = get_order_list.run(request()).run();
    assert_eq!(
        outcome,
        Ok(OrderList {
            orders: vec![
                Order {
                    id: "7".to_string()
                },
                Order {
                    id: "8".to_string()
                },
            ],
        })
    );
}

// =============================================================================
// Invocation Failure
// =============================================================================

/// An output type whose decoder always fails: if the pipeline ever
/// consulted it, the observed error would be malformed-response rather
/// than the invoker's own.
#[derive(Debug, PartialEq, Eq)]
struct NeverDecoded;

impl Decode<CallError> for NeverDecoded {
    fn decode(_wire: WireValue) -> Result<Self, CallError> {
        Err(CallError::malformed("decode must not run"))
    }
}

#[test]
fn invocation_failure_propagates_without_decoding() {
    let refused = CallError::connection("connection refused");
    let client: BlockingClient<ScriptedInvoker> =
        Client::new(ScriptedInvoker::failing(refused.clone()));
    let operation = client.operation::<OrderListRequest, NeverDecoded>("getOrderList");

    let outcome = operation.run(request()).run();
    assert_eq!(outcome, Err(refused));
}

#[test]
fn invocation_failure_survives_further_composition() {
    let refused = CallError::connection("connection refused");
    let client: BlockingClient<ScriptedInvoker> =
        Client::new(ScriptedInvoker::failing(refused.clone()));
    let operation = client.operation::<OrderListRequest, OrderList>("getOrderList");

    // The error flows unchanged through map over the returned context.
    let outcome = operation.run(request()).map(|list| list.orders.len());
    assert_eq!(outcome.run(), Err(refused));
}

// =============================================================================
// Decoding Failure
// =============================================================================

#[test]
fn malformed_response_surfaces_typed_error() {
    let client: BlockingClient<ScriptedInvoker> =
        Client::new(ScriptedInvoker::resolving(WireValue::element("Oops")));
    let operation = client.operation::<OrderListRequest, OrderList>("getOrderList");

    let outcome = operation.run(request()).run();
    assert_eq!(outcome, Err(CallError::malformed("expected OrderList, got Oops")));
}

#[test]
fn order_without_id_surfaces_typed_error() {
    let wire = WireValue::element("OrderList").with_child(WireValue::element("Order"));
    let client: BlockingClient<ScriptedInvoker> = Client::new(ScriptedInvoker::resolving(wire));
    let operation = client.operation::<OrderListRequest, OrderList>("getOrderList");

    let outcome = operation.run(request()).run();
    assert_eq!(outcome, Err(CallError::malformed("Order element without Id")));
}

// =============================================================================
// Shared Invoker, Independent Operations
// =============================================================================

#[test]
fn operations_with_different_types_share_one_invoker() {
    let invoker = |request: WireValue, operation: &str| -> Immediate<WireValue, CallError> {
        match operation {
            "getOrderList" => Immediate::Resolved(order_list_wire(&["1"])),
            "echo" => Immediate::Resolved(request),
            other => Immediate::Failed(CallError::connection(format!("unknown operation {other}"))),
        }
    };

    let client: BlockingClient<_> = Client::new(invoker);
    let get_order_list = client.operation::<OrderListRequest, OrderList>("getOrderList");
    let echo = client.operation::<WireValue, WireValue>("echo");

    let orders = get_order_list.run(request()).run();
    assert_eq!(
        orders,
        Ok(OrderList {
            orders: vec![Order {
                id: "1".to_string()
            }],
        })
    );

    let ping = WireValue::element("Ping").with_attribute("Seq", "1");
    assert_eq!(echo.run(ping.clone()).run(), Ok(ping));

    // Invocations do not interfere with each other.
    let again = get_order_list.run(request()).run();
    assert_eq!(again, orders);
}

#[test]
fn repeated_operation_construction_is_safe() {
    let client: BlockingClient<ScriptedInvoker> =
        Client::new(ScriptedInvoker::resolving(WireValue::element("OrderList")));

    let first = client.operation::<OrderListRequest, OrderList>("getOrderList");
    let second = client.operation::<OrderListRequest, OrderList>("getOrderList");
    assert_eq!(first.name(), second.name());

    assert_eq!(first.run(request()).run(), second.run(request()).run());
}

#[test]
fn cloned_operations_share_the_invoker() {
    let client: BlockingClient<ScriptedInvoker> =
        Client::new(ScriptedInvoker::resolving(WireValue::element("OrderList")));

    let operation = client.operation::<OrderListRequest, OrderList>("getOrderList");
    let cloned = operation.clone();

    assert_eq!(operation.run(request()).run(), cloned.run(request()).run());
}

#[test]
fn cloned_clients_share_the_invoker() {
    let client: BlockingClient<ScriptedInvoker> =
        Client::new(ScriptedInvoker::resolving(WireValue::element("OrderList")));
    let cloned = client.clone();

    let outcome = cloned
        .operation::<OrderListRequest, OrderList>("getOrderList")
        .run(request())
        .run();
    assert_eq!(outcome, Ok(OrderList { orders: vec![] }));
}
