use fulfillment::config::FulfillmentConfig;
use fulfillment::lifecycle::{run_harness, FulfillmentSystem, HarnessOptions};
use fulfillment::model::{Action, ActionKind, Order, OrderId, OrderRecord, Temperature};
use std::time::Duration;

fn order(id: &str, temperature: Temperature, secs: u64) -> Order {
    Order::new(id, format!("Dish {id}"), temperature, Duration::from_secs(secs))
}

fn config(cap: usize, reallocation_ms: u64) -> FulfillmentConfig {
    FulfillmentConfig {
        num_coolers: 1,
        cooler_cap: cap,
        num_heaters: 1,
        heater_cap: cap,
        num_shelves: 1,
        shelf_cap: cap,
        reallocation_interval_ms: reallocation_ms,
    }
}

fn history(actions: &[Action], id: &str) -> Vec<ActionKind> {
    actions
        .iter()
        .filter(|a| a.id.0 == id)
        .map(|a| a.action)
        .collect()
}

/// Full end-to-end test through the client and both actors.
#[tokio::test]
async fn test_place_and_pickup_through_client() {
    let system = FulfillmentSystem::start(&FulfillmentConfig::default());

    system
        .client
        .place_order(order("h1", Temperature::Hot, 60))
        .await
        .expect("Failed to place order");
    system
        .client
        .place_order(order("r1", Temperature::Room, 60))
        .await
        .expect("Failed to place order");

    assert_eq!(system.engine().locate(&OrderId::from("h1")).as_deref(), Some("Heater-1"));
    assert_eq!(system.engine().locate(&OrderId::from("r1")).as_deref(), Some("Shelf-1"));

    system
        .client
        .pickup_order(OrderId::from("h1"))
        .await
        .expect("Failed to pick up order");
    // Unknown ids are a no-op, not an error.
    system
        .client
        .pickup_order(OrderId::from("missing"))
        .await
        .expect("Pickup of an unknown order should succeed");

    let actions = system.shutdown().await.expect("Shutdown failed");
    assert_eq!(history(&actions, "h1"), vec![ActionKind::Place, ActionKind::Pickup]);
    assert_eq!(history(&actions, "r1"), vec![ActionKind::Place]);
    assert!(history(&actions, "missing").is_empty());
    assert!(actions.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}

/// Shelf-stored hot and cold orders migrate once heater and cooler space frees up.
#[tokio::test]
async fn test_background_loop_drains_full_shelf() {
    let system = FulfillmentSystem::start(&config(2, 50));
    for (id, temperature) in [
        ("h1", Temperature::Hot),
        ("h2", Temperature::Hot),
        ("c1", Temperature::Cold),
        ("c2", Temperature::Cold),
        ("h3", Temperature::Hot),
        ("c3", Temperature::Cold),
    ] {
        system.client.place_order(order(id, temperature, 120)).await.unwrap();
    }
    let engine = system.engine();
    assert!(engine.shelf().is_full());

    // Both pickups happen without yielding, so the loop sees a full shelf with
    // room in both the heater and the cooler.
    engine.pickup_order(&OrderId::from("h1"));
    engine.pickup_order(&OrderId::from("c1"));

    tokio::time::sleep(Duration::from_millis(400)).await;

    assert!(engine.heater().contains(&OrderId::from("h3")));
    assert!(engine.cooler().contains(&OrderId::from("c3")));
    assert!(engine.shelf().is_empty());

    let actions = system.shutdown().await.unwrap();
    assert_eq!(history(&actions, "h3"), vec![ActionKind::Place, ActionKind::Move]);
    assert_eq!(history(&actions, "c3"), vec![ActionKind::Place, ActionKind::Move]);
}

#[tokio::test]
async fn test_loop_leaves_partial_shelf_alone() {
    let system = FulfillmentSystem::start(&config(2, 20));
    for (id, temperature) in [
        ("h1", Temperature::Hot),
        ("h2", Temperature::Hot),
        ("h3", Temperature::Hot),
    ] {
        system.client.place_order(order(id, temperature, 120)).await.unwrap();
    }
    system.client.pickup_order(OrderId::from("h1")).await.unwrap();

    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(system.engine().locate(&OrderId::from("h3")).as_deref(), Some("Shelf-1"));
    let actions = system.shutdown().await.unwrap();
    assert_eq!(history(&actions, "h3"), vec![ActionKind::Place]);
}

#[tokio::test]
async fn test_overflow_discards_through_client() {
    let system = FulfillmentSystem::start(&config(2, 1000));
    system.client.place_order(order("r1", Temperature::Room, 5)).await.unwrap();
    system.client.place_order(order("r2", Temperature::Room, 50)).await.unwrap();
    system.client.place_order(order("r3", Temperature::Room, 50)).await.unwrap();

    let actions = system.shutdown().await.unwrap();
    assert_eq!(history(&actions, "r1"), vec![ActionKind::Place, ActionKind::Discard]);
    assert_eq!(history(&actions, "r3"), vec![ActionKind::Place]);
    let discard = actions.iter().position(|a| a.action == ActionKind::Discard).unwrap();
    let third = actions.iter().position(|a| a.id.0 == "r3").unwrap();
    assert!(discard < third);
}

#[tokio::test]
async fn test_harness_picks_up_every_order() {
    let system = FulfillmentSystem::start(&FulfillmentConfig::default());
    let orders: Vec<Order> = serde_json::from_str::<Vec<OrderRecord>>(
        r#"[
            {"id": "a", "name": "Cheese Pizza", "temp": "hot", "freshness": 120},
            {"id": "b", "name": "Ice Cream", "temp": "cold", "freshness": 120},
            {"id": "c", "name": "Banana", "temp": "room", "freshness": 120},
            {"id": "d", "name": "Pad Thai", "temp": "hot", "freshness": 120}
        ]"#,
    )
    .unwrap()
    .into_iter()
    .map(Order::from)
    .collect();

    let options = HarnessOptions {
        rate: Duration::from_millis(5),
        min_pickup: Duration::from_millis(10),
        max_pickup: Duration::from_millis(30),
    };
    run_harness(&system.client, orders, options).await.unwrap();

    let actions = system.shutdown().await.unwrap();
    for id in ["a", "b", "c", "d"] {
        assert_eq!(history(&actions, id), vec![ActionKind::Place, ActionKind::Pickup]);
    }
}

#[tokio::test]
async fn test_actions_serialize_with_micro_timestamps() {
    let system = FulfillmentSystem::start(&FulfillmentConfig::default());
    system.client.place_order(order("x", Temperature::Cold, 30)).await.unwrap();
    let actions = system.shutdown().await.unwrap();

    let json = serde_json::to_value(&actions).unwrap();
    let first = &json[0];
    assert_eq!(first["id"], "x");
    assert_eq!(first["action"], "place");
    assert_eq!(first["timestamp"].as_i64(), Some(actions[0].timestamp_micros()));
}
