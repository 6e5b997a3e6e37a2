use fulfillment::config::FulfillmentConfig;
use fulfillment::engine::FulfillmentEngine;
use fulfillment::model::{Action, ActionKind, Order, OrderId, Temperature};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

const ORDERS_PER_PLACER: usize = 150;

fn small_config() -> FulfillmentConfig {
    FulfillmentConfig {
        num_coolers: 2,
        cooler_cap: 3,
        num_heaters: 2,
        heater_cap: 3,
        num_shelves: 1,
        shelf_cap: 4,
        reallocation_interval_ms: 1,
    }
}

fn temperature_for(n: usize) -> Temperature {
    match n % 3 {
        0 => Temperature::Hot,
        1 => Temperature::Cold,
        _ => Temperature::Room,
    }
}

fn order_id(placer: usize, n: usize) -> String {
    format!("p{placer}-{n}")
}

fn assert_capacity(engine: &FulfillmentEngine) {
    for group in [engine.heater(), engine.cooler(), engine.shelf()] {
        for unit in group.units() {
            assert!(
                unit.len() <= unit.capacity(),
                "{} holds {} of {}",
                unit.name(),
                unit.len(),
                unit.capacity()
            );
        }
    }
}

/// Place, then any number of moves, then at most one pickup or discard.
fn assert_lifecycle(id: &str, kinds: &[ActionKind]) {
    assert_eq!(kinds.first(), Some(&ActionKind::Place), "{id}: {kinds:?}");
    let body = &kinds[1..];
    let (moves, tail) = match body.iter().position(|k| *k != ActionKind::Move) {
        Some(end) => body.split_at(end),
        None => (body, &[][..]),
    };
    assert!(moves.iter().all(|k| *k == ActionKind::Move));
    match tail {
        [] | [ActionKind::Pickup] | [ActionKind::Discard] => {}
        _ => panic!("{id}: unexpected history {kinds:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn invariants_hold_under_concurrent_load() {
    let engine = Arc::new(FulfillmentEngine::new(&small_config()));
    let running = Arc::new(AtomicBool::new(true));

    let placers: Vec<_> = (0..2)
        .map(|placer| {
            let engine = engine.clone();
            tokio::task::spawn_blocking(move || {
                for n in 0..ORDERS_PER_PLACER {
                    let secs = 1 + (n as u64 * 7) % 30;
                    engine.place_order(Order::new(
                        order_id(placer, n),
                        "Stress",
                        temperature_for(n),
                        Duration::from_secs(secs),
                    ));
                }
            })
        })
        .collect();

    let picker = {
        let engine = engine.clone();
        tokio::task::spawn_blocking(move || {
            for n in 0..ORDERS_PER_PLACER {
                for placer in 0..2 {
                    if n % 2 == placer {
                        engine.pickup_order(&OrderId::from(order_id(placer, n)));
                    }
                }
                std::thread::yield_now();
            }
        })
    };

    let reallocator = {
        let engine = engine.clone();
        let running = running.clone();
        tokio::task::spawn_blocking(move || {
            while running.load(Ordering::Relaxed) {
                engine.reallocate_once();
                assert_capacity(&engine);
                std::thread::yield_now();
            }
        })
    };

    for placer in placers {
        placer.await.unwrap();
    }
    picker.await.unwrap();
    running.store(false, Ordering::Relaxed);
    reallocator.await.unwrap();

    assert_capacity(&engine);

    // No order is held by two units.
    let mut seen = HashSet::new();
    for group in [engine.heater(), engine.cooler(), engine.shelf()] {
        for stored in group.list() {
            assert!(seen.insert(stored.order.id.clone()), "{} stored twice", stored.order.id);
        }
    }

    let actions: Vec<Action> = engine.actions().snapshot();
    assert!(actions.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

    let mut histories: HashMap<&str, Vec<ActionKind>> = HashMap::new();
    for action in &actions {
        histories.entry(action.id.0.as_str()).or_default().push(action.action);
    }
    for (id, kinds) in &histories {
        assert_lifecycle(id, kinds);
        let stored = seen.contains(&OrderId::from(*id));
        let finished = matches!(kinds.last(), Some(ActionKind::Pickup | ActionKind::Discard));
        assert_ne!(stored, finished, "{id}: stored={stored} history={kinds:?}");
    }

    // Every order was accepted somewhere: the shelf can always be freed.
    assert_eq!(histories.len(), 2 * ORDERS_PER_PLACER);
}

#[test]
fn serialized_placements_keep_heater_first_fit() {
    let engine = FulfillmentEngine::new(&small_config());
    for n in 0..6 {
        engine.place_order(Order::new(
            format!("h{n}"),
            "Soup",
            Temperature::Hot,
            Duration::from_secs(60),
        ));
    }
    let units = engine.heater().units();
    assert_eq!(units[0].len(), 3);
    assert_eq!(units[1].len(), 3);
    assert!(engine.shelf().is_empty());
    assert!(units[0].contains(&OrderId::from("h0")));
    assert!(units[1].contains(&OrderId::from("h5")));
}
