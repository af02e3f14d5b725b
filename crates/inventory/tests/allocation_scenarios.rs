use serde_json::{Value, json};
use stockroute_inventory::{Allocator, Demand, Warehouse};

/// Run an allocation from the JSON wire shapes and return the JSON output.
fn allocate(demand: Value, warehouses: Value) -> Value {
    stockroute_observability::init_for_tests();

    let demand: Demand = serde_json::from_value(demand).expect("demand json");
    let warehouses: Vec<Warehouse> = serde_json::from_value(warehouses).expect("warehouse json");
    let allocator = Allocator::new(demand, warehouses);
    serde_json::to_value(allocator.get_order()).expect("order json")
}

#[test]
fn exact_inventory_match() {
    let out = allocate(
        json!({"apple": 1}),
        json!([{"name": "owd", "inventory": {"apple": 1}}]),
    );
    assert_eq!(out, json!([{"owd": {"apple": 1}}]));
}

#[test]
fn first_warehouse_has_surplus() {
    let out = allocate(
        json!({"apple": 1}),
        json!([{"name": "owd", "inventory": {"apple": 2}}]),
    );
    assert_eq!(out, json!([{"owd": {"apple": 1}}]));
}

#[test]
fn zero_stock_ships_nothing() {
    let out = allocate(
        json!({"apple": 1}),
        json!([{"name": "owd", "inventory": {"apple": 0}}]),
    );
    assert_eq!(out, json!([]));
}

#[test]
fn demand_exceeding_supply_ships_partial() {
    let out = allocate(
        json!({"apple": 2}),
        json!([{"name": "owd", "inventory": {"apple": 1}}]),
    );
    assert_eq!(out, json!([{"owd": {"apple": 1}}]));
}

#[test]
fn split_across_two_warehouses_in_priority_order() {
    let out = allocate(
        json!({"apple": 10}),
        json!([
            {"name": "owd", "inventory": {"apple": 5}},
            {"name": "dm", "inventory": {"apple": 5}}
        ]),
    );
    assert_eq!(out, json!([{"owd": {"apple": 5}}, {"dm": {"apple": 5}}]));
}

#[test]
fn negative_stock_treated_as_empty() {
    let out = allocate(
        json!({"apple": 1}),
        json!([{"name": "owd", "inventory": {"apple": -1}}]),
    );
    assert_eq!(out, json!([]));
}

#[test]
fn ships_fillable_items_and_omits_the_rest() {
    let out = allocate(
        json!({"apple": 1, "pear": 1}),
        json!([
            {"name": "owd", "inventory": {"apple": -1}},
            {"name": "dm", "inventory": {"pear": 1}}
        ]),
    );
    assert_eq!(out, json!([{"dm": {"pear": 1}}]));
}

#[test]
fn negative_stock_does_not_inflate_later_shipments() {
    // owd's -1 must not be subtracted from demand, so dm ships exactly the
    // one unit still owed rather than two.
    let out = allocate(
        json!({"apple": 1}),
        json!([
            {"name": "owd", "inventory": {"apple": -1}},
            {"name": "dm", "inventory": {"apple": 2}}
        ]),
    );
    assert_eq!(out, json!([{"dm": {"apple": 1}}]));
}

#[test]
fn each_item_ships_from_its_own_stocking_warehouse() {
    let out = allocate(
        json!({"apple": 1, "pear": 1}),
        json!([
            {"name": "owd", "inventory": {"apple": 1}},
            {"name": "dm", "inventory": {"pear": 1}}
        ]),
    );
    assert_eq!(out, json!([{"owd": {"apple": 1}}, {"dm": {"pear": 1}}]));
}

#[test]
fn warehouse_missing_inventory_field_is_skipped() {
    let out = allocate(
        json!({"apple": 1}),
        json!([{"name": "empty"}, {"name": "dm", "inventory": {"apple": 1}}]),
    );
    assert_eq!(out, json!([{"dm": {"apple": 1}}]));
}

#[test]
fn empty_inputs_produce_empty_order() {
    assert_eq!(allocate(json!({}), json!([])), json!([]));
    assert_eq!(
        allocate(json!({}), json!([{"name": "owd", "inventory": {"apple": 3}}])),
        json!([])
    );
    assert_eq!(allocate(json!({"apple": 3}), json!([])), json!([]));
}

#[test]
fn caller_inputs_are_left_untouched() {
    stockroute_observability::init_for_tests();

    let demand: Demand = [("apple", 10)].into_iter().collect();
    let warehouses = vec![
        Warehouse::new("owd").with_stock("apple", 5),
        Warehouse::new("dm").with_stock("apple", 5),
    ];
    let allocator = Allocator::new(demand.clone(), warehouses.clone());
    let order = allocator.get_order().clone();

    assert_eq!(order.shipped("apple"), 10);
    assert_eq!(allocator.demand(), &demand);
    assert_eq!(allocator.warehouses(), warehouses.as_slice());
    assert_eq!(allocator.get_order(), &order);
}
