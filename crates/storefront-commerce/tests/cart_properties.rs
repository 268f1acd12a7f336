//! Invariants of the cart engine under arbitrary operation sequences.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;
use storefront_commerce::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(usize, i64),
    Remove(usize),
    Update(usize, i64),
    Clear,
}

fn op_strategy(products: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..products, -3i64..6).prop_map(|(p, q)| Op::Add(p, q)),
        2 => (0..products).prop_map(Op::Remove),
        3 => (0..products, -2i64..8).prop_map(|(p, q)| Op::Update(p, q)),
        1 => Just(Op::Clear),
    ]
}

fn apply(cart: &mut CartEngine, products: &[Arc<Product>], op: &Op) {
    match *op {
        Op::Add(p, q) => cart.add_item(&products[p], q),
        Op::Remove(p) => cart.remove_item(&products[p].id),
        Op::Update(p, q) => cart.update_quantity(&products[p].id, q),
        Op::Clear => cart.clear_cart(),
    }
}

proptest! {
    #[test]
    fn test_line_invariants_hold(ops in prop::collection::vec(op_strategy(8), 0..40)) {
        let catalog = demo_catalog();
        let products = catalog.products();
        let mut cart = CartEngine::new();

        for op in &ops {
            apply(&mut cart, products, op);

            // Property 1: no line is ever stored at zero
            prop_assert!(cart.items().iter().all(|i| i.quantity() >= 1));

            // Property 2: one line per product
            let ids: HashSet<_> = cart.items().iter().map(|i| i.product().id.clone()).collect();
            prop_assert_eq!(ids.len(), cart.items().len());
        }
    }

    #[test]
    fn test_totals_are_consistent(ops in prop::collection::vec(op_strategy(8), 0..40)) {
        let catalog = demo_catalog();
        let products = catalog.products();
        let mut cart = CartEngine::new();
        for op in &ops {
            apply(&mut cart, products, op);
        }

        let expected_subtotal: i64 = cart
            .items()
            .iter()
            .map(|i| i.product().price.cents() * i64::from(i.quantity()))
            .sum();
        prop_assert_eq!(cart.subtotal().cents(), expected_subtotal);
        prop_assert_eq!(cart.total(), cart.subtotal() + cart.shipping() + cart.tax());

        let expected_shipping = if cart.is_empty() || expected_subtotal >= 10_000 { 0 } else { 1_000 };
        prop_assert_eq!(cart.shipping().cents(), expected_shipping);

        let count: u64 = cart.items().iter().map(|i| u64::from(i.quantity())).sum();
        prop_assert_eq!(cart.item_count(), count);
    }

    #[test]
    fn test_removal_is_idempotent(
        ops in prop::collection::vec(op_strategy(8), 0..20),
        target in 0usize..8,
    ) {
        let catalog = demo_catalog();
        let products = catalog.products();
        let mut cart = CartEngine::new();
        for op in &ops {
            apply(&mut cart, products, op);
        }

        cart.remove_item(&products[target].id);
        let once = cart.clone();
        cart.remove_item(&products[target].id);
        prop_assert_eq!(cart, once);
    }

    #[test]
    fn test_adds_are_additive(a in 1i64..50, b in 1i64..50) {
        let catalog = demo_catalog();
        let product = catalog.get("3").unwrap();
        let mut cart = CartEngine::new();
        cart.add_item(product, a);
        cart.add_item(product, b);

        prop_assert_eq!(cart.unique_item_count(), 1);
        prop_assert_eq!(i64::from(cart.get_item("3").unwrap().quantity()), a + b);
    }
}

#[test]
fn test_first_added_product_stays_first() {
    let catalog = demo_catalog();
    let mut cart = CartEngine::new();
    for id in ["7", "2", "5"] {
        cart.add_one(catalog.get(id).unwrap());
    }
    cart.update_quantity("7", 4);
    cart.remove_item("2");
    cart.add_one(catalog.get("2").unwrap());

    let order: Vec<_> = cart.items().iter().map(|i| i.product().id.as_str()).collect();
    assert_eq!(order, vec!["7", "5", "2"]);
}
