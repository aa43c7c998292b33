use super::*;
use crate::page::Page;

#[derive(Clone, Debug, PartialEq)]
struct Order {
    id: u64,
    total: u64,
}

fn order(id: u64) -> Order {
    Order { id, total: id * 10 }
}

struct Parent {
    orders: EntityState<Order>,
}

fn selectors() -> SelectorMap<Parent, Order> {
    SelectorMap::new(Arc::new(|parent: &Parent| Ok(&parent.orders)))
}

fn broken_selectors() -> SelectorMap<Parent, Order> {
    SelectorMap::new(Arc::new(|_: &Parent| {
        Err(Error::MissingStateSlice {
            model: "Order".to_string(),
            slice: "order".to_string(),
        })
    }))
}

fn seeded_parent() -> Parent {
    let entities: BTreeMap<Key, Order> = [
        (Key::Uint(1), order(1)),
        (Key::Uint(2), order(2)),
        (Key::Uint(10), order(10)),
    ]
    .into_iter()
    .collect();

    Parent {
        orders: EntityState {
            entities,
            // presentation order deliberately differs from key order
            ids: vec![Key::Uint(10), Key::Uint(1), Key::Uint(2)],
            current_entity_key: Some(Key::Uint(2)),
            current_page: Some(PageInfo {
                page: Page { page: 1, size: 3 },
                total_count: 7,
            }),
            total_pageable_count: Some(7),
            is_loading: true,
            is_saving: false,
            is_deleting: false,
            extra: (),
        },
    }
}

#[test]
fn all_follows_ids_order_not_key_order() {
    let parent = seeded_parent();
    let all = selectors().all(&parent).unwrap();

    assert_eq!(all, vec![&order(10), &order(1), &order(2)]);
}

#[test]
fn all_skips_ids_without_a_matching_entity() {
    let mut parent = seeded_parent();
    parent.orders.ids.push(Key::Uint(99));

    let all = selectors().all(&parent).unwrap();

    assert_eq!(all.len(), 3);
}

#[test]
fn entities_and_ids_expose_borrowed_views() {
    let parent = seeded_parent();
    let map = selectors();

    assert_eq!(map.entities(&parent).unwrap().len(), 3);
    assert_eq!(
        map.ids(&parent).unwrap(),
        &[Key::Uint(10), Key::Uint(1), Key::Uint(2)]
    );
}

#[test]
fn total_counts_presented_ids() {
    let parent = seeded_parent();

    assert_eq!(selectors().total(&parent).unwrap(), 3);
}

#[test]
fn current_entity_follows_the_current_key() {
    let parent = seeded_parent();
    let map = selectors();

    assert_eq!(map.current_key(&parent).unwrap(), Some(&Key::Uint(2)));
    assert_eq!(map.current_entity(&parent).unwrap(), Some(&order(2)));
}

#[test]
fn current_entity_is_none_when_nothing_is_selected() {
    let mut parent = seeded_parent();
    parent.orders.current_entity_key = None;

    assert_eq!(selectors().current_entity(&parent).unwrap(), None);
}

#[test]
fn current_entity_is_none_for_a_dangling_key() {
    let mut parent = seeded_parent();
    parent.orders.current_entity_key = Some(Key::Uint(404));

    assert_eq!(selectors().current_entity(&parent).unwrap(), None);
}

#[test]
fn paging_views_pass_through() {
    let parent = seeded_parent();
    let map = selectors();

    assert_eq!(
        map.current_page(&parent).unwrap(),
        Some(PageInfo {
            page: Page { page: 1, size: 3 },
            total_count: 7,
        })
    );
    assert_eq!(map.total_pageable(&parent).unwrap(), Some(7));
}

#[test]
fn activity_flags_pass_through() {
    let parent = seeded_parent();
    let map = selectors();

    assert!(map.is_loading(&parent).unwrap());
    assert!(!map.is_saving(&parent).unwrap());
    assert!(!map.is_deleting(&parent).unwrap());
}

#[test]
fn every_selector_propagates_a_missing_slice() {
    let parent = seeded_parent();
    let map = broken_selectors();

    let err = map.state(&parent).expect_err("state should fail");
    assert!(
        err.to_string().contains("State for model Order"),
        "expected the missing-slice message, got: {err}"
    );

    assert!(map.all(&parent).is_err());
    assert!(map.entities(&parent).is_err());
    assert!(map.ids(&parent).is_err());
    assert!(map.total(&parent).is_err());
    assert!(map.current_key(&parent).is_err());
    assert!(map.current_entity(&parent).is_err());
    assert!(map.current_page(&parent).is_err());
    assert!(map.total_pageable(&parent).is_err());
    assert!(map.is_loading(&parent).is_err());
    assert!(map.is_saving(&parent).is_err());
    assert!(map.is_deleting(&parent).is_err());
}

#[test]
fn borrowed_views_carry_extra_state_slices() {
    #[derive(Clone, Debug, Default, PartialEq)]
    struct Refresh {
        stale: bool,
    }

    struct Tracked {
        orders: EntityState<Order, Refresh>,
    }

    let map: SelectorMap<Tracked, Order, Refresh> =
        SelectorMap::new(Arc::new(|parent: &Tracked| Ok(&parent.orders)));

    let mut orders = EntityState::default();
    orders.entities.insert(Key::Uint(1), order(1));
    orders.ids.push(Key::Uint(1));
    orders.extra = Refresh { stale: true };
    let tracked = Tracked { orders };

    assert_eq!(map.all(&tracked).unwrap(), vec![&order(1)]);
    assert_eq!(map.ids(&tracked).unwrap(), &[Key::Uint(1)]);
    assert!(map.state(&tracked).unwrap().extra.stale);
}

#[test]
fn cloned_maps_share_the_deriver() {
    let map = selectors();
    let other = map.clone();

    assert!(Arc::ptr_eq(&map.derive, &other.derive));
}
