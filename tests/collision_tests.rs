//! Collision and geometry properties

use proptest::prelude::*;

use traffic_flow::simulation::{
    collides, colliding_pairs, normalize_degrees, outlines_overlap, Polygon, Position, Vehicle,
    VehicleId, VehicleKind,
};

fn kind_strategy() -> impl Strategy<Value = VehicleKind> {
    prop_oneof![
        Just(VehicleKind::Car),
        Just(VehicleKind::Truck),
        Just(VehicleKind::Ambulance),
    ]
}

fn vehicle_strategy(id: usize) -> impl Strategy<Value = Vehicle> {
    (kind_strategy(), 0.0..120.0f64, 0.0..120.0f64, 0.0..360.0f64).prop_map(
        move |(kind, x, y, rotation)| {
            Vehicle::with_default_shape(VehicleId(id), kind, Position::new(x, y), rotation)
                .unwrap()
        },
    )
}

fn bar(id: usize, half_length: f64, half_width: f64, position: Position) -> Vehicle {
    let shape = Polygon::from_pairs(&[
        (-half_length, half_width),
        (half_length, half_width),
        (half_length, -half_width),
        (-half_length, -half_width),
    ])
    .unwrap();
    Vehicle::new(VehicleId(id), VehicleKind::Truck, shape, position, 0.0)
}

proptest! {
    #[test]
    fn collision_is_symmetric(a in vehicle_strategy(0), b in vehicle_strategy(1)) {
        prop_assert_eq!(collides(&a, &b), collides(&b, &a));
    }

    #[test]
    fn pairs_match_pairwise_test(
        a in vehicle_strategy(0),
        b in vehicle_strategy(1),
        c in vehicle_strategy(2)
    ) {
        let vehicles = vec![a, b, c];
        let mut expected = Vec::new();
        for i in 0..3 {
            for j in (i + 1)..3 {
                if collides(&vehicles[i], &vehicles[j]) {
                    expected.push((i, j));
                }
            }
        }
        prop_assert_eq!(colliding_pairs(&vehicles), expected);
    }

    #[test]
    fn outline_overlap_matches_vehicle_test(a in vehicle_strategy(0), b in vehicle_strategy(1)) {
        prop_assert_eq!(outlines_overlap(&a.points(), &b.points()), collides(&a, &b));
    }

    #[test]
    fn normalized_rotation_in_range(degrees in -1.0e6..1.0e6f64) {
        let r = normalize_degrees(degrees);
        prop_assert!((0.0..360.0).contains(&r));
    }
}

#[test]
fn far_apart_vehicles_do_not_collide() {
    let a = bar(0, 10.0, 5.0, Position::new(0.0, 0.0));
    let b = bar(1, 10.0, 5.0, Position::new(100.0, 0.0));
    assert!(!collides(&a, &b));
}

#[test]
fn corner_overlap_collides() {
    let a = bar(0, 10.0, 5.0, Position::new(0.0, 0.0));
    let b = bar(1, 10.0, 5.0, Position::new(15.0, 5.0));
    assert!(collides(&a, &b));
}

#[test]
fn contained_vehicle_collides() {
    let big = bar(0, 50.0, 50.0, Position::new(0.0, 0.0));
    let small = bar(1, 2.0, 2.0, Position::new(10.0, 10.0));
    assert!(collides(&big, &small));
    assert!(collides(&small, &big));
}

/// Two thin bars crossed in a plus sign overlap in the middle, but no vertex
/// of either lies inside the other, so vertex containment misses it.
#[test]
fn plus_shaped_overlap_is_not_detected() {
    let horizontal = bar(0, 20.0, 2.0, Position::new(0.0, 0.0));
    let mut vertical = bar(1, 20.0, 2.0, Position::new(0.0, 0.0));
    vertical.set_rotation(90.0);

    assert!(horizontal.contains(Position::new(0.0, 0.0)));
    assert!(vertical.contains(Position::new(0.0, 0.0)));
    assert!(!collides(&horizontal, &vertical));
}
