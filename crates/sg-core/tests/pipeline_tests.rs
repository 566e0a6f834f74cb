use proptest::prelude::*;

use sg_core::geometry::{segments_intersect, Point2};
use sg_core::stage::{
    generate_stage_with_seed, qualifying_rooms, GenerationParams, Room, RoomType,
};
use sg_core::{GenError, MAX_SEPARATION_STEPS, MIN_TRIANGULATION_ROOMS};

#[test]
fn test_ten_room_scenario() {
    let params = GenerationParams {
        total_rooms: 10,
        generation_radius: 20.0,
        min_room_size: 1.0,
        max_room_size: 20.0,
        major_room_threshold: 100.0,
        major_room_max_count: 10,
        ..GenerationParams::default()
    };
    let stage = generate_stage_with_seed(&params, 42).unwrap();

    assert_eq!(stage.rooms.len(), 10);
    for room in &stage.rooms {
        assert!(room.midpoint.is_finite());
        assert!((1.0..=20.0).contains(&room.width));
        assert!((1.0..=20.0).contains(&room.height));
    }

    let qualifying = stage.rooms.iter().filter(|r| r.area() >= 100.0).count();
    let major = stage.major_rooms().count();
    assert_eq!(major, qualifying.min(10));
}

#[test]
fn test_three_rooms_skip_triangulation() {
    let params = GenerationParams {
        total_rooms: 3,
        major_room_threshold: 0.0,
        ..GenerationParams::default()
    };
    for seed in 0..20 {
        let stage = generate_stage_with_seed(&params, seed).unwrap();
        assert_eq!(stage.rooms.len(), 3);
        assert!(stage.edges.is_empty());
    }
}

#[test]
fn test_touching_rooms_do_not_overlap() {
    let a = Room::new(0, Point2::new(0.0, 0.0), 6.0, 4.0);
    let b = Room::new(1, Point2::new(6.0, 0.0), 6.0, 4.0);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn test_zero_rooms_rejected() {
    let params = GenerationParams {
        total_rooms: 0,
        ..GenerationParams::default()
    };
    assert!(matches!(
        generate_stage_with_seed(&params, 1),
        Err(GenError::InvalidParameter { .. })
    ));
}

#[test]
fn test_min_above_max_rejected() {
    let params = GenerationParams {
        min_room_size: 9.0,
        max_room_size: 3.0,
        ..GenerationParams::default()
    };
    assert!(matches!(
        generate_stage_with_seed(&params, 1),
        Err(GenError::InvalidParameter { .. })
    ));
}

#[test]
fn test_showcase_builds_connected_graph() {
    let stage = generate_stage_with_seed(&GenerationParams::showcase(), 42).unwrap();
    assert!(stage.separation.steps <= MAX_SEPARATION_STEPS);
    if stage.major_order.len() >= MIN_TRIANGULATION_ROOMS {
        assert!(stage.edges.len() >= stage.major_order.len());
        assert!(stage.is_connected());
    } else {
        assert!(stage.edges.is_empty());
    }
}

#[test]
fn test_edges_meeting_at_a_room_do_not_cross() {
    for seed in 0..100 {
        let stage = generate_stage_with_seed(&GenerationParams::showcase(), seed).unwrap();
        let segments = stage.edge_segments();
        for (i, a) in segments.iter().enumerate() {
            for b in segments[i + 1..].iter().filter(|b| a.shares_endpoint(b)) {
                assert!(
                    !segments_intersect(a, b),
                    "seed {seed}: {:?} crosses {:?}",
                    a,
                    b
                );
            }
        }
    }
}

#[test]
fn test_converged_layout_has_no_overlaps() {
    for seed in 0..10 {
        let stage = generate_stage_with_seed(&GenerationParams::default(), seed).unwrap();
        if stage.separation.converged {
            assert_eq!(stage.separation.residual_overlaps, 0);
        }
    }
}

fn small_params() -> impl Strategy<Value = GenerationParams> {
    (
        1usize..30,
        1.0f64..25.0,
        1.0f64..6.0,
        0.0f64..15.0,
        0.0f64..60.0,
        0usize..12,
    )
        .prop_map(
            |(total_rooms, radius, min_size, extra, threshold, cap)| GenerationParams {
                total_rooms,
                generation_radius: radius,
                min_room_size: min_size,
                max_room_size: min_size + extra,
                major_room_threshold: threshold,
                major_room_max_count: cap,
                ..GenerationParams::default()
            },
        )
}

fn any_room() -> impl Strategy<Value = Room> {
    (-50.0f64..50.0, -50.0f64..50.0, 1.0f64..20.0, 1.0f64..20.0)
        .prop_map(|(x, y, w, h)| Room::new(0, Point2::new(x, y), w.floor(), h.floor()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_overlap_symmetric(a in any_room(), b in any_room()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        prop_assert_eq!(a.overlap_area(&b), b.overlap_area(&a));
    }

    #[test]
    fn prop_same_seed_same_stage(params in small_params(), seed in any::<u64>()) {
        let a = generate_stage_with_seed(&params, seed).unwrap();
        let b = generate_stage_with_seed(&params, seed).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_stage_invariants(params in small_params(), seed in any::<u64>()) {
        let stage = generate_stage_with_seed(&params, seed).unwrap();

        prop_assert_eq!(stage.rooms.len(), params.total_rooms);
        prop_assert!(stage.separation.steps <= MAX_SEPARATION_STEPS);

        for room in &stage.rooms {
            prop_assert!(room.midpoint.is_finite());
            prop_assert!(room.width >= 1.0 && room.height >= 1.0);
        }

        // Tag count bounded by cap and pool
        let pool = qualifying_rooms(&stage.rooms, params.major_room_threshold).len();
        let major = stage.rooms.iter().filter(|r| r.room_type == RoomType::Major).count();
        prop_assert_eq!(major, params.major_room_max_count.min(pool));
        prop_assert_eq!(major, stage.major_order.len());

        // Edges only join major rooms
        for edge in &stage.edges {
            prop_assert!(stage.rooms[edge.a].is_major());
            prop_assert!(stage.rooms[edge.b].is_major());
            prop_assert!(edge.a != edge.b);
        }

        if stage.major_order.len() < MIN_TRIANGULATION_ROOMS {
            prop_assert!(stage.edges.is_empty());
        } else {
            prop_assert!(stage.is_connected());
        }

        // No two accepted edges cross, bar edges meeting at a room
        let segments = stage.edge_segments();
        for (i, a) in segments.iter().enumerate() {
            for b in &segments[i + 1..] {
                if a.shares_room(b) {
                    continue;
                }
                prop_assert!(!segments_intersect(a, b), "{:?} crosses {:?}", a, b);
            }
        }
    }
}
