//! Scene and Driver Integration Tests
//!
//! Tests for:
//! - Scene: node creation/removal, attaching and detaching animation roots
//! - AnimationSystem: tick-rate validation, per-tick dispatch, settled roots
//! - AnimationDesc: JSON descriptions built into runtime trees

use glam::{Quat, Vec3};

use tempo::animation::builder::{parallel, position, scale, sequence};
use tempo::animation::desc::AnimationDesc;
use tempo::animation::easing::EasingType;
use tempo::animation::options::AnimationOptions;
use tempo::animation::system::AnimationSystem;
use tempo::animation::values::AttributeKind;
use tempo::errors::AnimationError;
use tempo::scene::node::Node;
use tempo::scene::scene::Scene;
use tempo::scene::transform::Transform;

const EPSILON: f32 = 1e-4;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn driver() -> AnimationSystem {
    AnimationSystem::new(60).expect("valid tick rate")
}

// ============================================================================
// Scene: nodes
// ============================================================================

#[test]
fn scene_create_node() {
    let mut scene = Scene::new();
    let handle = scene.create_node();
    assert!(scene.get_node(handle).is_some());
    assert_eq!(scene.node_count(), 1);
}

#[test]
fn scene_create_node_with_name() {
    let mut scene = Scene::new();
    let handle = scene.create_node_with_name("Aircraft");
    assert_eq!(
        scene.get_node(handle).and_then(|n| n.name.as_deref()),
        Some("Aircraft")
    );
}

#[test]
fn scene_remove_node_drops_animation() {
    let mut scene = Scene::new();
    let handle = scene.create_node();
    scene
        .attach_animation(handle, position(Vec3::X, 100, AnimationOptions::default()))
        .unwrap();
    assert_eq!(scene.animated_count(), 1);

    assert!(scene.remove_node(handle).is_some());
    assert!(scene.get_node(handle).is_none());
    assert!(scene.animation(handle).is_none());
    assert_eq!(scene.animated_count(), 0);
}

// ============================================================================
// Scene: animation components
// ============================================================================

#[test]
fn attach_to_missing_node_fails() {
    let mut scene = Scene::new();
    let handle = scene.create_node();
    scene.remove_node(handle);

    let result = scene.attach_animation(handle, position(Vec3::X, 100, AnimationOptions::default()));
    assert!(matches!(result, Err(AnimationError::NodeNotFound(h)) if h == handle));
    assert_eq!(scene.animated_count(), 0);
}

#[test]
fn attach_replaces_previous_root() {
    let mut scene = Scene::new();
    let handle = scene.create_node();

    let first = scene
        .attach_animation(handle, position(Vec3::X, 100, AnimationOptions::default()))
        .unwrap();
    assert!(first.is_none());

    let replaced = scene
        .attach_animation(handle, scale(Vec3::splat(2.0), 100, AnimationOptions::default()))
        .unwrap()
        .expect("previous root");
    assert_eq!(replaced.as_leaf().unwrap().kind(), AttributeKind::Position);
    assert_eq!(
        scene.animation(handle).unwrap().as_leaf().unwrap().kind(),
        AttributeKind::Scale
    );
}

#[test]
fn detach_cancels_animation() {
    init_logger();
    let system = driver();
    let mut scene = Scene::new();
    let handle = scene.create_node();
    scene
        .attach_animation(handle, position(Vec3::new(6.0, 0.0, 0.0), 100, AnimationOptions::default()))
        .unwrap();

    system.update(&mut scene);
    system.update(&mut scene);
    let detached = scene.detach_animation(handle).expect("attached root");
    assert!(!detached.finished());

    let frozen = scene.get_node(handle).unwrap().transform.position;
    for _ in 0..10 {
        assert_eq!(system.update(&mut scene), 0);
    }
    assert_eq!(scene.get_node(handle).unwrap().transform.position, frozen);
    assert!(scene.detach_animation(handle).is_none());
}

// ============================================================================
// AnimationSystem
// ============================================================================

#[test]
fn system_rejects_zero_tick_rate() {
    assert!(matches!(
        AnimationSystem::new(0),
        Err(AnimationError::InvalidTickRate(0))
    ));
    assert_eq!(driver().ticks_per_second(), 60);
}

#[test]
fn system_drives_root_to_completion() {
    init_logger();
    let system = driver();
    let mut scene = Scene::new();
    let handle = scene.create_node();
    scene
        .attach_animation(handle, position(Vec3::new(10.0, 0.0, 0.0), 1000, AnimationOptions::default()))
        .unwrap();

    for _ in 0..30 {
        system.update(&mut scene);
    }
    let x = scene.get_node(handle).unwrap().transform.position.x;
    assert!((x - 5.0).abs() < EPSILON, "got {x}");

    for _ in 0..30 {
        system.update(&mut scene);
    }
    assert!(scene.animation(handle).unwrap().finished());
    let x = scene.get_node(handle).unwrap().transform.position.x;
    assert!((x - 10.0).abs() < EPSILON, "got {x}");
}

#[test]
fn system_skips_settled_roots() {
    let system = driver();
    let mut scene = Scene::new();
    let short = scene.create_node();
    let long = scene.create_node();
    scene
        .attach_animation(short, position(Vec3::X, 100, AnimationOptions::default()))
        .unwrap();
    scene
        .attach_animation(long, position(Vec3::Y, 200, AnimationOptions::default()))
        .unwrap();

    for _ in 0..6 {
        assert_eq!(system.update(&mut scene), 2);
    }
    assert!(scene.animation(short).unwrap().finished());

    // A settled root stays attached and leaves its transform alone.
    scene.get_node_mut(short).unwrap().transform.position = Vec3::new(-1.0, 0.0, 0.0);
    for _ in 0..6 {
        assert_eq!(system.update(&mut scene), 1);
    }
    assert_eq!(system.update(&mut scene), 0);
    assert_eq!(scene.animated_count(), 2);
    assert_eq!(
        scene.get_node(short).unwrap().transform.position,
        Vec3::new(-1.0, 0.0, 0.0)
    );
    assert!(vec3_approx(scene.get_node(long).unwrap().transform.position, Vec3::Y));
}

#[test]
fn system_updates_each_node_independently() {
    let system = driver();
    let mut scene = Scene::new();
    let a = scene.add_node(Node::with_transform(Transform::from_position(Vec3::new(0.0, 0.0, 5.0))));
    let b = scene.add_node(Node::new());

    let tree = || {
        sequence([
            position(Vec3::X, 100, AnimationOptions::default()),
            parallel([
                scale(Vec3::splat(2.0), 100, AnimationOptions::default()),
                position(Vec3::Y, 100, AnimationOptions::default()),
            ]),
        ])
    };
    scene.attach_animation(a, tree()).unwrap();
    scene.attach_animation(b, tree()).unwrap();

    // Children finish on tick 12, the parallel group settles on 13 and the
    // root on 14.
    for _ in 0..14 {
        system.update(&mut scene);
    }

    let ta = &scene.get_node(a).unwrap().transform;
    let tb = &scene.get_node(b).unwrap().transform;
    assert!(vec3_approx(ta.position, Vec3::new(1.0, 1.0, 5.0)));
    assert!(vec3_approx(tb.position, Vec3::new(1.0, 1.0, 0.0)));
    assert!(vec3_approx(ta.scale, Vec3::splat(2.0)));
    assert!(vec3_approx(tb.scale, Vec3::splat(2.0)));
    assert!(scene.iter_animations().all(|(_, root)| root.finished()));
}

#[test]
fn iter_animations_lists_attached_roots() {
    let system = driver();
    let mut scene = Scene::new();
    let short = scene.create_node();
    let long = scene.create_node();
    let idle = scene.create_node();
    scene
        .attach_animation(short, position(Vec3::X, 100, AnimationOptions::default()))
        .unwrap();
    scene
        .attach_animation(long, position(Vec3::X, 1000, AnimationOptions::default()))
        .unwrap();

    for _ in 0..6 {
        system.update(&mut scene);
    }

    let mut settled: Vec<_> = scene
        .iter_animations()
        .map(|(handle, root)| (handle, root.finished()))
        .collect();
    settled.sort_by_key(|(handle, _)| *handle);
    let mut expected = vec![(short, true), (long, false)];
    expected.sort_by_key(|(handle, _)| *handle);
    assert_eq!(settled, expected);
    assert!(scene.iter_animations().all(|(handle, _)| handle != idle));
}

#[test]
fn animated_transform_rebuilds_local_matrix() {
    let system = driver();
    let mut scene = Scene::new();
    let handle = scene.create_node();
    scene.get_node_mut(handle).unwrap().transform.update_local_matrix();
    scene
        .attach_animation(handle, position(Vec3::new(4.0, 0.0, 0.0), 100, AnimationOptions::default()))
        .unwrap();

    for _ in 0..6 {
        system.update(&mut scene);
    }

    let transform = &mut scene.get_node_mut(handle).unwrap().transform;
    assert!(transform.is_dirty());
    assert!(transform.update_local_matrix());
    assert!(vec3_approx(
        transform.local_matrix().translation.into(),
        Vec3::new(4.0, 0.0, 0.0)
    ));
}

#[test]
fn system_reset_replays_settled_root() {
    let system = driver();
    let mut scene = Scene::new();
    let handle = scene.create_node();
    scene
        .attach_animation(handle, position(Vec3::X, 100, AnimationOptions::default()))
        .unwrap();

    for _ in 0..6 {
        system.update(&mut scene);
    }
    assert_eq!(system.update(&mut scene), 0);

    scene.animation_mut(handle).unwrap().reset();
    for _ in 0..6 {
        assert_eq!(system.update(&mut scene), 1);
    }
    assert!(vec3_approx(
        scene.get_node(handle).unwrap().transform.position,
        Vec3::new(2.0, 0.0, 0.0)
    ));
}

// ============================================================================
// AnimationDesc
// ============================================================================

#[test]
fn desc_from_json_builds_tree() -> anyhow::Result<()> {
    let desc = AnimationDesc::from_json(
        r#"{
            "type": "sequence",
            "children": [
                { "type": "position", "modifier": [10.0, 0.0, 0.0], "duration_ms": 1000 },
                {
                    "type": "parallel",
                    "children": [
                        {
                            "type": "scale",
                            "modifier": [2.0, 2.0, 2.0],
                            "duration_ms": 500,
                            "options": { "easing_type": "ease_out", "reverse": true, "reverse_count": 1 }
                        },
                        { "type": "orientation", "modifier": [0.0, 0.0, 0.0, 1.0], "duration_ms": 250 }
                    ]
                }
            ]
        }"#,
    )?;

    let system = driver();
    let mut scene = Scene::new();
    let handle = scene.create_node();
    scene.attach_animation(handle, desc.build())?;

    // 60 ticks forward, 30 + 30 for the scale and its reverse pass, then one
    // settle tick for the parallel group and one for the root.
    for _ in 0..121 {
        system.update(&mut scene);
    }
    assert!(!scene.animation(handle).unwrap().finished());
    system.update(&mut scene);
    assert!(scene.animation(handle).unwrap().finished());

    let transform = &scene.get_node(handle).unwrap().transform;
    assert!(vec3_approx(transform.position, Vec3::new(10.0, 0.0, 0.0)));
    assert!(vec3_approx(transform.scale, Vec3::ONE));
    assert!(transform.rotation.angle_between(Quat::IDENTITY) < 1e-3);
    Ok(())
}

#[test]
fn desc_options_default_when_omitted() -> anyhow::Result<()> {
    let desc = AnimationDesc::from_json(
        r#"{ "type": "position", "modifier": [1.0, 2.0, 3.0], "duration_ms": 100,
             "options": { "repeat": true } }"#,
    )?;

    let AnimationDesc::Position { options, .. } = &desc else {
        panic!("expected a position description, got {desc:?}");
    };
    assert_eq!(
        *options,
        AnimationOptions {
            repeat: true,
            ..AnimationOptions::default()
        }
    );
    assert_eq!(options.easing_type, EasingType::Linear);
    Ok(())
}

#[test]
fn desc_survives_json_round_trip() -> anyhow::Result<()> {
    let desc = AnimationDesc::Sequence {
        children: vec![AnimationDesc::Scale {
            modifier: Vec3::splat(0.5),
            duration_ms: 500,
            options: AnimationOptions::new()
                .with_easing(EasingType::EaseInOut)
                .with_repeat(4)
                .with_repeat_delay_ms(1000),
        }],
    };

    let json = desc.to_json()?;
    assert!(json.contains("ease_in_out"));
    assert_eq!(AnimationDesc::from_json(&json)?, desc);
    Ok(())
}

#[test]
fn desc_zero_orientation_falls_back_to_identity() -> anyhow::Result<()> {
    init_logger();
    let system = driver();
    let mut scene = Scene::new();
    let handle = scene.create_node();
    let desc = AnimationDesc::from_json(
        r#"{ "type": "orientation", "modifier": [0.0, 0.0, 0.0, 0.0], "duration_ms": 100 }"#,
    )?;
    scene.attach_animation(handle, desc.build())?;

    for _ in 0..6 {
        system.update(&mut scene);
    }
    assert!(scene.animation(handle).unwrap().finished());

    let rotation = scene.get_node(handle).unwrap().transform.rotation;
    assert!(rotation.is_finite());
    assert!(rotation.angle_between(Quat::IDENTITY) < 1e-3);
    Ok(())
}

#[test]
fn desc_rejects_malformed_json() {
    let result = AnimationDesc::from_json(r#"{ "type": "wobble", "duration_ms": 10 }"#);
    assert!(matches!(result, Err(AnimationError::Json(_))));
}
