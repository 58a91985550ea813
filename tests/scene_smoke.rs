use scrapyard_physics::{EventPayload, LoopState, WorldCore};

// A small scrapyard room: four walls, a sell counter field, some
// decoration and one loose item, in the shape the world-setup code ships.
const ROOM: &str = r#"{
    "objects": [
        {"id": "north-wall", "row": 0.0, "col": 0.0, "width": 12.0, "depth": 1.0,
         "height": 3.0, "physics": {"mass": "infinity", "physicsType": "static"}},
        {"id": "south-wall", "row": 11.0, "col": 0.0, "width": 12.0, "depth": 1.0,
         "height": 3.0, "physics": {"mass": "infinity", "physicsType": "static"}},
        {"id": "west-wall", "row": 1.0, "col": 0.0, "width": 1.0, "depth": 10.0,
         "height": 3.0, "physics": {"mass": "infinity", "physicsType": "static"}},
        {"id": "east-wall", "row": 1.0, "col": 11.0, "width": 1.0, "depth": 10.0,
         "height": 3.0, "physics": {"mass": "infinity", "physicsType": "static"}},
        {"id": "sell-field", "row": 1.0, "col": 8.5, "width": 2.0, "depth": 2.0,
         "physics": {"physicsType": "field", "event": "sell-item"}},
        {"id": "rug", "row": 5.0, "col": 5.0, "width": 2.0, "depth": 3.0},
        {"id": "scrap-gear", "row": 6.0, "col": 6.0,
         "physics": {"mass": 0.5, "friction": 0.4, "bounceStrength": 0.6}}
    ]
}"#;

fn run_until_settled(world: &mut WorldCore, max_frames: usize) -> usize {
    let mut now = 0.0;
    world.frame(now); // stamps the clock
    for frame in 0..max_frames {
        if world.loop_state() == LoopState::Stopped {
            return frame;
        }
        now += 1000.0 / 60.0;
        world.frame(now);
    }
    max_frames
}

#[test]
fn scene_smoke_throw_bounce_sell_and_settle() {
    let mut world = WorldCore::new();
    world.load_scene_json(ROOM).expect("room scene should parse");
    assert_eq!(world.object_count(), 7);
    assert_eq!(world.loop_state(), LoopState::Stopped, "nothing moves yet");

    // Fling the gear toward the sell counter in the north-east corner.
    world.apply_impulse("scrap-gear", 295.0, 4.0);
    assert_eq!(world.loop_state(), LoopState::Running);

    let bound = world.config().world_bound;
    let mut now = 0.0;
    world.frame(now);
    for _ in 0..2000 {
        if world.loop_state() == LoopState::Stopped {
            break;
        }
        now += 1000.0 / 60.0;
        world.frame(now);

        let gear = world.object("scrap-gear").unwrap();
        let body = gear.physics.as_ref().unwrap();

        // Walls are impenetrable: the item interior never enters them.
        assert!(gear.col + gear.width <= 11.0 + 1e-3, "east wall breached");
        assert!(gear.col >= 1.0 - 1e-3, "west wall breached");
        assert!(gear.row + gear.depth <= 11.0 + 1e-3, "south wall breached");
        assert!(gear.row >= 1.0 - 1e-3, "north wall breached");

        // Ground containment and sanity.
        assert!(body.height >= 0.0);
        assert!(body.velocity >= 0.0);
        assert!(gear.row.abs() <= bound && gear.col.abs() <= bound);
    }

    // Friction drains the throw; the loop shuts itself down.
    assert_eq!(world.loop_state(), LoopState::Stopped);
    let body = world.object("scrap-gear").unwrap().physics.as_ref().unwrap();
    assert_eq!(body.velocity, 0.0);
    assert_eq!(body.height, 0.0);
    assert!(!body.active);

    // The throw crossed the sell counter exactly once on the way in.
    let events: Vec<_> = world
        .take_events()
        .into_iter()
        .filter(|e| e.name == "sell-item")
        .collect();
    assert_eq!(events.len(), 1);
    let EventPayload::Object { id } = &events[0].payload;
    assert_eq!(id, "scrap-gear");

    // Decoration never moved.
    let rug = world.object("rug").unwrap();
    assert_eq!((rug.row, rug.col), (5.0, 5.0));
}

#[test]
fn reloading_a_scene_replaces_the_world() {
    let mut world = WorldCore::new();
    world.load_scene_json(ROOM).expect("room scene should parse");
    world.apply_impulse("scrap-gear", 0.0, 2.0);

    world
        .load_scene_json(r#"{"objects": [{"id": "lone", "row": 1.0, "col": 1.0}]}"#)
        .expect("replacement scene should parse");
    assert_eq!(world.object_count(), 1);
    assert_eq!(world.loop_state(), LoopState::Stopped);
    assert!(world.object("scrap-gear").is_none());
}

#[test]
fn invalid_scenes_are_rejected_wholesale() {
    let mut world = WorldCore::new();
    world.load_scene_json(ROOM).expect("room scene should parse");

    let err = world
        .load_scene_json(r#"{"objects": [{"id": "", "row": 0, "col": 0}]}"#)
        .unwrap_err();
    assert!(err.contains("empty id"));
    // Validation runs before any mutation, so the room survives.
    assert_eq!(world.object_count(), 7);
}

#[test]
fn settle_happens_in_bounded_time() {
    let mut world = WorldCore::new();
    world.load_scene_json(ROOM).expect("room scene should parse");
    world.apply_vertical_impulse("scrap-gear", 5.0);

    let frames = run_until_settled(&mut world, 3000);
    assert!(frames < 3000, "bounce chain must terminate");
}
