//! Browser-side smoke test over the wasm facade.
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use scrapyard_physics::World;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn facade_drives_a_throw_end_to_end() {
    let mut world = World::new();
    world
        .load_scene(
            r#"{"objects": [
                {"id": "wall", "row": 0.0, "col": 6.0, "width": 1.0, "depth": 6.0,
                 "height": 3.0, "physics": {"mass": "infinity", "physicsType": "static"}},
                {"id": "item", "row": 2.0, "col": 2.0, "physics": {"mass": 1}}
            ]}"#
            .to_string(),
        )
        .unwrap();
    assert_eq!(world.object_count(), 2);

    world.apply_impulse("item".to_string(), 0.0, 3.0);
    assert!(world.wants_frame());

    let mut now = 0.0;
    world.frame(now);
    for _ in 0..1200 {
        if !world.wants_frame() {
            break;
        }
        now += 1000.0 / 60.0;
        world.frame(now);
    }
    assert!(!world.wants_frame(), "throw should settle");

    let count = world.sync_transforms();
    assert_eq!(count, 2);
    assert_eq!(world.transforms_len(), 2 * world.transform_stride());
    assert_eq!(world.object_ids_json(), r#"["wall","item"]"#);
}
