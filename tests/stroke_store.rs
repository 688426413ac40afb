use sketch_board::{PaletteColor, Point, StrokeStore};

fn pt(x: f32, y: f32, time: u64) -> Point {
    Point::new(x, y, time)
}

// Helper to draw a complete stroke through the given coordinates
fn draw(store: &mut StrokeStore, coords: &[(f32, f32)], color: PaletteColor) {
    let (first, rest) = coords.split_first().expect("at least one point");
    store.begin_stroke(pt(first.0, first.1, 0), color);
    for (i, &(x, y)) in rest.iter().enumerate() {
        store.extend_active_stroke(pt(x, y, i as u64 + 1));
    }
}

#[test]
fn test_begin_and_extend_scenario() {
    let mut store = StrokeStore::new();
    store.begin_stroke(pt(10.0, 10.0, 100), PaletteColor::Red);
    store.extend_active_stroke(pt(20.0, 10.0, 110));
    store.extend_active_stroke(pt(20.0, 20.0, 120));

    assert_eq!(store.strokes().len(), 1);
    let stroke = &store.strokes()[0];
    assert_eq!(stroke.color(), PaletteColor::Red);
    let coords: Vec<(f32, f32)> = stroke.points().iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(coords, vec![(10.0, 10.0), (20.0, 10.0), (20.0, 20.0)]);
}

#[test]
fn test_moves_append_in_delivery_order() {
    for n in [0usize, 1, 5, 64] {
        let mut store = StrokeStore::new();
        store.begin_stroke(pt(0.0, 0.0, 0), PaletteColor::Black);
        for i in 0..n {
            store.extend_active_stroke(pt(i as f32, (i * 2) as f32, i as u64));
        }

        let points = store.active_stroke().unwrap().points();
        assert_eq!(points.len(), n + 1);
        for (i, p) in points.iter().skip(1).enumerate() {
            assert_eq!((p.x, p.y), (i as f32, (i * 2) as f32));
        }
    }
}

#[test]
fn test_extend_without_stroke_is_noop() {
    let mut store = StrokeStore::new();
    store.extend_active_stroke(pt(1.0, 1.0, 1));

    assert!(store.strokes().is_empty());
    assert!(store.redo_stack().is_empty());
    assert_eq!(store.version(), 0);
}

#[test]
fn test_extend_only_touches_last_stroke() {
    let mut store = StrokeStore::new();
    draw(&mut store, &[(0.0, 0.0), (1.0, 1.0)], PaletteColor::Black);
    store.begin_stroke(pt(5.0, 5.0, 10), PaletteColor::Blue);
    store.extend_active_stroke(pt(6.0, 6.0, 11));

    assert_eq!(store.strokes()[0].points().len(), 2);
    assert_eq!(store.strokes()[1].points().len(), 2);
}

#[test]
fn test_out_of_order_time_is_clamped() {
    let mut store = StrokeStore::new();
    store.begin_stroke(pt(0.0, 0.0, 500), PaletteColor::Black);
    store.extend_active_stroke(pt(1.0, 0.0, 400));
    store.extend_active_stroke(pt(2.0, 0.0, 600));

    let times: Vec<u64> = store.strokes()[0].points().iter().map(|p| p.time).collect();
    assert_eq!(times, vec![500, 500, 600]);
}

#[test]
fn test_undo_redo_scenario() {
    let mut store = StrokeStore::new();
    draw(&mut store, &[(0.0, 0.0), (1.0, 1.0)], PaletteColor::Black);
    draw(&mut store, &[(5.0, 5.0), (6.0, 6.0)], PaletteColor::Red);
    let a = store.strokes()[0].clone();
    let b = store.strokes()[1].clone();

    store.undo();
    assert_eq!(store.strokes(), &[a.clone()]);
    assert_eq!(store.redo_stack(), &[b.clone()]);

    store.undo();
    assert!(store.strokes().is_empty());
    assert_eq!(store.redo_stack(), &[b.clone(), a.clone()]);

    store.redo();
    assert_eq!(store.strokes(), &[a]);
    assert_eq!(store.redo_stack(), &[b]);
}

#[test]
fn test_redo_after_undo_restores_state() {
    let mut store = StrokeStore::new();
    draw(&mut store, &[(0.0, 0.0), (1.0, 1.0)], PaletteColor::Black);
    draw(&mut store, &[(2.0, 2.0)], PaletteColor::Green);
    draw(&mut store, &[(3.0, 3.0), (4.0, 4.0), (5.0, 5.0)], PaletteColor::Blue);
    store.undo();

    let strokes = store.strokes().to_vec();
    let redo = store.redo_stack().to_vec();

    store.undo();
    store.redo();

    assert_eq!(store.strokes(), strokes.as_slice());
    assert_eq!(store.redo_stack(), redo.as_slice());
}

#[test]
fn test_new_stroke_discards_redo() {
    let mut store = StrokeStore::new();
    draw(&mut store, &[(0.0, 0.0), (1.0, 1.0)], PaletteColor::Black);
    store.undo();
    assert_eq!(store.redo_stack().len(), 1);

    draw(&mut store, &[(7.0, 7.0), (8.0, 8.0)], PaletteColor::Red);
    assert!(store.redo_stack().is_empty());
    assert_eq!(store.strokes().len(), 1);
    assert_eq!(store.strokes()[0].color(), PaletteColor::Red);

    // Nothing to bring back
    store.redo();
    assert_eq!(store.strokes().len(), 1);
}

#[test]
fn test_undo_and_redo_on_empty_are_noops() {
    let mut store = StrokeStore::new();
    store.undo();
    store.redo();

    assert!(store.strokes().is_empty());
    assert!(store.redo_stack().is_empty());
    assert!(!store.can_undo());
    assert!(!store.can_redo());
    assert_eq!(store.version(), 0);
}

#[test]
fn test_strokes_and_redo_stay_disjoint() {
    let mut store = StrokeStore::new();
    for i in 0..4 {
        draw(&mut store, &[(i as f32, 0.0), (i as f32, 1.0)], PaletteColor::Black);
    }
    let ops = [true, true, false, true, false, false, false, true];
    for undo in ops {
        if undo {
            store.undo();
        } else {
            store.redo();
        }
        assert_eq!(store.strokes().len() + store.redo_stack().len(), 4);
        for stroke in store.strokes() {
            assert!(store.redo_stack().iter().all(|r| r.id() != stroke.id()));
        }
    }
}

#[test]
fn test_clear_is_absorbing() {
    let mut store = StrokeStore::new();
    draw(&mut store, &[(0.0, 0.0), (1.0, 1.0)], PaletteColor::Black);
    draw(&mut store, &[(2.0, 2.0), (3.0, 3.0)], PaletteColor::Black);
    store.undo();

    store.clear();
    assert!(store.strokes().is_empty());
    assert!(store.redo_stack().is_empty());

    for undo in [true, false, false, true, false] {
        if undo {
            store.undo();
        } else {
            store.redo();
        }
        assert!(store.strokes().is_empty());
        assert!(store.redo_stack().is_empty());
    }
}

#[test]
fn test_clear_on_empty_board() {
    let mut store = StrokeStore::new();
    store.clear();
    assert!(store.strokes().is_empty());
    assert!(store.redo_stack().is_empty());
    assert_eq!(store.version(), 0);
}

#[test]
fn test_set_color_does_not_recolor_past_strokes() {
    let mut store = StrokeStore::new();
    store.set_color(PaletteColor::Blue);
    let color = store.current_color();
    draw(&mut store, &[(0.0, 0.0), (1.0, 1.0)], color);

    store.set_color(PaletteColor::Yellow);
    assert_eq!(store.current_color(), PaletteColor::Yellow);
    assert_eq!(store.strokes()[0].color(), PaletteColor::Blue);
}

#[test]
fn test_toggle_background() {
    let mut store = StrokeStore::new();
    assert_eq!(store.background().hex(), "#f2f2f2");
    store.toggle_background();
    assert_eq!(store.background().hex(), "#000");
    store.toggle_background();
    assert_eq!(store.background().hex(), "#f2f2f2");
}

#[test]
fn test_version_tracks_effective_mutations() {
    let mut store = StrokeStore::new();
    store.begin_stroke(pt(0.0, 0.0, 0), PaletteColor::Black); // 1
    store.extend_active_stroke(pt(1.0, 0.0, 1)); // 2
    store.undo(); // 3
    store.undo(); // no-op
    store.redo(); // 4
    store.set_color(PaletteColor::Black); // unchanged, no-op
    store.set_color(PaletteColor::Red); // 5
    store.clear(); // 6
    store.clear(); // no-op
    assert_eq!(store.version(), 6);
}
