use egui::Color32;
use paintxd::{Action, PaintConfig, PaintError, PainterState, Point, PointerSample, ToolKind};

const RED: Color32 = Color32::from_rgb(230, 41, 55);

fn state() -> PainterState {
    PainterState::new(&PaintConfig::default(), 120, 80)
}

fn press(state: &mut PainterState, x: i32, y: i32) {
    state.handle_pointer(&PointerSample {
        position: Some(Point::new(x, y)),
        pressed: true,
        down: true,
        released: false,
    });
}

fn drag(state: &mut PainterState, x: i32, y: i32) {
    state.handle_pointer(&PointerSample {
        position: Some(Point::new(x, y)),
        pressed: false,
        down: true,
        released: false,
    });
}

fn release(state: &mut PainterState, x: i32, y: i32) {
    state.handle_pointer(&PointerSample {
        position: Some(Point::new(x, y)),
        pressed: false,
        down: false,
        released: true,
    });
}

fn dab(state: &mut PainterState, x: i32, y: i32) {
    press(state, x, y);
    release(state, x, y);
}

#[test]
fn test_pencil_dot_undo_clear_scenario() {
    let mut state = state();
    assert_eq!(state.history().len(), 1);

    state.select_tool(ToolKind::Pencil);
    state.select_color(RED);
    dab(&mut state, 10, 10);

    assert_eq!(state.history().len(), 2);
    let entry = state.history().get(1).unwrap().surface();
    for (i, pixel) in entry.pixels().iter().enumerate() {
        let expected = if i == 10 * 120 + 10 { RED } else { Color32::WHITE };
        assert_eq!(*pixel, expected, "pixel {i}");
    }

    state.undo();
    assert_eq!(state.history().len(), 1);

    state.clear();
    assert_eq!(state.history().len(), 1);
    assert!(state.history().latest().surface().is_uniform(Color32::WHITE));
}

#[test]
fn test_circle_stroke_is_a_disk_of_brush_radius() {
    let mut state = state();
    state.select_color(Color32::BLUE);
    for _ in 0..10 {
        state.apply_action(Action::DecreaseSize);
    }
    assert_eq!(state.size().get(), 5);

    dab(&mut state, 40, 30);

    let entry = state.history().latest().surface();
    for y in 0..80 {
        for x in 0..120 {
            let (dx, dy) = (x - 40, y - 30);
            let expected = if dx * dx + dy * dy <= 25 {
                Color32::BLUE
            } else {
                Color32::WHITE
            };
            assert_eq!(entry.get(Point::new(x, y)), Some(expected), "({x}, {y})");
        }
    }
}

#[test]
fn test_eraser_restores_background_only_where_it_passes() {
    let mut state = state();
    state.select_tool(ToolKind::Rectangle);
    dab(&mut state, 30, 30);
    dab(&mut state, 60, 30);

    state.select_tool(ToolKind::Eraser);
    dab(&mut state, 30, 30);

    let painting = state.history().latest().surface();
    // The whole 15px square around (30, 30) is background again
    for y in 23..38 {
        for x in 23..38 {
            assert_eq!(painting.get(Point::new(x, y)), Some(Color32::WHITE));
        }
    }
    // The other square is untouched
    for y in 23..38 {
        for x in 53..68 {
            assert_eq!(painting.get(Point::new(x, y)), Some(Color32::BLACK));
        }
    }
    assert_eq!(state.history().len(), 4);
}

#[test]
fn test_drag_marks_every_frame_and_commits_once() {
    let mut state = state();
    state.select_tool(ToolKind::Pencil);

    press(&mut state, 5, 5);
    for x in 6..20 {
        drag(&mut state, x, 5);
    }
    assert_eq!(state.history().len(), 1);
    assert!(state.is_drawing());
    release(&mut state, 20, 5);

    assert_eq!(state.history().len(), 2);
    let painting = state.history().latest().surface();
    for x in 5..20 {
        assert_eq!(painting.get(Point::new(x, 5)), Some(Color32::BLACK));
    }
    assert_eq!(painting.get(Point::new(20, 5)), Some(Color32::WHITE));
}

#[test]
fn test_press_outside_drawing_area_paints_nothing() {
    let mut state = state();
    press(&mut state, -3, 10);
    drag(&mut state, 10, 10);
    release(&mut state, 10, 10);

    assert_eq!(state.history().len(), 1);
    assert!(state.compose().is_uniform(Color32::WHITE));
}

#[test]
fn test_selection_previews_without_committing() {
    let mut state = state();
    state.select_tool(ToolKind::Select);

    press(&mut state, 10, 10);
    drag(&mut state, 50, 40);
    assert!(!state.overlay().is_uniform(Color32::TRANSPARENT));
    drag(&mut state, 30, 20);
    // Only the current outline is on the overlay
    assert_eq!(state.overlay().get(Point::new(49, 10)), Some(Color32::TRANSPARENT));
    release(&mut state, 30, 20);

    assert_eq!(state.history().len(), 1);
    assert!(state.history().latest().surface().is_uniform(Color32::WHITE));
    let selection = state.selection().unwrap();
    assert_eq!((selection.x, selection.y), (10, 10));
    assert_eq!((selection.width, selection.height), (20, 10));

    let visible = state.compose();
    assert_eq!(visible.get(Point::new(10, 10)), Some(Color32::BLACK));
    assert_eq!(visible.get(Point::new(20, 15)), Some(Color32::WHITE));
}

#[test]
fn test_size_buttons_step_by_one_and_floor_at_one() {
    let mut state = state();
    state.apply_action(Action::IncreaseSize);
    assert_eq!(state.size().get(), 16);
    state.apply_action(Action::DecreaseSize);
    assert_eq!(state.size().get(), 15);

    for _ in 0..40 {
        state.apply_action(Action::DecreaseSize);
    }
    assert_eq!(state.size().get(), 1);
}

#[test]
fn test_undo_and_clear_actions() {
    let mut state = state();
    dab(&mut state, 10, 10);
    dab(&mut state, 50, 50);
    assert_eq!(state.history().len(), 3);

    state.apply_action(Action::Undo);
    assert_eq!(state.history().len(), 2);
    let painting = state.compose();
    assert_eq!(painting.get(Point::new(10, 10)), Some(Color32::BLACK));
    assert_eq!(painting.get(Point::new(50, 50)), Some(Color32::WHITE));

    state.apply_action(Action::Clear);
    assert_eq!(state.history().len(), 1);
    assert!(state.compose().is_uniform(Color32::WHITE));
}

#[test]
fn test_eraser_restores_a_custom_background_exactly() {
    let config = PaintConfig::from_json(r#"{ "background": [250, 240, 200, 255] }"#).unwrap();
    let paper = Color32::from_rgb(250, 240, 200);
    let mut state = PainterState::new(&config, 60, 40);

    state.select_tool(ToolKind::Rectangle);
    dab(&mut state, 10, 10);
    state.select_tool(ToolKind::Eraser);
    dab(&mut state, 10, 10);

    assert_eq!(state.history().latest().surface().get(Point::new(10, 10)), Some(paper));
    assert!(state.history().latest().surface().is_uniform(paper));
    assert!(state.history().latest().is_opaque());
}

#[test]
fn test_configs_that_would_break_painting_are_refused() {
    let oversized = PaintConfig::from_json(r#"{ "max_brush_size": 4294967295, "brush": { "size": 3000000000 } }"#);
    assert!(matches!(oversized, Err(PaintError::InvalidSetting { .. })));

    let see_through = PaintConfig::from_json(r#"{ "background": [255, 255, 255, 0] }"#);
    assert!(matches!(see_through, Err(PaintError::InvalidSetting { .. })));
}
