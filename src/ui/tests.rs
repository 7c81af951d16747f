use super::*;
use crate::grid::select_spacing;
use eframe::egui;

fn raw_input(events: Vec<egui::Event>) -> egui::RawInput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));
    raw.events = events;
    raw
}

/// Drive one headless frame of the app on a persistent context.
fn run_frame(ctx: &egui::Context, app: &mut GridViewerApp, events: Vec<egui::Event>) -> egui::FullOutput {
    ctx.run(raw_input(events), |ctx| {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                app.draw_canvas(ui);
            });
    })
}

fn key_g() -> egui::Event {
    egui::Event::Key {
        key: egui::Key::G,
        physical_key: Some(egui::Key::G),
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::NONE,
    }
}

fn middle_button(pos: egui::Pos2, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Middle,
        pressed,
        modifiers: egui::Modifiers::NONE,
    }
}

#[test]
fn first_frame_paints_without_moving_camera() {
    let ctx = egui::Context::default();
    let mut app = GridViewerApp::default();

    let output = run_frame(&ctx, &mut app, vec![]);

    assert!(!output.shapes.is_empty());
    assert_eq!(app.state.camera.target, egui::Pos2::ZERO);
    assert_eq!(app.state.camera.zoom, 1.0);
    assert_eq!(app.state.last_spacing, Some(10));
}

#[test]
fn g_key_toggles_grid_twice_back_to_original() {
    let ctx = egui::Context::default();
    let mut app = GridViewerApp::default();
    let original = app.state.display.show_grid;

    run_frame(&ctx, &mut app, vec![key_g()]);
    assert_eq!(app.state.display.show_grid, !original);

    run_frame(&ctx, &mut app, vec![]);
    assert_eq!(app.state.display.show_grid, !original);

    run_frame(&ctx, &mut app, vec![key_g()]);
    assert_eq!(app.state.display.show_grid, original);
}

#[test]
fn middle_drag_pans_camera() {
    let ctx = egui::Context::default();
    let mut app = GridViewerApp::default();
    let start = egui::pos2(300.0, 300.0);
    let end = egui::pos2(350.0, 330.0);

    run_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(start)]);
    run_frame(&ctx, &mut app, vec![middle_button(start, true)]);
    assert!(app.state.controller.drag.active);
    assert_eq!(app.state.camera.target, egui::Pos2::ZERO);

    run_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(end)]);
    let target = app.state.camera.target;
    assert!((target - egui::pos2(-50.0, -30.0)).length() < 1.0e-3, "{target:?}");

    run_frame(&ctx, &mut app, vec![middle_button(end, false)]);
    assert!(!app.state.controller.drag.active);
    assert_eq!(app.state.camera.target, target);
}

#[test]
fn frame_input_reads_pointer_and_keys() {
    let ctx = egui::Context::default();
    let pos = egui::pos2(40.0, 60.0);

    let _ = ctx.run(raw_input(vec![egui::Event::PointerMoved(pos)]), |_| {});
    let _ = ctx.run(raw_input(vec![middle_button(pos, true), key_g()]), |ctx| {
        let input = ctx.input(FrameInput::from_egui);
        assert_eq!(input.camera.pointer, Some(pos));
        assert!(input.camera.pan_held);
        assert!(input.toggle_grid_pressed);
        assert_eq!(input.camera.scroll_ticks, 0.0);
    });
}

#[test]
fn wheel_units_convert_to_ticks() {
    assert_eq!(wheel_ticks(egui::MouseWheelUnit::Line, egui::vec2(0.0, 2.0)), 2.0);
    assert_eq!(wheel_ticks(egui::MouseWheelUnit::Line, egui::vec2(3.0, -1.0)), -1.0);
    assert_eq!(
        wheel_ticks(
            egui::MouseWheelUnit::Point,
            egui::vec2(0.0, crate::constants::POINTS_PER_SCROLL_TICK)
        ),
        1.0
    );
}

#[test]
fn scroll_ticks_ease_zoom_and_request_repaint() {
    let viewport = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1920.0, 1080.0));
    let mut state = AppState::default();
    let scroll = FrameInput {
        camera: crate::camera::CameraInput {
            pointer: Some(egui::pos2(960.0, 540.0)),
            scroll_ticks: 20.0,
            pan_held: false,
        },
        toggle_grid_pressed: false,
    };

    assert!(state.frame_update(&scroll, viewport));
    assert_eq!(state.controller.desired_zoom, 2.0);

    let mut frames = 1;
    while state.frame_update(&FrameInput::default(), viewport) {
        frames += 1;
        assert!(frames < 1_000, "zoom ease never settled");
    }
    assert_eq!(state.camera.zoom, 2.0);
    assert_eq!(state.last_spacing, Some(select_spacing(2.0, state.levels)));
    // Zooming about the viewport center keeps the target in place
    assert!(state.camera.target.to_vec2().length() < 1.0e-3);
}
