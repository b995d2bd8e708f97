//! End-to-end tests driving a session the way a host event loop would:
//! winit-level events go into the collector, one snapshot per frame goes
//! into the session, geometry comes out.

use revolve::{AppConfig, CurveKind, EditorMode, EditorSession, InputCollector, Vec3};
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

fn session() -> (EditorSession, InputCollector) {
    (
        EditorSession::new(&AppConfig::default()),
        InputCollector::new(800, 800),
    )
}

/// One frame: move the cursor, press, release over following frames
fn click(session: &mut EditorSession, collector: &mut InputCollector, x: f64, y: f64) {
    collector.process_cursor(x, y);
    collector.process_mouse_button(MouseButton::Left, ElementState::Pressed);
    session.frame(&collector.end_frame());
    collector.process_mouse_button(MouseButton::Left, ElementState::Released);
    session.frame(&collector.end_frame());
}

#[test]
fn test_click_appends_point_at_cursor() {
    let (mut session, mut collector) = session();
    assert_eq!(session.editor().points().len(), 4);

    // Pixel (700, 100) on an 800x800 viewport is (0.75, 0.75) normalized
    click(&mut session, &mut collector, 700.0, 100.0);

    let points = session.editor().points();
    assert_eq!(points.len(), 5);
    assert!(points
        .get(4)
        .unwrap()
        .position
        .distance(Vec3::new(0.75, 0.75, 0.0)) < 0.0001);
}

#[test]
fn test_space_click_deletes_under_cursor() {
    let (mut session, mut collector) = session();

    // Seed corner (-0.5, -0.5) sits at pixel (200, 600)
    collector.process_keyboard(KeyCode::Space, ElementState::Pressed);
    click(&mut session, &mut collector, 200.0, 600.0);
    collector.process_keyboard(KeyCode::Space, ElementState::Released);

    let points = session.editor().points();
    assert_eq!(points.len(), 3);
    assert!(points
        .iter()
        .all(|p| p.position.distance(Vec3::new(-0.5, -0.5, 0.0)) > 0.1));
}

#[test]
fn test_drag_updates_curve_every_frame() {
    let (mut session, mut collector) = session();

    // Press on the seed corner (-0.5, 0.5) at pixel (200, 200)
    collector.process_cursor(200.0, 200.0);
    collector.process_mouse_button(MouseButton::Left, ElementState::Pressed);
    session.frame(&collector.end_frame());

    // Drag toward the top-left corner over several frames; each frame's
    // curve already ends at the dragged position
    for step in 1..=4 {
        let px = 200.0 - 40.0 * step as f64;
        collector.process_cursor(px, 200.0);
        let output = session.frame(&collector.end_frame());
        let expected_x = (px as f32 - 400.0) / 400.0;
        let end = *output.curve.positions.last().unwrap();
        assert!(
            end.distance(Vec3::new(expected_x, 0.5, 0.0)) < 0.0001,
            "frame {}: curve end {:?} lags the pointer",
            step,
            end
        );
    }

    collector.process_mouse_button(MouseButton::Left, ElementState::Released);
    let output = session.frame(&collector.end_frame());
    assert_eq!(output.points.len(), 4);
}

#[test]
fn test_reset_key_clears_document_in_edit_mode() {
    let (mut session, mut collector) = session();
    collector.process_keyboard(KeyCode::KeyR, ElementState::Pressed);
    let output = session.frame(&collector.end_frame());
    assert!(output.points.is_empty());
    assert!(output.curve.is_empty());
}

#[test]
fn test_full_revolution_pipeline() {
    let (mut session, mut collector) = session();

    // Author a profile in edit mode, then revolve it
    click(&mut session, &mut collector, 600.0, 100.0);
    session.set_mode(EditorMode::Revolution);
    session.set_sections(12);

    let output = session.frame(&collector.end_frame());
    let surface = output.surface.expect("surface present");
    assert!(surface.triangle_count() > 0);
    assert_eq!(surface.vertex_count(), surface.interleaved().len());

    // The curve itself is still emitted alongside the surface
    assert!(!output.curve.is_empty());
}

#[test]
fn test_orbit_drag_moves_camera_not_points() {
    let (mut session, mut collector) = session();
    session.set_mode(EditorMode::View3D);

    let before = session.frame(&collector.end_frame()).view;

    collector.process_cursor(300.0, 400.0);
    collector.process_mouse_button(MouseButton::Left, ElementState::Pressed);
    session.frame(&collector.end_frame());
    collector.process_cursor(500.0, 400.0);
    let output = session.frame(&collector.end_frame());

    assert_ne!(output.view, before);
    assert_eq!(session.editor().points().len(), 4);
}

#[test]
fn test_curve_kind_switch_keeps_document() {
    let (mut session, mut collector) = session();

    let bezier = session.frame(&collector.end_frame());
    session.set_curve_kind(CurveKind::BSpline);
    let bspline = session.frame(&collector.end_frame());

    assert_eq!(session.editor().points().len(), 4);
    assert!(!bezier.curve.is_empty());
    assert!(!bspline.curve.is_empty());
    // Different fits over the same control polygon
    assert_ne!(bezier.curve.positions.len(), bspline.curve.positions.len());
}
