use crate::*;

use alloc::vec;
use alloc::vec::Vec;

use arcpager::{FlingModel, Gravity, Pager, PagerOptions, Viewport};

fn coordinator(options: PagerOptions, count: usize) -> ScrollCoordinator {
    ScrollCoordinator::new(options, count).unwrap()
}

/// Ticks every 16 ms until the animation stops.
fn run_to_rest(c: &mut ScrollCoordinator, mut now_ms: u64) -> u64 {
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
        assert!(now_ms < 60_000, "animation never finished");
    }
    now_ms
}

#[test]
fn easing_curves_hit_their_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOutQuint,
        Easing::Decelerate,
    ] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
    assert_eq!(Easing::EaseOutQuint.sample(0.5), 0.968_75);
    assert_eq!(Easing::Decelerate.sample(0.5), 0.75);
}

#[test]
fn tween_samples_between_endpoints() {
    let t = Tween::new(0.0, -200.0, 100, 0, Easing::Linear);
    assert_eq!(t.duration_ms, 1);
    assert_eq!(t.sample(50), 0.0);
    assert_eq!(t.sample(101), -200.0);
    assert!(t.is_done(101));

    let t = Tween::new(10.0, 20.0, 0, 100, Easing::Linear);
    assert_eq!(t.sample(50), 15.0);
    assert!(!t.is_done(99));
}

#[test]
fn snap_scroll_one_moves_exactly_one_item() {
    let pager = Pager::new(PagerOptions::new(), 10).unwrap();
    let snap = SnapEngine::new().with_snap_scroll_one(true);
    let fling = FlingModel::default();
    assert_eq!(snap.compute_snap_target(&pager, 3, 500.0, &fling), 4);
    assert_eq!(snap.compute_snap_target(&pager, 3, 7_000.0, &fling), 4);
    assert_eq!(snap.compute_snap_target(&pager, 3, -500.0, &fling), 2);

    let reversed = Pager::new(PagerOptions::new().with_reverse_layout(true), 10).unwrap();
    assert_eq!(snap.compute_snap_target(&reversed, -3, 500.0, &fling), 2);
}

#[test]
fn fling_target_truncates_the_fling_distance() {
    let pager = Pager::new(PagerOptions::new(), 100).unwrap();
    let snap = SnapEngine::new();
    let fling = FlingModel::default();

    // A slow fling travels less than one interval of finger distance.
    assert_eq!(snap.compute_snap_target(&pager, 3, 60.0, &fling), 3);
    // 4000/s travels about 2157 raw units, a bit over 7 intervals of 300.
    assert_eq!(snap.compute_snap_target(&pager, 3, 4_000.0, &fling), 10);
    assert_eq!(snap.compute_snap_target(&pager, 3, -4_000.0, &fling), -4);
}

#[test]
fn snap_fling_from_a_drag_lands_on_the_next_item() {
    let mut c = coordinator(PagerOptions::new(), 10);
    c.pager_mut().scroll_to_position(3);
    c.attach_snap(SnapEngine::new().with_snap_scroll_one(true), 0)
        .unwrap();
    assert_eq!(c.drain_events(), vec![PagerEvent::PageSelected(3)]);
    assert_eq!(c.state(), ScrollState::Idle);

    c.pointer_down(0);
    assert_eq!(c.drag_by(50.0), 50.0);
    assert_eq!(c.snap().and_then(|s| s.scroll_start()), Some(3));
    c.pointer_up(Velocity::new(500.0, 0.0), 16);
    assert_eq!(c.state(), ScrollState::Settling);

    run_to_rest(&mut c, 16);
    assert_eq!(c.state(), ScrollState::Idle);
    assert_eq!(c.pager().current_position(), 4);
    assert!((c.pager().offset() - 120.0).abs() < 1e-3);
    assert_eq!(c.drain_events().last(), Some(&PagerEvent::PageSelected(4)));
}

#[test]
fn reversed_snap_fling_settles_on_the_mirrored_neighbour() {
    let mut c = coordinator(PagerOptions::new().with_reverse_layout(true), 10);
    c.pager_mut().scroll_to_position(3);
    assert_eq!(c.pager().offset(), -90.0);
    c.attach_snap(SnapEngine::new().with_snap_scroll_one(true), 0)
        .unwrap();
    assert_eq!(c.drain_events(), vec![PagerEvent::PageSelected(3)]);

    c.pointer_down(0);
    assert_eq!(c.drag_by(50.0), 50.0);
    assert_eq!(c.snap().and_then(|s| s.scroll_start()), Some(-3));
    c.pointer_up(Velocity::new(500.0, 0.0), 16);
    assert_eq!(c.state(), ScrollState::Settling);

    run_to_rest(&mut c, 16);
    assert_eq!(c.state(), ScrollState::Idle);
    assert!((c.pager().offset() + 60.0).abs() < 1e-3);
    assert_eq!(c.pager().current_position(), 2);
    assert_eq!(c.drain_events().last(), Some(&PagerEvent::PageSelected(2)));
}

#[test]
fn outward_fling_at_the_last_item_is_not_handled() {
    let mut pager = Pager::new(PagerOptions::new(), 10).unwrap();
    pager.scroll_to_position(9);
    assert_eq!(pager.offset(), 270.0);

    let mut snap = SnapEngine::new().with_snap_scroll_one(true);
    let fling = FlingModel::default();
    assert_eq!(snap.on_fling(&pager, 500.0, &fling), None);
    assert_eq!(
        snap.on_fling(&pager, -500.0, &fling),
        Some(SnapCommand::SmoothScrollToPosition(8))
    );

    let mut c = ScrollCoordinator::from_pager(pager);
    c.attach_snap(snap, 0).unwrap();
    c.pointer_down(0);
    assert_eq!(c.drag_by(100.0), 0.0);
    assert_eq!(c.state(), ScrollState::Dragging);
    c.pointer_up(Velocity::new(500.0, 0.0), 16);
    run_to_rest(&mut c, 16);

    assert_eq!(c.state(), ScrollState::Idle);
    assert_eq!(c.pager().offset(), 270.0);
    assert!(
        !c.drain_events()
            .iter()
            .any(|e| matches!(e, PagerEvent::Scrolled { .. }))
    );
}

#[test]
fn fling_targets_are_clamped_in_bounded_mode() {
    let mut pager = Pager::new(PagerOptions::new(), 10).unwrap();
    pager.scroll_to_position(8);
    let mut snap = SnapEngine::new();
    let cmd = snap.on_fling(&pager, 8_000.0, &FlingModel::default());
    assert_eq!(cmd, Some(SnapCommand::SmoothScrollToPosition(9)));
}

#[test]
fn settle_allows_one_correction_then_accepts() {
    let mut pager = Pager::new(PagerOptions::new(), 10).unwrap();
    let mut snap = SnapEngine::new();
    let mut events = Vec::new();

    assert_eq!(
        snap.on_scroll_state_changed(&pager, ScrollState::Dragging, &mut events),
        None
    );
    pager.scroll_by(450.0);
    snap.on_scrolled(450.0, 0.0);

    let cmd = snap.on_scroll_state_changed(&pager, ScrollState::Idle, &mut events);
    assert_eq!(cmd, Some(SnapCommand::SmoothScrollBy(150.0)));
    assert!(snap.is_snapping());
    assert_eq!(snap.corrections_left(), 1);

    // The centering scroll falls short.
    pager.scroll_by(140.0);
    let cmd = snap.on_scroll_state_changed(&pager, ScrollState::Idle, &mut events);
    assert_eq!(cmd, Some(SnapCommand::SmoothScrollBy(10.0)));
    assert_eq!(snap.corrections_left(), 0);

    // So does the correction; the residual is accepted.
    pager.scroll_by(5.0);
    let cmd = snap.on_scroll_state_changed(&pager, ScrollState::Idle, &mut events);
    assert_eq!(cmd, None);
    assert!(!snap.is_snapping());
    assert_eq!(
        events,
        vec![
            PagerEvent::PageScrollStateChanged(ScrollState::Dragging),
            PagerEvent::PageScrollStateChanged(ScrollState::Idle),
            PagerEvent::PageScrollStateChanged(ScrollState::Idle),
            PagerEvent::PageScrollStateChanged(ScrollState::Idle),
            PagerEvent::PageSelected(2),
        ]
    );
}

#[test]
fn idle_without_movement_does_not_select_a_page() {
    let pager = Pager::new(PagerOptions::new(), 10).unwrap();
    let mut snap = SnapEngine::new();
    let mut events = Vec::new();
    snap.on_scroll_state_changed(&pager, ScrollState::Dragging, &mut events);
    let cmd = snap.on_scroll_state_changed(&pager, ScrollState::Idle, &mut events);
    assert_eq!(cmd, None);
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, PagerEvent::PageSelected(_)))
    );
}

#[test]
fn drag_and_release_emit_events_in_order() {
    let mut c = coordinator(PagerOptions::new(), 10);
    c.attach_snap(SnapEngine::new(), 0).unwrap();
    assert_eq!(c.drain_events(), vec![PagerEvent::PageSelected(0)]);

    c.pointer_down(0);
    assert!(c.drain_events().is_empty());
    c.drag_by(100.0);
    c.pointer_up(Velocity::default(), 16);
    assert_eq!(
        c.drain_events(),
        vec![
            PagerEvent::ScrollStateChanged(ScrollState::Dragging),
            PagerEvent::PageScrollStateChanged(ScrollState::Dragging),
            PagerEvent::Scrolled { dx: 100.0, dy: 0.0 },
            PagerEvent::ScrollStateChanged(ScrollState::Idle),
            PagerEvent::PageScrollStateChanged(ScrollState::Idle),
            PagerEvent::ScrollStateChanged(ScrollState::Settling),
            PagerEvent::PageScrollStateChanged(ScrollState::Settling),
        ]
    );

    run_to_rest(&mut c, 16);
    let events = c.drain_events();
    let (scrolled, tail) = events.split_at(events.len() - 3);
    assert!(!scrolled.is_empty());
    assert!(
        scrolled
            .iter()
            .all(|e| matches!(e, PagerEvent::Scrolled { dx, dy } if *dx < 0.0 && *dy == 0.0))
    );
    assert_eq!(
        tail,
        &[
            PagerEvent::ScrollStateChanged(ScrollState::Idle),
            PagerEvent::PageScrollStateChanged(ScrollState::Idle),
            PagerEvent::PageSelected(0),
        ]
    );
    assert!(c.pager().offset().abs() < 1e-3);
}

#[test]
fn attach_centers_an_off_center_pager() {
    let mut c = coordinator(PagerOptions::new(), 10);
    c.pager_mut().scroll_by(130.0);
    c.attach_snap(SnapEngine::new(), 0).unwrap();
    assert_eq!(c.state(), ScrollState::Settling);

    run_to_rest(&mut c, 0);
    assert_eq!(c.state(), ScrollState::Idle);
    assert!(c.pager().offset().abs() < 1e-3);
    assert_eq!(c.drain_events().last(), Some(&PagerEvent::PageSelected(0)));
}

#[test]
fn second_snap_engine_is_rejected() {
    let mut c = coordinator(PagerOptions::new(), 10);
    c.attach_snap(SnapEngine::new(), 0).unwrap();
    assert_eq!(
        c.attach_snap(SnapEngine::new(), 0),
        Err(AttachError::AlreadyAttached)
    );

    assert!(c.detach_snap().is_some());
    assert!(c.detach_snap().is_none());
    assert_eq!(c.attach_snap(SnapEngine::new(), 0), Ok(()));
}

#[test]
fn pointer_down_cancels_settling() {
    let mut c = coordinator(PagerOptions::new().with_infinite(true), 5);
    c.smooth_scroll_by(1_000.0, 0);
    assert_eq!(c.state(), ScrollState::Settling);
    c.tick(50);
    let offset = c.pager().offset();
    assert!(offset > 0.0);

    c.pointer_down(60);
    assert_eq!(c.state(), ScrollState::Dragging);
    assert!(!c.is_animating());
    assert_eq!(c.tick(100), None);
    assert_eq!(c.pager().offset(), offset);

    let events = c.drain_events();
    assert_eq!(events[0], PagerEvent::ScrollStateChanged(ScrollState::Settling));
    assert_eq!(
        events.last(),
        Some(&PagerEvent::ScrollStateChanged(ScrollState::Dragging))
    );
}

#[test]
fn smooth_scroll_duration_scales_with_distance() {
    let mut c = coordinator(PagerOptions::new().with_infinite(true), 5);
    c.set_viewport(Viewport {
        main: 1000.0,
        cross: 500.0,
    });

    c.smooth_scroll_by(1_000.0, 0);
    c.tick(599);
    assert!(c.is_animating());
    c.tick(600);
    assert!(!c.is_animating());
    assert_eq!(c.state(), ScrollState::Idle);
    assert!((c.pager().offset() - 100.0).abs() < 1e-2);

    c.smooth_scroll_by(1_000_000.0, 1_000);
    c.tick(2_999);
    assert!(c.is_animating());
    c.tick(3_000);
    assert!(!c.is_animating());
}

#[test]
fn smooth_scroll_to_position_ignores_out_of_range_targets() {
    let mut c = coordinator(PagerOptions::new(), 5);
    c.smooth_scroll_to_position(7, 0);
    assert!(!c.is_animating());

    c.smooth_scroll_to_position(2, 0);
    run_to_rest(&mut c, 0);
    assert_eq!(c.pager().current_position(), 2);
}

#[test]
fn native_fling_travels_the_spline_distance() {
    let mut c = coordinator(PagerOptions::new().with_infinite(true), 5);
    c.pointer_down(0);
    c.drag_by(1.0);
    c.pointer_up(Velocity::new(4_000.0, 0.0), 0);
    assert_eq!(c.state(), ScrollState::Settling);

    run_to_rest(&mut c, 0);
    let expected = 0.1 + FlingModel::default().distance(4_000.0) / 10.0;
    assert!((c.pager().offset() - expected).abs() < 0.5);
    assert_eq!(c.state(), ScrollState::Idle);
}

#[test]
fn slow_release_comes_to_rest_immediately() {
    let mut c = coordinator(PagerOptions::new(), 10);
    c.pointer_down(0);
    c.drag_by(20.0);
    c.pointer_up(Velocity::new(30.0, 0.0), 16);
    assert_eq!(c.state(), ScrollState::Idle);
    assert!(!c.is_animating());
}

#[test]
fn vertical_pagers_use_the_y_axis() {
    let mut c = coordinator(PagerOptions::new().with_gravity(Gravity::Left), 10);
    c.pointer_down(0);
    c.drag_by(30.0);
    // Horizontal velocity is off-axis for a vertical pager.
    c.pointer_up(Velocity::new(5_000.0, 0.0), 16);
    assert_eq!(c.state(), ScrollState::Idle);
    assert!(
        c.drain_events()
            .contains(&PagerEvent::Scrolled { dx: 0.0, dy: 30.0 })
    );
}

#[test]
fn drag_needs_a_pointer_and_a_moving_pager() {
    let mut c = coordinator(PagerOptions::new(), 10);
    assert_eq!(c.drag_by(100.0), 0.0);
    assert_eq!(c.state(), ScrollState::Idle);

    let mut frozen = coordinator(PagerOptions::new().with_move_speed(0.0), 10);
    frozen.pointer_down(0);
    assert_eq!(frozen.drag_by(100.0), 0.0);
    assert_eq!(frozen.state(), ScrollState::Dragging);
    assert_eq!(frozen.pager().offset(), 0.0);
}
