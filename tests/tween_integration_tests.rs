//! Integration tests driving full animation scenarios at a fixed timestep.
//!
//! These exercise the animator surface, the parallel join, and the
//! scheduler together the way a host game loop would.

use glam::{Vec2, Vec3};
use tweenly::{
    animate_anchored_position, animate_image_color, animate_local_scale, handle,
    shake_local_position, Animation, EaseType, Image, Parallel, RectTransform, Rgba, Scheduler,
    ShakeParams, Transform,
};

const DT: f32 = 1.0 / 60.0;

// ============================================================================
// Panel fly-in: position and fade animated in parallel under a scheduler
// ============================================================================

#[test]
fn test_panel_fly_in_with_fade() {
    let rect = handle(RectTransform {
        anchored_position: Vec2::new(-400.0, 0.0),
    });
    let image = handle(Image {
        color: Rgba::TRANSPARENT,
    });

    let slide = animate_anchored_position(
        0.4,
        &rect,
        Vec2::new(-400.0, 0.0),
        Vec2::new(0.0, 0.0),
        EaseType::EaseOut,
    );
    let fade = animate_image_color(0.25, &image, Rgba::TRANSPARENT, Rgba::WHITE, EaseType::Linear);

    let mut scheduler = Scheduler::new();
    scheduler.spawn(Box::new(Parallel::new(vec![
        Box::new(slide),
        Box::new(fade),
    ])));

    let mut frames = 0;
    while scheduler.has_active() {
        scheduler.tick(DT);
        frames += 1;
        assert!(frames < 600, "panel animation never settled");
    }

    assert_eq!(rect.borrow().anchored_position, Vec2::ZERO);
    assert_eq!(image.borrow().color, Rgba::WHITE);
    // The parallel group cannot outlast its longest member by much: 0.4s at
    // 60fps is 24 in-range frames plus the boundary and retirement frames.
    assert!(frames <= 28, "took {frames} frames");
}

// ============================================================================
// Completion ordering with heterogeneous durations
// ============================================================================

#[test]
fn test_parallel_waits_for_longest_duration() {
    let a = handle(Transform::default());
    let b = handle(Transform::default());

    let quick = animate_local_scale(0.1, &a, Vec3::ONE, Vec3::splat(1.5), EaseType::Linear);
    let slow = animate_local_scale(0.5, &b, Vec3::ONE, Vec3::splat(3.0), EaseType::Linear);
    let mut group = Parallel::new(vec![Box::new(quick), Box::new(slow)]);

    let mut elapsed = 0.0;
    while group.tick(DT) {
        elapsed += DT;
    }
    // The join can only resolve once the 0.5s member has hit its boundary.
    assert!(elapsed >= 0.5 - 2.0 * DT);
    assert_eq!(a.borrow().local_scale, Vec3::splat(1.5));
    assert_eq!(b.borrow().local_scale, Vec3::splat(3.0));
}

// ============================================================================
// Shake and settle
// ============================================================================

#[test]
fn test_shake_restores_origin_under_scheduler() {
    let origin = Vec3::new(0.5, 2.0, 0.0);
    let transform = handle(Transform {
        local_position: origin,
        ..Transform::default()
    });

    let shake = shake_local_position(
        0.25,
        &transform,
        origin,
        EaseType::Linear,
        ShakeParams {
            amount: 0.4,
            ..ShakeParams::default()
        },
    );

    let mut scheduler = Scheduler::new();
    scheduler.spawn(Box::new(shake));

    let mut displaced = false;
    let mut frames = 0;
    while scheduler.has_active() {
        scheduler.tick(DT);
        if transform.borrow().local_position.distance(origin) > 1e-3 {
            displaced = true;
        }
        frames += 1;
        assert!(frames < 600, "shake never settled");
    }

    assert!(displaced, "shake never moved the transform");
    assert!(transform.borrow().local_position.distance(origin) < 1e-5);
}

// ============================================================================
// Cancellation is layered on the scheduler, not the driver
// ============================================================================

#[test]
fn test_cancel_leaves_target_mid_flight() {
    let transform = handle(Transform::default());
    let mut scheduler = Scheduler::new();
    let id = scheduler.spawn(Box::new(tweenly::animate_local_position(
        1.0,
        &transform,
        Vec3::ZERO,
        Vec3::new(100.0, 0.0, 0.0),
        EaseType::Linear,
    )));

    for _ in 0..6 {
        scheduler.tick(DT);
    }
    let mid = transform.borrow().local_position.x;
    assert!(mid > 0.0 && mid < 100.0);

    scheduler.cancel(id);
    for _ in 0..6 {
        scheduler.tick(DT);
    }
    assert_eq!(transform.borrow().local_position.x, mid);
}
