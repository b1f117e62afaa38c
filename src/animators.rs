//! Specialized animators over the generic tween driver.
//!
//! Each constructor captures the start/end values once, clones the target
//! handle into the apply callback, and returns a [`Tween`] that writes one
//! property per tick. Durations are in seconds.

use std::rc::Rc;

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::easing::EaseType;
use crate::target::{Handle, Image, Material, RectTransform, Rgba, Text, Transform};
use crate::tween::{Animation, Tween, Tweenable};

/// Duration of the settle tween that returns a shaken transform to its
/// origin once the tremor phase ends.
const SHAKE_SETTLE_DURATION: f32 = 0.05;

/// Build a tween that interpolates from `start` to `end` and writes each
/// sample into one property of the shared target.
fn tween_property<T, Target>(
    duration: f32,
    target: &Handle<Target>,
    start: T,
    end: T,
    easing: EaseType,
    write: impl Fn(&mut Target, T) + 'static,
) -> Tween
where
    T: Tweenable + 'static,
    Target: 'static,
{
    let target = Rc::clone(target);
    Tween::new(duration, move |t| {
        write(&mut target.borrow_mut(), T::lerp(start, end, t));
    })
    .with_easing(easing)
}

/// Animate a transform's position relative to its parent.
pub fn animate_local_position(
    duration: f32,
    transform: &Handle<Transform>,
    start: Vec3,
    end: Vec3,
    easing: EaseType,
) -> Tween {
    tween_property(duration, transform, start, end, easing, |t, v| {
        t.local_position = v
    })
}

/// Animate a transform's world-space position.
pub fn animate_global_position(
    duration: f32,
    transform: &Handle<Transform>,
    start: Vec3,
    end: Vec3,
    easing: EaseType,
) -> Tween {
    tween_property(duration, transform, start, end, easing, |t, v| {
        t.position = v
    })
}

/// Animate a UI element's anchored position.
pub fn animate_anchored_position(
    duration: f32,
    rect: &Handle<RectTransform>,
    start: Vec2,
    end: Vec2,
    easing: EaseType,
) -> Tween {
    tween_property(duration, rect, start, end, easing, |r, v| {
        r.anchored_position = v
    })
}

/// Animate a transform's local scale.
pub fn animate_local_scale(
    duration: f32,
    transform: &Handle<Transform>,
    start: Vec3,
    end: Vec3,
    easing: EaseType,
) -> Tween {
    tween_property(duration, transform, start, end, easing, |t, v| {
        t.local_scale = v
    })
}

/// Animate a transform's parent-relative orientation as Euler angles.
pub fn animate_local_euler_angles(
    duration: f32,
    transform: &Handle<Transform>,
    start: Vec3,
    end: Vec3,
    easing: EaseType,
) -> Tween {
    tween_property(duration, transform, start, end, easing, |t, v| {
        t.local_euler_angles = v
    })
}

/// Animate a transform's world-space orientation as Euler angles.
pub fn animate_global_euler_angles(
    duration: f32,
    transform: &Handle<Transform>,
    start: Vec3,
    end: Vec3,
    easing: EaseType,
) -> Tween {
    tween_property(duration, transform, start, end, easing, |t, v| {
        t.euler_angles = v
    })
}

/// Animate a transform's parent-relative rotation with spherical
/// interpolation.
pub fn animate_local_rotation(
    duration: f32,
    transform: &Handle<Transform>,
    start: Quat,
    end: Quat,
    easing: EaseType,
) -> Tween {
    tween_property(duration, transform, start, end, easing, |t, v| {
        t.local_rotation = v
    })
}

/// Animate a named color property of a material.
pub fn animate_material_color(
    duration: f32,
    material: &Handle<Material>,
    property: &str,
    start: Rgba,
    end: Rgba,
    easing: EaseType,
) -> Tween {
    let material = Rc::clone(material);
    let property = property.to_owned();
    Tween::new(duration, move |t| {
        material
            .borrow_mut()
            .set_color(&property, Rgba::lerp(start, end, t));
    })
    .with_easing(easing)
}

/// Animate a UI image's color.
pub fn animate_image_color(
    duration: f32,
    image: &Handle<Image>,
    start: Rgba,
    end: Rgba,
    easing: EaseType,
) -> Tween {
    tween_property(duration, image, start, end, easing, |i, v| i.color = v)
}

/// Animate a UI text's color.
pub fn animate_text_color(
    duration: f32,
    text: &Handle<Text>,
    start: Rgba,
    end: Rgba,
    easing: EaseType,
) -> Tween {
    tween_property(duration, text, start, end, easing, |t, v| t.color = v)
}

/// Tuning for [`shake_local_position`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShakeParams {
    /// Peak displacement in local units
    pub amount: f32,
    /// Oscillator frequency over the shake's normalized progress
    pub tremor: f32,
    /// Phase offset, lets simultaneous shakes desynchronize
    pub phase: f32,
}

impl Default for ShakeParams {
    fn default() -> Self {
        Self {
            amount: 0.2,
            tremor: 15.0,
            phase: 0.0,
        }
    }
}

enum ShakePhase {
    Tremor(Tween),
    Settle(Tween),
}

/// Two-phase shake: an eased tremor that displaces the local position with
/// two independent oscillators, then a short linear settle back to the
/// pre-shake position so no residual offset is left behind.
pub struct Shake {
    phase: ShakePhase,
    transform: Handle<Transform>,
    origin: Vec3,
    finished: bool,
}

/// Shake a transform's local position around `start_pos`.
///
/// The oscillator amplitude grows with eased progress, so the shake ramps
/// up rather than starting at full strength. The settle phase starts from
/// the transform's current local position at the moment the tremor ends;
/// mutating the same property from elsewhere mid-shake is unsupported.
pub fn shake_local_position(
    duration: f32,
    transform: &Handle<Transform>,
    start_pos: Vec3,
    easing: EaseType,
    params: ShakeParams,
) -> Shake {
    let tremor = {
        let transform = Rc::clone(transform);
        let ShakeParams {
            amount,
            tremor,
            phase,
        } = params;
        Tween::new(duration, move |t| {
            let offset = Vec3::new(
                (t * tremor + phase).sin() * t * amount,
                (t * tremor * 0.6 + phase).cos() * t * amount,
                0.0,
            );
            transform.borrow_mut().local_position = start_pos + offset;
        })
        .with_easing(easing)
    };
    Shake {
        phase: ShakePhase::Tremor(tremor),
        transform: Rc::clone(transform),
        origin: start_pos,
        finished: false,
    }
}

impl Animation for Shake {
    fn tick(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }
        match &mut self.phase {
            ShakePhase::Tremor(tween) => {
                if !tween.tick(dt) {
                    let current = self.transform.borrow().local_position;
                    log::trace!("Shake tremor finished, settling from {:?}", current);
                    self.phase = ShakePhase::Settle(animate_local_position(
                        SHAKE_SETTLE_DURATION,
                        &self.transform,
                        current,
                        self.origin,
                        EaseType::Linear,
                    ));
                }
                true
            }
            ShakePhase::Settle(tween) => {
                let running = tween.tick(dt);
                if !running {
                    self.finished = true;
                }
                running
            }
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
