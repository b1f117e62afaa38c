//! # Tweenly - Tick-Driven Tweening Helpers
//!
//! Eased interpolation for transform position/scale/rotation, UI colors,
//! and a camera-shake effect, driven by an explicit per-frame `tick(dt)`
//! instead of engine coroutines.
//!
//! The host owns the frame clock and the scene objects; this crate owns the
//! loop that steps normalized progress through an easing curve and writes
//! each eased sample into exactly one target property. Run one animation by
//! ticking it directly, several at once with [`Parallel`], or hand them all
//! to a [`Scheduler`] ticked once per frame.
//!
//! ```
//! use glam::Vec3;
//! use tweenly::{animate_local_position, handle, Animation, EaseType, Transform};
//!
//! let transform = handle(Transform::default());
//! let mut slide = animate_local_position(
//!     1.0,
//!     &transform,
//!     Vec3::ZERO,
//!     Vec3::new(10.0, 0.0, 0.0),
//!     EaseType::EaseOut,
//! );
//! while slide.tick(1.0 / 60.0) {}
//! assert_eq!(transform.borrow().local_position.x, 10.0);
//! ```

pub mod animators;
pub mod easing;
pub mod parallel;
pub mod scheduler;
pub mod target;
pub mod tween;

pub use animators::{
    animate_anchored_position, animate_global_euler_angles, animate_global_position,
    animate_image_color, animate_local_euler_angles, animate_local_position,
    animate_local_rotation, animate_local_scale, animate_material_color, animate_text_color,
    shake_local_position, Shake, ShakeParams,
};
pub use easing::EaseType;
pub use parallel::Parallel;
pub use scheduler::{AnimationId, Scheduler};
pub use target::{handle, Handle, Image, Material, RectTransform, Rgba, Text, Transform};
pub use tween::{Animation, Tween, Tweenable};
