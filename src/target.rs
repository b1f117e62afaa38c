//! Mutable stand-ins for the host-owned properties animators write to.
//!
//! The host engine owns the real scene objects; these types are the minimal
//! property slots a host embeds (or mirrors) to let animators mutate them.
//! There is no hierarchy: a transform's local and world fields are
//! independent slots, and each animator writes exactly one of them.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::tween::Tweenable;

/// Shared mutable handle to an animation target.
///
/// Scheduling is single-threaded and cooperative, so plain `Rc<RefCell<_>>`
/// sharing is sufficient: within one tick each animation borrows its target
/// only for the duration of one property write.
pub type Handle<T> = Rc<RefCell<T>>;

/// Wrap a target value in a shareable [`Handle`].
pub fn handle<T>(value: T) -> Handle<T> {
    Rc::new(RefCell::new(value))
}

/// Linear RGBA color with components in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Tweenable for Rgba {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        Rgba {
            r: f32::lerp(a.r, b.r, t),
            g: f32::lerp(a.g, b.g, t),
            b: f32::lerp(a.b, b.b, t),
            a: f32::lerp(a.a, b.a, t),
        }
    }
}

/// Position/rotation/scale slots of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Position relative to the parent
    pub local_position: Vec3,
    /// World-space position
    pub position: Vec3,
    /// Scale relative to the parent
    pub local_scale: Vec3,
    /// Orientation relative to the parent, as Euler angles in degrees
    pub local_euler_angles: Vec3,
    /// World-space orientation as Euler angles in degrees
    pub euler_angles: Vec3,
    /// Orientation relative to the parent, as a quaternion
    pub local_rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            local_position: Vec3::ZERO,
            position: Vec3::ZERO,
            local_scale: Vec3::ONE,
            local_euler_angles: Vec3::ZERO,
            euler_angles: Vec3::ZERO,
            local_rotation: Quat::IDENTITY,
        }
    }
}

/// Layout slot of a UI element, positioned relative to its anchors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectTransform {
    pub anchored_position: Vec2,
}

/// A material holding named color properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Material {
    colors: HashMap<String, Rgba>,
}

impl Material {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a named color property, creating it if absent.
    pub fn set_color(&mut self, name: &str, color: Rgba) {
        self.colors.insert(name.to_owned(), color);
    }

    /// Read a named color property.
    pub fn color(&self, name: &str) -> Option<Rgba> {
        self.colors.get(name).copied()
    }
}

/// A UI image widget.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Image {
    pub color: Rgba,
}

/// A UI text widget.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Text {
    pub color: Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_lerp_midpoint() {
        let mid = Rgba::lerp(Rgba::BLACK, Rgba::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.g - 0.5).abs() < 1e-6);
        assert!((mid.b - 0.5).abs() < 1e-6);
        assert!((mid.a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.local_position, Vec3::ZERO);
        assert_eq!(t.local_scale, Vec3::ONE);
        assert_eq!(t.local_rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_material_named_colors() {
        let mut material = Material::new();
        assert_eq!(material.color("_BaseColor"), None);
        material.set_color("_BaseColor", Rgba::WHITE);
        assert_eq!(material.color("_BaseColor"), Some(Rgba::WHITE));
    }
}
