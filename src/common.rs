//! Common types shared across multiple modules.
//!
//! The surface size is the reference frame for both pointer mapping and ROI
//! normalization.

use bevy::math::{UVec2, Vec2};

use crate::constants::{SURFACE_HEIGHT, SURFACE_WIDTH};

/// Fixed dimensions of the drawing surface in logical pixels.
///
/// Surface pixel space has its origin at the top-left corner with y growing
/// downwards. In world space the surface is centered on the origin with y
/// growing upwards.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(SURFACE_WIDTH, SURFACE_HEIGHT)
    }
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// A surface with a zero dimension cannot be used as a normalization reference.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn world_to_local(&self, world: Vec2) -> Vec2 {
        let half = self.as_vec2() / 2.0;
        Vec2::new(world.x + half.x, half.y - world.y)
    }

    /// Map a world position to a surface pixel, or `None` if it falls outside.
    pub fn world_to_surface(&self, world: Vec2) -> Option<UVec2> {
        let local = self.world_to_local(world);
        let size = self.as_vec2();
        if local.x < 0.0 || local.y < 0.0 || local.x > size.x || local.y > size.y {
            return None;
        }
        Some(self.world_to_surface_clamped(world))
    }

    /// Map a world position to a surface pixel, pinning it to the surface edges.
    pub fn world_to_surface_clamped(&self, world: Vec2) -> UVec2 {
        let local = self
            .world_to_local(world)
            .clamp(Vec2::ZERO, self.as_vec2())
            .floor();
        UVec2::new(local.x as u32, local.y as u32)
    }

    /// Map a (possibly fractional) surface position back into world space.
    pub fn surface_to_world(&self, point: Vec2) -> Vec2 {
        let half = self.as_vec2() / 2.0;
        Vec2::new(point.x - half.x, half.y - point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_size_default() {
        let surface = SurfaceSize::default();
        assert_eq!(surface.width, 640);
        assert_eq!(surface.height, 480);
        assert!(!surface.is_empty());
    }

    #[test]
    fn test_world_origin_is_surface_center() {
        let surface = SurfaceSize::default();
        assert_eq!(surface.world_to_surface(Vec2::ZERO), Some(UVec2::new(320, 240)));
    }

    #[test]
    fn test_world_top_left_corner() {
        let surface = SurfaceSize::default();
        assert_eq!(
            surface.world_to_surface(Vec2::new(-320.0, 240.0)),
            Some(UVec2::ZERO)
        );
    }

    #[test]
    fn test_outside_surface_is_none() {
        let surface = SurfaceSize::default();
        assert!(surface.world_to_surface(Vec2::new(-400.0, 0.0)).is_none());
        assert!(surface.world_to_surface(Vec2::new(0.0, 300.0)).is_none());
    }

    #[test]
    fn test_clamped_pins_to_edges() {
        let surface = SurfaceSize::default();
        assert_eq!(
            surface.world_to_surface_clamped(Vec2::new(1000.0, -1000.0)),
            UVec2::new(640, 480)
        );
        assert_eq!(
            surface.world_to_surface_clamped(Vec2::new(-1000.0, 1000.0)),
            UVec2::ZERO
        );
    }

    #[test]
    fn test_surface_to_world_inverts_mapping() {
        let surface = SurfaceSize::default();
        let world = surface.surface_to_world(Vec2::new(100.0, 100.0));
        assert_eq!(world, Vec2::new(-220.0, 140.0));
        assert_eq!(surface.world_to_surface(world), Some(UVec2::new(100, 100)));
    }

    #[test]
    fn test_empty_surface() {
        assert!(SurfaceSize::new(0, 480).is_empty());
        assert!(SurfaceSize::new(640, 0).is_empty());
    }
}
