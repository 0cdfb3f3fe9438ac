// Copyright @yucwang 2026

use crate::core::sensor::Sensor;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;

/// Camera that shoots eye rays through a world-space view plane of
/// fixed metric extents, placed focal_distance ahead of the eye along
/// the viewing direction.
pub struct ViewPlaneCamera {
    position: Vector3f,
    forward: Vector3f,
    right: Vector3f,
    up: Vector3f,
    view_centre: Vector3f,
    scene_width: Float,
    scene_height: Float,
    bitmap: Bitmap,
}

impl ViewPlaneCamera {
    pub fn new(position: Vector3f,
               target: Vector3f,
               up: Vector3f,
               focal_distance: Float,
               scene_width: Float,
               scene_height: Float,
               width: usize,
               height: usize) -> Self {
        let forward = (target - position).normalize();
        let right = forward.cross(&up).normalize();
        let up = right.cross(&forward).normalize();

        Self {
            position,
            forward,
            right,
            up,
            view_centre: position + forward * focal_distance,
            scene_width,
            scene_height,
            bitmap: Bitmap::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.bitmap.width()
    }

    pub fn height(&self) -> usize {
        self.bitmap.height()
    }

    pub fn scene_width(&self) -> Float {
        self.scene_width
    }

    pub fn scene_height(&self) -> Float {
        self.scene_height
    }
}

impl Sensor for ViewPlaneCamera {
    fn sample_ray(&self, u: &Vector2f) -> Ray3f {
        let start = self.view_centre
            - (self.scene_width * self.right + self.scene_height * self.up) * 0.5;
        let pixel = start
            + u.x * self.scene_width * self.right
            + u.y * self.scene_height * self.up;

        Ray3f::new(self.position, pixel - self.position, None, None)
    }

    fn position(&self) -> Vector3f {
        self.position
    }

    fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    fn bitmap_mut(&mut self) -> &mut Bitmap {
        &mut self.bitmap
    }

    fn describe(&self) -> String {
        String::from("ViewPlaneCamera\n  position: Vector3f\n  forward: Vector3f\n  right: Vector3f\n  up: Vector3f\n  view_centre: Vector3f\n  scene_width: Float\n  scene_height: Float")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_plane_camera_center_ray() {
        let cam = ViewPlaneCamera::new(
            Vector3f::zeros(),
            Vector3f::new(0.0, 0.0, -1.0),
            Vector3f::new(0.0, 1.0, 0.0),
            1.0,
            2.0,
            2.0,
            4,
            4,
        );

        let ray = cam.sample_ray(&Vector2f::new(0.5, 0.5));
        let dir = ray.dir();

        assert!((dir.x - 0.0).abs() < 1e-6);
        assert!((dir.y - 0.0).abs() < 1e-6);
        assert!((dir.z + 1.0).abs() < 1e-6);
        assert!((ray.origin() - Vector3f::zeros()).norm() < 1e-6);
    }

    // Pixel (0, 0) of a 4x4 grid over a 2x2 view plane: the ray must
    // pierce the plane at start + half a pixel step on each axis.
    #[test]
    fn test_view_plane_camera_corner_pixel_ray() {
        let cam = ViewPlaneCamera::new(
            Vector3f::zeros(),
            Vector3f::new(0.0, 0.0, -1.0),
            Vector3f::new(0.0, 1.0, 0.0),
            1.0,
            2.0,
            2.0,
            4,
            4,
        );

        let u = Vector2f::new((0.0 + 0.5) / 4.0, (0.0 + 0.5) / 4.0);
        let ray = cam.sample_ray(&u);

        let expected = Vector3f::new(-0.75, -0.75, -1.0).normalize();
        assert!((ray.dir() - expected).norm() < 1e-6);
    }
}
