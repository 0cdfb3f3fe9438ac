// Copyright @yucwang 2026

use crate::core::computation_node::{ComputationNode, generate_node_id};
use crate::core::interaction::SurfaceIntersection;
use crate::core::shape::Shape;
use crate::math::constants::{EPSILON, Vector3f};
use crate::math::ray::Ray3f;

/// Infinite plane through a point with a fixed outward normal.
pub struct Plane {
    id: String,
    point: Vector3f,
    normal: Vector3f,
}

impl Plane {
    pub fn new(point: Vector3f, normal: Vector3f, id: Option<String>) -> Self {
        Self {
            id: id.unwrap_or_else(|| generate_node_id("Plane")),
            point,
            normal: normal.normalize(),
        }
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }
}

impl ComputationNode for Plane {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_string(&self) -> String {
        String::from("Plane")
    }
}

impl Shape for Plane {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let denom = ray.dir().dot(&self.normal);
        if denom.abs() < EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(&self.normal) / denom;
        if !ray.test_segment(t) {
            return None;
        }

        Some(SurfaceIntersection::new(ray.at(t), self.normal, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_hit() {
        let plane = Plane::new(Vector3f::zeros(), Vector3f::new(0.0, 1.0, 0.0), None);
        let ray = Ray3f::new(Vector3f::new(0.0, 2.0, 0.0), Vector3f::new(0.0, -1.0, 0.0), None, None);

        let hit = plane.ray_intersection(&ray).expect("expected intersection");
        assert!((hit.t() - 2.0).abs() < 1e-5);
        assert!((hit.normal() - Vector3f::new(0.0, 1.0, 0.0)).norm() < 1e-5);
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let plane = Plane::new(Vector3f::zeros(), Vector3f::new(0.0, 1.0, 0.0), None);
        let ray = Ray3f::new(Vector3f::new(0.0, 2.0, 0.0), Vector3f::new(1.0, 0.0, 0.0), None, None);
        assert!(plane.ray_intersection(&ray).is_none());
    }

    #[test]
    fn test_plane_behind_origin_misses() {
        let plane = Plane::new(Vector3f::zeros(), Vector3f::new(0.0, 1.0, 0.0), None);
        let ray = Ray3f::new(Vector3f::new(0.0, 2.0, 0.0), Vector3f::new(0.0, 1.0, 0.0), None, None);
        assert!(plane.ray_intersection(&ray).is_none());
    }
}
