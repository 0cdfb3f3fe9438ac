// Copyright @yucwang 2026

use crate::core::computation_node::{ComputationNode, generate_node_id};
use crate::core::interaction::SurfaceIntersection;
use crate::core::shape::Shape;
use crate::math::aabb::AABB;
use crate::math::constants::Vector3f;
use crate::math::ray::Ray3f;

/// Axis-aligned box given by two opposite corners.
pub struct Cuboid {
    id: String,
    bounds: AABB,
}

impl Cuboid {
    pub fn new(p_min: Vector3f, p_max: Vector3f, id: Option<String>) -> Self {
        Self {
            id: id.unwrap_or_else(|| generate_node_id("Cuboid")),
            bounds: AABB::new(p_min, p_max),
        }
    }

    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    fn normal_at(&self, p: Vector3f) -> Vector3f {
        let half = 0.5 * self.bounds.diagnal();
        let q = p - self.bounds.center();
        let qx = q.x / half.x.max(1e-8);
        let qy = q.y / half.y.max(1e-8);
        let qz = q.z / half.z.max(1e-8);

        let ax = qx.abs();
        let ay = qy.abs();
        let az = qz.abs();
        if ax >= ay && ax >= az {
            Vector3f::new(qx.signum(), 0.0, 0.0)
        } else if ay >= az {
            Vector3f::new(0.0, qy.signum(), 0.0)
        } else {
            Vector3f::new(0.0, 0.0, qz.signum())
        }
    }
}

impl ComputationNode for Cuboid {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_string(&self) -> String {
        String::from("Cuboid")
    }
}

impl Shape for Cuboid {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let (t_near, t_far) = self.bounds.ray_intersect_range(ray)?;

        // A clamped near root means the origin sits inside the box, so
        // the exit face is the visible one.
        let t = if t_near > ray.min_t { t_near } else { t_far };
        if !ray.test_segment(t) {
            return None;
        }

        let p = ray.at(t);
        Some(SurfaceIntersection::new(p, self.normal_at(p), t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_hit_face_normal() {
        let cuboid = Cuboid::new(Vector3f::new(-1.0, -1.0, -3.0), Vector3f::new(1.0, 1.0, -1.0), None);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), None, None);

        let hit = cuboid.ray_intersection(&ray).expect("expected intersection");
        assert!((hit.t() - 1.0).abs() < 1e-5);
        assert!((hit.normal() - Vector3f::new(0.0, 0.0, 1.0)).norm() < 1e-5);
    }

    #[test]
    fn test_cuboid_miss() {
        let cuboid = Cuboid::new(Vector3f::new(-1.0, -1.0, -3.0), Vector3f::new(1.0, 1.0, -1.0), None);
        let ray = Ray3f::new(Vector3f::new(0.0, 5.0, 0.0), Vector3f::new(0.0, 0.0, -1.0), None, None);
        assert!(cuboid.ray_intersection(&ray).is_none());
    }

    #[test]
    fn test_cuboid_hit_from_inside() {
        let cuboid = Cuboid::new(Vector3f::new(-1.0, -1.0, -1.0), Vector3f::new(1.0, 1.0, 1.0), None);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(1.0, 0.0, 0.0), None, None);

        let hit = cuboid.ray_intersection(&ray).expect("expected intersection");
        assert!((hit.t() - 1.0).abs() < 1e-5);
        assert!((hit.normal() - Vector3f::new(1.0, 0.0, 0.0)).norm() < 1e-5);
    }
}
