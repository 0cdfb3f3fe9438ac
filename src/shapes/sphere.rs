// Copyright @yucwang 2026

use crate::core::computation_node::{ComputationNode, generate_node_id};
use crate::core::interaction::SurfaceIntersection;
use crate::core::shape::Shape;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;

pub struct Sphere {
    id: String,
    center: Vector3f,
    radius: Float,
}

impl Sphere {
    pub fn new(center: Vector3f, radius: Float, id: Option<String>) -> Self {
        Self {
            id: id.unwrap_or_else(|| generate_node_id("Sphere")),
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn center(&self) -> Vector3f {
        self.center
    }

    pub fn radius(&self) -> Float {
        self.radius
    }
}

impl ComputationNode for Sphere {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_string(&self) -> String {
        String::from("Sphere")
    }
}

impl Shape for Sphere {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let oc = self.center - ray.origin();
        let h = ray.dir().dot(&oc);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let discriminant = h * h - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let mut t = h - sqrt_d;
        if !ray.test_segment(t) {
            t = h + sqrt_d;
            if !ray.test_segment(t) {
                return None;
            }
        }

        let p = ray.at(t);
        let normal = (p - self.center) / self.radius;
        Some(SurfaceIntersection::new(p, normal, t))
    }
}
