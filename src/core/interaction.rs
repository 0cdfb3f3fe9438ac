// Copyright @yucwang 2023

use crate::core::material::{PhongMaterial, SurfaceClass};
use crate::math::constants::{ Float, Vector3f };
use std::sync::Arc;

pub struct SurfaceIntersection {
    p: Vector3f,
    normal: Vector3f,
    t: Float,
    material: Option<Arc<PhongMaterial>>,
    surface_class: SurfaceClass,
    object_index: Option<usize>,
}

impl SurfaceIntersection {
    pub fn new(new_p: Vector3f,
               new_normal: Vector3f,
               new_t: Float) -> Self {
        Self { p: new_p, normal: new_normal, t: new_t,
               material: None, surface_class: SurfaceClass::Matte,
               object_index: None }
    }

    pub fn t(&self) -> Float {
        self.t
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    pub fn material(&self) -> Option<&PhongMaterial> {
        self.material.as_deref()
    }

    pub fn surface_class(&self) -> SurfaceClass {
        self.surface_class
    }

    pub fn object_index(&self) -> Option<usize> {
        self.object_index
    }

    pub fn with_material(self, new_material: Arc<PhongMaterial>) -> Self {
        Self {
            material: Some(new_material),
            ..self
        }
    }

    pub fn with_surface_class(self, new_class: SurfaceClass) -> Self {
        Self {
            surface_class: new_class,
            ..self
        }
    }

    pub fn with_object_index(self, new_object_index: Option<usize>) -> Self {
        Self {
            object_index: new_object_index,
            ..self
        }
    }
}
