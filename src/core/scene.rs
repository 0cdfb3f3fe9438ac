// Copyright @yucwang 2026

use crate::core::interaction::SurfaceIntersection;
use crate::core::light::PointLight;
use crate::core::material::{PhongMaterial, SurfaceClass};
use crate::core::sensor::Sensor;
use crate::core::shape::Shape;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use std::sync::Arc;

pub struct SceneObject {
    pub shape: Arc<dyn Shape>,
    pub material: Arc<PhongMaterial>,
    pub surface_class: SurfaceClass,
}

impl SceneObject {
    pub fn new(shape: Arc<dyn Shape>, material: Arc<PhongMaterial>) -> Self {
        Self { shape, material, surface_class: SurfaceClass::Matte }
    }

    pub fn with_surface_class(mut self, surface_class: SurfaceClass) -> Self {
        self.surface_class = surface_class;
        self
    }

    pub fn shape(&self) -> &Arc<dyn Shape> {
        &self.shape
    }
}

pub struct Scene {
    objects: Vec<SceneObject>,
    lights: Vec<PointLight>,
    sensors: Vec<Box<dyn Sensor>>,
    background: RGBSpectrum,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            sensors: Vec::new(),
            background: RGBSpectrum::default(),
        }
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &Vec<SceneObject> {
        &self.objects
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn lights(&self) -> &Vec<PointLight> {
        &self.lights
    }

    pub fn set_background_colour(&mut self, background: RGBSpectrum) {
        self.background = background;
    }

    pub fn background_colour(&self) -> RGBSpectrum {
        self.background
    }

    pub fn add_sensor(&mut self, sensor: Box<dyn Sensor>) {
        self.sensors.push(sensor);
    }

    pub fn sensors(&self) -> &Vec<Box<dyn Sensor>> {
        &self.sensors
    }

    pub fn camera(&self, camera_id: usize) -> Option<&dyn Sensor> {
        self.sensors.get(camera_id).map(|s| s.as_ref())
    }

    pub fn take_sensor(&mut self, camera_id: usize) -> Option<Box<dyn Sensor>> {
        if camera_id < self.sensors.len() {
            Some(self.sensors.remove(camera_id))
        } else {
            None
        }
    }

    pub fn insert_sensor(&mut self, camera_id: usize, sensor: Box<dyn Sensor>) {
        if camera_id <= self.sensors.len() {
            self.sensors.insert(camera_id, sensor);
        } else {
            self.sensors.push(sensor);
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Nearest intersection along the ray, with the winning object's
    /// material and surface class attached. Linear scan over the object
    /// list; a miss is `None`, never an error.
    pub fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let mut best: Option<(usize, SurfaceIntersection)> = None;
        for (idx, object) in self.objects.iter().enumerate() {
            if let Some(hit) = object.shape.ray_intersection(ray) {
                let closer = match &best {
                    Some((_, current)) => hit.t() < current.t(),
                    None => true,
                };
                if closer {
                    best = Some((idx, hit));
                }
            }
        }

        best.map(|(idx, hit)| {
            let object = &self.objects[idx];
            hit.with_material(object.material.clone())
                .with_surface_class(object.surface_class)
                .with_object_index(Some(idx))
        })
    }
}
