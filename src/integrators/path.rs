// Copyright @yucwang 2026

use crate::core::integrator::{Integrator, TraceFlag};
use crate::core::material::SurfaceClass;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::constants::{Float, Vector2f};
use crate::math::frame::reflect;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::math::warp::sample_cosine_hemisphere;

// Offset of a bounce ray origin along its own direction, tuned against
// self-intersection.
const BOUNCE_BIAS: Float = 1e-4;

/// Stochastic path tracer. One call to `radiance` evaluates a single
/// light path; the renderer averages `samples_per_pixel` of them.
/// Illumination arrives only through paths that land on emissive
/// surfaces, so the estimator is unbiased for the diffuse + mirror
/// material family without any direct-light sampling.
pub struct PathIntegrator {
    max_depth: u32,
    samples_per_pixel: u32,
    trace_flag: TraceFlag,
}

impl PathIntegrator {
    pub fn new(max_depth: u32, samples_per_pixel: u32) -> Self {
        Self {
            max_depth,
            samples_per_pixel,
            trace_flag: TraceFlag::DIFFUSE | TraceFlag::GLOSS,
        }
    }

    pub fn set_max_depth(&mut self, max_depth: u32) {
        self.max_depth = max_depth;
    }

    pub fn set_samples_per_pixel(&mut self, samples_per_pixel: u32) {
        self.samples_per_pixel = samples_per_pixel;
    }

    pub fn set_trace_flag(&mut self, trace_flag: TraceFlag) {
        self.trace_flag = trace_flag;
    }

    /// One recursive light-path evaluation. Depth counts down freely;
    /// once it goes negative every further bounce must survive Russian
    /// roulette at the surface reflectance, with the surviving diffuse
    /// weight rescaled to keep the estimator unbiased.
    pub fn radiance(&self, scene: &Scene, ray: &Ray3f, mut depth: i32, rng: &mut LcgRng) -> RGBSpectrum {
        let hit = match scene.ray_intersection(ray) {
            Some(hit) => hit,
            None => return RGBSpectrum::default(),
        };

        let material = match hit.material() {
            Some(material) => material,
            None => return RGBSpectrum::default(),
        };

        let emission = material.emissive();
        let mut diffuse = material.diffuse();
        let reflectance = diffuse.max_component();

        depth -= 1;
        if depth < 0 {
            // A black surface cannot scatter: terminate without the
            // divide.
            if reflectance <= 0.0 {
                return emission;
            }
            if rng.next_f32() < reflectance {
                diffuse = diffuse * (1.0 / reflectance);
            } else {
                return emission;
            }
        }

        let bounce = sample_cosine_hemisphere(hit.normal(), &rng.next_2d());
        let diffuse_ray = Ray3f::new(hit.p() + bounce * BOUNCE_BIAS, bounce, None, None);

        if self.trace_flag.contains(TraceFlag::GLOSS)
            && hit.surface_class() == SurfaceClass::Reflective {
            let mirrored = reflect(ray.dir(), hit.normal()).normalize();
            let gloss_ray = Ray3f::new(hit.p() + mirrored * BOUNCE_BIAS, mirrored, None, None);
            return emission + diffuse * self.radiance(scene, &gloss_ray, depth, rng);
        }

        emission + diffuse * self.radiance(scene, &diffuse_ray, depth, rng)
    }
}

impl Integrator for PathIntegrator {
    fn trace_ray_forward(&self, scene: &Scene, sensor: &dyn Sensor, pixel: Vector2f, rng: &mut LcgRng) -> RGBSpectrum {
        let width = sensor.bitmap().width() as Float;
        let height = sensor.bitmap().height() as Float;
        let u = Vector2f::new((pixel.x + 0.5) / width, (pixel.y + 0.5) / height);
        let ray = sensor.sample_ray(&u);

        self.radiance(scene, &ray, self.max_depth as i32, rng)
    }

    fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }
}
