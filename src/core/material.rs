// Copyright @yucwang 2026

use crate::math::constants::Float;
use crate::math::spectrum::RGBSpectrum;

/// How a surface participates in light transport beyond plain diffuse
/// shading. Call sites branch on capability, not on shape type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceClass {
    /// Procedurally checkered surface. Shaded by the pattern alone,
    /// spawns no secondary rays and does not occlude shadow rays.
    Patterned,
    /// Diffuse-only surface.
    Matte,
    /// Surface that supports mirror/gloss and refraction bounces.
    Reflective,
}

pub struct PhongMaterial {
    ambient: RGBSpectrum,
    diffuse: RGBSpectrum,
    specular: RGBSpectrum,
    emissive: RGBSpectrum,
    spec_power: Float,
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self {
            ambient: RGBSpectrum::default(),
            diffuse: RGBSpectrum::default(),
            specular: RGBSpectrum::default(),
            emissive: RGBSpectrum::default(),
            spec_power: 0.0,
        }
    }
}

impl PhongMaterial {
    pub fn new(ambient: RGBSpectrum,
               diffuse: RGBSpectrum,
               specular: RGBSpectrum,
               spec_power: Float) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            emissive: RGBSpectrum::default(),
            spec_power,
        }
    }

    pub fn with_emissive(mut self, emissive: RGBSpectrum) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn ambient(&self) -> RGBSpectrum {
        self.ambient
    }

    pub fn diffuse(&self) -> RGBSpectrum {
        self.diffuse
    }

    pub fn specular(&self) -> RGBSpectrum {
        self.specular
    }

    pub fn emissive(&self) -> RGBSpectrum {
        self.emissive
    }

    pub fn spec_power(&self) -> Float {
        self.spec_power
    }
}
