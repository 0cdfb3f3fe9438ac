// Copyright @yucwang 2026

use crate::math::constants::Vector3f;
use crate::math::spectrum::RGBSpectrum;

pub struct PointLight {
    position: Vector3f,
    colour: RGBSpectrum,
}

impl PointLight {
    pub fn new(position: Vector3f, colour: RGBSpectrum) -> Self {
        Self { position, colour }
    }

    pub fn position(&self) -> Vector3f {
        self.position
    }

    pub fn colour(&self) -> RGBSpectrum {
        self.colour
    }
}
