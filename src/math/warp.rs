// Copyright @yucwang 2023

use super::constants::{ INV_PI, PI, Float, Vector2f, Vector3f };
use super::frame::Frame;

// Draw a direction above the given unit normal with density
// proportional to cos(theta), the importance distribution of a
// Lambertian surface. u holds two independent uniform variates.
pub fn sample_cosine_hemisphere(normal: Vector3f, u: &Vector2f) -> Vector3f {
    let r1: Float = 2.0 * PI * u.x;
    let r2: Float = u.y;
    let r2s: Float = r2.sqrt();

    let frame = Frame::from_normal(normal);
    let local = Vector3f::new(r1.cos() * r2s, r1.sin() * r2s, (1.0 - r2).sqrt());

    frame.from_local(local).normalize()
}

pub fn sample_cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    cos_theta * INV_PI
}

/* Tests for warp */
