// Copyright @yucwang 2023

use crate::math::constants::{Float, Vector3f};

pub struct Frame {
    x: Vector3f,
    y: Vector3f,
    z: Vector3f
}

impl Default for Frame {
    fn default() -> Self {
        Frame {
            x: Vector3f::new(1.0, 0.0, 0.0),
            y: Vector3f::new(0.0, 1.0, 0.0),
            z: Vector3f::new(0.0, 0.0, 1.0)
        }
    }
}

impl Frame {
    pub fn new(new_x: Vector3f, new_y: Vector3f, new_z: Vector3f) -> Frame {
        Frame {
            x: new_x,
            y: new_y,
            z: new_z
        }
    }

    // Build a frame whose z axis is the given unit normal. The reference
    // axis switches once |n.x| grows past 0.1 so the cross product can
    // never degenerate.
    pub fn from_normal(normal: Vector3f) -> Frame {
        let reference = if normal.x.abs() > 0.1 {
            Vector3f::new(0.0, 1.0, 0.0)
        } else {
            Vector3f::new(1.0, 0.0, 0.0)
        };
        let x = reference.cross(&normal).normalize();
        let y = normal.cross(&x);

        Frame {
            x,
            y,
            z: normal
        }
    }

    pub fn to_local(&self, v: Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.x), v.dot(&self.y), v.dot(&self.z))
    }

    pub fn from_local(&self, v: Vector3f) -> Vector3f {
        v.x * self.x + v.y * self.y + v.z * self.z
    }
}

pub fn reflect(d: Vector3f, n: Vector3f) -> Vector3f {
    d - n * (2.0 * d.dot(&n))
}

// Snell refraction of d through a surface with outward normal n and
// index ratio eta. Total internal reflection falls back to a mirror
// bounce so callers always get a usable direction.
pub fn refract(d: Vector3f, n: Vector3f, eta: Float) -> Vector3f {
    let cos_i = -d.dot(&n);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return reflect(d, n);
    }

    d * eta + n * (eta * cos_i - k.sqrt())
}
