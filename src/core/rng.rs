// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f};

pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    pub fn next_f32(&mut self) -> Float {
        (self.next_u32() as Float) / (u32::MAX as Float)
    }

    pub fn next_2d(&mut self) -> Vector2f {
        Vector2f::new(self.next_f32(), self.next_f32())
    }
}

#[cfg(test)]
mod tests {
    use super::LcgRng;

    #[test]
    fn test_lcg_is_deterministic_per_seed() {
        let mut a = LcgRng::new(17);
        let mut b = LcgRng::new(17);
        let mut c = LcgRng::new(18);

        let seq_a: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let seq_b: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        let seq_c: Vec<u32> = (0..8).map(|_| c.next_u32()).collect();

        assert_eq!(seq_a, seq_b);
        assert_ne!(seq_a, seq_c);
    }

    #[test]
    fn test_lcg_f32_in_unit_interval() {
        let mut rng = LcgRng::new(3);
        for _ in 0..1000 {
            let v = rng.next_f32();
            assert!(v >= 0.0 && v <= 1.0);
        }
    }
}
