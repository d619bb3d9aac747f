//! Jittered-grid particle sampling over the canvas.
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::layout::Instance;
use crate::rng::between;
use crate::sampling::{Canvas, ParticleSampling};

/// Near-square grid with per-cell jitter.
///
/// The grid has `ceil(sqrt(n * aspect))` columns and `ceil(sqrt(n / aspect))` rows, which
/// always holds at least `n` cells. Cells are visited in row-major order until `n`
/// instances exist. Each cell draws, in order, an x offset, a y offset and a depth, even
/// when `jitter` is zero.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridJitter {
    /// Approximate instances per density cell.
    pub density: f64,
    /// Offset amount in cell halves; 0 keeps cell centers, 1 reaches cell edges.
    pub jitter: f64,
}

impl GridJitter {
    pub fn new(density: f64, jitter: f64) -> Self {
        Self { density, jitter }
    }
}

impl ParticleSampling for GridJitter {
    fn generate(&self, canvas: &Canvas, rng: &mut dyn RngCore) -> Vec<Instance> {
        let n = canvas.instance_count(self.density);
        if n == 0 {
            return Vec::new();
        }

        let w = canvas.extent.x;
        let h = canvas.extent.y;
        let aspect = w / h;
        let columns = (n as f64 * aspect).sqrt().ceil() as usize;
        let rows = (n as f64 / aspect).sqrt().ceil() as usize;

        let cell_w = w / columns as f64;
        let cell_h = h / rows as f64;

        let jitter_x = self.jitter * cell_w / 2.0;
        let jitter_y = self.jitter * cell_h / 2.0;

        let half = canvas.half_extent();
        let start_x = -half.x;
        let start_y = -half.y;

        let mut points = Vec::with_capacity(n);
        'rows: for row in 0..rows {
            for col in 0..columns {
                if points.len() >= n {
                    break 'rows;
                }
                let cx = start_x + col as f64 * cell_w + cell_w / 2.0;
                let cy = start_y + row as f64 * cell_h + cell_h / 2.0;
                let dx = between(-jitter_x, jitter_x, rng);
                let dy = between(-jitter_y, jitter_y, rng);
                let depth = between(0.0, 1.0, rng);
                points.push(Instance::new(cx + dx, cy + dy, depth));
            }
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::rng::SeededRng;

    struct CountingRng {
        draws: usize,
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            0
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
    }

    #[test]
    fn exact_count_without_jitter_forms_lattice() {
        let grid = GridJitter::new(20.0, 0.0);
        let mut rng = SeededRng::new(12345);
        let pts = grid.generate(&Canvas::default(), &mut rng);
        assert_eq!(pts.len(), 960);
        assert!(pts.iter().all(|p| p.rotation == 0.0));

        // 36 columns x 27 rows; the last row is partially filled.
        let cell = DVec2::new(800.0 / 36.0, 600.0 / 27.0);
        for (i, p) in pts.iter().enumerate() {
            let col = (i % 36) as f64;
            let row = (i / 36) as f64;
            let expected = DVec2::new(
                -400.0 + col * cell.x + cell.x / 2.0,
                -300.0 + row * cell.y + cell.y / 2.0,
            );
            assert_eq!(p.position(), expected, "instance {i}");
        }
    }

    #[test]
    fn consumes_three_draws_per_instance_even_without_jitter() {
        let mut rng = CountingRng { draws: 0 };
        let pts = GridJitter::new(1.0, 0.0).generate(&Canvas::default(), &mut rng);
        assert_eq!(pts.len(), 48);
        assert_eq!(rng.draws, 48 * 3);
    }

    #[test]
    fn draw_order_is_offset_x_offset_y_depth() {
        let grid = GridJitter::new(1.0, 1.0);
        let pts = grid.generate(&Canvas::default(), &mut SeededRng::new(7));

        let mut reference = SeededRng::new(7);
        // 48 instances: 8 columns x 6 rows of 100x100 cells.
        let dx = reference.between(-50.0, 50.0);
        let dy = reference.between(-50.0, 50.0);
        let depth = reference.between(0.0, 1.0);
        assert_eq!(pts[0].x, -350.0 + dx);
        assert_eq!(pts[0].y, -250.0 + dy);
        assert_eq!(pts[0].depth, depth);
    }

    #[test]
    fn jitter_stays_within_half_cell() {
        let pts = GridJitter::new(12.0, 1.0).generate(&Canvas::default(), &mut StdRng::seed_from_u64(3));
        assert_eq!(pts.len(), 576);
        for p in &pts {
            assert!((-400.0..=400.0).contains(&p.x));
            assert!((-300.0..=300.0).contains(&p.y));
            assert!((0.0..1.0).contains(&p.depth));
        }
    }

    #[test]
    fn same_seed_same_output_different_seed_different_output() {
        let grid = GridJitter::new(20.0, 0.5);
        let a = grid.generate(&Canvas::default(), &mut SeededRng::new(33333));
        let b = grid.generate(&Canvas::default(), &mut SeededRng::new(33333));
        let c = grid.generate(&Canvas::default(), &mut SeededRng::new(44444));
        assert_eq!(a, b);
        assert_eq!(a.len(), c.len());
        assert_ne!(a, c);
    }

    #[test]
    fn zero_density_is_empty() {
        let mut rng = CountingRng { draws: 0 };
        assert!(GridJitter::new(0.0, 0.5)
            .generate(&Canvas::default(), &mut rng)
            .is_empty());
        assert_eq!(rng.draws, 0);
    }
}
