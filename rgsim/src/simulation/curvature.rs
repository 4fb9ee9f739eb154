//! Curvature field: a height grid derived from body positions.
//!
//! The grid covers a square of side `simulation_size` centred on the origin
//! in the x/z plane, with `divisions + 1` samples per axis. Heights are stored
//! row-major: row `r` sits at `z = -size/2 + r * step`, column `c` at
//! `x = -size/2 + c * step`.
//!
//! Heights are a cache. Every [`CurvatureField::recompute`] starts again from
//! the flat baseline, so a removed or moved body never leaves a dent behind.

use super::params::FieldParameters;
use super::states::Body3;

#[derive(Debug, Clone)]
pub struct CurvatureField {
    params: FieldParameters,
    coords: Vec<f64>, // sample coordinate along either axis
    baseline: Vec<f64>,
    heights: Vec<f64>,
}

impl CurvatureField {
    pub fn new(params: FieldParameters) -> Self {
        let n = params.divisions + 1;
        let half = params.simulation_size / 2.0;
        let step = params.simulation_size / params.divisions.max(1) as f64;
        let coords = (0..n).map(|i| i as f64 * step - half).collect();

        Self {
            params,
            coords,
            baseline: vec![0.0; n * n],
            heights: vec![0.0; n * n],
        }
    }

    /// Samples per axis
    pub fn samples_per_axis(&self) -> usize {
        self.coords.len()
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn parameters(&self) -> &FieldParameters {
        &self.params
    }

    /// Flat row-major heights
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn baseline(&self) -> &[f64] {
        &self.baseline
    }

    /// Height at (`row`, `col`)
    pub fn height(&self, row: usize, col: usize) -> Option<f64> {
        let n = self.samples_per_axis();
        if row >= n || col >= n {
            return None;
        }
        Some(self.heights[row * n + col])
    }

    /// World (x, z) of sample (`row`, `col`)
    pub fn sample_xz(&self, row: usize, col: usize) -> Option<(f64, f64)> {
        Some((*self.coords.get(col)?, *self.coords.get(row)?))
    }

    /// True if every sample is back on its baseline value
    pub fn is_flat(&self) -> bool {
        self.heights == self.baseline
    }

    /// Rebuild every height from the baseline and the given bodies
    pub fn recompute(&mut self, bodies: &[Body3]) {
        self.heights.copy_from_slice(&self.baseline);

        let n = self.coords.len();
        let p = &self.params;

        // body order matters: a hole overwrites earlier dents,
        // later bodies add on top of the hole
        for body in bodies {
            let hole_r = body.radius * p.hole_factor;

            for (row, &z) in self.coords.iter().enumerate() {
                let dz = z - body.x.z;
                for (col, &x) in self.coords.iter().enumerate() {
                    let dx = x - body.x.x;
                    // planar distance, y is ignored
                    let dist = (dx * dx + dz * dz).sqrt();
                    let h = &mut self.heights[row * n + col];

                    if dist < hole_r {
                        *h = p.hole_depth;
                        continue;
                    }
                    *h += -body.m / (dist + p.offset).powf(p.exponent);
                }
            }
        }
    }
}

impl Default for CurvatureField {
    fn default() -> Self {
        Self::new(FieldParameters::default())
    }
}
