//! Random simple polygons in 2D (radial jitter, monotone chains, combs, replay tokens).
//!
//! Purpose
//! - Provide small, deterministic samplers for the input classes the
//!   triangulator handles: star-shaped (simple), convex, x-monotone, and thin
//!   non-star combs.
//! - Every draw is reproducible from a replay token `(seed, index)`.
//!
//! Model
//! - Star: `n` sorted, jittered angles around the origin with jittered radii.
//!   Sorted distinct angles and positive radii make the ring simple.
//! - Convex: same angles, constant radius (all vertices on a circle).
//! - Monotone: leftmost and rightmost anchors on the x-axis; the remaining
//!   vertices are split between a lower chain (y < 0) and an upper chain (y > 0),
//!   each sorted by x.
//! - Comb: a spine along x = 0 with horizontal teeth stacked in y. Each tooth
//!   edge carries jittered intermediate vertices, giving shallow dents and
//!   bulges that sit close to the neighboring tooth. Two teeth make a C shape.
//!
//! All rings are produced in counterclockwise order.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ring::Ring;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration (star and convex draws).
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with
    /// `u∈[-radial_jitter, radial_jitter]`. Ignored by `draw_convex`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.6,
            base_radius: 100.0,
            random_phase: true,
        }
    }
}

/// Monotone sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct MonotoneCfg {
    pub vertex_count: VertexCount,
    /// Distance between the leftmost and rightmost anchors.
    pub width: f64,
    /// Maximum |y| of chain vertices.
    pub height: f64,
}

impl Default for MonotoneCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            width: 200.0,
            height: 100.0,
        }
    }
}

/// Comb sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CombCfg {
    /// Number of teeth, at least 1.
    pub teeth: usize,
    /// Jittered vertices inserted along each long tooth edge.
    pub notches: usize,
    /// Side of the bounding square.
    pub size: f64,
    /// Tooth thickness as a fraction of the tooth pitch. Clamped to [0.01, 0.45].
    pub thickness: f64,
    /// Notch offset as a fraction of 0.4 * thickness. Clamped to [0, 1].
    pub jitter: f64,
}

impl Default for CombCfg {
    fn default() -> Self {
        Self {
            teeth: 3,
            notches: 3,
            size: 1.0,
            thickness: 0.1,
            jitter: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer over seed and index.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn radial_angles(rng: &mut StdRng, n: usize, cfg: &RadialCfg) -> Vec<f64> {
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    // Jitter stays below half the spacing, so the angles remain sorted.
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            phase + (k as f64) * delta + jitter
        })
        .collect()
}

/// Draw a star-shaped simple polygon around the origin.
pub fn draw_star(cfg: RadialCfg, tok: ReplayToken) -> Ring {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let angles = radial_angles(&mut rng, n, &cfg);
    angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Draw a convex polygon inscribed in the circle of radius `base_radius`.
pub fn draw_convex(cfg: RadialCfg, tok: ReplayToken) -> Ring {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let r0 = cfg.base_radius.max(1e-9);
    radial_angles(&mut rng, n, &cfg)
        .into_iter()
        .map(|th| Vector2::new(th.cos() * r0, th.sin() * r0))
        .collect()
}

/// Draw an x-monotone simple polygon spanning `[0, width]` on the x-axis.
pub fn draw_monotone(cfg: MonotoneCfg, tok: ReplayToken) -> Ring {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let width = cfg.width.max(1e-9);
    let height = cfg.height.max(1e-9);
    let interior = n - 2;
    let upper_count = rng.gen_range(0..=interior);
    let mut chain = |count: usize, sign: f64| -> Vec<Vector2<f64>> {
        let mut xs: Vec<f64> = (0..count)
            .map(|_| rng.gen_range(0.01..0.99) * width)
            .collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        xs.into_iter()
            .map(|x| Vector2::new(x, sign * rng.gen_range(0.1..1.0) * height))
            .collect()
    };
    let lower = chain(interior - upper_count, -1.0);
    let upper = chain(upper_count, 1.0);

    let mut pts = Vec::with_capacity(n);
    pts.push(Vector2::new(0.0, 0.0));
    pts.extend(lower);
    pts.push(Vector2::new(width, 0.0));
    pts.extend(upper.into_iter().rev());
    pts.into_iter().collect()
}

/// Draw a comb with teeth pointing toward +x inside `[0, size]²`.
///
/// Yields `teeth * (2 * notches + 4)` vertices.
pub fn draw_comb(cfg: CombCfg, tok: ReplayToken) -> Ring {
    let mut rng = tok.to_std_rng();
    let teeth = cfg.teeth.max(1);
    let size = cfg.size.max(1e-9);
    let pitch = size / teeth as f64;
    let thick = cfg.thickness.clamp(0.01, 0.45) * pitch;
    // Offsets stay below 0.4 * thick, so a tooth never pinches shut and the
    // gap to the next tooth stays open.
    let amp = 0.4 * thick * cfg.jitter.clamp(0.0, 1.0);
    let spine = 0.05 * size;
    let m = cfg.notches;

    let mut pts = Vec::with_capacity(teeth * (2 * m + 4));
    for i in 0..teeth {
        let y0 = i as f64 * pitch;
        let y1 = y0 + thick;
        let len = size * rng.gen_range(0.5..=1.0);
        let xs: Vec<f64> = (1..=m)
            .map(|j| spine + (len - spine) * j as f64 / (m + 1) as f64)
            .collect();
        // Outermost corners sit on x = 0, the rest on the spine's inner edge.
        let corner_x = |outer: bool| if outer { 0.0 } else { spine };

        pts.push(Vector2::new(corner_x(i == 0), y0));
        for &x in &xs {
            pts.push(Vector2::new(x, y0 + rng.gen_range(-1.0..=1.0) * amp));
        }
        pts.push(Vector2::new(len, y0));
        pts.push(Vector2::new(len, y1));
        for &x in xs.iter().rev() {
            pts.push(Vector2::new(x, y1 + rng.gen_range(-1.0..=1.0) * amp));
        }
        pts.push(Vector2::new(corner_x(i + 1 == teeth), y1));
    }
    pts.into_iter().collect()
}
