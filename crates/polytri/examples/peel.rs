//! Peel a polygon ear by ear, the way an animator would consume it.
//!
//! Usage:
//!   cargo run -p polytri --example peel -- [ear|fan|monotone] [seed]
//!
//! Prints each triangle as `from -> to via ear` in emission order.

use polytri::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let algo: Algorithm = match args.next().as_deref().unwrap_or("ear").parse() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: peel [ear|fan|monotone] [seed]");
            return;
        }
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let tok = ReplayToken { seed, index: 0 };
    let polygon = match algo {
        Algorithm::EarClipping => draw_star(RadialCfg::default(), tok),
        Algorithm::Fan => draw_convex(RadialCfg::default(), tok),
        Algorithm::Monotone => draw_monotone(MonotoneCfg::default(), tok),
    };
    println!("{algo}: {} vertices, area {:.3}", polygon.len(), polygon.area());

    let mut t = Triangulator::new(polygon);
    if let Err(e) = t.triangulate(algo) {
        eprintln!("triangulation failed: {e}");
        return;
    }
    let mut step = 0;
    while let Some(tri) = t.next_triangle() {
        step += 1;
        println!(
            "step {step:>2}: ({:.2}, {:.2}) -> ({:.2}, {:.2}) via ({:.2}, {:.2})  area {:.3}",
            tri.from.x,
            tri.from.y,
            tri.to.x,
            tri.to.y,
            tri.ear.x,
            tri.ear.y,
            tri.area()
        );
    }
}
