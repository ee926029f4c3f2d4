use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use polytri::geom2::rand::{
    draw_comb, draw_convex, draw_monotone, draw_star, CombCfg, MonotoneCfg, RadialCfg,
    ReplayToken, VertexCount,
};
use polytri::ring::Ring;
use polytri::triangulate::{Algorithm, Triangulator};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod record;

use io::{load_polygon, write_json, TriangleRecord};
use record::{write_record, Run};

#[derive(Parser)]
#[command(name = "polytri-cli")]
#[command(about = "Triangulate polygons and sample test inputs")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate a polygon file and write the ordered triangles as JSON
    Triangulate {
        /// ear | fan | monotone
        #[arg(long, default_value = "ear")]
        algo: Algorithm,
        /// Polygon vertices, `.json` ([[x, y], ...]) or `.csv` (x,y columns)
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a reproducible random polygon as JSON
    ///
    /// For `comb`, `--vertices` is the number of teeth.
    Sample {
        #[arg(long, value_enum, default_value_t = SampleKind::Star)]
        kind: SampleKind,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print engine version, build commit and available algorithms as JSON
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SampleKind {
    Star,
    Convex,
    Monotone,
    Comb,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Triangulate { algo, input, out } => triangulate(algo, input, out),
        Action::Sample {
            kind,
            vertices,
            seed,
            index,
            out,
        } => sample(kind, vertices, ReplayToken { seed, index }, out),
        Action::Report => report(),
    }
}

fn triangulate(algo: Algorithm, input: PathBuf, out: PathBuf) -> Result<()> {
    tracing::info!(%algo, input = %input.display(), out = %out.display(), "triangulate");
    let points = load_polygon(&input)?;
    let vertices = points.len();
    let mut t = Triangulator::new(Ring::new(points));
    let polygon_area = t.polygon().area();
    let triangles = t
        .triangulate(algo)
        .with_context(|| format!("{algo} triangulation of {}", input.display()))?;
    let triangle_area: f64 = triangles.iter().map(|tri| tri.area()).sum();
    tracing::info!(vertices, triangles = triangles.len(), triangle_area, "triangulated");

    let records: Vec<TriangleRecord> = triangles.iter().map(TriangleRecord::from).collect();
    write_json(&out, &records)?;
    write_record(
        &out,
        Run::Triangulate {
            algorithm: algo.name().to_string(),
            input: input.to_string_lossy().into_owned(),
            vertices,
            triangles: records.len(),
            polygon_area,
            triangle_area,
        },
    )?;
    Ok(())
}

fn sample(kind: SampleKind, vertices: usize, tok: ReplayToken, out: PathBuf) -> Result<()> {
    tracing::info!(?kind, vertices, seed = tok.seed, index = tok.index, "sample");
    let count = VertexCount::Fixed(vertices);
    let ring = match kind {
        SampleKind::Star => draw_star(
            RadialCfg {
                vertex_count: count,
                ..RadialCfg::default()
            },
            tok,
        ),
        SampleKind::Convex => draw_convex(
            RadialCfg {
                vertex_count: count,
                ..RadialCfg::default()
            },
            tok,
        ),
        SampleKind::Monotone => draw_monotone(
            MonotoneCfg {
                vertex_count: count,
                ..MonotoneCfg::default()
            },
            tok,
        ),
        SampleKind::Comb => draw_comb(
            CombCfg {
                teeth: vertices,
                ..CombCfg::default()
            },
            tok,
        ),
    };
    let raw: Vec<[f64; 2]> = ring.points().iter().map(|p| [p.x, p.y]).collect();
    write_json(&out, &raw)?;
    write_record(
        &out,
        Run::Sample {
            kind: format!("{kind:?}").to_lowercase(),
            vertices: raw.len(),
            seed: tok.seed,
            index: tok.index,
            area: ring.area(),
        },
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": record::code_rev(),
        "engine_version": polytri::VERSION,
        "algorithms": Algorithm::ALL.iter().map(|a| a.name()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
