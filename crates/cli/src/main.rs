use anyhow::Result;
use clap::{Parser, Subcommand};
use planar::Vector;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Evaluate vectors, shapes and sample polygons")]
struct Cmd {
    /// Write JSON here instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Magnitude, heading and unit vector; dot/cross with a second vector if given
    Vector {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long, allow_hyphen_values = true, requires = "other_y")]
        other_x: Option<f64>,
        #[arg(long, allow_hyphen_values = true, requires = "other_x")]
        other_y: Option<f64>,
    },
    /// Bounds and intrinsic size of a JSON shape description
    Shape {
        #[arg(long)]
        input: PathBuf,
    },
    /// Sample a reproducible random convex polygon
    Polygon {
        /// Vertex count before hull cleanup; at least 3
        #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u64).range(3..))]
        sides: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = cmd.out.as_deref();
    match cmd.action {
        Action::Vector {
            x,
            y,
            other_x,
            other_y,
        } => {
            let other = other_x.zip(other_y).map(|(ox, oy)| Vector::new(ox, oy));
            tracing::info!(x, y, other = ?other, "vector");
            report::emit(&report::vector_report(Vector::new(x, y), other), out)
        }
        Action::Shape { input } => {
            tracing::info!(input = %input.display(), "shape");
            let shape = report::load_shape(&input)?;
            report::emit(&report::shape_report(&shape), out)
        }
        Action::Polygon { sides, seed, index } => {
            tracing::info!(sides, seed, index, "polygon");
            report::emit(&report::polygon_report(sides, seed, index)?, out)
        }
    }
}
