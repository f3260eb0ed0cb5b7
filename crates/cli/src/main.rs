use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rectfill::compress::Compression;
use rectfill::rand::{draw_histogram_contour, HistogramCfg, ReplayToken};
use rectfill::search::FilledShape;
use rectfill::{unconstrained_max_area, Analysis, Containment, Contour, SearchCfg};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod report;

#[derive(Parser)]
#[command(name = "rectfill")]
#[command(about = "Largest vertex-anchored rectangles in rectilinear polygons")]
struct Cmd {
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read `x,y` vertices and report both maxima
    Solve {
        #[arg(long)]
        input: PathBuf,
        /// Keep a band rank between non-adjacent coordinates (exact for narrow notches)
        #[arg(long)]
        gapped: bool,
        /// Check candidates cell by cell instead of via a summed-area table
        #[arg(long)]
        scan: bool,
        /// Print a JSON report instead of the two result lines
        #[arg(long)]
        json: bool,
        /// Also write the JSON report (plus provenance sidecar) to this path
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a random rectilinear contour in the `x,y` input format
    Generate {
        #[arg(long, default_value_t = 16)]
        columns: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1_000)]
        max_step: i64,
        #[arg(long, default_value_t = 100_000)]
        max_height: i64,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve {
            input,
            gapped,
            scan,
            json,
            out,
        } => {
            let cfg = SearchCfg {
                compression: if gapped {
                    Compression::Gapped
                } else {
                    Compression::Dense
                },
                containment: if scan {
                    Containment::Scan
                } else {
                    Containment::SummedArea
                },
            };
            solve(&input, cfg, json, out.as_deref())
        }
        Action::Generate {
            columns,
            seed,
            index,
            max_step,
            max_height,
            out,
        } => {
            let cfg = HistogramCfg {
                columns,
                max_step,
                max_height,
                ..HistogramCfg::default()
            };
            generate(cfg, ReplayToken { seed, index }, &out)
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn solve(input: &Path, cfg: SearchCfg, json: bool, out: Option<&Path>) -> Result<()> {
    let points = input::read_points(input)?;
    tracing::debug!(vertices = points.len(), "parsed input");
    let contour = Contour::new(points).context("invalid contour")?;

    let start = Instant::now();
    let unconstrained = unconstrained_max_area(&contour);
    let unconstrained_ms = elapsed_ms(start);

    let start = Instant::now();
    let shape = FilledShape::build(contour.points(), cfg.compression)?;
    tracing::debug!(
        width = shape.grid.width(),
        height = shape.grid.height(),
        compression = cfg.compression.as_str(),
        "classified grid"
    );
    let filled = shape.largest_rectangle(cfg.containment);
    let filled_ms = elapsed_ms(start);

    let analysis = Analysis {
        vertices: contour.len(),
        grid_width: shape.grid.width(),
        grid_height: shape.grid.height(),
        unconstrained_area: unconstrained,
        filled,
    };
    tracing::info!(
        vertices = analysis.vertices,
        unconstrained = %analysis.unconstrained_area,
        filled = %analysis.filled_area(),
        unconstrained_ms,
        filled_ms,
        "solve"
    );

    let report = report::Report::new(
        input,
        cfg.compression.as_str(),
        &analysis,
        (unconstrained_ms, filled_ms),
    );
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Part 1 Result: {}. Took {:.2} ms.",
            analysis.unconstrained_area, unconstrained_ms
        );
        println!(
            "Part 2 Result: {}. Took {:.2} ms.",
            analysis.filled_area(),
            filled_ms
        );
    }
    if let Some(out) = out {
        let params = serde_json::json!({
            "input": input.to_string_lossy(),
            "compression": cfg.compression.as_str(),
            "scan": cfg.containment == Containment::Scan,
        });
        let sidecar = report::write_report(out, &report, params)?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote report");
    }
    Ok(())
}

fn generate(cfg: HistogramCfg, tok: ReplayToken, out: &Path) -> Result<()> {
    let contour = draw_histogram_contour(cfg, tok).context("generating contour")?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, input::format_points(contour.points()))
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(
        vertices = contour.len(),
        seed = tok.seed,
        index = tok.index,
        out = %out.display(),
        "generate"
    );
    Ok(())
}
