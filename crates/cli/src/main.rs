use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use twoview::api::{DrawCall, Embedding, GraphPainter, VertexId};

mod input;
mod output;
mod provenance;

use output::{DrawRecord, FitSummary};
use provenance::{current_git_rev, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Fit planar embeddings into a viewport and mark pentagonal faces")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Record one paint pass as JSON draw calls
    Render {
        #[arg(long)]
        input: PathBuf,
        /// Horizontal device range `from,to`; `to < from` mirrors the axis
        #[arg(long, value_parser = parse_range, allow_hyphen_values = true)]
        hor: (f64, f64),
        /// Vertical device range `from,to`; `to < from` mirrors the axis
        #[arg(long, value_parser = parse_range, allow_hyphen_values = true)]
        ver: (f64, f64),
        /// Flag edges that bound a pentagonal face
        #[arg(long)]
        pentagons: bool,
        /// Write to this file (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List the edges that bound a pentagonal face
    Pentagons {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print the fitted transform and the device bounding box
    Bbox {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_parser = parse_range, allow_hyphen_values = true)]
        hor: (f64, f64),
        #[arg(long, value_parser = parse_range, allow_hyphen_values = true)]
        ver: (f64, f64),
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Render {
            input,
            hor,
            ver,
            pentagons,
            out,
        } => render(&input, hor, ver, pentagons, out.as_deref(), cmd.tag),
        Action::Pentagons { input } => pentagons(&input),
        Action::Bbox { input, hor, ver } => bbox(&input, hor, ver),
        Action::Report => report(cmd.tag),
    }
}

fn parse_range(s: &str) -> Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `from,to`, got `{s}`"))?;
    let parse = |t: &str| {
        t.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad number `{t}`: {e}"))
    };
    Ok((parse(a)?, parse(b)?))
}

fn painter_for(
    input: &Path,
    hor: (f64, f64),
    ver: (f64, f64),
) -> Result<GraphPainter<Embedding>> {
    let emb = input::load(input)?;
    let mut painter = GraphPainter::default();
    painter.set_graph(emb);
    painter.set_paint_area(hor.0, hor.1, ver.0, ver.1)?;
    Ok(painter)
}

fn render(
    input: &Path,
    hor: (f64, f64),
    ver: (f64, f64),
    highlight: bool,
    out: Option<&Path>,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input = %input.display(), ?hor, ?ver, highlight, tag = ?tag, "render");
    let mut painter = painter_for(input, hor, ver)?;
    painter.set_highlight_pentagons(highlight);
    let mut calls: Vec<DrawCall> = Vec::new();
    painter
        .paint(&mut calls)
        .with_context(|| format!("painting {}", input.display()))?;
    let records: Vec<DrawRecord> = calls.iter().map(DrawRecord::from).collect();
    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    };
    let body = serde_json::to_vec_pretty(&records)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(out, &body).with_context(|| format!("writing {}", out.display()))?;
    let payload = Payload::new(serde_json::json!({
        "input": input.to_string_lossy(),
        "hor": [hor.0, hor.1],
        "ver": [ver.0, ver.1],
        "pentagons": highlight,
        "vertices": painter.graph_size(),
    }))
    .with_tag(tag);
    let sidecar = write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), calls = records.len(), "written");
    Ok(())
}

fn pentagon_edges(input: &Path) -> Result<Vec<(VertexId, VertexId)>> {
    let emb = input::load(input)?;
    let set = twoview::api::detect_pentagons(&emb)
        .with_context(|| format!("tracing faces of {}", input.display()))?;
    let edges = set.to_sorted_vec();
    tracing::info!(edges = edges.len(), total = emb.edge_count(), "pentagon edges");
    Ok(edges)
}

fn pentagons(input: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), "pentagons");
    let edges = pentagon_edges(input)?;
    println!("{}", serde_json::to_string_pretty(&edges)?);
    Ok(())
}

fn fit_summary(input: &Path, hor: (f64, f64), ver: (f64, f64)) -> Result<FitSummary> {
    let painter = painter_for(input, hor, ver)?;
    Ok(FitSummary::new(
        painter.fit()?,
        painter.device_bounding_box()?,
    ))
}

fn bbox(input: &Path, hor: (f64, f64), ver: (f64, f64)) -> Result<()> {
    tracing::info!(input = %input.display(), ?hor, ?ver, "bbox");
    let summary = fit_summary(input, hor, ver)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": current_git_rev(),
        "version": twoview::VERSION,
        "tags": tag.into_iter().collect::<Vec<_>>(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
