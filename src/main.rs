//! Elbow Router CLI
//!
//! Usage:
//!   elbow-router [OPTIONS] [SCENE]
//!
//! Options:
//!   --handles                 List bend handles for every connector
//!   -a, --adjust <ID=X,Y>     Drag a bend handle before printing (repeatable)
//!   -f, --format <FORMAT>     Output format: text or toml
//!   -h, --help                Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use serde::Serialize;

use elbow_router::routing::handles::parse_handle_id;
use elbow_router::{
    apply_adjustment, derive_adjustment_points, AdjustmentPoint, Orientation, Point,
    RoutedConnector, Scene,
};

#[derive(Parser)]
#[command(name = "elbow-router")]
#[command(about = "Orthogonal connector routing for diagram scenes")]
struct Cli {
    /// Scene file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// List bend handles for every connector
    #[arg(long)]
    handles: bool,

    /// Drag a bend handle before printing, e.g. `c1:bend:1=320,145`
    #[arg(short, long, value_name = "ID=X,Y", value_parser = parse_adjustment)]
    adjust: Vec<Adjustment>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Toml,
}

#[derive(Debug, Clone)]
struct Adjustment {
    handle: String,
    position: Point,
}

fn parse_adjustment(arg: &str) -> Result<Adjustment, String> {
    let (handle, coords) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected ID=X,Y, got '{}'", arg))?;
    let (x, y) = coords
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y after '=', got '{}'", coords))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("invalid x '{}': {}", x, e))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("invalid y '{}': {}", y, e))?;
    Ok(Adjustment {
        handle: handle.to_string(),
        position: Point::new(x, y),
    })
}

#[derive(Serialize)]
struct Report {
    connectors: Vec<ConnectorReport>,
}

#[derive(Serialize)]
struct ConnectorReport {
    id: String,
    path: String,
    strategy: String,
    best_effort: bool,
    start_site: String,
    end_site: String,
    handles: Vec<HandleReport>,
}

#[derive(Serialize)]
struct HandleReport {
    id: String,
    x: f64,
    y: f64,
    axis: String,
    segment_start: [f64; 2],
    segment_end: [f64; 2],
}

impl HandleReport {
    fn new(handle: &AdjustmentPoint) -> Self {
        Self {
            id: handle.id.clone(),
            x: handle.point.x,
            y: handle.point.y,
            axis: axis_name(handle.axis).to_string(),
            segment_start: [handle.segment_start.x, handle.segment_start.y],
            segment_end: [handle.segment_end.x, handle.segment_end.y],
        }
    }
}

fn axis_name(axis: Orientation) -> &'static str {
    match axis {
        Orientation::Horizontal => "horizontal",
        Orientation::Vertical => "vertical",
    }
}

fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer().with_writer(io::stderr).with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    // If no input file and stdin is a terminal (interactive), show help
    if cli.input.is_none() && io::stdin().is_terminal() {
        let _ = Cli::command().print_help();
        return;
    }

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let scene = match Scene::from_str(&source) {
        Ok(scene) => scene,
        Err(e) => {
            eprint!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };

    let mut routed = match scene.route_all() {
        Ok(routed) => routed,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    for adjustment in &cli.adjust {
        if let Err(e) = apply_cli_adjustment(&mut routed, adjustment) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    match cli.format {
        OutputFormat::Text => print_text(&routed, cli.handles),
        OutputFormat::Toml => match toml::to_string(&build_report(&routed)) {
            Ok(out) => print!("{}", out),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn apply_cli_adjustment(routed: &mut [RoutedConnector], adjustment: &Adjustment) -> Result<(), String> {
    let (connector, _) = parse_handle_id(&adjustment.handle).map_err(|e| e.to_string())?;
    let target = routed
        .iter_mut()
        .find(|r| r.id.as_str() == connector)
        .ok_or_else(|| format!("no connector '{}' in scene", connector))?;
    target.path = apply_adjustment(&target.path, &adjustment.handle, adjustment.position)
        .map_err(|e| e.to_string())?;
    Ok(())
}

fn print_text(routed: &[RoutedConnector], with_handles: bool) {
    for connector in routed {
        let marker = if connector.path.is_best_effort() {
            " (best-effort)"
        } else {
            ""
        };
        println!("{}: {}{}", connector.id, connector.path.path_data(), marker);

        if with_handles {
            for handle in derive_adjustment_points(connector.id.as_str(), &connector.path) {
                println!(
                    "  {} at {},{} moves {}",
                    handle.id,
                    handle.point.x,
                    handle.point.y,
                    axis_name(handle.axis)
                );
            }
        }
    }
}

fn build_report(routed: &[RoutedConnector]) -> Report {
    Report {
        connectors: routed
            .iter()
            .map(|connector| ConnectorReport {
                id: connector.id.to_string(),
                path: connector.path.path_data(),
                strategy: connector.path.strategy.name().to_string(),
                best_effort: connector.path.is_best_effort(),
                start_site: connector.path.start_site.id.clone(),
                end_site: connector.path.end_site.id.clone(),
                handles: derive_adjustment_points(connector.id.as_str(), &connector.path)
                    .iter()
                    .map(HandleReport::new)
                    .collect(),
            })
            .collect(),
    }
}
