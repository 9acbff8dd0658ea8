use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::{path::PathBuf, sync::Arc};
use waypoint_route::sdk::{
    config::AppConfig,
    input::{rows_from_args, rows_from_file},
    routing::{
        GeoJsonRenderer, InputMode, MapRenderer, NominatimGeocoder, ResolveOptions, RoutePlanner,
    },
    util::log::init_logging,
};

/// Plot a sequence of points and report great-circle distances along the route
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Points given as latitude/longitude pairs, e.g. `16.5062,80.6480`
    Coords(RouteArgs),
    /// Points given as place names, resolved through the geocoder
    Places(RouteArgs),
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// The points, in route order. Put options before them: values may start
    /// with `-` (southern or western coordinates)
    #[arg(allow_hyphen_values = true)]
    rows: Vec<String>,

    /// [Optional] Read more points from a CSV file (read before ROWS)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Drop points outside the valid latitude/longitude ranges
    #[arg(long)]
    strict_bounds: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
    Geojson,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (mode, args) = match cli.mode {
        Mode::Coords(args) => (InputMode::Coords, args),
        Mode::Places(args) => (InputMode::Places, args),
    };

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let options = ResolveOptions {
        strict_bounds: args.strict_bounds || config.strict_bounds,
    };

    let mut rows = match &args.file {
        Some(path) => rows_from_file(mode, path)
            .map_err(|e| anyhow::anyhow!("Failed to read points from {}: {}", path.display(), e))?,
        None => Vec::new(),
    };
    rows.extend(rows_from_args(mode, &args.rows));
    log::info!("Computing route through {} input rows ({:?} mode)", rows.len(), mode);

    let geocoder = NominatimGeocoder::new(&config.geocoder).context("Failed to build geocoder")?;
    let planner = RoutePlanner::new(Arc::new(geocoder), options);
    let session = planner
        .trigger(rows)
        .await
        .context("Route computation was superseded")?;
    log::info!(
        "Plotted {} waypoints (trigger {})",
        session.waypoints.len(),
        session.generation
    );

    match args.format {
        Format::Text => println!("{}", session.report),
        Format::Json => println!("{}", serde_json::to_string_pretty(&session)?),
        Format::Geojson => {
            let renderer = GeoJsonRenderer {
                padding: config.bbox_padding,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&renderer.render(&session.waypoints))?
            );
        }
    }

    Ok(())
}
