use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gridpath_lib::{
    load_map, plan_path, render_overlay, sample_map, save_map, GridCoord, OccupancyGrid,
    PathSummary, DEFAULT_THRESHOLD,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Occupancy-grid map and path planning utilities")]
struct Cli {
    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the built-in sample map to disk.
    Generate {
        /// Destination image path.
        #[arg(long, default_value = "map.png")]
        output: PathBuf,
    },
    /// Plan a path between two cells of a rasterized map.
    Plan(PlanArgs),
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// Map image to plan over.
    #[arg(long)]
    map: PathBuf,

    /// Start cell as `x,y`.
    #[arg(long, value_parser = parse_coord)]
    start: GridCoord,

    /// Goal cell as `x,y`.
    #[arg(long, value_parser = parse_coord)]
    goal: GridCoord,

    /// Channel value below which a pixel counts as an obstacle.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u8,

    /// Measure `y` inputs from the bottom edge of the map instead of the top.
    #[arg(long)]
    flip_y: bool,

    /// Write a copy of the map with the exploration and path painted on.
    #[arg(long)]
    overlay: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate { output } => handle_generate(&output),
        Command::Plan(args) => handle_plan(cli.format, &args),
    }
}

fn handle_generate(output: &Path) -> Result<()> {
    let map = sample_map();
    save_map(output, &map)
        .with_context(|| format!("failed to write the sample map to {}", output.display()))?;
    println!("Map saved to {}", output.display());
    Ok(())
}

fn handle_plan(format: OutputFormat, args: &PlanArgs) -> Result<()> {
    let map = load_map(&args.map)
        .with_context(|| format!("failed to load map from {}", args.map.display()))?;
    let grid = OccupancyGrid::from_image(&map, args.threshold)
        .context("failed to convert the map into an occupancy grid")?;

    let (start, goal) = if args.flip_y {
        (flip_coord(args.start, &grid), flip_coord(args.goal, &grid))
    } else {
        (args.start, args.goal)
    };

    let started = Instant::now();
    let plan = plan_path(&grid, start, goal)?;
    let elapsed = started.elapsed();

    let summary = PathSummary::from_plan(&plan)?;
    match format {
        OutputFormat::Text => {
            print!("{}", summary.render());
            println!("Planned in {} ms", elapsed.as_millis());
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(std::io::stdout(), &summary)?;
            println!();
        }
    }

    if let Some(overlay_path) = &args.overlay {
        let overlay = render_overlay(&map, &plan);
        save_map(overlay_path, &overlay).with_context(|| {
            format!("failed to write the overlay to {}", overlay_path.display())
        })?;
        if format == OutputFormat::Text {
            println!("Overlay saved to {}", overlay_path.display());
        }
    }

    Ok(())
}

/// Parse a `x,y` pair into a grid coordinate.
fn parse_coord(value: &str) -> std::result::Result<GridCoord, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{value}`"))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("expected `x,y`, got `{value}`"))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("expected `x,y`, got `{value}`"))?;
    Ok(GridCoord::new(x, y))
}

/// Convert a bottom-origin `y` into the image's top-origin row.
fn flip_coord(coord: GridCoord, grid: &OccupancyGrid) -> GridCoord {
    GridCoord::new(coord.x, grid.height() as i32 - coord.y)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
