use anyhow::Context;
use clap::Parser;
use deedcore::{Coordinate, DistanceUnit, ProjectionKind};
use log::info;
use output::{render, OutputFormat};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod input;
mod output;
mod workflow;

const INFILE_HELP: &str = "\
Deed file of bearings and distances, tab separated (comma separated if it ends in .csv).
Required headers: bearing, distance. Extra columns are ignored.

Example:

\t# Comment lines begin with \"#\".  Header line required:
\tbearing\tdistance\tcomment
\tnorth 77° 15' 00\" east\t103.75\tcase insensitive cardinal directions allowed
\tS 46° 59' 26\" E\t95\tabbreviations are OK
\tS 33 10 3 E\t50\tnon-digit characters in the angle are ignored
\tN 22.1d E\t60\tminutes and seconds are optional; seconds need minutes
\tS\t5.7\tdue south/north/east/west needs no degrees
\t340 55 03\t5.7\tnorth is assumed if the first value is a number; no E/W letter may follow";

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert a deed's bearings and distances into a line of GPS coordinates"
)]
struct Args {
    #[arg(long, help = "Deed file of bearings and distances", long_help = INFILE_HELP)]
    infile: PathBuf,
    /// Longitude of the point the first call starts from
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// Latitude of the point the first call starts from
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Unit of the distances in --infile (1 pole/rod = 16.5 feet)
    #[arg(long, visible_alias = "distance-units")]
    units: Option<DistanceUnit>,
    /// Projection used to advance each call: flat or spherical
    #[arg(long)]
    projection: Option<ProjectionKind>,
    /// Output format: csv, kml or geojson
    #[arg(long)]
    format: Option<OutputFormat>,
    /// Write output here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
    /// Load settings from YAML; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = match &args.config {
        Some(path) => WorkflowConfig::load(path)?,
        None => WorkflowConfig::default(),
    }
    .with_overrides(args.units, args.projection, args.format);

    let runner = Runner::new(workflow_config);
    let origin = Coordinate::new(args.lon, args.lat);
    let result = runner.execute_file(origin, &args.infile)?;

    info!(
        "plotted {} legs ({:.2} ft), misclosure {:.3} ft",
        result.metrics.legs, result.metrics.total_feet, result.misclosure_feet
    );

    let format = runner.config().format;
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output {}", path.display()))?;
            render(format, &result.traverse, BufWriter::new(file))?;
        }
        None => render(format, &result.traverse, io::stdout().lock())?,
    }

    Ok(())
}
