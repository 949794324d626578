use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};
use nalgebra::Vector3;
use salc::algebra::{LinearCombination, Symbol};
use salc::interfaces::GeometryMode;
use salc::salcs::{calc_salcs_for, project, BasisArrangement, IrrepSalc};
use salc::symmetries::{lookup, POINT_GROUPS};

#[derive(Parser)]
#[command(name = "salc")]
#[command(about = "Symmetry-adapted linear combinations for molecular point groups")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported point groups
    Groups,
    /// Print the character table of a point group
    Table {
        /// Point group name, e.g. d4h
        group: String,
    },
    /// Project a transformed-basis vector (one expression per operation)
    Project {
        /// Point group name
        group: String,

        /// Images R(b) in canonical operation order, e.g. "a" "-b" "c/2"
        #[arg(required = true, allow_hyphen_values = true)]
        images: Vec<String>,
    },
    /// Compute the SALCs of a placed basis
    Calc {
        /// Point group name
        group: String,

        /// How positions are given: angle (azimuth,polar in degrees) or vector (x,y,z)
        #[arg(short, long, default_value = "vector")]
        mode: String,

        /// One position per basis function, comma separated components
        #[arg(short, long = "position", required = true, allow_hyphen_values = true)]
        positions: Vec<String>,

        /// Basis symbols, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        symbols: Vec<String>,

        /// Lobe direction x,y,z per basis function (oriented basis such as pπ)
        #[arg(short, long = "lobe", allow_hyphen_values = true)]
        lobes: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!("Thread count {} specified but parallel feature not enabled. Ignoring.", threads);
        }
    }

    info!("Starting salc v{}", salc::VERSION);

    match cli.command {
        Commands::Groups => list_groups(),
        Commands::Table { group } => print_table(&group),
        Commands::Project { group, images } => {
            info!("Projecting {} images in {}", images.len(), group);
            project_images(&group, &images)
        }
        Commands::Calc {
            group,
            mode,
            positions,
            symbols,
            lobes,
            json,
        } => {
            let mode: GeometryMode = mode.parse()?;
            info!("Computing SALCs of {} functions in {} ({} mode)", positions.len(), group, mode);
            let arrangement = build_arrangement(&positions, &symbols, &lobes, mode)?;
            let results = calc_salcs_for(&arrangement, &group).with_context(|| format!("SALC computation in {} failed", group))?;
            print_results(&results, json)
        }
    }
}

fn list_groups() -> Result<()> {
    for group in POINT_GROUPS.iter() {
        println!("{:<4} h = {:<3} {}", group.name(), group.order(), group.irrep_labels().join(", "));
    }
    Ok(())
}

fn print_table(name: &str) -> Result<()> {
    let group = lookup(name)?;

    let headers: Vec<String> = group
        .classes()
        .iter()
        .map(|class| {
            if class.size == 1 {
                class.label.to_string()
            } else {
                format!("{}{}", class.size, class.label)
            }
        })
        .collect();
    let rows: Vec<(&str, Vec<String>)> = group
        .irreps()
        .iter()
        .map(|irrep| (irrep.label, irrep.characters.iter().map(|c| c.to_string()).collect()))
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            rows.iter()
                .map(|(_, cells)| cells[i].chars().count())
                .chain(std::iter::once(headers[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let label_width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);

    let format_row = |label: &str, cells: &[String]| {
        let mut line = pad(label, label_width);
        for (cell, width) in cells.iter().zip(&widths) {
            line.push_str("  ");
            line.push_str(&pad(cell, *width));
        }
        line.trim_end().to_string()
    };

    println!("{} (h = {})", group.name(), group.order());
    println!("{}", format_row("", headers.as_slice()));
    for (label, cells) in &rows {
        println!("{}", format_row(*label, cells.as_slice()));
    }
    Ok(())
}

// Left-aligned by character count (labels contain σ and √)
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(fill))
}

fn project_images(group: &str, images: &[String]) -> Result<()> {
    let transformed = images
        .iter()
        .map(|image| image.parse::<LinearCombination>())
        .collect::<salc::Result<Vec<_>>>()?;
    let results = project(&transformed, group)?;
    print_results(&results, false)
}

fn build_arrangement(positions: &[String], symbols: &[String], lobes: &[String], mode: GeometryMode) -> Result<BasisArrangement> {
    let geometry = positions
        .iter()
        .map(|p| parse_components(p))
        .collect::<Result<Vec<_>>>()?;
    let symbols = symbols.iter().map(|s| Symbol::new(s.trim())).collect();
    let arrangement = BasisArrangement::from_geometry(&geometry, symbols, mode)?;

    if lobes.is_empty() {
        return Ok(arrangement);
    }
    let lobes = lobes
        .iter()
        .map(|l| {
            let components = parse_components(l)?;
            if components.len() != 3 {
                bail!("lobe '{}' must have three components", l);
            }
            Ok(Vector3::from_column_slice(&components))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(arrangement.with_lobes(&lobes)?)
}

fn parse_components(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid number '{}' in '{}'", part.trim(), text))
        })
        .collect()
}

fn print_results(results: &[IrrepSalc], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        for result in results {
            println!("{}", result);
        }
    }
    Ok(())
}
