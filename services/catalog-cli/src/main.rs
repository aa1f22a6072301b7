//! SAR archive catalog front end.
//!
//! Scans an archive tree into a footprint index and exposes the
//! collaborator-facing operations for operators and scripts: GeoJSON export
//! of the index, catalog/archive listing, raster virtual-path resolution, and
//! preview extraction.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use catalog::{geojson, list_archives, list_catalogs, Scanner};
use extractor::{raster_virtual_path, Conventions, Extractor};
use sar_common::AttributeSchema;

#[derive(Parser, Debug)]
#[command(name = "catalog-cli")]
#[command(about = "SAR archive catalog scanner")]
struct Args {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Populate the legacy narrow attribute schema instead of the extended one
    #[arg(long)]
    narrow: bool,

    /// YAML file overriding the archive naming conventions
    #[arg(long)]
    conventions: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan a catalog root and emit the footprint index as GeoJSON
    Scan {
        /// Root directory holding catalog subfolders
        root: PathBuf,

        /// Write the FeatureCollection here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List catalog folders under a root
    Catalogs {
        root: PathBuf,
    },
    /// List archives inside one catalog folder
    Archives {
        folder: PathBuf,
    },
    /// Print the virtual path for an archive's raster member
    RasterPath {
        archive: PathBuf,
    },
    /// Extract an archive's preview image
    Preview {
        archive: PathBuf,

        /// Output file for the raw preview bytes
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(&args.log_level)?;

    let schema = if args.narrow {
        AttributeSchema::Narrow
    } else {
        AttributeSchema::Extended
    };
    let extractor = match &args.conventions {
        Some(path) => Extractor::with_conventions(schema, load_conventions(path)?),
        None => Extractor::new(schema),
    };

    match args.command {
        Command::Scan { root, output } => scan(extractor, &root, output),
        Command::Catalogs { root } => {
            for path in list_catalogs(&root)? {
                println!("{}", path.display());
            }
            Ok(())
        }
        Command::Archives { folder } => {
            for path in list_archives(&folder, extractor.conventions())? {
                println!("{}", path.display());
            }
            Ok(())
        }
        Command::RasterPath { archive } => raster_path(&extractor, &archive),
        Command::Preview { archive, output } => preview(&extractor, &archive, &output),
    }
}

fn load_conventions(path: &Path) -> Result<Conventions> {
    let yaml = fs::read_to_string(path)
        .with_context(|| format!("reading conventions file {}", path.display()))?;
    serde_yaml::from_str(&yaml)
        .with_context(|| format!("parsing conventions file {}", path.display()))
}

fn init_tracing(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn scan(extractor: Extractor, root: &Path, output: Option<PathBuf>) -> Result<()> {
    let scanner = Scanner::new(extractor);
    let index = scanner.scan(root)?;
    info!(
        records = index.len(),
        skipped = index.failures().len(),
        "scan complete"
    );

    let collection = geojson::feature_collection(&index);
    let json = serde_json::to_string_pretty(&collection)?;
    match output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
            info!(output = %path.display(), "index written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn raster_path(extractor: &Extractor, archive: &Path) -> Result<()> {
    match extractor.raster_member(archive)? {
        Some(member) => {
            println!("{}", raster_virtual_path(archive, &member));
            Ok(())
        }
        None => bail!("no raster member in {}", archive.display()),
    }
}

fn preview(extractor: &Extractor, archive: &Path, output: &Path) -> Result<()> {
    match extractor.preview_bytes(archive)? {
        Some(bytes) => {
            fs::write(output, &bytes).with_context(|| format!("writing {}", output.display()))?;
            info!(output = %output.display(), bytes = bytes.len(), "preview written");
            Ok(())
        }
        None => bail!("no preview image in {}", archive.display()),
    }
}
