// exif-mirror CLI binary

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use exif_mirror::constants::DEFAULT_OUTPUT_SUFFIX;
use exif_mirror::pipeline;

#[derive(Parser)]
#[command(name = "exif-mirror")]
#[command(about = "Update media files with embedded metadata from sidecar JSON files", long_about = None)]
#[command(version)]
struct Cli {
    /// Folder to scan for media files
    folder: PathBuf,

    /// Show what would be done without making changes
    #[arg(long)]
    dry_run: bool,

    /// Suffix to append to the output folder name
    #[arg(long, default_value = DEFAULT_OUTPUT_SUFFIX)]
    output_suffix: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let folder = cli
        .folder
        .canonicalize()
        .map_err(|_| anyhow::anyhow!("Folder '{}' does not exist", cli.folder.display()))?;

    if !folder.is_dir() {
        anyhow::bail!("'{}' is not a directory", folder.display());
    }

    let output_root = output_root_for(&folder, &cli.output_suffix);

    println!("Scanning folder: {}", folder.display());
    println!("Output folder: {}", output_root.display());

    let summary = pipeline::run_batch(&folder, &output_root, cli.dry_run)?;

    if summary.total_files == 0 {
        println!("No media files found.");
        return Ok(());
    }

    println!();
    println!("Summary:");
    println!("  Updated:           {}", summary.updated);
    println!("  Skipped (no JSON): {}", summary.skipped);
    println!("  Errors:            {}", summary.errors);

    if !cli.dry_run && summary.updated > 0 {
        println!();
        println!("Updated files saved to: {}", output_root.display());
    }

    Ok(())
}

/// Sibling directory named after the source folder plus the suffix.
fn output_root_for(folder: &Path, suffix: &str) -> PathBuf {
    let name = folder
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "media".to_string());

    folder
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!("{}{}", name, suffix))
}
