//! bmlx CLI - bitmap extraction from LMD bitmap-list containers.

mod utils;

use bmlx_container::BmlReader;
use clap::{ArgAction, Parser, Subcommand};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use utils::{create_progress_bar, output_file_name};

#[derive(Parser)]
#[command(name = "bmlx")]
#[command(author, version, about = "Extract bitmaps from LMD bitmap-list containers")]
#[command(long_about = "
bmlx reads LMD bitmap-list (BML) containers and extracts the bitmaps they
hold, decompressing LZRW-encoded entries on the fly.

Examples:
  bmlx list sprites.lmd
  bmlx extract sprites.lmd
  bmlx extract sprites.lmd -o out/
  bmlx test sprites.lmd
  bmlx info sprites.lmd
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract all bitmaps from a container
    #[command(alias = "x")]
    Extract {
        /// Container file to extract
        container: PathBuf,

        /// Output directory (defaults to the container's directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Disable the progress bar
        #[arg(long = "no-progress", action = ArgAction::SetFalse)]
        progress: bool,
    },

    /// List the entries of a container
    #[command(alias = "l")]
    List {
        /// Container file to list
        container: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show information about a container
    #[command(alias = "i")]
    Info {
        /// Container file to inspect
        container: PathBuf,
    },

    /// Decode every entry without writing output, reporting failures
    #[command(alias = "t")]
    Test {
        /// Container file to test
        container: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            container,
            output,
            verbose,
            progress,
        } => cmd_extract(&container, output.as_deref(), verbose, progress),
        Commands::List { container, verbose } => cmd_list(&container, verbose),
        Commands::Info { container } => cmd_info(&container),
        Commands::Test { container, verbose } => cmd_test(&container, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn open_container(path: &Path) -> Result<BmlReader<BufReader<File>>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    Ok(BmlReader::new(BufReader::new(file))?)
}

fn cmd_extract(
    container: &Path,
    output: Option<&Path>,
    verbose: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = open_container(container)?;

    if !reader.header().is_bitmap_list {
        println!("{}: does not contain images", container.display());
        return Ok(());
    }

    if let Some(dir) = output {
        std::fs::create_dir_all(dir)?;
    }

    println!(
        "Extracting {} ({} entries)",
        container.display(),
        reader.entry_count()
    );

    let pb = create_progress_bar(reader.entry_count() as u64, progress);
    pb.set_message("entries");

    for index in 0..reader.entry_count() {
        let out_path = output_file_name(container, index, output);
        let mut sink = BufWriter::new(File::create(&out_path)?);
        let kind = reader.extract_to(index, &mut sink)?;
        sink.flush()?;

        if verbose {
            pb.println(format!(
                "  Extracted: {} ({} bytes, {})",
                out_path.display(),
                kind.output_size(),
                kind.method_name()
            ));
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    Ok(())
}

fn cmd_list(container: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = open_container(container)?;

    println!("Container: {}", container.display());
    if !reader.header().is_bitmap_list {
        println!("Does not contain images");
        return Ok(());
    }
    println!();

    if verbose {
        println!("{:>6} {:>10} {:>10} {:>6} {:>8}", "Index", "Size", "Stored", "Ratio", "Method");
        println!("{}", "-".repeat(46));

        let mut total_size = 0u64;
        let mut total_stored = 0u64;

        for index in 0..reader.entry_count() {
            let kind = reader.entry_kind(index)?;
            let ratio = if kind.output_size() > 0 {
                format!(
                    "{:.1}%",
                    (1.0 - f64::from(kind.stored_size()) / f64::from(kind.output_size())) * 100.0
                )
            } else {
                "-".to_string()
            };

            println!(
                "{:>6} {:>10} {:>10} {:>6} {:>8}",
                index,
                kind.output_size(),
                kind.stored_size(),
                ratio,
                kind.method_name()
            );

            total_size += u64::from(kind.output_size());
            total_stored += u64::from(kind.stored_size());
        }

        println!("{}", "-".repeat(46));
        println!(
            "{:>6} {:>10} {:>10}",
            reader.entry_count(),
            total_size,
            total_stored
        );
    } else {
        for index in 0..reader.entry_count() {
            let kind = reader.entry_kind(index)?;
            println!("{}: {} bytes ({})", index, kind.output_size(), kind.method_name());
        }
    }

    Ok(())
}

fn cmd_info(container: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = open_container(container)?;
    let metadata = std::fs::metadata(container)?;

    println!("Container Information");
    println!("=====================");
    println!("File: {}", container.display());
    println!("Size: {} bytes", metadata.len());
    println!("Version: {}", reader.header().version);

    if !reader.header().is_bitmap_list {
        println!("Bitmap list: no");
        return Ok(());
    }
    println!("Bitmap list: yes");
    println!("Entries: {}", reader.entry_count());

    let mut total_size = 0u64;
    let mut compressed_count = 0usize;
    for index in 0..reader.entry_count() {
        let kind = reader.entry_kind(index)?;
        total_size += u64::from(kind.output_size());
        if kind.is_compressed() {
            compressed_count += 1;
        }
    }
    println!("Compressed entries: {}", compressed_count);
    println!("Total bitmap bytes: {}", total_size);

    Ok(())
}

fn cmd_test(container: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = open_container(container)?;

    println!("Testing {}", container.display());
    if !reader.header().is_bitmap_list {
        println!("Does not contain images");
        return Ok(());
    }

    let mut ok_count = 0usize;
    let mut errors: Vec<(usize, String)> = Vec::new();

    for index in 0..reader.entry_count() {
        match reader.verify(index) {
            Ok(kind) => {
                ok_count += 1;
                if verbose {
                    println!("  OK: entry {} ({} bytes)", index, kind.output_size());
                }
            }
            Err(e) => {
                if verbose {
                    println!("  FAILED: entry {} - {}", index, e);
                }
                errors.push((index, e.to_string()));
            }
        }
    }

    println!();
    println!("Test results:");
    println!("  Total entries: {}", reader.entry_count());
    println!("  OK: {}", ok_count);
    println!("  Failed: {}", errors.len());

    if !errors.is_empty() {
        if !verbose {
            println!();
            println!("Errors:");
            for (index, err) in &errors {
                println!("  entry {}: {}", index, err);
            }
        }
        std::process::exit(2);
    }

    println!();
    println!("All entries OK");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_progress_on_by_default_and_disabled_by_flag() {
        let cli = Cli::try_parse_from(["bmlx", "extract", "file.lmd"]).unwrap();
        match cli.command {
            Commands::Extract { progress, .. } => assert!(progress),
            _ => panic!("expected extract"),
        }

        let cli = Cli::try_parse_from(["bmlx", "extract", "file.lmd", "--no-progress"]).unwrap();
        match cli.command {
            Commands::Extract { progress, .. } => assert!(!progress),
            _ => panic!("expected extract"),
        }
    }
}
