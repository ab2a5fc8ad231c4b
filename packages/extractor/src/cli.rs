//! Command-line interface for the extractor.
//!
//! Runs the parse → segment → render pipeline on a local HTML file and
//! writes the section artifacts, for inspection without the pipeline
//! database.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{section_filename, MAX_INPUT_SIZE, SECTIONS_FOLDER};
use crate::error::{ExtractorError, Result};
use crate::extractor::extract_sections;
use crate::render::render;

/// Juriscontent Section Extractor - Split juriscontent HTML into section artifacts.
#[derive(Parser)]
#[command(name = "juriscontent-extractor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract sections from a juriscontent HTML file.
    Extract {
        /// Path to the juriscontent.html file
        input: PathBuf,

        /// Output directory (default: alongside the input file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { input, output } => extract_command(&input, output.as_deref()),
    }
}

/// Execute the extract command.
fn extract_command(input: &Path, output: Option<&Path>) -> Result<()> {
    let metadata = std::fs::metadata(input)?;
    if metadata.len() > MAX_INPUT_SIZE {
        return Err(ExtractorError::InputTooLarge {
            size: metadata.len(),
            max: MAX_INPUT_SIZE,
        });
    }

    let output_dir = match output {
        Some(dir) => dir.to_path_buf(),
        None => input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    println!(
        "{} {}",
        style("Extracting sections from").bold(),
        style(input.display()).cyan()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Parsing document...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let raw_html = std::fs::read_to_string(input)?;

    let sections = match extract_sections(&raw_html) {
        Ok(sections) => sections,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Writing section artifacts...");

    let sections_dir = output_dir.join(SECTIONS_FOLDER);
    // Full replace: a previous run with more sections must leave no
    // stale higher-numbered artifacts behind.
    if sections_dir.exists() {
        std::fs::remove_dir_all(&sections_dir)?;
    }
    std::fs::create_dir_all(&sections_dir)?;

    for section in &sections {
        let path = sections_dir.join(section_filename(section.sequence_number));
        std::fs::write(&path, render(section))?;
    }

    pb.finish_and_clear();

    println!("  Sections: {}", style(sections.len()).green());
    for section in &sections {
        let title = match section.title() {
            Some(title) if !title.is_empty() => title,
            _ => "(no heading)",
        };
        println!(
            "  {} {}",
            style(format!("{:>3}.", section.sequence_number)).dim(),
            title
        );
    }

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        sections_dir.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_extract() {
        let cli = Cli::parse_from(["juriscontent-extractor", "extract", "doc.html"]);

        let Commands::Extract { input, output } = cli.command;
        assert_eq!(input, PathBuf::from("doc.html"));
        assert!(output.is_none());
    }

    #[test]
    fn test_cli_parse_extract_with_output() {
        let cli = Cli::parse_from([
            "juriscontent-extractor",
            "extract",
            "doc.html",
            "--output",
            "out",
        ]);

        let Commands::Extract { output, .. } = cli.command;
        assert_eq!(output, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_extract_command_writes_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("juriscontent.html");
        std::fs::write(
            &input,
            "<body><h1>Part 1</h1><p>one</p><h1>Part 2</h1><p>two</p></body>",
        )
        .unwrap();

        extract_command(&input, Some(dir.path())).unwrap();

        let sections_dir = dir.path().join(SECTIONS_FOLDER);
        let first = std::fs::read_to_string(sections_dir.join("miniviewer_1.txt")).unwrap();
        assert_eq!(first, "Part 1\n\none");
        assert!(sections_dir.join("miniviewer_2.txt").exists());
    }

    #[test]
    fn test_extract_command_replaces_stale_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("juriscontent.html");
        std::fs::write(&input, "<body><h1>Only</h1><p>text</p></body>").unwrap();

        let sections_dir = dir.path().join(SECTIONS_FOLDER);
        std::fs::create_dir_all(&sections_dir).unwrap();
        std::fs::write(sections_dir.join("miniviewer_9.txt"), "stale").unwrap();

        extract_command(&input, Some(dir.path())).unwrap();

        assert!(sections_dir.join("miniviewer_1.txt").exists());
        assert!(!sections_dir.join("miniviewer_9.txt").exists());
    }
}
