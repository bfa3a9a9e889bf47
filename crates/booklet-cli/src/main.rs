use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use docx_extract::ExtractOptions;
use pdf_booklet::BookletOptions;
use std::path::PathBuf;

/// Convert a DOCX document into a fold-and-bind booklet PDF
#[derive(Parser)]
#[command(name = "booklet", about = "DOCX to booklet PDF imposition", version)]
struct Cli {
    /// Input DOCX file
    #[arg(default_value = "example.docx")]
    input: PathBuf,

    /// Output PDF file
    #[arg(short, long, default_value = "booklet_output.pdf")]
    output: PathBuf,

    /// Booklet orientation [default: portrait]
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Physical sheet size [default: a4]
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Directory for extracted images (created if absent, never cleaned up)
    #[arg(long, default_value = docx_extract::DEFAULT_TEMP_DIR)]
    temp_dir: PathBuf,

    /// Display width recorded for images, in inches
    #[arg(long, default_value = "4.0")]
    image_width_in: f32,

    /// Load booklet options from a JSON file; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the extracted content list as JSON
    #[arg(long)]
    dump_json: Option<PathBuf>,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

impl From<OrientationArg> for pdf_booklet::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<PaperArg> for pdf_booklet::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // Any failure ends the run with a message; the exit status stays 0
    if let Err(e) = run(cli).await {
        log::debug!("{:?}", e);
        eprintln!("Processing failed: {:#}", e);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut options = match &cli.config {
        Some(path) => BookletOptions::load(path)
            .await
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => BookletOptions::default(),
    };
    if let Some(orientation) = cli.orientation {
        options.orientation = orientation.into();
    }
    if let Some(paper) = cli.paper {
        options.paper_size = paper.into();
    }
    options.validate()?;

    let extract_options = ExtractOptions {
        temp_dir: cli.temp_dir.clone(),
        image_width_in: cli.image_width_in,
    };

    let content = docx_extract::extract_content(&cli.input, &extract_options)
        .await
        .with_context(|| format!("Failed to extract content: {}", cli.input.display()))?;

    if let Some(path) = &cli.dump_json {
        let json = serde_json::to_string_pretty(&content)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write content JSON: {}", path.display()))?;
        log::info!("Content list written to {}", path.display());
    }

    let stats = pdf_booklet::calculate_statistics(&content, &options)?;
    println!("Booklet Statistics:");
    println!(
        "  Content items: {} ({} text, {} images)",
        stats.content_items, stats.text_items, stats.image_items
    );
    println!("  Sheets: {}", stats.sheets);
    println!("  Printed sides: {}", stats.sides);
    println!("  Empty slots: {}", stats.empty_slots);
    println!(
        "  Leaf size: {}x{}mm",
        stats.leaf_width_mm, stats.leaf_height_mm
    );

    if cli.stats_only {
        return Ok(());
    }

    pdf_booklet::generate_booklet(&content, &cli.output, &options)
        .await
        .with_context(|| format!("Failed to write booklet: {}", cli.output.display()))?;
    println!("Booklet → {}", cli.output.display());

    Ok(())
}
