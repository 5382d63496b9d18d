use crate::analyzers::FieldAnalyzer;
use crate::cli::args::{Cli, Commands, GenerateArgs};
use crate::error::{Result, SynthesisError};
use crate::models::{BoundingBox, GribElement};
use crate::readers::PolygonReader;
use crate::synth::{GenerationConfig, GridSynthesizer, OutOfPolygonPolicy};
use crate::utils::filename::generate_default_output_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::JsonWriter;
use std::path::Path;
use tracing::info;

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => generate(args).await,
        Commands::Inspect { file } => inspect(&file),
    }
}

/// Merge the config file (or environment) with command line overrides.
pub fn build_config(args: &GenerateArgs) -> Result<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::from_file(path)?,
        None => GenerationConfig::from_env()?,
    };

    match (args.max_lat, args.min_lat, args.max_lon, args.min_lon) {
        (Some(max_lat), Some(min_lat), Some(max_lon), Some(min_lon)) => {
            config.bbox = Some(BoundingBox::new(max_lat, min_lat, max_lon, min_lon));
        }
        (None, None, None, None) => {}
        _ => {
            return Err(SynthesisError::Config(
                "--max-lat, --min-lat, --max-lon and --min-lon must be given together".into(),
            ))
        }
    }

    if let Some(nx) = args.nx {
        config.nx = nx;
    }
    if let Some(ny) = args.ny {
        config.ny = ny;
    }
    if let Some(policy) = &args.policy {
        config.out_of_polygon = policy.parse::<OutOfPolygonPolicy>()?;
    }
    if let Some(default_value) = args.default_value {
        config.default_value = default_value;
    }
    if let Some(random_min) = args.random_min {
        config.random_min = random_min;
    }
    if let Some(random_max) = args.random_max {
        config.random_max = random_max;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    Ok(config)
}

async fn generate(args: GenerateArgs) -> Result<()> {
    let polygon = PolygonReader::new().read_polygon(&args.polygon)?;
    let config = build_config(&args)?;
    info!(polygon = %args.polygon.display(), ?config, "starting generation");

    let silent = args.stdout;
    let max_workers = args.max_workers;
    let (records, report) = tokio::task::spawn_blocking(move || {
        let progress = ProgressReporter::new_spinner("Generating wind grid...", silent);
        GridSynthesizer::new(config)
            .with_max_workers(max_workers)
            .synthesize_with_report(&polygon, Some(&progress))
    })
    .await??;

    let writer = JsonWriter::new().with_pretty(!args.compact);

    if args.stdout {
        println!("{}", writer.render(&records)?);
        return Ok(());
    }

    println!("\n{}", report.summary());

    let output_file = args
        .output_file
        .unwrap_or_else(generate_default_output_filename);
    writer.write_records(&records, &output_file)?;

    let file_info = writer.get_file_info(&output_file)?;
    println!("{}", file_info.summary());

    Ok(())
}

fn inspect(file: &Path) -> Result<()> {
    println!("Analyzing wind grid file: {}", file.display());

    let writer = JsonWriter::new();
    let file_info = writer.get_file_info(file)?;

    let stats = FieldAnalyzer::new().analyze_file(file)?;

    println!("\n{}", file_info.summary());
    println!("\nFields:");
    for field in &stats {
        println!("  {}", field.summary());
    }

    let elements: Vec<GribElement> = stats.iter().map(|s| s.element).collect();
    if elements != GribElement::ALL {
        println!(
            "\nWarning: expected records {:?}, found {:?}",
            GribElement::ALL,
            elements
        );
    }

    Ok(())
}
