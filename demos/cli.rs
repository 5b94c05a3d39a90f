//! Command-line interface for skin_season
//!
//! Analyzes a face photo and prints the season, palette and guidance.
//! Set `RUST_LOG=skin_season=debug` to trace the pipeline.

use skin_season::{image_loader, AnalysisConfig, AnalysisPipeline, AnalysisResult, PixelBuffer};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config_path = None;
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    process::exit(1);
                }
                config_path = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let image_path = Path::new(&image_path_str);

    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    let pipeline = match config_path {
        Some(path) => match AnalysisConfig::from_json_file(&path).and_then(AnalysisPipeline::with_config) {
            Ok(pipeline) => pipeline,
            Err(error) => {
                eprintln!("Error loading config: {}", error);
                process::exit(1);
            }
        },
        None => AnalysisPipeline::new(),
    };

    let outcome = image_loader::load_for_analysis(image_path).and_then(|image| {
        let buffer = PixelBuffer::from_rgba_image(&image)?;
        pipeline.analyze(&buffer)
    });

    match outcome {
        Ok(result) => print_result(&result),
        Err(error) => {
            eprintln!("Analysis failed: {}", error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Estimate skin tone from a face photo and suggest a seasonal palette.");
    eprintln!("For best results use a well-lit, front-facing photo centered in the frame.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    Load heuristics from a JSON config (see generate_config)");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} selfie.jpg", program_name);
    eprintln!("  {} --config tuned.json selfie.png", program_name);
}

fn print_result(result: &AnalysisResult) {
    // JSON to stdout for programmatic use
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        }
    }

    let tone = &result.classification;
    eprintln!();
    eprintln!("Skin Tone Summary:");
    eprintln!("  Average color: {} ({})", tone.average_rgb, tone.average_rgb.css());
    eprintln!("  HSL: {}", tone.hsl);
    eprintln!("  Undertone: {}, Depth: {}", tone.temperature, tone.depth);
    eprintln!("  Season: {}", tone.season);
    eprintln!("  Palette: {}", result.palette.hex_codes().join(" "));
    eprintln!("  Top colors: {}", result.guidance.top_colors.join(", "));
    eprintln!("  Fabrics: {}", result.guidance.fabrics.join(", "));
    eprintln!("  {}", result.guidance.message);
}
