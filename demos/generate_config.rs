//! Write the default analysis configuration to a JSON file
//!
//! The output is a starting point for tuning patch placement and cusps;
//! load it back with `cli --config <file>`.

use skin_season::{AnalysisConfig, AnalysisError};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

fn main() {
    let Some(output_path) = env::args().nth(1).map(PathBuf::from) else {
        eprintln!("Usage: generate_config <output_config.json>");
        eprintln!("  e.g. generate_config configs/default.json");
        process::exit(2);
    };

    let config = AnalysisConfig::default();
    if let Err(error) = write_config(&config, &output_path) {
        eprintln!("Could not write {}: {}", output_path.display(), error);
        process::exit(1);
    }

    eprintln!("Wrote default heuristics to {}", output_path.display());
    describe(&config);
}

fn write_config(config: &AnalysisConfig, path: &Path) -> Result<(), AnalysisError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .map_err(|e| AnalysisError::config(format!("cannot create {}", dir.display()), e))?;
    }
    config.to_json_file(path)
}

fn describe(config: &AnalysisConfig) {
    let sampling = &config.sampling;
    let filter = &config.pixel_filter;
    let tone = &config.classification;

    for (i, anchor) in sampling.anchors.iter().enumerate() {
        eprintln!(
            "  patch {}: centered at {:.0}% x {:.0}%",
            i + 1,
            anchor.x_ratio * 100.0,
            anchor.y_ratio * 100.0
        );
    }
    eprintln!(
        "  patch edge: {:.0}% of the shorter side (at least {} px)",
        sampling.patch_size_ratio * 100.0,
        sampling.min_patch_size
    );
    eprintln!(
        "  rejected: alpha < {}, lips r > {} g < {} b < {}, shadow all < {}",
        filter.min_alpha,
        filter.lip.min_red,
        filter.lip.max_green,
        filter.lip.max_blue,
        filter.shadow_max_channel
    );
    eprintln!(
        "  warm hue < {} or > {}; cool hue in ({}, {})",
        tone.warm_hue_below, tone.warm_hue_above, tone.cool_hue_min, tone.cool_hue_max
    );
    eprintln!(
        "  light >= {}%, deep <= {}%",
        tone.light_min_lightness, tone.deep_max_lightness
    );
}
