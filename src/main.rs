use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use powershot_a5_rs::image_pipeline::{ConversionConfig, CrwToPpmPipeline, output_path_for};
use powershot_a5_rs::logger;

use tracing::{error, info};

/// Canon PowerShot A5 raw converter.
#[derive(Parser, Debug)]
#[command(name = "powershot_a5", version, about)]
struct Args {
    /// Write PPM to standard output
    #[arg(short = 'c', long = "stdout")]
    to_stdout: bool,

    /// Gamma value
    #[arg(short, long, default_value_t = 0.8)]
    gamma: f32,

    /// Brightness
    #[arg(short, long, default_value_t = 1.0)]
    brightness: f32,

    /// Number of smoothing passes after the first interpolation
    #[arg(long, default_value_t = 1)]
    refine_passes: usize,

    /// CRW files to convert
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    logger::init();

    let args = Args::parse();

    let config = ConversionConfig::builder()
        .gamma(args.gamma)
        .brightness(args.brightness)
        .refine_passes(args.refine_passes)
        .build();
    let pipeline = CrwToPpmPipeline::new(config);

    info!("Gamma: {}, brightness: {}", pipeline.config().gamma, pipeline.config().brightness);

    let mut failures = 0;
    for input in &args.files {
        let result = if args.to_stdout {
            let stdout = std::io::stdout();
            pipeline.convert_file_to(input, &mut stdout.lock())
        } else {
            pipeline.convert_file(input, output_path_for(input))
        };

        match result.with_context(|| format!("{}", input.display())) {
            Ok(()) => info!("Converted {}", input.display()),
            Err(e) => {
                error!("{:#}", e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        error!("{} of {} files failed", failures, args.files.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
