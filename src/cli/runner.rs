use tracing::info;
use tracing_subscriber::EnvFilter;

use romanwords::{ConversionParams, process_file_to_path};

use super::args::CliArgs;
use super::errors::AppError;

/// Flags win over the config file, which wins over the defaults.
fn resolve_params(args: &CliArgs) -> Result<ConversionParams, AppError> {
    let mut params = match &args.config {
        Some(path) => {
            ConversionParams::from_json_file(path).map_err(|source| AppError::Config {
                path: path.clone(),
                source,
            })?
        }
        None => ConversionParams::default(),
    };

    if let Some(mode) = args.mode {
        params.mode = mode;
    }
    if args.fail_fast {
        params.fail_fast = true;
    }

    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let params = resolve_params(&args)?;
    info!("Parameters: {:?}", params);

    let report = process_file_to_path(&args.input, &args.output, &params)?;
    info!(
        "Converted {} of {} lines ({} skipped, {} errors)",
        report.written, report.lines, report.skipped, report.errors
    );

    println!(
        "Processing complete. Check {} for results.",
        args.output.display()
    );
    Ok(())
}
