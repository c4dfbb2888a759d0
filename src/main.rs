use clap::Parser;
use downsample::config::{self, ConfigOverrides, LosslessPolicy};
use downsample::{convert, output};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "downsample")]
#[command(version)]
#[command(about = "Downsample a directory of textures to a maximum dimension")]
#[command(long_about = "\
Downsample a directory of textures to a maximum dimension

Every file in INPUT_DIR is mirrored into OUTPUT_DIR under the same name.
Editors that keep all textures uncompressed in memory stay usable with the
smaller copy; switch between the two directories with a symlink.

  Other files              copied verbatim
  JPEG/PNG <= threshold    copied verbatim (never re-compressed)
  JPEG > threshold         longer edge scaled to the threshold (Lanczos3),
                           re-encoded at quality 100
  PNG > threshold          copied verbatim, or resized with --lossless resize

Only the top level of INPUT_DIR is processed and hidden files are ignored.
A subdirectory or any unreadable image aborts the whole run.

Run 'downsample --gen-config' to print a documented config file.")]
struct Cli {
    /// Directory of source textures
    #[arg(required_unless_present = "gen_config")]
    input_dir: Option<PathBuf>,

    /// Directory to write the downsampled copy to (created if missing)
    #[arg(required_unless_present = "gen_config")]
    output_dir: Option<PathBuf>,

    /// Maximum length of the longer edge, in pixels [default: 2048]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    threshold: Option<u32>,

    /// Handling of PNGs larger than the threshold [default: copy]
    #[arg(long, value_enum)]
    lossless: Option<LosslessPolicy>,

    /// Config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a stock config file with all options documented, then exit
    #[arg(long)]
    gen_config: bool,

    /// Show debug logging (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let (Some(input_dir), Some(output_dir)) = (cli.input_dir, cli.output_dir) else {
        return Err("INPUT_DIR and OUTPUT_DIR are required".into());
    };

    let overrides = ConfigOverrides {
        threshold: cli.threshold,
        lossless: cli.lossless,
    };
    let config = config::resolve_config(cli.config.as_deref(), &overrides)?;

    let report = convert::convert(&input_dir, &output_dir, &config, |event| {
        output::print_convert_event(&event)
    })?;
    output::print_report(&report);

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` is honored unless
/// `--verbose` forces debug output for this crate.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("downsample=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
