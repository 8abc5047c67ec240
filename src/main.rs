use clap::{Parser, Subcommand};
use icongen::imaging::QualityTier;
use icongen::naming::Layout;
use icongen::{config, output, process, sizes};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Config file selection shared by commands that read the source image.
#[derive(clap::Args, Clone)]
struct ConfigArgs {
    /// Config file (default: ./icongen.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Arguments for the default (generate) command.
#[derive(clap::Args)]
struct GenerateArgs {
    /// Source image (PNG, JPEG, TIFF or WebP; ideally 1024x1024)
    #[arg(required = true)]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(default_value = "AppIcons")]
    output: PathBuf,

    /// Resampling quality for downscaled icons
    #[arg(long, value_enum)]
    quality: Option<QualityTier>,

    /// File arrangement inside the catalog directory
    #[arg(long, value_enum)]
    layout: Option<Layout>,

    /// Skip writing Contents.json
    #[arg(long)]
    no_manifest: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Parser)]
#[command(name = "icongen")]
#[command(about = "Generate iOS app icons from a single source image")]
#[command(long_about = "\
Generate iOS app icons from a single source image

Resizes the source into every size an iOS app target needs and writes them
as an Xcode asset catalog:

  AppIcons/
  └── ios/
      └── AppIcon.appiconset/
          ├── Contents.json              # Manifest for Xcode
          ├── appstore_1024x1024.png     # App Store
          ├── iphone_60x60@3x.png        # iPhone home screen
          ├── ipad_83.5x83.5@2x.png      # iPad Pro home screen
          └── ...

Non-square sources are center-cropped on the shorter side, which must be at
least 512px. Icons larger than the source are always resampled with Lanczos,
whatever --quality says.

Run 'icongen gen-config' to generate a documented icongen.toml.")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a source image without generating anything
    Check {
        /// Source image
        input: PathBuf,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// List every icon size that will be generated
    Sizes,
    /// Print a stock icongen.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Some(Command::Check { input, config }) => {
            let config = load_config(&config)?;
            let report = process::check(&input, &config)?;
            output::print_check_output(&input, &report);
            println!("==> Source is usable");
        }
        Some(Command::Sizes) => {
            output::print_size_table(sizes::APP_ICON_SIZES);
        }
        Some(Command::GenConfig) => {
            print!("{}", config::stock_config_toml());
        }
        None => generate(cli.generate)?,
    }
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = args.input.ok_or("missing source image path")?;
    let mut config = load_config(&args.config)?;
    if let Some(quality) = args.quality {
        config.quality = quality;
    }
    if let Some(layout) = args.layout {
        config.layout = layout;
    }
    if args.no_manifest {
        config.manifest.enabled = false;
    }
    init_thread_pool(&config.processing);

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            for line in output::format_process_event(&event) {
                println!("{}", line);
            }
        }
    });
    let result = process::process(&input, &args.output, &config, Some(tx));
    // The sender is dropped with `process`, so the printer drains and exits.
    printer.join().ok();
    let result = result?;
    output::print_summary(&result);
    Ok(())
}

/// Load the explicit config file, or `icongen.toml` from the working directory.
fn load_config(args: &ConfigArgs) -> Result<config::IconConfig, config::ConfigError> {
    match &args.config {
        Some(path) => config::load_config_file(path),
        None => config::load_config(Path::new(".")),
    }
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
