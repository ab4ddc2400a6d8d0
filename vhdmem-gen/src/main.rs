//! vhdmem command line.
//!
//! `vhdmem` with no subcommand runs `generate` with the default SDVU paths.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use vhdmem_constants::{MissingPolicy, SizeResolver};
use vhdmem_gen::{GenConfig, Pipeline};
use vhdmem_gen::config::DEFAULT_CONSTANTS_FILE;

#[derive(Parser, Debug)]
#[command(
    name = "vhdmem",
    author,
    version,
    about = "Generate VHDL memories with hardcoded program and configuration contents"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render both memories and write them out
    Generate(GenerateArgs),

    /// Print the memory sizes declared in a constants package
    Sizes {
        /// VHDL constants package
        #[arg(long, default_value = DEFAULT_CONSTANTS_FILE)]
        constants: PathBuf,

        /// Treat a missing width declaration as width 0
        #[arg(long)]
        allow_missing_sizes: bool,
    },
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// JSON configuration file; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Configuration bit-string (text)
    #[arg(long)]
    cfg_mem: Option<PathBuf>,

    /// Output path of the configuration memory
    #[arg(long)]
    out_cfg_mem: Option<PathBuf>,

    /// Instruction binary
    #[arg(long)]
    prg_mem: Option<PathBuf>,

    /// Output path of the program memory
    #[arg(long)]
    out_prg_mem: Option<PathBuf>,

    /// Config memory capacity in characters (requires --prg-mem-size)
    #[arg(long)]
    cfg_mem_size: Option<usize>,

    /// Program memory capacity in words (requires --cfg-mem-size)
    #[arg(long)]
    prg_mem_size: Option<usize>,

    /// VHDL constants package declaring CFG_MEM_SIZE and PROG_MEM_SIZE
    #[arg(long)]
    constants: Option<PathBuf>,

    /// Directory holding auto_{config,program}_memory.vhd.template
    #[arg(long)]
    template_dir: Option<PathBuf>,

    /// Treat a missing width declaration as width 0
    #[arg(long)]
    allow_missing_sizes: bool,
}

impl GenerateArgs {
    fn into_config(self) -> Result<GenConfig> {
        let mut config = match &self.config {
            Some(path) => GenConfig::from_json_file(path)?,
            None => GenConfig::default(),
        };

        if let Some(path) = self.cfg_mem {
            config.cfg_mem_file = path;
        }
        if let Some(path) = self.out_cfg_mem {
            config.out_cfg_mem_file = path;
        }
        if let Some(path) = self.prg_mem {
            config.prg_mem_file = path;
        }
        if let Some(path) = self.out_prg_mem {
            config.out_prg_mem_file = path;
        }
        if let Some(size) = self.cfg_mem_size {
            config.cfg_mem_size = Some(size);
        }
        if let Some(size) = self.prg_mem_size {
            config.prg_mem_size = Some(size);
        }
        if let Some(path) = self.constants {
            config.constants_source_path = Some(path);
        }
        if let Some(dir) = self.template_dir {
            config.template_dir = Some(dir);
        }
        config.allow_missing_sizes |= self.allow_missing_sizes;

        Ok(config)
    }
}

fn setup_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let config = args.into_config()?;
    debug!(?config, "generator configuration");

    let pipeline = Pipeline::new(config).context("Invalid generator configuration")?;
    let report = pipeline.run().context("Memory generation failed")?;
    println!("{}", report);
    Ok(())
}

fn cmd_sizes(constants: PathBuf, allow_missing_sizes: bool) -> Result<()> {
    let policy = if allow_missing_sizes {
        MissingPolicy::Lenient
    } else {
        MissingPolicy::Strict
    };

    let widths = SizeResolver::new(policy)
        .resolve_file(&constants)
        .with_context(|| format!("Cannot infer memory sizes from {}", constants.display()))?;
    let (config, program) = widths.specs()?;
    println!("{}", config);
    println!("{}", program);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Generate(args)) => cmd_generate(args),
        Some(Commands::Sizes {
            constants,
            allow_missing_sizes,
        }) => cmd_sizes(constants, allow_missing_sizes),
        None => cmd_generate(GenerateArgs::default()),
    }
}
