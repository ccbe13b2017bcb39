//! tifflzw CLI - TIFF LZW strip codec
//!
//! Compresses and decompresses raw TIFF LZW strips, optionally with the
//! horizontal differencing predictor, and reports on existing streams.

mod commands;

use clap::{Args, Parser, Subcommand, ValueEnum};
use commands::{cmd_compress, cmd_decompress, cmd_inspect};
use std::path::PathBuf;
use tifflzw::{LzwConfig, Predictor, RowLayout};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tifflzw")]
#[command(author, version, about = "TIFF LZW strip compressor")]
#[command(long_about = "
Compresses and decompresses raw TIFF LZW strips and tiles.

Examples:
  tifflzw compress strip.raw strip.lzw
  tifflzw compress tile.rgb tile.lzw --predictor horizontal --width 256 --samples-per-pixel 3
  tifflzw decompress strip.lzw strip.raw --size 65536
  tifflzw decompress image.tif strip.raw --size 65536 --offset 8 --byte-count 20741
  tifflzw inspect strip.lzw
")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress raw samples into a TIFF LZW stream
    #[command(alias = "c")]
    Compress {
        /// Raw input file
        input: PathBuf,

        /// Compressed output file
        output: PathBuf,

        /// Start the stream with a clear code, as libtiff does
        #[arg(long)]
        leading_clear: bool,

        #[command(flatten)]
        predictor: PredictorArgs,
    },

    /// Decompress a TIFF LZW stream
    #[command(alias = "d")]
    Decompress {
        /// Compressed input file
        input: PathBuf,

        /// Raw output file
        output: PathBuf,

        /// Decompressed size in bytes
        #[arg(short, long)]
        size: usize,

        /// Byte offset of the strip inside the input
        #[arg(long, requires = "byte_count")]
        offset: Option<u64>,

        /// Compressed length of the strip inside the input
        #[arg(long, requires = "offset")]
        byte_count: Option<usize>,

        #[command(flatten)]
        predictor: PredictorArgs,
    },

    /// Decode a stream and report its code statistics
    #[command(alias = "i")]
    Inspect {
        /// Compressed input file
        input: PathBuf,
    },
}

/// Predictor selection shared by compress and decompress.
#[derive(Args)]
struct PredictorArgs {
    /// Predictor applied around the codec
    #[arg(short, long, value_enum, default_value = "none")]
    predictor: PredictorKind,

    /// Pixels per row (required by the horizontal predictor)
    #[arg(short, long)]
    width: Option<usize>,

    /// Interleaved samples per pixel
    #[arg(long, default_value_t = 1)]
    samples_per_pixel: usize,
}

/// TIFF predictor choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PredictorKind {
    /// No prediction (TIFF predictor 1)
    None,
    /// Horizontal differencing (TIFF predictor 2)
    Horizontal,
}

impl PredictorArgs {
    fn config(&self, base: LzwConfig) -> Result<LzwConfig, Box<dyn std::error::Error>> {
        match self.predictor {
            PredictorKind::None => Ok(base),
            PredictorKind::Horizontal => {
                let width = self
                    .width
                    .ok_or("--width is required with --predictor horizontal")?;
                let layout = RowLayout::new(width, self.samples_per_pixel);
                Ok(base.with_predictor(Predictor::HorizontalDifferencing, layout))
            }
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            leading_clear,
            predictor,
        } => predictor
            .config(LzwConfig::TIFF.with_leading_clear(leading_clear))
            .and_then(|config| cmd_compress(&input, &output, config)),
        Commands::Decompress {
            input,
            output,
            size,
            offset,
            byte_count,
            predictor,
        } => {
            let segment = offset.zip(byte_count);
            predictor
                .config(LzwConfig::TIFF)
                .and_then(|config| cmd_decompress(&input, &output, size, segment, config))
        }
        Commands::Inspect { input } => cmd_inspect(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
