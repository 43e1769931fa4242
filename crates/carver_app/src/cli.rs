//! Command-line argument definitions.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "carver")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the disk image or device to scan.
    pub source: String,

    /// Directory under which `recovery_output_<timestamp>/` is created.
    #[arg(short, long, default_value = "./recovered")]
    pub output: String,

    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Offset to start scanning from, skipping everything before it.
    #[arg(long, default_value_t = 0)]
    pub start_offset: u64,

    /// Scanner refill size in MiB.
    #[arg(long, default_value_t = 64)]
    pub chunk_size: usize,

    /// Only keep carves whose synthesised name ends in one of these
    /// extensions (repeatable), e.g. `--ext .jpg --ext .png`.
    #[arg(short = 'e', long = "ext")]
    pub ext: Vec<String>,

    /// Only keep carves whose synthesised name contains this substring.
    #[arg(short = 'n', long)]
    pub name_contains: Option<String>,

    /// Only keep carves at or below this size, in bytes.
    #[arg(short = 's', long)]
    pub max_size: Option<u64>,
}
