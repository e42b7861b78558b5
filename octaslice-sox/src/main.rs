use std::{
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process::exit,
};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};
use octaslice::{OtRecord, Validation};
use sox::{write_commands, write_info, ChopNames};

mod sox;
#[cfg(test)]
mod test_fixture;

#[derive(Parser)]
#[command(version)]
/// Prints sox command lines that chop samples along their Octatrack slices
pub struct Args {
    /// Paths to the .ot files
    #[arg(required = true)]
    ot_paths: Vec<PathBuf>,
    #[arg(short = 'e', long, default_value = "wav")]
    /// Extension of the audio file next to each .ot file
    audio_ext: String,
    #[arg(short, long)]
    /// Reject files that don't start with the .ot header
    strict: bool,
    #[arg(short, long)]
    /// Print the sample settings instead of sox commands
    info: bool,
}

fn process_file(
    args: &Args,
    names: &ChopNames,
    path: &Path,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let validation = if args.strict {
        Validation::Strict
    } else {
        Validation::Lenient
    };
    let record = OtRecord::from_path(path, validation)
        .with_context(|| format!("couldn't load {}", path.display()))?;
    info!("{}: {} slices", path.display(), record.slice_count);
    if args.info {
        write_info(path, &record, out).context("error writing info")?;
    } else {
        write_commands(names, &record, out).context("error writing commands")?;
    }
    Ok(())
}

/// Processes every path in order, returns how many files failed.
fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<usize> {
    let mut failed = 0;
    for path in args.ot_paths.iter() {
        let Some(names) = ChopNames::from_ot_path(path, &args.audio_ext) else {
            warn!("skipping {}: only .ot files are supported", path.display());
            continue;
        };
        if let Err(e) = process_file(args, &names, path, &mut *out) {
            error!("{e:#}");
            failed += 1;
        }
    }
    out.flush()?;
    Ok(failed)
}

fn main() -> anyhow::Result<()> {
    let env = Env::new().default_filter_or("info");
    env_logger::init_from_env(env);
    let args = Args::parse();
    let mut out = BufWriter::new(io::stdout().lock());
    let failed = run(&args, &mut out)?;
    if failed > 0 {
        error!("{failed} of {} files failed", args.ot_paths.len());
        exit(1);
    }
    Ok(())
}
