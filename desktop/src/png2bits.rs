use std::{path::PathBuf, process::ExitCode};

use argh::FromArgs;
use log::error;
use picosprite_core::{MASK_VALUES_PER_LINE, MaskOptions, OutputKind, TrailingBits, encode_mask};

use crate::convert::Job;

mod convert;
mod image_source;
mod std_fs;

#[derive(FromArgs)]
/// Convert an image into a 1-bit transparency mask (uint8_t array, MSB first)
struct Args {
    /// input image path
    #[argh(positional)]
    input: PathBuf,

    /// output path, defaults to the input with a .hpp (or .bin) extension
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// mask bytes per line
    #[argh(option, default = "MASK_VALUES_PER_LINE")]
    per_line: usize,

    /// replace characters that are not valid in C identifiers with '_'
    #[argh(switch)]
    sanitize: bool,

    /// write raw bytes instead of a header
    #[argh(switch, short = 'b')]
    binary: bool,

    /// keep the last partial byte (zero padded) instead of dropping it
    #[argh(switch, short = 'p')]
    pad: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let options = MaskOptions {
        trailing: if args.pad { TrailingBits::Pad } else { TrailingBits::Truncate },
        values_per_line: args.per_line,
        output: if args.binary { OutputKind::Binary } else { OutputKind::Literal },
        ..MaskOptions::default()
    };
    let job = Job {
        input: &args.input,
        output: args.output.as_deref(),
        sanitize: args.sanitize,
        kind: options.output,
    };

    match convert::run(&job, |source, name, out| encode_mask(source, name, &options, out)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}: {}", args.input.display(), err);
            ExitCode::FAILURE
        }
    }
}
