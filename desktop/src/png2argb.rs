use std::{path::PathBuf, process::ExitCode};

use argh::FromArgs;
use log::error;
use picosprite_core::{COLOR_VALUES_PER_LINE, ColorOptions, OutputKind, encode_color};

use crate::convert::Job;

mod convert;
mod image_source;
mod std_fs;

#[derive(FromArgs)]
/// Convert an image into a picosystem::color_t array plus a buffer_t descriptor
struct Args {
    /// input image path
    #[argh(positional)]
    input: PathBuf,

    /// output path, defaults to the input with a .hpp (or .bin) extension
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// color words per line
    #[argh(option, default = "COLOR_VALUES_PER_LINE")]
    per_line: usize,

    /// replace characters that are not valid in C identifiers with '_'
    #[argh(switch)]
    sanitize: bool,

    /// write raw little-endian words instead of a header
    #[argh(switch, short = 'b')]
    binary: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let options = ColorOptions {
        values_per_line: args.per_line,
        output: if args.binary { OutputKind::Binary } else { OutputKind::Literal },
        ..ColorOptions::default()
    };
    let job = Job {
        input: &args.input,
        output: args.output.as_deref(),
        sanitize: args.sanitize,
        kind: options.output,
    };

    match convert::run(&job, |source, name, out| encode_color(source, name, &options, out)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}: {}", args.input.display(), err);
            ExitCode::FAILURE
        }
    }
}
