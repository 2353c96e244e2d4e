use std::{
    fmt,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use picosprite_core::{Identifier, OutputKind};

use crate::{image_source::ImageSource, std_fs::StdFileWriter};

#[derive(Debug)]
pub enum ConvertError {
    Image(image::ImageError),
    Io(std::io::Error),
    Encode(picosprite_core::Error),
    MissingStem(PathBuf),
}

impl From<image::ImageError> for ConvertError {
    fn from(err: image::ImageError) -> Self {
        ConvertError::Image(err)
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Io(err)
    }
}

impl From<picosprite_core::Error> for ConvertError {
    fn from(err: picosprite_core::Error) -> Self {
        ConvertError::Encode(err)
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Image(err) => write!(f, "failed to load image: {err}"),
            ConvertError::Io(err) => write!(f, "failed to write output: {err}"),
            ConvertError::Encode(picosprite_core::Error::InvalidIdentifier) => f.write_str(
                "file name is not a valid C identifier (rename it or pass --sanitize)",
            ),
            ConvertError::Encode(err) => write!(f, "failed to encode image: {err}"),
            ConvertError::MissingStem(path) => write!(f, "cannot derive a name from {path:?}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Image(err) => Some(err),
            ConvertError::Io(err) => Some(err),
            ConvertError::Encode(err) => Some(err),
            ConvertError::MissingStem(_) => None,
        }
    }
}

/// One input file and where its encoding should go.
pub struct Job<'a> {
    pub input: &'a Path,
    /// Defaults to the input path with a `hpp` or `bin` extension
    pub output: Option<&'a Path>,
    pub sanitize: bool,
    pub kind: OutputKind,
}

impl Job<'_> {
    pub fn identifier(&self) -> Result<Identifier, ConvertError> {
        let stem = self
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ConvertError::MissingStem(self.input.to_path_buf()))?;
        if !self.sanitize {
            return Ok(Identifier::new(stem)?);
        }
        let ident = Identifier::sanitized(stem);
        if ident.as_str() != stem {
            warn!("Using identifier '{ident}' for '{stem}'");
        }
        Ok(ident)
    }

    pub fn output_path(&self) -> PathBuf {
        match self.output {
            Some(path) => path.to_path_buf(),
            None => self.input.with_extension(match self.kind {
                OutputKind::Literal => "hpp",
                OutputKind::Binary => "bin",
            }),
        }
    }
}

/// Decodes the input, streams it through `encode` and commits the output.
///
/// The name is validated before anything is decoded or written.
pub fn run<F>(job: &Job, encode: F) -> Result<PathBuf, ConvertError>
where
    F: FnOnce(&ImageSource, &Identifier, &mut StdFileWriter) -> picosprite_core::Result<u64>,
{
    let name = job.identifier()?;
    let source = ImageSource::open(job.input)?;
    let path = job.output_path();
    debug!("Encoding {:?} as '{}' into {:?}", job.input, name, path);

    let mut out = StdFileWriter::create(&path)?;
    let count = encode(&source, &name, &mut out)?;
    debug!("Emitted {count} values");
    Ok(out.commit()?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use image::{Rgba, RgbaImage};
    use picosprite_core::{ColorOptions, MaskOptions, TrailingBits, encode_color, encode_mask};

    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("picosprite-convert-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn job(input: &Path, kind: OutputKind) -> Job<'_> {
        Job { input, output: None, sanitize: false, kind }
    }

    #[test]
    fn white_png_to_header() {
        let dir = scratch("white");
        let input = dir.join("test.png");
        RgbaImage::from_pixel(2, 1, Rgba([255; 4])).save(&input).unwrap();

        let options = ColorOptions::default();
        let path = run(&job(&input, OutputKind::Literal), |source, name, out| {
            encode_color(source, name, &options, out)
        })
        .unwrap();

        assert_eq!(path, dir.join("test.hpp"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "const picosystem::color_t test_data[2] = {\n0xffff, 0xffff, \n};\n\
             picosystem::buffer_t test_buffer{.w = 2, .h = 1, .data = (picosystem::color_t *)test_data};\n"
        );
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn mask_png_to_binary() {
        let dir = scratch("mask");
        let input = dir.join("dots.png");
        let mut image = RgbaImage::new(3, 3);
        image.put_pixel(0, 0, Rgba([0, 0, 0, 1]));
        image.put_pixel(2, 2, Rgba([9, 9, 9, 255]));
        image.save(&input).unwrap();

        let options = MaskOptions {
            trailing: TrailingBits::Pad,
            output: OutputKind::Binary,
            ..MaskOptions::default()
        };
        let path = run(&job(&input, OutputKind::Binary), |source, name, out| {
            encode_mask(source, name, &options, out)
        })
        .unwrap();

        assert_eq!(path, dir.join("dots.bin"));
        assert_eq!(fs::read(&path).unwrap(), [0x80, 0x80]);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn invalid_name_writes_nothing() {
        let dir = scratch("badname");
        let input = dir.join("my-logo.png");
        RgbaImage::from_pixel(8, 1, Rgba([0, 0, 0, 255])).save(&input).unwrap();

        let options = MaskOptions::default();
        let result = run(&job(&input, OutputKind::Literal), |source, name, out| {
            encode_mask(source, name, &options, out)
        });
        assert!(matches!(
            result,
            Err(ConvertError::Encode(picosprite_core::Error::InvalidIdentifier))
        ));
        assert!(!dir.join("my-logo.hpp").exists());

        let sanitized = Job { sanitize: true, ..job(&input, OutputKind::Literal) };
        let path = run(&sanitized, |source, name, out| encode_mask(source, name, &options, out)).unwrap();
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "const uint8_t my_logo_data[1] = {\n0xff, \n};\n"
        );
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn encode_failure_removes_temp_file() {
        let dir = scratch("fail");
        let input = dir.join("sprite.png");
        RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 4])).save(&input).unwrap();

        let options = ColorOptions { values_per_line: 0, ..ColorOptions::default() };
        let result = run(&job(&input, OutputKind::Literal), |source, name, out| {
            encode_color(source, name, &options, out)
        });
        assert!(matches!(
            result,
            Err(ConvertError::Encode(picosprite_core::Error::InvalidLineWidth))
        ));
        assert!(!dir.join("sprite.hpp").exists());
        assert!(!dir.join("sprite.hpp.tmp").exists());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_input() {
        let dir = scratch("missing");
        let input = dir.join("absent.png");
        let options = ColorOptions::default();
        let result = run(&job(&input, OutputKind::Literal), |source, name, out| {
            encode_color(source, name, &options, out)
        });
        assert!(matches!(result, Err(ConvertError::Image(_))));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn explicit_output_path() {
        let input = Path::new("assets/logo.png");
        let output = Path::new("build/logo.h");
        let job = Job { input, output: Some(output), sanitize: false, kind: OutputKind::Literal };
        assert_eq!(job.output_path(), PathBuf::from("build/logo.h"));
        assert_eq!(job.identifier().unwrap().as_str(), "logo");
    }
}
