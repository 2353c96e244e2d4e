use alloc::format;

use log::debug;

use crate::{
    BinaryEncoder, ColorLayout, ColorPacker, Error, Identifier, LiteralEncoder, MaskEncoder,
    PixelSource, Result, TrailingBits, ValueSink,
    literal::{ArrayDecl, COLOR_VALUES_PER_LINE, MASK_VALUES_PER_LINE},
    mask::mask_bit,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputKind {
    /// C++ header fragment
    #[default]
    Literal,
    /// Raw little-endian values
    Binary,
}

#[derive(Debug, Clone, Copy)]
pub struct ColorOptions {
    pub layout: ColorLayout,
    pub values_per_line: usize,
    pub element_type: &'static str,
    pub descriptor_type: &'static str,
    pub output: OutputKind,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            layout: ColorLayout::PICOSYSTEM,
            values_per_line: COLOR_VALUES_PER_LINE,
            element_type: "picosystem::color_t",
            descriptor_type: "picosystem::buffer_t",
            output: OutputKind::Literal,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MaskOptions {
    pub trailing: TrailingBits,
    pub values_per_line: usize,
    pub element_type: &'static str,
    pub output: OutputKind,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            trailing: TrailingBits::Truncate,
            values_per_line: MASK_VALUES_PER_LINE,
            element_type: "uint8_t",
            output: OutputKind::Literal,
        }
    }
}

fn drain<T>(values: impl Iterator<Item = T>, sink: &mut impl ValueSink<T>) -> Result<()> {
    for value in values {
        sink.push(value)?;
    }
    sink.finish()
}

/// Emits one packed color word per pixel, in scan order.
///
/// Literal output is the `const <element_type> <name>_data[W*H]` array
/// followed by a `<descriptor_type> <name>_buffer` line pointing at it.
/// Returns the number of words written.
pub fn encode_color<S: PixelSource, W: embedded_io::Write>(
    source: &S,
    name: &Identifier,
    options: &ColorOptions,
    mut writer: W,
) -> Result<u64> {
    let packer = ColorPacker::new(options.layout)?;
    let count = source.pixel_count();
    let words = source.pixels().map(|pixel| packer.pack(pixel));

    match options.output {
        OutputKind::Literal => {
            let array = name.array_name();
            debug!("emitting {array}[{count}]");
            let decl = ArrayDecl {
                element_type: options.element_type,
                name: &array,
                count,
            };
            let mut encoder = LiteralEncoder::new(&mut writer, &decl, options.values_per_line)?;
            drain(words, &mut encoder)?;

            let size = source.size();
            let descriptor = format!(
                "{} {}{{.w = {}, .h = {}, .data = ({} *){}}};\n",
                options.descriptor_type,
                name.descriptor_name(),
                size.width,
                size.height,
                options.element_type,
                array
            );
            writer
                .write_all(descriptor.as_bytes())
                .map_err(Error::from_io_error)?;
        }
        OutputKind::Binary => {
            let mut encoder = BinaryEncoder::new(&mut writer, count);
            drain(words, &mut encoder)?;
        }
    }
    Ok(count)
}

/// Emits the transparency mask, 8 pixels per byte, first pixel in the MSB.
///
/// Returns the number of bytes written.
pub fn encode_mask<S: PixelSource, W: embedded_io::Write>(
    source: &S,
    name: &Identifier,
    options: &MaskOptions,
    mut writer: W,
) -> Result<u64> {
    let bits = source.pixels().map(mask_bit);
    let count = options.trailing.byte_count(source.pixel_count());

    match options.output {
        OutputKind::Literal => {
            let array = name.array_name();
            debug!("emitting {array}[{count}]");
            let decl = ArrayDecl {
                element_type: options.element_type,
                name: &array,
                count,
            };
            let literal = LiteralEncoder::new(&mut writer, &decl, options.values_per_line)?;
            drain(bits, &mut MaskEncoder::new(literal, options.trailing))?;
        }
        OutputKind::Binary => {
            let binary = BinaryEncoder::new(&mut writer, count);
            drain(bits, &mut MaskEncoder::new(binary, options.trailing))?;
        }
    }
    Ok(count)
}
