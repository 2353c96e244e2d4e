use alloc::{format, string::String};
use core::marker::PhantomData;

use log::trace;

use crate::{Error, PackedValue, Result, ValueSink};

/// Color words per line in `png2argb` output
pub const COLOR_VALUES_PER_LINE: usize = 8;
/// Mask bytes per line in `png2bits` output
pub const MASK_VALUES_PER_LINE: usize = 17;

/// `const <element_type> <name>[<count>]`
#[derive(Debug, Clone, Copy)]
pub struct ArrayDecl<'a> {
    pub element_type: &'a str,
    pub name: &'a str,
    pub count: u64,
}

impl ArrayDecl<'_> {
    pub fn header(&self) -> String {
        format!("const {} {}[{}] = {{\n", self.element_type, self.name, self.count)
    }
}

/// Streams values into a C++ array literal.
///
/// Every value is written as `0x` plus zero-padded lowercase hex followed by
/// `", "`, with a line break after every `per_line` values. The header goes
/// out on construction and the closing `};` on [`ValueSink::finish`].
pub struct LiteralEncoder<W, T> {
    writer: W,
    per_line: usize,
    column: usize,
    line: u64,
    declared: u64,
    written: u64,
    _value: PhantomData<T>,
}

impl<W: embedded_io::Write, T: PackedValue> LiteralEncoder<W, T> {
    pub fn new(mut writer: W, decl: &ArrayDecl, per_line: usize) -> Result<Self> {
        if per_line == 0 {
            return Err(Error::InvalidLineWidth);
        }
        writer
            .write_all(decl.header().as_bytes())
            .map_err(Error::from_io_error)?;
        Ok(Self {
            writer,
            per_line,
            column: 0,
            line: 0,
            declared: decl.count,
            written: 0,
            _value: PhantomData,
        })
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes).map_err(Error::from_io_error)
    }
}

impl<W: embedded_io::Write, T: PackedValue> ValueSink<T> for LiteralEncoder<W, T> {
    fn push(&mut self, value: T) -> Result<()> {
        let text: heapless::String<8> =
            heapless::format!("0x{:0width$x}, ", value, width = T::HEX_DIGITS)?;
        self.write(text.as_bytes())?;
        self.written += 1;
        self.column += 1;
        if self.column == self.per_line {
            self.column = 0;
            self.line += 1;
            trace!("line {} done ({} values)", self.line, self.written);
            self.write(b"\n")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.written != self.declared {
            return Err(Error::CountMismatch {
                declared: self.declared,
                written: self.written,
            });
        }
        self.write(b"\n};\n")
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn render<T: PackedValue>(name: &str, values: &[T], per_line: usize) -> String {
        let mut out = Vec::<u8>::new();
        let decl = ArrayDecl {
            element_type: "uint8_t",
            name,
            count: values.len() as u64,
        };
        let mut enc = LiteralEncoder::new(&mut out, &decl, per_line).unwrap();
        for &v in values {
            enc.push(v).unwrap();
        }
        enc.finish().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn header_and_footer() {
        let text = render::<u8>("logo_data", &[0x01, 0xab], 17);
        assert_eq!(text, "const uint8_t logo_data[2] = {\n0x01, 0xab, \n};\n");
    }

    #[test]
    fn words_are_four_digits() {
        let text = render::<u16>("w", &[0x1, 0xffff, 0x0a0b], 8);
        assert!(text.contains("0x0001, 0xffff, 0x0a0b, "));
    }

    #[test]
    fn wraps_after_per_line_values() {
        let values: Vec<u16> = (0..20).collect();
        let text = render("a", &values, 8);
        let body: Vec<&str> = text.lines().skip(1).take_while(|l| *l != "};").collect();
        assert_eq!(body.len(), 3);
        assert_eq!(body[0].matches("0x").count(), 8);
        assert_eq!(body[1].matches("0x").count(), 8);
        assert_eq!(body[2].matches("0x").count(), 4);
        assert!(body[0].ends_with("0x0007, "));
    }

    #[test]
    fn exact_multiple_leaves_blank_line() {
        let text = render::<u8>("a", &[0; 2], 2);
        assert_eq!(text, "const uint8_t a[2] = {\n0x00, 0x00, \n\n};\n");
    }

    #[test]
    fn empty_body() {
        let text = render::<u8>("test_data", &[], 17);
        assert_eq!(text, "const uint8_t test_data[0] = {\n\n};\n");
    }

    #[test]
    fn count_mismatch() {
        let mut out = Vec::<u8>::new();
        let decl = ArrayDecl { element_type: "uint8_t", name: "a", count: 3 };
        let mut enc = LiteralEncoder::<_, u8>::new(&mut out, &decl, 8).unwrap();
        enc.push(1).unwrap();
        assert_eq!(
            enc.finish(),
            Err(Error::CountMismatch { declared: 3, written: 1 })
        );
    }

    #[test]
    fn zero_line_width_rejected() {
        let mut out = Vec::<u8>::new();
        let decl = ArrayDecl { element_type: "uint8_t", name: "a", count: 0 };
        assert!(matches!(
            LiteralEncoder::<_, u8>::new(&mut out, &decl, 0),
            Err(Error::InvalidLineWidth)
        ));
    }
}
