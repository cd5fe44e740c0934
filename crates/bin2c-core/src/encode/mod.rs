//! Conversion of byte streams into C array literals.
//!
//! This module implements the conversion pipeline: skip leading bytes, group
//! the remainder into fixed-width elements, decode each group under the
//! requested byte order, and render the values as a line-wrapped array
//! literal.
//!
//! ## Pipeline Overview
//!
//! 1. Discard the first `skip` bytes of the source
//! 2. Chunk the remaining bytes into groups of the element width
//! 3. Decode each group as an unsigned integer (final short group is
//!    zero-padded, see [`element`] docs)
//! 4. Emit fixed-width hex tokens, wrapped at a per-width line length
//!
//! One conversion is a single linear pass; the encoder keeps no state
//! between calls.

mod element;

use crate::error::{Error, Result};
use std::io::Write;
use std::path::Path;
use tracing::{debug, trace};

pub use element::{decode_group, hex_token, ByteOrder, ElementWidth};

/// Indent prefixed to every token line
const LINE_INDENT: &str = "  ";

/// Array name used when the caller does not provide one
const DEFAULT_ARRAY_NAME: &str = "data";

/// Configuration for the encoder
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Byte size of each output element
    pub width: ElementWidth,
    /// Number of leading source bytes to discard (e.g. a file header)
    pub skip: usize,
    /// Byte order for multi-byte elements
    pub byte_order: ByteOrder,
    /// Symbol name of the emitted array
    pub array_name: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            width: ElementWidth::U8,
            skip: 0,
            byte_order: ByteOrder::Little,
            array_name: DEFAULT_ARRAY_NAME.to_string(),
        }
    }
}

impl EncoderConfig {
    /// Creates a new encoder config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the element width
    pub fn width(mut self, width: ElementWidth) -> Self {
        self.width = width;
        self
    }

    /// Sets the number of leading bytes to skip
    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Sets the byte order for multi-byte elements
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }

    /// Sets the emitted array name
    pub fn array_name(mut self, name: impl Into<String>) -> Self {
        self.array_name = name.into();
        self
    }
}

/// Converts byte slices into C array literals
///
/// The encoder is pure and deterministic; every call operates on its own
/// input and produces its own output buffer.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Creates a new encoder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new encoder with custom configuration
    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Encode `data` into a C array literal.
    ///
    /// A skip count at or beyond the end of `data` is not an error; it
    /// produces a literal with an empty body.
    pub fn encode(&self, data: &[u8]) -> Result<String> {
        let width = self.config.width;
        let body = data.get(self.config.skip..).unwrap_or(&[]);

        debug!(
            "encoding {} bytes ({} skipped) as {} elements",
            body.len(),
            data.len() - body.len(),
            width.c_type()
        );

        let mut out = String::with_capacity(64 + body.len() * 8 / width.bytes());
        out.push_str("static ");
        out.push_str(width.c_type());
        out.push(' ');
        out.push_str(&self.config.array_name);
        out.push_str("[] = {\n");

        let line_bytes = width.bytes() * width.tokens_per_line();
        let mut elements = 0usize;

        for line in body.chunks(line_bytes) {
            out.push_str(LINE_INDENT);
            for (i, group) in line.chunks(width.bytes()).enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let value = decode_group(group, width, self.config.byte_order);
                out.push_str(&hex_token(value, width));
                out.push(',');
                elements += 1;
            }
            out.push('\n');
        }

        out.push_str("};\n");

        trace!("encoded {} element(s)", elements);
        Ok(out)
    }

    /// Encode `data` and write the literal to `out`.
    ///
    /// Write failures surface as [`Error::Io`]; nothing is retried.
    pub fn encode_to<W: Write>(&self, data: &[u8], mut out: W) -> Result<()> {
        let literal = self.encode(data)?;
        out.write_all(literal.as_bytes())?;
        Ok(())
    }
}

/// Convert a binary file into a C array literal file.
///
/// This is a convenience function that reads `input`, encodes it with
/// `config`, and writes the literal to `output`. On a write failure the
/// destination is left in an undefined, possibly partial state; callers
/// that need atomicity should write to a temporary path and rename.
pub fn encode_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: EncoderConfig,
) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let data = std::fs::read(input).map_err(|e| Error::file_read(input, e))?;
    trace!("read {} bytes from {}", data.len(), input.display());

    let literal = Encoder::with_config(config).encode(&data)?;

    std::fs::write(output, literal).map_err(|e| Error::file_write(output, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn encode_with(data: &[u8], config: EncoderConfig) -> String {
        Encoder::with_config(config).encode(data).unwrap()
    }

    #[test]
    fn test_width_one_basic() {
        let literal = encode_with(
            &[0x01, 0x02, 0xFF],
            EncoderConfig::new().array_name("payload"),
        );
        assert_eq!(
            literal,
            "static uint8_t payload[] = {\n  0x01, 0x02, 0xff,\n};\n"
        );
    }

    #[test]
    fn test_empty_input_empty_body() {
        let literal = encode_with(&[], EncoderConfig::new().array_name("empty"));
        assert_eq!(literal, "static uint8_t empty[] = {\n};\n");
    }

    #[test]
    fn test_skip_beyond_end_is_empty_body_not_error() {
        let literal = encode_with(
            &[0x01, 0x02, 0x03],
            EncoderConfig::new().skip(10).array_name("hdr"),
        );
        assert_eq!(literal, "static uint8_t hdr[] = {\n};\n");
    }

    #[test]
    fn test_skip_drops_leading_bytes() {
        let literal = encode_with(
            &[0xAA, 0xBB, 0x01, 0x02],
            EncoderConfig::new().skip(2).array_name("body"),
        );
        assert_eq!(literal, "static uint8_t body[] = {\n  0x01, 0x02,\n};\n");
    }

    #[test]
    fn test_line_wrapping_width_one() {
        // 45 bytes wrap as 20 + 20 + 5 tokens
        let data: Vec<u8> = (0..45u8).collect();
        let literal = encode_with(&data, EncoderConfig::new().array_name("wrap"));
        let lines: Vec<&str> = literal.lines().collect();

        assert_eq!(lines.len(), 5); // header + 3 token lines + closer
        assert_eq!(lines[0], "static uint8_t wrap[] = {");
        assert_eq!(lines[1].matches("0x").count(), 20);
        assert_eq!(lines[2].matches("0x").count(), 20);
        assert_eq!(lines[3].matches("0x").count(), 5);
        assert_eq!(lines[4], "};");
    }

    #[test]
    fn test_line_wrapping_width_four() {
        // 28 bytes = 6 full elements + 1 padded, wrapped as 6 + 1
        let data: Vec<u8> = (0..28u8).collect();
        let literal = encode_with(
            &data,
            EncoderConfig::new()
                .width(ElementWidth::U32)
                .array_name("words"),
        );
        let lines: Vec<&str> = literal.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "static uint32_t words[] = {");
        assert_eq!(lines[1].matches("0x").count(), 6);
        assert_eq!(lines[2].matches("0x").count(), 1);
        assert_eq!(lines[3], "};");
    }

    #[test]
    fn test_partial_final_group_little_endian() {
        let literal = encode_with(
            &[0x01, 0x02, 0x03],
            EncoderConfig::new()
                .width(ElementWidth::U32)
                .array_name("tail"),
        );
        assert_eq!(literal, "static uint32_t tail[] = {\n  0x00030201,\n};\n");
    }

    #[test]
    fn test_partial_final_group_big_endian() {
        let literal = encode_with(
            &[0x01, 0x02, 0x03],
            EncoderConfig::new()
                .width(ElementWidth::U32)
                .byte_order(ByteOrder::Big)
                .array_name("tail"),
        );
        assert_eq!(literal, "static uint32_t tail[] = {\n  0x01020300,\n};\n");
    }

    #[test]
    fn test_width_two_both_orders() {
        let data = [0x12, 0x34, 0x56, 0x78];
        let little = encode_with(
            &data,
            EncoderConfig::new()
                .width(ElementWidth::U16)
                .array_name("halves"),
        );
        assert_eq!(
            little,
            "static uint16_t halves[] = {\n  0x3412, 0x7856,\n};\n"
        );

        let big = encode_with(
            &data,
            EncoderConfig::new()
                .width(ElementWidth::U16)
                .byte_order(ByteOrder::Big)
                .array_name("halves"),
        );
        assert_eq!(big, "static uint16_t halves[] = {\n  0x1234, 0x5678,\n};\n");
    }

    #[test]
    fn test_byte_count_conservation() {
        // element count == ceil((L - k) / width), and trimming the padding
        // from the reconstructed bytes reproduces the post-skip input
        let data: Vec<u8> = (0..37u8).map(|b| b.wrapping_mul(7)).collect();
        let skip = 5;

        for width in [ElementWidth::U8, ElementWidth::U16, ElementWidth::U32] {
            let literal = encode_with(
                &data,
                EncoderConfig::new().width(width).skip(skip).array_name("c"),
            );

            let tokens: Vec<u32> = literal
                .lines()
                .flat_map(|l| l.split_whitespace())
                .filter_map(|t| {
                    t.strip_prefix("0x")
                        .and_then(|t| u32::from_str_radix(t.trim_end_matches(','), 16).ok())
                })
                .collect();

            let remaining = data.len() - skip;
            assert_eq!(tokens.len(), remaining.div_ceil(width.bytes()));

            let mut reconstructed = Vec::new();
            for value in &tokens {
                reconstructed.extend_from_slice(&value.to_le_bytes()[..width.bytes()]);
            }
            reconstructed.truncate(remaining);
            assert_eq!(reconstructed, &data[skip..]);
        }
    }

    #[test]
    fn test_width_one_round_trip() {
        let data: Vec<u8> = vec![0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01];
        let literal = encode_with(&data, EncoderConfig::new().array_name("rt"));

        let decoded: Vec<u8> = literal
            .lines()
            .flat_map(|l| l.split_whitespace())
            .filter_map(|t| {
                t.strip_prefix("0x")
                    .and_then(|t| u8::from_str_radix(t.trim_end_matches(','), 16).ok())
            })
            .collect();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_encode_to_writes_same_literal() {
        let encoder = Encoder::with_config(EncoderConfig::new().array_name("sink"));
        let data = [0x10, 0x20];

        let mut buf = Vec::new();
        encoder.encode_to(&data, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            encoder.encode(&data).unwrap()
        );
    }

    #[test]
    fn test_encode_file_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("blob.bin");
        let output = dir.path().join("blob.c");
        std::fs::write(&input, [0x01, 0x02, 0x03]).unwrap();

        encode_file(&input, &output, EncoderConfig::new().array_name("blob")).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, "static uint8_t blob[] = {\n  0x01, 0x02, 0x03,\n};\n");
    }

    #[test]
    fn test_encode_file_missing_input() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = encode_file(
            dir.path().join("nope.bin"),
            dir.path().join("nope.c"),
            EncoderConfig::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
