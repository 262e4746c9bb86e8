//! Literals.

use super::Printer;
use crate::codes;
use recast_ast::{BitVector, Constant};
use recast_common::Logic;
use std::io::Write;

/// Binary digits buffered per write.
const DIGIT_CHUNK: usize = 64;

/// Reads bit `index` of a little-endian bit plane. Absent planes and bits
/// past the end of a short plane read as zero.
fn plane_bit(plane: Option<&[u8]>, index: usize) -> bool {
    plane
        .and_then(|bytes| bytes.get(index / 8))
        .is_some_and(|byte| (byte >> (index % 8)) & 1 == 1)
}

impl<W: Write> Printer<'_, W> {
    pub(super) fn constant(&mut self, constant: &Constant) {
        if !self.out.is_usable() {
            return;
        }
        match constant {
            Constant::Bits(bits) => self.bits(bits),
            Constant::Str { image } => self.put(image),
            Constant::Int(value) => write!(self.out, "{value}"),
            Constant::Real(value) if value.is_finite() => write!(self.out, "{value:?}"),
            Constant::Real(value) => {
                if self.policy.malformed_constants.warns() {
                    self.warn(
                        codes::MALFORMED_CONSTANT,
                        format!("real constant `{value}` has no Verilog spelling; wrote 0.0"),
                        "real constant",
                    );
                }
                self.put("0.0");
            }
            Constant::Opaque(node) => self.unhandled("constant", node),
        }
    }

    /// Writes a sized binary literal, most significant bit first.
    fn bits(&mut self, bits: &BitVector) {
        let expected = bits.size.div_ceil(8) as usize;
        let planes = [bits.value.as_deref(), bits.x.as_deref(), bits.z.as_deref()];
        let mismatched = planes
            .iter()
            .flatten()
            .any(|plane| plane.len() != expected);
        if (bits.size == 0 || mismatched) && self.policy.malformed_constants.warns() {
            let message = if bits.size == 0 {
                "sized constant has zero width".to_owned()
            } else {
                format!(
                    "sized constant of width {} does not match its bit planes ({} bytes expected)",
                    bits.size, expected
                )
            };
            self.warn(codes::MALFORMED_CONSTANT, message, "sized constant");
        }

        if bits.size > 0 {
            write!(self.out, "{}", bits.size);
        }
        self.put(if bits.signed { "'sb" } else { "'b" });
        if bits.size == 0 {
            self.put("0");
            return;
        }

        // Digits past the longest plane read as zero, so a malformed constant
        // stops one zero digit above its data. Verilog zero-extends the rest.
        let width = if mismatched {
            let longest = planes.iter().flatten().map(|plane| plane.len()).max().unwrap_or(0);
            (longest * 8 + 1).max(DIGIT_CHUNK).min(bits.size as usize)
        } else {
            bits.size as usize
        };

        let [value, x, z] = planes;
        let mut chunk = String::with_capacity(DIGIT_CHUNK);
        for i in (0..width).rev() {
            chunk.push(
                Logic::from_planes(plane_bit(value, i), plane_bit(x, i), plane_bit(z, i)).as_char(),
            );
            if chunk.len() == DIGIT_CHUNK {
                self.put(&chunk);
                chunk.clear();
                if !self.out.is_usable() {
                    return;
                }
            }
        }
        self.put(&chunk);
    }
}
