//! Numeric literal rendering for WAT output.
//!
//! Every number the writer emits goes through [`WatLiteral`], which renders a
//! value in the requested [`Base`]. Integers use plain decimal or `0x`-prefixed
//! hexadecimal. Floats use the shortest decimal form that round-trips, or the
//! hexadecimal float format via [`fhex`] when hex output is requested.
//!
//! NaN values always render as `nan`, `-nan`, or `nan:0x<payload>` regardless
//! of base, because the payload is bit-significant and has no decimal form.
//! (The script-level `nan:canonical` / `nan:arithmetic` patterns are not
//! values and are emitted by the script writer, never here.)
//!
//! # Example
//!
//! ```
//! use wattext::wat::{Base, WatLiteral};
//!
//! assert_eq!(255u32.wat_literal(Base::Hexadecimal), "0xff");
//! assert_eq!((-8i32).wat_literal(Base::Hexadecimal), "-0x8");
//! assert_eq!(0.5f32.wat_literal(Base::Decimal), "0.5");
//! assert_eq!(f64::NEG_INFINITY.wat_literal(Base::Decimal), "-inf");
//! ```

use fhex::ToHex;

/// The numeric base for literal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Base {
    /// Plain decimal literals (the default).
    #[default]
    Decimal,
    /// `0x`-prefixed hexadecimal literals; hex float format for floats.
    Hexadecimal,
}

/// Render a value as a WAT numeric literal in the given base.
pub trait WatLiteral {
    fn wat_literal(&self, base: Base) -> String;
}

macro_rules! unsigned_literal {
    ($($t:ty),*) => {
        $(impl WatLiteral for $t {
            fn wat_literal(&self, base: Base) -> String {
                match base {
                    Base::Decimal => self.to_string(),
                    Base::Hexadecimal => format!("0x{:x}", self),
                }
            }
        })*
    };
}

unsigned_literal!(u8, u32, u64);

macro_rules! signed_literal {
    ($($t:ty),*) => {
        $(impl WatLiteral for $t {
            fn wat_literal(&self, base: Base) -> String {
                match base {
                    Base::Decimal => self.to_string(),
                    Base::Hexadecimal if *self < 0 => format!("-0x{:x}", self.unsigned_abs()),
                    Base::Hexadecimal => format!("0x{:x}", self),
                }
            }
        })*
    };
}

signed_literal!(i32, i64);

impl WatLiteral for f32 {
    fn wat_literal(&self, base: Base) -> String {
        let bits = self.to_bits();
        if self.is_nan() {
            let sign = if bits >> 31 == 1 { "-" } else { "" };
            let payload = bits & 0x007f_ffff;
            if payload == F32_CANONICAL_PAYLOAD {
                format!("{sign}nan")
            } else {
                format!("{sign}nan:0x{payload:x}")
            }
        } else if self.is_infinite() {
            if *self < 0.0 { "-inf".to_string() } else { "inf".to_string() }
        } else {
            match base {
                Base::Decimal => format!("{:?}", self),
                Base::Hexadecimal => self.to_hex(),
            }
        }
    }
}

impl WatLiteral for f64 {
    fn wat_literal(&self, base: Base) -> String {
        let bits = self.to_bits();
        if self.is_nan() {
            let sign = if bits >> 63 == 1 { "-" } else { "" };
            let payload = bits & 0x000f_ffff_ffff_ffff;
            if payload == F64_CANONICAL_PAYLOAD {
                format!("{sign}nan")
            } else {
                format!("{sign}nan:0x{payload:x}")
            }
        } else if self.is_infinite() {
            if *self < 0.0 { "-inf".to_string() } else { "inf".to_string() }
        } else {
            match base {
                Base::Decimal => format!("{:?}", self),
                Base::Hexadecimal => self.to_hex(),
            }
        }
    }
}

// Quiet bit set, payload otherwise zero. A NaN with exactly this payload is
// the canonical NaN and prints as a bare `nan`.
const F32_CANONICAL_PAYLOAD: u32 = 0x0040_0000;
const F64_CANONICAL_PAYLOAD: u64 = 0x0008_0000_0000_0000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_decimal() {
        assert_eq!(0u32.wat_literal(Base::Decimal), "0");
        assert_eq!(4294967295u32.wat_literal(Base::Decimal), "4294967295");
        assert_eq!(7u8.wat_literal(Base::Decimal), "7");
    }

    #[test]
    fn unsigned_hex() {
        assert_eq!(10u32.wat_literal(Base::Hexadecimal), "0xa");
        assert_eq!(u64::MAX.wat_literal(Base::Hexadecimal), "0xffffffffffffffff");
    }

    #[test]
    fn signed_decimal() {
        assert_eq!((-1i32).wat_literal(Base::Decimal), "-1");
        assert_eq!(i64::MIN.wat_literal(Base::Decimal), "-9223372036854775808");
    }

    #[test]
    fn signed_hex_keeps_sign() {
        assert_eq!((-31i32).wat_literal(Base::Hexadecimal), "-0x1f");
        assert_eq!(i32::MIN.wat_literal(Base::Hexadecimal), "-0x80000000");
        assert_eq!(31i64.wat_literal(Base::Hexadecimal), "0x1f");
    }

    #[test]
    fn float_decimal_shortest() {
        assert_eq!(1.0f32.wat_literal(Base::Decimal), "1.0");
        assert_eq!((-0.0f32).wat_literal(Base::Decimal), "-0.0");
        assert_eq!(0.25f64.wat_literal(Base::Decimal), "0.25");
    }

    #[test]
    fn float_infinities() {
        assert_eq!(f32::INFINITY.wat_literal(Base::Decimal), "inf");
        assert_eq!(f64::NEG_INFINITY.wat_literal(Base::Hexadecimal), "-inf");
    }

    #[test]
    fn float_canonical_nan() {
        assert_eq!(f32::from_bits(0x7fc0_0000).wat_literal(Base::Decimal), "nan");
        assert_eq!(f32::from_bits(0xffc0_0000).wat_literal(Base::Decimal), "-nan");
        assert_eq!(
            f64::from_bits(0x7ff8_0000_0000_0000).wat_literal(Base::Decimal),
            "nan"
        );
    }

    #[test]
    fn float_nan_payload() {
        assert_eq!(
            f32::from_bits(0x7fa0_0000).wat_literal(Base::Decimal),
            "nan:0x200000"
        );
        assert_eq!(
            f64::from_bits(0x7ff4_0000_0000_0000).wat_literal(Base::Decimal),
            "nan:0x4000000000000"
        );
    }
}
