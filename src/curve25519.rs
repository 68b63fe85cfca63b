//! Curve25519 instantiated at 320-bit width.
//!
//! `y^2 = x^3 + 486662*x^2 + x` over `p = 2^255 - 19`. The extra 64 bits of
//! headroom above the field size keep the affine formulas' intermediate sums
//! inside the signed width.

use crate::bigint::Int320;
use crate::error::Error;
use crate::montgomery::{MontgomeryCurve, Point};

const WIDE: usize = 10;

/// `p = 2^255 - 19`
const MODULUS: Int320 = Int320::from_limbs([
    0xffffffffffffffed,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0x7fffffffffffffff,
    0,
]);

/// `A = 486662`
const COEFF_A: Int320 = Int320::from_limbs([0x76d06, 0, 0, 0, 0]);

/// Base point `G = (9, ...)`
const BASE_X: Int320 = Int320::from_limbs([9, 0, 0, 0, 0]);
const BASE_Y: Int320 = Int320::from_limbs([
    0x29e9c5a27eced3d9,
    0x923d4d7e6d7c61b2,
    0xe01edd2c7748d14c,
    0x20ae19a1b8a086b4,
    0,
]);

/// Order of the base point group.
const ORDER: Int320 = Int320::from_limbs([
    0x5812631a5cf5d3ed,
    0x14def9dea2f79cd6,
    0x0000000000000000,
    0x1000000000000000,
    0,
]);

/// Curve25519 with its standard base point and group order.
pub struct Curve25519 {
    curve: MontgomeryCurve<5, WIDE>,
}

impl Curve25519 {
    pub fn new() -> Self {
        Self {
            curve: MontgomeryCurve::new(COEFF_A, MODULUS),
        }
    }

    pub fn curve(&self) -> &MontgomeryCurve<5, WIDE> {
        &self.curve
    }

    pub fn base_point(&self) -> Point<5> {
        Point::new(BASE_X, BASE_Y)
    }

    pub fn order(&self) -> Int320 {
        ORDER
    }

    /// `k * G`.
    pub fn scalar_multiply_base(&self, k: &Int320) -> Result<Point<5>, Error> {
        self.curve.scalar_multiply(k, &self.base_point())
    }

    /// Derive the public key for a 32-byte private key given as hex.
    ///
    /// Keys live on the wire in byte-reversed order: the scalar is decoded
    /// little-endian, clamped (bits 0-2 and 255 cleared, bit 254 set), and
    /// the resulting x-coordinate is byte-reversed back before hex encoding.
    pub fn public_key(&self, private_key_hex: &str) -> Result<String, Error> {
        let mut scalar = Int320::from_hex(private_key_hex)?.reverse_byte_order(256 / 8);
        scalar.clear_bit(0)?;
        scalar.clear_bit(1)?;
        scalar.clear_bit(2)?;
        scalar.clear_bit(255)?;
        scalar.set_bit(254)?;

        let point = self.curve.scalar_multiply(&scalar, &self.base_point())?;
        Ok(point.x.reverse_byte_order(256 / 8).to_hex_string())
    }
}

impl Default for Curve25519 {
    fn default() -> Self {
        Self::new()
    }
}
