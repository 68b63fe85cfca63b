//! Fixed-width signed big integers with a number-theoretic toolkit and a
//! Montgomery-curve layer on top.
//!
//! [`BigInt`] is a two's-complement integer over a compile-time array of
//! 64-bit limbs: no allocation, value semantics, silent wraparound like the
//! native integer types. On top of the arithmetic core sit modular
//! exponentiation and inverse, Legendre/Jacobi symbols, Miller–Rabin
//! primality, Tonelli–Shanks square roots, and an affine Montgomery-curve
//! layer with a Curve25519 instantiation.
//!
//! Operations needing a double-width workspace take a second const parameter
//! pinned to twice the limb count:
//!
//! ```
//! use bignum::Int256;
//!
//! let base: Int256 = "3".parse().unwrap();
//! let exp = Int256::from(-7);
//! let result = base.pow_mod::<8>(&exp, &Int256::from(13)).unwrap();
//! assert_eq!(result, Int256::from(9));
//! ```
//!
//! Everything is deliberately timing-leaky teaching-grade code: branches
//! depend on operand values throughout, and the RNG adapters accept any
//! [`rand::Rng`]. Do not use this for production key material.

mod bigint;
mod convert;
mod curve25519;
mod divide;
mod error;
mod modular;
mod montgomery;
mod numtheory;
mod ops;
mod random;


pub use bigint::{BigInt, Int64, Int128, Int256, Int320, Int512, Int640, Int1024};
pub use curve25519::Curve25519;
pub use error::Error;
pub use montgomery::{MontgomeryCurve, Point};
pub use numtheory::DEFAULT_PRIMALITY_ROUNDS;
