//! Dec BigInt \
//! This crate provides [`BigInt`]: arbitrary-precision signed integers stored as
//! base `10^9` limbs, with schoolbook arithmetic, division by native divisors
//! and decimal text I/O over any character [`Read`] source.
//!
//! ```
//! use dec_bigint::{BigInt, StrRead};
//!
//! let mut src = StrRead::new("  -000123 456");
//! let a = BigInt::parse_from(&mut src);
//! let b = BigInt::parse_from(&mut src);
//! assert_eq!((&a * &b).to_string(), "-56088");
//!
//! let mut c = BigInt::from(1_000_000_000);
//! c *= c.clone();
//! assert_eq!(c.to_string(), "1000000000000000000");
//! assert_eq!(BigInt::from(-5) % 3, BigInt::from(-2));
//! ```

mod big_int;
mod big_int_cache;
mod big_int_constants;
pub mod error;
pub mod read;
#[cfg(feature = "serde")]
mod ser;

pub use big_int::BigInt;
pub use big_int_constants::{BASE, DIGITS_PER_LIMB};
pub use error::{Error, Position, Result};
pub use read::{IoRead, Read, StrRead};

#[cfg(test)]
mod tests {
    use crate::{BigInt, IoRead};

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / 7).to_string(), "1428571428571");
        assert_eq!((&a % 7).to_string(), "3");
    }

    #[test]
    fn reads_from_byte_stream() {
        let input = "  31415926535897932384626433832795\n-2718281828459045";
        let mut src = IoRead::new(input.as_bytes());
        let pi = BigInt::read_from(&mut src).unwrap();
        let e = BigInt::read_from(&mut src).unwrap();
        assert_eq!(pi.to_string(), "31415926535897932384626433832795");
        assert_eq!(e.to_string(), "-2718281828459045");
        assert!(BigInt::read_from(&mut src).is_err());
    }
}
