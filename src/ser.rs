//! `serde` support. A [`BigInt`] is written as its canonical decimal string.
//! Human readable formats also accept a native integer when reading; compact
//! formats, which can not describe their own values, read the string only.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::BigInt;

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl<'de> Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal integer string or an integer")
            }

            fn visit_i64<E>(self, value: i64) -> Result<BigInt, E> {
                Ok(value.into())
            }

            fn visit_u64<E>(self, value: u64) -> Result<BigInt, E> {
                Ok(value.into())
            }

            fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
            where
                E: de::Error,
            {
                value.parse().map_err(E::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_any(BigIntVisitor)
        } else {
            deserializer.deserialize_str(BigIntVisitor)
        }
    }
}
