// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Custom serializers for 64-bit integer fields.
//!
//! The Compute Engine API sends 64-bit integers (`id`, `sizeGb`, ...) as
//! JSON strings. The client always serializes these fields as strings, and
//! accepts both strings and numbers when deserializing.

/// Serializes `i64` fields as strings.
pub struct I64;

/// Serializes `u64` fields as strings.
pub struct U64;

macro_rules! int_as_string {
    ($name: ident, $visitor: ident, $t: ty, $msg: literal) => {
        impl<'de> serde_with::DeserializeAs<'de, $t> for $name {
            fn deserialize_as<D>(deserializer: D) -> Result<$t, D::Error>
            where
                D: serde::de::Deserializer<'de>,
            {
                deserializer.deserialize_any($visitor)
            }
        }

        impl serde_with::SerializeAs<$t> for $name {
            fn serialize_as<S>(source: &$t, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(source)
            }
        }

        struct $visitor;

        impl serde::de::Visitor<'_> for $visitor {
            type Value = $t;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str($msg)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.trim().parse::<$t>().map_err(|_| {
                    E::invalid_value(serde::de::Unexpected::Str(value), &self)
                })
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                <$t>::try_from(value).map_err(|_| {
                    E::invalid_value(serde::de::Unexpected::Signed(value), &self)
                })
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                <$t>::try_from(value).map_err(|_| {
                    E::invalid_value(serde::de::Unexpected::Unsigned(value), &self)
                })
            }
        }
    };
}

int_as_string!(I64, I64Visitor, i64, "a 64-bit signed integer, or a string containing one");
int_as_string!(U64, U64Visitor, u64, "a 64-bit unsigned integer, or a string containing one");

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::{Value, json};
    use serde_with::{DeserializeAs, SerializeAs};
    use test_case::test_case;

    #[test_case(json!(0), 0)]
    #[test_case(json!("0"), 0; "zero string")]
    #[test_case(json!(-42), -42)]
    #[test_case(json!("-7"), -7)]
    #[test_case(json!(i64::MAX), i64::MAX; "max")]
    #[test_case(json!(i64::MAX.to_string()), i64::MAX; "max as string")]
    #[test_case(json!(i64::MIN.to_string()), i64::MIN; "min as string")]
    fn signed(input: Value, want: i64) -> Result<()> {
        let got = I64::deserialize_as(input)?;
        assert_eq!(got, want);
        let serialized = I64::serialize_as(&got, serde_json::value::Serializer)?;
        assert_eq!(serialized, json!(want.to_string()));
        Ok(())
    }

    #[test_case(json!(0), 0)]
    #[test_case(json!("1234567890123456789"), 1234567890123456789)]
    #[test_case(json!(u64::MAX), u64::MAX; "max")]
    #[test_case(json!(u64::MAX.to_string()), u64::MAX; "max as string")]
    fn unsigned(input: Value, want: u64) -> Result<()> {
        let got = U64::deserialize_as(input)?;
        assert_eq!(got, want);
        let serialized = U64::serialize_as(&got, serde_json::value::Serializer)?;
        assert_eq!(serialized, json!(want.to_string()));
        Ok(())
    }

    #[test_case(json!("abc"))]
    #[test_case(json!("12.5"))]
    #[test_case(json!(12.5))]
    #[test_case(json!(u64::MAX); "out of range")]
    #[test_case(json!({}))]
    fn signed_error(input: Value) {
        let got = I64::deserialize_as(input).unwrap_err();
        assert!(got.is_data(), "{got:?}");
    }

    #[test_case(json!(-1))]
    #[test_case(json!("-1"))]
    fn unsigned_error(input: Value) {
        let got = U64::deserialize_as(input).unwrap_err();
        assert!(got.is_data(), "{got:?}");
    }
}
