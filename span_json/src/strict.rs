// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding helpers that reject JSON objects with repeated keys.
//!
//! `serde_json::Value` keeps the last of several equal keys, so both decoders go through
//! these instead. A repeated key is reported as a data error, which classifies as
//! [`ParseErrorKind::TypeMismatch`](crate::ParseErrorKind::TypeMismatch).

use core::fmt;

use hashbrown::HashSet;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Value};

fn duplicate_key<E: de::Error>(key: &str) -> E {
    E::custom(format_args!("duplicate key `{key}`"))
}

/// The keys already read from one JSON object.
#[derive(Debug, Default)]
pub(crate) struct SeenKeys(HashSet<String>);

impl SeenKeys {
    pub(crate) fn insert<E: de::Error>(&mut self, key: &str) -> Result<(), E> {
        if self.0.contains(key) {
            return Err(duplicate_key(key));
        }
        self.0.insert(key.to_owned());
        Ok(())
    }
}

/// A [`Value`] decoded with repeated object keys rejected at every depth.
#[derive(Debug)]
pub(crate) struct StrictValue(pub(crate) Value);

impl<'de> Deserialize<'de> for StrictValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StrictValueVisitor)
    }
}

struct StrictValueVisitor;

impl<'de> Visitor<'de> for StrictValueVisitor {
    type Value = StrictValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<StrictValue, E> {
        Ok(StrictValue(Value::Bool(value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<StrictValue, E> {
        Ok(StrictValue(Value::from(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<StrictValue, E> {
        Ok(StrictValue(Value::from(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<StrictValue, E> {
        Ok(StrictValue(Value::from(value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<StrictValue, E> {
        Ok(StrictValue(Value::String(value.to_owned())))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<StrictValue, E> {
        Ok(StrictValue(Value::String(value)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<StrictValue, E> {
        Ok(StrictValue(Value::Null))
    }

    fn visit_none<E: de::Error>(self) -> Result<StrictValue, E> {
        Ok(StrictValue(Value::Null))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<StrictValue, D::Error> {
        StrictValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<StrictValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(StrictValue(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(StrictValue(Value::Array(items)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<StrictValue, A::Error> {
        let mut object = Map::new();
        while let Some(key) = map.next_key::<String>()? {
            if object.contains_key(&key) {
                return Err(duplicate_key(&key));
            }
            let StrictValue(value) = map.next_value()?;
            object.insert(key, value);
        }
        Ok(StrictValue(Value::Object(object)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::StrictValue;

    #[test]
    fn keeps_distinct_keys() {
        let StrictValue(value) =
            serde_json::from_str(r#"{ "a": [1, -2, 0.5, "x", null, true], "b": { "c": {} } }"#)
                .unwrap();
        assert_eq!(
            value,
            json!({ "a": [1, -2, 0.5, "x", null, true], "b": { "c": {} } })
        );
    }

    #[test]
    fn rejects_repeated_keys_at_any_depth() {
        for json in [
            r#"{ "a": 1, "a": 1 }"#,
            r#"{ "a": { "b": null, "b": null } }"#,
            r#"[{ "c": 1 }, { "c": 1, "c": 2 }]"#,
        ] {
            let error = serde_json::from_str::<StrictValue>(json).unwrap_err();
            assert!(error.is_data(), "{json}: {error}");
        }
    }
}
