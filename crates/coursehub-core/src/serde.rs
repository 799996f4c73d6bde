use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serializer};

/// Serializes a money amount as a string with two fraction digits ("49.90").
pub fn serialize_decimal<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{:.2}", value))
}

pub fn serialize_optional_decimal<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serialize_decimal(v, serializer),
        None => serializer.serialize_none(),
    }
}

/// Deserializes a field of a partial update.
///
/// - absent field: `None` (requires `#[serde(default)]`)
/// - `null` or blank string: `Some(None)`, i.e. clear the value
/// - anything else: parsed with `FromStr`
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        None => Ok(Some(None)),
        Some(s) if s.trim().is_empty() => Ok(Some(None)),
        Some(s) => s
            .trim()
            .parse::<T>()
            .map(|v| Some(Some(v)))
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Serialize)]
    struct Price {
        #[serde(serialize_with = "serialize_decimal")]
        price: f64,
        #[serde(serialize_with = "serialize_optional_decimal")]
        original_price: Option<f64>,
    }

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_nullable")]
        count: Option<Option<u32>>,
    }

    #[test]
    fn test_serialize_decimal() {
        let price = Price {
            price: 49.9,
            original_price: None,
        };
        assert_eq!(
            serde_json::to_value(&price).unwrap(),
            json!({"price": "49.90", "original_price": null})
        );

        let price = Price {
            price: 0.0,
            original_price: Some(120.0),
        };
        assert_eq!(
            serde_json::to_value(&price).unwrap(),
            json!({"price": "0.00", "original_price": "120.00"})
        );
    }

    #[test]
    fn test_deserialize_nullable() {
        let patch: Patch = serde_json::from_value(json!({})).unwrap();
        assert_eq!(patch.count, None);

        let patch: Patch = serde_json::from_value(json!({"count": null})).unwrap();
        assert_eq!(patch.count, Some(None));

        let patch: Patch = serde_json::from_value(json!({"count": " "})).unwrap();
        assert_eq!(patch.count, Some(None));

        let patch: Patch = serde_json::from_value(json!({"count": "7"})).unwrap();
        assert_eq!(patch.count, Some(Some(7)));

        assert!(serde_json::from_value::<Patch>(json!({"count": "seven"})).is_err());
    }
}
