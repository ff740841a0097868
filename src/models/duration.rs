//! Serde helpers for duration fields.
//!
//! `chrono::TimeDelta` carries no serde support of its own; model fields
//! route through these helper modules to serialize durations as whole
//! seconds.

/// Serializes a `TimeDelta` as its total number of seconds.
pub(crate) mod duration_secs {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.num_seconds())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<TimeDelta, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = i64::deserialize(deserializer)?;
        Ok(TimeDelta::seconds(seconds))
    }
}

/// Serializes an `Option<TimeDelta>` as an optional number of seconds.
pub(crate) mod duration_secs_opt {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<TimeDelta>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(delta) => serializer.serialize_some(&delta.num_seconds()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<TimeDelta>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = Option::<i64>::deserialize(deserializer)?;
        Ok(seconds.map(TimeDelta::seconds))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "super::duration_secs")]
        plain: TimeDelta,
        #[serde(default, with = "super::duration_secs_opt")]
        optional: Option<TimeDelta>,
    }

    #[test]
    fn test_round_trip_as_seconds() {
        let holder = Holder {
            plain: TimeDelta::minutes(90),
            optional: Some(TimeDelta::seconds(-45)),
        };

        let json = serde_json::to_string(&holder).unwrap();
        assert_eq!(json, "{\"plain\":5400,\"optional\":-45}");

        let back: Holder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, holder);
    }

    #[test]
    fn test_missing_optional_deserializes_to_none() {
        let back: Holder = serde_json::from_str("{\"plain\":0,\"optional\":null}").unwrap();
        assert_eq!(back.optional, None);

        let back: Holder = serde_json::from_str("{\"plain\":0}").unwrap();
        assert_eq!(back.optional, None);
    }
}
