use crate::config::ConfigError;
use crate::core::ContainerError;
use crate::primitives::bin::check_geometry;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

fn default_num() -> usize {
    100
}

fn default_low() -> f64 {
    0.0
}

fn default_high() -> f64 {
    1.0
}

/// Geometry of a binning, as read from configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BinParameters {
    #[serde(default = "default_num")]
    #[schemars(
        title = "Number of bins",
        description = "How many equal-width bins divide [low, high)."
    )]
    pub num: usize,

    #[serde(default = "default_low")]
    #[schemars(
        title = "Low edge",
        description = "Inclusive lower edge of the first bin."
    )]
    pub low: f64,

    #[serde(default = "default_high")]
    #[schemars(
        title = "High edge",
        description = "Exclusive upper edge of the last bin."
    )]
    pub high: f64,
}

impl Default for BinParameters {
    fn default() -> Self {
        Self {
            num: default_num(),
            low: default_low(),
            high: default_high(),
        }
    }
}

impl BinParameters {
    pub fn schema() -> Schema {
        schema_for!(BinParameters)
    }

    pub fn validate(&self) -> Result<(), ContainerError> {
        check_geometry(self.low, self.high, self.num)
    }

    /// Parses and validates a JSON object; missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let params: BinParameters = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }
}

impl TryFrom<serde_json::Value> for BinParameters {
    type Error = ConfigError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let params: BinParameters = serde_json::from_value(value)?;
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn defaults_are_valid() {
        let p = BinParameters::default();
        assert_eq!(p.num, 100);
        assert_eq!(p.low, 0.0);
        assert_eq!(p.high, 1.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let p = BinParameters::from_json_str(r#"{"num": 20}"#).unwrap();
        assert_eq!(
            p,
            BinParameters {
                num: 20,
                ..BinParameters::default()
            }
        );
    }

    #[test]
    fn invalid_geometry_is_rejected() {
        let err = BinParameters::from_json_str(r#"{"low": 5.0, "high": 1.0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter(ContainerError::InvalidRange { .. })
        ));
        assert_eq!(
            err.to_string(),
            "invalid parameter: low (5) must be less than high (1)"
        );

        let err = BinParameters::try_from(json!({"num": 0})).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter(ContainerError::InvalidNum(0))
        ));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            BinParameters::from_json_str("{\"num\": \"ten\"}"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            BinParameters::from_json_str("{\"num\": -3}"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn serde_roundtrip() {
        let p0 = BinParameters {
            num: 7,
            low: -2.5,
            high: 4.0,
        };
        let j = serde_json::to_string(&p0).unwrap();
        let p1: BinParameters = serde_json::from_str(&j).unwrap();
        assert_eq!(p0, p1);
    }

    #[test]
    fn schema_describes_fields() {
        let v = serde_json::to_value(BinParameters::schema()).unwrap();
        let props = v.get("properties").cloned().unwrap_or(Value::Null);
        for field in ["num", "low", "high"] {
            assert!(props.get(field).is_some(), "missing {field}");
        }
        assert_eq!(
            props["num"]["title"],
            Value::String("Number of bins".into())
        );
    }
}
