//! Dataset schema - releases and the players graded under them.

use serde::{Deserialize, Deserializer};

/// Top-level shape of the analysis dataset.
///
/// The dataset is a single JSON object keyed by `all_releases`. A missing or
/// empty collection deserializes to zero releases rather than an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub all_releases: Vec<Release>,
}

/// One product release and the players analyzed under it.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Display title, also the basis for the derived output file name.
    #[serde(rename = "release")]
    pub name: String,
    /// Primary ordering key.
    #[serde(default)]
    pub year: i32,
    /// Secondary ordering key.
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub players: Vec<Player>,
}

/// One graded player. Immutable once loaded; only filtered and read.
///
/// `debut`, `war` and `career_length` collapse "absent", JSON null and a
/// non-finite numeric sentinel into `None` at the deserialization boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct Player {
    pub name: String,
    /// Professional debut indicator. A player who never debuted has `None`.
    #[serde(default, deserialize_with = "de_opt_debut")]
    pub debut: Option<String>,
    /// Career value metric (wins above replacement).
    #[serde(default, deserialize_with = "de_opt_metric")]
    pub war: Option<f64>,
    /// Career span in years.
    #[serde(default, deserialize_with = "de_opt_metric")]
    pub career_length: Option<f64>,
}

/// Deserialize an optional metric, treating a non-finite value as missing.
fn de_opt_metric<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|v| v.is_finite()))
}

/// Deserialize the debut indicator from any JSON scalar.
///
/// Upstream writes a date string when a player debuted and null (or a float
/// NaN sentinel) when they did not; numeric and boolean values count as
/// present.
fn de_opt_debut<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;
    use serde_json::Value;

    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if !v.is_finite() => Ok(None),
            _ => Ok(Some(n.to_string())),
        },
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!("invalid debut value: {other}"))),
    }
}
