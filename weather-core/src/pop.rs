//! Locally derived "probability of precipitation" estimate.
//!
//! This is a heuristic over cloud cover and humidity, not provider data.
//! Callers should treat `pop` as an estimate.

use anyhow::{Context, Result, anyhow};
use serde_json::{Number, Value};

/// Name of the derived field attached to current-weather responses.
pub const POP_FIELD: &str = "pop";

/// `min(clouds * humidity / 10000, 1)` for two percentages.
pub fn precipitation_probability(clouds_pct: f64, humidity_pct: f64) -> f64 {
    ((clouds_pct * humidity_pct) / 10000.0).min(1.0)
}

/// Compute `pop` from `clouds.all` and `main.humidity` and insert it into `body`.
pub fn attach_pop(body: &mut Value) -> Result<()> {
    let clouds = numeric_field(body, "/clouds/all")?;
    let humidity = numeric_field(body, "/main/humidity")?;
    let pop = pop_number(precipitation_probability(clouds, humidity))?;

    body.as_object_mut()
        .ok_or_else(|| anyhow!("Weather response is not a JSON object"))?
        .insert(POP_FIELD.to_string(), Value::Number(pop));

    Ok(())
}

fn numeric_field(body: &Value, pointer: &str) -> Result<f64> {
    body.pointer(pointer)
        .with_context(|| format!("Weather response is missing `{pointer}`"))?
        .as_f64()
        .with_context(|| format!("Weather response field `{pointer}` is not numeric"))
}

// Whole values (0, or the clamped 1) are emitted as integers.
fn pop_number(pop: f64) -> Result<Number> {
    if pop.fract() == 0.0 && pop.abs() <= i64::MAX as f64 {
        return Ok(Number::from(pop as i64));
    }
    Number::from_f64(pop).ok_or_else(|| anyhow!("Derived pop {pop} is not a finite number"))
}
