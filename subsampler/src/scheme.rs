//! Sampling schemes.
//!
//! A scheme maps a taxon name, or `all` for every domain, to its sampling parameters.
//! ```toml
//! [all]
//! sampling_level = "species"
//! taxa = 3
//!
//! [Proteobacteria]
//! sampling_level = "genus"
//! taxa = 5
//! ```
//! The same document can be written in YAML (`.yaml`, `.yml`) or JSON (`.json`).
//! ```yaml
//! all:
//!   sampling_level: species
//!   taxa: 3
//! ```
//! The order of the keys is kept.
use crate::SubsampleError;
use definitions::{SamplingParameters, SamplingRule};
use std::path::Path;

pub fn read_scheme<P: AsRef<Path>>(path: P) -> Result<Vec<SamplingRule>, SubsampleError> {
    let path = path.as_ref();
    debug!("Opening {}", path.display());
    let document = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    let rules = match extension.as_deref() {
        Some("json") => parse_json(&document)?,
        Some("yaml") | Some("yml") => parse_yaml(&document)?,
        _ => parse_toml(&document)?,
    };
    if rules.is_empty() {
        warn!("SCHEME\t{} has no rules", path.display());
    }
    Ok(rules)
}

pub fn parse_toml(document: &str) -> Result<Vec<SamplingRule>, SubsampleError> {
    let table: toml::Table = toml::from_str(document)?;
    table
        .into_iter()
        .map(|(taxon, param)| -> Result<SamplingRule, SubsampleError> {
            let param: SamplingParameters = param.try_into()?;
            Ok(SamplingRule::with_parameters(&taxon, &param))
        })
        .collect()
}

pub fn parse_json(document: &str) -> Result<Vec<SamplingRule>, SubsampleError> {
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(document)?;
    map.into_iter()
        .map(|(taxon, param)| -> Result<SamplingRule, SubsampleError> {
            let param: SamplingParameters = serde_json::from_value(param)?;
            Ok(SamplingRule::with_parameters(&taxon, &param))
        })
        .collect()
}

pub fn parse_yaml(document: &str) -> Result<Vec<SamplingRule>, SubsampleError> {
    let map: serde_yaml::Mapping = serde_yaml::from_str(document)?;
    map.into_iter()
        .map(|(taxon, param)| -> Result<SamplingRule, SubsampleError> {
            let taxon = match taxon {
                serde_yaml::Value::String(taxon) => taxon,
                other => {
                    let why = format!("{other:?} is not a taxon name");
                    return Err(SubsampleError::Scheme(why));
                }
            };
            let param: SamplingParameters = serde_yaml::from_value(param)?;
            Ok(SamplingRule::with_parameters(&taxon, &param))
        })
        .collect()
}
