use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs::File, path::Path};

/// One row of the bank price-listing export.
///
/// `Make`, `Model` and `Bank` are carried verbatim; the numeric columns are
/// trimmed before parsing. An empty `Price` or `Color` cell deserializes to
/// `None`, anything non-numeric in `Year` or `Price` fails the whole read.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct Listing {
    #[serde(deserialize_with = "trim_and_parse_year")]
    pub year: i64,
    pub make: String,
    pub model: String,
    pub bank: String,
    #[serde(deserialize_with = "trim_and_parse_price")]
    pub price: Option<f64>,
    pub color: Option<String>,
}

pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Listing>> {
    let file = File::open(path.as_ref())
        .with_context(|| format!("failed to open listings file {}", path.as_ref().display()))?;
    // The CSV reader is buffered automatically, so there is no need to wrap
    // the file in an io::BufReader.
    let mut rdr = csv::Reader::from_reader(file);

    let listings = rdr
        .deserialize::<Listing>()
        .collect::<Result<Vec<_>, csv::Error>>()?;

    Ok(listings)
}

fn trim_and_parse_year<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = String::deserialize(deserializer)?;
    s.trim().parse::<i64>().map_err(serde::de::Error::custom)
}

fn trim_and_parse_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = String::deserialize(deserializer)?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        let value: f64 = trimmed.parse().map_err(serde::de::Error::custom)?;
        Ok(Some(value))
    }
}
