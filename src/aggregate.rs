use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use uuid::Uuid;

use crate::banks::BankDirectory;
use crate::listings::Listing;

/// One vehicle per distinct (year, make, model), in first-seen order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct VehicleRecord {
    pub id: String,
    pub year: i64,
    pub make: String,
    pub model: String,
}

/// One entry per distinct (vehicle, bank) pair. Repeated listings of the
/// same pair only bump `amount`; `price` and `color` stay as first seen.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub id: String,
    pub vehicle_id: String,
    pub bank_id: String,
    pub price: Option<f64>,
    pub amount: u32,
    pub color: Option<String>,
}

/// The denormalized document the client seeds its object stores from.
#[derive(Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct VehicleDatabase {
    pub vehicles: Vec<VehicleRecord>,
    pub prices: Vec<PriceRecord>,
}

pub fn aggregate_listings(listings: Vec<Listing>, banks: &BankDirectory) -> VehicleDatabase {
    let mut db = VehicleDatabase::default();
    let mut vehicle_index: HashMap<String, usize> = HashMap::new();
    let mut price_index: HashMap<String, usize> = HashMap::new();

    for listing in listings {
        let vehicle_key = format!("{}_{}_{}", listing.year, listing.make, listing.model);
        let vehicle_id = match vehicle_index.get(&vehicle_key) {
            Some(&idx) => db.vehicles[idx].id.clone(),
            None => {
                let id = Uuid::new_v4().to_string();
                db.vehicles.push(VehicleRecord {
                    id: id.clone(),
                    year: listing.year,
                    make: listing.make,
                    model: listing.model,
                });
                vehicle_index.insert(vehicle_key, db.vehicles.len() - 1);
                id
            }
        };

        // Listings from banks we do not track still register the vehicle.
        let Some(bank_id) = banks.resolve(&listing.bank) else {
            continue;
        };

        let price_key = format!("{}_{}", vehicle_id, bank_id);
        match price_index.get(&price_key) {
            Some(&idx) => db.prices[idx].amount += 1,
            None => {
                db.prices.push(PriceRecord {
                    id: Uuid::new_v4().to_string(),
                    vehicle_id,
                    bank_id: bank_id.to_string(),
                    price: listing.price.filter(|price| *price > 0.0),
                    amount: 1,
                    color: listing
                        .color
                        .filter(|color| !color.eq_ignore_ascii_case("unknown")),
                });
                price_index.insert(price_key, db.prices.len() - 1);
            }
        }
    }

    db
}

impl VehicleDatabase {
    /// Writes the document as 4-space-indented JSON, replacing any existing
    /// file at `path`.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())
            .with_context(|| format!("failed to create output file {}", path.as_ref().display()))?;
        let mut writer = BufWriter::new(file);

        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
        self.serialize(&mut ser)?;

        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(())
    }
}
