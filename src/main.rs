use anyhow::Result;

mod aggregate;
mod banks;
mod listings;

use aggregate::aggregate_listings;
use banks::BankDirectory;
use listings::read_csv;

const INPUT_CSV: &str = "repo-vehicles.csv";
const OUTPUT_JSON: &str = "indexeddb_vehicle_data.json";

fn main() -> Result<()> {
    let listings = read_csv(INPUT_CSV)?;
    let banks = BankDirectory::builtin();
    let database = aggregate_listings(listings, &banks);
    database.write_json(OUTPUT_JSON)?;

    println!(
        "JSON file saved successfully: {} ({} vehicles, {} prices)",
        OUTPUT_JSON,
        database.vehicles.len(),
        database.prices.len()
    );

    Ok(())
}
