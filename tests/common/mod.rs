#![allow(dead_code)]

use custdeck::domain::customer::{Customer, CustomerStatus};
use rand::Rng;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const HEADER: [&str; 5] = ["id", "name", "email", "registeredDate", "status"];

/// Writes `rows` under the dataset header into a temporary CSV file.
pub fn write_dataset(rows: &[[&str; 5]]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    {
        let mut wtr = csv::Writer::from_writer(file.as_file_mut());
        wtr.write_record(HEADER)?;
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
    }
    file.flush()?;
    Ok(file)
}

const FIRST_NAMES: [&str; 8] = ["Ann", "bob", "Cid", "dana", "Eve", "Kala", "Mouli", "zed"];
const DOMAINS: [&str; 3] = ["gmail.com", "Example.org", "mail.in"];

/// Random customers with unique ids. Names, emails and dates repeat often
/// enough to produce ties.
pub fn random_customers<R: Rng>(rng: &mut R, count: usize) -> Vec<Customer> {
    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
            let domain = DOMAINS[rng.gen_range(0..DOMAINS.len())];
            let date = format!(
                "20{:02}-{:02}-{:02}",
                rng.gen_range(18..25),
                rng.gen_range(1..=12),
                rng.gen_range(1..=28)
            );
            let status = if rng.gen_bool(0.7) {
                CustomerStatus::Active
            } else {
                CustomerStatus::Inactive
            };
            Customer::new(
                format!("CUST{:03}", count - i),
                format!("{first} {}", rng.gen_range(0..5)),
                format!("{}{}@{domain}", first.to_lowercase(), rng.gen_range(0..100)),
                date,
                status,
            )
        })
        .collect()
}
