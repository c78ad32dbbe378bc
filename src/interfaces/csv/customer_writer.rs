use crate::domain::customer::Customer;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One row of the table view. Display-only fields are left out.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TableRow<'a> {
    name: &'a str,
    email: &'a str,
    id: &'a str,
    registered_date: &'a str,
    status: String,
}

/// Writes the table (list) view of customers as CSV.
pub struct CustomerWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CustomerWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes the header and one row per customer, in the given order.
    /// Nothing is written for an empty input.
    pub fn write_customers<'a>(
        &mut self,
        customers: impl IntoIterator<Item = &'a Customer>,
    ) -> Result<()> {
        for customer in customers {
            self.writer.serialize(TableRow {
                name: &customer.name,
                email: &customer.email,
                id: customer.id.as_str(),
                registered_date: &customer.registered_date,
                status: customer.status.to_string(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::CustomerStatus;

    fn render(customers: &[Customer]) -> String {
        let mut buffer = Vec::new();
        CustomerWriter::new(&mut buffer)
            .write_customers(customers)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_writes_header_and_rows_in_order() {
        let customers = vec![
            Customer::new("C2", "Bob, Jr.", "bob@example.com", "2023-01-02", CustomerStatus::Inactive),
            Customer::new("C1", "Ann", "ann@example.com", "2023-01-01", CustomerStatus::Active),
        ];
        let output = render(&customers);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "name,email,id,registeredDate,status");
        assert_eq!(lines[1], "\"Bob, Jr.\",bob@example.com,C2,2023-01-02,Inactive");
        assert_eq!(lines[2], "Ann,ann@example.com,C1,2023-01-01,Active");
    }

    #[test]
    fn test_empty_view_writes_nothing() {
        assert_eq!(render(&[]), "");
    }
}
