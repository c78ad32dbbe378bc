use crate::domain::customer::Customer;
use crate::error::{CrmError, Result};
use std::io::Read;

/// Reads customers from a CSV source.
///
/// Headers follow the dataset field names (`id`, `name`, `email`,
/// `registeredDate`, `status`, then any optional display columns). Each row
/// is validated after deserialization, so a bad date surfaces as an error
/// for that row only.
pub struct CustomerReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CustomerReader<R> {
    /// Creates a new `CustomerReader` from any `Read` source (e.g. File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads, deserializes and validates
    /// customers.
    pub fn customers(self) -> impl Iterator<Item = Result<Customer>> {
        self.reader.into_deserialize().map(|result| -> Result<Customer> {
            let customer: Customer = result.map_err(CrmError::from)?;
            customer.validate()?;
            Ok(customer)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::{ContactMethod, CustomerStatus};

    #[test]
    fn test_reader_valid_stream() {
        let data = "id, name, email, registeredDate, status, phone, preferredContactMethod\n\
                    CUST001, Kommoju Kalavathi, kalavathi0001@gmail.com, 2022-08-06, Active, +91 9959786382, Phone\n\
                    CUST002, Kommoju Chandra Mouli, moulichandra934@gmail.com, 2022-03-18, Inactive, ,";
        let reader = CustomerReader::new(data.as_bytes());
        let results: Vec<Result<Customer>> = reader.customers().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.id.as_str(), "CUST001");
        assert_eq!(first.phone.as_deref(), Some("+91 9959786382"));
        assert_eq!(first.preferred_contact_method, Some(ContactMethod::Phone));

        let second = results[1].as_ref().unwrap();
        assert_eq!(second.status, CustomerStatus::Inactive);
        assert_eq!(second.phone, None);
        assert_eq!(second.preferred_contact_method, None);
    }

    #[test]
    fn test_reader_optional_columns_may_be_absent() {
        let data = "id,name,email,registeredDate,status\nC1,Ann,ann@example.com,2023-01-02,Active";
        let results: Vec<Result<Customer>> = CustomerReader::new(data.as_bytes()).customers().collect();
        let customer = results[0].as_ref().unwrap();
        assert!(customer.avatar.is_none());
        assert!(customer.notes.is_none());
    }

    #[test]
    fn test_reader_malformed_lines() {
        let data = "id,name,email,registeredDate,status\n\
                    C1,Ann,ann@example.com,2023-01-02,Suspended\n\
                    C2,Bob,bob@example.com,2023-13-40,Active\n\
                    C3,Cid,cid@example.com,2023-01-03,Active";
        let results: Vec<Result<Customer>> = CustomerReader::new(data.as_bytes()).customers().collect();

        assert!(matches!(results[0], Err(CrmError::CsvError(_))));
        assert!(matches!(results[1], Err(CrmError::ValidationError(_))));
        assert!(results[2].is_ok());
    }
}
