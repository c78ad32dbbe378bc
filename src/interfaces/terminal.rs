//! Plain-text renderings: the card grid and the customer detail page.

use crate::application::desk::CustomerDetail;
use crate::domain::customer::Customer;
use crate::domain::view::ViewParams;
use std::io::{self, Write};

pub const EMPTY_MESSAGE: &str = "No customers found matching your criteria.";

const MISSING: &str = "N/A";

const NO_NOTES: &str = "No specific notes for this customer yet.";

/// Writes one card per customer, preceded by the active sort column.
pub fn write_grid<W: Write>(out: &mut W, customers: &[Customer], params: &ViewParams) -> io::Result<()> {
    match params.sort_key {
        Some(key) => writeln!(out, "Sort by: {} {}", key, params.direction.arrow())?,
        None => writeln!(out, "Sort by: (input order)")?,
    }

    if customers.is_empty() {
        return writeln!(out, "{EMPTY_MESSAGE}");
    }

    for customer in customers {
        writeln!(out)?;
        writeln!(out, "  {}", customer.name)?;
        writeln!(out, "  {}", customer.email)?;
        writeln!(out, "  ID: {}", customer.id)?;
        writeln!(out, "  Joined: {}", customer.registered_date)?;
        writeln!(out, "  [{}]", customer.status)?;
    }
    Ok(())
}

fn optional(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(MISSING)
}

pub fn write_detail<W: Write>(out: &mut W, detail: &CustomerDetail) -> io::Result<()> {
    let customer = match detail {
        CustomerDetail::Found(customer) => customer,
        CustomerDetail::NotFound(id) => {
            writeln!(out, "Customer not found")?;
            return writeln!(out, "No customer with ID {id} exists.");
        }
    };

    let contact = customer
        .preferred_contact_method
        .map(|method| method.to_string());

    writeln!(out, "{}", customer.name)?;
    writeln!(out, "ID: {}", customer.id)?;
    writeln!(out, "Status: {}", customer.status)?;
    writeln!(out, "Email: {}", customer.email)?;
    writeln!(out, "Phone: {}", optional(customer.phone.as_deref()))?;
    writeln!(out, "Registered: {}", customer.registered_date)?;
    writeln!(out, "Last login: {}", optional(customer.last_login.as_deref()))?;
    writeln!(out, "Address: {}", optional(customer.address.as_deref()))?;
    writeln!(out, "Occupation: {}", optional(customer.occupation.as_deref()))?;
    writeln!(out, "Preferred contact: {}", optional(contact.as_deref()))?;
    let notes = customer.notes.as_deref().filter(|n| !n.is_empty()).unwrap_or(NO_NOTES);
    writeln!(out, "Notes: {notes}")?;
    Ok(())
}
