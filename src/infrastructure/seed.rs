//! Built-in customer dataset used when no CSV file is given.

use crate::domain::customer::{ContactMethod, Customer, CustomerStatus};

const VIZAG_ADDRESS: &str =
    "50-94-8,Ratna Nivas,Near sai baba temple,Santhipuram,Gurudwar,visakhapatnam-530016";

#[allow(clippy::too_many_arguments)]
fn seeded(
    id: &str,
    name: &str,
    email: &str,
    registered_date: &str,
    phone: &str,
    address: &str,
    occupation: &str,
    contact: ContactMethod,
) -> Customer {
    Customer {
        avatar: Some(format!(
            "https://api.dicebear.com/7.x/initials/svg?seed={}",
            name.replace(' ', "+")
        )),
        phone: Some(phone.to_string()),
        address: Some(address.to_string()),
        occupation: Some(occupation.to_string()),
        preferred_contact_method: Some(contact),
        ..Customer::new(id, name, email, registered_date, CustomerStatus::Active)
    }
}

pub fn initial_customers() -> Vec<Customer> {
    vec![
        seeded(
            "CUST001",
            "Kommoju Kalavathi",
            "kalavathi0001@gmail.com",
            "2022-08-06",
            "+91 9959786382",
            "22-74-1/12, skml temple road, S.K.M.l Narayana Nikethan, visakhaptnam-530001",
            "Homemaker",
            ContactMethod::Phone,
        ),
        seeded(
            "CUST002",
            "Kommoju Chandra Mouli",
            "moulichandra934@gmail.com",
            "2022-03-18",
            "+91 7013956046",
            VIZAG_ADDRESS,
            "Wellness coach",
            ContactMethod::Phone,
        ),
        seeded(
            "CUST003",
            "Kommoju Lalitha Kumari",
            "lalithakumarik120@gmail.com",
            "2022-03-18",
            "+91 6300271729",
            VIZAG_ADDRESS,
            "Homemajer",
            ContactMethod::Phone,
        ),
        seeded(
            "CUST004",
            "Kommoju Midhilesh",
            "dreamdasher2010@gmail.com",
            "2022-03-18",
            "+91 7207897896",
            VIZAG_ADDRESS,
            "Student",
            ContactMethod::Email,
        ),
        seeded(
            "CUST005",
            "Dhakoju Parvathi",
            "parvathidhakoju@gmail.com",
            "2022-04-14",
            "+91 9247103873",
            "Gajuwaka",
            "Homemaker",
            ContactMethod::Phone,
        ),
        seeded(
            "CUST006",
            "Kommoju Gagan Deep",
            "midhilesh0102@gmail.com",
            "2022-03-18",
            "+91 9247772602",
            VIZAG_ADDRESS,
            "student",
            ContactMethod::Phone,
        ),
    ]
}
