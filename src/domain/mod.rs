//! Domain model: customer records, view parameters, sign-in credentials and
//! the ports implemented by the infrastructure layer.

pub mod credentials;
pub mod customer;
pub mod ports;
pub mod view;
