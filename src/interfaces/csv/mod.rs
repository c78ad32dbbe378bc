pub mod customer_reader;
pub mod customer_writer;
