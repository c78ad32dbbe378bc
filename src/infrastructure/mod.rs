pub mod in_memory;
pub mod seed;
pub mod simulated_auth;
