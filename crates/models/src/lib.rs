pub mod audit;
pub mod customer;
pub mod db;
pub mod errors;
