//! Service layer providing the customer business workflows on top of models.
//! - Separates business logic from data access behind the `CustomerStore` trait.
//! - Owns the outbound mobile-number validation contract.
//! - Provides clear error types and documented interfaces.

pub mod customer;
pub mod errors;
pub mod mobile;
#[cfg(test)]
pub mod test_support;
