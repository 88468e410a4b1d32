use sea_orm::entity::prelude::*;

use crate::errors;

pub const NAME_MAX_LEN: usize = 30;
pub const ADDRESS_MAX_LEN: usize = 300;
pub const MOBILE_NUMBER_MAX_LEN: usize = 30;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub mobile_number: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name is required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!(
            "name must be at most {NAME_MAX_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_address(address: &str) -> Result<(), errors::ModelError> {
    if address.chars().count() > ADDRESS_MAX_LEN {
        return Err(errors::ModelError::Validation(format!(
            "address must be at most {ADDRESS_MAX_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_mobile_number(mobile_number: &str) -> Result<(), errors::ModelError> {
    if mobile_number.chars().count() > MOBILE_NUMBER_MAX_LEN {
        return Err(errors::ModelError::Validation(format!(
            "mobileNumber must be at most {MOBILE_NUMBER_MAX_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_must_be_present_and_bounded() {
        assert!(validate_name("Hussein Zaraket").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(30)).is_ok());
        assert!(validate_name(&"x".repeat(31)).is_err());
    }

    #[test]
    fn address_and_mobile_are_bounded() {
        assert!(validate_address(&"a".repeat(300)).is_ok());
        assert!(validate_address(&"a".repeat(301)).is_err());
        assert!(validate_mobile_number(&"9".repeat(30)).is_ok());
        assert!(validate_mobile_number(&"9".repeat(31)).is_err());
    }
}
