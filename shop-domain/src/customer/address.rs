use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, DomainResult};
use crate::value_object::{ValueObject, require_text};

/// 地址值对象
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> DomainResult<Self> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl ValueObject for Address {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        require_text("street", &self.street)?;
        if self.number == 0 {
            return Err(DomainError::invalid_value("number must be greater than zero"));
        }
        require_text("zip", &self.zip)?;
        require_text("city", &self.city)?;
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}
