use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Store-assigned customer identity.
pub type CustomerId = i64;

/// Domain customer (business view)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl From<models::customer::Model> for Customer {
    fn from(m: models::customer::Model) -> Self {
        Customer { id: m.id, name: m.name, age: m.age, email: m.email }
    }
}

/// Customer fields handed to the store for insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl NewCustomer {
    pub fn with_id(self, id: CustomerId) -> Customer {
        Customer { id, name: self.name, age: self.age, email: self.email }
    }
}

/// Registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRegistrationRequest {
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl CustomerRegistrationRequest {
    /// Trims name and email so lookups and the unique index see the stored form.
    pub fn normalized(self) -> Self {
        CustomerRegistrationRequest { name: self.name.trim().to_string(), age: self.age, email: self.email.trim().to_string() }
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        models::customer::validate_name(&self.name)?;
        models::customer::validate_age(self.age)?;
        models::customer::validate_email(&self.email)?;
        Ok(())
    }
}

impl From<CustomerRegistrationRequest> for NewCustomer {
    fn from(r: CustomerRegistrationRequest) -> Self {
        NewCustomer { name: r.name, age: r.age, email: r.email }
    }
}

/// Partial update input; `None` leaves the field as stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdateRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CustomerUpdateRequest {
    /// Trims supplied name and email before they are compared with the stored record.
    pub fn normalized(self) -> Self {
        CustomerUpdateRequest {
            name: self.name.map(|n| n.trim().to_string()),
            age: self.age,
            email: self.email.map(|e| e.trim().to_string()),
        }
    }

    /// Checks the supplied values only.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(name) = &self.name { models::customer::validate_name(name)?; }
        if let Some(age) = self.age { models::customer::validate_age(age)?; }
        if let Some(email) = &self.email { models::customer::validate_email(email)?; }
        Ok(())
    }
}
