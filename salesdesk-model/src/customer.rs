use serde::{Deserialize, Serialize};

use crate::ids::CustomerId;
use crate::patch::deserialize_some;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

/// Raw body of `POST /api/clientes`. Fields are optional so validation can
/// report a domain error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCustomerRequest {
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Raw body of `PUT /api/clientes/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCustomerRequest {
    #[serde(rename = "nome", default, deserialize_with = "deserialize_some")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub email: Option<Option<String>>,
}

/// Validated customer ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

/// Validated partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CustomerChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}
