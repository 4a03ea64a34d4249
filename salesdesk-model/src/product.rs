use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::ProductId;
use crate::patch::deserialize_some;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco")]
    pub price: f64,
}

/// Raw body of `POST /api/produtos`.
///
/// `preco` stays an untyped JSON value: clients send either a number or a
/// numeric string taken straight from a form input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProductRequest {
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "preco", default)]
    pub price: Option<Value>,
}

/// Raw body of `PUT /api/produtos/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(rename = "nome", default, deserialize_with = "deserialize_some")]
    pub name: Option<Option<String>>,
    #[serde(rename = "preco", default, deserialize_with = "deserialize_some")]
    pub price: Option<Option<Value>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}
