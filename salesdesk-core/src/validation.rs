//! Turns raw request payloads into validated inputs.
//!
//! Error messages are returned to clients verbatim, so they are kept in the
//! language the web client displays.

use salesdesk_model::{
    CustomerChanges, CustomerId, NewCustomer, NewCustomerRequest, NewOrder,
    NewOrderRequest, NewProduct, NewProductRequest, OrderChanges,
    OrderItemRequest, OrderLine, OrderStatus, ProductChanges, ProductId,
    UpdateCustomerRequest, UpdateOrderRequest, UpdateProductRequest,
};
use serde_json::Value;

use crate::{
    database::repositories::orders::NEW_CUSTOMER_NOT_FOUND,
    error::{Result, SalesError},
};

pub const CUSTOMER_FIELDS_REQUIRED: &str = "Nome e email são obrigatórios";
pub const CUSTOMER_NAME_EMPTY: &str = "Nome não pode ser vazio";
pub const CUSTOMER_EMAIL_EMPTY: &str = "Email não pode ser vazio";
pub const PRODUCT_FIELDS_REQUIRED: &str = "Nome e preço são obrigatórios";
pub const PRODUCT_NAME_EMPTY: &str = "Nome não pode ser vazio";
pub const PRICE_REQUIRED: &str = "Preço é obrigatório";
pub const PRICE_EMPTY: &str = "Preço não pode ser vazio";
pub const PRICE_NOT_A_NUMBER: &str = "Preço deve ser um número válido";
pub const PRICE_NEGATIVE: &str = "Preço não pode ser negativo";
pub const ORDER_FIELDS_REQUIRED: &str =
    "ID do cliente e itens do pedido são obrigatórios";
pub const ORDER_LINE_INVALID: &str =
    "Cada item do pedido deve ter produto_id e quantidade (inteiro > 0)";

/// Blank means whitespace only; accepted text is kept as sent.
fn required_text(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// JSON integers only: floats, strings and booleans yield `None`.
fn integer(value: Option<&Value>) -> Option<i64> {
    value.and_then(Value::as_i64)
}

/// Present-but-null or blank fields in a partial update are rejected.
fn changed_text(
    value: Option<Option<String>>,
    empty_message: &str,
) -> Result<Option<String>> {
    match value {
        None => Ok(None),
        Some(inner) => required_text(inner)
            .map(Some)
            .ok_or_else(|| SalesError::validation(empty_message)),
    }
}

pub fn new_customer(request: NewCustomerRequest) -> Result<NewCustomer> {
    match (required_text(request.name), required_text(request.email)) {
        (Some(name), Some(email)) => Ok(NewCustomer { name, email }),
        _ => Err(SalesError::validation(CUSTOMER_FIELDS_REQUIRED)),
    }
}

pub fn customer_changes(
    request: UpdateCustomerRequest,
) -> Result<CustomerChanges> {
    Ok(CustomerChanges {
        name: changed_text(request.name, CUSTOMER_NAME_EMPTY)?,
        email: changed_text(request.email, CUSTOMER_EMAIL_EMPTY)?,
    })
}

/// Reads a price given as a JSON number or a numeric string.
///
/// `missing_message` is reported for `null` or blank strings.
pub fn parse_price(value: Option<&Value>, missing_message: &str) -> Result<f64> {
    let price = match value {
        None | Some(Value::Null) => {
            return Err(SalesError::validation(missing_message));
        }
        Some(Value::String(text)) if text.trim().is_empty() => {
            return Err(SalesError::validation(missing_message));
        }
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match price {
        Some(price) if !price.is_finite() => {
            Err(SalesError::validation(PRICE_NOT_A_NUMBER))
        }
        Some(price) if price < 0.0 => {
            Err(SalesError::validation(PRICE_NEGATIVE))
        }
        Some(price) => Ok(price),
        None => Err(SalesError::validation(PRICE_NOT_A_NUMBER)),
    }
}

pub fn new_product(request: NewProductRequest) -> Result<NewProduct> {
    let Some(name) = required_text(request.name) else {
        return Err(SalesError::validation(PRODUCT_FIELDS_REQUIRED));
    };
    let price = parse_price(request.price.as_ref(), PRICE_REQUIRED)?;
    Ok(NewProduct { name, price })
}

pub fn product_changes(request: UpdateProductRequest) -> Result<ProductChanges> {
    let name = changed_text(request.name, PRODUCT_NAME_EMPTY)?;
    let price = match request.price {
        None => None,
        Some(raw) => Some(parse_price(raw.as_ref(), PRICE_EMPTY)?),
    };
    Ok(ProductChanges { name, price })
}

/// Checks one requested order line. Product existence is checked later,
/// while the line is priced.
pub fn order_line(item: &OrderItemRequest) -> Result<OrderLine> {
    match (
        integer(item.product_id.as_ref()),
        integer(item.quantity.as_ref()),
    ) {
        (Some(product_id), Some(quantity)) if product_id != 0 && quantity > 0 => {
            Ok(OrderLine {
                product_id: ProductId(product_id),
                quantity,
            })
        }
        _ => Err(SalesError::validation(ORDER_LINE_INVALID)),
    }
}

pub fn new_order(request: NewOrderRequest) -> Result<NewOrder> {
    let customer_id =
        integer(request.customer_id.as_ref()).filter(|id| *id != 0);
    let items = request.items.filter(|items| !items.is_empty());

    match (customer_id, items) {
        (Some(customer_id), Some(items)) => Ok(NewOrder {
            customer_id: CustomerId(customer_id),
            status: request.status.map(OrderStatus::from).unwrap_or_default(),
            items,
        }),
        _ => Err(SalesError::validation(ORDER_FIELDS_REQUIRED)),
    }
}

/// `null` status or customer are treated as absent. A customer id that is
/// not an integer can never match a customer.
pub fn order_changes(request: UpdateOrderRequest) -> Result<OrderChanges> {
    let customer_id = match request.customer_id {
        None | Some(Value::Null) => None,
        Some(raw) => Some(
            raw.as_i64()
                .map(CustomerId)
                .ok_or_else(|| SalesError::not_found(NEW_CUSTOMER_NOT_FOUND))?,
        ),
    };

    Ok(OrderChanges {
        status: request.status.map(OrderStatus::from),
        customer_id,
        items: request.items,
    })
}
