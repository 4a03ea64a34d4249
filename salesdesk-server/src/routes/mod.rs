use axum::{
    Router,
    routing::{get, post},
};
use salesdesk_core::api::routes::api;

use crate::{
    handlers::{analysis, customers, orders, products, reports},
    infra::app_state::AppState,
};

/// Create every `/api` route.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(create_customer_routes())
        .merge(create_product_routes())
        .merge(create_order_routes())
        .merge(create_report_routes())
        .route(
            api::analysis::ANALYZE_STRING,
            post(analysis::analyze_string),
        )
}

fn create_customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            api::customers::COLLECTION,
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            api::customers::ITEM,
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
}

fn create_product_routes() -> Router<AppState> {
    Router::new()
        .route(
            api::products::COLLECTION,
            get(products::list_products).post(products::create_product),
        )
        .route(
            api::products::ITEM,
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
}

fn create_order_routes() -> Router<AppState> {
    Router::new()
        .route(
            api::orders::COLLECTION,
            get(orders::list_orders).post(orders::create_order),
        )
        .route(
            api::orders::ITEM,
            get(orders::get_order)
                .put(orders::update_order)
                .delete(orders::delete_order),
        )
}

fn create_report_routes() -> Router<AppState> {
    Router::new()
        .route(api::reports::SALES_SUMMARY, get(reports::sales_summary))
        .route(api::reports::PENDING_ORDERS, get(reports::pending_orders))
        .route(
            api::reports::MOST_ACTIVE_CUSTOMERS,
            get(reports::most_active_customers),
        )
}
