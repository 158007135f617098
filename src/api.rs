use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::RequestCredentials;

use crate::models::{
    Customer, Expense, InventoryItem, LoginResponse, Product, Sale, SaleRecord, Supplier,
    TopProduct, UdhaarRecord,
};

pub const API_BASE_URL: &str = "http://localhost:8080/api";

/// Failures a backend call can produce. Read paths log these and keep the
/// last good snapshot; write paths surface them as inline notices.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let resp = builder
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp)
}

async fn send_json(builder: RequestBuilder, payload: &serde_json::Value) -> Result<Response, ApiError> {
    let request = builder
        .json(payload)
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    let resp = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp)
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

async fn get_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    let resp = send(with_credentials(Request::get(&format!("{}{}", API_BASE_URL, path)))).await?;
    decode(resp).await
}

// ---- entity list reads -------------------------------------------------

pub async fn fetch_customers() -> Result<Vec<Customer>, ApiError> {
    get_list("/customers/allCustomers").await
}

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    get_list("/products/allProducts").await
}

pub async fn fetch_sales() -> Result<Vec<Sale>, ApiError> {
    get_list("/sales/allSales").await
}

pub async fn fetch_sales_desc() -> Result<Vec<SaleRecord>, ApiError> {
    get_list("/sales/allSalesDesc").await
}

pub async fn fetch_inventory() -> Result<Vec<InventoryItem>, ApiError> {
    get_list("/inventory/allInventory").await
}

pub async fn fetch_expenses() -> Result<Vec<Expense>, ApiError> {
    get_list("/expenses/allExpenses").await
}

pub async fn fetch_suppliers() -> Result<Vec<Supplier>, ApiError> {
    get_list("/supplier/allSuppliers").await
}

pub async fn fetch_udhaar() -> Result<Vec<UdhaarRecord>, ApiError> {
    get_list("/udhaar/allUdhaar").await
}

/// Pre-filtered unpaid credit records for the dashboard stat.
pub async fn fetch_unpaid_udhaar() -> Result<Vec<UdhaarRecord>, ApiError> {
    get_list("/udhaar/unpaid").await
}

// ---- dashboard top products -------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TopPeriod {
    Week,
    Month,
    All,
}

impl TopPeriod {
    pub const ALL: [TopPeriod; 3] = [TopPeriod::Week, TopPeriod::Month, TopPeriod::All];

    pub fn as_str(self) -> &'static str {
        match self {
            TopPeriod::Week => "week",
            TopPeriod::Month => "month",
            TopPeriod::All => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TopPeriod::Week => "Week",
            TopPeriod::Month => "Month",
            TopPeriod::All => "All",
        }
    }
}

pub async fn fetch_top_products(period: TopPeriod) -> Result<Vec<TopProduct>, ApiError> {
    get_list(&format!("/sales/top-products/{}", period.as_str())).await
}

// ---- admin -------------------------------------------------------------

pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let payload = serde_json::json!({ "username": username, "password": password });
    let resp = send_json(
        with_credentials(Request::post(&format!("{}/admin/login", API_BASE_URL))),
        &payload,
    )
    .await?;
    decode(resp).await
}

/// Best-effort logout notification; the caller ignores the outcome.
pub async fn notify_logout() -> Result<(), ApiError> {
    send(with_credentials(Request::post(&format!("{}/admin/logout", API_BASE_URL)))).await?;
    Ok(())
}

pub async fn create_admin(username: &str, password: &str, email: &str) -> Result<(), ApiError> {
    let payload = serde_json::json!({
        "username": username,
        "password": password,
        "email": email,
    });
    send_json(
        with_credentials(Request::post(&format!("{}/admin/createAdmin", API_BASE_URL))),
        &payload,
    )
    .await?;
    Ok(())
}

pub async fn update_password(
    username: &str,
    old_password: &str,
    new_password: &str,
) -> Result<(), ApiError> {
    let payload = serde_json::json!({
        "username": username,
        "oldPassword": old_password,
        "newPassword": new_password,
    });
    send_json(
        with_credentials(Request::put(&format!("{}/admin/update-password", API_BASE_URL))),
        &payload,
    )
    .await?;
    Ok(())
}

// ---- entity writes -----------------------------------------------------

pub async fn add_customer(payload: &serde_json::Value) -> Result<Customer, ApiError> {
    let resp = send_json(
        with_credentials(Request::post(&format!("{}/customers/addCustomer", API_BASE_URL))),
        payload,
    )
    .await?;
    decode(resp).await
}

pub async fn add_supplier(payload: &serde_json::Value) -> Result<Supplier, ApiError> {
    let resp = send_json(
        with_credentials(Request::post(&format!("{}/supplier/addSupplier", API_BASE_URL))),
        payload,
    )
    .await?;
    decode(resp).await
}

pub async fn add_expense(payload: &serde_json::Value) -> Result<Expense, ApiError> {
    let resp = send_json(
        with_credentials(Request::post(&format!("{}/expenses/addExpense", API_BASE_URL))),
        payload,
    )
    .await?;
    decode(resp).await
}

pub async fn delete_expense(expense_id: i64) -> Result<(), ApiError> {
    send(with_credentials(Request::delete(&format!(
        "{}/expenses/deleteExpense/{}",
        API_BASE_URL, expense_id
    ))))
    .await?;
    Ok(())
}

pub async fn add_product(payload: &serde_json::Value) -> Result<Product, ApiError> {
    let resp = send_json(
        with_credentials(Request::post(&format!("{}/products/addProduct", API_BASE_URL))),
        payload,
    )
    .await?;
    decode(resp).await
}

pub async fn update_product(product_id: i64, payload: &serde_json::Value) -> Result<Product, ApiError> {
    let resp = send_json(
        with_credentials(Request::put(&format!(
            "{}/products/updateProduct/{}",
            API_BASE_URL, product_id
        ))),
        payload,
    )
    .await?;
    decode(resp).await
}

pub async fn delete_product(product_id: i64) -> Result<(), ApiError> {
    send(with_credentials(Request::delete(&format!(
        "{}/products/deleteProduct/{}",
        API_BASE_URL, product_id
    ))))
    .await?;
    Ok(())
}

/// Create-or-update by product; this endpoint takes query parameters, not
/// a body, and responds with the stored inventory row.
pub async fn upsert_inventory(
    product_id: i64,
    stock_quantity: &str,
    min_stock_threshold: &str,
) -> Result<InventoryItem, ApiError> {
    let builder = Request::post(&format!("{}/inventory/{}", API_BASE_URL, product_id)).query([
        ("stockQuantity", stock_quantity),
        ("minStockThreshold", min_stock_threshold),
    ]);
    let resp = send(with_credentials(builder)).await?;
    decode(resp).await
}

pub async fn delete_inventory(inventory_id: i64) -> Result<(), ApiError> {
    send(with_credentials(Request::delete(&format!(
        "{}/inventory/{}",
        API_BASE_URL, inventory_id
    ))))
    .await?;
    Ok(())
}

pub async fn record_sale(payload: &serde_json::Value) -> Result<SaleRecord, ApiError> {
    let resp = send_json(
        with_credentials(Request::post(&format!("{}/sales/recordSale", API_BASE_URL))),
        payload,
    )
    .await?;
    decode(resp).await
}

pub async fn mark_udhaar_paid(udhaar_id: i64) -> Result<(), ApiError> {
    send(with_credentials(Request::put(&format!(
        "{}/udhaar/{}/pay",
        API_BASE_URL, udhaar_id
    ))))
    .await?;
    Ok(())
}

// ---- PDF reports -------------------------------------------------------

async fn download_report(path: &str, params: Vec<(&'static str, String)>) -> Result<Vec<u8>, ApiError> {
    let builder = Request::get(&format!("{}{}", API_BASE_URL, path))
        .query(params.iter().map(|(k, v)| (*k, v.as_str())))
        .header("Accept", "application/pdf");
    let resp = send(with_credentials(builder)).await?;
    let is_pdf = resp
        .headers()
        .get("Content-Type")
        .map(|ct| ct.starts_with("application/pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(ApiError::Decode("response is not a PDF".to_string()));
    }
    resp.binary()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Sales report; empty filter fields are omitted from the query.
pub async fn download_sales_report(
    from: &str,
    to: &str,
    customer_id: &str,
    payment_mode: &str,
) -> Result<Vec<u8>, ApiError> {
    let mut params = Vec::new();
    if !from.is_empty() {
        params.push(("from", from.to_string()));
    }
    if !to.is_empty() {
        params.push(("to", to.to_string()));
    }
    if !customer_id.is_empty() {
        params.push(("customerId", customer_id.to_string()));
    }
    if !payment_mode.is_empty() {
        params.push(("paymentMode", payment_mode.to_string()));
    }
    download_report("/reports/sales", params).await
}

pub async fn download_expense_report(from: &str, to: &str, category: &str) -> Result<Vec<u8>, ApiError> {
    let mut params = Vec::new();
    if !from.is_empty() {
        params.push(("from", from.to_string()));
    }
    if !to.is_empty() {
        params.push(("to", to.to_string()));
    }
    if !category.is_empty() {
        params.push(("category", category.to_string()));
    }
    download_report("/reports/expenses", params).await
}
