//! Records mirrored from the backend JSON. Shapes are not altered on the
//! client; lists are replaced wholesale on fetch and only appended to,
//! replaced in, or filtered after a confirmed write.

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: i64,
    pub fname: String,
    pub lname: String,
    pub phone: String,
    pub email: String,
}

#[derive(Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub quantity_per_unit: f64,
    pub unit: String,
}

/// Raw sale totals feed (`/sales/allSales`), used by the dashboard only.
#[derive(Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub sale_id: i64,
    pub sale_date: String,
    pub total_amount: f64,
}

#[derive(Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    #[serde(default)]
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

/// A sale enriched with the resolved customer name and line items
/// (`/sales/allSalesDesc`).
#[derive(Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub sale_id: i64,
    #[serde(default)]
    pub customer_name: String,
    pub sale_date: String,
    pub total_amount: f64,
    pub payment_mode: String,
    #[serde(default)]
    pub sales_items: Vec<SaleItem>,
    #[serde(default)]
    pub udhaar: Option<SaleUdhaar>,
}

/// Credit status attached to a sale paid on udhaar; absent otherwise.
#[derive(Clone, PartialEq, Deserialize, Serialize)]
pub struct SaleUdhaar {
    pub status: UdhaarStatus,
}

#[derive(Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub inventory_id: i64,
    #[serde(default)]
    pub product: Option<Product>,
    pub stock_quantity: i64,
    pub min_stock_threshold: i64,
}

#[derive(Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub expense_id: i64,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    // The backend writes this as `date` on the expense resource but the
    // merged transaction feed keys off `expenseDate`.
    #[serde(rename = "expenseDate", alias = "date")]
    pub expense_date: String,
}

#[derive(Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub supplier_id: i64,
    pub name: String,
    pub contact: String,
    #[serde(default)]
    pub email: String,
    pub address: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UdhaarStatus {
    Pending,
    Paid,
    Overdue,
}

impl UdhaarStatus {
    pub fn label(self) -> &'static str {
        match self {
            UdhaarStatus::Pending => "PENDING",
            UdhaarStatus::Paid => "PAID",
            UdhaarStatus::Overdue => "OVERDUE",
        }
    }

    /// Anything not settled counts towards the pending-udhaar stat and
    /// still offers the mark-as-paid action.
    pub fn is_open(self) -> bool {
        !matches!(self, UdhaarStatus::Paid)
    }
}

#[derive(Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UdhaarRecord {
    pub udhaar_id: i64,
    #[serde(default)]
    pub customer_name: String,
    pub amount_due: f64,
    #[serde(default)]
    pub due_date: String,
    pub status: UdhaarStatus,
}

/// One row of the dashboard's top-sold-products table, displayed as
/// returned by the backend.
#[derive(Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub product_name: String,
    pub quantity_sold: u32,
}

/// Body of a successful `/admin/login` response; the username becomes
/// the session identity.
#[derive(Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_record_maps_backend_fields() {
        let raw = r#"{
            "saleId": 7,
            "customerName": "Asha",
            "saleDate": "2024-03-02T11:30",
            "totalAmount": 420.5,
            "paymentMode": "UDHAAR",
            "salesItems": [{"productName": "Rice", "quantity": 2, "unitPrice": 210.25}],
            "udhaar": {"status": "PENDING"}
        }"#;
        let record: SaleRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.sale_id, 7);
        assert_eq!(record.customer_name, "Asha");
        assert_eq!(record.sales_items.len(), 1);
        assert_eq!(record.udhaar.as_ref().unwrap().status, UdhaarStatus::Pending);
    }

    #[test]
    fn expense_accepts_either_date_field() {
        let from_feed: Expense =
            serde_json::from_str(r#"{"expenseId":1,"amount":90.0,"category":"RENT","expenseDate":"2024-03-01"}"#)
                .unwrap();
        let from_resource: Expense =
            serde_json::from_str(r#"{"expenseId":2,"amount":15.0,"category":"SPOILAGE","date":"2024-03-02"}"#)
                .unwrap();
        assert_eq!(from_feed.expense_date, "2024-03-01");
        assert_eq!(from_resource.expense_date, "2024-03-02");
        assert!(from_feed.description.is_empty());
    }

    #[test]
    fn udhaar_status_round_trips_screaming_case() {
        let record: UdhaarRecord = serde_json::from_str(
            r#"{"udhaarId":3,"customerName":"Ravi","amountDue":200.0,"dueDate":"2024-04-01","status":"OVERDUE"}"#,
        )
        .unwrap();
        assert_eq!(record.status, UdhaarStatus::Overdue);
        assert!(record.status.is_open());
        assert!(!UdhaarStatus::Paid.is_open());
    }
}
