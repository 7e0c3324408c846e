//! Order domain entity
//!
//! A placed order with its priced lines, customer details and lifecycle status.

use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::CartItem;
use super::product::ProductId;

/// Default payment method when the customer does not pick one
pub const DEFAULT_PAYMENT_METHOD: &str = "Transferencia Bancaria";

/// Unique identifier for an order, e.g. `ORD-482913`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    /// Generate a fresh `ORD-` id with six random digits
    pub fn generate() -> Self {
        let n: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
        Self(format!("ORD-{}", n))
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Comma-separated list of accepted values, for error messages
    pub fn allowed_values() -> String {
        OrderStatus::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "paid" => Ok(OrderStatus::Paid),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(format!("Unknown order status: {}", s)),
        }
    }
}

/// Delivery address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub street: String,
}

/// A priced order line, frozen at the time of purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl OrderItem {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

impl From<CartItem> for OrderItem {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

/// Customer contact details attached to an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub document_number: Option<String>,
}

/// A placed order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub date: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    pub subtotal: Decimal,
    /// Volume discount
    pub discount: Decimal,
    pub coupon_code: Option<String>,
    pub coupon_discount: Decimal,
    pub shipping_cost: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
    pub payment_method: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub document_number: Option<String>,
    pub shipping_address: Option<Address>,
}

impl Order {
    /// Build an order in `pending` status from a fully priced submission
    pub fn from_new(new_order: NewOrder, date: DateTime<Utc>) -> Self {
        Self {
            id: new_order.id,
            date,
            items: new_order.items,
            subtotal: new_order.subtotal,
            discount: new_order.discount,
            coupon_code: new_order.coupon_code,
            coupon_discount: new_order.coupon_discount,
            shipping_cost: new_order.shipping_cost,
            total: new_order.total,
            status: OrderStatus::Pending,
            payment_method: new_order.payment_method,
            customer_name: new_order.customer.name,
            customer_email: new_order.customer.email,
            customer_phone: new_order.customer.phone,
            document_number: new_order.customer.document_number,
            shipping_address: new_order.shipping_address,
        }
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn savings(&self) -> Decimal {
        self.discount + self.coupon_discount
    }
}

/// Data needed to persist a new order. Prices and totals are already computed.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub id: OrderId,
    pub items: Vec<OrderItem>,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub coupon_code: Option<String>,
    pub coupon_discount: Decimal,
    pub shipping_cost: Decimal,
    pub total: Decimal,
    pub payment_method: String,
    pub customer: Customer,
    pub shipping_address: Option<Address>,
}
