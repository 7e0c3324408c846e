//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::domain::entities::{
    Address, Category, Customer, NewOrder, Order, OrderId, OrderItem, Product, ProductId,
    DEFAULT_PAYMENT_METHOD,
};

/// Create a product priced in cents
pub fn test_product(id: &str, cents: i64, stock: i32) -> Product {
    Product {
        id: ProductId::from(id),
        name: format!("Producto {}", id),
        price: Decimal::new(cents, 2),
        category: Category::Cocina,
        image_url: format!("https://img.test/{}.jpg", id),
        description: "Producto de prueba".to_string(),
        stock,
    }
}

/// A customer that passes checkout validation
pub fn test_customer() -> Customer {
    Customer {
        name: "Ana Gómez".to_string(),
        email: "ana@example.com".to_string(),
        phone: Some("099123456".to_string()),
        document_number: Some("12345678".to_string()),
    }
}

pub fn test_address() -> Address {
    Address {
        department: "Montevideo".to_string(),
        city: "Montevideo".to_string(),
        street: "Av. Brasil 1234".to_string(),
    }
}

/// Create a new order with lines of `(product_id, quantity)` at 10.00 each
pub fn test_new_order(id: &str, lines: &[(&str, u32)]) -> NewOrder {
    let items: Vec<OrderItem> = lines
        .iter()
        .map(|(product_id, quantity)| OrderItem {
            product_id: ProductId::from(*product_id),
            name: format!("Producto {}", product_id),
            price: Decimal::new(1000, 2),
            quantity: *quantity,
        })
        .collect();
    let subtotal: Decimal = items.iter().map(OrderItem::line_total).sum();

    NewOrder {
        id: OrderId::from(id),
        items,
        subtotal,
        discount: Decimal::ZERO,
        coupon_code: None,
        coupon_discount: Decimal::ZERO,
        shipping_cost: Decimal::ZERO,
        total: subtotal,
        payment_method: DEFAULT_PAYMENT_METHOD.to_string(),
        customer: test_customer(),
        shipping_address: Some(test_address()),
    }
}

/// A stored order: two vases at 25.00 plus 9.99 shipping
pub fn test_order(id: &str) -> Order {
    let new_order = NewOrder {
        id: OrderId::from(id),
        items: vec![OrderItem {
            product_id: ProductId::from("1"),
            name: "Jarrón Cerámico".to_string(),
            price: Decimal::new(2500, 2),
            quantity: 2,
        }],
        subtotal: Decimal::new(5000, 2),
        discount: Decimal::ZERO,
        coupon_code: None,
        coupon_discount: Decimal::ZERO,
        shipping_cost: Decimal::new(999, 2),
        total: Decimal::new(5999, 2),
        payment_method: DEFAULT_PAYMENT_METHOD.to_string(),
        customer: test_customer(),
        shipping_address: Some(test_address()),
    };
    Order::from_new(new_order, Utc::now())
}
