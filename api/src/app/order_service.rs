//! Order service
//!
//! Checkout and order administration. Prices and totals are always computed
//! here from the catalog; whatever totals a client sends are ignored.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde::Deserialize;

use crate::app::coupons;
use crate::app::notifications;
use crate::app::pricing::{max_amount, CheckoutQuote, PricingRules};
use crate::domain::entities::{
    Address, Cart, CartItem, Coupon, Customer, NewOrder, Order, OrderId, OrderItem, OrderStatus,
    ProductId, DEFAULT_PAYMENT_METHOD,
};
use crate::domain::ports::{Notifier, OrderRepository, ProductRepository};
use crate::error::{AppError, DomainError};

/// Longest client-supplied order id we accept
const MAX_ORDER_ID_LEN: usize = 64;

// Column widths of the orders table, in characters
const MAX_NAME_LEN: usize = 255;
const MAX_EMAIL_LEN: usize = 255;
const MAX_PHONE_LEN: usize = 32;
const MAX_DOCUMENT_LEN: usize = 32;
const MAX_PAYMENT_METHOD_LEN: usize = 64;

/// One requested line: a product id and how many
#[derive(Debug, Clone, Deserialize)]
pub struct LineRequest {
    #[serde(alias = "productId")]
    pub id: ProductId,
    pub quantity: i64,
}

/// Checkout payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceOrderRequest {
    /// Optional client-generated id; one is generated when absent
    pub id: Option<String>,
    pub items: Vec<LineRequest>,
    pub coupon_code: Option<String>,
    pub payment_method: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub document_number: Option<String>,
    pub shipping_address: Option<Address>,
}

/// A cart priced against the catalog, plus the quote for it
struct PricedCart {
    items: Vec<OrderItem>,
    coupon: Option<Coupon>,
    quote: CheckoutQuote,
}

/// Service for placing and managing orders
pub struct OrderService {
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderRepository>,
    notifier: Arc<dyn Notifier>,
    rules: PricingRules,
}

impl OrderService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            products,
            orders,
            notifier,
            rules: PricingRules::default(),
        }
    }

    /// Price a set of lines without placing an order
    pub async fn quote(
        &self,
        lines: &[LineRequest],
        coupon_code: Option<&str>,
    ) -> Result<CheckoutQuote, AppError> {
        Ok(self.price(lines, coupon_code).await?.quote)
    }

    /// Validate, price and persist an order, then notify the customer.
    ///
    /// Stock is reserved atomically by the repository; a short line fails the
    /// whole order with a conflict.
    pub async fn place_order(&self, request: PlaceOrderRequest) -> Result<Order, AppError> {
        let customer = validate_customer(&request)?;
        let priced = self
            .price(&request.items, request.coupon_code.as_deref())
            .await?;

        let id = match request.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => {
                if id.len() > MAX_ORDER_ID_LEN {
                    return Err(DomainError::Validation(format!(
                        "Order id must be at most {} characters",
                        MAX_ORDER_ID_LEN
                    ))
                    .into());
                }
                OrderId::from(id)
            }
            _ => OrderId::generate(),
        };

        let payment_method = request
            .payment_method
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_PAYMENT_METHOD)
            .to_string();
        if payment_method.chars().count() > MAX_PAYMENT_METHOD_LEN {
            return Err(DomainError::Validation(format!(
                "Payment method must be at most {} characters",
                MAX_PAYMENT_METHOD_LEN
            ))
            .into());
        }

        let quote = priced.quote;
        let new_order = NewOrder {
            id,
            items: priced.items,
            subtotal: quote.subtotal,
            discount: quote.volume_discount,
            coupon_code: priced.coupon.map(|c| c.code.to_string()),
            coupon_discount: quote.coupon_discount,
            shipping_cost: quote.shipping,
            total: quote.total,
            payment_method,
            customer,
            shipping_address: request.shipping_address,
        };

        let order = self.orders.create(&new_order).await?;

        tracing::info!(
            order_id = %order.id,
            total = %order.total,
            items = order.item_count(),
            coupon = order.coupon_code.as_deref().unwrap_or("-"),
            "Order placed"
        );

        notifications::dispatch(self.notifier.clone(), notifications::order_placed(&order));

        Ok(order)
    }

    /// All orders, newest first
    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        Ok(self.orders.find_all().await?)
    }

    pub async fn get_order(&self, id: &OrderId) -> Result<Order, AppError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))
    }

    /// Move an order to `status`.
    ///
    /// The customer hears about it only when the status actually changed and
    /// the new status has a notice.
    pub async fn update_status(&self, id: &OrderId, status: &str) -> Result<Order, AppError> {
        let status: OrderStatus = status.parse().map_err(|_| {
            DomainError::Validation(format!(
                "Invalid status. Allowed values: {}",
                OrderStatus::allowed_values()
            ))
        })?;

        let update = self
            .orders
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))?;

        tracing::info!(
            order_id = %id,
            previous = %update.previous,
            status = %status,
            "Order status updated"
        );

        if update.changed() {
            if let Some(notification) = notifications::status_changed(&update.order, status) {
                notifications::dispatch(self.notifier.clone(), notification);
            }
        }

        Ok(update.order)
    }

    /// Merge lines by product, price them from the catalog and quote the total
    async fn price(
        &self,
        lines: &[LineRequest],
        coupon_code: Option<&str>,
    ) -> Result<PricedCart, AppError> {
        let mut cart = Cart::new();
        for line in lines {
            let quantity = u32::try_from(line.quantity)
                .ok()
                .filter(|q| *q >= 1)
                .ok_or_else(|| {
                    DomainError::Validation(format!(
                        "Quantity for product {} must be at least 1",
                        line.id
                    ))
                })?;

            let product = self.products.find_by_id(&line.id).await?.ok_or_else(|| {
                DomainError::Validation(format!("Product {} does not exist", line.id))
            })?;

            cart.add(CartItem {
                product_id: product.id,
                name: product.name,
                price: product.price,
                quantity,
            });
        }

        if cart.is_empty() {
            return Err(invalid("Order must contain at least one item"));
        }
        if cart.subtotal() > max_amount() {
            return Err(DomainError::Validation(format!(
                "Order subtotal must not exceed {}",
                max_amount()
            ))
            .into());
        }

        let coupon = match coupon_code.map(str::trim).filter(|c| !c.is_empty()) {
            Some(code) => {
                Some(coupons::lookup(code).map_err(|_| invalid(coupons::INVALID_COUPON_MESSAGE))?)
            }
            None => None,
        };

        let quote = self.rules.quote(cart.subtotal(), coupon.as_ref());
        let items = cart.into_items().into_iter().map(OrderItem::from).collect();

        Ok(PricedCart {
            items,
            coupon,
            quote,
        })
    }
}

fn email_pattern() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

fn invalid(message: &str) -> AppError {
    DomainError::Validation(message.to_string()).into()
}

fn too_long(field: &str, max: usize) -> AppError {
    DomainError::Validation(format!(
        "{} no debe superar los {} caracteres.",
        field, max
    ))
    .into()
}

/// Check the contact fields and build the customer record
fn validate_customer(request: &PlaceOrderRequest) -> Result<Customer, AppError> {
    let name = request.customer_name.trim();
    if name.is_empty() {
        return Err(invalid("El nombre es obligatorio."));
    }
    if name.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalid("El nombre no debe contener números."));
    }
    if name.chars().count() < 3 {
        return Err(invalid("El nombre debe tener al menos 3 caracteres."));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(too_long("El nombre", MAX_NAME_LEN));
    }

    let email = request.customer_email.trim();
    if email.is_empty() {
        return Err(invalid("El correo es obligatorio."));
    }
    if !email_pattern().is_some_and(|re| re.is_match(email)) {
        return Err(invalid("Introduce un correo electrónico válido."));
    }
    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(too_long("El correo", MAX_EMAIL_LEN));
    }

    let phone = non_blank(request.customer_phone.as_deref());
    if let Some(phone) = phone {
        if phone.chars().filter(char::is_ascii_digit).count() < 9 {
            return Err(invalid("El número debe tener al menos 9 dígitos."));
        }
        if phone.chars().count() > MAX_PHONE_LEN {
            return Err(too_long("El número", MAX_PHONE_LEN));
        }
    }

    let document_number = non_blank(request.document_number.as_deref());
    if let Some(document) = document_number {
        if document.chars().count() < 5 {
            return Err(invalid("El documento debe tener al menos 5 caracteres."));
        }
        if document.chars().count() > MAX_DOCUMENT_LEN {
            return Err(too_long("El documento", MAX_DOCUMENT_LEN));
        }
    }

    Ok(Customer {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.map(str::to_string),
        document_number: document_number.map(str::to_string),
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;
    use crate::domain::ports::NotificationKind;
    use crate::test_utils::{
        test_product, FailingNotifier, FailingOrderRepository, RecordingNotifier,
    };
    use rust_decimal::Decimal;

    struct Fixture {
        store: MemoryStore,
        notifier: RecordingNotifier,
        service: OrderService,
    }

    async fn setup() -> Fixture {
        let store = MemoryStore::new();
        store
            .products()
            .upsert_catalog(&[
                test_product("1", 2500, 8),
                test_product("2", 3250, 2),
                test_product("3", 4800, 0),
            ])
            .await
            .unwrap();
        let notifier = RecordingNotifier::new();
        let service = OrderService::new(
            Arc::new(store.products()),
            Arc::new(store.orders()),
            Arc::new(notifier.clone()),
        );
        Fixture {
            store,
            notifier,
            service,
        }
    }

    fn line(id: &str, quantity: i64) -> LineRequest {
        LineRequest {
            id: ProductId::from(id),
            quantity,
        }
    }

    fn request(items: Vec<LineRequest>) -> PlaceOrderRequest {
        PlaceOrderRequest {
            items,
            customer_name: "Ana Gómez".to_string(),
            customer_email: "ana@example.com".to_string(),
            customer_phone: Some("099 123 456".to_string()),
            document_number: Some("12345678".to_string()),
            ..Default::default()
        }
    }

    async fn stock_of(store: &MemoryStore, id: &str) -> i32 {
        store
            .products()
            .find_by_id(&id.into())
            .await
            .unwrap()
            .unwrap()
            .stock
    }

    fn validation_message(err: AppError) -> String {
        match err {
            AppError::Domain(DomainError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn place_order_prices_from_catalog() {
        let f = setup().await;

        let order = f
            .service
            .place_order(request(vec![line("1", 2), line("2", 1)]))
            .await
            .unwrap();

        assert!(order.id.0.starts_with("ORD-"));
        assert_eq!(order.subtotal, Decimal::new(8250, 2));
        assert_eq!(order.shipping_cost, Decimal::ZERO);
        assert_eq!(order.total, Decimal::new(8250, 2));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_method, DEFAULT_PAYMENT_METHOD);
        assert_eq!(stock_of(&f.store, "1").await, 6);
        assert_eq!(stock_of(&f.store, "2").await, 1);
    }

    #[tokio::test]
    async fn place_order_merges_duplicate_lines() {
        let f = setup().await;

        let order = f
            .service
            .place_order(request(vec![line("1", 1), line("1", 2)]))
            .await
            .unwrap();

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 3);
        assert_eq!(stock_of(&f.store, "1").await, 5);
    }

    #[tokio::test]
    async fn place_order_applies_volume_and_coupon() {
        let f = setup().await;
        let mut req = request(vec![line("1", 4)]);
        req.coupon_code = Some("marquito10".to_string());

        let order = f.service.place_order(req).await.unwrap();

        // 100.00 - 10.00 volume, then 10% of 90.00
        assert_eq!(order.discount, Decimal::new(1000, 2));
        assert_eq!(order.coupon_code.as_deref(), Some("MARQUITO10"));
        assert_eq!(order.coupon_discount, Decimal::new(900, 2));
        assert_eq!(order.total, Decimal::new(8100, 2));
    }

    #[tokio::test]
    async fn place_order_keeps_client_id() {
        let f = setup().await;
        let mut req = request(vec![line("1", 1)]);
        req.id = Some("ORD-424242".to_string());

        let order = f.service.place_order(req).await.unwrap();
        assert_eq!(order.id, OrderId::from("ORD-424242"));
    }

    #[tokio::test]
    async fn place_order_sends_confirmation() {
        let f = setup().await;

        let order = f
            .service
            .place_order(request(vec![line("1", 1)]))
            .await
            .unwrap();

        let sent = f.notifier.wait_for(1).await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].kind, NotificationKind::OrderPlaced);
        assert_eq!(sent[0].order_id, order.id);
        assert_eq!(sent[0].to, "ana@example.com");
    }

    #[tokio::test]
    async fn place_order_rejects_empty_items() {
        let f = setup().await;
        let err = f.service.place_order(request(vec![])).await.unwrap_err();
        assert!(validation_message(err).contains("at least one item"));
    }

    #[tokio::test]
    async fn place_order_rejects_zero_quantity() {
        let f = setup().await;
        let err = f
            .service
            .place_order(request(vec![line("1", 0)]))
            .await
            .unwrap_err();
        assert!(validation_message(err).contains("at least 1"));
    }

    #[tokio::test]
    async fn place_order_rejects_unknown_product() {
        let f = setup().await;
        let err = f
            .service
            .place_order(request(vec![line("99", 1)]))
            .await
            .unwrap_err();
        assert!(validation_message(err).contains("99"));
    }

    #[tokio::test]
    async fn place_order_rejects_unknown_coupon() {
        let f = setup().await;
        let mut req = request(vec![line("1", 1)]);
        req.coupon_code = Some("NOPE".to_string());

        let err = f.service.place_order(req).await.unwrap_err();
        assert_eq!(validation_message(err), coupons::INVALID_COUPON_MESSAGE);
        assert_eq!(stock_of(&f.store, "1").await, 8);
    }

    #[tokio::test]
    async fn place_order_conflicts_on_short_stock() {
        let f = setup().await;

        let err = f
            .service
            .place_order(request(vec![line("1", 1), line("2", 3)]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(DomainError::Conflict(ref msg)) if msg.contains("Disponible: 2")
        ));
        assert_eq!(stock_of(&f.store, "1").await, 8);
        assert!(f.notifier.settle().await.is_empty());
    }

    #[tokio::test]
    async fn customer_validation() {
        let f = setup().await;

        let mut req = request(vec![line("1", 1)]);
        req.customer_name = "Al".to_string();
        let err = f.service.place_order(req).await.unwrap_err();
        assert!(validation_message(err).contains("3 caracteres"));

        let mut req = request(vec![line("1", 1)]);
        req.customer_name = "Ana 2".to_string();
        let err = f.service.place_order(req).await.unwrap_err();
        assert!(validation_message(err).contains("números"));

        let mut req = request(vec![line("1", 1)]);
        req.customer_email = "ana@example".to_string();
        let err = f.service.place_order(req).await.unwrap_err();
        assert!(validation_message(err).contains("correo"));

        let mut req = request(vec![line("1", 1)]);
        req.customer_phone = Some("0991-234".to_string());
        let err = f.service.place_order(req).await.unwrap_err();
        assert!(validation_message(err).contains("9 dígitos"));

        let mut req = request(vec![line("1", 1)]);
        req.document_number = Some("1234".to_string());
        let err = f.service.place_order(req).await.unwrap_err();
        assert!(validation_message(err).contains("5 caracteres"));
    }

    #[tokio::test]
    async fn contact_fields_respect_column_widths() {
        let f = setup().await;

        let mut req = request(vec![line("1", 1)]);
        req.customer_name = "A".repeat(MAX_NAME_LEN + 1);
        let err = f.service.place_order(req).await.unwrap_err();
        assert!(validation_message(err).contains("255 caracteres"));

        let mut req = request(vec![line("1", 1)]);
        req.customer_email = format!("{}@example.com", "a".repeat(MAX_EMAIL_LEN));
        let err = f.service.place_order(req).await.unwrap_err();
        assert!(validation_message(err).starts_with("El correo"));

        let mut req = request(vec![line("1", 1)]);
        req.customer_phone = Some("9".repeat(MAX_PHONE_LEN + 1));
        let err = f.service.place_order(req).await.unwrap_err();
        assert!(validation_message(err).contains("32 caracteres"));

        let mut req = request(vec![line("1", 1)]);
        req.document_number = Some("D".repeat(MAX_DOCUMENT_LEN + 1));
        let err = f.service.place_order(req).await.unwrap_err();
        assert!(validation_message(err).starts_with("El documento"));

        let mut req = request(vec![line("1", 1)]);
        req.payment_method = Some("x".repeat(MAX_PAYMENT_METHOD_LEN + 1));
        let err = f.service.place_order(req).await.unwrap_err();
        assert!(validation_message(err).contains("Payment method"));

        assert_eq!(stock_of(&f.store, "1").await, 8);
    }

    #[tokio::test]
    async fn widest_contact_fields_are_accepted() {
        let f = setup().await;
        let mut req = request(vec![line("1", 1)]);
        req.customer_name = "Ñ".repeat(MAX_NAME_LEN);
        req.customer_phone = Some("9".repeat(MAX_PHONE_LEN));
        req.document_number = Some("D".repeat(MAX_DOCUMENT_LEN));
        req.payment_method = Some("m".repeat(MAX_PAYMENT_METHOD_LEN));

        let order = f.service.place_order(req).await.unwrap();
        assert_eq!(order.customer_name.chars().count(), MAX_NAME_LEN);
    }

    #[tokio::test]
    async fn oversized_subtotal_is_rejected() {
        let f = setup().await;
        f.store
            .products()
            .upsert_catalog(&[test_product("9", 1_000_000_000, 1)])
            .await
            .unwrap();

        let err = f
            .service
            .quote(&[line("9", 1_000)], None)
            .await
            .unwrap_err();
        assert!(validation_message(err).contains("must not exceed"));

        let err = f
            .service
            .place_order(request(vec![line("1", u32::MAX as i64)]))
            .await
            .unwrap_err();
        assert!(validation_message(err).contains("must not exceed"));
        assert_eq!(stock_of(&f.store, "1").await, 8);
    }

    #[tokio::test]
    async fn concurrent_orders_never_oversell() {
        let f = setup().await;
        let service = Arc::new(f.service);

        let mut handles = Vec::new();
        for _ in 0..10 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.place_order(request(vec![line("2", 1)])).await
            }));
        }

        let mut placed = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => placed += 1,
                Err(AppError::Domain(DomainError::Conflict(_))) => conflicts += 1,
                Err(other) => panic!("unexpected error: {:?}", other),
            }
        }

        assert_eq!(placed, 2);
        assert_eq!(conflicts, 8);
        assert_eq!(stock_of(&f.store, "2").await, 0);
    }

    #[tokio::test]
    async fn optional_contact_fields_may_be_blank() {
        let f = setup().await;
        let mut req = request(vec![line("1", 1)]);
        req.customer_phone = Some("  ".to_string());
        req.document_number = None;

        let order = f.service.place_order(req).await.unwrap();
        assert_eq!(order.customer_phone, None);
        assert_eq!(order.document_number, None);
    }

    #[tokio::test]
    async fn quote_matches_placed_order() {
        let f = setup().await;

        let quote = f
            .service
            .quote(&[line("1", 1)], Some("ENVIOGRATIS"))
            .await
            .unwrap();

        assert_eq!(quote.subtotal, Decimal::new(2500, 2));
        assert_eq!(quote.shipping, Decimal::ZERO);
        assert_eq!(quote.coupon_discount, Decimal::ZERO);
        assert_eq!(quote.total, Decimal::new(2500, 2));
        assert_eq!(stock_of(&f.store, "1").await, 8);
    }

    #[tokio::test]
    async fn update_status_notifies_on_change() {
        let f = setup().await;
        let order = f
            .service
            .place_order(request(vec![line("1", 1)]))
            .await
            .unwrap();
        f.notifier.wait_for(1).await;

        let updated = f.service.update_status(&order.id, "Paid").await.unwrap();
        assert_eq!(updated.status, OrderStatus::Paid);

        let sent = f.notifier.wait_for(2).await;
        assert_eq!(
            sent[1].kind,
            NotificationKind::StatusChanged(OrderStatus::Paid)
        );
    }

    #[tokio::test]
    async fn update_status_same_status_is_silent() {
        let f = setup().await;
        let order = f
            .service
            .place_order(request(vec![line("1", 1)]))
            .await
            .unwrap();
        f.service.update_status(&order.id, "shipped").await.unwrap();
        f.notifier.wait_for(2).await;

        f.service.update_status(&order.id, "shipped").await.unwrap();
        f.service.update_status(&order.id, "pending").await.unwrap();

        assert_eq!(f.notifier.settle().await.len(), 2);
    }

    #[tokio::test]
    async fn update_status_rejects_unknown_status() {
        let f = setup().await;
        let err = f
            .service
            .update_status(&OrderId::from("ORD-1"), "lost")
            .await
            .unwrap_err();
        assert!(validation_message(err).contains("pending, paid, shipped, delivered"));
    }

    #[tokio::test]
    async fn update_status_missing_order() {
        let f = setup().await;
        let err = f
            .service
            .update_status(&OrderId::from("ORD-000000"), "paid")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_order_missing() {
        let f = setup().await;
        let err = f
            .service
            .get_order(&OrderId::from("ORD-000000"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn notifier_failure_does_not_fail_order() {
        let store = MemoryStore::new();
        store
            .products()
            .upsert_catalog(&[test_product("1", 2500, 8)])
            .await
            .unwrap();
        let service = OrderService::new(
            Arc::new(store.products()),
            Arc::new(store.orders()),
            Arc::new(FailingNotifier),
        );

        let order = service.place_order(request(vec![line("1", 1)])).await;
        assert!(order.is_ok());
    }

    #[tokio::test]
    async fn repository_failure_is_propagated() {
        let store = MemoryStore::new();
        store
            .products()
            .upsert_catalog(&[test_product("1", 2500, 8)])
            .await
            .unwrap();
        let notifier = RecordingNotifier::new();
        let service = OrderService::new(
            Arc::new(store.products()),
            Arc::new(FailingOrderRepository),
            Arc::new(notifier.clone()),
        );

        let err = service
            .place_order(request(vec![line("1", 1)]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::Database(_))));
        assert!(notifier.settle().await.is_empty());
    }
}
