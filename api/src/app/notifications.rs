//! Customer notifications
//!
//! Builds the messages sent when an order is placed or changes status, and
//! dispatches them in the background so a slow mail server never holds up
//! the HTTP response.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::entities::{Order, OrderStatus, DEFAULT_PAYMENT_METHOD};
use crate::domain::ports::{Notification, NotificationKind, Notifier};

pub const STORE_NAME: &str = "Casa Marquito";

/// Copy for a status-change message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNotice {
    pub subject: String,
    pub title: &'static str,
    pub message: &'static str,
}

impl StatusNotice {
    /// `pending` is the initial state and has no notice
    pub fn for_status(order: &Order, status: OrderStatus) -> Option<Self> {
        let id = &order.id;
        match status {
            OrderStatus::Pending => None,
            OrderStatus::Paid => Some(Self {
                subject: format!("✅ Pago confirmado — Pedido #{}", id),
                title: "Pago Confirmado",
                message: "Hemos confirmado tu pago. Estamos preparando tu pedido para el envío.",
            }),
            OrderStatus::Shipped => Some(Self {
                subject: format!("🚚 Tu pedido está en camino — #{}", id),
                title: "Pedido en Camino",
                message: "Tu pedido ha sido despachado y está en camino a tu dirección.",
            }),
            OrderStatus::Delivered => Some(Self {
                subject: format!("📦 ¡Tu pedido fue entregado! — #{}", id),
                title: "¡Pedido Entregado!",
                message: "¡Tu pedido fue entregado exitosamente! Esperamos que disfrutes tus productos.",
            }),
        }
    }
}

fn money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// Order confirmation sent right after checkout
pub fn order_placed(order: &Order) -> Notification {
    let mut body = String::new();
    body.push_str(&format!("¡Gracias por tu compra, {}!\n\n", order.customer_name));
    body.push_str("Tu pedido ha sido recibido.\n\n");
    body.push_str(&format!("Pedido ID: #{}\n", order.id));
    body.push_str(&format!("Fecha: {}\n", order.date.format("%d/%m/%Y %H:%M")));
    let payment = if order.payment_method.is_empty() {
        DEFAULT_PAYMENT_METHOD
    } else {
        order.payment_method.as_str()
    };
    body.push_str(&format!("Método de Pago: {}\n\n", payment));

    for item in &order.items {
        body.push_str(&format!(
            "- {} x{} @ {} = {}\n",
            item.name,
            item.quantity,
            money(item.price),
            money(item.line_total())
        ));
    }

    body.push_str(&format!("\nSubtotal: {}\n", money(order.subtotal)));
    if order.discount > Decimal::ZERO {
        body.push_str(&format!("Descuento volumen: -{}\n", money(order.discount)));
    }
    if order.coupon_discount > Decimal::ZERO {
        body.push_str(&format!(
            "Cupón ({}): -{}\n",
            order.coupon_code.as_deref().unwrap_or_default(),
            money(order.coupon_discount)
        ));
    }
    if order.shipping_cost > Decimal::ZERO {
        body.push_str(&format!("Envío: {}\n", money(order.shipping_cost)));
    } else {
        body.push_str("Envío: Gratis\n");
    }
    body.push_str(&format!("TOTAL: {}\n\n", money(order.total)));
    body.push_str(
        "Si realizaste una transferencia bancaria, por favor envía el comprobante \
         respondiendo a este correo.\n",
    );
    body.push_str(&format!("\n{}\n", STORE_NAME));

    Notification {
        kind: NotificationKind::OrderPlaced,
        order_id: order.id.clone(),
        to: order.customer_email.clone(),
        subject: format!("✅ Confirmación de Pedido #{} - {}", order.id, STORE_NAME),
        body,
    }
}

/// Status-change message, if the new status warrants one
pub fn status_changed(order: &Order, status: OrderStatus) -> Option<Notification> {
    let notice = StatusNotice::for_status(order, status)?;
    let name = if order.customer_name.trim().is_empty() {
        "Cliente"
    } else {
        order.customer_name.as_str()
    };

    let body = format!(
        "{title}\n\nHola {name},\n{message}\n\nPedido ID: #{id}\nTotal: {total}\n\n\
         ¿Tenés alguna consulta? Respondé a este correo y te ayudamos.\n\n{store}\n",
        title = notice.title,
        name = name,
        message = notice.message,
        id = order.id,
        total = money(order.total),
        store = STORE_NAME,
    );

    Some(Notification {
        kind: NotificationKind::StatusChanged(status),
        order_id: order.id.clone(),
        to: order.customer_email.clone(),
        subject: notice.subject,
        body,
    })
}

/// Send in the background; failures are logged and otherwise ignored
pub fn dispatch(notifier: Arc<dyn Notifier>, notification: Notification) {
    tokio::spawn(async move {
        if notification.to.trim().is_empty() {
            tracing::warn!(order_id = %notification.order_id, "No customer email, skipping notification");
            return;
        }
        if let Err(e) = notifier.send(&notification).await {
            tracing::warn!(
                error = %e,
                order_id = %notification.order_id,
                kind = ?notification.kind,
                "Failed to send notification"
            );
        }
    });
}
