//! Customer notification port.

use std::sync::Arc;

use orderentry_parties::CustomerId;

use crate::order::OrderId;

/// Sends the "your order was placed" email.
///
/// Fire-and-forget: delivery problems are the notifier's business and never
/// reach the order workflow.
pub trait EmailNotifier: Send + Sync {
    fn send_order_confirmation_email(&self, customer_id: CustomerId, order_id: OrderId);
}

impl<E> EmailNotifier for Arc<E>
where
    E: EmailNotifier + ?Sized,
{
    fn send_order_confirmation_email(&self, customer_id: CustomerId, order_id: OrderId) {
        (**self).send_order_confirmation_email(customer_id, order_id)
    }
}

impl<E> EmailNotifier for &E
where
    E: EmailNotifier + ?Sized,
{
    fn send_order_confirmation_email(&self, customer_id: CustomerId, order_id: OrderId) {
        (**self).send_order_confirmation_email(customer_id, order_id)
    }
}
