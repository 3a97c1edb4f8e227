//! Message composition for every email the system sends.
//!
//! Templates are plain functions from models to [`EmailMessage`]; nothing in
//! here touches the database or the mailer, so the exact wording is unit
//! testable. The invoice template varies its body by payment status: an
//! overdue invoice carries an urgency notice, a pending one asks for
//! payment, anything else is sent for the customer's records.

use super::EmailMessage;
use crate::entities::{InvoiceModel, InvoiceStatus, OrderModel, enquiry};

/// Confirmation sent to the customer right after checkout.
#[must_use]
pub fn order_confirmation(order: &OrderModel) -> Option<EmailMessage> {
    let to = order.customer_email.clone()?;
    let name = order.customer_name.as_deref().unwrap_or("Customer");
    let product = order.product_name.as_deref().unwrap_or("your order");
    let amount = order.amount.unwrap_or(0.0);

    Some(EmailMessage {
        to,
        subject: format!("Order Confirmation - Order #{}", order.id),
        body: format!(
            "Dear {name},\n\n\
             Thank you for your order. We have received your request for {product} \
             and it is now being processed.\n\n\
             Order ID: {}\n\
             Total Amount: Rs. {amount:.2}\n\n\
             We will contact you shortly with delivery details.\n\n\
             Warm regards,\n\
             Sri Lakshmi Textiles",
            order.id
        ),
    })
}

/// Acknowledgement sent when a customer requests cancellation. The order is
/// not cancelled yet; an admin still has to approve.
#[must_use]
pub fn cancellation_acknowledgement(order: &OrderModel) -> Option<EmailMessage> {
    let to = order.customer_email.clone()?;
    let name = order.customer_name.as_deref().unwrap_or("Customer");

    Some(EmailMessage {
        to,
        subject: format!("Cancellation Request Received - Order #{}", order.id),
        body: format!(
            "Dear {name},\n\n\
             We have received your cancellation request for order #{}. \
             Our team will review it and confirm the cancellation shortly.\n\n\
             Warm regards,\n\
             Sri Lakshmi Textiles",
            order.id
        ),
    })
}

/// Acknowledgement sent to whoever submitted a contact enquiry.
#[must_use]
pub fn enquiry_acknowledgement(enquiry: &enquiry::Model) -> EmailMessage {
    EmailMessage {
        to: enquiry.email.clone(),
        subject: "We received your enquiry".to_string(),
        body: format!(
            "Dear {},\n\n\
             Thank you for reaching out. We have received your enquiry and a \
             member of our team will get back to you within one business day.\n\n\
             Warm regards,\n\
             Sri Lakshmi Textiles",
            enquiry.name
        ),
    }
}

/// Heads-up sent to the admin inbox for every new enquiry.
#[must_use]
pub fn enquiry_notification(enquiry: &enquiry::Model, admin_email: &str) -> EmailMessage {
    let company = enquiry.company.as_deref().unwrap_or("-");
    EmailMessage {
        to: admin_email.to_string(),
        subject: format!("New enquiry from {}", enquiry.name),
        body: format!(
            "New enquiry received.\n\n\
             Name: {}\n\
             Phone: {}\n\
             Company: {company}\n\
             Email: {}\n\n\
             Message:\n{}",
            enquiry.name, enquiry.phone, enquiry.email, enquiry.message
        ),
    }
}

/// Invoice email. The closing paragraph depends on the payment status at
/// send time.
#[must_use]
pub fn invoice_email(invoice: &InvoiceModel) -> Option<EmailMessage> {
    let to = invoice.customer_email.clone()?;

    let closing = match invoice.payment_status {
        InvoiceStatus::Overdue => {
            "URGENT: This invoice is overdue. Please arrange payment immediately \
             to avoid interruption of service."
        }
        InvoiceStatus::Pending => {
            "Please arrange payment at your earliest convenience using the \
             details above."
        }
        InvoiceStatus::Paid => "This invoice is attached for your records.",
    };

    let due = invoice
        .due_date
        .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string());

    Some(EmailMessage {
        to,
        subject: format!("Invoice {} - Sri Lakshmi Textiles", invoice.invoice_number),
        body: format!(
            "Dear {},\n\n\
             Please find your invoice details below.\n\n\
             Invoice Number: {}\n\
             Subtotal: Rs. {:.2}\n\
             Tax ({}%): Rs. {:.2}\n\
             Total: Rs. {:.2}\n\
             Due Date: {due}\n\n\
             {closing}\n\n\
             Warm regards,\n\
             Sri Lakshmi Textiles",
            invoice.customer_name,
            invoice.invoice_number,
            invoice.subtotal,
            invoice.tax_rate,
            invoice.tax_amount,
            invoice.total_amount,
        ),
    })
}
