//! HTML builders for notification emails.
//!
//! Pure functions: the engines assemble the data, these produce the markup.
//! The presentational shell lives in [`wrap_template`] so every message
//! shares one look.

use chrono::NaiveDate;
use ordertrack_core::alerts::is_urgent;
use ordertrack_core::OrderStatus;

/// Colour for the days-remaining annotation when the order is urgent.
const URGENT_COLOR: &str = "#e74c3c";

/// Colour for the days-remaining annotation otherwise.
const WARNING_COLOR: &str = "#f39c12";

/// One at-risk order line in a deadline-alert email.
#[derive(Debug, Clone)]
pub struct AtRiskOrder {
    pub po_number: String,
    pub status: OrderStatus,
    pub client_name: Option<String>,
    pub date_required: NaiveDate,
    pub days_remaining: i64,
    /// Owner fields, rendered only in the admin summary.
    pub owner_email: Option<String>,
    pub owner_company: Option<String>,
}

/// Wrap message content in the shared presentational shell.
pub fn wrap_template(content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <style>\n\
         body {{ font-family: -apple-system, 'Segoe UI', Roboto, Arial, sans-serif; \
         line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px; }}\n\
         h2 {{ color: #2c3e50; border-bottom: 3px solid #3498db; padding-bottom: 10px; }}\n\
         li {{ margin: 10px 0; }}\n\
         .footer {{ margin-top: 30px; padding-top: 20px; border-top: 1px solid #e0e0e0; \
         font-size: 12px; color: #7f8c8d; text-align: center; }}\n\
         </style>\n</head>\n<body>\n\
         <div class=\"email-container\">\n{content}\n\
         <div class=\"footer\">\n\
         <p>This is an automated message from the Order Portal System.</p>\n\
         <p>Please do not reply directly to this email.</p>\n\
         </div>\n</div>\n</body>\n</html>"
    )
}

// ---------------------------------------------------------------------------
// Status change
// ---------------------------------------------------------------------------

pub fn status_change_subject(po_number: &str) -> String {
    format!("Order Update: PO #{po_number}")
}

/// Body of a status-change notification to the order's owner.
///
/// `details` carries labelled metadata from the matched inventory record
/// (location, supplier, quantity, ...); absent fields are simply omitted.
pub fn status_change_body(
    po_number: &str,
    client_name: Option<&str>,
    new_status: OrderStatus,
    date_required: NaiveDate,
    details: &[(&str, String)],
) -> String {
    let mut body = format!(
        "<h2>Order Status Update</h2>\n\
         <p>Your order <strong>{po_number}</strong> {}.</p>\n\
         <h3>Order Details:</h3>\n<ul>\n\
         <li><strong>PO Number:</strong> {po_number}</li>\n\
         <li><strong>Client Name:</strong> {}</li>\n\
         <li><strong>New Status:</strong> {}</li>\n\
         <li><strong>Date Required:</strong> {}</li>\n</ul>\n",
        new_status.change_phrase(),
        client_name.unwrap_or("N/A"),
        new_status.as_str().to_uppercase(),
        date_required.format("%Y-%m-%d"),
    );

    if !details.is_empty() {
        body.push_str("<h3>Inventory Details:</h3>\n<ul>\n");
        for (label, value) in details {
            body.push_str(&format!("<li><strong>{label}:</strong> {value}</li>\n"));
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<p>You can view your order details by logging into the portal.</p>");
    body
}

// ---------------------------------------------------------------------------
// Deadline alerts
// ---------------------------------------------------------------------------

pub fn owner_alert_subject(order_count: usize) -> String {
    format!("Order Delivery Alert - {order_count} Order(s) Not Received")
}

/// Body of a deadline alert listing one owner's at-risk orders.
pub fn owner_alert_body(orders: &[AtRiskOrder], threshold_days: i64) -> String {
    let mut body = format!(
        "<h2>Order Delivery Alert</h2>\n\
         <p>The following order(s) have not been received and are due within \
         {threshold_days} days:</p>\n<ul>\n"
    );
    for order in orders {
        body.push_str(&format!(
            "<li><strong>PO #{}</strong><br>\n\
             Status: {}<br>\n\
             Due Date: {} {}<br>\n\
             Client: {}</li>\n",
            order.po_number,
            order.status.as_str().to_uppercase(),
            order.date_required.format("%Y-%m-%d"),
            days_remaining_span(order.days_remaining),
            order.client_name.as_deref().unwrap_or("N/A"),
        ));
    }
    body.push_str(
        "</ul>\n<p>Please check on the status of these orders to ensure timely delivery.</p>\n\
         <p>You can view more details by logging into the portal.</p>",
    );
    body
}

pub fn admin_summary_subject(order_count: usize) -> String {
    format!("Admin Alert: {order_count} Order(s) Not Received")
}

/// Body of the consolidated summary sent to each active alert recipient.
pub fn admin_summary_body(orders: &[AtRiskOrder], threshold_days: i64) -> String {
    let mut body = format!(
        "<h2>Admin: Order Delivery Alert Summary</h2>\n\
         <p>{} order(s) have not been received and are due within \
         {threshold_days} days:</p>\n<ul>\n",
        orders.len()
    );
    for order in orders {
        body.push_str(&format!(
            "<li><strong>PO #{}</strong> - {}<br>\n\
             Status: {}<br>\n\
             Due: {} {}<br>\n\
             Client Email: {}</li>\n",
            order.po_number,
            order.owner_company.as_deref().unwrap_or("Unknown Company"),
            order.status.as_str().to_uppercase(),
            order.date_required.format("%Y-%m-%d"),
            days_remaining_span(order.days_remaining),
            order.owner_email.as_deref().unwrap_or("N/A"),
        ));
    }
    body.push_str("</ul>\n<p>Clients have been notified automatically.</p>");
    body
}

/// The coloured days-remaining annotation.
fn days_remaining_span(days: i64) -> String {
    let color = if is_urgent(days) {
        URGENT_COLOR
    } else {
        WARNING_COLOR
    };
    let unit = if days == 1 { "day" } else { "days" };
    format!("<span style=\"color: {color};\">({days} {unit} remaining)</span>")
}
