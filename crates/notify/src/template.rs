//! Order confirmation email rendering.

use domain::ProcessedOrder;

use crate::notifier::OrderEmail;

/// Renders the store-owner notification for a processed order, as an HTML
/// body with a plain-text twin.
pub fn render_order_email(order: &ProcessedOrder, to: &str) -> OrderEmail {
    OrderEmail {
        to: to.to_string(),
        subject: format!("New Mirror-It order {}", order.order_id),
        html_body: render_html(order),
        text_body: render_text(order),
    }
}

fn render_html(order: &ProcessedOrder) -> String {
    let rows: String = order
        .items
        .iter()
        .map(|line| {
            format!(
                "<tr>\
                 <td style=\"padding: 8px; border-bottom: 1px solid #eee;\">{}</td>\
                 <td style=\"padding: 8px; border-bottom: 1px solid #eee; text-align: right;\">{}</td>\
                 <td style=\"padding: 8px; border-bottom: 1px solid #eee; text-align: right;\">{}</td>\
                 <td style=\"padding: 8px; border-bottom: 1px solid #eee; text-align: right;\">{}</td>\
                 </tr>",
                line.name, line.price, line.quantity, line.line_total
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>New order {order_id}</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
        <h2 style="color: #2563eb;">New order {order_id}</h2>
        <p>Placed on {order_date}, payment by {payment_method}.</p>
        <h3>Items</h3>
        <table style="width: 100%; border-collapse: collapse;">
            <tr>
                <th style="padding: 8px; text-align: left;">Item</th>
                <th style="padding: 8px; text-align: right;">Price</th>
                <th style="padding: 8px; text-align: right;">Qty</th>
                <th style="padding: 8px; text-align: right;">Total</th>
            </tr>
            {rows}
        </table>
        <p style="margin-top: 20px;">
            Subtotal: {subtotal}<br>
            Discount (20%): -{discount}<br>
            Shipping: {shipping}<br>
            <strong>Total: {total}</strong>
        </p>
        <h3>Delivery</h3>
        <p>
            {name}<br>
            Phone: {phone}<br>
            County: {county}<br>
            Town: {town}<br>
            Landmark: {landmark}
        </p>
    </div>
</body>
</html>
"#,
        order_id = order.order_id,
        order_date = order.order_date,
        payment_method = order.payment_method,
        rows = rows,
        subtotal = order.pricing.subtotal,
        discount = order.pricing.discount,
        shipping = order.pricing.shipping,
        total = order.pricing.total,
        name = order.customer.name,
        phone = order.customer.phone,
        county = order.customer.county,
        town = order.customer.town,
        landmark = order.customer.landmark,
    )
}

fn render_text(order: &ProcessedOrder) -> String {
    let mut body = format!(
        "New order {}\nPlaced on {}\nPayment: {}\n\nItems:\n",
        order.order_id, order.order_date, order.payment_method
    );
    for line in &order.items {
        body.push_str(&format!(
            "  {} x{} @ {} = {}\n",
            line.name, line.quantity, line.price, line.line_total
        ));
    }
    body.push_str(&format!(
        "\nSubtotal: {}\nDiscount (20%): -{}\nShipping: {}\nTotal: {}\n",
        order.pricing.subtotal, order.pricing.discount, order.pricing.shipping, order.pricing.total
    ));
    body.push_str(&format!(
        "\nDeliver to:\n  {}\n  Phone: {}\n  County: {}\n  Town: {}\n  Landmark: {}\n",
        order.customer.name,
        order.customer.phone,
        order.customer.county,
        order.customer.town,
        order.customer.landmark
    ));
    body
}
