//! Printable HTML order confirmations.
//!
//! The document is a single self-contained HTML page with inline CSS so it prints the same
//! from any browser and can be archived as one file.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::{
    model::{farm::FarmDto, order::format_amount},
    server::model::db::{OrderModel, QuoteModel, SupplierModel},
};

const STYLE: &str = "\
body { font-family: 'Helvetica Neue', Arial, sans-serif; color: #1f2933; margin: 40px; }
.letterhead { border-bottom: 3px solid #2f6f3e; padding-bottom: 12px; margin-bottom: 24px; }
.letterhead h1 { margin: 0; color: #2f6f3e; font-size: 24px; }
.letterhead p { margin: 2px 0; font-size: 13px; color: #52606d; }
h2 { font-size: 20px; margin: 0 0 16px; }
.parties { display: flex; justify-content: space-between; margin-bottom: 24px; }
.parties div { width: 48%; }
.label { font-size: 11px; text-transform: uppercase; letter-spacing: 0.05em; color: #7b8794; }
table { width: 100%; border-collapse: collapse; margin-bottom: 24px; }
th, td { text-align: left; padding: 8px; border-bottom: 1px solid #e4e7eb; }
.total { font-size: 18px; font-weight: bold; text-align: right; }
.notes { white-space: pre-wrap; background: #f5f7fa; padding: 12px; }
@media print { body { margin: 0; } }
";

/// Everything printed on an order confirmation.
pub struct OrderDocument<'a> {
    pub order: &'a OrderModel,
    pub quote: &'a QuoteModel,
    pub farm: &'a FarmDto,
    pub supplier: &'a SupplierModel,
}

impl OrderDocument<'_> {
    /// File name offered for download, e.g. `order-PO-2025-001.html`.
    pub fn file_name(&self) -> String {
        let number: String = self
            .order
            .order_number
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();

        format!("order-{}.html", number)
    }

    pub fn render(&self) -> String {
        let mut html = String::with_capacity(4096);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(
            html,
            "<title>Order confirmation {}</title>",
            escape_html(&self.order.order_number)
        );
        let _ = writeln!(html, "<style>\n{}</style>\n</head>\n<body>", STYLE);

        self.render_letterhead(&mut html);

        let _ = writeln!(
            html,
            "<h2>Order confirmation {}</h2>",
            escape_html(&self.order.order_number)
        );

        self.render_parties(&mut html);
        self.render_details(&mut html);

        if let Some(notes) = &self.order.notes {
            let _ = writeln!(
                html,
                "<p class=\"label\">Notes</p>\n<div class=\"notes\">{}</div>",
                escape_html(notes)
            );
        }

        html.push_str("</body>\n</html>\n");

        html
    }

    fn render_letterhead(&self, html: &mut String) {
        let farm = self.farm;

        html.push_str("<div class=\"letterhead\">\n");
        let _ = writeln!(html, "<h1>{}</h1>", escape_html(farm.letterhead_name()));
        for line in [&farm.address, &farm.phone, &farm.email].into_iter().flatten() {
            let _ = writeln!(html, "<p>{}</p>", escape_html(line));
        }
        if let Some(org_number) = &farm.org_number {
            let _ = writeln!(html, "<p>Org. no. {}</p>", escape_html(org_number));
        }
        html.push_str("</div>\n");
    }

    fn render_parties(&self, html: &mut String) {
        let supplier = self.supplier;

        html.push_str("<div class=\"parties\">\n<div>\n<p class=\"label\">Supplier</p>\n");
        let _ = writeln!(html, "<p><strong>{}</strong></p>", escape_html(&supplier.name));
        for line in [&supplier.contact_person, &supplier.address, &supplier.email, &supplier.phone]
            .into_iter()
            .flatten()
        {
            let _ = writeln!(html, "<p>{}</p>", escape_html(line));
        }
        html.push_str("</div>\n<div>\n<p class=\"label\">Deliver to</p>\n");
        let delivery_address = self
            .order
            .delivery_address
            .as_deref()
            .or(self.farm.address.as_deref())
            .unwrap_or(&self.farm.name);
        let _ = writeln!(html, "<p>{}</p>", escape_html(delivery_address));
        html.push_str("</div>\n</div>\n");
    }

    fn render_details(&self, html: &mut String) {
        html.push_str("<table>\n");
        row(html, "Order date", &format_date(self.order.order_date));
        if let Some(delivery_date) = self.order.delivery_date {
            row(html, "Delivery date", &format_date(delivery_date));
        }
        row(html, "Quote", &self.quote.title);
        if let Some(description) = &self.quote.description {
            row(html, "Description", description);
        }
        html.push_str("</table>\n");

        let _ = writeln!(
            html,
            "<p class=\"total\">Total: {}</p>",
            escape_html(&format_amount(
                self.order.total_amount_minor,
                &self.order.currency
            ))
        );
    }
}

fn row(html: &mut String, label: &str, value: &str) {
    let _ = writeln!(
        html,
        "<tr><th>{}</th><td>{}</td></tr>",
        escape_html(label),
        escape_html(value)
    );
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn timestamp() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn farm(company_name: Option<&str>) -> FarmDto {
        FarmDto {
            id: 1,
            name: "North Farm".to_string(),
            location: None,
            company_name: company_name.map(str::to_string),
            address: Some("Gardsvegen 1".to_string()),
            phone: None,
            email: None,
            org_number: Some("912 345 678".to_string()),
            notes: None,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    fn supplier() -> SupplierModel {
        SupplierModel {
            id: 1,
            name: "Agri & Sons".to_string(),
            contact_person: None,
            email: Some("sales@agri.no".to_string()),
            phone: None,
            address: None,
            notes: None,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    fn quote() -> QuoteModel {
        QuoteModel {
            id: 1,
            supplier_id: 1,
            farm_id: 1,
            project_id: None,
            title: "Feed <premium>".to_string(),
            description: None,
            amount_minor: Some(1_250_000),
            currency: "NOK".to_string(),
            status: "accepted".to_string(),
            valid_until: None,
            sent_at: None,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    fn order(notes: Option<&str>) -> OrderModel {
        OrderModel {
            id: 1,
            quote_id: 1,
            order_number: "PO/2025 001".to_string(),
            order_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            delivery_date: NaiveDate::from_ymd_opt(2025, 4, 1),
            delivery_address: None,
            total_amount_minor: 1_250_000,
            currency: "NOK".to_string(),
            notes: notes.map(str::to_string),
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    /// Expect markup characters to be escaped
    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    /// Expect interpolated text to never reach the document unescaped
    #[test]
    fn renders_escaped_content() {
        let farm = farm(Some("Nord Gård AS"));
        let (quote, supplier) = (quote(), supplier());
        let order = order(Some("<script>alert(1)</script>"));
        let document = OrderDocument {
            order: &order,
            quote: &quote,
            farm: &farm,
            supplier: &supplier,
        };

        let html = document.render();

        assert!(html.contains("<h1>Nord Gård AS</h1>"));
        assert!(html.contains("Agri &amp; Sons"));
        assert!(html.contains("Feed &lt;premium&gt;"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("12 500.00 NOK"));
        assert!(html.contains("14.03.2025"));
        assert!(html.contains("01.04.2025"));
    }

    /// Expect the farm name on the letterhead when no company name is set
    #[test]
    fn letterhead_falls_back_to_farm_name() {
        let farm = farm(None);
        let (quote, supplier, order) = (quote(), supplier(), order(None));
        let document = OrderDocument {
            order: &order,
            quote: &quote,
            farm: &farm,
            supplier: &supplier,
        };

        let html = document.render();

        assert!(html.contains("<h1>North Farm</h1>"));
        assert!(html.contains("Org. no. 912 345 678"));
        assert!(!html.contains("class=\"notes\""));
    }

    /// Expect unsafe characters in the order number to be replaced in the file name
    #[test]
    fn file_name_is_header_safe() {
        let farm = farm(None);
        let (quote, supplier, order) = (quote(), supplier(), order(None));
        let document = OrderDocument {
            order: &order,
            quote: &quote,
            farm: &farm,
            supplier: &supplier,
        };

        assert_eq!(document.file_name(), "order-PO_2025_001.html");
    }
}
