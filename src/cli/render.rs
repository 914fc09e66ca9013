use chrono::NaiveDate;
use console::style;
use rust_decimal::Decimal;
use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use crate::cart::CartError;
use crate::domain::{LineItem, Order, Product};
use crate::error::ShopError;
use crate::order_log::OrderError;
use crate::shop_actor::CartSummary;

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "Product ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Stock")]
    stock: u32,
}

#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "Product ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Quantity")]
    quantity: u32,
    #[tabled(rename = "Subtotal")]
    subtotal: String,
}

pub fn format_money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn render<R: Tabled>(rows: Vec<R>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());
    table.to_string()
}

pub fn format_product_table(products: &[Product]) -> String {
    let rows: Vec<ProductRow> = products
        .iter()
        .map(|p| ProductRow {
            id: p.id.clone(),
            name: p.name.clone(),
            price: format_money(p.price),
            stock: p.stock,
        })
        .collect();
    render(rows)
}

pub fn format_line_table(lines: &[LineItem]) -> String {
    let rows: Vec<LineRow> = lines
        .iter()
        .map(|l| LineRow {
            id: l.product_id.clone(),
            name: l.name.clone(),
            price: format_money(l.unit_price),
            quantity: l.quantity,
            subtotal: format_money(l.line_total()),
        })
        .collect();
    render(rows)
}

pub fn format_cart(cart: &CartSummary) -> String {
    format!(
        "{}\n{}: {}\n",
        format_line_table(&cart.lines),
        style("Total").bold(),
        style(format_money(cart.total)).green()
    )
}

pub fn format_order(order: &Order) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}: {}\n", style("Order ID").bold(), style(order.id()).cyan()));
    output.push_str(&format!("{}: {}\n", style("Order Date").bold(), format_date(order.placed_on())));
    output.push_str(&format!("{}: {}\n", style("Status").bold(), style(order.status()).green()));
    output.push_str("Products in this order:\n");
    output.push_str(&format_line_table(order.lines()));
    output.push('\n');
    output.push_str(&format!(
        "{}: {}\n",
        style("Total Amount").bold(),
        style(format_money(order.total())).green()
    ));
    output
}

/// Message shown to the shopper for a failed request.
pub fn describe_error(error: &ShopError) -> String {
    match error {
        ShopError::Cart(CartError::ProductNotFound(_)) => "Invalid Product ID!".to_string(),
        ShopError::Cart(CartError::InsufficientStock { requested, available }) => format!(
            "Insufficient stock. Requested {}, only {} available.",
            requested, available
        ),
        ShopError::Cart(CartError::InvalidQuantity(_)) => {
            "Quantity must be greater than zero.".to_string()
        }
        ShopError::Cart(CartError::EmptyCart) => "Shopping Cart is empty.".to_string(),
        ShopError::Order(OrderError::NotFound(id)) => format!("Order {} does not exist.", id),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rust_decimal_macros::dec;

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(format_money(dec!(199)), "199.00");
        assert_eq!(format_money(dec!(1592.5)), "1592.50");
    }

    #[test]
    fn date_is_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        assert_eq!(format_date(date), "09/02/2024");
    }

    #[test]
    fn product_table_lists_every_product() {
        let catalog = Catalog::mers_clothing_line();
        let table = format_product_table(catalog.products());
        assert!(table.contains("Product ID"));
        assert!(table.contains("Stock"));
        for product in catalog.products() {
            assert!(table.contains(&product.id));
            assert!(table.contains(&product.name));
        }
        assert!(table.contains("499.00"));
    }

    #[test]
    fn line_table_shows_subtotals() {
        let lines = vec![LineItem {
            product_id: "XL001".to_string(),
            name: "White T-Shirt S".to_string(),
            unit_price: dec!(199),
            quantity: 8,
        }];
        let table = format_line_table(&lines);
        assert!(table.contains("XL001"));
        assert!(table.contains("199.00"));
        assert!(table.contains("1592.00"));
    }

    #[test]
    fn errors_become_shopper_messages() {
        assert_eq!(
            describe_error(&ShopError::Cart(CartError::ProductNotFound("X".into()))),
            "Invalid Product ID!"
        );
        assert_eq!(
            describe_error(&ShopError::Cart(CartError::InsufficientStock {
                requested: 100,
                available: 15
            })),
            "Insufficient stock. Requested 100, only 15 available."
        );
        assert_eq!(
            describe_error(&ShopError::Cart(CartError::EmptyCart)),
            "Shopping Cart is empty."
        );
    }
}
