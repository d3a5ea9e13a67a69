//! One-line text rendering of rows

use shipdesk_core::model::{
    Courier, Customer, CustomerDetail, Order, OrderLine, Product, SalesAgent, Shipment,
};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Customer {
    fn render(&self) -> String {
        format!("{:>5}  {:<24} {}", self.id, self.name, self.email)
    }
}

impl Render for CustomerDetail {
    fn render(&self) -> String {
        format!(
            "{:>5}  {:<32} {:<16} {}",
            self.customer_id, self.address, self.phone, self.notes
        )
    }
}

impl Render for Product {
    fn render(&self) -> String {
        format!("{:>5}  {:<32} {:>10.2}", self.id, self.name, self.price)
    }
}

impl Render for Order {
    fn render(&self) -> String {
        format!(
            "{:>5}  customer {:>5}  {}",
            self.id, self.customer_id, self.date
        )
    }
}

impl Render for OrderLine {
    fn render(&self) -> String {
        format!(
            "{:>5}  product {:>5}  {:>4} x {:>10.2} = {:>10.2}",
            self.order_id,
            self.product_id,
            self.quantity,
            self.unit_price,
            self.line_total()
        )
    }
}

impl Render for SalesAgent {
    fn render(&self) -> String {
        format!("{:>5}  {:<24} {}", self.id, self.name, self.sales_zone)
    }
}

impl Render for Courier {
    fn render(&self) -> String {
        format!("{:>5}  {:<24} {}", self.id, self.name, self.vehicle)
    }
}

impl Render for Shipment {
    fn render(&self) -> String {
        format!(
            "{:>5}  order {:>5} (customer {:>5})  agent {} ({})  courier {} ({})",
            self.id,
            self.order.id,
            self.order.customer_id,
            self.sales_agent.name,
            self.sales_agent.sales_zone,
            self.courier.name,
            self.courier.vehicle
        )
    }
}
