// Order fixture - time, float and collection fields plus items that are not models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub total: f64,
    pub paid: bool,
    pub placed_at: DateTime<Utc>,
    pub note: Option<String>,
    pub items: Vec<LineItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub quantity: u32,
}

pub struct OrderId(pub i64);

pub struct Marker;

pub struct Draft {}

pub enum OrderStatus {
    Open,
    Shipped,
}
