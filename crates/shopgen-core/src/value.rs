use chrono::{NaiveDate, NaiveDateTime};

use crate::records::{Customer, Event, Order, Product};
use crate::schema::{ColumnDef, ColumnType, TableDef, CUSTOMERS, EVENTS, ORDERS, PRODUCTS};

/// A single cell of a generated row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Decimal(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Text form used for CSV export and for binding into cast placeholders.
    pub fn to_text(&self, column: &ColumnDef) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Int(value) => Some(value.to_string()),
            Value::Decimal(value) => match column.column_type {
                ColumnType::Decimal { scale, .. } => {
                    let scale = scale as usize;
                    Some(format!("{value:.scale$}"))
                }
                _ => Some(value.to_string()),
            },
            Value::Text(value) => Some(value.clone()),
            Value::Date(value) => Some(value.format("%Y-%m-%d").to_string()),
            Value::Timestamp(value) => Some(value.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }

    pub fn to_csv(&self, column: &ColumnDef) -> String {
        self.to_text(column).unwrap_or_default()
    }
}

/// A generated row that maps onto one of the fixed tables.
pub trait Record {
    const TABLE: &'static TableDef;

    /// Cell values in `TABLE.columns` order.
    fn values(&self) -> Vec<Value>;
}

impl Record for Customer {
    const TABLE: &'static TableDef = &CUSTOMERS;

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Int(self.customer_id.into()),
            Value::Text(self.name.clone()),
            Value::Text(self.email.clone()),
            self.city.clone().map_or(Value::Null, Value::Text),
            Value::Date(self.signup_date),
            Value::Text(self.segment.as_str().to_string()),
        ]
    }
}

impl Record for Product {
    const TABLE: &'static TableDef = &PRODUCTS;

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Int(self.product_id.into()),
            Value::Text(self.name.clone()),
            Value::Text(self.category.clone()),
            Value::Text(self.subcategory.clone()),
            Value::Decimal(self.cost_price),
            Value::Decimal(self.list_price),
        ]
    }
}

impl Record for Order {
    const TABLE: &'static TableDef = &ORDERS;

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Int(self.order_id.into()),
            Value::Int(self.customer_id.into()),
            Value::Date(self.order_date),
            Value::Int(self.product_id.into()),
            Value::Int(self.quantity.into()),
            Value::Decimal(self.unit_price),
            Value::Decimal(self.total_amount),
            Value::Text(self.status.as_str().to_string()),
            Value::Text(self.payment_method.as_str().to_string()),
        ]
    }
}

impl Record for Event {
    const TABLE: &'static TableDef = &EVENTS;

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Int(self.event_id.into()),
            Value::Int(self.customer_id.into()),
            Value::Text(self.event_type.as_str().to_string()),
            Value::Timestamp(self.event_date),
            Value::Text(self.session_id.clone()),
            Value::Text(self.device_type.as_str().to_string()),
        ]
    }
}
