use chrono::NaiveDate;

use shopgen_core::{
    Customer, EventType, Order, OrderStatus, PaymentMethod, Record, Segment, Value, CUSTOMERS,
    ORDERS, TABLES,
};

fn sample_customer(city: Option<&str>) -> Customer {
    Customer {
        customer_id: 7,
        name: "Mary Chen".to_string(),
        email: "mary.chen1a2b@mail.com".to_string(),
        city: city.map(str::to_string),
        signup_date: NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date"),
        segment: Segment::MidMarket,
    }
}

#[test]
fn customer_values_follow_column_order() {
    let values = sample_customer(Some("Boston")).values();
    assert_eq!(values.len(), CUSTOMERS.columns.len());
    assert_eq!(values[0], Value::Int(7));
    assert_eq!(values[3], Value::Text("Boston".to_string()));
    assert_eq!(values[5], Value::Text("mid-market".to_string()));
}

#[test]
fn missing_city_becomes_null() {
    let values = sample_customer(None).values();
    assert!(values[3].is_null());
    assert_eq!(values[3].to_csv(&CUSTOMERS.columns[3]), "");
}

#[test]
fn money_renders_with_table_scale() {
    let order = Order {
        order_id: 1,
        customer_id: 2,
        order_date: NaiveDate::from_ymd_opt(2024, 11, 30).expect("valid date"),
        product_id: 3,
        quantity: 2,
        unit_price: 12.5,
        total_amount: 25.0,
        status: OrderStatus::Returned,
        payment_method: PaymentMethod::Paypal,
    };
    let values = order.values();
    assert_eq!(values[6].to_csv(&ORDERS.columns[6]), "25.00");
    assert_eq!(values[2].to_csv(&ORDERS.columns[2]), "2024-11-30");
}

#[test]
fn enums_serialize_with_their_sql_labels() {
    let json = serde_json::to_string(&EventType::CheckoutStart).expect("serialize");
    assert_eq!(json, "\"checkout_start\"");
    let json = serde_json::to_string(&Segment::MidMarket).expect("serialize");
    assert_eq!(json, "\"mid-market\"");
}

#[test]
fn tables_are_listed_in_load_order() {
    let names: Vec<&str> = TABLES.iter().map(|table| table.name).collect();
    assert_eq!(names, ["customers", "products", "orders", "events"]);
}
