use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::Error;

macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($label => Ok($name::$variant),)+
                    _ => Err(Error::UnknownVariant {
                        kind: $kind,
                        value: value.to_string(),
                    }),
                }
            }
        }
    };
}

labelled_enum! {
    /// Customer account tier.
    Segment, "segment" {
        Enterprise => "enterprise",
        MidMarket => "mid-market",
        Smb => "smb",
    }
}

labelled_enum! {
    /// Final state of an order.
    OrderStatus, "order status" {
        Completed => "completed",
        Cancelled => "cancelled",
        Returned => "returned",
    }
}

labelled_enum! {
    PaymentMethod, "payment method" {
        CreditCard => "credit_card",
        DebitCard => "debit_card",
        Paypal => "paypal",
        WireTransfer => "wire_transfer",
    }
}

labelled_enum! {
    DeviceType, "device type" {
        Desktop => "desktop",
        Mobile => "mobile",
        Tablet => "tablet",
    }
}

labelled_enum! {
    /// Funnel stage of a session event, declared in funnel order.
    EventType, "event type" {
        PageView => "page_view",
        AddToCart => "add_to_cart",
        CheckoutStart => "checkout_start",
        Purchase => "purchase",
    }
}

impl EventType {
    /// Stage that must precede this one within the same session.
    pub fn predecessor(self) -> Option<EventType> {
        match self {
            EventType::PageView => None,
            EventType::AddToCart => Some(EventType::PageView),
            EventType::CheckoutStart => Some(EventType::AddToCart),
            EventType::Purchase => Some(EventType::CheckoutStart),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: i32,
    pub name: String,
    pub email: String,
    /// Intentionally absent for a small share of customers.
    pub city: Option<String>,
    pub signup_date: NaiveDate,
    pub segment: Segment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub cost_price: f64,
    pub list_price: f64,
}

impl Product {
    /// True for the planted rows whose list price is below cost.
    pub fn is_mispriced(&self) -> bool {
        self.list_price < self.cost_price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i32,
    pub customer_id: i32,
    pub order_date: NaiveDate,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: i32,
    pub customer_id: i32,
    pub event_type: EventType,
    pub event_date: NaiveDateTime,
    pub session_id: String,
    pub device_type: DeviceType,
}

/// All generated rows for a single run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub events: Vec<Event>,
}
