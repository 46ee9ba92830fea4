use rand::Rng;

use shopgen_core::catalog::{PAYMENT_WEIGHTS, QUANTITY_WEIGHTS};
use shopgen_core::{Customer, Order, OrderStatus, Product};

use super::CUSTOMER_PARETO_ALPHA;
use crate::errors::GenerationError;
use crate::model::{DUPLICATE_ORDER_ROWS, GenerateOptions};
use crate::sampling::{Weighted, pareto_index, pick, round_currency, seasonal_date};

/// Uniform draws below this are cancelled.
pub const CANCELLED_THRESHOLD: f64 = 0.10;
/// Uniform draws below this (and above the cancel threshold) are returned.
pub const RETURNED_THRESHOLD: f64 = 0.15;

/// Generate `options.orders` orders followed by [`DUPLICATE_ORDER_ROWS`]
/// verbatim copies of a consecutive run taken from the 81% mark.
pub fn generate_orders<R: Rng + ?Sized>(
    options: &GenerateOptions,
    customers: &[Customer],
    products: &[Product],
    rng: &mut R,
) -> Result<Vec<Order>, GenerationError> {
    if customers.is_empty() || products.is_empty() {
        return Err(GenerationError::InvalidConfig(
            "orders need at least one customer and one product".to_string(),
        ));
    }

    let quantities = Weighted::new(QUANTITY_WEIGHTS)?;
    let payments = Weighted::new(PAYMENT_WEIGHTS)?;
    let duplicate_start = rng.random_range(options.duplicate_window());

    let mut orders = Vec::with_capacity(options.orders + DUPLICATE_ORDER_ROWS);
    for order_id in 1..=options.orders as i32 {
        let customer = &customers[pareto_index(rng, customers.len(), CUSTOMER_PARETO_ALPHA)];
        let product = pick(products, rng)?;
        let order_date = seasonal_date(rng, options.date_start, options.date_end);
        let quantity = quantities.sample(rng);
        let unit_price = product.list_price;
        let total_amount = round_currency(unit_price * f64::from(quantity));
        let status = status_for(rng.random::<f64>());
        let payment_method = payments.sample(rng);

        orders.push(Order {
            order_id,
            customer_id: customer.customer_id,
            order_date,
            product_id: product.product_id,
            quantity,
            unit_price,
            total_amount,
            status,
            payment_method,
        });
    }

    let duplicates = orders[duplicate_start..duplicate_start + DUPLICATE_ORDER_ROWS].to_vec();
    orders.extend(duplicates);

    Ok(orders)
}

fn status_for(roll: f64) -> OrderStatus {
    if roll < CANCELLED_THRESHOLD {
        OrderStatus::Cancelled
    } else if roll < RETURNED_THRESHOLD {
        OrderStatus::Returned
    } else {
        OrderStatus::Completed
    }
}
