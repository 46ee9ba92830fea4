use rand::Rng;

use shopgen_core::Product;
use shopgen_core::catalog::{CATEGORIES, PRODUCT_ADJECTIVES, subcategory_count};

use crate::errors::GenerationError;
use crate::model::GenerateOptions;
use crate::sampling::{pick, round_currency};

/// Share of evenly spread products planted with list price below cost.
pub const MISPRICE_PROBABILITY: f64 = 0.03;

const COST_RANGE: (f64, f64) = (5.0, 200.0);
const MARKUP_RANGE: (f64, f64) = (1.2, 3.0);
const MISPRICE_RANGE: (f64, f64) = (0.5, 0.9);

/// Spread products evenly over the taxonomy, then top up with random
/// subcategories until the requested count is reached. Top-up rows are
/// always correctly priced.
pub fn generate_products<R: Rng + ?Sized>(
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<Vec<Product>, GenerationError> {
    let per_subcategory = options.products / subcategory_count();
    let mut products = Vec::with_capacity(options.products);

    for (category, subcategories) in CATEGORIES {
        for subcategory in *subcategories {
            for _ in 0..per_subcategory {
                let product_id = products.len() as i32 + 1;
                products.push(make_product(product_id, category, subcategory, true, rng)?);
            }
        }
    }

    while products.len() < options.products {
        let (category, subcategories) = pick(CATEGORIES, rng)?;
        let subcategory = pick(*subcategories, rng)?;
        let product_id = products.len() as i32 + 1;
        products.push(make_product(product_id, category, subcategory, false, rng)?);
    }

    Ok(products)
}

fn make_product<R: Rng + ?Sized>(
    product_id: i32,
    category: &str,
    subcategory: &str,
    allow_misprice: bool,
    rng: &mut R,
) -> Result<Product, GenerationError> {
    let adjective = pick(PRODUCT_ADJECTIVES, rng)?;
    let cost_price = round_currency(rng.random_range(COST_RANGE.0..=COST_RANGE.1));
    let (low, high) = if allow_misprice && rng.random::<f64>() < MISPRICE_PROBABILITY {
        MISPRICE_RANGE
    } else {
        MARKUP_RANGE
    };
    let list_price = round_currency(cost_price * rng.random_range(low..=high));

    Ok(Product {
        product_id,
        name: format!(
            "{adjective} {} {product_id}",
            subcategory.trim_end_matches('s')
        ),
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        cost_price,
        list_price,
    })
}
