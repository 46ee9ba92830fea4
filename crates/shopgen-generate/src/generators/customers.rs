use rand::Rng;
use sha2::{Digest, Sha256};

use shopgen_core::Customer;
use shopgen_core::catalog::{CITIES, EMAIL_DOMAINS, FIRST_NAMES, LAST_NAMES, SEGMENT_WEIGHTS};

use crate::errors::GenerationError;
use crate::model::GenerateOptions;
use crate::sampling::{Weighted, pick, uniform_date};

/// Share of customers stored without a city.
pub const NULL_CITY_PROBABILITY: f64 = 0.03;

pub fn generate_customers<R: Rng + ?Sized>(
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<Vec<Customer>, GenerationError> {
    let segments = Weighted::new(SEGMENT_WEIGHTS)?;
    let mut customers = Vec::with_capacity(options.customers);

    for customer_id in 1..=options.customers as i32 {
        let first = *pick(FIRST_NAMES, rng)?;
        let last = *pick(LAST_NAMES, rng)?;
        let email = make_email(first, last, customer_id, rng)?;
        let city = if rng.random::<f64>() > NULL_CITY_PROBABILITY {
            Some(pick(CITIES, rng)?.to_string())
        } else {
            None
        };
        let signup_date = uniform_date(rng, options.date_start, options.date_end);
        let segment = segments.sample(rng);

        customers.push(Customer {
            customer_id,
            name: format!("{first} {last}"),
            email,
            city,
            signup_date,
            segment,
        });
    }

    Ok(customers)
}

fn make_email<R: Rng + ?Sized>(
    first: &str,
    last: &str,
    customer_id: i32,
    rng: &mut R,
) -> Result<String, GenerationError> {
    let digest = Sha256::digest(format!("{first}{last}{customer_id}").as_bytes());
    let tag = &hex::encode(digest)[..4];
    let domain = pick(EMAIL_DOMAINS, rng)?;
    Ok(format!(
        "{}.{}{tag}@{domain}",
        first.to_lowercase(),
        last.to_lowercase()
    ))
}
