//! Static lookup tables used by the generator.
//!
//! Weighted tables pair each value with a relative weight; weights need not
//! sum to one.

use crate::error::{Error, Result};
use crate::records::{DeviceType, PaymentMethod, Segment};

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Christopher", "Karen", "Daniel", "Lisa", "Matthew", "Nancy", "Anthony", "Betty", "Mark",
    "Margaret", "Steven", "Sandra", "Paul", "Ashley", "Andrew", "Dorothy", "Joshua", "Kimberly",
    "Kenneth", "Emily", "Kevin", "Donna", "Brian", "Michelle", "George", "Carol", "Timothy",
    "Amanda", "Ronald", "Melissa", "Edward", "Deborah", "Jason", "Stephanie", "Jeffrey", "Rebecca",
    "Ryan", "Sharon", "Jacob", "Laura", "Gary", "Cynthia", "Nicholas", "Kathleen", "Eric", "Amy",
    "Jonathan", "Angela", "Stephen", "Shirley", "Larry", "Anna",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright", "Scott",
    "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera",
    "Campbell", "Mitchell", "Carter", "Roberts", "Chen", "Patel", "Shah", "Kim", "Park", "Singh",
];

pub const CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia", "San Antonio",
    "San Diego", "Dallas", "San Jose", "Austin", "Jacksonville", "Fort Worth", "Columbus",
    "Charlotte", "Indianapolis", "San Francisco", "Seattle", "Denver", "Washington", "Nashville",
    "Oklahoma City", "El Paso", "Boston", "Portland", "Las Vegas", "Memphis", "Louisville",
    "Baltimore", "Milwaukee",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "company.io",
    "mail.com",
];

pub const SEGMENT_WEIGHTS: &[(Segment, f64)] = &[
    (Segment::Enterprise, 0.15),
    (Segment::MidMarket, 0.30),
    (Segment::Smb, 0.55),
];

/// Category to subcategory taxonomy. Products are spread evenly across it.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Electronics",
        &["Laptops", "Phones", "Tablets", "Accessories", "Audio"],
    ),
    (
        "Clothing",
        &["Tops", "Bottoms", "Outerwear", "Footwear", "Activewear"],
    ),
    (
        "Home & Kitchen",
        &["Cookware", "Furniture", "Decor", "Appliances", "Bedding"],
    ),
    (
        "Office Supplies",
        &[
            "Writing",
            "Paper",
            "Organization",
            "Tech Accessories",
            "Bags",
        ],
    ),
];

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Pro", "Ultra", "Basic", "Premium", "Lite", "Max", "Classic", "Elite", "Essential", "Advanced",
];

pub const PAYMENT_WEIGHTS: &[(PaymentMethod, f64)] = &[
    (PaymentMethod::CreditCard, 0.45),
    (PaymentMethod::DebitCard, 0.25),
    (PaymentMethod::Paypal, 0.20),
    (PaymentMethod::WireTransfer, 0.10),
];

pub const DEVICE_WEIGHTS: &[(DeviceType, f64)] = &[
    (DeviceType::Desktop, 0.40),
    (DeviceType::Mobile, 0.45),
    (DeviceType::Tablet, 0.15),
];

pub const QUANTITY_WEIGHTS: &[(i32, f64)] = &[(1, 50.0), (2, 25.0), (3, 15.0), (4, 7.0), (5, 3.0)];

/// Number of leaf subcategories across the whole taxonomy.
pub fn subcategory_count() -> usize {
    CATEGORIES.iter().map(|(_, subcats)| subcats.len()).sum()
}

/// Check that every table can be sampled from.
pub fn validate_catalog() -> Result<()> {
    let lists: [(&str, &[&str]); 5] = [
        ("first names", FIRST_NAMES),
        ("last names", LAST_NAMES),
        ("cities", CITIES),
        ("email domains", EMAIL_DOMAINS),
        ("product adjectives", PRODUCT_ADJECTIVES),
    ];
    for (label, values) in lists {
        if values.is_empty() {
            return Err(Error::InvalidCatalog(format!("{label} list is empty")));
        }
    }

    if CATEGORIES.is_empty() {
        return Err(Error::InvalidCatalog("category taxonomy is empty".to_string()));
    }
    if let Some((category, _)) = CATEGORIES.iter().find(|(_, subcats)| subcats.is_empty()) {
        return Err(Error::InvalidCatalog(format!(
            "category '{category}' has no subcategories"
        )));
    }

    check_weights("segment", SEGMENT_WEIGHTS)?;
    check_weights("payment method", PAYMENT_WEIGHTS)?;
    check_weights("device type", DEVICE_WEIGHTS)?;
    check_weights("quantity", QUANTITY_WEIGHTS)?;
    Ok(())
}

fn check_weights<T>(label: &str, entries: &[(T, f64)]) -> Result<()> {
    if entries.is_empty() {
        return Err(Error::InvalidCatalog(format!("{label} weights are empty")));
    }
    if entries
        .iter()
        .any(|(_, weight)| !weight.is_finite() || *weight < 0.0)
    {
        return Err(Error::InvalidCatalog(format!(
            "{label} weights must be finite and non-negative"
        )));
    }
    if entries.iter().all(|(_, weight)| *weight == 0.0) {
        return Err(Error::InvalidCatalog(format!(
            "{label} weights sum to zero"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        assert!(validate_catalog().is_ok());
        assert_eq!(subcategory_count(), 20);
    }

    #[test]
    fn zero_weights_are_rejected() {
        let err = check_weights("test", &[("a", 0.0), ("b", 0.0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidCatalog(_)));
    }
}
