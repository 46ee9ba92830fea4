use std::fmt;

/// SQL column type as written in the DuckDB DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Varchar,
    Decimal { precision: u8, scale: u8 },
    Date,
    Timestamp,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => f.write_str("INTEGER"),
            ColumnType::Varchar => f.write_str("VARCHAR"),
            ColumnType::Decimal { precision, scale } => write!(f, "DECIMAL({precision},{scale})"),
            ColumnType::Date => f.write_str("DATE"),
            ColumnType::Timestamp => f.write_str("TIMESTAMP"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub primary_key: bool,
}

impl ColumnDef {
    const fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self {
            name,
            column_type,
            primary_key: false,
        }
    }

    const fn key(name: &'static str) -> Self {
        Self {
            name,
            column_type: ColumnType::Integer,
            primary_key: true,
        }
    }
}

/// Fixed definition of one of the four demo tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
}

impl TableDef {
    pub fn drop_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", self.name)
    }

    pub fn create_sql(&self) -> String {
        let columns: Vec<String> = self
            .columns
            .iter()
            .map(|column| {
                if column.primary_key {
                    format!("{} {} PRIMARY KEY", column.name, column.column_type)
                } else {
                    format!("{} {}", column.name, column.column_type)
                }
            })
            .collect();
        format!("CREATE TABLE {} ({})", self.name, columns.join(", "))
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.name).collect()
    }
}

const MONEY: ColumnType = ColumnType::Decimal {
    precision: 10,
    scale: 2,
};

pub const CUSTOMERS: TableDef = TableDef {
    name: "customers",
    columns: &[
        ColumnDef::key("customer_id"),
        ColumnDef::new("name", ColumnType::Varchar),
        ColumnDef::new("email", ColumnType::Varchar),
        ColumnDef::new("city", ColumnType::Varchar),
        ColumnDef::new("signup_date", ColumnType::Date),
        ColumnDef::new("segment", ColumnType::Varchar),
    ],
};

pub const PRODUCTS: TableDef = TableDef {
    name: "products",
    columns: &[
        ColumnDef::key("product_id"),
        ColumnDef::new("name", ColumnType::Varchar),
        ColumnDef::new("category", ColumnType::Varchar),
        ColumnDef::new("subcategory", ColumnType::Varchar),
        ColumnDef::new("cost_price", MONEY),
        ColumnDef::new("list_price", MONEY),
    ],
};

// No key on order_id: the planted duplicate rows must load.
pub const ORDERS: TableDef = TableDef {
    name: "orders",
    columns: &[
        ColumnDef::new("order_id", ColumnType::Integer),
        ColumnDef::new("customer_id", ColumnType::Integer),
        ColumnDef::new("order_date", ColumnType::Date),
        ColumnDef::new("product_id", ColumnType::Integer),
        ColumnDef::new("quantity", ColumnType::Integer),
        ColumnDef::new("unit_price", MONEY),
        ColumnDef::new("total_amount", MONEY),
        ColumnDef::new("status", ColumnType::Varchar),
        ColumnDef::new("payment_method", ColumnType::Varchar),
    ],
};

pub const EVENTS: TableDef = TableDef {
    name: "events",
    columns: &[
        ColumnDef::new("event_id", ColumnType::Integer),
        ColumnDef::new("customer_id", ColumnType::Integer),
        ColumnDef::new("event_type", ColumnType::Varchar),
        ColumnDef::new("event_date", ColumnType::Timestamp),
        ColumnDef::new("session_id", ColumnType::Varchar),
        ColumnDef::new("device_type", ColumnType::Varchar),
    ],
};

/// Tables in load order. Drop in reverse.
pub const TABLES: [&TableDef; 4] = [&CUSTOMERS, &PRODUCTS, &ORDERS, &EVENTS];
