//! Identifier allow-lists and trusted statement text.
//!
//! SQLite cannot bind identifiers, so table and column names that vary at a
//! call site must be concatenated into the statement. They come from these
//! enums and nowhere else.

/// Tables the tool manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Customers,
    Addresses,
}

impl Table {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customers => "Customers",
            Self::Addresses => "CustomerAddress",
        }
    }
}

/// Columns that may appear in a generated `COUNT` or `WHERE` fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// `*`, for counting whole rows.
    All,
    CustomerId,
    ShortName,
    AddressId,
}

impl Column {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "*",
            Self::CustomerId => "Customer_ID",
            Self::ShortName => "Customer_Short_Name",
            Self::AddressId => "Address_ID",
        }
    }
}

/// SQL text fixed at compile time.
///
/// Only `&'static str` is accepted, so a string read from the operator at run
/// time cannot be turned into a `TrustedSql`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustedSql(&'static str);

impl TrustedSql {
    pub const fn new(sql: &'static str) -> Self {
        Self(sql)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}
