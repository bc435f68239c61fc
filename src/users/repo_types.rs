use std::fmt;

use sqlx::error::BoxDynError;
use sqlx::sqlite::{SqliteTypeInfo, SqliteValueRef};
use sqlx::{Decode, FromRow, Sqlite, Type, TypeInfo, ValueRef};

/// Stored zip value. The column has REAL affinity, so numeric text is kept as
/// a number and anything else stays text.
#[derive(Debug, Clone, PartialEq)]
pub enum Zip {
    Number(f64),
    Text(String),
}

impl Type<Sqlite> for Zip {
    fn type_info() -> SqliteTypeInfo {
        <f64 as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        matches!(ty.name(), "REAL" | "INTEGER" | "NUMERIC" | "TEXT")
    }
}

impl<'r> Decode<'r, Sqlite> for Zip {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let is_text = value.type_info().name() == "TEXT";
        if is_text {
            Ok(Zip::Text(<String as Decode<Sqlite>>::decode(value)?))
        } else {
            Ok(Zip::Number(<f64 as Decode<Sqlite>>::decode(value)?))
        }
    }
}

impl fmt::Display for Zip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zip::Number(n) => write!(f, "{n:?}"),
            Zip::Text(t) => write!(f, "{t:?}"),
        }
    }
}

/// User record in the database.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserRecord {
    pub id: i64, // assigned by the store on insert
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub address: String,
    pub city: String,
    pub county: String,
    pub state: String,
    pub zip: Zip,
    pub phone1: String,
    pub phone2: Option<String>, // nullable
    pub email: String,
    pub web: Option<String>, // nullable
}

fn optional(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("{v:?}"),
        None => "None".to_string(),
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {:?}, {:?}, {:?}, {:?}, {:?}, {:?}, {:?}, {}, {:?}, {}, {:?}, {})",
            self.id,
            self.first_name,
            self.last_name,
            self.company_name,
            self.address,
            self.city,
            self.county,
            self.state,
            self.zip,
            self.phone1,
            optional(self.phone2.as_deref()),
            self.email,
            optional(self.web.as_deref()),
        )
    }
}
