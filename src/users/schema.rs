//! Fixed layout of the `users` table and the statement text built from it.

use crate::error::StoreError;

pub const TABLE: &str = "users";

/// Non-id columns in insert order. Import files and the add-record prompts
/// follow this order too.
pub const COLUMNS: [&str; 12] = [
    "first_name",
    "last_name",
    "company_name",
    "address",
    "city",
    "county",
    "state",
    "zip",
    "phone1",
    "phone2",
    "email",
    "web",
];

pub const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name CHAR(255) NOT NULL,
        last_name CHAR(225) NOT NULL,
        company_name CHAR(225) NOT NULL,
        address CHAR(225) NOT NULL,
        city CHAR(225) NOT NULL,
        county CHAR(225) NOT NULL,
        state CHAR(225) NOT NULL,
        zip REAL NOT NULL,
        phone1 CHAR(225) NOT NULL,
        phone2 CHAR(225),
        email CHAR(225) NOT NULL,
        web TEXT
    )
"#;

pub const INSERT_USER: &str = r#"
    INSERT INTO users
        (first_name, last_name, company_name, address, city, county, state, zip,
         phone1, phone2, email, web)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

pub const SELECT_ALL_USERS: &str = r#"
    SELECT id, first_name, last_name, company_name, address, city, county, state,
           zip, phone1, phone2, email, web
      FROM users
"#;

pub const DELETE_USER_BY_ID: &str = "DELETE FROM users WHERE id = ?";

pub const DELETE_ALL_USERS: &str = "DELETE FROM users";

/// Look up `name` in [`COLUMNS`]. The returned name is the one that ends up
/// in statement text, never the caller's string.
pub fn column(name: &str) -> Result<&'static str, StoreError> {
    COLUMNS
        .iter()
        .copied()
        .find(|c| *c == name)
        .ok_or_else(|| StoreError::UnknownColumn(name.to_string()))
}

pub fn update_column_sql(column: &'static str) -> String {
    format!("UPDATE {TABLE} SET {column} = ? WHERE id = ?")
}

pub fn column_prompt() -> String {
    format!(
        "\nWhich column would you like to update? Please make sure column is one of the following:\n({})\n",
        COLUMNS.join(", ")
    )
}
