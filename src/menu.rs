//! Numbered text menu over the user store.
//!
//! Reads one choice per iteration, runs it, and prints the outcome. Failures
//! inside an action are reported and the menu is shown again; any input that
//! is not one of options 1-7 (or end of input) ends the loop.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use futures::TryStreamExt;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::config::AppConfig;
use crate::users::{import, repo::UserStore, schema};

pub const MENU_TEXT: &str = "
Enter the option:
    1. CREATE TABLE users
    2. Import data from CSV file
    3. Add new record to database
    4. Delete a record from id of user
    5. Delete all records from user table
    6. Query all records from user table
    7. Update a record using id of user
    8. Press any key to quit
";

const CONFIRM_DELETE_ALL: &str =
    "Are you sure? Press y or Yes to continue. Or, Press n or No to skip. ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateTable,
    Import,
    AddRecord,
    DeleteRecord,
    DeleteAll,
    ListRecords,
    UpdateRecord,
    /// Anything else, including option 8.
    Quit,
}

impl MenuChoice {
    // Choices and the delete-all confirmation are trimmed; ids are not.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::CreateTable,
            "2" => MenuChoice::Import,
            "3" => MenuChoice::AddRecord,
            "4" => MenuChoice::DeleteRecord,
            "5" => MenuChoice::DeleteAll,
            "6" => MenuChoice::ListRecords,
            "7" => MenuChoice::UpdateRecord,
            _ => MenuChoice::Quit,
        }
    }
}

fn is_valid_id(input: &str) -> bool {
    lazy_static! {
        static ref ID_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();
    }
    ID_RE.is_match(input)
}

/// Digits-only ids that fit an `i64`.
fn parse_id(input: &str) -> Option<i64> {
    if is_valid_id(input) {
        input.parse().ok()
    } else {
        None
    }
}

fn is_confirmation(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

pub struct Menu<'a, R, W> {
    store: &'a UserStore,
    import_path: &'a Path,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a UserStore, config: &'a AppConfig, input: R, output: W) -> Self {
        Self {
            store,
            import_path: &config.import_path,
            input,
            output,
        }
    }

    /// Run until the user picks anything other than options 1-7. Only a
    /// terminal I/O failure while reading the choice ends it with an error.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let Some(line) = self.prompt(MENU_TEXT)? else {
                debug!("end of input");
                break;
            };
            let choice = MenuChoice::parse(&line);
            debug!(?choice, "menu choice");
            if choice == MenuChoice::Quit {
                break;
            }
            if let Err(e) = self.dispatch(choice).await {
                debug!(error = %format!("{e:#}"), ?choice, "menu action failed");
                writeln!(self.output, "Error: {e:#}")?;
            }
        }
        Ok(())
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> anyhow::Result<()> {
        match choice {
            MenuChoice::CreateTable => self.create_table().await,
            MenuChoice::Import => self.import().await,
            MenuChoice::AddRecord => self.add_record().await,
            MenuChoice::DeleteRecord => self.delete_record().await,
            MenuChoice::DeleteAll => self.delete_all().await,
            MenuChoice::ListRecords => self.list_records().await,
            MenuChoice::UpdateRecord => self.update_record().await,
            MenuChoice::Quit => Ok(()),
        }
    }

    async fn create_table(&mut self) -> anyhow::Result<()> {
        self.store
            .create_schema()
            .await
            .context("creating users table")?;
        writeln!(self.output, "User table was successfully created.")?;
        Ok(())
    }

    async fn import(&mut self) -> anyhow::Result<()> {
        let rows = import::load(self.import_path)?;
        self.store
            .insert(&rows)
            .await
            .context("inserting imported rows")?;
        writeln!(self.output, "Successfully inserted data into user table.")?;
        Ok(())
    }

    async fn add_record(&mut self) -> anyhow::Result<()> {
        let mut row = Vec::with_capacity(schema::COLUMNS.len());
        for column in schema::COLUMNS {
            let Some(value) = self.prompt(&format!("Enter {column}: "))? else {
                debug!(column, "input ended before record was complete");
                return Ok(());
            };
            row.push(value);
        }
        let echoed: Vec<String> = row.iter().map(|v| format!("{v:?}")).collect();
        writeln!(self.output, "({})", echoed.join(", "))?;

        self.store
            .insert(std::slice::from_ref(&row))
            .await
            .context("inserting record")?;
        writeln!(self.output, "Successfully inserted data into user table.")?;
        Ok(())
    }

    async fn delete_record(&mut self) -> anyhow::Result<()> {
        let Some(id) = self.ask_id()? else {
            return Ok(());
        };
        self.store
            .delete_by_id(id)
            .await
            .context("deleting record")?;
        writeln!(self.output, "Successfully deleted record from user table")?;
        Ok(())
    }

    async fn delete_all(&mut self) -> anyhow::Result<()> {
        let Some(answer) = self.prompt(CONFIRM_DELETE_ALL)? else {
            return Ok(());
        };
        if !is_confirmation(&answer) {
            debug!("delete all declined");
            return Ok(());
        }
        self.store
            .delete_all()
            .await
            .context("deleting all records")?;
        writeln!(self.output, "Successfully deleted all records from user table")?;
        Ok(())
    }

    async fn list_records(&mut self) -> anyhow::Result<()> {
        let store = self.store;
        let mut users = store.select_all();
        while let Some(user) = users.try_next().await.context("reading records")? {
            writeln!(self.output, "{user}")?;
        }
        Ok(())
    }

    async fn update_record(&mut self) -> anyhow::Result<()> {
        let Some(id) = self.ask_id()? else {
            return Ok(());
        };
        let Some(column) = self.prompt(&schema::column_prompt())? else {
            return Ok(());
        };
        let column = column.trim();
        let Some(value) = self.prompt(&format!("Enter value of {column}: "))? else {
            return Ok(());
        };
        self.store
            .update_column(column, id, &value)
            .await
            .context("updating record")?;
        writeln!(self.output, "Successfully updated {column} of user {id}")?;
        Ok(())
    }

    /// Ask for a user id. Rejected input is reported and yields `None`, as
    /// does end of input.
    fn ask_id(&mut self) -> io::Result<Option<i64>> {
        let Some(input) = self.prompt("Enter id of user: ")? else {
            return Ok(None);
        };
        let id = parse_id(&input);
        if id.is_none() {
            debug!(input = %input, "rejected user id");
            writeln!(self.output, "Invalid id {input:?}: expected digits only.")?;
        }
        Ok(id)
    }

    /// Prompt and read one line without its line ending. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
