use std::io::{BufRead, Write};

use anyhow::Result;
use crossterm::style::Stylize;

use crate::book::{ContactBook, ContactUpdate};
use crate::error::ContactError;

use super::forms::{replacement_prompt, MenuChoice};
use super::helpers::{contact_count, contact_lines};
use super::terminal::Console;

/// State behind the menu: the contact book and nothing else.
pub struct App {
    book: ContactBook,
}

impl App {
    pub fn new(book: ContactBook) -> Self {
        Self { book }
    }

    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    pub fn draw_intro<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let path = self.book.store().path();
        if path.exists() {
            console.success(format!(
                "Loaded {} from {}.",
                contact_count(self.book.len()),
                path.display()
            ))?;
        }
        Ok(())
    }

    pub fn draw_menu<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.say("\n--- Contact Management System ---".yellow().bold())?;
        for choice in MenuChoice::ALL {
            console.say(choice)?;
        }
        Ok(())
    }

    pub fn draw_goodbye<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.say("Exiting program. Goodbye!".yellow())
    }

    /// Run one menu entry. Returns `true` once the user has asked to leave,
    /// either through Exit or by closing the input mid-prompt.
    pub fn handle_choice<R: BufRead, W: Write>(
        &mut self,
        choice: Option<MenuChoice>,
        console: &mut Console<R, W>,
    ) -> Result<bool> {
        match choice {
            Some(MenuChoice::Add) => self.add_contact(console),
            Some(MenuChoice::List) => self.display_all(console).map(|()| false),
            Some(MenuChoice::Search) => self.search_contacts(console),
            Some(MenuChoice::Update) => self.update_contact(console),
            Some(MenuChoice::Delete) => self.delete_contact(console),
            Some(MenuChoice::Exit) => Ok(true),
            None => {
                console.failure("Invalid choice. Please try again.")?;
                Ok(false)
            }
        }
    }

    fn add_contact<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<bool> {
        console.heading("Add a New Contact")?;
        let Some(name) = console.ask("Enter name: ")? else {
            return Ok(true);
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            report(console, ContactError::MissingField { field: "Name" })?;
            return Ok(false);
        }
        // Reject duplicates before asking for the remaining fields.
        if self.book.contains(&name) {
            report(console, ContactError::DuplicateName { name })?;
            return Ok(false);
        }

        let Some(phone) = console.ask("Enter phone number: ")? else {
            return Ok(true);
        };
        let Some(email) = console.ask("Enter email (optional, press Enter to skip): ")? else {
            return Ok(true);
        };

        match self.book.add(&name, &phone, Some(email.as_str())) {
            Ok(contact) => {
                let message = format!("\nSuccess! Contact for '{}' added.", contact.name);
                console.success(message)?;
            }
            Err(err) => report(console, err)?,
        }
        Ok(false)
    }

    fn display_all<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.heading("All Contacts")?;
        if self.book.is_empty() {
            return console.say("Your contact book is empty.");
        }
        for (index, contact) in self.book.list().iter().enumerate() {
            console.say(format!("{}.", index + 1).bold())?;
            for line in contact_lines(contact) {
                console.say(line)?;
            }
        }
        Ok(())
    }

    fn search_contacts<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<bool> {
        console.heading("Search for a Contact")?;
        let Some(term) = console.ask("Enter a name or part of a name to search for: ")? else {
            return Ok(true);
        };

        let found = self.book.search(&term);
        if found.is_empty() {
            console.failure(format!("No contacts found matching '{}'.", term.trim()))?;
            return Ok(false);
        }
        console.success(format!("\nFound {}:", contact_count(found.len())))?;
        for contact in found {
            for line in contact_lines(contact) {
                console.say(line)?;
            }
        }
        Ok(false)
    }

    fn update_contact<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<bool> {
        console.heading("Update a Contact")?;
        let Some(name) = console.ask("Enter the exact name of the contact to update: ")? else {
            return Ok(true);
        };
        let Some(current) = self.book.get(name.trim()).cloned() else {
            report(console, ContactError::NotFound { name })?;
            return Ok(false);
        };

        console.say(format!(
            "\nUpdating contact for '{}'. Leave blank to keep current value.",
            current.name
        ))?;
        let Some(phone) = console.ask(&replacement_prompt("phone", Some(&current.phone)))? else {
            return Ok(true);
        };
        let Some(email) = console.ask(&replacement_prompt("email", current.email.as_deref()))?
        else {
            return Ok(true);
        };

        let update = ContactUpdate {
            phone: Some(phone),
            email: Some(email),
        };
        match self.book.update(&current.name, update) {
            Ok(_) => console.success("Contact updated successfully!")?,
            Err(err) => report(console, err)?,
        }
        Ok(false)
    }

    fn delete_contact<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<bool> {
        console.heading("Delete a Contact")?;
        let Some(name) = console.ask("Enter the exact name of the contact to delete: ")? else {
            return Ok(true);
        };

        match self.book.delete(name.trim()) {
            Ok(removed) => {
                console.success(format!("Contact '{}' deleted successfully.", removed.name))?
            }
            Err(err) => report(console, err)?,
        }
        Ok(false)
    }
}

/// Print an operation error and hand control back to the menu. Errors the
/// menu cannot carry on from are passed up instead.
fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, err: ContactError) -> Result<()> {
    if !err.is_recoverable() {
        return Err(err.into());
    }
    let mut message = format!("Error: {err}");
    if let Some(source) = std::error::Error::source(&err) {
        message.push_str(&format!(": {source}"));
    }
    console.failure(format!("{message}."))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use super::*;
    use crate::store::Store;
    use crate::ui::terminal::run_with;

    struct Session {
        _dir: tempfile::TempDir,
        app: App,
    }

    impl Session {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let store = Store::new(dir.path().join("contacts.csv"));
            let app = App::new(ContactBook::open(store).unwrap());
            Self { _dir: dir, app }
        }

        /// Feed `script` to the menu loop and return everything it printed.
        fn run(&mut self, script: &str) -> String {
            let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
            run_with(&mut self.app, &mut console).unwrap();
            String::from_utf8(console.into_output()).unwrap()
        }
    }

    #[test]
    fn test_add_and_list() {
        let mut session = Session::new();
        let output = session.run("1\nAnn\n555-1111\n\n1\nBob\n555-2222\nbob@x.com\n2\n6\n");

        assert!(output.contains("Success! Contact for 'Ann' added."));
        assert!(output.contains("Success! Contact for 'Bob' added."));
        assert!(output.contains("Phone: 555-1111"));
        assert!(output.contains("Email: bob@x.com"));
        assert!(output.contains("Exiting program. Goodbye!"));
        assert_eq!(session.app.book().len(), 2);
        assert_eq!(session.app.book().list()[0].email, None);
    }

    #[test]
    fn test_list_empty_book() {
        let mut session = Session::new();
        let output = session.run("2\n6\n");
        assert!(output.contains("Your contact book is empty."));
    }

    #[test]
    fn test_duplicate_name_skips_remaining_prompts() {
        let mut session = Session::new();
        let output = session.run("1\nAnn\n555-1111\n\n1\nANN\n6\n");

        assert!(output.contains("Error: a contact named 'ANN' already exists."));
        assert_eq!(session.app.book().len(), 1);
        assert!(output.contains("Exiting program. Goodbye!"));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut session = Session::new();
        let output = session.run("1\n   \n6\n");
        assert!(output.contains("Error: Name is required."));
        assert!(session.app.book().is_empty());
    }

    #[test]
    fn test_search_reports_matches_and_misses() {
        let mut session = Session::new();
        let output =
            session.run("1\nAnn\n555-1111\n\n1\nBob\n555-2222\n\n3\nan\n3\nzed\n6\n");

        assert!(output.contains("Found 1 contact:"));
        assert!(output.contains("No contacts found matching 'zed'."));
    }

    #[test]
    fn test_search_matches_term_as_typed() {
        let mut session = Session::new();
        let output = session.run("1\nJoanna\n555-1111\n\n3\n ann\n3\n \n6\n");

        assert!(output.contains("No contacts found matching 'ann'."));
        assert_eq!(output.matches("Found 1 contact:").count(), 0);
    }

    #[test]
    fn test_empty_search_lists_everyone() {
        let mut session = Session::new();
        let output = session.run("1\nAnn\n555-1111\n\n1\nBob\n555-2222\n\n3\n\n6\n");
        assert!(output.contains("Found 2 contacts:"));
    }

    #[test]
    fn test_update_keeps_blank_fields() {
        let mut session = Session::new();
        let output = session.run("1\nBob\n555-2222\nbob@x.com\n4\nbob\n\n\n6\n");

        assert!(output.contains("Enter new phone (555-2222): "));
        assert!(output.contains("Enter new email (bob@x.com): "));
        assert!(output.contains("Contact updated successfully!"));
        let bob = &session.app.book().list()[0];
        assert_eq!(bob.phone, "555-2222");
        assert_eq!(bob.email.as_deref(), Some("bob@x.com"));
    }

    #[test]
    fn test_update_unknown_contact() {
        let mut session = Session::new();
        let output = session.run("4\nZed\n6\n");
        assert!(output.contains("Error: contact 'Zed' not found."));
    }

    #[test]
    fn test_delete_is_case_insensitive() {
        let mut session = Session::new();
        let output = session.run("1\nAnn\n555-1111\n\n5\nann\n5\nann\n6\n");

        assert!(output.contains("Contact 'Ann' deleted successfully."));
        assert!(output.contains("Error: contact 'ann' not found."));
        assert!(session.app.book().is_empty());
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let mut session = Session::new();
        let output = session.run("9\nhello\n6\n");
        assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
        assert_eq!(output.matches("Enter your choice (1-6): ").count(), 3);
    }

    #[test]
    fn test_closed_input_exits() {
        let mut session = Session::new();
        let output = session.run("1\nAnn\n");
        assert!(session.app.book().is_empty());
        assert_eq!(output.matches("Exiting program. Goodbye!").count(), 1);

        let output = session.run("4\n");
        assert_eq!(output.matches("Exiting program. Goodbye!").count(), 1);

        let output = session.run("");
        assert_eq!(output.matches("Exiting program. Goodbye!").count(), 1);
    }

    #[test]
    fn test_unwritable_store_is_reported_and_menu_continues() {
        let mut session = Session::new();
        session.run("1\nAnn\n555-1111\n\n6\n");

        let path = session.app.book().store().path().to_path_buf();
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        let output = session.run("1\nBob\n555-2222\n\n2\n6\n");
        assert!(output.contains("Error: cannot write contacts to"));
        // The io error behind it is shown once, after the path.
        assert!(output.contains("contacts.csv: "));
        assert!(output.contains("Exiting program. Goodbye!"));
        assert_eq!(session.app.book().len(), 1);
    }

    #[test]
    fn test_intro_mentions_loaded_contacts() {
        let mut session = Session::new();
        session.run("1\nAnn\n555-1111\n\n6\n");
        let output = session.run("6\n");
        assert!(output.contains("Loaded 1 contact from"));
    }
}
