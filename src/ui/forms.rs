use std::fmt;

/// Entries of the main menu, in the order they are numbered.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Search,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::List,
        MenuChoice::Search,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    /// Parse the user's answer to the menu prompt. Anything other than one of
    /// the listed numbers is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::Update),
            "5" => Some(MenuChoice::Delete),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn number(self) -> usize {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::List => 2,
            MenuChoice::Search => 3,
            MenuChoice::Update => 4,
            MenuChoice::Delete => 5,
            MenuChoice::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Contact",
            MenuChoice::List => "Display All Contacts",
            MenuChoice::Search => "Search Contact",
            MenuChoice::Update => "Update Contact",
            MenuChoice::Delete => "Delete Contact",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Prompt for a replacement value that shows what is stored today.
pub(crate) fn replacement_prompt(field: &str, current: Option<&str>) -> String {
    format!("Enter new {field} ({}): ", current.unwrap_or("none"))
}
