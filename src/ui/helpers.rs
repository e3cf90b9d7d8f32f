use crossterm::style::Stylize;

use crate::models::Contact;

/// Width of the rule printed under each contact card.
const RULE_WIDTH: usize = 30;

/// Lines of a contact card. The email line is left out when there is no email.
pub(crate) fn contact_lines(contact: &Contact) -> Vec<String> {
    let mut lines = vec![
        format!("  {}", format!("Name:  {}", contact.name).bold()),
        format!("  Phone: {}", contact.phone),
    ];
    if let Some(email) = &contact.email {
        lines.push(format!("  Email: {email}"));
    }
    lines.push("-".repeat(RULE_WIDTH).cyan().to_string());
    lines
}

/// Pluralize "contact" for result counts.
pub(crate) fn contact_count(count: usize) -> String {
    if count == 1 {
        "1 contact".to_string()
    } else {
        format!("{count} contacts")
    }
}
