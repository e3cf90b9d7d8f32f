//! The contact book: the in-memory collection plus the operations the menu
//! drives. Every mutation is followed by a full save; if that save fails the
//! mutation is undone so memory keeps matching what is on disk.

use tracing::{info, warn};

use crate::error::{ContactError, Result};
use crate::models::{normalize_email, Contact};
use crate::store::Store;

/// Replacement values for an update. Blank strings count as "keep current".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    /// New phone number, or `None`/blank to keep the current one.
    pub phone: Option<String>,
    /// New email address, or `None`/blank to keep the current one.
    pub email: Option<String>,
}

impl ContactUpdate {
    fn replacement(value: Option<&String>) -> Option<&str> {
        value.map(|v| v.trim()).filter(|v| !v.is_empty())
    }
}

/// Owns the contact list and the store it is saved to.
#[derive(Debug)]
pub struct ContactBook {
    /// Where every mutation is written.
    store: Store,
    /// Contacts in insertion order; looked up by linear scan.
    contacts: Vec<Contact>,
}

impl ContactBook {
    /// Load the collection from `store`.
    pub fn open(store: Store) -> Result<Self> {
        let contacts = store.load()?;
        Ok(Self { store, contacts })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Whether a contact already uses `name` (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.matches_name(name))
    }

    /// Append a new contact and persist. Rejects blank names and phones and any
    /// name already present under a case-insensitive comparison.
    pub fn add(&mut self, name: &str, phone: &str, email: Option<&str>) -> Result<&Contact> {
        let name = name.trim();
        let phone = phone.trim();
        if name.is_empty() {
            return Err(ContactError::MissingField { field: "Name" });
        }
        if phone.is_empty() {
            return Err(ContactError::MissingField { field: "Phone" });
        }
        if self.contains(name) {
            return Err(ContactError::DuplicateName {
                name: name.to_string(),
            });
        }

        self.contacts.push(Contact::new(name, phone, email));
        if let Err(err) = self.persist() {
            self.contacts.pop();
            return Err(err);
        }

        info!(name, "added contact");
        Ok(&self.contacts[self.contacts.len() - 1])
    }

    /// Every contact in insertion order.
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    /// Contacts whose name contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|contact| contact.name_contains(term))
            .collect()
    }

    /// Overwrite the phone and/or email of the contact named `name`. Only
    /// non-blank replacements are applied.
    pub fn update(&mut self, name: &str, update: ContactUpdate) -> Result<&Contact> {
        let index = self.position(name).ok_or_else(|| ContactError::NotFound {
            name: name.to_string(),
        })?;

        let previous = self.contacts[index].clone();
        {
            let contact = &mut self.contacts[index];
            if let Some(phone) = ContactUpdate::replacement(update.phone.as_ref()) {
                contact.phone = phone.to_string();
            }
            if let Some(email) = ContactUpdate::replacement(update.email.as_ref()) {
                contact.email = normalize_email(Some(email));
            }
        }

        if let Err(err) = self.persist() {
            self.contacts[index] = previous;
            return Err(err);
        }

        info!(name = %self.contacts[index].name, "updated contact");
        Ok(&self.contacts[index])
    }

    /// Remove the contact named `name` and persist. Nothing is written when the
    /// name is unknown.
    pub fn delete(&mut self, name: &str) -> Result<Contact> {
        let index = self.position(name).ok_or_else(|| ContactError::NotFound {
            name: name.to_string(),
        })?;

        let removed = self.contacts.remove(index);
        if let Err(err) = self.persist() {
            self.contacts.insert(index, removed);
            return Err(err);
        }

        info!(name = %removed.name, "deleted contact");
        Ok(removed)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|contact| contact.matches_name(name))
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.contacts).inspect_err(|err| {
            warn!(error = %err, "save failed, rolling back in-memory change");
        })
    }
}
