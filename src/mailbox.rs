use crate::encoder::encode_word;
use crate::header::Role;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::slice::Iter;

/// Email address with optional addressee name
///
/// The address is used verbatim, no syntax checks are performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mailbox {
    pub name: Option<String>,
    pub addr: String,
}

impl Mailbox {
    /// Create new mailbox using email address and addressee name
    pub fn new<A: Into<String>>(name: Option<String>, addr: A) -> Self {
        Mailbox {
            name,
            addr: addr.into(),
        }
    }
}

/// Formats the mailbox for a header field
///
/// A non-empty name is written as an encoded-word followed by the address in
/// angle brackets, otherwise only the address is written.
impl Display for Mailbox {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self.name.as_ref() {
            Some(name) if !name.is_empty() => write!(f, "{} <{}>", encode_word(name), self.addr),
            _ => f.write_str(&self.addr),
        }
    }
}

/// Recipient lists of a message
///
/// Entries are formatted when they are added and stored as header-ready
/// strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    to: Vec<String>,
    cc: Vec<String>,
    bcc: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        AddressBook::default()
    }

    /// Format mailbox and append it to the list of role
    pub fn add(&mut self, role: Role, mbox: &Mailbox) {
        let entry = mbox.to_string();
        self.list_mut(role).push(entry);
    }

    /// Iterate over formatted entries of role
    pub fn iter(&self, role: Role) -> Iter<String> {
        self.list(role).iter()
    }

    pub fn is_empty(&self, role: Role) -> bool {
        self.list(role).is_empty()
    }

    /// Join entries of role with `", "`
    ///
    /// Returns `None` when the role has no entries.
    pub fn render(&self, role: Role) -> Option<String> {
        let list = self.list(role);
        if list.is_empty() {
            None
        } else {
            Some(list.join(", "))
        }
    }

    fn list(&self, role: Role) -> &Vec<String> {
        match role {
            Role::To => &self.to,
            Role::Cc => &self.cc,
            Role::Bcc => &self.bcc,
        }
    }

    fn list_mut(&mut self, role: Role) -> &mut Vec<String> {
        match role {
            Role::To => &mut self.to,
            Role::Cc => &mut self.cc,
            Role::Bcc => &mut self.bcc,
        }
    }
}
