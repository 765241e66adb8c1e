use std::fmt::{Display, Formatter, Result as FmtResult};

pub const FROM: &str = "From";
pub const REPLY_TO: &str = "Reply-To";

/// Recipient role of an address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    To,
    Cc,
    Bcc,
}

impl Role {
    /// Name of the header carrying the addresses of this role
    pub fn header_name(&self) -> &'static str {
        match *self {
            Role::To => "To",
            Role::Cc => "Cc",
            Role::Bcc => "Bcc",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.header_name())
    }
}
