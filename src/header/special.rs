use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MimeVersion {
    pub major: u8,
    pub minor: u8,
}

pub const MIME_VERSION_1_0: MimeVersion = MimeVersion { major: 1, minor: 0 };

impl MimeVersion {
    pub const HEADER_NAME: &'static str = "MIME-Version";

    pub fn new(major: u8, minor: u8) -> Self {
        MimeVersion { major, minor }
    }
}

impl Default for MimeVersion {
    fn default() -> Self {
        MIME_VERSION_1_0
    }
}

impl Display for MimeVersion {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Name of the header identifying the composing software
pub const X_MAILER: &str = "X-Mailer";

/// Default `X-Mailer` value
pub const DEFAULT_MAILER: &str = "epMailer";
