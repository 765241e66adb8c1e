//! Compose a single UTF-8 email message and render it for a mail transport.
//!
//! The [`Composer`] collects headers, recipients, subject and body, then on
//! [`send`](Composer::send) renders them into an [`Envelope`]: the `To`
//! recipients, the subject as RFC 2047 encoded-word, the body in the declared
//! Content-Transfer-Encoding, and the `CRLF`-separated header block. The
//! envelope is handed to a [`Transport`].
//!
//! ```
//! use epmailer::{Composer, ContentTransferEncoding, StubTransport};
//!
//! let mut mail = Composer::new();
//! mail.set_from("nobody@domain.tld", Some("NoBody")).unwrap();
//! mail.add_recipient("bob@example.com", None).unwrap();
//! mail.set_text_body("hi");
//! mail.set_encoding(ContentTransferEncoding::QuotedPrintable);
//!
//! let mut transport = StubTransport::new();
//! assert!(mail.send(&mut transport));
//!
//! let envelope = &transport.delivered()[0];
//! assert_eq!(envelope.to.as_deref(), Some("bob@example.com"));
//! assert_eq!(envelope.body, "hi");
//! ```

mod encoder;
mod error;
pub mod header;
mod mailbox;
mod message;
mod transport;

pub use crate::encoder::{encode_body, encode_body_as, encode_word, wrap_text};
pub use crate::error::{Error, Result};
pub use crate::header::{ContentTransferEncoding, ContentType, Headers, Role};
pub use crate::mailbox::{AddressBook, Mailbox};
pub use crate::message::{Composer, ComposerConfig, Envelope, DEFAULT_SUBJECT};
pub use crate::transport::{StubTransport, Transport};
