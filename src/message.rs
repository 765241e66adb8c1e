use crate::encoder::{encode_body, encode_word, wrap_text};
use crate::error::Result;
use crate::header::{
    check_header, check_line_breaks, ContentTransferEncoding, ContentType, Headers, Role,
    DEFAULT_MAILER, FROM, MIME_VERSION_1_0, MimeVersion, REPLY_TO, X_MAILER,
};
use crate::mailbox::{AddressBook, Mailbox};
use crate::transport::Transport;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Subject used until one is set
pub const DEFAULT_SUBJECT: &str = "(no subject)";

/// Column at which plain text bodies are wrapped
const TEXT_WRAP_WIDTH: usize = 75;

/// Composer settings
///
/// **NOTE**: Enable feature "serde" to be able serialize/deserialize it using [serde](https://serde.rs/).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ComposerConfig {
    /// Value of the `X-Mailer` header
    pub mailer: String,

    /// Pass no `To` value to the transport when there are no recipients,
    /// instead of an empty string
    pub omit_empty_to: bool,

    /// Reject raw `CR`/`LF` in values written verbatim into headers
    pub reject_line_breaks: bool,
}

impl ComposerConfig {
    pub fn with_mailer<S: Into<String>>(mut self, mailer: S) -> Self {
        self.mailer = mailer.into();
        self
    }

    pub fn with_omit_empty_to(mut self, omit: bool) -> Self {
        self.omit_empty_to = omit;
        self
    }

    pub fn with_reject_line_breaks(mut self, reject: bool) -> Self {
        self.reject_line_breaks = reject;
        self
    }
}

impl Default for ComposerConfig {
    fn default() -> Self {
        ComposerConfig {
            mailer: DEFAULT_MAILER.into(),
            omit_empty_to: false,
            reject_line_breaks: true,
        }
    }
}

/// Rendered message as handed to the transport
///
/// The header block and the body are kept apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Rendered `To` recipients, `None` only with `omit_empty_to`
    pub to: Option<String>,
    /// Subject as encoded-word
    pub subject: String,
    /// Body in the declared transfer encoding
    pub body: String,
    /// `CRLF`-separated header block without the trailing line break
    pub headers: String,
}

/// Single message composer
///
/// Configure the message, then call [`send`](Composer::send). Addresses are
/// encoded when added, the subject and body when the message is rendered.
///
/// # Example
///
/// ```
/// use epmailer::{Composer, StubTransport};
///
/// let mut mail = Composer::new();
/// mail.set_from("nobody@domain.tld", Some("NoBody")).unwrap();
/// mail.add_recipient("hei@domain.tld", None).unwrap();
/// mail.set_subject("Happy new year");
/// mail.set_text_body("Be happy!");
///
/// let mut transport = StubTransport::new();
/// assert!(mail.send(&mut transport));
/// ```
///
/// Sending again re-renders the current state and delivers it once more, use
/// a fresh composer per message.
#[derive(Debug, Clone)]
pub struct Composer {
    config: ComposerConfig,
    headers: Headers,
    recipients: AddressBook,
    subject: String,
    body: String,
    encoding: ContentTransferEncoding,
}

impl Composer {
    /// Create composer with default settings
    pub fn new() -> Self {
        Self::with_config(ComposerConfig::default())
    }

    /// Create composer using settings
    pub fn with_config(config: ComposerConfig) -> Self {
        let headers = Headers::new()
            .with(MimeVersion::HEADER_NAME, MIME_VERSION_1_0.to_string())
            .with(X_MAILER, config.mailer.as_str());

        let mut composer = Composer {
            config,
            headers,
            recipients: AddressBook::new(),
            subject: DEFAULT_SUBJECT.into(),
            body: String::new(),
            encoding: ContentTransferEncoding::default(),
        };
        composer.set_encoding(ContentTransferEncoding::default());
        composer
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Set the `From` address
    pub fn set_from(&mut self, address: &str, name: Option<&str>) -> Result<()> {
        self.set_mailbox_header(FROM, address, name)
    }

    /// Set the `Reply-To` address
    pub fn set_reply_to(&mut self, address: &str, name: Option<&str>) -> Result<()> {
        self.set_mailbox_header(REPLY_TO, address, name)
    }

    /// Add `To` recipient
    pub fn add_recipient(&mut self, address: &str, name: Option<&str>) -> Result<()> {
        self.add_address(Role::To, address, name)
    }

    /// Add carbon copy recipient
    pub fn add_cc(&mut self, address: &str, name: Option<&str>) -> Result<()> {
        self.add_address(Role::Cc, address, name)
    }

    /// Add blind carbon copy recipient
    pub fn add_bcc(&mut self, address: &str, name: Option<&str>) -> Result<()> {
        self.add_address(Role::Bcc, address, name)
    }

    /// Formatted recipients of role, in the order they were added
    pub fn recipients(&self, role: Role) -> impl Iterator<Item = &str> {
        self.recipients.iter(role).map(String::as_str)
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Set the subject
    ///
    /// The subject is always sent as encoded-word, so any text is accepted.
    pub fn set_subject<S: Into<String>>(&mut self, subject: S) {
        self.subject = subject.into();
    }

    /// Body as stored, before transfer encoding
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Set plain text body
    ///
    /// The text is wrapped at 75 columns with `CRLF` and declared as
    /// `text/plain; charset=utf-8; format=flowed`.
    pub fn set_text_body(&mut self, body: &str) {
        self.headers
            .set(ContentType::HEADER_NAME, ContentType::FlowedText.to_string());
        self.body = wrap_text(body, TEXT_WRAP_WIDTH, "\r\n");
    }

    /// Set HTML body
    pub fn set_html_body<S: Into<String>>(&mut self, body: S) {
        self.headers
            .set(ContentType::HEADER_NAME, ContentType::Html.to_string());
        self.body = body.into();
    }

    pub fn encoding(&self) -> ContentTransferEncoding {
        self.encoding
    }

    /// Select the Content-Transfer-Encoding of the body
    pub fn set_encoding(&mut self, encoding: ContentTransferEncoding) {
        self.headers
            .set(ContentTransferEncoding::HEADER_NAME, encoding.as_str());
        self.encoding = encoding;
    }

    /// Set a custom header
    ///
    /// Setting a name again replaces the value in place.
    pub fn set_header(&mut self, name: &str, value: &str) -> Result<()> {
        if self.config.reject_line_breaks {
            check_header(name, value).map_err(|error| {
                warn!(%error, "header rejected");
                error
            })?;
        }
        self.headers.set(name, value);
        Ok(())
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Render the message without delivering it
    ///
    /// Writes the `Cc` and `Bcc` headers for non-empty lists, then encodes
    /// the subject, the body and the header block.
    pub fn render(&mut self) -> Envelope {
        for &role in &[Role::Cc, Role::Bcc] {
            if let Some(list) = self.recipients.render(role) {
                self.headers.set(role.header_name(), list);
            }
        }

        let to = match self.recipients.render(Role::To) {
            Some(to) => Some(to),
            None if self.config.omit_empty_to => {
                warn!("no recipients, omitting To");
                None
            }
            None => {
                warn!("no recipients, sending empty To");
                Some(String::new())
            }
        };

        Envelope {
            to,
            subject: encode_word(&self.subject),
            body: encode_body(&self.body, &self.encoding),
            headers: self.headers.render(),
        }
    }

    /// Render the message and hand it to the transport
    ///
    /// Returns the transport result as is.
    pub fn send<T: Transport>(&mut self, mut transport: T) -> bool {
        let envelope = self.render();

        debug!(
            to = self.recipients.iter(Role::To).count(),
            cc = self.recipients.iter(Role::Cc).count(),
            bcc = self.recipients.iter(Role::Bcc).count(),
            headers = self.headers.len(),
            encoding = self.encoding.as_str(),
            "sending message"
        );

        let delivered = transport.deliver(&envelope);
        if !delivered {
            warn!("transport refused message");
        }
        delivered
    }

    fn check_address(&self, field: &str, address: &str) -> Result<()> {
        if !self.config.reject_line_breaks {
            return Ok(());
        }
        check_line_breaks(field, address).map_err(|error| {
            warn!(%error, "address rejected");
            error
        })
    }

    fn set_mailbox_header(&mut self, field: &str, address: &str, name: Option<&str>) -> Result<()> {
        self.check_address(field, address)?;
        let mbox = Mailbox::new(name.map(String::from), address);
        self.headers.set(field, mbox.to_string());
        Ok(())
    }

    fn add_address(&mut self, role: Role, address: &str, name: Option<&str>) -> Result<()> {
        self.check_address(role.header_name(), address)?;
        self.recipients
            .add(role, &Mailbox::new(name.map(String::from), address));
        Ok(())
    }
}

impl Default for Composer {
    fn default() -> Self {
        Composer::new()
    }
}
