use epmailer::{Composer, Envelope, Transport};

struct PrintTransport;

impl Transport for PrintTransport {
    fn deliver(&mut self, envelope: &Envelope) -> bool {
        println!("To: {}", envelope.to.as_deref().unwrap_or(""));
        println!("Subject: {}", envelope.subject);
        println!("{}", envelope.headers);
        println!();
        println!("{}", envelope.body);
        true
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut mail = Composer::new();
    mail.set_from("nobody@domain.tld", Some("NoBody")).unwrap();
    mail.set_reply_to("yuin@domain.tld", Some("Yuin")).unwrap();
    mail.add_recipient("hei@domain.tld", Some("Hei")).unwrap();
    mail.set_subject("Happy new year");
    mail.set_text_body("Be happy!");

    mail.send(PrintTransport);
}
