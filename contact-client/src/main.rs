mod client;
mod form;
mod validation;

use client::{ContactClient, Outcome};
use form::{ContactForm, Field};

const USAGE: &str = "usage: contact-client <name> <email> <service> <message> [phone]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let endpoint = std::env::var("CONTACT_ENDPOINT")
        .unwrap_or_else(|_| "http://127.0.0.1:8000/api/contact".to_string());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [name, email, service, message, rest @ ..] = args.as_slice() else {
        return Err(USAGE.into());
    };

    let mut form = ContactForm::new();
    form.set(Field::Name, name.as_str());
    form.set(Field::Email, email.as_str());
    form.set(Field::Service, service.as_str());
    form.set(Field::Message, message.as_str());
    if let Some(phone) = rest.first() {
        form.set(Field::Phone, phone.as_str());
    }

    println!("Submitting enquiry to {endpoint}\n");
    let client = ContactClient::new(endpoint);

    match client.submit(&mut form).await {
        Outcome::Sent(message) => {
            println!("{message}");
            Ok(())
        }
        Outcome::Invalid => {
            for field in Field::ALL {
                if let Some(e) = form.error(field) {
                    println!("{field:?}: {e}");
                }
            }
            Err(form
                .banner()
                .map_or("invalid form", |b| b.text.as_str())
                .into())
        }
        Outcome::Failed(message) => Err(message.into()),
    }
}
