//! Contact form submission: validation, the POST and the toast that reports it.

pub mod error;
pub mod transport;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::components::toast::{Severity, Toaster};
use error::SubmitError;
use transport::Transport;

pub const SUCCESS_TITLE: &str = "Success!";
pub const SUCCESS_MESSAGE: &str = "Your message has been sent successfully.";
pub const FAILURE_TITLE: &str = "Error!";
pub const SEND_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Fields the browser would flag: `required` on all four, `type=email` on email.
    pub fn invalid_fields(&self) -> Vec<Field> {
        [Field::Name, Field::Email, Field::Subject, Field::Message]
            .into_iter()
            .filter(|field| {
                let value = self.get(*field);
                value.is_empty() || (*field == Field::Email && !is_email(value))
            })
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.invalid_fields().is_empty()
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        [Field::Name, Field::Email, Field::Subject, Field::Message]
            .iter()
            .map(|field| format!("{}={}", field.name(), urlencoding::encode(self.get(*field))))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// WHATWG "valid e-mail address", the rule behind `<input type="email">`.
/// The browser strips surrounding whitespace from the value before checking.
fn is_email(value: &str) -> bool {
    let value = value.trim_matches(|c: char| c.is_ascii_whitespace());
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && local.chars().all(is_atext) && domain.split('.').all(is_domain_label)
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    (1..=63).contains(&label.len())
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormSubmissionState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

impl FormSubmissionState {
    pub fn is_sending(&self) -> bool {
        *self == FormSubmissionState::Sending
    }

    pub fn label(&self) -> &'static str {
        if self.is_sending() {
            SENDING_LABEL
        } else {
            SEND_LABEL
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Constraint validation failed; nothing was sent.
    Rejected,
    /// Another submission of this form is still in flight.
    Busy,
    Delivered,
    Failed(SubmitError),
}

/// The parts of the form the submission lifecycle drives.
pub trait SubmissionView {
    fn fields(&self) -> ContactFields;
    fn state(&self) -> FormSubmissionState;
    /// The form's constraint validation, as `HTMLFormElement.checkValidity()`.
    fn check_validity(&self) -> bool;
    fn set_validated(&self, validated: bool);
    fn set_state(&self, state: FormSubmissionState);
    fn reset_fields(&self);
}

pub trait Notifier {
    fn notify(&self, title: &str, message: &str, severity: Severity);
}

impl Notifier for Toaster {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        self.show(title, message, severity);
    }
}

#[derive(Deserialize, Default, Debug)]
struct ServerReply {
    #[serde(default)]
    message: Option<String>,
}

/// Puts the submit control back however the submission ends.
struct SendingGuard<'a, V: SubmissionView> {
    view: &'a V,
}

impl<'a, V: SubmissionView> SendingGuard<'a, V> {
    fn begin(view: &'a V) -> Self {
        view.set_state(FormSubmissionState::Sending);
        Self { view }
    }
}

impl<V: SubmissionView> Drop for SendingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_state(FormSubmissionState::Idle);
    }
}

async fn deliver<T: Transport>(
    transport: &T,
    action: &str,
    fields: &ContactFields,
) -> Result<(), SubmitError> {
    let response = transport.post_form(action, fields.encode()).await?;

    let reply: ServerReply =
        serde_json::from_str(&response.body).map_err(|e| SubmitError::Parse(e.to_string()))?;

    if response.status == 200 {
        Ok(())
    } else {
        Err(SubmitError::Status {
            status: response.status,
            message: reply.message,
        })
    }
}

/// One full submission of the contact form to `action`.
pub async fn submit<T, V, N>(action: &str, transport: &T, view: &V, notifier: &N) -> SubmitOutcome
where
    T: Transport,
    V: SubmissionView,
    N: Notifier,
{
    if view.state().is_sending() {
        debug!("Contact form already sending, ignoring submit");
        return SubmitOutcome::Busy;
    }
    if !view.check_validity() {
        view.set_validated(true);
        return SubmitOutcome::Rejected;
    }

    let fields = view.fields();
    let _sending = SendingGuard::begin(view);

    match deliver(transport, action, &fields).await {
        Ok(()) => {
            info!("Contact form delivered to {}", action);
            view.set_state(FormSubmissionState::Succeeded);
            notifier.notify(SUCCESS_TITLE, SUCCESS_MESSAGE, Severity::Success);
            view.reset_fields();
            view.set_validated(false);
            SubmitOutcome::Delivered
        }
        Err(e) => {
            warn!("Contact form failed: {}", e);
            view.set_state(FormSubmissionState::Failed);
            notifier.notify(FAILURE_TITLE, &e.user_message(), Severity::Danger);
            SubmitOutcome::Failed(e)
        }
    }
}
