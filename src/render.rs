//! Pure rendering of the two outbound emails.
//!
//! `render` is deterministic and does no I/O: a validated submission plus a
//! role produces one `RenderedMessage`. Submission fields are untrusted and
//! are always HTML-escaped before interpolation into markup.

use crate::dispatch::Submission;

/// Which of the two emails to produce for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Acknowledgement sent back to the submitter
    Confirmation,
    /// Notice sent to the operator address
    Notification,
}

/// One email ready for the mail transport.
#[derive(Debug, Clone)]
pub struct RenderedMessage {
    pub subject: String,
    pub body: String,
    pub is_html: bool,
}

/// Escape HTML-special characters in untrusted text.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape the free-text message and turn its line breaks into `<br>`.
fn message_as_html(message: &str) -> String {
    escape_html(message)
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}

pub fn render(submission: &Submission, role: Role) -> RenderedMessage {
    match role {
        Role::Confirmation => render_confirmation(submission),
        Role::Notification => render_notification(submission),
    }
}

fn render_confirmation(submission: &Submission) -> RenderedMessage {
    let strings = submission.lang.strings();

    let subject = format!(
        "{}{}",
        strings.confirmation_subject_prefix, submission.subject
    );
    let greeting = strings
        .confirmation_greeting
        .replace("{name}", &escape_html(&submission.name));

    let body = format!(
        r#"<div style="font-family: Arial, sans-serif; color: #333; line-height: 1.5;">
  <h2 style="color: #2a7ae2; margin-bottom: 0.5em;">{heading}</h2>
  <p>{greeting}</p>
  <p>{received}</p>
  <hr style="border: none; border-top: 1px solid #eee; margin: 1em 0;" />
  <p><strong>{label_subject}:</strong> {subject}</p>
  <p><strong>{label_message}:</strong></p>
  <p style="margin-left: 1em; color: #555;">{message}</p>
  <p style="margin-top: 1.5em; font-size: 0.9em; color: #666;">{footer}</p>
</div>"#,
        heading = strings.confirmation_heading,
        greeting = greeting,
        received = strings.confirmation_received,
        label_subject = strings.label_subject,
        subject = escape_html(&submission.subject),
        label_message = strings.label_message,
        message = message_as_html(&submission.message),
        footer = strings.confirmation_footer,
    );

    RenderedMessage {
        subject,
        body,
        is_html: true,
    }
}

fn render_notification(submission: &Submission) -> RenderedMessage {
    let strings = submission.lang.strings();

    // The operator-facing subject pattern is fixed; only the body labels
    // follow the submitter's language.
    let subject = format!("Contact request - {}", submission.subject);

    let body = format!(
        r#"<div style="font-family: Arial, sans-serif; color: #333; line-height: 1.4;">
  <h2 style="margin-bottom: 0.5em;">{heading}</h2>
  <table style="width: 100%; border-collapse: collapse; margin-top: 1em;">
    <tr>
      <td style="padding: 8px; font-weight: bold; width: 120px;">{label_name}:</td>
      <td style="padding: 8px;">{name}</td>
    </tr>
    <tr style="background: #f9f9f9;">
      <td style="padding: 8px; font-weight: bold;">{label_email}:</td>
      <td style="padding: 8px;">{email}</td>
    </tr>
    <tr>
      <td style="padding: 8px; font-weight: bold;">{label_subject}:</td>
      <td style="padding: 8px;">{subject}</td>
    </tr>
    <tr style="background: #f9f9f9;">
      <td style="padding: 8px; font-weight: bold; vertical-align: top;">{label_message}:</td>
      <td style="padding: 8px;">{message}</td>
    </tr>
  </table>
  <p style="margin-top: 1.5em; font-size: 0.9em; color: #666;">{footer}</p>
</div>"#,
        heading = strings.notification_heading,
        label_name = strings.label_name,
        name = escape_html(&submission.name),
        label_email = strings.label_email,
        email = escape_html(&submission.email),
        label_subject = strings.label_subject,
        subject = escape_html(&submission.subject),
        label_message = strings.label_message,
        message = message_as_html(&submission.message),
        footer = strings.notification_footer,
    );

    RenderedMessage {
        subject,
        body,
        is_html: true,
    }
}
