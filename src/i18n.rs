//! Localized copy for the two supported languages.
//!
//! All submitter-facing text lives here, one `LanguageStrings` table per
//! language, so the renderer stays free of per-language branches. Strings
//! may contain fixed markup (e.g. `<strong>`); they are trusted copy, never
//! user input.

/// A supported message language.
///
/// Selection is total: `es` (case-insensitive) yields Spanish, every other
/// code falls back to English. Unknown codes are not an error — the original
/// form allows free-text language hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    /// Resolve a language code, falling back to English for anything
    /// that is not `es`.
    pub fn from_code(code: &str) -> Language {
        if code.eq_ignore_ascii_case("es") {
            Language::Spanish
        } else {
            Language::English
        }
    }

    /// ISO 639-1 code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// The full copy table for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        match self {
            Language::English => &ENGLISH_STRINGS,
            Language::Spanish => &SPANISH_STRINGS,
        }
    }
}

/// All localized copy for one language.
#[derive(Debug)]
pub struct LanguageStrings {
    /// Subject used when the submission carries none
    pub default_subject: &'static str,

    /// Prefix for the confirmation email subject; the submission's subject
    /// is appended verbatim
    pub confirmation_subject_prefix: &'static str,

    /// Heading of the confirmation email
    pub confirmation_heading: &'static str,

    /// Greeting line; `{name}` is replaced with the escaped submitter name
    pub confirmation_greeting: &'static str,

    /// Receipt sentence shown under the greeting (contains fixed markup)
    pub confirmation_received: &'static str,

    /// Footer of the confirmation email
    pub confirmation_footer: &'static str,

    /// Heading of the operator notification email
    pub notification_heading: &'static str,

    /// Footer of the operator notification email
    pub notification_footer: &'static str,

    // Field labels shared by both emails
    pub label_name: &'static str,
    pub label_email: &'static str,
    pub label_subject: &'static str,
    pub label_message: &'static str,

    /// Body of the HTTP 200 response
    pub response_message: &'static str,
}

static ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    default_subject: "General inquiry",
    confirmation_subject_prefix: "Contact confirmation: ",
    confirmation_heading: "✅ Your message has been received",
    confirmation_greeting: "Hi {name},",
    confirmation_received:
        "<strong>We have received your message</strong> and will get back to you soon.",
    confirmation_footer: "Thanks for reaching out!",
    notification_heading: "📬 New message received",
    notification_footer: "Sent from your portfolio contact form",
    label_name: "Name",
    label_email: "Email",
    label_subject: "Subject",
    label_message: "Message",
    response_message: "Confirmation sent. Your request has been received.",
};

static SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    default_subject: "Consulta general",
    confirmation_subject_prefix: "Mensaje recibido: ",
    confirmation_heading: "✅ Confirmación de recibido",
    confirmation_greeting: "¡Hola {name}!",
    confirmation_received:
        "<strong>Hemos recibido tu mensaje</strong> y estaremos en contacto contigo pronto.",
    confirmation_footer: "Gracias por escribirnos.",
    notification_heading: "📬 Nuevo mensaje recibido",
    notification_footer: "Enviado desde el formulario de contacto de tu portafolio",
    label_name: "Nombre",
    label_email: "Email",
    label_subject: "Asunto",
    label_message: "Mensaje",
    response_message: "Confirmación enviada. Tu solicitud ha sido recibida.",
};
