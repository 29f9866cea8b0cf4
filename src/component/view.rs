//! src/component/view.rs
use htmlescape::{encode_attribute, encode_minimal};

pub const TITLE: &str = "Join Us";
pub const DESCRIPTION: &str = "Sign up with your Gmail account to get notified.";
pub const FIELD_LABEL: &str = "Gmail Address";
pub const PLACEHOLDER: &str = "your.name@gmail.com";
pub const SUBMIT_LABEL: &str = "Sign Up";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const THANK_YOU: &str = "Thank You!";
pub const SIGNED_UP: &str = "You've been successfully signed up.";

/// What the component shows for its current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Form(FormView),
    Confirmation(ConfirmationView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub description: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub error: Option<String>,
    pub submit: SubmitButton,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    /// Disabled only while a request is in flight, so a disabled button also
    /// carries the progress spinner.
    pub disabled: bool,
}

impl SubmitButton {
    pub fn idle() -> Self {
        Self {
            label: SUBMIT_LABEL,
            disabled: false,
        }
    }

    pub fn submitting() -> Self {
        Self {
            label: SUBMITTING_LABEL,
            disabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    pub heading: &'static str,
    pub message: &'static str,
}

impl Default for ConfirmationView {
    fn default() -> Self {
        Self {
            heading: THANK_YOU,
            message: SIGNED_UP,
        }
    }
}

impl View {
    /// The submit control, if the form is still on screen.
    pub fn submit_button(&self) -> Option<&SubmitButton> {
        match self {
            View::Form(form) => Some(&form.submit),
            View::Confirmation(_) => None,
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            View::Form(form) => form.to_html(),
            View::Confirmation(confirmation) => confirmation.to_html(),
        }
    }
}

impl FormView {
    fn to_html(&self) -> String {
        let error_html = match &self.error {
            Some(error) => format!(
                r#"<p class="form-message" role="alert">{}</p>"#,
                encode_minimal(error)
            ),
            None => "".into(),
        };

        let button_html = if self.submit.disabled {
            format!(
                r#"<button type="submit" disabled><span class="spinner" aria-hidden="true"></span>{}</button>"#,
                encode_minimal(self.submit.label)
            )
        } else {
            format!(
                r#"<button type="submit">{}</button>"#,
                encode_minimal(self.submit.label)
            )
        };

        format!(
            r#"<div class="card">
    <h1>{title}</h1>
    <p>{description}</p>
    <form method="post">
        <label for="email">{label}</label>
        <input type="text" id="email" name="email" placeholder="{placeholder}" value="{value}">
        {error_html}
        {button_html}
    </form>
</div>"#,
            title = encode_minimal(self.title),
            description = encode_minimal(self.description),
            label = encode_minimal(self.label),
            placeholder = encode_attribute(self.placeholder),
            value = encode_attribute(&self.value),
        )
    }
}

impl ConfirmationView {
    fn to_html(&self) -> String {
        format!(
            r#"<div class="card">
    <h2>{}</h2>
    <p>{}</p>
</div>"#,
            encode_minimal(self.heading),
            encode_minimal(self.message)
        )
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Form(form) => {
                writeln!(f, "{}", form.title)?;
                writeln!(f, "{}", form.description)?;
                writeln!(f)?;
                if form.value.is_empty() {
                    writeln!(f, "{}: ({})", form.label, form.placeholder)?;
                } else {
                    writeln!(f, "{}: {}", form.label, form.value)?;
                }
                if let Some(error) = &form.error {
                    writeln!(f, "  ! {}", error)?;
                }
                if form.submit.disabled {
                    write!(f, "[ ... {} ]", form.submit.label)
                } else {
                    write!(f, "[ {} ]", form.submit.label)
                }
            }
            View::Confirmation(confirmation) => {
                writeln!(f, "{}", confirmation.heading)?;
                write!(f, "{}", confirmation.message)
            }
        }
    }
}
