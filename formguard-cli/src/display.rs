//! Plain-text rendering of form views and reports.

use std::fmt::Write;

use formguard_lib::prelude::*;

fn marker(class: VisualClass) -> char {
    match class {
        VisualClass::Neutral => ' ',
        VisualClass::Error => '✗',
        VisualClass::Success => '✓',
    }
}

fn value_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => format!("{:?}", text),
        FieldValue::Checked(true) => "[x]".to_string(),
        FieldValue::Checked(false) => "[ ]".to_string(),
    }
}

/// Render a form view as text.
pub fn render_view(view: &FormView) -> String {
    if view.page == PageView::Success {
        return "Thank you! Your registration was successful.".to_string();
    }

    let mut out = String::new();
    for field in &view.fields {
        let focus = if view.focused == Some(field.name) { '>' } else { ' ' };
        let _ = write!(
            out,
            "{} {} {:<16} {}",
            focus,
            marker(field.class),
            field.name.as_str(),
            value_text(&field.value)
        );
        if !field.message.is_empty() {
            let _ = write!(out, "  {}", field.message);
        }
        out.push('\n');
    }
    out.pop();
    out
}

/// Render a validation report as text.
pub fn render_report(report: &ValidationReport) -> String {
    report
        .outcomes()
        .map(|(name, outcome)| match outcome {
            Outcome::Valid => format!("✓ {}", name),
            Outcome::Invalid(error) => format!("✗ {}: {}", name, error.message),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_form() {
        let text = render_view(&FormView::default());
        assert_eq!(text.lines().count(), FieldName::COUNT);
        assert!(text.lines().next().unwrap().contains("fullName"));
        assert!(text.contains("[ ]"));
    }

    #[test]
    fn test_render_errors_and_focus() {
        let mut validator = FormValidator::default();
        validator.submit(std::time::Instant::now());
        let text = render_view(&validator.view());

        let first = text.lines().next().unwrap();
        assert!(first.starts_with("> ✗ fullName"));
        assert!(first.ends_with("Full name is required"));
    }

    #[test]
    fn test_render_success_page() {
        let view = FormView {
            page: PageView::Success,
            ..FormView::default()
        };
        assert!(render_view(&view).contains("successful"));
    }

    #[test]
    fn test_render_report() {
        let report = validate(&FormValues::default());
        let text = render_report(&report);
        assert!(text.contains("✓ phone"));
        assert!(text.contains("✗ email: Email is required"));
    }
}
