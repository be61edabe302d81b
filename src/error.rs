//! Error types for loading chart files

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to read chart file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid chart{}: {message}", format_location(.span))]
    Syntax { span: Option<Span>, message: String },
}

impl ChartError {
    /// Format the error with source context using ariadne
    ///
    /// Errors without a source location fall back to their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (span, message) = match self {
            ChartError::Syntax {
                span: Some(span),
                message,
            } => (span.clone(), message),
            _ => return self.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid chart")
            .with_label(
                Label::new((filename, span))
                    .with_message(message.trim())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

fn format_location(span: &Option<Span>) -> String {
    match span {
        Some(span) => format!(" at {:?}", span),
        None => String::new(),
    }
}

impl From<toml::de::Error> for ChartError {
    fn from(err: toml::de::Error) -> Self {
        ChartError::Syntax {
            span: err.span(),
            message: err.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = ChartError::Syntax {
            span: Some(3..5),
            message: "unexpected key".to_string(),
        };
        assert_eq!(err.to_string(), "invalid chart at 3..5: unexpected key");

        let err = ChartError::Syntax {
            span: None,
            message: "missing field `parties`".to_string(),
        };
        assert_eq!(err.to_string(), "invalid chart: missing field `parties`");
    }

    #[test]
    fn test_format_with_context() {
        let source = "[[parties]]\nid = 3\n";
        let err = ChartError::Syntax {
            span: Some(17..18),
            message: "invalid type".to_string(),
        };
        let report = err.format(source, "chart.toml");
        assert!(report.contains("chart.toml"));
        assert!(report.contains("invalid type"));
    }

    #[test]
    fn test_format_without_span() {
        let err = ChartError::Syntax {
            span: None,
            message: "oops".to_string(),
        };
        assert_eq!(err.format("", "chart.toml"), "invalid chart: oops");
    }
}
