//! Console output formatter for analysis results

use crate::layout::{LayoutLine, Segment, layout};
use brandcheck_domain::{AnalysisResult, ErrorDetail, NameQuery, OutputFormat, render};
use colored::{ColoredString, Colorize};
use serde_json::json;

/// Formats analysis results for stdout
pub struct ConsoleFormatter {
    format: OutputFormat,
}

impl ConsoleFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format
    }

    /// Format a successful analysis in the configured format
    pub fn format_result(&self, name: &NameQuery, result: &AnalysisResult) -> String {
        match self.format {
            OutputFormat::Styled => Self::format_styled(name, result),
            OutputFormat::Plain => Self::format_plain(result),
            OutputFormat::Json => Self::format_json(name, result),
        }
    }

    /// Format a failure; JSON mode reports it on stdout, the others on stderr
    pub fn format_error(&self, name: Option<&NameQuery>, error: &str) -> String {
        match self.format {
            OutputFormat::Json => Self::format_error_json(name, error, None),
            OutputFormat::Styled => format!("{} {}", "Error:".red().bold(), error),
            OutputFormat::Plain => format!("Error: {}", error),
        }
    }

    /// Like [`format_error`](Self::format_error) but with the failure category
    pub fn format_failure(&self, name: &NameQuery, detail: &ErrorDetail) -> String {
        match self.format {
            OutputFormat::Json => {
                Self::format_error_json(Some(name), detail.message(), Some(detail))
            }
            _ => self.format_error(Some(name), detail.message()),
        }
    }

    /// Title, rule, then the rendered analysis with terminal styles
    pub fn format_styled(name: &NameQuery, result: &AnalysisResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Analysis Results:".cyan().bold(),
            name.as_str().bold()
        ));
        output.push_str(&format!("{}\n\n", "─".repeat(40).cyan()));

        for line in layout(&render(result.markdown())) {
            output.push_str(&Self::styled_line(&line));
            output.push('\n');
        }

        output
    }

    /// Rendered analysis without escape codes
    pub fn format_plain(result: &AnalysisResult) -> String {
        let mut output = String::new();
        for line in layout(&render(result.markdown())) {
            output.push_str(line.text().trim_end());
            output.push('\n');
        }
        output
    }

    /// Format as JSON
    pub fn format_json(name: &NameQuery, result: &AnalysisResult) -> String {
        let value = json!({
            "name": name.as_str(),
            "status": "succeeded",
            "analysis": result.markdown(),
            "nodes": render(result.markdown()),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_error_json(
        name: Option<&NameQuery>,
        message: &str,
        detail: Option<&ErrorDetail>,
    ) -> String {
        let value = json!({
            "name": name.map(NameQuery::as_str),
            "status": "failed",
            "error": {
                "kind": detail.map(|d| d.kind().as_str()).unwrap_or("validation"),
                "message": message,
            },
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn styled_line(line: &LayoutLine) -> String {
        line.segments
            .iter()
            .map(|segment| Self::styled_segment(segment).to_string())
            .collect()
    }

    fn styled_segment(segment: &Segment) -> ColoredString {
        let style = segment.style;
        let mut text = segment.text.as_str().normal();
        if style.heading {
            text = text.cyan();
        }
        if style.code {
            text = text.yellow();
        }
        if style.muted {
            text = text.dimmed();
        }
        if style.strong {
            text = text.bold();
        }
        if style.emphasis {
            text = text.italic();
        }
        if style.strikethrough {
            text = text.strikethrough();
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandcheck_domain::GENERIC_FAILURE_MESSAGE;

    fn nike() -> (NameQuery, AnalysisResult) {
        (
            NameQuery::parse("Nike").unwrap(),
            AnalysisResult::new("**Nike** means victory.\n\n- fast\n- bold"),
        )
    }

    #[test]
    fn test_plain_output() {
        let (_, result) = nike();
        assert_eq!(
            ConsoleFormatter::format_plain(&result),
            "Nike means victory.\n\n• fast\n• bold\n"
        );
    }

    #[test]
    fn test_styled_output_contains_text() {
        let (name, result) = nike();
        let output = ConsoleFormatter::format_styled(&name, &result);
        assert!(output.contains("Analysis Results:"));
        assert!(output.contains("Nike"));
        assert!(output.contains("means victory."));
        assert!(output.contains("fast"));
    }

    #[test]
    fn test_json_output() {
        let (name, result) = nike();
        let json = ConsoleFormatter::new(OutputFormat::Json).format_result(&name, &result);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Nike");
        assert_eq!(value["status"], "succeeded");
        assert_eq!(value["analysis"], result.markdown());
        assert_eq!(value["nodes"][0]["type"], "paragraph");
        assert_eq!(value["nodes"][0]["content"][0]["type"], "strong");
    }

    #[test]
    fn test_json_failure_carries_kind() {
        let name = NameQuery::parse("Acme").unwrap();
        let json = ConsoleFormatter::new(OutputFormat::Json)
            .format_failure(&name, &ErrorDetail::transport());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["error"]["kind"], "transport");
        assert_eq!(value["error"]["message"], GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_json_validation_error() {
        let json = ConsoleFormatter::new(OutputFormat::Json).format_error(None, "Please enter a name");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["name"].is_null());
        assert_eq!(value["error"]["kind"], "validation");
    }

    #[test]
    fn test_plain_error() {
        let formatter = ConsoleFormatter::new(OutputFormat::Plain);
        assert_eq!(
            formatter.format_error(None, "Name too short"),
            "Error: Name too short"
        );
    }
}
