//! Output formatters: console, JSON, Markdown and HTML renderings of a report

use crate::config::OutputFormat;
use crate::error::{Result, ResumeMatcherError};
use crate::output::report::{AnalysisReport, ScoreBand, NO_MATCHED_SKILLS, NO_MISSING_SKILLS};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering an analysis report
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for scripting and integrations
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing results
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Standalone HTML page
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Dispatches to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// Askama template for HTML output. Every interpolated value is escaped.
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Analysis</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background-image: linear-gradient(to right top, #b503bc, #a326c5, #8f36cc, #7842d2, #5d4bd6);
            color: white;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
        }
        .glass-box {
            background: rgba(255, 255, 255, 0.2);
            border-radius: 10px;
            padding: 20px;
            box-shadow: 0 4px 10px rgba(255, 255, 255, 0.2);
        }
        .score-container {
            font-size: 24px;
            font-weight: bold;
            text-align: center;
            padding: 15px;
            background: rgba(0, 0, 0, 0.6);
            border-radius: 10px;
        }
        .suggestions { white-space: pre-wrap; }
        .score-strong { color: #7CFC9A; }
        .score-fair { color: #FFD966; }
        .score-weak { color: #FF8080; }
        .metadata { font-size: 0.85em; opacity: 0.8; margin-top: 30px; }
    </style>
    {% endif %}
</head>
<body>
    <h1>📋 Resume Analysis</h1>

    <h2>🎯 Resume Score</h2>
    <div class="score-container {{ score_class }}">{{ score }}% Matched</div>

    <h2>✅ Matched Skills</h2>
    <div class="glass-box">{% if matched_skills.is_empty() %}{{ no_matched }}{% else %}{% for skill in matched_skills %}{% if !loop.first %}, {% endif %}{{ skill }}{% endfor %}{% endif %}</div>

    <h2>⚠️ Missing Skills</h2>
    <div class="glass-box">{% if missing_skills.is_empty() %}{{ no_missing }}{% else %}{% for skill in missing_skills %}{% if !loop.first %}, {% endif %}{{ skill }}{% endfor %}{% endif %}</div>

    <h2>🤖 AI Suggestions</h2>
    <div class="glass-box suggestions">💡 {{ suggestions }}</div>

    <div class="metadata">
        <p>Generated {{ generated_at }} by Resume Matcher v{{ version }} | Model: {{ model }}</p>
        <p>Resume: {{ resume_file }} | Job: {{ job_source }}</p>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate<'a> {
    include_styles: bool,
    score: String,
    score_class: &'static str,
    matched_skills: &'a [String],
    missing_skills: &'a [String],
    no_matched: &'static str,
    no_missing: &'static str,
    suggestions: &'a str,
    generated_at: String,
    version: &'a str,
    model: &'a str,
    resume_file: &'a str,
    job_source: &'a str,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn format_score_badge(&self, band: ScoreBand) -> String {
        let color = match band {
            ScoreBand::Strong => Color::Green,
            ScoreBand::Fair => Color::Yellow,
            ScoreBand::Weak => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", band.label().color(color).bold())
        } else {
            format!("[{}]", band.label())
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("🎯 Resume Score"));
        output.push_str(&format!(
            "{}% Matched {}\n",
            report.score,
            self.format_score_badge(report.score_band())
        ));

        output.push_str(&self.format_header("✅ Matched Skills"));
        output.push_str(&format!("{}\n", self.colorize(&report.matched_summary(), Color::Green)));

        output.push_str(&self.format_header("⚠️  Missing Skills"));
        output.push_str(&format!("{}\n", self.colorize(&report.missing_summary(), Color::Yellow)));

        output.push_str(&self.format_header("🤖 AI Suggestions"));
        output.push_str(&format!("💡 {}\n", report.suggestions));

        output.push_str(&format!(
            "\n{}\n",
            self.colorize(
                &format!(
                    "Resume: {} | Job tokens: {} | Model: {} | {}ms",
                    report.metadata.resume_file,
                    report.statistics.job_token_count,
                    report.metadata.model,
                    report.statistics.processing_time_ms
                ),
                Color::BrightBlack
            )
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📋 Resume Analysis\n\n");
        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Resume:** `{}` | **Job:** `{}`\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.resume_file,
                report.metadata.job_source
            ));
        }

        output.push_str("## 🎯 Resume Score\n\n");
        output.push_str(&format!(
            "**{}% Matched** ({})\n\n",
            report.score,
            report.score_band().label()
        ));

        output.push_str("## ✅ Matched Skills\n\n");
        push_skill_list(&mut output, &report.matched_skills, NO_MATCHED_SKILLS);

        output.push_str("## ⚠️ Missing Skills\n\n");
        push_skill_list(&mut output, &report.missing_skills, NO_MISSING_SKILLS);

        output.push_str("## 🤖 AI Suggestions\n\n");
        output.push_str(&report.suggestions);
        output.push_str("\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "---\n*Resume Matcher v{} | Model: {} | {} job tokens | {}ms*\n",
                report.metadata.matcher_version,
                report.metadata.model,
                report.statistics.job_token_count,
                report.statistics.processing_time_ms
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

fn push_skill_list(output: &mut String, skills: &[String], empty: &str) {
    if skills.is_empty() {
        output.push_str(&format!("_{}_\n\n", empty));
    } else {
        for skill in skills {
            output.push_str(&format!("- {}\n", skill));
        }
        output.push('\n');
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let template = HtmlTemplate {
            include_styles: self.include_styles,
            score: report.score.to_string(),
            score_class: report.score_band().css_class(),
            matched_skills: &report.matched_skills,
            missing_skills: &report.missing_skills,
            no_matched: NO_MATCHED_SKILLS,
            no_missing: NO_MISSING_SKILLS,
            suggestions: &report.suggestions,
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            version: &report.metadata.matcher_version,
            model: &report.metadata.model,
            resume_file: &report.metadata.resume_file,
            job_source: &report.metadata.job_source,
        };

        template
            .render()
            .map_err(|e| ResumeMatcherError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::tests::sample_report;

    #[test]
    fn test_console_plain() {
        let report = sample_report("Add Docker to your skills section.");
        let output = ConsoleFormatter::new(false).format_report(&report).unwrap();
        assert!(output.contains("28.57% Matched [WEAK]"));
        assert!(output.contains("python, sql"));
        assert!(output.contains("docker"));
        assert!(output.contains("💡 Add Docker to your skills section."));
    }

    #[test]
    fn test_console_empty_skill_messages() {
        let mut report = sample_report("ok");
        report.matched_skills.clear();
        report.missing_skills.clear();
        let output = ConsoleFormatter::new(false).format_report(&report).unwrap();
        assert!(output.contains(NO_MATCHED_SKILLS));
        assert!(output.contains(NO_MISSING_SKILLS));
    }

    #[test]
    fn test_json_output() {
        let report = sample_report("Add Docker.");
        let json = JsonFormatter::new(false).format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["score"], 28.57);
        assert_eq!(value["matched_skills"][0], "python");
        assert_eq!(value["missing_skills"][0], "docker");
        assert_eq!(value["suggestions"], "Add Docker.");
        assert_eq!(value["metadata"]["model"], "mistral-tiny");
    }

    #[test]
    fn test_markdown_output() {
        let report = sample_report("Add Docker.");
        let markdown = MarkdownFormatter::new(false).format_report(&report).unwrap();
        assert!(markdown.starts_with("# 📋 Resume Analysis"));
        assert!(markdown.contains("**28.57% Matched**"));
        assert!(markdown.contains("- python\n- sql\n"));
        assert!(markdown.contains("- docker\n"));
    }

    #[test]
    fn test_html_escapes_suggestions() {
        let report = sample_report("<script>alert('x')</script>");
        let html = HtmlFormatter::new(false).format_report(&report).unwrap();
        assert!(html.contains("28.57% Matched"));
        assert!(html.contains("python, sql"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&#60;script&#62;alert(&#39;x&#39;)&#60;/script&#62;"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, true, true, false);
        let report = sample_report("Add Docker.");
        let json = generator.generate_report(&report, OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));
        let html = generator.generate_report(&report, OutputFormat::Html).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
