//! Console output formatter for search results

use colored::Colorize;
use medinfo_domain::{DisplayBlock, GroundingSource, OutputFormat, SearchResult, Span, render};

/// Fixed notice shown above every answer
pub const AI_DISCLAIMER: &str = "ข้อควรระวัง: ข้อมูลนี้เป็นเพียงข้อมูลเบื้องต้นที่รวบรวมโดย AI ไม่สามารถทดแทนการวินิจฉัยหรือคำแนะนำจากแพทย์ผู้เชี่ยวชาญได้";

const WIDTH: usize = 60;

/// Formats search results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a result in the requested output format
    pub fn format(result: &SearchResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format_card(result),
            OutputFormat::Content => Self::format_content(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Result card: timestamp, disclaimer, rendered answer, sources
    pub fn format_card(result: &SearchResult) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "=".repeat(WIDTH).cyan()));
        output.push_str(&format!(
            "{}\n",
            format!("ข้อมูลเมื่อ: {}", result.timestamp).dimmed()
        ));
        output.push_str(&format!("{}\n", "=".repeat(WIDTH).cyan()));

        output.push_str(&format!("\n{}\n\n", AI_DISCLAIMER.yellow().bold()));

        output.push_str(&Self::format_content(result));

        if result.has_sources() {
            output.push('\n');
            output.push_str(&Self::format_sources(&result.sources));
        }

        output.push_str(&format!("\n{}\n", "=".repeat(WIDTH).cyan()));
        output
    }

    /// Rendered answer only
    pub fn format_content(result: &SearchResult) -> String {
        let mut output = Self::format_blocks(&render(&result.content));
        output.push('\n');
        output
    }

    /// Format as JSON
    pub fn format_json(result: &SearchResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// One output line per block
    pub fn format_blocks(blocks: &[DisplayBlock]) -> String {
        blocks
            .iter()
            .map(Self::format_block)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_block(block: &DisplayBlock) -> String {
        match block {
            DisplayBlock::Heading { level: 1, text } => {
                format!("{}", text.cyan().bold().underline())
            }
            DisplayBlock::Heading { level: 2, text } => format!("{}", text.cyan().bold()),
            DisplayBlock::Heading { text, .. } => format!("{}", text.bold()),
            DisplayBlock::ListItem { text } => format!("  {} {}", "•".cyan(), text),
            DisplayBlock::LineBreak => String::new(),
            DisplayBlock::Paragraph { spans } => Self::format_spans(spans),
        }
    }

    fn format_spans(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| {
                if span.bold {
                    span.text.bold().to_string()
                } else {
                    span.text.clone()
                }
            })
            .collect()
    }

    /// Numbered source list with title and host
    pub fn format_sources(sources: &[GroundingSource]) -> String {
        let mut output = format!("{}\n", "แหล่งข้อมูลอ้างอิง".cyan().bold());
        output.push_str(&format!("{}\n", "-".repeat(40)));

        for (i, source) in sources.iter().enumerate() {
            output.push_str(&format!(
                "{:>3}. {}\n     {}\n",
                i + 1,
                source.title.bold(),
                Self::source_host(&source.uri).dimmed()
            ));
        }
        output
    }

    /// Error panel with the retry hint
    pub fn format_error(message: &str) -> String {
        format!(
            "{}\n{}\n{}\n",
            "เกิดข้อผิดพลาด".red().bold(),
            message.red(),
            "พิมพ์ /retry เพื่อลองใหม่อีกครั้ง".dimmed()
        )
    }

    /// Host part of a source link, or the link itself if it does not parse
    pub fn source_host(uri: &str) -> String {
        url::Url::parse(uri)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| uri.to_string())
    }
}
