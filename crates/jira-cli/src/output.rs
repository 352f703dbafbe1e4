use colored::Colorize;

/// Sink for tabular command output.
pub trait TableRenderer {
    fn render_title(&self, text: &str);
    /// Label/value pairs, one field per line, for single-entity views.
    fn render_vertical(&self, rows: &[(String, String)]);
    /// Header row plus a row matrix, for collections.
    fn render(&self, headers: &[&str], rows: &[Vec<String>]);
}

/// Sink for failure text; the only severity this tool emits.
pub trait Logger {
    fn error(&self, message: &str);
}

/// Renders to stdout with the usual terminal colors.
pub struct TextRenderer;

impl TableRenderer for TextRenderer {
    fn render_title(&self, text: &str) {
        println!("{}", text.white().bold());
    }

    fn render_vertical(&self, rows: &[(String, String)]) {
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        for (label, value) in rows {
            // Pad before coloring so escape codes don't skew the width
            let label = format!("{:<width$}", label, width = width);
            println!("  {}  {}", label.dimmed(), value);
        }
    }

    fn render(&self, headers: &[&str], rows: &[Vec<String>]) {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() && cell.len() > widths[i] {
                    widths[i] = cell.len();
                }
            }
        }

        let header = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", header.dimmed());

        for row in rows {
            let line = row
                .iter()
                .enumerate()
                .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
                .collect::<Vec<_>>()
                .join("  ");
            println!("{}", line.trim_end());
        }
    }
}

/// Logs failure text to stderr.
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn error(&self, message: &str) {
        eprintln!("{}: {}", "Error".red().bold(), message);
    }
}
