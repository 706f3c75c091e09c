//! Text and JSON rendering for CLI output

use console::style;
use serde::Serialize;
use treeloclib::{ExtensionRecord, FileRecord, Leaderboard, Leaderboards, ScanResult};

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

impl OutputMode {
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputMode::Json,
            _ => OutputMode::Text,
        }
    }
}

/// Format an integer with `,` between groups of three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render the scan summary, followed by the leaderboards when given.
pub fn render_text(result: &ScanResult, boards: Option<&Leaderboards>) -> String {
    let mut out = String::new();
    out.push_str(&format!("Files: {}\n", group_thousands(result.file_count)));
    out.push_str(&format!("Lines: {}\n", group_thousands(result.line_count)));
    out.push_str(&format!("Bytes: {}\n", group_thousands(result.byte_count)));

    if let Some(boards) = boards {
        let files: Vec<(u64, &str)> = boards
            .files
            .entries
            .iter()
            .map(|f| (f.lines, f.path.as_str()))
            .collect();
        render_leaderboard(&mut out, "Files", &boards.files, &files);

        let exts: Vec<(u64, &str)> = boards
            .extensions
            .entries
            .iter()
            .map(|e| (e.lines, e.extension.as_str()))
            .collect();
        render_leaderboard(&mut out, "Extensions", &boards.extensions, &exts);
    }

    out
}

/// Append one leaderboard: a heading, then `rank. lines lines  label` rows
/// with ranks and line counts right-aligned.
fn render_leaderboard<T>(
    out: &mut String,
    title: &str,
    board: &Leaderboard<T>,
    rows: &[(u64, &str)],
) {
    let heading = if board.is_short() {
        format!("Top {} {} (showing {}):", board.requested, title, board.showing())
    } else {
        format!("Top {} {}:", board.requested, title)
    };
    out.push('\n');
    out.push_str(&format!("{}\n", style(heading).bold()));

    let rank_width = rows.len().max(1).to_string().len();
    let formatted: Vec<String> = rows.iter().map(|(lines, _)| group_thousands(*lines)).collect();
    let line_width = formatted.iter().map(String::len).max().unwrap_or(1);

    for (i, ((_, label), lines)) in rows.iter().zip(&formatted).enumerate() {
        out.push_str(&format!(
            "{:>rank_width$}. {:>line_width$} lines  {}\n",
            i + 1,
            lines,
            label,
            rank_width = rank_width,
            line_width = line_width,
        ));
    }
}

#[derive(Debug, Serialize)]
struct JsonBoard<'a, T> {
    requested: usize,
    showing: usize,
    entries: &'a [T],
}

impl<'a, T> JsonBoard<'a, T> {
    fn new(board: &'a Leaderboard<T>) -> Self {
        Self {
            requested: board.requested,
            showing: board.showing(),
            entries: &board.entries,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    files: u64,
    lines: u64,
    bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_files: Option<JsonBoard<'a, FileRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_extensions: Option<JsonBoard<'a, ExtensionRecord>>,
}

/// Render the scan summary and optional leaderboards as pretty JSON.
pub fn render_json(
    result: &ScanResult,
    boards: Option<&Leaderboards>,
) -> serde_json::Result<String> {
    let report = JsonReport {
        files: result.file_count,
        lines: result.line_count,
        bytes: result.byte_count,
        top_files: boards.map(|b| JsonBoard::new(&b.files)),
        top_extensions: boards.map(|b| JsonBoard::new(&b.extensions)),
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}
