//! Output Rendering
//!
//! Turns selections into stdout text:
//! - `text`: one `Sample Roast #N: ...` line per slot
//! - `json`: an array of records for scripting
//!
//! Writers are generic so tests can render into a `Vec<u8>`.

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::errors::Result;
use crate::phrases::{Category, PhraseSelector, PhraseTable, RandomSource, Selection};

/// Output format for CLI
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines (default)
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

#[derive(Serialize)]
struct SelectionRecord<'a> {
    category: usize,
    label: &'a str,
    filtered: bool,
    text: &'a str,
}

impl<'a> From<&'a Selection> for SelectionRecord<'a> {
    fn from(s: &'a Selection) -> Self {
        Self {
            category: s.category.index(),
            label: s.category.label(),
            filtered: s.filtered,
            text: s.text,
        }
    }
}

#[derive(Serialize)]
struct CatalogRecord<'a> {
    category: usize,
    label: &'a str,
    filtered: bool,
    phrases: &'a [&'a str],
}

/// One draw per slot, in slot order.
pub fn sample_all<R: RandomSource>(
    selector: &mut PhraseSelector<'_, R>,
    filtered: bool,
) -> Vec<Selection> {
    Category::ALL
        .iter()
        .map(|&category| selector.selection(category, filtered))
        .collect()
}

fn sample_label(category: Category, color: bool) -> String {
    let label = format!("Sample {}:", category.label());
    if color {
        label.bold().yellow().to_string()
    } else {
        label
    }
}

/// Write `Sample Roast #N: <text>` lines.
pub fn write_samples<W: Write>(out: &mut W, selections: &[Selection], color: bool) -> Result<()> {
    for selection in selections {
        writeln!(
            out,
            "{} {}",
            sample_label(selection.category, color),
            selection.text
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Write a bare roast line.
pub fn write_single<W: Write>(out: &mut W, selection: &Selection) -> Result<()> {
    writeln!(out, "{}", selection.text)?;
    out.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, selections: &[Selection]) -> Result<()> {
    let records: Vec<SelectionRecord<'_>> = selections.iter().map(SelectionRecord::from).collect();
    serde_json::to_writer_pretty(&mut *out, &records).map_err(std::io::Error::from)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Render a selection set in the requested format.
pub fn write_selections<W: Write>(
    out: &mut W,
    selections: &[Selection],
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_samples(out, selections, color),
        OutputFormat::Json => write_json(out, selections),
    }
}

/// Print every phrase of the given slots for one variant.
pub fn write_catalog<W: Write>(
    out: &mut W,
    table: &PhraseTable,
    categories: &[Category],
    filtered: bool,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let records: Vec<CatalogRecord<'_>> = categories
                .iter()
                .map(|&category| CatalogRecord {
                    category: category.index(),
                    label: category.label(),
                    filtered,
                    phrases: table.phrases(category, filtered),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &records).map_err(std::io::Error::from)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for (i, &category) in categories.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                let header = category.label();
                if color {
                    writeln!(out, "{}", header.bold().yellow())?;
                } else {
                    writeln!(out, "{}", header)?;
                }
                for (n, phrase) in table.phrases(category, filtered).iter().enumerate() {
                    writeln!(out, "  {}. {}", n + 1, phrase)?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}
