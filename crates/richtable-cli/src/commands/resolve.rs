//! Resolve command - resolve a table definition and export it.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;
use richtable::table::FileFormat;
use richtable::{ErrorPolicy, ResolvedTable, ResolverConfig, TableDefinition, TableResolver};
use tracing::info;

use crate::cli::OutputFormat;

/// Separator between the values of a multi-valued cell in flat exports.
const MULTI_VALUE_SEPARATOR: &str = "; ";

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
    collect: bool,
    max_length: Option<usize>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("Table definition not found: {}", file.display()).into());
    }

    let definition = TableDefinition::load(&file)?;

    let mut config = ResolverConfig::default();
    if let Some(max_length) = max_length {
        config = config.with_max_length(max_length);
    }
    if collect {
        config = config.with_error_policy(ErrorPolicy::CollectAndReport);
    }

    let table = TableResolver::with_config(config).resolve_definition(&definition)?;
    info!(rows = table.row_count(), file = %file.display(), "resolved table");

    if !table.options.export.is_empty() && !table.options.exports(file_format(format)) {
        eprintln!(
            "{} table does not list {} among its export formats",
            "Warning:".yellow().bold(),
            format.to_string().cyan()
        );
    }

    match &output {
        Some(path) => write_table(&table, format, File::create(path)?)?,
        None => write_table(&table, format, io::stdout().lock())?,
    }

    report_diagnostics(&table, verbose);

    if let Some(path) = output {
        eprintln!(
            "{} {} rows to {}",
            "Wrote".green().bold(),
            table.row_count().to_string().white().bold(),
            path.display().to_string().cyan()
        );
    }

    Ok(())
}

fn file_format(format: OutputFormat) -> FileFormat {
    match format {
        OutputFormat::Json => FileFormat::Json,
        OutputFormat::Csv => FileFormat::Csv,
        OutputFormat::Tsv => FileFormat::Tsv,
    }
}

fn write_table<W: Write>(
    table: &ResolvedTable,
    format: OutputFormat,
    mut writer: W,
) -> Result<(), Box<dyn std::error::Error>> {
    match format.delimiter() {
        None => {
            serde_json::to_writer_pretty(&mut writer, table)?;
            writeln!(writer)?;
        }
        Some(delimiter) => write_flat(table, delimiter, writer)?,
    }
    Ok(())
}

/// Write one header row of column labels, then one record per resolved row.
///
/// Omitted cells are empty fields; clobs export their full text.
fn write_flat<W: Write>(
    table: &ResolvedTable,
    delimiter: u8,
    writer: W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    wtr.write_record(table.columns.iter().map(|c| c.label.as_str()))?;

    for row in &table.rows {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|column| {
                row.get(&column.key)
                    .map(|entry| entry.display_text(MULTI_VALUE_SEPARATOR))
                    .unwrap_or_default()
            })
            .collect();
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

fn report_diagnostics(table: &ResolvedTable, verbose: bool) {
    if table.is_complete() {
        if verbose {
            eprintln!("{} all rows resolved", "OK".green().bold());
        }
        return;
    }

    eprintln!(
        "{} {} rows skipped",
        "Warning:".yellow().bold(),
        table.diagnostics.len().to_string().white().bold()
    );
    for diagnostic in &table.diagnostics {
        let location = match &diagnostic.column {
            Some(column) => format!("row {}, {}", diagnostic.row, column),
            None => format!("row {}", diagnostic.row),
        };
        eprintln!("  {} {}", location.red(), diagnostic.message);
    }
}
