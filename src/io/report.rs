//! Classification report output
//!
//! Renders a CommandContext in one of two formats:
//!
//! - **text**: the `argv[i] = token` dump followed by the switch set, the
//!   definition map (sorted by key) and the help/usage/version predicates
//! - **csv**: one `index,token,kind,value` row per token, where `value` is the
//!   value carried by that occurrence of a definition and empty otherwise
//!
//! All functions write to a caller-supplied writer, so they are easy to test.

use crate::cli::ReportFormat;
use crate::core::CommandContext;
use crate::types::{split_joined, CommandError, TokenKind};
use serde::Serialize;
use std::io::Write;

/// One row of the CSV report
#[derive(Debug, Serialize, PartialEq)]
pub struct ReportRow<'a> {
    pub index: usize,
    pub token: &'a str,
    pub kind: TokenKind,
    pub value: &'a str,
}

/// Build the per-token rows for a context, in invocation order
pub fn report_rows(ctx: &CommandContext) -> Vec<ReportRow<'_>> {
    let tokens = ctx.tokens();
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let kind = ctx.kind_of(index);
            let value = match kind {
                TokenKind::Definition => match split_joined(token) {
                    Some((_, value)) => value,
                    None => tokens.next_after(index),
                },
                TokenKind::Positional | TokenKind::Switch => "",
            };
            ReportRow {
                index,
                token,
                kind,
                value,
            }
        })
        .collect()
}

/// Write a classification report in the requested format
pub fn write_report(
    ctx: &CommandContext,
    format: ReportFormat,
    output: &mut dyn Write,
) -> Result<(), CommandError> {
    match format {
        ReportFormat::Text => write_text_report(ctx, output),
        ReportFormat::Csv => write_csv_report(ctx, output),
    }
}

/// Write the human-readable report
pub fn write_text_report(
    ctx: &CommandContext,
    output: &mut dyn Write,
) -> Result<(), CommandError> {
    ctx.write_tokens(output)?;

    let switches: Vec<&str> = ctx.switches().iter().collect();
    writeln!(output, "switches: {}", or_none(&switches.join(" ")))?;

    let definitions: Vec<String> = ctx
        .definitions()
        .sorted()
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    writeln!(output, "definitions: {}", or_none(&definitions.join(" ")))?;

    writeln!(output, "help: {}", ctx.wants_help())?;
    writeln!(output, "usage: {}", ctx.wants_usage())?;
    writeln!(output, "version: {}", ctx.wants_version())?;

    Ok(())
}

/// Write the per-token CSV report
pub fn write_csv_report(
    ctx: &CommandContext,
    output: &mut dyn Write,
) -> Result<(), CommandError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    let rows = report_rows(ctx);
    if rows.is_empty() {
        // serialize() only emits the header alongside the first row
        writer.write_record(["index", "token", "kind", "value"])?;
    }
    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;

    Ok(())
}

fn or_none(list: &str) -> &str {
    if list.is_empty() {
        "(none)"
    } else {
        list
    }
}
