//! Format command implementation.

use crate::cli::{FormatArgs, FormatKind};
use crate::error::Result;
use crate::output::Formatter;
use jobwork_domain::{format_currency, format_quantity};

/// Execute the format command.
pub fn execute_format(args: FormatArgs, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_value(&render(&args))?);
    Ok(())
}

fn render(args: &FormatArgs) -> String {
    match args.kind {
        FormatKind::Currency => format_currency(args.value),
        FormatKind::Quantity => format_quantity(args.value),
    }
}
