//! Suggest command implementation.

use crate::cli::SuggestArgs;
use crate::error::Result;
use crate::output::Formatter;
use jobwork_domain::{Clock, KeyValueStore};
use jobwork_store::SupplierDirectory;

/// Execute the suggest command.
pub fn execute_suggest<S: KeyValueStore, C: Clock>(
    args: SuggestArgs,
    directory: &SupplierDirectory<S, C>,
    formatter: &Formatter,
) -> Result<()> {
    let query = args.query.join(" ");
    let suggestions = directory.suggest(&query);
    println!("{}", formatter.format_suggestions(&suggestions)?);
    Ok(())
}
