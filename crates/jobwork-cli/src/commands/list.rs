//! List command implementation.

use crate::error::Result;
use crate::output::Formatter;
use jobwork_domain::{Clock, KeyValueStore};
use jobwork_store::SupplierDirectory;

/// Execute the list command.
pub fn execute_list<S: KeyValueStore, C: Clock>(
    directory: &SupplierDirectory<S, C>,
    formatter: &Formatter,
) -> Result<()> {
    let records = directory.list();
    println!("{}", formatter.format_records(&records)?);
    Ok(())
}
