//! Record command implementation.

use crate::cli::RecordArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use jobwork_domain::{Clock, KeyValueStore};
use jobwork_store::SupplierDirectory;

/// Execute the record command.
///
/// A storage failure is reported as a warning, not an error: the voucher the
/// supplier belongs to has already been saved elsewhere.
pub fn execute_record<S: KeyValueStore, C: Clock>(
    args: RecordArgs,
    directory: &mut SupplierDirectory<S, C>,
    formatter: &Formatter,
) -> Result<()> {
    let joined = args.name.join(" ");
    let name = joined.trim();
    if name.is_empty() {
        return Err(CliError::InvalidInput(
            "Supplier name cannot be empty".to_string(),
        ));
    }

    if let Err(e) = directory.try_record(name) {
        eprintln!("{}", formatter.warning(&format!("Supplier not saved: {}", e)));
        return Ok(());
    }

    let list = directory.try_list()?;
    match list.find(name) {
        Some(record) => println!("{}", formatter.supplier_recorded(&record.name, record.count)),
        None => println!(
            "{}",
            formatter.info("Directory is full of more frequently used suppliers; name not kept")
        ),
    }

    Ok(())
}
