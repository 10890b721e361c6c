//! Clear command implementation.

use crate::cli::ClearArgs;
use crate::error::Result;
use crate::output::Formatter;
use jobwork_domain::{Clock, KeyValueStore};
use jobwork_store::SupplierDirectory;
use std::io::{self, Write};

/// Execute the clear command.
pub fn execute_clear<S: KeyValueStore, C: Clock>(
    args: ClearArgs,
    directory: &mut SupplierDirectory<S, C>,
    formatter: &Formatter,
) -> Result<()> {
    // Confirm unless --yes is specified
    if !args.yes {
        let count = directory.list().len();
        print!("About to forget {} supplier(s). Continue? [y/N] ", count);
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;

        if !is_confirmation(&response) {
            println!("{}", formatter.info("Operation cancelled"));
            return Ok(());
        }
    }

    match directory.try_clear() {
        Ok(()) => println!("{}", formatter.success("Supplier directory cleared")),
        Err(e) => eprintln!("{}", formatter.warning(&format!("Directory not cleared: {}", e))),
    }

    Ok(())
}

/// Whether a prompt response means yes.
fn is_confirmation(response: &str) -> bool {
    matches!(response.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use jobwork_store::MemoryStore;

    #[test]
    fn test_confirmation_parsing() {
        assert!(is_confirmation("y\n"));
        assert!(is_confirmation(" YES "));
        assert!(!is_confirmation(""));
        assert!(!is_confirmation("no"));
    }

    #[test]
    fn test_clear_with_yes() {
        let mut directory = SupplierDirectory::new(MemoryStore::new());
        directory.record("Acme");
        let formatter = Formatter::new(OutputFormat::Table, false);

        execute_clear(ClearArgs { yes: true }, &mut directory, &formatter).unwrap();
        assert!(directory.list().is_empty());
    }
}
