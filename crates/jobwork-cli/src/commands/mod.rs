//! Command implementations.

pub mod clear;
pub mod format;
pub mod list;
pub mod record;
pub mod suggest;

pub use self::clear::execute_clear;
pub use self::format::execute_format;
pub use self::list::execute_list;
pub use self::record::execute_record;
pub use self::suggest::execute_suggest;
