pub mod add;
pub mod backup;
pub mod command;
pub mod del;
pub mod export;
pub mod log;

pub use add::{AddLogic, AddRequest};
pub use command::{ChoreCommand, Outcome};
pub use del::DeleteLogic;
pub use export::{ExportLogic, ExportReport};
