pub mod chore;
pub mod person;
pub mod task;

pub use chore::{ChoreId, ChoreRecord, ListOrder, NewChore, parse_chore_id};
pub use person::Person;
pub use task::Task;
