//! Column commands

mod add;
mod delete;
mod mv;
mod rename;

pub use add::AddColumn;
pub use delete::DeleteColumn;
pub use mv::MoveColumn;
pub use rename::RenameColumn;
