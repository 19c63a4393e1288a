//! Task commands

mod add;
mod delete;
mod mv;
mod reassign;
mod update;

pub use add::AddTask;
pub use delete::DeleteTask;
pub use mv::MoveTask;
pub use reassign::ReassignTask;
pub use update::UpdateTask;
