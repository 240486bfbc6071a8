//! Form and submission state

mod forms;
mod submission;

pub use forms::*;
pub use submission::*;
