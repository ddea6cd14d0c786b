pub mod command;
pub mod prompt;
pub mod run;

pub use run::{Session, run_app};
