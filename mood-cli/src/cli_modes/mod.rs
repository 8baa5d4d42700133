mod cli_mode;
mod delete_mode;
mod prompt;
mod read_mode;
mod record_mode;

pub use cli_mode::CliModeResult;
pub use delete_mode::delete_mode;
pub use read_mode::read_mode;
pub use record_mode::record_mode;
