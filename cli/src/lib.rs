pub mod convert;
pub mod convert_command;
pub mod print;
