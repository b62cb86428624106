pub mod cli_args;
pub mod filters;
pub mod menu;
pub mod raw_data;
