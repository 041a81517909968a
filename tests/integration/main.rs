mod cli_commands;
mod config_loading;
mod logging_filter;
