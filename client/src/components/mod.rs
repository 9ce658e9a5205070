pub mod chat_panel;
pub mod command_bar;
pub mod lobby_bar;
pub mod status_bar;
pub mod table_host;
