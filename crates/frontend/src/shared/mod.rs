pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod data_table;
pub mod forms;
pub mod icons;
pub mod list_page;
pub mod list_utils;
pub mod notifications;
pub mod page_frame;
pub mod table_utils;
