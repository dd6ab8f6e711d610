pub mod api;
pub mod html;
pub mod io;
pub mod models;
pub mod stages;

pub use api::{MacroSource, ZendeskClient, ZendeskConfig, ZendeskError, DEFAULT_ENDPOINT};
pub use html::html_to_text;
pub use io::ExportTable;
pub use models::{MacroAction, MacroPage, MacroRow, MergePolicy, ZendeskMacro};
pub use stages::{
    execute_export, execute_fetch, execute_normalize, execute_project, ExportResult, FetchConfig,
    FetchResult, NormalizeConfig, ProjectConfig,
};
