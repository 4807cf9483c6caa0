mod commands;
mod display;
mod handlers;
mod shell;

pub use commands::{Cli, Commands};
pub use display::{note_detail, note_list, note_summary};
pub use handlers::{
    handle_add, handle_delete, handle_edit, handle_init, handle_list, handle_search,
    handle_shell, handle_show, PROJECT_DIR,
};
pub use shell::Shell;
