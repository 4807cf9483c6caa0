use clap::Parser;
use pocketnote::cli::{
    handle_add, handle_delete, handle_edit, handle_init, handle_list, handle_search,
    handle_shell, handle_show, Cli, Commands,
};
use pocketnote::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let dir = cli.dir;
    let result = match cli.command {
        Commands::Init { backend } => handle_init(dir, backend),
        Commands::Add {
            title,
            content,
            stdin,
            json,
        } => handle_add(dir, title, content, stdin, json),
        Commands::List { json } => handle_list(dir, json),
        Commands::Search { query, json } => handle_search(dir, query, json),
        Commands::Show { id, json } => handle_show(dir, id, json),
        Commands::Edit {
            id,
            title,
            content,
            stdin,
            json,
        } => handle_edit(dir, id, title, content, stdin, json),
        Commands::Delete { id, force } => handle_delete(dir, id, force),
        Commands::Shell => handle_shell(dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
