use colored::Colorize;

use crate::{app::App, cli::Commands, error::AppError};

/// Sentinel choice that leaves the menu
const QUIT_OPTION: &str = "quit";

/// Menu actions in display order
const ACTIONS: [&str; 5] = [
    "switch profile",
    "add profile",
    "remove profile",
    "list profiles",
    "show current profile",
];

/// Runs interactive menu interface until `quit` is chosen
pub fn run_menu(app: &App) -> Result<(), AppError> {
    let actions: Vec<String> = ACTIONS.iter().map(|action| action.to_string()).collect();

    loop {
        let Some(index) = app
            .prompter()
            .select("Select action", &actions, QUIT_OPTION)?
        else {
            println!("{}", "quitting".yellow());
            break Ok(());
        };

        app.execute(action_command(index))?;
    }
}

/// Maps a menu index onto the subcommand it runs
fn action_command(index: usize) -> Commands {
    match index {
        0 => Commands::Switch,
        1 => Commands::Add {
            name: None,
            username: None,
            email: None,
        },
        2 => Commands::Remove,
        3 => Commands::List,
        4 => Commands::Current,
        _ => unreachable!("unexpected menu index"),
    }
}
