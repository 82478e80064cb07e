use {
    crate::{
        commands::main_command::MainCommand, config::expand_tilde, network::SolanaNetwork,
        ui::print_error,
    },
    console::style,
    inquire::{InquireError, Select, Text},
    std::{
        path::{Path, PathBuf},
        process::exit,
    },
};

pub fn prompt_main_section(options: Vec<MainCommand>) -> anyhow::Result<MainCommand> {
    let command = Select::new("What would you like to do?", options)
        .with_page_size(10)
        .prompt()?;

    Ok(command)
}

/// Free-form text. Empty input is allowed; the send guards deal with it.
pub fn prompt_text(msg: &str, placeholder: &str) -> String {
    loop {
        match Text::new(msg).with_placeholder(placeholder).prompt() {
            Ok(v) => return v,
            Err(e) => match e {
                InquireError::OperationInterrupted | InquireError::OperationCanceled => {
                    println!("{}", style("Operation cancelled. Exiting.").yellow().bold());
                    exit(0);
                }
                _ => {
                    print_error(format!("Invalid input: {e}. Please try again."));
                    continue;
                }
            },
        }
    }
}

pub fn prompt_keypair_path(msg: &str, default_path: &Path) -> PathBuf {
    let default_path = default_path.display().to_string();

    loop {
        let input = match Text::new(msg)
            .with_default(&default_path)
            .with_help_message("Press Enter to use the default keypair")
            .prompt()
        {
            Ok(v) => v,
            Err(e) => match e {
                InquireError::OperationInterrupted | InquireError::OperationCanceled => {
                    println!("{}", style("Operation cancelled. Exiting.").yellow().bold());
                    exit(0);
                }
                _ => {
                    print_error(format!("Invalid input: {e}. Please try again."));
                    continue;
                }
            },
        };

        let input = input.trim();
        if input.is_empty() {
            print_error("Keypair path cannot be empty. Please try again.");
            continue;
        }

        return expand_tilde(input);
    }
}

pub fn prompt_network(current: SolanaNetwork) -> anyhow::Result<SolanaNetwork> {
    let starting_cursor = SolanaNetwork::all()
        .iter()
        .position(|network| *network == current)
        .unwrap_or(0);

    let network = Select::new("Select network:", SolanaNetwork::all().to_vec())
        .with_starting_cursor(starting_cursor)
        .prompt()?;

    Ok(network)
}
