use {
    crate::{
        context::SolSenderContext, error::SendRejection, send::SendOutcome, ui::format_balance,
    },
    anyhow::bail,
    console::style,
    std::{env, time::Instant},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Balance,
    Send { address: String, amount: String },
    Help,
}

pub fn parse_from_env() -> Option<CliCommand> {
    parse_args(env::args().skip(1))
}

/// `None` means no subcommand, which starts the interactive menu.
pub fn parse_args(mut args: impl Iterator<Item = String>) -> Option<CliCommand> {
    let subcommand = args.next()?;

    match subcommand.as_str() {
        "balance" => Some(CliCommand::Balance),
        "send" => {
            let (Some(address), Some(amount)) = (args.next(), args.next()) else {
                return Some(CliCommand::Help);
            };
            Some(CliCommand::Send { address, amount })
        }
        // help, -h, --help and anything unknown
        _ => Some(CliCommand::Help),
    }
}

/// Runs a one-shot command. Fails when the command did not do what was
/// asked, so the process can exit non-zero.
pub async fn process(command: CliCommand, ctx: &mut SolSenderContext) -> anyhow::Result<()> {
    match command {
        CliCommand::Balance => {
            let Some(pubkey) = ctx.pubkey() else {
                bail!("No wallet connected! Check keypair-path in your config.");
            };
            ctx.announce_network();
            ctx.sync_balance().await;
            let balance = ctx.state().balance();
            println!(
                "{} {}\n{} {}",
                style("Wallet:").green().bold(),
                style(pubkey).cyan(),
                style("Wallet Balance:").green().bold(),
                style(format_balance(balance)).cyan()
            );
            Ok(())
        }
        CliCommand::Send { address, amount } => {
            ctx.announce_network();
            // the balance guard needs a known balance to apply
            ctx.sync_balance().await;

            let outcome = ctx.send(address, amount).await;
            if let Some(result) = ctx.state_mut().visible_result(Instant::now()) {
                println!("{}{}", result.message, style(&result.link).cyan());
            }

            match outcome {
                SendOutcome::Confirmed { .. } => Ok(()),
                SendOutcome::Unconfirmed { signature } => {
                    bail!("Transaction {signature} was not confirmed")
                }
                SendOutcome::Rejected(rejection) => Err(rejection.into()),
                SendOutcome::Failed(err) => Err(err),
            }
        }
        CliCommand::Help => {
            print_usage();
            Ok(())
        }
    }
}

/// What to print when a one-shot command fails. A rejected send has already
/// been shown as a notification, so there is nothing left to add.
pub fn failure_message(err: &anyhow::Error) -> Option<String> {
    if err.downcast_ref::<SendRejection>().is_some() {
        return None;
    }
    Some(format!("{err:#}"))
}

pub fn print_usage() {
    println!("Usage: sol-sender [balance | send <address> <amount-in-sol> | help]");
    println!("Run without arguments for the interactive menu.");
    println!("Set RUST_LOG=debug for diagnostic output.");
}
