use {
    crate::{
        commands::{Command, CommandFlow},
        context::SolSenderContext,
        prompt::{prompt_keypair_path, prompt_network, prompt_text},
        ui::print_error,
    },
    console::style,
    std::fmt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    SendSol,
    RefreshBalance,
    SwitchNetwork,
    ConnectWallet,
    DisconnectWallet,
    Exit,
}

impl MainCommand {
    /// Menu entries for the current session. Sending needs a connected,
    /// idle wallet.
    ///
    /// The loop awaits each send before rendering the menu again, so `busy`
    /// is false there today. It follows [`AppState::is_busy`] so a caller that
    /// renders while a send is in flight gets the right menu.
    ///
    /// [`AppState::is_busy`]: crate::state::AppState::is_busy
    pub fn available(wallet_connected: bool, busy: bool) -> Vec<MainCommand> {
        let mut options = Vec::with_capacity(5);
        if wallet_connected {
            if !busy {
                options.push(MainCommand::SendSol);
            }
            options.push(MainCommand::RefreshBalance);
            options.push(MainCommand::SwitchNetwork);
            options.push(MainCommand::DisconnectWallet);
        } else {
            options.push(MainCommand::ConnectWallet);
            options.push(MainCommand::SwitchNetwork);
        }
        options.push(MainCommand::Exit);
        options
    }
}

impl fmt::Display for MainCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MainCommand::SendSol => "Send SOL",
            MainCommand::RefreshBalance => "Refresh balance",
            MainCommand::SwitchNetwork => "Switch network",
            MainCommand::ConnectWallet => "Connect wallet",
            MainCommand::DisconnectWallet => "Disconnect wallet",
            MainCommand::Exit => "Exit",
        };
        f.write_str(label)
    }
}

impl Command for MainCommand {
    async fn process_command(&self, ctx: &mut SolSenderContext) -> anyhow::Result<CommandFlow> {
        match self {
            MainCommand::SendSol => {
                let receiver_address = prompt_text(
                    "Receiver address:",
                    "Enter account address where you want to send SOL",
                );
                let receiver_amount =
                    prompt_text("Amount (SOL):", "Enter amount to be sent (in SOL)");

                ctx.send(receiver_address, receiver_amount).await;
            }
            MainCommand::RefreshBalance => ctx.refresh(),
            MainCommand::SwitchNetwork => {
                let network = prompt_network(ctx.state().network())?;
                ctx.switch_network(network);
            }
            MainCommand::ConnectWallet => {
                let default_path = ctx
                    .wallet()
                    .keypair_path()
                    .unwrap_or(ctx.config().keypair_path.as_path())
                    .to_path_buf();
                let path = prompt_keypair_path("Enter keypair path:", &default_path);
                match ctx.connect_wallet(&path) {
                    Ok(pubkey) => println!(
                        "{} {}",
                        style("Connected:").green().bold(),
                        style(pubkey).cyan()
                    ),
                    Err(err) => print_error(err),
                }
            }
            MainCommand::DisconnectWallet => {
                ctx.disconnect_wallet();
                println!("{}", style("Wallet disconnected").yellow());
            }
            MainCommand::Exit => return Ok(CommandFlow::Exit),
        }

        Ok(CommandFlow::Processed)
    }
}
