use {
    console::style,
    log::warn,
    sol_sender::{
        cli::{self, CliCommand},
        commands::{Command, CommandFlow, main_command::MainCommand},
        config::{SolSenderConfig, sol_sender_config_path},
        context::SolSenderContext,
        error::SolSenderError,
        prompt::prompt_main_section,
        ui::render_status,
    },
    std::process::exit,
};

fn setup_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn load_config() -> anyhow::Result<SolSenderConfig> {
    match SolSenderConfig::load() {
        Ok(config) => Ok(config),
        Err(SolSenderError::ConfigPathDoesNotExist) => {
            let expected = sol_sender_config_path()?;
            warn!("no config at {}, using defaults", expected.display());
            println!(
                "{}",
                style(format!(
                    "⚠ No configuration file found at {}. Using defaults.",
                    expected.display()
                ))
                .yellow()
            );
            Ok(SolSenderConfig::default())
        }
        Err(err) => Err(err.into()),
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<CommandFlow> {
    setup_logger();

    let one_shot = cli::parse_from_env();
    if one_shot == Some(CliCommand::Help) {
        cli::print_usage();
        exit(0);
    }

    let config = load_config()?;
    let mut ctx = SolSenderContext::from(config);

    if let Some(command) = one_shot {
        if let Err(err) = cli::process(command, &mut ctx).await {
            if let Some(message) = cli::failure_message(&err) {
                eprintln!("{}", style(message).red().bold());
            }
            exit(1);
        }
        exit(0);
    }

    println!(
        "{}",
        style("⚡ Sol Sender: send SOL to any address").bold().cyan()
    );
    ctx.announce_network();

    loop {
        ctx.sync_balance().await;
        let wallet = ctx.pubkey();
        render_status(ctx.state_mut(), wallet);

        let options = MainCommand::available(wallet.is_some(), ctx.state().is_busy());
        let command = prompt_main_section(options)?;

        if let CommandFlow::Exit = command.process_command(&mut ctx).await? {
            break;
        }
    }

    Ok(CommandFlow::Exit)
}
