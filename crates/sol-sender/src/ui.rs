use {
    crate::{
        constants::BALANCE_PLACEHOLDER,
        misc::helpers::short_pubkey,
        state::{AppState, SendPhase, WalletBalance},
    },
    comfy_table::{Cell, Table, presets::UTF8_FULL},
    console::style,
    indicatif::{ProgressBar, ProgressStyle},
    solana_pubkey::Pubkey,
    std::time::Instant,
};

pub async fn show_spinner<F, T>(message: &str, fut: F) -> T
where
    F: std::future::Future<Output = T>,
{
    let spinner = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(template.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
    }
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner.set_message(message.to_string());

    let result = fut.await;
    spinner.finish_and_clear();

    result
}

pub fn print_error(message: impl std::fmt::Display) {
    println!("\n{}\n", style(message).red().bold());
}

pub fn format_balance(balance: WalletBalance) -> String {
    match balance {
        WalletBalance::Loading => "loading…".to_string(),
        WalletBalance::Known(sol) => format!("{sol} SOL"),
        WalletBalance::Unavailable => BALANCE_PLACEHOLDER.to_string(),
    }
}

fn phase_label(phase: SendPhase) -> &'static str {
    match phase {
        SendPhase::Idle => "Idle",
        SendPhase::Validating => "Validating",
        SendPhase::Submitting => "Submitting",
        SendPhase::Confirming => "Confirming",
    }
}

/// Network, wallet and balance, followed by the last transaction link while
/// it is still on display.
pub fn render_status(state: &mut AppState, wallet: Option<Pubkey>) {
    let Some(pubkey) = wallet else {
        println!(
            "\n{}\n",
            style("Please connect wallet to use the app.").yellow()
        );
        return;
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![
            Cell::new("Field")
                .add_attribute(comfy_table::Attribute::Bold)
                .fg(comfy_table::Color::Cyan),
            Cell::new("Value")
                .add_attribute(comfy_table::Attribute::Bold)
                .fg(comfy_table::Color::Cyan),
        ])
        .add_row(vec![
            Cell::new("Network"),
            Cell::new(state.network().as_str()),
        ])
        .add_row(vec![
            Cell::new("Wallet"),
            Cell::new(format!("{pubkey} ({})", short_pubkey(&pubkey))),
        ])
        .add_row(vec![
            Cell::new("Wallet Balance"),
            Cell::new(format_balance(state.balance())),
        ])
        .add_row(vec![
            Cell::new("Status"),
            Cell::new(phase_label(state.phase())),
        ]);

    println!("\n{table}");

    if let Some(result) = state.visible_result(Instant::now()) {
        println!(
            "{}{}",
            style(&result.message).green(),
            style(&result.link).cyan().underlined()
        );
    }
}
