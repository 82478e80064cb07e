use {
    crate::context::SolSenderContext,
    console::style,
    std::process::{ExitCode, Termination},
};

pub mod main_command;

pub enum CommandFlow {
    Processed,
    Exit,
}

impl Termination for CommandFlow {
    fn report(self) -> ExitCode {
        println!("{}", style("Goodbye 👋").dim());
        ExitCode::SUCCESS
    }
}

pub trait Command {
    async fn process_command(&self, ctx: &mut SolSenderContext) -> anyhow::Result<CommandFlow>;
}
