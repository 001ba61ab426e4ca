use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    /// Register a user and print their API token
    Create(create::CreateUserArgs),
}

pub(crate) async fn run(command: UserCommand) -> Result<(), String> {
    match command.command {
        UserSubcommand::Create(args) => create::run(args).await,
    }
}

#[cfg(test)]
pub(super) fn wallet_money(command: &UserCommand) -> Option<u64> {
    match &command.command {
        UserSubcommand::Create(args) => Some(args.wallet_money),
    }
}
