use clap::{Parser, Subcommand};

mod db;
mod product;
mod user;

#[derive(Debug, Parser)]
#[command(name = "kart-app", about = "Kart CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    User(user::UserCommand),
    Product(product::ProductCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::User(command) => user::run(command).await,
            Commands::Product(command) => product::run(command).await,
        }
    }
}
