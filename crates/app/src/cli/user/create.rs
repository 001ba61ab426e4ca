use std::sync::Arc;

use clap::Args;
use kart_app::{
    database::{self, Db},
    domain::users::{
        PgUsersRepository, UsersService, UsersServiceImpl, generate_token, hash_token,
        models::{DEFAULT_WALLET_MONEY, NewUser, UserUuid},
    },
};

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// Login email, unique per user
    #[arg(long)]
    email: String,

    /// Display name
    #[arg(long)]
    name: String,

    /// Shipping address; left unset when omitted
    #[arg(long)]
    address: Option<String>,

    /// Starting wallet balance
    #[arg(long, default_value_t = DEFAULT_WALLET_MONEY)]
    pub(super) wallet_money: u64,

    /// Optional raw API token; generated when omitted
    #[arg(long)]
    token: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    let raw_token = args.token.unwrap_or_else(generate_token);

    if raw_token.trim().is_empty() {
        return Err("token cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = UsersServiceImpl::new(Arc::new(PgUsersRepository::new(Db::new(pool))));

    let user = service
        .create_user(NewUser {
            uuid: UserUuid::new(),
            email: args.email,
            name: args.name,
            address: args.address,
            wallet_money: args.wallet_money,
            token_hash: hash_token(&raw_token),
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("user_email: {}", user.email);
    println!("wallet_money: {}", user.wallet_money);
    println!("api_token: {raw_token}");
    println!("store this token now; it is only shown once");

    Ok(())
}
