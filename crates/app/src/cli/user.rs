use clap::{Args, Subcommand};
use shopfront_app::{
    context::AppContext, database::DatabaseSettings, domain::accounts::data::Credentials,
};

#[derive(Debug, Args)]
pub(crate) struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    /// Register a user account
    Register(RegisterUserArgs),
}

#[derive(Debug, Args)]
pub(crate) struct RegisterUserArgs {
    /// Email address to register
    #[arg(long)]
    email: String,

    /// Plaintext password; only its hash is stored
    #[arg(long = "password", env = "SHOPFRONT_USER_PASSWORD", hide_env_values = true)]
    user_password: String,

    #[command(flatten)]
    database: DatabaseSettings,
}

pub(crate) async fn run(command: UserCommand) -> Result<(), String> {
    match command.command {
        UserSubcommand::Register(args) => register(args).await,
    }
}

async fn register(args: RegisterUserArgs) -> Result<(), String> {
    let context = AppContext::connect(&args.database)
        .await
        .map_err(|error| format!("failed to prepare database: {error}"))?;

    let result = context
        .accounts
        .register(Credentials::new(args.email, args.user_password))
        .await
        .map_err(|error| format!("failed to register user: {error}"));

    context.close().await;

    let user = result?;

    println!("user_uuid: {}", user.uuid);
    println!("email: {}", user.email);

    Ok(())
}
