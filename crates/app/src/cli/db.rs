use clap::{Args, Subcommand};
use shopfront_app::{context::AppContext, database::DatabaseSettings};

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Create the `users` and `cart` tables if they are missing
    CreateTables(CreateTablesArgs),
}

#[derive(Debug, Args)]
pub(crate) struct CreateTablesArgs {
    #[command(flatten)]
    database: DatabaseSettings,
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    match command.command {
        DbSubcommand::CreateTables(args) => create_tables(args).await,
    }
}

async fn create_tables(args: CreateTablesArgs) -> Result<(), String> {
    // Connecting creates `users`.
    let context = AppContext::connect(&args.database)
        .await
        .map_err(|error| format!("failed to prepare database: {error}"))?;

    let result = context
        .cart
        .create_table()
        .await
        .map_err(|error| format!("failed to create cart table: {error}"));

    context.close().await;

    result?;

    println!("tables ready: users, cart");

    Ok(())
}
