use clap::Parser;
use smartdo::{cli, config, errors};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    // Logs go to stderr so command output stays pipeable.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }

    let global = cli.global.clone();
    let result = match cli.command {
        cli::Commands::Serve(args) => cli::serve::handle_serve(args, &global).await,
        cli::Commands::Add(args) => cli::tasks::handle_add(args, &global).await,
        cli::Commands::List(args) => cli::tasks::handle_list(args, &global).await,
        cli::Commands::Done(args) => cli::tasks::handle_done(args, &global).await,
        cli::Commands::Edit(args) => cli::tasks::handle_edit(args, &global).await,
        cli::Commands::Delete(args) => cli::tasks::handle_delete(args, &global).await,
        cli::Commands::SuggestCategory(args) => cli::suggest::handle_suggest_category(args, &global).await,
        cli::Commands::Remind(args) => cli::suggest::handle_remind(args, &global).await,
        cli::Commands::Habits(args) => cli::habits::handle_habits(args, &global).await,
        cli::Commands::Validate(args) => handle_validate(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let exit_code = match &e {
            errors::SmartdoError::Config(_) => 2,
            e if e.is_validation() => 3,
            e if e.is_upstream() => 4,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), errors::SmartdoError> {
    let path = std::path::PathBuf::from(&args.config);
    let config = config::parse_config(&path).await?;
    let llm = config.resolved_llm();
    println!("Configuration is valid: {}", args.config);
    println!("  provider: {} ({})", llm.provider, llm.model);
    println!("  api key:  {}", if llm.api_key.is_some() { "set" } else { "not set" });
    println!("  storage:  {}", config.db_path());
    println!("  server:   {}:{}", config.host(), config.port());
    Ok(())
}
