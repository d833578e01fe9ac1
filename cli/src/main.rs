mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, generate, rotate};
use rekey_common::config::Config;
use rekey_common::rotation::Strategy;
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);

    let cfg = Config {
        quiet: commands.quiet,
        redact: commands.redact,
        csv: commands.csv,
        ..Config::default()
    };

    match commands.command {
        Commands::Random { args } => {
            let cfg = Config {
                timeout: Duration::from_secs(args.timeout),
                ..cfg
            };
            rotate::rotate(args, Strategy::Random, &cfg).await
        }
        Commands::Token {
            args,
            phrase,
            token,
            position,
        } => {
            let cfg = Config {
                timeout: Duration::from_secs(args.timeout),
                ..cfg
            };
            let strategy = Strategy::Token {
                kind: token,
                phrase,
                position,
            };
            rotate::rotate(args, strategy, &cfg).await
        }
        Commands::Gen { count } => generate::sample(count),
    }
}
