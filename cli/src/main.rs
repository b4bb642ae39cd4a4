mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, check, explain, shell, template};
use netplan_trainer_common::task::TaskConfig;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = commands.config();
    let task = TaskConfig::from(commands.task.clone());

    match commands.command.unwrap_or(Commands::Shell) {
        Commands::Template => {
            template::template()?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Explain { topic } => {
            print::banner(cfg.no_banner, cfg.quiet);
            explain::explain(&topic, &cfg).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { file } => {
            print::banner(cfg.no_banner, cfg.quiet);
            let connected = check::check(file, task, &cfg).await?;
            Ok(if connected {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Shell => {
            print::banner(cfg.no_banner, cfg.quiet);
            shell::shell(task, &cfg).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
