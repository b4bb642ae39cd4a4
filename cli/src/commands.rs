pub mod check;
pub mod explain;
pub mod shell;
pub mod template;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use netplan_trainer_common::config::{Config, DEFAULT_BASE_URL, DEFAULT_MODEL, ServiceConfig};
use netplan_trainer_common::task::{
    DEFAULT_CLIENT_IP, DEFAULT_CLIENT_RANGE, DEFAULT_SERVER_LAN_IP, DEFAULT_WAN_IP, TaskConfig,
};

#[derive(Parser)]
#[command(name = "netplan-trainer")]
#[command(version, about = "Practice Netplan static addressing against an AI examiner.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub task: TaskArgs,

    /// API key of the reasoning service
    #[arg(long, env = "API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Model used to judge configurations
    #[arg(long, default_value = DEFAULT_MODEL, global = true)]
    pub model: String,

    /// Base URL of the reasoning service API
    #[arg(long, default_value = DEFAULT_BASE_URL, global = true, hide = true)]
    pub base_url: String,

    /// Skip the start-up banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output (-q drops decorations, -qq prints only the verdict)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive training session (default)
    #[command(alias = "sh")]
    Shell,
    /// Validate a configuration file once and exit
    #[command(alias = "c")]
    Check {
        /// Netplan YAML to check, '-' for stdin; the starting template when omitted
        file: Option<PathBuf>,
    },
    /// Ask for a short explanation of a Netplan concept
    #[command(alias = "e")]
    Explain { topic: String },
    /// Print the starting configuration template
    #[command(alias = "t")]
    Template,
}

#[derive(Args, Debug, Clone)]
pub struct TaskArgs {
    /// Address the server's LAN interface must carry
    #[arg(long, default_value = DEFAULT_SERVER_LAN_IP, global = true)]
    pub server_lan_ip: String,
    /// Subnet the clients belong to
    #[arg(long, default_value = DEFAULT_CLIENT_RANGE, global = true)]
    pub client_range: String,
    /// Probe client address
    #[arg(long, default_value = DEFAULT_CLIENT_IP, global = true)]
    pub client_ip: String,
    /// Simulated WAN address (diagram only)
    #[arg(long, default_value = DEFAULT_WAN_IP, global = true)]
    pub wan_ip: String,
}

impl From<TaskArgs> for TaskConfig {
    fn from(args: TaskArgs) -> Self {
        TaskConfig {
            server_lan_ip: args.server_lan_ip,
            client_range: args.client_range,
            client_ip: args.client_ip,
            wan_ip: args.wan_ip,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            service: ServiceConfig::new(self.api_key.clone())
                .with_model(self.model.clone())
                .with_base_url(self.base_url.clone()),
        }
    }
}
