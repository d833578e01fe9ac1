pub mod generate;
pub mod rotate;

use clap::{ArgAction, Args, Parser, Subcommand};
use rekey_common::rotation::{Phrase, PositionMode, TokenKind};

#[derive(Parser)]
#[command(name = "rekey")]
#[command(about = "Rotate a local account's password across a fleet of hosts.")]
pub struct CommandLine {
    /// Suppress decoration; repeat to keep only the summary
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Mask password values in all rendered output
    #[arg(long, global = true)]
    pub redact: bool,

    /// Emit CSV rows instead of the table
    #[arg(long, global = true)]
    pub csv: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rotate with a fresh random complexity-compliant password per host
    #[command(alias = "r")]
    Random {
        #[command(flatten)]
        args: RotateArgs,
    },
    /// Rotate with a per-host token combined with a static phrase
    #[command(alias = "t")]
    Token {
        #[command(flatten)]
        args: RotateArgs,

        /// Static phrase, 4-60 chars containing a lowercase letter, an
        /// uppercase letter, a digit and a symbol
        #[arg(long)]
        phrase: Phrase,

        /// Uniqueness token source: serial, hostname or mac
        #[arg(long, default_value = "hostname")]
        token: TokenKind,

        /// append = token+phrase, prepend = phrase+token
        #[arg(long, default_value = "append")]
        position: PositionMode,
    },
    /// Print locally generated sample passwords; touches no host
    #[command(alias = "g")]
    Gen {
        /// How many passwords to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
}

#[derive(Args)]
pub struct RotateArgs {
    /// Hosts to rotate; reads newline-separated hosts from stdin when empty
    pub hosts: Vec<String>,

    /// Local account whose password is rotated
    #[arg(long, default_value = "Administrator")]
    pub account: String,

    /// Command template that sets the password on a host. {host} and
    /// {account} are substituted; the new password arrives on stdin.
    #[arg(long)]
    pub apply_cmd: String,

    /// Command template printing the host's serial number ({host} substituted)
    #[arg(long)]
    pub serial_cmd: Option<String>,

    /// Command template printing one MAC address per line ({host} substituted)
    #[arg(long)]
    pub mac_cmd: Option<String>,

    /// TCP port used for the reachability probe
    #[arg(long, default_value_t = 445)]
    pub probe_port: u16,

    /// Per-host budget in seconds for derivation + apply
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
