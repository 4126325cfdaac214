//! CLI commands and argument parsing

use crate::config::{OutputFormat, Overrides};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// BinaryLane command-line interface
#[derive(Parser, Debug)]
#[command(name = "bl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (YAML)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API access token
    #[arg(short = 't', long, global = true)]
    pub access_token: Option<String>,

    /// Override the API base URL
    #[arg(short = 'u', long, global = true)]
    pub api_url: Option<String>,

    /// Auth context to use
    #[arg(long, global = true)]
    pub context: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Omit the header row in text output
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings given as flags, for layering over env and config file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            access_token: self.access_token.clone(),
            api_url: self.api_url.clone(),
            context: self.context.clone(),
            output: self.output,
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Servers and their kernels, snapshots, backups and actions
    #[command(subcommand, alias = "servers")]
    Server(ServerCommand),

    /// Account actions
    #[command(subcommand, alias = "actions")]
    Action(ListCommand),

    /// Cloud firewalls
    #[command(subcommand, alias = "firewalls")]
    Firewall(FirewallCommand),

    /// Floating IPs
    #[command(subcommand, alias = "floating-ips")]
    FloatingIp(ListCommand),

    /// Actions performed on floating IPs
    #[command(subcommand, alias = "floating-ip-actions")]
    FloatingIpAction(FloatingIpActionCommand),

    /// Invoices
    #[command(subcommand, alias = "invoices")]
    Invoice(InvoiceCommand),

    /// Billing history
    #[command(subcommand)]
    BillingHistory(ListCommand),

    /// Tags
    #[command(subcommand, alias = "tags")]
    Tag(ListCommand),

    /// Regions
    #[command(subcommand, alias = "regions")]
    Region(ListCommand),

    /// Server sizes
    #[command(subcommand, alias = "sizes")]
    Size(ListCommand),

    /// VPCs
    #[command(subcommand, alias = "vpcs")]
    Vpc(ListCommand),

    /// Load balancers
    #[command(subcommand, alias = "load-balancers")]
    LoadBalancer(ListCommand),
}

/// Resources that only support listing
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommand {
    /// List all
    #[command(visible_alias = "ls")]
    List,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ServerCommand {
    /// List servers
    #[command(visible_alias = "ls")]
    List {
        /// Only servers carrying this tag
        #[arg(long, alias = "tag-name")]
        tag: Option<String>,
    },

    /// List kernels available to a server
    Kernels {
        /// Server ID
        id: u64,
    },

    /// List snapshots of a server
    Snapshots {
        /// Server ID
        id: u64,
    },

    /// List backups of a server
    Backups {
        /// Server ID
        id: u64,
    },

    /// List actions performed on a server
    Actions {
        /// Server ID
        id: u64,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirewallCommand {
    /// List firewalls
    #[command(visible_alias = "ls")]
    List {
        /// Only firewalls applied to this server
        #[arg(long)]
        server: Option<u64>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum FloatingIpActionCommand {
    /// List actions performed on a floating IP
    #[command(visible_alias = "ls")]
    List {
        /// Floating IP address
        ip: String,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum InvoiceCommand {
    /// List invoices
    #[command(visible_alias = "ls")]
    List,

    /// Show the line items of an invoice
    #[command(visible_alias = "g")]
    Get {
        /// Invoice UUID
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "bl", "vpc", "ls", "-t", "token", "-u", "http://localhost", "-o", "json",
        ])
        .unwrap();

        assert_eq!(cli.access_token.as_deref(), Some("token"));
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost"));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Vpc(ListCommand::List)));
    }

    #[test]
    fn test_plural_alias() {
        let cli = Cli::try_parse_from(["bl", "vpcs", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::Vpc(ListCommand::List)));
    }

    #[test]
    fn test_server_list_by_tag() {
        let cli = Cli::try_parse_from(["bl", "server", "list", "--tag", "web"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Server(ServerCommand::List { tag: Some(ref t) }) if t == "web"
        ));
    }

    #[test]
    fn test_nested_commands() {
        let cli = Cli::try_parse_from(["bl", "server", "kernels", "42"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Server(ServerCommand::Kernels { id: 42 })
        ));

        let cli = Cli::try_parse_from(["bl", "floating-ip-action", "ls", "10.0.0.1"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::FloatingIpAction(FloatingIpActionCommand::List { ref ip }) if ip == "10.0.0.1"
        ));

        let cli = Cli::try_parse_from(["bl", "firewall", "list", "--server", "5"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Firewall(FirewallCommand::List { server: Some(5) })
        ));
    }

    #[test]
    fn test_invalid_server_id() {
        assert!(Cli::try_parse_from(["bl", "server", "backups", "abc"]).is_err());
    }

    #[test]
    fn test_overrides_from_flags() {
        let cli = Cli::try_parse_from(["bl", "--context", "staging", "tag", "list"]).unwrap();
        let overrides = cli.overrides();

        assert_eq!(overrides.context.as_deref(), Some("staging"));
        assert_eq!(overrides.access_token, None);
        assert_eq!(overrides.output, None);
    }
}
