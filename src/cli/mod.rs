//! CLI module
//!
//! Command-line interface over the resource services.
//!
//! # Commands
//!
//! - `server` - list servers, or a server's kernels, snapshots, backups and actions
//! - `action`, `firewall`, `floating-ip`, `floating-ip-action` - list resources
//! - `invoice` - list invoices or show one invoice's line items
//! - `billing-history`, `tag`, `region`, `size`, `vpc`, `load-balancer` - list resources

mod commands;
mod display;
mod runner;

pub use commands::{
    Cli, Commands, FirewallCommand, FloatingIpActionCommand, InvoiceCommand, ListCommand,
    ServerCommand,
};
pub use display::{Output, Table, TableColumn, Tabular};
pub use runner::Runner;
