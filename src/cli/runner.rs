//! CLI runner - executes commands

use crate::api::InvoiceListItem;
use crate::cli::commands::{
    Cli, Commands, FirewallCommand, FloatingIpActionCommand, InvoiceCommand, ListCommand,
    ServerCommand,
};
use crate::cli::display::{with_trailing, Output, Table, Tabular};
use crate::config::{ConfigFile, Settings};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::services::{BillingHistoryEntry, InvoiceItem, Services};
use std::io::Write;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its result to stdout
    pub async fn run(&self) -> Result<()> {
        let rendered = self.execute().await?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Run the CLI command and return its rendered result
    pub async fn execute(&self) -> Result<String> {
        let settings = self.settings()?;
        debug!(api_url = %settings.api_url, context = %settings.context, "Resolved settings");

        let client = HttpClient::with_config(
            HttpClientConfig::builder()
                .base_url(&settings.api_url)
                .token(&settings.access_token)
                .build(),
        )?;
        let services = Services::new(&client);
        let output = Output::new(settings.output, !self.cli.no_header);

        self.dispatch(&services, output).await
    }

    /// Layer flags over environment over config file
    fn settings(&self) -> Result<Settings> {
        let file = match self.cli.config.clone().or_else(ConfigFile::default_path) {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        Settings::resolve(&file, &self.cli.overrides())
    }

    async fn dispatch(&self, services: &Services, output: Output) -> Result<String> {
        match &self.cli.command {
            Commands::Server(command) => Self::server(services, output, command).await,
            Commands::Action(ListCommand::List) => output.list(&services.actions.list().await?),
            Commands::Firewall(FirewallCommand::List { server }) => {
                let firewalls = match server {
                    Some(id) => services.firewalls.list_by_server(*id).await?,
                    None => services.firewalls.list().await?,
                };
                output.list(&firewalls)
            }
            Commands::FloatingIp(ListCommand::List) => {
                output.list(&services.floating_ips.list().await?)
            }
            Commands::FloatingIpAction(FloatingIpActionCommand::List { ip }) => {
                output.list(&services.floating_ip_actions.list(ip).await?)
            }
            Commands::Invoice(command) => Self::invoice(services, output, command).await,
            Commands::BillingHistory(ListCommand::List) => {
                let history = services.billing_history.list().await?;
                output.render(&history, || {
                    Table::from_items(&history.billing_history, &BillingHistoryEntry::columns())
                })
            }
            Commands::Tag(ListCommand::List) => output.list(&services.tags.list().await?),
            Commands::Region(ListCommand::List) => output.list(&services.regions.list().await?),
            Commands::Size(ListCommand::List) => output.list(&services.sizes.list().await?),
            Commands::Vpc(ListCommand::List) => output.list(&services.vpcs.list().await?),
            Commands::LoadBalancer(ListCommand::List) => {
                output.list(&services.load_balancers.list().await?)
            }
        }
    }

    async fn server(
        services: &Services,
        output: Output,
        command: &ServerCommand,
    ) -> Result<String> {
        let servers = &services.servers;
        match command {
            ServerCommand::List { tag: Some(tag) } => {
                output.list(&servers.list_by_tag(tag).await?)
            }
            ServerCommand::List { tag: None } => output.list(&servers.list().await?),
            ServerCommand::Kernels { id } => output.list(&servers.kernels(*id).await?),
            ServerCommand::Snapshots { id } => output.list(&servers.snapshots(*id).await?),
            ServerCommand::Backups { id } => output.list(&servers.backups(*id).await?),
            ServerCommand::Actions { id } => output.list(&servers.actions(*id).await?),
        }
    }

    async fn invoice(
        services: &Services,
        output: Output,
        command: &InvoiceCommand,
    ) -> Result<String> {
        match command {
            InvoiceCommand::List => {
                let list = services.invoices.list().await?;
                output.render(&list, || {
                    Table::from_items(
                        with_trailing(&list.invoices, list.invoice_preview.as_ref()),
                        &InvoiceListItem::columns(),
                    )
                })
            }
            InvoiceCommand::Get { id } => {
                let invoice = services.invoices.get(id).await?;
                output.render(&invoice, || {
                    Table::from_items(&invoice.invoice_items, &InvoiceItem::columns())
                })
            }
        }
    }
}
