//! Resource services
//!
//! One service per API resource. Each list method hands the pagination
//! driver a page fetcher bound to its endpoint, then wraps every returned
//! wire struct in the resource's public type. A list either returns every
//! element or an error; never part of the collection.

/// Declare a public wrapper around one wire struct
macro_rules! wrapper {
    ($(#[$attr:meta])* $name:ident => $wire:ty) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(pub $wire);

        impl $name {
            /// Unwrap into the wire struct
            pub fn into_inner(self) -> $wire {
                self.0
            }
        }

        impl From<$wire> for $name {
            fn from(inner: $wire) -> Self {
                Self(inner)
            }
        }

        impl std::ops::Deref for $name {
            type Target = $wire;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}

mod actions;
mod billing;
mod catalog;
mod firewalls;
mod floating_ips;
mod load_balancers;
mod servers;
mod tags;
mod vpcs;

pub use actions::{Action, ActionsService};
pub use billing::{
    BillingHistory, BillingHistoryEntry, BillingHistoryService, Invoice, InvoiceItem,
    InvoiceList, InvoicesService,
};
pub use catalog::{Region, RegionsService, Size, SizesService};
pub use firewalls::{Firewall, FirewallsService};
pub use floating_ips::{FloatingIp, FloatingIpActionsService, FloatingIpsService};
pub use load_balancers::{LoadBalancer, LoadBalancersService};
pub use servers::{Image, Kernel, Server, ServersService};
pub use tags::{Tag, TagsService};
pub use vpcs::{Vpc, VpcsService};

use crate::api::{fetch_page, ListEnvelope};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::paginate;

/// Fetch every page of `path` and wrap each element as `W`
pub(crate) async fn list_all<E, W>(
    client: &HttpClient,
    path: &str,
    request: RequestConfig,
) -> Result<Vec<W>>
where
    E: ListEnvelope<Aux = ()>,
    W: From<E::Item>,
{
    let items = paginate(move |page| fetch_page::<E>(client, path, request.clone(), page)).await?;
    Ok(items.into_iter().map(W::from).collect())
}

/// Every service, sharing one client
#[derive(Debug, Clone)]
pub struct Services {
    pub servers: ServersService,
    pub actions: ActionsService,
    pub firewalls: FirewallsService,
    pub floating_ips: FloatingIpsService,
    pub floating_ip_actions: FloatingIpActionsService,
    pub invoices: InvoicesService,
    pub billing_history: BillingHistoryService,
    pub tags: TagsService,
    pub regions: RegionsService,
    pub sizes: SizesService,
    pub vpcs: VpcsService,
    pub load_balancers: LoadBalancersService,
}

impl Services {
    /// Build all services on top of `client`
    pub fn new(client: &HttpClient) -> Self {
        Self {
            servers: ServersService::new(client.clone()),
            actions: ActionsService::new(client.clone()),
            firewalls: FirewallsService::new(client.clone()),
            floating_ips: FloatingIpsService::new(client.clone()),
            floating_ip_actions: FloatingIpActionsService::new(client.clone()),
            invoices: InvoicesService::new(client.clone()),
            billing_history: BillingHistoryService::new(client.clone()),
            tags: TagsService::new(client.clone()),
            regions: RegionsService::new(client.clone()),
            sizes: SizesService::new(client.clone()),
            vpcs: VpcsService::new(client.clone()),
            load_balancers: LoadBalancersService::new(client.clone()),
        }
    }
}
