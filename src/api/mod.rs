//! API wire format
//!
//! Entity structs and the list envelopes the API wraps them in. Every list
//! endpoint answers with one top-level array named after the resource plus
//! optional `links` and `meta` objects:
//!
//! ```json
//! {
//!   "servers": [ ... ],
//!   "links": { "pages": { "next": "https://api.binarylane.com.au/v2/servers?page=2" } },
//!   "meta": { "total": 412 }
//! }
//! ```

pub mod models;

use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{Links, Meta, Page, PageMeta, PageSelector};
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub use models::*;

/// A decoded list response that can be turned into one [`Page`]
pub trait ListEnvelope: DeserializeOwned {
    /// Element type of the list
    type Item;
    /// Non-element envelope data carried alongside the list
    type Aux;

    /// Split the envelope into elements, auxiliary data and page signals
    fn into_page(self) -> Page<Self::Item, Self::Aux>;
}

/// Fetch and decode one page of a list endpoint
pub async fn fetch_page<E: ListEnvelope>(
    client: &HttpClient,
    path: &str,
    request: RequestConfig,
    selector: PageSelector,
) -> Result<Page<E::Item, E::Aux>> {
    let envelope: E = client
        .get_json_with_config(path, request.page(selector))
        .await?;
    Ok(envelope.into_page())
}

macro_rules! list_envelope {
    ($(#[$attr:meta])* $root:ident { $field:ident: $item:ty }) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Default, Deserialize)]
        pub struct $root {
            #[serde(default)]
            pub $field: Vec<$item>,
            #[serde(default)]
            pub links: Option<Links>,
            #[serde(default)]
            pub meta: Option<Meta>,
        }

        impl ListEnvelope for $root {
            type Item = $item;
            type Aux = ();

            fn into_page(self) -> Page<Self::Item, Self::Aux> {
                let meta = PageMeta::from_envelope(self.links.as_ref(), self.meta.as_ref());
                Page::new(self.$field, meta)
            }
        }
    };
}

list_envelope!(
    /// `GET /v2/servers`
    ServersRoot { servers: Server }
);
list_envelope!(
    /// `GET /v2/servers/{id}/kernels`
    KernelsRoot { kernels: Kernel }
);
list_envelope!(
    /// `GET /v2/servers/{id}/snapshots`
    SnapshotsRoot { snapshots: Image }
);
list_envelope!(
    /// `GET /v2/servers/{id}/backups`
    BackupsRoot { backups: Image }
);
list_envelope!(
    /// `GET /v2/actions` and the per-resource action lists
    ActionsRoot { actions: Action }
);
list_envelope!(
    /// `GET /v2/firewalls`
    FirewallsRoot { firewalls: Firewall }
);
list_envelope!(
    /// `GET /v2/floating_ips`
    FloatingIpsRoot { floating_ips: FloatingIp }
);
list_envelope!(
    /// `GET /v2/tags`
    TagsRoot { tags: Tag }
);
list_envelope!(
    /// `GET /v2/regions`
    RegionsRoot { regions: Region }
);
list_envelope!(
    /// `GET /v2/sizes`
    SizesRoot { sizes: Size }
);
list_envelope!(
    /// `GET /v2/vpcs`
    VpcsRoot { vpcs: Vpc }
);
list_envelope!(
    /// `GET /v2/load_balancers`
    LoadBalancersRoot { load_balancers: LoadBalancer }
);
list_envelope!(
    /// `GET /v2/customers/my/invoices/{id}`
    InvoiceItemsRoot { invoice_items: InvoiceItem }
);
list_envelope!(
    /// `GET /v2/customers/my/billing_history`
    BillingHistoryRoot { billing_history: BillingHistoryEntry }
);

/// `GET /v2/customers/my/invoices`
///
/// Besides the invoice list, every page repeats a preview of the
/// not-yet-issued invoice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoicesRoot {
    #[serde(default)]
    pub invoices: Vec<InvoiceListItem>,
    #[serde(default)]
    pub invoice_preview: Option<InvoiceListItem>,
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl ListEnvelope for InvoicesRoot {
    type Item = InvoiceListItem;
    type Aux = InvoiceListItem;

    fn into_page(self) -> Page<Self::Item, Self::Aux> {
        let meta = PageMeta::from_envelope(self.links.as_ref(), self.meta.as_ref());
        Page {
            items: self.invoices,
            aux: self.invoice_preview,
            meta,
        }
    }
}
