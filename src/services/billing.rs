//! Invoices and billing history

use super::list_all;
use crate::api::{self, fetch_page, BillingHistoryRoot, InvoiceItemsRoot, InvoicesRoot};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::paginate_with_aux;
use serde::Serialize;

const INVOICES_PATH: &str = "v2/customers/my/invoices";

wrapper!(
    /// A line item of an invoice
    InvoiceItem => api::InvoiceItem
);
wrapper!(
    /// A billing history entry
    BillingHistoryEntry => api::BillingHistoryEntry
);

/// Every issued invoice plus the preview of the upcoming one
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceList {
    pub invoices: Vec<api::InvoiceListItem>,
    pub invoice_preview: Option<api::InvoiceListItem>,
}

/// Line items of one invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Invoice {
    pub invoice_items: Vec<InvoiceItem>,
}

/// Account billing history
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BillingHistory {
    pub billing_history: Vec<BillingHistoryEntry>,
}

#[derive(Debug, Clone)]
pub struct InvoicesService {
    client: HttpClient,
}

impl InvoicesService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// All invoices. The preview is the one sent with the last page.
    pub async fn list(&self) -> Result<InvoiceList> {
        let client = &self.client;
        let aggregate = paginate_with_aux(move |page| {
            fetch_page::<InvoicesRoot>(client, INVOICES_PATH, RequestConfig::new(), page)
        })
        .await?;

        Ok(InvoiceList {
            invoices: aggregate.items,
            invoice_preview: aggregate.aux,
        })
    }

    /// Line items of invoice `id`
    pub async fn get(&self, id: &str) -> Result<Invoice> {
        let path = format!("{INVOICES_PATH}/{id}");
        let invoice_items =
            list_all::<InvoiceItemsRoot, _>(&self.client, &path, RequestConfig::new()).await?;
        Ok(Invoice { invoice_items })
    }
}

#[derive(Debug, Clone)]
pub struct BillingHistoryService {
    client: HttpClient,
}

impl BillingHistoryService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<BillingHistory> {
        let billing_history = list_all::<BillingHistoryRoot, _>(
            &self.client,
            "v2/customers/my/billing_history",
            RequestConfig::new(),
        )
        .await?;
        Ok(BillingHistory { billing_history })
    }
}
