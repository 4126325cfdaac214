//! VPCs service

use super::list_all;
use crate::api::{self, VpcsRoot};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};

wrapper!(
    /// A VPC
    Vpc => api::Vpc
);

#[derive(Debug, Clone)]
pub struct VpcsService {
    client: HttpClient,
}

impl VpcsService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Vpc>> {
        list_all::<VpcsRoot, _>(&self.client, "v2/vpcs", RequestConfig::new()).await
    }
}
