//! Load balancers service

use super::list_all;
use crate::api::{self, LoadBalancersRoot};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};

wrapper!(
    /// A load balancer
    LoadBalancer => api::LoadBalancer
);

#[derive(Debug, Clone)]
pub struct LoadBalancersService {
    client: HttpClient,
}

impl LoadBalancersService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<LoadBalancer>> {
        list_all::<LoadBalancersRoot, _>(&self.client, "v2/load_balancers", RequestConfig::new())
            .await
    }
}
