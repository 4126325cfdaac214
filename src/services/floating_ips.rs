//! Floating IP services

use super::{list_all, Action};
use crate::api::{self, ActionsRoot, FloatingIpsRoot};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};

const FLOATING_IPS_PATH: &str = "v2/floating_ips";

wrapper!(
    /// A floating IP
    FloatingIp => api::FloatingIp
);

#[derive(Debug, Clone)]
pub struct FloatingIpsService {
    client: HttpClient,
}

impl FloatingIpsService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// All floating IPs
    pub async fn list(&self) -> Result<Vec<FloatingIp>> {
        list_all::<FloatingIpsRoot, _>(&self.client, FLOATING_IPS_PATH, RequestConfig::new())
            .await
    }
}

/// Actions performed on floating IPs
#[derive(Debug, Clone)]
pub struct FloatingIpActionsService {
    client: HttpClient,
}

impl FloatingIpActionsService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Actions performed on `ip`
    pub async fn list(&self, ip: &str) -> Result<Vec<Action>> {
        let path = format!("{FLOATING_IPS_PATH}/{ip}/actions");
        list_all::<ActionsRoot, _>(&self.client, &path, RequestConfig::new()).await
    }
}
