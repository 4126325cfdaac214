//! Wire model for API entities
//!
//! Fields the API may omit default to empty values; unknown fields are
//! ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Servers
// ============================================================================

/// A server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    pub id: u64,
    pub name: String,
    /// Memory in MB
    pub memory: u64,
    pub vcpus: u32,
    /// Disk in GB
    pub disk: u64,
    pub region: Option<Region>,
    pub image: Option<Image>,
    pub size: Option<Size>,
    pub size_slug: String,
    pub backup_ids: Vec<u64>,
    pub snapshot_ids: Vec<u64>,
    pub features: Vec<String>,
    pub locked: bool,
    pub status: String,
    pub networks: Option<Networks>,
    pub created_at: Option<DateTime<Utc>>,
    pub kernel: Option<Kernel>,
    pub tags: Vec<String>,
    pub vpc_id: Option<u64>,
}

impl Server {
    /// First public IPv4 address
    pub fn public_ipv4(&self) -> Option<&str> {
        self.networks.as_ref()?.v4_of_type("public")
    }

    /// First private IPv4 address
    pub fn private_ipv4(&self) -> Option<&str> {
        self.networks.as_ref()?.v4_of_type("private")
    }

    /// First public IPv6 address
    pub fn public_ipv6(&self) -> Option<&str> {
        self.networks
            .as_ref()?
            .v6
            .iter()
            .find(|n| n.kind == "public")
            .map(|n| n.ip_address.as_str())
    }
}

/// Network interfaces of a server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Networks {
    pub v4: Vec<NetworkV4>,
    pub v6: Vec<NetworkV6>,
}

impl Networks {
    fn v4_of_type(&self, kind: &str) -> Option<&str> {
        self.v4
            .iter()
            .find(|n| n.kind == kind)
            .map(|n| n.ip_address.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkV4 {
    pub ip_address: String,
    pub netmask: String,
    pub gateway: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkV6 {
    pub ip_address: String,
    pub netmask: u32,
    pub gateway: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A kernel available to a server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kernel {
    pub id: u64,
    pub name: String,
    pub version: String,
}

/// An operating system image, snapshot or backup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub distribution: String,
    pub slug: Option<String>,
    pub public: bool,
    pub regions: Vec<String>,
    pub min_disk_size: u64,
    pub size_gigabytes: f64,
    pub created_at: Option<DateTime<Utc>>,
    pub description: String,
    pub status: String,
}

// ============================================================================
// Catalog
// ============================================================================

/// A datacenter region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    pub slug: String,
    pub name: String,
    pub sizes: Vec<String>,
    pub available: bool,
    pub features: Vec<String>,
}

/// A server size (plan)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Size {
    pub slug: String,
    pub description: String,
    pub memory: u64,
    pub vcpus: u32,
    pub disk: u64,
    pub transfer: f64,
    pub price_monthly: f64,
    pub price_hourly: f64,
    pub regions: Vec<String>,
    pub available: bool,
}

// ============================================================================
// Actions
// ============================================================================

/// An asynchronous operation against a resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    pub id: u64,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub resource_id: Option<u64>,
    pub resource_type: String,
    pub region_slug: Option<String>,
}

// ============================================================================
// Networking
// ============================================================================

/// A cloud firewall
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Firewall {
    pub id: String,
    pub name: String,
    pub status: String,
    pub inbound_rules: Vec<FirewallRule>,
    pub outbound_rules: Vec<FirewallRule>,
    pub server_ids: Vec<u64>,
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirewallRule {
    pub protocol: String,
    pub ports: String,
    pub sources: Option<FirewallTargets>,
    pub destinations: Option<FirewallTargets>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirewallTargets {
    pub addresses: Vec<String>,
    pub server_ids: Vec<u64>,
    pub tags: Vec<String>,
}

/// A floating (reassignable) IP address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingIp {
    pub ip: String,
    pub region: Option<Region>,
    pub server: Option<Server>,
}

/// A virtual private cloud
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vpc {
    pub id: u64,
    pub urn: String,
    pub name: String,
    pub description: String,
    pub region: String,
    pub ip_range: String,
    pub created_at: Option<DateTime<Utc>>,
    pub default: bool,
}

/// A load balancer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadBalancer {
    pub id: u64,
    pub name: String,
    pub ip: String,
    #[serde(rename = "size")]
    pub size_slug: String,
    pub algorithm: String,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub forwarding_rules: Vec<ForwardingRule>,
    pub region: Option<Region>,
    pub server_ids: Vec<u64>,
    pub tag: String,
    pub tags: Vec<String>,
    pub redirect_http_to_https: bool,
    pub enable_proxy_protocol: bool,
    pub vpc_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForwardingRule {
    pub entry_protocol: String,
    pub entry_port: u16,
    pub target_protocol: String,
    pub target_port: u16,
    pub certificate_id: String,
    pub tls_passthrough: bool,
}

impl std::fmt::Display for ForwardingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} -> {}:{}",
            self.entry_protocol, self.entry_port, self.target_protocol, self.target_port
        )
    }
}

// ============================================================================
// Tags
// ============================================================================

/// A tag and the resources carrying it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub name: String,
    pub resources: Option<TaggedResources>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggedResources {
    pub count: u64,
    pub last_tagged_uri: String,
    pub servers: Option<TaggedResourceCount>,
    pub images: Option<TaggedResourceCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggedResourceCount {
    pub count: u64,
    pub last_tagged_uri: String,
}

// ============================================================================
// Billing
// ============================================================================

/// One invoice in the invoice list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceListItem {
    pub invoice_uuid: String,
    pub invoice_id: String,
    pub amount: String,
    pub invoice_period: String,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A line item of an invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceItem {
    pub product: String,
    pub resource_id: String,
    pub resource_uuid: String,
    pub group_description: String,
    pub description: String,
    pub amount: String,
    pub duration: String,
    pub duration_unit: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub project_name: String,
}

/// A billing history entry (invoice or payment)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingHistoryEntry {
    pub description: String,
    pub amount: String,
    pub invoice_id: Option<String>,
    pub invoice_uuid: Option<String>,
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub kind: String,
}
