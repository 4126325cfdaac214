//! Rendering of command results
//!
//! Text output is an aligned table in the style of `tabwriter` with four
//! spaces of padding between columns. JSON output is the pretty-printed
//! serialization of the same values.

use crate::api::InvoiceListItem;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::services::{
    Action, BillingHistoryEntry, Firewall, FloatingIp, Image, InvoiceItem, Kernel, LoadBalancer,
    Region, Server, Size, Tag, Vpc,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::{self, Display};
use std::iter;

const COLUMN_PADDING: usize = 4;

// ============================================================================
// Table
// ============================================================================

/// Column name and the function extracting its cell from an item
pub type TableColumn<T> = (&'static str, fn(&T) -> String);

/// An aligned text table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    show_header: bool,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            header,
            rows,
            show_header: true,
        }
    }

    /// Build a table with one row per item
    pub fn from_items<'a, T, I>(items: I, columns: &[TableColumn<T>]) -> Self
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let header = columns.iter().map(|(name, _)| (*name).to_string()).collect();
        let rows = items
            .into_iter()
            .map(|item| columns.iter().map(|(_, cell)| cell(item)).collect())
            .collect();
        Self::new(header, rows)
    }

    /// Toggle the header row
    pub fn with_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    fn visible_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        let header = self.show_header.then_some(&self.header);
        header.into_iter().chain(self.rows.iter())
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.header.len()];
        for row in self.visible_rows() {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        for row in self.visible_rows() {
            let mut line = String::new();
            for (cell, width) in row.iter().zip(&widths) {
                line.push_str(&format!("{cell:<w$}", w = width + COLUMN_PADDING));
            }
            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}

// ============================================================================
// Output
// ============================================================================

/// Types listed as table rows
pub trait Tabular: Serialize + Sized {
    fn columns() -> Vec<TableColumn<Self>>;
}

/// Renders results in the selected format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    format: OutputFormat,
    header: bool,
}

impl Output {
    pub fn new(format: OutputFormat, header: bool) -> Self {
        Self { format, header }
    }

    /// Render a list of rows
    pub fn list<T: Tabular>(&self, items: &[T]) -> Result<String> {
        self.render(items, || Table::from_items(items, &T::columns()))
    }

    /// Render `value` as JSON, or the table built by `table` as text
    pub fn render<S, F>(&self, value: &S, table: F) -> Result<String>
    where
        S: Serialize + ?Sized,
        F: FnOnce() -> Table,
    {
        match self.format {
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(value)?)),
            OutputFormat::Text => Ok(table().with_header(self.header).to_string()),
        }
    }
}

// ============================================================================
// Columns
// ============================================================================

fn timestamp(time: &Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M:%S %z UTC").to_string())
        .unwrap_or_default()
}

fn opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn joined<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl Tabular for Server {
    fn columns() -> Vec<TableColumn<Self>> {
        let columns: &[TableColumn<Self>] = &[
            ("ID", |s: &Self| s.id.to_string()),
            ("Name", |s: &Self| s.name.clone()),
            ("Public IPv4", |s: &Self| s.public_ipv4().unwrap_or_default().to_string()),
            ("Private IPv4", |s: &Self| s.private_ipv4().unwrap_or_default().to_string()),
            ("Public IPv6", |s: &Self| s.public_ipv6().unwrap_or_default().to_string()),
            ("Memory", |s: &Self| s.memory.to_string()),
            ("VCPUs", |s: &Self| s.vcpus.to_string()),
            ("Disk", |s: &Self| s.disk.to_string()),
            ("Region", |s: &Self| {
                s.region.as_ref().map(|r| r.slug.clone()).unwrap_or_default()
            }),
            ("Image", |s: &Self| {
                s.image
                    .as_ref()
                    .map(|i| format!("{} {}", i.distribution, i.name).trim().to_string())
                    .unwrap_or_default()
            }),
            ("VPC ID", |s: &Self| opt(&s.vpc_id)),
            ("Status", |s: &Self| s.status.clone()),
            ("Tags", |s: &Self| {
                let mut tags = s.tags.clone();
                tags.sort();
                tags.join(",")
            }),
            ("Features", |s: &Self| s.features.join(",")),
        ];
        columns.to_vec()
    }
}

impl Tabular for Kernel {
    fn columns() -> Vec<TableColumn<Self>> {
        let columns: &[TableColumn<Self>] = &[
            ("ID", |k: &Self| k.id.to_string()),
            ("Name", |k: &Self| k.name.clone()),
            ("Version", |k: &Self| k.version.clone()),
        ];
        columns.to_vec()
    }
}

impl Tabular for Image {
    fn columns() -> Vec<TableColumn<Self>> {
        let columns: &[TableColumn<Self>] = &[
            ("ID", |i: &Self| i.id.to_string()),
            ("Name", |i: &Self| i.name.clone()),
            ("Type", |i: &Self| i.kind.clone()),
            ("Distribution", |i: &Self| i.distribution.clone()),
            ("Slug", |i: &Self| opt(&i.slug)),
            ("Public", |i: &Self| i.public.to_string()),
            ("Min Disk", |i: &Self| i.min_disk_size.to_string()),
            ("Created At", |i: &Self| timestamp(&i.created_at)),
        ];
        columns.to_vec()
    }
}

impl Tabular for Action {
    fn columns() -> Vec<TableColumn<Self>> {
        let columns: &[TableColumn<Self>] = &[
            ("ID", |a: &Self| a.id.to_string()),
            ("Status", |a: &Self| a.status.clone()),
            ("Type", |a: &Self| a.kind.clone()),
            ("Started At", |a: &Self| timestamp(&a.started_at)),
            ("Completed At", |a: &Self| timestamp(&a.completed_at)),
            ("Resource ID", |a: &Self| opt(&a.resource_id)),
            ("Resource Type", |a: &Self| a.resource_type.clone()),
            ("Region", |a: &Self| opt(&a.region_slug)),
        ];
        columns.to_vec()
    }
}

impl Tabular for Firewall {
    fn columns() -> Vec<TableColumn<Self>> {
        let columns: &[TableColumn<Self>] = &[
            ("ID", |fw: &Self| fw.id.clone()),
            ("Name", |fw: &Self| fw.name.clone()),
            ("Status", |fw: &Self| fw.status.clone()),
            ("Created At", |fw: &Self| timestamp(&fw.created_at)),
            ("Inbound Rules", |fw: &Self| {
                fw.inbound_rules
                    .iter()
                    .map(|r| format!("{}:{}", r.protocol, r.ports))
                    .collect::<Vec<_>>()
                    .join(" ")
            }),
            ("Outbound Rules", |fw: &Self| {
                fw.outbound_rules
                    .iter()
                    .map(|r| format!("{}:{}", r.protocol, r.ports))
                    .collect::<Vec<_>>()
                    .join(" ")
            }),
            ("Server IDs", |fw: &Self| joined(&fw.server_ids)),
            ("Tags", |fw: &Self| fw.tags.join(",")),
        ];
        columns.to_vec()
    }
}

impl Tabular for FloatingIp {
    fn columns() -> Vec<TableColumn<Self>> {
        let columns: &[TableColumn<Self>] = &[
            ("IP", |ip: &Self| ip.ip.clone()),
            ("Region", |ip: &Self| {
                ip.region.as_ref().map(|r| r.slug.clone()).unwrap_or_default()
            }),
            ("Server ID", |ip: &Self| {
                ip.server.as_ref().map(|s| s.id.to_string()).unwrap_or_default()
            }),
            ("Server Name", |ip: &Self| {
                ip.server.as_ref().map(|s| s.name.clone()).unwrap_or_default()
            }),
        ];
        columns.to_vec()
    }
}

impl Tabular for Tag {
    fn columns() -> Vec<TableColumn<Self>> {
        let columns: &[TableColumn<Self>] = &[
            ("Name", |t: &Self| t.name.clone()),
            ("Server Count", |t: &Self| t.server_count().to_string()),
        ];
        columns.to_vec()
    }
}

impl Tabular for Region {
    fn columns() -> Vec<TableColumn<Self>> {
        let columns: &[TableColumn<Self>] = &[
            ("Slug", |r: &Self| r.slug.clone()),
            ("Name", |r: &Self| r.name.clone()),
            ("Available", |r: &Self| r.available.to_string()),
        ];
        columns.to_vec()
    }
}

impl Tabular for Size {
    fn columns() -> Vec<TableColumn<Self>> {
        let columns: &[TableColumn<Self>] = &[
            ("Slug", |s: &Self| s.slug.clone()),
            ("Description", |s: &Self| s.description.clone()),
            ("Memory", |s: &Self| s.memory.to_string()),
            ("VCPUs", |s: &Self| s.vcpus.to_string()),
            ("Disk", |s: &Self| s.disk.to_string()),
            ("Price Monthly", |s: &Self| format!("{:.2}", s.price_monthly)),
            ("Price Hourly", |s: &Self| format!("{:.6}", s.price_hourly)),
        ];
        columns.to_vec()
    }
}

impl Tabular for Vpc {
    fn columns() -> Vec<TableColumn<Self>> {
        let columns: &[TableColumn<Self>] = &[
            ("ID", |v: &Self| v.id.to_string()),
            ("Name", |v: &Self| v.name.clone()),
            ("Description", |v: &Self| v.description.clone()),
            ("IP Range", |v: &Self| v.ip_range.clone()),
            ("Region", |v: &Self| v.region.clone()),
            ("Created At", |v: &Self| timestamp(&v.created_at)),
            ("Default", |v: &Self| v.default.to_string()),
        ];
        columns.to_vec()
    }
}

impl Tabular for LoadBalancer {
    fn columns() -> Vec<TableColumn<Self>> {
        let columns: &[TableColumn<Self>] = &[
            ("ID", |lb: &Self| lb.id.to_string()),
            ("IP", |lb: &Self| lb.ip.clone()),
            ("Name", |lb: &Self| lb.name.clone()),
            ("Status", |lb: &Self| lb.status.clone()),
            ("Created At", |lb: &Self| timestamp(&lb.created_at)),
            ("Algorithm", |lb: &Self| lb.algorithm.clone()),
            ("Region", |lb: &Self| {
                lb.region.as_ref().map(|r| r.slug.clone()).unwrap_or_default()
            }),
            ("Size", |lb: &Self| lb.size_slug.clone()),
            ("Server IDs", |lb: &Self| joined(&lb.server_ids)),
            ("Forwarding Rules", |lb: &Self| {
                lb.forwarding_rules
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            }),
        ];
        columns.to_vec()
    }
}

impl Tabular for InvoiceListItem {
    fn columns() -> Vec<TableColumn<Self>> {
        let columns: &[TableColumn<Self>] = &[
            ("Invoice UUID", |i: &Self| i.invoice_uuid.clone()),
            ("Invoice ID", |i: &Self| i.invoice_id.clone()),
            ("Amount", |i: &Self| i.amount.clone()),
            ("Invoice Period", |i: &Self| i.invoice_period.clone()),
            ("Updated At", |i: &Self| timestamp(&i.updated_at)),
        ];
        columns.to_vec()
    }
}

impl Tabular for InvoiceItem {
    fn columns() -> Vec<TableColumn<Self>> {
        let columns: &[TableColumn<Self>] = &[
            ("Product", |i: &Self| i.product.clone()),
            ("Group Description", |i: &Self| i.group_description.clone()),
            ("Description", |i: &Self| i.description.clone()),
            ("Amount", |i: &Self| i.amount.clone()),
            ("Duration", |i: &Self| i.duration.clone()),
            ("Duration Unit", |i: &Self| i.duration_unit.clone()),
            ("Start Time", |i: &Self| timestamp(&i.start_time)),
            ("End Time", |i: &Self| timestamp(&i.end_time)),
        ];
        columns.to_vec()
    }
}

impl Tabular for BillingHistoryEntry {
    fn columns() -> Vec<TableColumn<Self>> {
        let columns: &[TableColumn<Self>] = &[
            ("Date", |b: &Self| timestamp(&b.date)),
            ("Type", |b: &Self| b.kind.clone()),
            ("Description", |b: &Self| b.description.clone()),
            ("Amount", |b: &Self| b.amount.clone()),
            ("Invoice ID", |b: &Self| opt(&b.invoice_id)),
            ("Invoice UUID", |b: &Self| opt(&b.invoice_uuid)),
        ];
        columns.to_vec()
    }
}

/// Rows of every item followed by an optional trailing item
pub(crate) fn with_trailing<'a, T>(items: &'a [T], last: Option<&'a T>) -> impl Iterator<Item = &'a T> {
    items.iter().chain(iter::once(last).flatten())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn vpc(id: u64, name: &str, default: bool) -> Vpc {
        Vpc::from(api::Vpc {
            id,
            name: name.to_string(),
            region: "syd".to_string(),
            ip_range: "10.10.10.0/24".to_string(),
            created_at: Utc.with_ymd_and_hms(2020, 3, 13, 19, 20, 47).single(),
            default,
            ..Default::default()
        })
    }

    #[test]
    fn test_table_alignment() {
        let table = Table::new(
            vec!["Name".to_string(), "Age".to_string(), "City".to_string()],
            vec![
                vec!["Alice".to_string(), "30".to_string(), "New York".to_string()],
                vec!["Bob".to_string(), "7".to_string(), "Paris".to_string()],
            ],
        );

        assert_eq!(
            table.to_string(),
            "Name     Age    City\nAlice    30     New York\nBob      7      Paris\n"
        );
    }

    #[test]
    fn test_table_without_header() {
        let table = Table::new(
            vec!["Name".to_string(), "Count".to_string()],
            vec![vec!["web".to_string(), "2".to_string()]],
        )
        .with_header(false);

        assert_eq!(table.to_string(), "web    2\n");
    }

    #[test]
    fn test_empty_table_prints_header() {
        let table = Table::from_items(&Vec::<Tag>::new(), &Tag::columns());
        assert_eq!(table.to_string(), "Name    Server Count\n");
    }

    #[test]
    fn test_vpc_rows() {
        let vpcs = vec![vpc(1001, "my-new-vpc", false)];
        let text = Output::new(OutputFormat::Text, true).list(&vpcs).unwrap();

        assert_eq!(
            text,
            "ID      Name          Description    IP Range         Region    Created At                       Default\n\
             1001    my-new-vpc                   10.10.10.0/24    syd       2020-03-13 19:20:47 +0000 UTC    false\n"
        );
    }

    #[test]
    fn test_json_output() {
        let vpcs = vec![vpc(1, "v", true)];
        let json = Output::new(OutputFormat::Json, true).list(&vpcs).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["default"], true);
        assert_eq!(value[0]["created_at"], "2020-03-13T19:20:47Z");
        assert!(json.ends_with("}\n]\n"));
    }

    #[test]
    fn test_json_ignores_header_flag() {
        let tags: Vec<Tag> = Vec::new();
        let json = Output::new(OutputFormat::Json, false).list(&tags).unwrap();
        assert_eq!(json, "[]\n");
    }

    #[test]
    fn test_server_columns() {
        let server = Server::from(api::Server {
            id: 5,
            name: "web".to_string(),
            tags: vec!["b".to_string(), "a".to_string()],
            networks: Some(api::Networks {
                v4: vec![api::NetworkV4 {
                    ip_address: "203.0.113.5".to_string(),
                    kind: "public".to_string(),
                    ..Default::default()
                }],
                v6: Vec::new(),
            }),
            image: Some(api::Image {
                distribution: "Ubuntu".to_string(),
                name: "22.04 LTS".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        });

        let table = Table::from_items([&server], &Server::columns());
        let row = &table.rows[0];
        assert_eq!(row[2], "203.0.113.5");
        assert_eq!(row[3], "");
        assert_eq!(row[9], "Ubuntu 22.04 LTS");
        assert_eq!(row[12], "a,b");
    }

    #[test]
    fn test_with_trailing() {
        let items = [1, 2];
        let rows: Vec<_> = with_trailing(&items, Some(&3)).collect();
        assert_eq!(rows, vec![&1, &2, &3]);
        assert_eq!(with_trailing(&items, None).count(), 2);
    }
}
