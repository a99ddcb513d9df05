use anyhow::{bail, Context};
use getset::CopyGetters;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MESSAGE_PAGE_SIZE: u64 = 10;

/// 1-based page addressed by the message endpoint.
#[derive(Debug, CopyGetters, Copy, Clone, Eq, PartialEq)]
#[getset(get_copy = "pub")]
pub struct PageRequest {
    page_number: u64,
    page_size: u64,
}

impl PageRequest {
    /// Translates the 0-based row offset of the table into a page number.
    pub fn from_display_offset(offset: u64, page_size: u64) -> Result<Self, anyhow::Error> {
        if page_size == 0 {
            bail!("Page size can't be zero")
        }

        Ok(Self {
            page_number: offset / page_size + 1,
            page_size,
        })
    }

    pub fn messages(offset: u64) -> Self {
        Self {
            page_number: offset / MESSAGE_PAGE_SIZE + 1,
            page_size: MESSAGE_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptorParam {
    pub name: String,
    pub value: Value,
}

/// Paging and filter descriptor of a server-side table draw, sent as `aoData`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableDescriptor(Vec<DescriptorParam>);

impl TableDescriptor {
    pub fn for_draw(echo: u64, display_start: u64, display_length: u64, columns: &[&str]) -> Self {
        let mut descriptor = Self::default();
        descriptor.push("sEcho", echo);
        descriptor.push("iColumns", columns.len());
        descriptor.push("sColumns", ",".repeat(columns.len().saturating_sub(1)));
        descriptor.push("iDisplayStart", display_start);
        descriptor.push("iDisplayLength", display_length);
        for (index, column) in columns.iter().enumerate() {
            descriptor.push(format!("mDataProp_{index}"), *column);
        }
        descriptor.push("sSearch", "");
        descriptor
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.push(DescriptorParam {
            name: name.into(),
            value: value.into(),
        })
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.iter().find(|x| x.name == name).map(|x| &x.value)
    }

    pub fn params(&self) -> &[DescriptorParam] {
        &self.0
    }

    pub fn display_start(&self) -> u64 {
        self.get("iDisplayStart")
            .and_then(|x| x.as_u64().or_else(|| x.as_str()?.parse().ok()))
            .unwrap_or_default()
    }

    pub fn to_query_value(&self) -> Result<String, anyhow::Error> {
        serde_json::to_string(self).context("While serializing table descriptor")
    }
}
