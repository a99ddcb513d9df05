use anyhow::bail;
use getset::Getters;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionOption {
    pub id: i32,
    pub text: String,
}

#[derive(Debug, Clone, Default, Getters)]
pub struct PartitionSelection {
    #[getset(get = "pub")]
    available: Vec<i32>,
    selected: Option<i32>,
}

impl PartitionSelection {
    /// Builds the selection from the `partition` column of the already loaded meta rows.
    pub fn from_meta_rows(rows: &[Value]) -> Self {
        let partitions = rows.iter().filter_map(|row| partition_of(row.get("partition")?));
        Self::from_partitions(partitions)
    }

    pub fn from_partitions(partitions: impl IntoIterator<Item = i32>) -> Self {
        let mut available = Vec::new();
        for partition in partitions {
            if !available.contains(&partition) {
                available.push(partition);
            }
        }
        let selected = available.first().copied();
        Self {
            available,
            selected,
        }
    }

    pub fn options(&self) -> Vec<PartitionOption> {
        self.available
            .iter()
            .map(|&id| PartitionOption {
                id,
                text: format!("Partition {id}"),
            })
            .collect()
    }

    /// Selected partition id, `0` when nothing is selected yet.
    pub fn selected(&self) -> i32 {
        self.selected.unwrap_or(0)
    }

    pub fn select(&mut self, partition: i32) -> Result<(), anyhow::Error> {
        if !self.available.is_empty() && !self.available.contains(&partition) {
            bail!(
                "Partition {partition} isn't one of the available partitions {:?}",
                self.available
            )
        }
        self.selected = Some(partition);
        Ok(())
    }
}

fn partition_of(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|x| i32::try_from(x).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
