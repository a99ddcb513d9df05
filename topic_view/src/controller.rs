use crate::client::EfakClient;
use crate::date_range::{self, DateRange};
use crate::envelope::{table_rows, TableEnvelope};
use crate::paging::{PageRequest, TableDescriptor};
use crate::partition_selector::PartitionSelection;
use crate::queries::get_consumer_groups::{get_consumer_groups, GetConsumerGroupsQuery};
use crate::queries::get_topic_messages::{get_topic_messages, GetTopicMessagesQuery};
use crate::queries::get_topic_meta::{get_topic_meta, GetTopicMetaQuery};
use crate::readiness::{ReadinessGate, TableKind};
use anyhow::Context;
use serde_json::Value;
use tracing::{error, info};

/// Tables of the first page load.
#[derive(Debug, Clone)]
pub struct PageLoad {
    pub meta: Option<Value>,
    pub messages: TableEnvelope,
}

/// State of one topic page: the meta, message and consumer group tables plus their filters.
#[derive(Debug)]
pub struct TopicPageController {
    client: EfakClient,
    topic: String,
    gate: ReadinessGate,
    partitions: PartitionSelection,
    message_range_label: String,
    meta: Option<Value>,
}

impl TopicPageController {
    pub fn new(client: EfakClient, topic: impl Into<String>) -> Self {
        Self {
            client,
            topic: topic.into(),
            gate: ReadinessGate::default(),
            partitions: PartitionSelection::default(),
            message_range_label: String::new(),
            meta: None,
        }
    }

    pub fn client(&self) -> &EfakClient {
        &self.client
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn partitions(&self) -> &PartitionSelection {
        &self.partitions
    }

    pub fn message_range_label(&self) -> &str {
        &self.message_range_label
    }

    pub fn is_ready(&self) -> bool {
        self.gate.is_open()
    }

    /// Loads the first meta and message pages side by side.
    #[tracing::instrument(skip_all, fields(topic = %self.topic))]
    pub async fn load(&mut self) -> PageLoad {
        let meta_query = GetTopicMetaQuery::first_page(&self.topic);
        let messages_query = self.messages_query(0);

        let (meta, messages) = tokio::join!(
            get_topic_meta(&self.client, &meta_query),
            get_topic_messages(&self.client, &messages_query)
        );

        let meta = match meta {
            Ok(page) => {
                self.meta = Some(page.clone());
                self.signal(TableKind::Meta);
                Some(page)
            }
            Err(e) => {
                error!("Topic meta table load error\n{e:?}");
                None
            }
        };
        self.signal(TableKind::Messages);

        PageLoad { meta, messages }
    }

    fn signal(&mut self, table: TableKind) {
        if self.gate.signal(table) {
            self.on_tables_ready();
        }
    }

    fn on_tables_ready(&mut self) {
        let rows = self.meta.as_ref().map(table_rows).unwrap_or_default();
        self.partitions = PartitionSelection::from_meta_rows(rows);
        self.message_range_label = DateRange::default_message_range(date_range::now()).message_label();

        info!(
            "Topic page ready, partitions {:?}, message range {}",
            self.partitions.available(),
            self.message_range_label
        );
    }

    /// Message range currently shown by the picker label.
    pub fn message_range(&self) -> DateRange {
        DateRange::message_range_from_label(&self.message_range_label, date_range::now())
    }

    pub fn messages_query(&self, display_start: u64) -> GetTopicMessagesQuery {
        GetTopicMessagesQuery {
            topic: self.topic.clone(),
            range: self.message_range(),
            partition: self.partitions.selected(),
            page: PageRequest::messages(display_start),
        }
    }

    pub async fn messages_page(&self, display_start: u64) -> TableEnvelope {
        get_topic_messages(&self.client, &self.messages_query(display_start)).await
    }

    /// Reloads the message table from its first row.
    pub async fn query(&self) -> TableEnvelope {
        self.messages_page(0).await
    }

    pub async fn meta_page(
        &mut self,
        descriptor: TableDescriptor,
    ) -> Result<Value, anyhow::Error> {
        let query = GetTopicMetaQuery {
            topic: self.topic.clone(),
            descriptor,
        };
        let page = get_topic_meta(&self.client, &query).await?;
        self.meta = Some(page.clone());
        Ok(page)
    }

    pub async fn consumer_groups_page(
        &self,
        descriptor: TableDescriptor,
    ) -> Result<Value, anyhow::Error> {
        let query = GetConsumerGroupsQuery {
            topic: self.topic.clone(),
            descriptor,
        };
        get_consumer_groups(&self.client, &query).await
    }

    pub fn apply_message_range(&mut self, range: DateRange) {
        self.message_range_label = range.message_label();
    }

    pub fn select_partition(&mut self, partition: i32) -> Result<(), anyhow::Error> {
        self.partitions
            .select(partition)
            .with_context(|| format!("While selecting partition of topic {}", self.topic))
    }
}
