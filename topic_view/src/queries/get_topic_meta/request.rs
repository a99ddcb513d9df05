use crate::paging::TableDescriptor;

pub const META_COLUMNS: [&str; 9] = [
    "topic",
    "partition",
    "logsize",
    "leader",
    "replicas",
    "isr",
    "preferred_leader",
    "under_replicated",
    "preview",
];

#[derive(Debug, Clone)]
pub struct GetTopicMetaQuery {
    pub topic: String,
    pub descriptor: TableDescriptor,
}

impl GetTopicMetaQuery {
    pub fn first_page(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            descriptor: TableDescriptor::for_draw(1, 0, 10, &META_COLUMNS),
        }
    }
}
