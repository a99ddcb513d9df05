use crate::paging::TableDescriptor;

pub const CONSUMER_GROUP_COLUMNS: [&str; 4] = ["group", "topic", "lag", "status"];

#[derive(Debug, Clone)]
pub struct GetConsumerGroupsQuery {
    pub topic: String,
    pub descriptor: TableDescriptor,
}

impl GetConsumerGroupsQuery {
    pub fn first_page(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            descriptor: TableDescriptor::for_draw(1, 0, 10, &CONSUMER_GROUP_COLUMNS),
        }
    }
}
