use crate::date_range::DateRange;
use crate::paging::PageRequest;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct GetTopicMessagesQuery {
    pub topic: String,
    pub range: DateRange,
    pub partition: i32,
    pub page: PageRequest,
}

/// Query string of the message endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageQueryParams {
    pub stime: String,
    pub etime: String,
    pub partition: i32,
    pub page: u64,
    pub need_count: bool,
}

impl From<&GetTopicMessagesQuery> for MessageQueryParams {
    fn from(value: &GetTopicMessagesQuery) -> Self {
        let (stime, etime) = value.range.compact_message_params();
        Self {
            stime,
            etime,
            partition: value.partition,
            page: value.page.page_number(),
            need_count: true,
        }
    }
}
