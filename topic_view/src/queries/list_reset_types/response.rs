use serde::{Deserialize, Serialize};

pub const RESET_TYPES_PAGE_SIZE: u64 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct ResetTypeItem {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResetTypesResponse {
    #[serde(default)]
    pub items: Vec<ResetTypeItem>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetTypeOption {
    pub id: usize,
    pub text: String,
}

/// One page of reset directives for the searchable select.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResetTypePage {
    pub results: Vec<ResetTypeOption>,
    pub more: bool,
}

impl ResetTypePage {
    pub fn from_response(response: ResetTypesResponse, page: u64) -> Self {
        if response.items.is_empty() {
            return Self::default();
        }

        let results = response
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| ResetTypeOption {
                id: index + 1,
                text: item.text,
            })
            .collect();

        Self {
            results,
            more: page * RESET_TYPES_PAGE_SIZE < response.total,
        }
    }
}
