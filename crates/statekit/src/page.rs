use serde::{Deserialize, Serialize};

///
/// Page
///
/// A page request: page number plus requested size.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Page {
    pub page: u64,
    pub size: u64,
}

///
/// PageInfo
///
/// A delivered page plus the total count behind it.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageInfo {
    pub page: Page,
    pub total_count: u64,
}
