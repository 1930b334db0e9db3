//! Query DTOs
//!
//! Raw browser query strings. Pagination stays textual here and is
//! validated by `PageParams::from_raw`, so a bad value becomes a 400 in the
//! uniform envelope instead of an extractor rejection.

use kernel::error::app_error::AppResult;
use kernel::id::{NewsId, UserId};
use kernel::pagination::PageParams;
use serde::Deserialize;

/// `page` / `limit` only
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    pub fn params(&self) -> AppResult<PageParams> {
        PageParams::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub parent_category_name: Option<String>,
    pub sub_category_name: Option<String>,
}

impl NewsListQuery {
    pub fn params(&self) -> AppResult<PageParams> {
        PageParams::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NewsDetailQuery {
    pub slug: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsQuery {
    pub news_id: Option<NewsId>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl CommentsQuery {
    pub fn params(&self) -> AppResult<PageParams> {
        PageParams::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikesQuery {
    pub news_id: Option<NewsId>,
    pub user_id: Option<UserId>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationQuery {
    pub user_id: Option<UserId>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ConsultationQuery {
    pub fn params(&self) -> AppResult<PageParams> {
        PageParams::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}
