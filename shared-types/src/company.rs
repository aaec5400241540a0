use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub industry: String,
    pub size: String,
    pub founded_year: Option<i32>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub owner: CompanyOwner,
    /// First entry is the primary location
    pub locations: Vec<CompanyLocation>,
    pub is_verified: bool,
    pub created_at: i64,
}

impl Company {
    pub fn primary_location(&self) -> Option<&CompanyLocation> {
        self.locations.first()
    }
}

/// Account holder that registered the company. Owned by the account service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompanyOwner {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompanyLocation {
    pub address: String,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
    pub postal_code: Option<String>,
}

/// Query parameters for the admin company listing.
///
/// `page` and `limit` are signed so that out-of-range values coming from a
/// query string can be normalized instead of rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompanyFilter {
    pub search: Option<String>,
    pub verified: Option<bool>,
    pub industry: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl CompanyFilter {
    /// Page number with the default applied to missing or non-positive values
    pub fn page(&self) -> i64 {
        match self.page {
            Some(page) if page > 0 => page,
            _ => DEFAULT_PAGE,
        }
    }

    /// Page size with the default applied to missing or non-positive values
    pub fn limit(&self) -> i64 {
        match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_PAGE_LIMIT,
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.limit())
    }

    pub fn search_term(&self) -> Option<&str> {
        non_blank(&self.search)
    }

    pub fn industry_term(&self) -> Option<&str> {
        non_blank(&self.industry)
    }

    pub fn city_term(&self) -> Option<&str> {
        non_blank(&self.city)
    }

    pub fn country_term(&self) -> Option<&str> {
        non_blank(&self.country)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    /// Build pagination metadata. `total_pages` is always derived from
    /// `total` and `limit`.
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let limit = if limit > 0 { limit } else { DEFAULT_PAGE_LIMIT };
        let total = total.max(0);
        Self {
            page: page.max(DEFAULT_PAGE),
            limit,
            total,
            total_pages: total / limit + i64::from(total % limit != 0),
        }
    }

    pub fn for_filter(filter: &CompanyFilter, total: i64) -> Self {
        Self::new(filter.page(), filter.limit(), total)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompaniesResponse {
    pub companies: Vec<Company>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompanyStats {
    pub total: i64,
    pub verified: i64,
    pub unverified: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults_for_missing_and_non_positive_values() {
        let filter = CompanyFilter::default();
        assert_eq!(filter.page(), 1);
        assert_eq!(filter.limit(), 10);

        let filter = CompanyFilter {
            page: Some(0),
            limit: Some(-5),
            ..Default::default()
        };
        assert_eq!(filter.page(), 1);
        assert_eq!(filter.limit(), 10);
        assert_eq!(filter.offset(), 0);

        let filter = CompanyFilter {
            page: Some(3),
            limit: Some(25),
            ..Default::default()
        };
        assert_eq!(filter.offset(), 50);
    }

    #[test]
    fn test_blank_terms_are_unset() {
        let filter = CompanyFilter {
            search: Some("   ".to_string()),
            city: Some(" Berlin ".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.search_term(), None);
        assert_eq!(filter.city_term(), Some("Berlin"));
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(Pagination::new(1, 10, 0).total_pages, 0);
        assert_eq!(Pagination::new(1, 10, 10).total_pages, 1);
        assert_eq!(Pagination::new(1, 10, 11).total_pages, 2);
        assert_eq!(Pagination::new(2, 10, 15).total_pages, 2);
        assert_eq!(Pagination::new(1, 3, 7).total_pages, 3);
        assert_eq!(Pagination::new(1, 0, 7).limit, 10);
    }

    #[test]
    fn test_total_pages_with_maximum_limit() {
        let pagination = Pagination::new(1, i64::MAX, 2);
        assert_eq!(pagination.limit, i64::MAX);
        assert_eq!(pagination.total_pages, 1);

        let pagination = Pagination::new(1, i64::MAX, i64::MAX);
        assert_eq!(pagination.total_pages, 1);
        assert_eq!(Pagination::new(1, i64::MAX, 0).total_pages, 0);
    }

    #[test]
    fn test_filter_deserializes_from_partial_json() {
        let filter: CompanyFilter =
            serde_json::from_str(r#"{"verified": true, "page": 2}"#).unwrap();
        assert_eq!(filter.verified, Some(true));
        assert_eq!(filter.page(), 2);
        assert_eq!(filter.limit(), 10);
    }
}
