use crawl::client::{response_cookies, ScrapingClient};

use crate::error::ScrapeError;
use crate::extract::{extract_meeting_data, Meeting};

/// Cookie the portal keys the rendered calendar year off.
const CALENDAR_YEAR_COOKIE: &str = "Setting-270-Calendar Year";

pub struct LegistarSite {
    url: String,
    client: ScrapingClient,
}

impl LegistarSite {
    pub fn new(subdomain: &str) -> Self {
        LegistarSite {
            url: format!("https://{}.legistar.com/Calendar.aspx", subdomain),
            client: ScrapingClient::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the calendar once per year and collect every meeting row.
    ///
    /// The initial request only renders upcoming meetings, but its session
    /// cookies let later requests ask for older data: the portal keeps the
    /// selected year in a cookie, so each pass overrides that single entry
    /// and refetches the same URL.
    pub async fn scrape(&self, year_override: &[String]) -> Result<Vec<Meeting>, ScrapeError> {
        let first_response = self.client.get(&self.url).await?;
        let mut cookies = response_cookies(&first_response);
        let body = first_response.text().await?;

        let years = if year_override.is_empty() {
            available_years(&body)
        } else {
            year_override.to_vec()
        };

        let mut web_request_count = 1;
        let mut payload = Vec::new();
        for year in &years {
            cookies.set(CALENDAR_YEAR_COOKIE, year);
            let response = self
                .client
                .get_with_cookies(&self.url, &cookies.header())
                .await?;
            web_request_count += 1;
            let html = response.text().await?;
            payload.extend(extract_meeting_data(&html)?);
        }

        println!(
            "Scraped {} meeting(s) using {} web request(s).",
            payload.len(),
            web_request_count
        );
        Ok(payload)
    }
}

fn available_years(_page: &str) -> Vec<String> {
    // TODO: read the year options from the calendar's dropdown menu
    // instead of pinning a single year.
    vec!["2018".to_string()]
}
