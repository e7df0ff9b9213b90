use reqwest::{header, Client, Error, Response};

use crate::cookies::CookieJar;

pub struct ScrapingClient {
    client: Client,
}

impl ScrapingClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .build().unwrap();

        ScrapingClient {
            client
        }
    }

    pub async fn get(&self, url: &str) -> Result<Response, Error> {
        self.client
            .get(url)
            .headers(self.headers())
            .send()
            .await?
            .error_for_status()
    }

    /// GET with an explicit `Cookie` header value. The client keeps no
    /// cookie store of its own; callers render the jar themselves.
    pub async fn get_with_cookies(
        &self,
        url: &str,
        cookie_header: &str,
    ) -> Result<Response, Error> {
        self.client
            .get(url)
            .headers(self.headers())
            .header(header::COOKIE, cookie_header)
            .send()
            .await?
            .error_for_status()
    }

    fn headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/133.0.0.0 Safari/537.36 Edg/133.0.0.0"));
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7"));
        headers.insert(header::ACCEPT_LANGUAGE, header::HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(header::CONNECTION, header::HeaderValue::from_static("keep-alive"));
        headers.insert(header::UPGRADE_INSECURE_REQUESTS, header::HeaderValue::from_static("1"));

        headers
    }
}

/// Collect the cookies a response sets, in header order. Only the
/// `name=value` part of each `Set-Cookie` is kept; attributes like `path`
/// or `HttpOnly` are dropped.
pub fn response_cookies(response: &Response) -> CookieJar {
    let mut jar = CookieJar::new();
    for value in response.headers().get_all(header::SET_COOKIE) {
        if let Ok(raw) = value.to_str() {
            if let Some((name, value)) = raw.split(';').next().and_then(|pair| pair.split_once('=')) {
                jar.set(name.trim(), value.trim());
            }
        }
    }
    jar
}
