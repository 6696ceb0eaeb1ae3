use reqwest::blocking::RequestBuilder;
use url::Url;

const USER_AGENT: &str = "gh";

pub struct HttpClient {
    reqwest_client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            reqwest_client: reqwest::blocking::Client::new(),
        }
    }

    pub fn get(&self, url: &Url) -> RequestBuilder {
        self.reqwest_client
            .get(url.clone())
            .header("User-Agent", USER_AGENT)
    }

    pub fn put(&self, url: &Url) -> RequestBuilder {
        self.reqwest_client
            .put(url.clone())
            .header("User-Agent", USER_AGENT)
    }
}

pub trait WithAuth {
    fn with_auth(self, token: Option<&str>, auth_scheme: &str) -> RequestBuilder;
}

impl WithAuth for RequestBuilder {
    fn with_auth(self, token: Option<&str>, auth_scheme: &str) -> RequestBuilder {
        match token {
            Some(token) => self.header("Authorization", format!("{auth_scheme} {token}")),
            None => self,
        }
    }
}
