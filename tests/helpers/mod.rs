use mockito::{Mock, Server, ServerGuard};
use std::time::Duration;
use termsync::application::TermsSyncClient;
use termsync::infrastructure::HttpTermsRepository;

pub const EXEC_PATH: &str = "/macros/s/test-deployment/exec";

/// Fake script service listening on localhost
pub struct TestService {
    pub server: ServerGuard,
}

#[allow(dead_code)]
impl TestService {
    pub fn new() -> Self {
        Self {
            server: Server::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.server.url(), EXEC_PATH)
    }

    pub fn repository(&self) -> HttpTermsRepository {
        HttpTermsRepository::new(Some(&self.endpoint()), Duration::from_secs(5))
            .expect("HTTP client should build")
    }

    pub fn client(&self) -> TermsSyncClient<HttpTermsRepository> {
        TermsSyncClient::new(self.repository())
    }

    /// GET answering with `status` and a JSON body
    pub fn mock_list(&mut self, status: usize, body: &str) -> Mock {
        self.server
            .mock("GET", EXEC_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    /// Any POST answering with `status` and a JSON body
    pub fn mock_mutation(&mut self, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", EXEC_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }
}
