//! tests/api/helpers.rs
use once_cell::sync::Lazy;
use signup::component::{Phase, SignupComponent};
use signup::configuration::get_configuration;
use signup::telemetry::{get_subscriber, init_subscriber};
use signup::webhook::WebhookClient;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // Set TEST_LOG=true to see logs during tests
    // Use bunyan to format the logs nicely:
    // $ TEST_LOG=true cargo test | bunyan
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct Test {
    pub webhook_server: MockServer,
    pub client: WebhookClient,
    pub component: SignupComponent,
}

impl Test {
    pub async fn type_and_submit(&mut self, email: &str) -> Phase {
        self.component.input(email);
        self.component.submit(&self.client).await
    }

    pub async fn received_signups(&self) -> Vec<serde_json::Value> {
        self.webhook_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| {
                serde_json::from_slice(&request.body).expect("Failed to parse webhook body")
            })
            .collect()
    }
}

pub async fn setup() -> Test {
    Lazy::force(&TRACING);

    let mut config = get_configuration().expect("Failed to read configuration.");

    // Start webhook server
    let webhook_server = MockServer::start().await;
    config.set_webhook_url(webhook_server.uri());

    tracing::info!("Test running with the following Settings:\n{:#?}", config);

    Test {
        client: config.webhook.client(),
        webhook_server,
        component: SignupComponent::new(),
    }
}

/// A client pointing at a port nothing listens on.
pub fn unreachable_client() -> WebhookClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    WebhookClient::new(format!("http://127.0.0.1:{}", port))
}
