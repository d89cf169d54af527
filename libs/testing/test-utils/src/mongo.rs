//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that creates a MongoDB container for testing.

use mongodb::{Client, Database};
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::mongo::Mongo;

/// Test MongoDB wrapper that ensures proper cleanup
///
/// The container is automatically stopped and removed when this struct is dropped.
///
/// # Example
///
/// ```no_run
/// use test_utils::TestMongo;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let db = mongo.database("catalog_test");
///
/// let names = db.list_collection_names().await.unwrap();
/// assert!(names.is_empty());
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    client: Client,
    pub connection_string: String,
}

impl TestMongo {
    /// Create a new test MongoDB instance
    pub async fn new() -> Self {
        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let connection_string = format!("mongodb://127.0.0.1:{}", host_port);

        let client = Client::with_uri_str(&connection_string)
            .await
            .expect("Failed to connect to MongoDB");

        tracing::info!(port = host_port, "Test MongoDB ready");

        Self {
            container,
            client,
            connection_string,
        }
    }

    /// Get a handle to a named database
    pub fn database(&self, name: &str) -> Database {
        self.client.database(name)
    }

    /// Get the underlying client
    pub fn client(&self) -> &Client {
        &self.client
    }
}
