use wearvirtually_core::config::StorageConfig;
use wearvirtually_storage::{create_index_catalog, StorageError};

#[tokio::test]
async fn test_factory_creates_mock_catalog() {
    let config = StorageConfig {
        provider: "mock".to_string(),
        ..Default::default()
    };

    let catalog = create_index_catalog(&config).await.unwrap();

    assert_eq!(catalog.database_name(), "mock");
    assert!(catalog.health_check().await.is_ok());
    assert!(catalog.list_index_names("orders").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_factory_creates_mongodb_catalog_lazily() {
    // Client construction does not contact the server
    let config = StorageConfig {
        uri: "mongodb://127.0.0.1:1/wear_virtually".to_string(),
        ..Default::default()
    };

    let catalog = create_index_catalog(&config).await.unwrap();
    assert_eq!(catalog.database_name(), "wear_virtually");
}

#[tokio::test]
async fn test_factory_database_override() {
    let config = StorageConfig {
        uri: "mongodb://127.0.0.1:1/wear_virtually".to_string(),
        database: Some("staging".to_string()),
        ..Default::default()
    };

    let catalog = create_index_catalog(&config).await.unwrap();
    assert_eq!(catalog.database_name(), "staging");
}

#[tokio::test]
async fn test_factory_requires_database() {
    let config = StorageConfig {
        uri: "mongodb://127.0.0.1:1".to_string(),
        ..Default::default()
    };

    let result = create_index_catalog(&config).await;
    assert!(matches!(result, Err(StorageError::InvalidConfig(_))));
}

#[tokio::test]
async fn test_factory_rejects_unknown_provider() {
    let config = StorageConfig {
        provider: "cassandra".to_string(),
        ..Default::default()
    };

    let result = create_index_catalog(&config).await;
    assert!(matches!(result, Err(StorageError::InvalidConfig(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_connection_failure() {
    let config = StorageConfig {
        uri: "mongodb://127.0.0.1:1/wear_virtually".to_string(),
        connect_timeout_ms: 200,
        server_selection_timeout_ms: 200,
        ..Default::default()
    };

    let catalog = create_index_catalog(&config).await.unwrap();
    let err = catalog.health_check().await.unwrap_err();
    assert_eq!(
        err.kind(),
        wearvirtually_storage::IndexErrorKind::ConnectionFailure
    );
}
