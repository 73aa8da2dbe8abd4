use anyhow::Result;
use cats_and_owners::config::file_config::FileConfig;
use cats_and_owners::core::{DisplaySummary, Sink};
use cats_and_owners::utils::validation::Validate;
use cats_and_owners::{AppConfig, CatsError, CatsPipeline, EtlEngine};
use httpmock::prelude::*;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[derive(Clone, Default)]
struct MemorySink {
    written: Arc<Mutex<String>>,
}

impl MemorySink {
    fn contents(&self) -> String {
        self.written.lock().unwrap().clone()
    }
}

impl Sink for MemorySink {
    async fn write_output(&self, text: &str) -> cats_and_owners::Result<()> {
        self.written.lock().unwrap().push_str(text);
        Ok(())
    }
}

fn config_for(server: &MockServer) -> AppConfig {
    AppConfig {
        base_url: server.base_url(),
        resource_path: "people.json".to_string(),
        timeout_seconds: Some(5),
    }
}

#[tokio::test]
async fn test_end_to_end_people_report() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/people.json")
            .header("accept", "application/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"Name": "Bob", "Gender": "Male", "Age": 23,
                 "Pets": [{"Name": "Garfield", "Type": "Cat"}, {"Name": "Fido", "Type": "Dog"}]},
                {"Name": "Jennifer", "Gender": "Female", "Age": 18,
                 "Pets": [{"Name": "Garfield", "Type": "Cat"}]},
                {"Name": "Steve", "Gender": "Male", "Age": 45, "Pets": null},
                {"Name": "Fred", "Gender": "Male", "Age": 40,
                 "Pets": [{"Name": "Tom", "Type": "Cat"}, {"Name": "Max", "Type": "Cat"},
                          {"Name": "Sam", "Type": "Dog"}, {"Name": "Jim", "Type": "Cat"}]},
                {"Name": "Samantha", "Gender": "Female", "Age": 40,
                 "Pets": [{"Name": "Tabby", "Type": "Cat"}]},
                {"Name": "Alice", "Gender": "Female", "Age": 64,
                 "Pets": [{"Name": "Simba", "Type": "Cat"}, {"Name": "Nemo", "Type": "Fish"}]}
            ]));
    });

    let sink = MemorySink::default();
    let pipeline = CatsPipeline::new(sink.clone(), config_for(&server))?;
    let summary = EtlEngine::new(pipeline).run().await?;

    api_mock.assert();
    assert_eq!(summary, DisplaySummary { genders: 2, cats: 7 });
    assert_eq!(
        sink.contents(),
        "\nFemale\n--------------\nGarfield\nSimba\nTabby\n\nMale\n--------------\nGarfield\nJim\nMax\nTom\n"
    );
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_with_api_failure_prints_nothing() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/people.json");
        then.status(503);
    });

    let sink = MemorySink::default();
    let pipeline = CatsPipeline::new(sink.clone(), config_for(&server))?;
    let summary = EtlEngine::new(pipeline).run().await?;

    api_mock.assert();
    assert_eq!(summary, DisplaySummary::default());
    assert!(sink.contents().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_with_malformed_payload_fails() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/people.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([{"Name": "Bob", "Age": 23}]));
    });

    let sink = MemorySink::default();
    let pipeline = CatsPipeline::new(sink.clone(), config_for(&server))?;
    let err = EtlEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, CatsError::Decode(_)));
    assert_eq!(err.exit_code(), 1);
    assert!(sink.contents().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_with_unreachable_host_fails() -> Result<()> {
    let config = AppConfig {
        base_url: "http://127.0.0.1:1/".to_string(),
        resource_path: "people.json".to_string(),
        timeout_seconds: Some(5),
    };

    let pipeline = CatsPipeline::new(MemorySink::default(), config)?;
    let err = EtlEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, CatsError::Transport(_)));
    Ok(())
}

#[tokio::test]
async fn test_config_file_drives_resource_path() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/v2/owners.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"Name": "Ann", "Gender": "Female", "Age": 30, "Pets": [{"Name": "Luna", "Type": "Cat"}]}
            ]));
    });

    let config_path = temp_dir.path().join("cats.toml");
    tokio::fs::write(
        &config_path,
        format!(
            "[source]\nbase_url = \"{}/v2\"\nresource_path = \"owners.json\"\ntimeout_seconds = 5\n",
            server.base_url()
        ),
    )
    .await?;

    let mut config = AppConfig::default();
    FileConfig::from_file(&config_path)?.apply_to(&mut config);
    config.validate()?;

    let sink = MemorySink::default();
    let pipeline = CatsPipeline::new(sink.clone(), config)?;
    EtlEngine::new(pipeline).run().await?;

    api_mock.assert();
    assert_eq!(sink.contents(), "\nFemale\n--------------\nLuna\n");
    Ok(())
}
