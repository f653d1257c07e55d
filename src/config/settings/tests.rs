use super::*;
use tempfile::TempDir;

#[test]
fn default_config() {
    let config = Config::load(PathBuf::from("/nonexistent")).expect("load defaults");
    assert_eq!(config.ollama.protocol, "http");
    assert_eq!(config.ollama.host, "localhost");
    assert_eq!(config.ollama.port, 11434);
    assert_eq!(config.ollama.model, "nomic-embed-text:latest");
    assert_eq!(config.ollama.batch_size, 16);
    assert_eq!(config.ollama.embedding_dimension, 768);
    assert!(!config.embeddings.allow_fallback);
    assert_eq!(config.library.system_dir, PathBuf::from("components/system"));
    assert_eq!(config.library.ui_dir, PathBuf::from("components/ui"));
}

#[test]
fn config_validation() {
    let config = Config::load(PathBuf::from("/nonexistent")).expect("load defaults");
    assert!(config.validate().is_ok());

    let mut invalid_config = config.clone();
    invalid_config.ollama.protocol = "ftp".to_string();
    assert!(invalid_config.validate().is_err());

    let mut invalid_config = config.clone();
    invalid_config.ollama.port = 0;
    assert!(invalid_config.validate().is_err());

    let mut invalid_config = config.clone();
    invalid_config.ollama.model = String::new();
    assert!(invalid_config.validate().is_err());

    let mut invalid_config = config.clone();
    invalid_config.ollama.batch_size = 1001;
    assert!(invalid_config.validate().is_err());

    let mut invalid_config = config;
    invalid_config.ollama.embedding_dimension = 10;
    assert!(invalid_config.validate().is_err());
}

#[test]
fn ollama_url_generation() {
    let config = OllamaConfig::default();
    let url = config
        .ollama_url()
        .expect("should generate ollama_url successfully");
    assert_eq!(url.as_str(), "http://localhost:11434/");
}

#[test]
fn toml_round_trip() {
    let config = Config {
        ollama: OllamaConfig::default(),
        library: LibraryConfig::default(),
        embeddings: EmbeddingsConfig {
            allow_fallback: true,
        },
        base_dir: PathBuf::new(),
    };

    let toml_str = toml::to_string(&config).expect("should serialize toml correctly");
    let parsed_config: Config = toml::from_str(&toml_str).expect("should parse toml correctly");
    assert_eq!(config.ollama, parsed_config.ollama);
    assert_eq!(config.library, parsed_config.library);
    assert_eq!(config.embeddings, parsed_config.embeddings);
}

#[test]
fn setter_validation() {
    let mut config = OllamaConfig::default();

    assert!(config.set_protocol("https".to_string()).is_ok());
    assert!(config.set_host("example.com".to_string()).is_ok());
    assert!(config.set_port(8080).is_ok());
    assert!(config.set_model("new-model".to_string()).is_ok());
    assert!(config.set_batch_size(128).is_ok());
    assert!(config.set_embedding_dimension(1536).is_ok());

    assert!(config.set_protocol("ftp".to_string()).is_err());
    assert!(config.set_port(0).is_err());
    assert!(config.set_model(String::new()).is_err());
    assert!(config.set_batch_size(0).is_err());
    assert!(config.set_batch_size(1001).is_err());
    assert!(config.set_embedding_dimension(10_000).is_err());
}

#[test]
fn save_and_load_round_trip() {
    let temp_dir = TempDir::new().expect("should create temp dir");

    let mut config = Config::load(temp_dir.path()).expect("load defaults");
    config.ollama.model = "custom-model".to_string();
    config.embeddings.allow_fallback = true;
    config.save().expect("save");

    let loaded = Config::load(temp_dir.path()).expect("load");
    assert_eq!(loaded.ollama.model, "custom-model");
    assert!(loaded.embeddings.allow_fallback);
}

#[test]
fn partial_config_file_uses_defaults() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    std::fs::write(
        temp_dir.path().join("config.toml"),
        "[ollama]\nmodel = \"other-model\"\n",
    )
    .expect("write");

    let config = Config::load(temp_dir.path()).expect("load");
    assert_eq!(config.ollama.model, "other-model");
    assert_eq!(config.ollama.port, 11434);
    assert_eq!(config.library.ui_dir, PathBuf::from("components/ui"));
}

#[test]
fn derived_paths_live_under_base_dir() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config = Config::load(temp_dir.path()).expect("load defaults");

    assert_eq!(config.dataset_path(), temp_dir.path().join("dataset.json"));
    assert_eq!(config.index_path(), temp_dir.path().join("index.json"));
    assert_eq!(
        config.config_file_path(),
        temp_dir.path().join("config.toml")
    );
}

#[test]
fn library_paths_resolve_relative_to_project_root() {
    let mut config = Config::load(PathBuf::from("/nonexistent")).expect("load defaults");
    config.library.project_root = PathBuf::from("/srv/site");

    assert_eq!(
        config.system_dir_path(),
        PathBuf::from("/srv/site/components/system")
    );
    assert_eq!(
        config.ui_dir_path(),
        PathBuf::from("/srv/site/components/ui")
    );

    config.library.base_dataset = PathBuf::from("/etc/uidex/base.json");
    assert_eq!(
        config.base_dataset_path(),
        PathBuf::from("/etc/uidex/base.json")
    );
}
