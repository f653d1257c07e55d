// End-to-end pipeline: build a dataset from a small component library with
// the fallback provider, reload the persisted index, retrieve against it,
// and normalize a generation output for rendering.

use serde_json::json;
use tempfile::TempDir;

use uidex::builder::DatasetBuilder;
use uidex::config::Config;
use uidex::dataset::{ComponentRecord, Dataset};
use uidex::embeddings::FallbackProvider;
use uidex::index::load_index;
use uidex::props::normalize_sections;
use uidex::retrieval::Retriever;

fn write_component(root: &std::path::Path, relative: &str, source: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    std::fs::write(path, source).expect("write component");
}

#[test]
fn build_persist_retrieve_normalize() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let mut config = Config::load(temp_dir.path()).expect("load defaults");
    config.library.project_root = temp_dir.path().to_path_buf();

    write_component(
        temp_dir.path(),
        "components/system/Header.tsx",
        "interface HeaderProps { logo: string; menu?: MenuItem[] }\n",
    );
    write_component(
        temp_dir.path(),
        "components/system/Hero.tsx",
        "interface HeroProps { title: string; buttonText?: string }\n",
    );
    write_component(
        temp_dir.path(),
        "components/ui/Pricing.tsx",
        "interface PricingProps { title: string; plans: Plan[] }\n",
    );

    let provider = FallbackProvider::new(128);
    let report = DatasetBuilder::new(&config, &provider)
        .build()
        .expect("build");
    assert_eq!(report.files_scanned, 3);
    assert_eq!(report.components_added, 3);
    assert_eq!(report.embedded, 3);

    // The dataset file is consumable on its own.
    let dataset = Dataset::load(&config.dataset_path());
    assert_eq!(dataset.len(), 3);

    // Reload the persisted index and retrieve against it.
    let index = load_index::<ComponentRecord>(&config.index_path())
        .expect("load index")
        .expect("index file should exist");
    assert_eq!(index.len(), 3);

    let retriever = Retriever::new(&provider, &index);
    let hero_text = dataset
        .get("Hero")
        .expect("Hero record")
        .embedding_text();
    let results = retriever.query(&hero_text, 3).expect("query");
    assert_eq!(results[0].record.component_name, "Hero");
    assert!((results[0].score - 1.0).abs() < 1e-6);

    // Normalize a generation output that references the retrieved sections.
    let raw = json!([
        {"type": "header", "variant": "centered", "props": {"menu": [{"label": "Home"}]}},
        {"type": "hero", "props": {"cta": "Get started", "className": "h-screen"}}
    ]);
    let sections =
        normalize_sections(&serde_json::to_string(&raw).expect("serialize")).expect("normalize");

    assert_eq!(sections[0].props["menu"][0]["link"], json!("#"));
    assert_eq!(sections[1].props["buttonText"], json!("Get started"));
    assert!(sections[1].props.get("className").is_none());
}

#[test]
fn rebuild_preserves_curated_descriptions() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let mut config = Config::load(temp_dir.path()).expect("load defaults");
    config.library.project_root = temp_dir.path().to_path_buf();

    write_component(
        temp_dir.path(),
        "components/ui/Card.tsx",
        "interface CardProps { title: string }\n",
    );

    let provider = FallbackProvider::new(64);
    DatasetBuilder::new(&config, &provider)
        .build()
        .expect("first build");

    // Curate a description in the built dataset, then point the base at it
    // and rebuild with a changed component source.
    let mut dataset = Dataset::load(&config.dataset_path());
    dataset.components[0].description = Some("A simple content card".to_string());
    let base_path = config.base_dataset_path();
    dataset.save(&base_path).expect("save base");

    write_component(
        temp_dir.path(),
        "components/ui/Card.tsx",
        "interface CardProps { title: string; image?: string }\n",
    );

    let report = DatasetBuilder::new(&config, &provider)
        .build()
        .expect("second build");
    assert_eq!(report.components_updated, 1);

    let rebuilt = Dataset::load(&config.dataset_path());
    let card = rebuilt.get("Card").expect("Card record");
    assert_eq!(card.description.as_deref(), Some("A simple content card"));
    assert!(card.props.contains_key("image"));

    // The curated description changes the embedding text, so the new index
    // reflects it.
    let index = load_index::<ComponentRecord>(&config.index_path())
        .expect("load index")
        .expect("index file should exist");
    let retriever = Retriever::new(&provider, &index);
    let results = retriever
        .query(&card.embedding_text(), 1)
        .expect("query");
    assert!((results[0].score - 1.0).abs() < 1e-6);
}
