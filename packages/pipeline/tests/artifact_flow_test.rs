//! The store-side half of an extraction run, end to end against a real
//! filesystem root: render a document, write one artifact per section,
//! and confirm a re-run fully replaces stale artifacts.

use juriscontent_extractor::config::{section_filename, SECTIONS_FOLDER};
use juriscontent_pipeline::extraction::render_document;
use juriscontent_pipeline::store::{BlobStore, FsBlobStore};

const ACT_HTML: &str = r#"
    <html><body>
    <main id="content">
        <h1>Part 1 Preliminary</h1>
        <p>1 This Act may be cited as the Example Act 1998.</p>
        <p>2 This Act commences on assent.</p>
        <h1>Part 2 Licensing</h1>
        <p>3 A person must not trade without a licence.</p>
    </main>
    </body></html>
"#;

async fn write_sections(store: &FsBlobStore, prefix: &str, html: &str) -> usize {
    let rendered = render_document(html).unwrap();
    for section in &rendered {
        let key = format!(
            "{prefix}/{SECTIONS_FOLDER}/{}",
            section_filename(section.section_id as u32)
        );
        store.put_text(&key, &section.content).await.unwrap();
    }
    rendered.len()
}

#[tokio::test]
async fn test_artifacts_written_per_section() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsBlobStore::new(dir.path());

    let count = write_sections(&store, "legislation/example-act-1998", ACT_HTML).await;
    assert_eq!(count, 2);

    let first = store
        .get_text("legislation/example-act-1998/section-level-content/miniviewer_1.txt")
        .await
        .unwrap();
    assert!(first.starts_with("Part 1 Preliminary"));
    assert!(first.contains("cited as the Example Act 1998"));

    let second = store
        .get_text("legislation/example-act-1998/section-level-content/miniviewer_2.txt")
        .await
        .unwrap();
    assert!(second.starts_with("Part 2 Licensing"));
}

#[tokio::test]
async fn test_rerun_replaces_stale_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsBlobStore::new(dir.path());
    let prefix = "legislation/example-act-1998";
    let sections_prefix = format!("{prefix}/{SECTIONS_FOLDER}");

    // A prior run left more sections than the document now has.
    store
        .put_text(&format!("{sections_prefix}/miniviewer_7.txt"), "stale")
        .await
        .unwrap();

    store.clear_prefix(&sections_prefix).await.unwrap();
    let count = write_sections(&store, prefix, ACT_HTML).await;
    assert_eq!(count, 2);

    let stale = store
        .get_text(&format!("{sections_prefix}/miniviewer_7.txt"))
        .await;
    assert!(stale.is_err());
}
