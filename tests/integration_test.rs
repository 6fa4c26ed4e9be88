// Integration tests for categorix
use categorix::prelude::*;
use std::fs;

const REFERENCE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<sikayetler>
    <sikayet>
        <problem>sunucu çöktü</problem>
        <kategori>Altyapı</kategori>
    </sikayet>
    <sikayet>
        <problem>kullanıcı şifre unuttu</problem>
        <kategori>Destek</kategori>
    </sikayet>
    <sikayet>
        <problem>fatura yanlış kesildi</problem>
        <kategori>Finans</kategori>
    </sikayet>
</sikayetler>"#;

const TARGET_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<problems>
    <problem>sunucu çöktü tekrar</problem>
    <problem>şifre sıfırlama talebi geldi</problem>
    <problem>fatura tutarı yanlış</problem>
</problems>"#;

#[test]
fn test_categorization_end_to_end() {
    let (results, output) = categorize_documents(REFERENCE_XML, TARGET_XML).unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].category, "Altyapı");
    assert_eq!(results[1].category, "Destek");
    assert_eq!(results[2].category, "Finans");
    for result in &results {
        assert!((0.0..=100.0).contains(&result.confidence));
        assert!(!result.similar_reference.is_empty());
    }

    // Every target element carries exactly one category child, in order.
    assert_eq!(output.matches("<category>").count(), 3);
    let altyapi = output.find("<category>Altyapı</category>").unwrap();
    let destek = output.find("<category>Destek</category>").unwrap();
    let finans = output.find("<category>Finans</category>").unwrap();
    assert!(altyapi < destek && destek < finans);
}

#[test]
fn test_run_writes_result_file() {
    let dir = tempfile::tempdir().unwrap();
    let reference_path = dir.path().join("referans.xml");
    let target_path = dir.path().join("hedef.xml");
    let output_dir = dir.path().join("out");
    fs::write(&reference_path, REFERENCE_XML).unwrap();
    fs::write(&target_path, TARGET_XML).unwrap();

    let summary = run(&reference_path, &target_path, &output_dir).unwrap();

    assert_eq!(summary.stats.total_processed, 3);
    assert_eq!(summary.stats.categories_found, 3);
    assert!(summary.stats.avg_confidence > 0.0);
    assert_eq!(summary.category_counts.get("Altyapı"), Some(&1));

    let file_name = summary.output_path.file_name().unwrap().to_str().unwrap();
    assert!(file_name.starts_with("kategorize_edilmis_"));
    assert!(file_name.ends_with(".xml"));

    let written = fs::read_to_string(&summary.output_path).unwrap();
    assert_eq!(written.matches("<category>").count(), 3);
}

#[test]
fn test_two_runs_never_collide_on_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let reference_path = dir.path().join("referans.xml");
    let target_path = dir.path().join("hedef.xml");
    let output_dir = dir.path().join("out");
    fs::write(&reference_path, REFERENCE_XML).unwrap();
    fs::write(&target_path, TARGET_XML).unwrap();

    let first = run(&reference_path, &target_path, &output_dir).unwrap();
    let second = run(&reference_path, &target_path, &output_dir).unwrap();

    assert_ne!(first.output_path, second.output_path);
    assert_eq!(first.results, second.results);
    assert_eq!(first.category_counts, second.category_counts);
}

#[test]
fn test_alternate_container_and_field_names() {
    let reference = r#"<data>
        <complaint>
            <text>yazıcı kağıt sıkıştırdı</text>
            <category>Donanım</category>
        </complaint>
        <complaint category="Ağ">
            <description>internet bağlantısı kopuyor</description>
        </complaint>
    </data>"#;
    let target = r#"<rows>
        <row><a>yazıcı yine kağıt sıkıştırdı</a></row>
        <row><column_a>internet bağlantısı çok yavaş</column_a></row>
    </rows>"#;

    let (results, output) = categorize_documents(reference, target).unwrap();
    assert_eq!(results[0].category, "Donanım");
    assert_eq!(results[1].category, "Ağ");
    assert_eq!(output.matches("<category>").count(), 2);
}

#[test]
fn test_empty_reference_file_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let reference_path = dir.path().join("referans.xml");
    let target_path = dir.path().join("hedef.xml");
    fs::write(&reference_path, "<sikayetler></sikayetler>").unwrap();
    fs::write(&target_path, TARGET_XML).unwrap();

    let err = run(&reference_path, &target_path, dir.path()).unwrap_err();
    assert!(err.to_string().contains("Referans dosyasında"));
}

#[test]
fn test_empty_target_file_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let reference_path = dir.path().join("referans.xml");
    let target_path = dir.path().join("hedef.xml");
    fs::write(&reference_path, REFERENCE_XML).unwrap();
    fs::write(&target_path, "<problems></problems>").unwrap();

    let err = run(&reference_path, &target_path, dir.path()).unwrap_err();
    assert!(err.to_string().contains("Kategorize edilecek"));
}

#[test]
fn test_missing_input_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let target_path = dir.path().join("hedef.xml");
    fs::write(&target_path, TARGET_XML).unwrap();

    let missing = dir.path().join("yok.xml");
    assert!(run(&missing, &target_path, dir.path()).is_err());
}

#[test]
fn test_pairwise_similarity_surface() {
    assert!(similarity("sunucu çöktü", "sunucu çöktü") > 0.999);
    assert_eq!(similarity("elma armut", "masa sandalye"), 0.0);
}
