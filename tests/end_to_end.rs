mod common;

use role2vec::cli::RoleType;
use role2vec::config::Settings;
use role2vec::vectors::{self, BlendWeights, ResultMap, VectorJob};

use common::chased_conllu;

#[test]
fn one_marked_line_yields_one_record_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = |name: &str| dir.path().join(name);

    std::fs::write(path("text.txt"), "The **dog** chased the ##ball##\nNothing marked here\n").unwrap();
    std::fs::write(path("words.json"), r#"{"ball": [1.0, 2.0, 3.0], "dog": [0.0, 0.0, 1.0]}"#).unwrap();
    std::fs::write(path("roles.vec"), "2 2\nNN_dobj 1 0\nNN_nsubj 0 0\n").unwrap();
    std::fs::write(path("distances.json"), "[[0, 0], [1, 0], [0, 1]]").unwrap();
    std::fs::write(path("parses.conllu"), chased_conllu()).unwrap();

    let job = VectorJob {
        text_path: path("text.txt"),
        w2v_path: path("words.json"),
        r2v_path: path("roles.vec"),
        parses_path: path("parses.conllu"),
        distance_path: path("distances.json"),
        output_path: path("out/vectors.json"),
        role_type: RoleType::Merged,
        weights: BlendWeights { alpha: 0.8, beta: 0.2 },
    };
    let results = vectors::compute(&job, &Settings::default()).unwrap();

    assert_eq!(results.len(), 1);
    let records = &results["The dog chased the ball"];
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].word, "ball");
    assert_eq!(records[0].index, 5);
    assert_eq!(records[0].semantic, vec![1.0, 2.0, 3.0]);
    assert!((records[0].syntactic[0] - 0.8).abs() < 1e-6);
    assert!((records[0].syntactic[1] - 0.2).abs() < 1e-6);

    let written: ResultMap =
        serde_json::from_str(&std::fs::read_to_string(path("out/vectors.json")).unwrap()).unwrap();
    assert_eq!(written, results);
}

#[test]
fn unknown_model_file_is_a_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("text.txt"), "##a##\n").unwrap();
    let job = VectorJob {
        text_path: dir.path().join("text.txt"),
        w2v_path: dir.path().join("missing.vec"),
        r2v_path: dir.path().join("missing.vec"),
        parses_path: dir.path().join("missing.conllu"),
        distance_path: dir.path().join("missing.json"),
        output_path: dir.path().join("out.json"),
        role_type: RoleType::Tag,
        weights: BlendWeights::default(),
    };
    let err = vectors::compute(&job, &Settings::default()).unwrap_err();
    assert!(format!("{err:#}").contains("missing.vec"));
    assert!(!dir.path().join("out.json").exists());
}
