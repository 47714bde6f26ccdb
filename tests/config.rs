use role2vec::cli::RoleType;
use role2vec::config::Settings;
use role2vec::nlp::training::TrainingParams;

const VARS: &[&str] = &[
    "ROLE2VEC_TOKENIZER_EXCEPTIONS",
    "ROLE2VEC_ROLE_TYPE",
    "ROLE2VEC_ALPHA",
    "ROLE2VEC_BETA",
    "ROLE2VEC_VECTOR_SIZE",
    "ROLE2VEC_WINDOW",
    "ROLE2VEC_MIN_COUNT",
    "ROLE2VEC_EPOCHS",
    "ROLE2VEC_NEGATIVE",
    "ROLE2VEC_SEED",
];

// One test, since the cases share the process environment.
#[test]
fn settings_follow_the_environment() {
    for var in VARS {
        std::env::remove_var(var);
    }
    let defaults = Settings::load().unwrap();
    assert!(defaults.tokenizer_exceptions.is_empty());
    assert_eq!(defaults.role_type, RoleType::Merged);
    assert_eq!(defaults.alpha, 0.8);
    assert_eq!(defaults.beta, 0.2);
    assert_eq!(defaults.training, TrainingParams::default());

    std::env::set_var("ROLE2VEC_TOKENIZER_EXCEPTIONS", " don't, can't ,,gonna ");
    std::env::set_var("ROLE2VEC_ROLE_TYPE", "Dependence");
    std::env::set_var("ROLE2VEC_ALPHA", "0.5");
    std::env::set_var("ROLE2VEC_BETA", "heavy");
    std::env::set_var("ROLE2VEC_WINDOW", "3");
    std::env::set_var("ROLE2VEC_SEED", "-4");
    let settings = Settings::load().unwrap();
    assert_eq!(settings.tokenizer_exceptions, vec!["don't", "can't", "gonna"]);
    assert_eq!(settings.role_type, RoleType::Dependency);
    assert_eq!(settings.alpha, 0.5);
    assert_eq!(settings.beta, 0.2);
    assert_eq!(settings.training.window, 3);
    assert_eq!(settings.training.seed, 1);

    std::env::set_var("ROLE2VEC_ROLE_TYPE", "constituency");
    assert_eq!(Settings::load().unwrap().role_type, RoleType::Merged);

    for var in VARS {
        std::env::remove_var(var);
    }
}
