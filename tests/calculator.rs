use vercalc::{calculate, calculate_chain, CreationMethod, VersionError};

const INITIAL_VERSION: &str = "1.0";

#[test]
fn initial_version_for_major() {
    assert_eq!(calculate(None, CreationMethod::Major).unwrap(), INITIAL_VERSION);
}

#[test]
fn initial_version_for_minor() {
    assert_eq!(calculate(None, CreationMethod::Minor).unwrap(), "0.1");
}

#[test]
fn major_increment_twice() {
    let first = calculate(Some(INITIAL_VERSION), CreationMethod::Major).unwrap();
    assert_eq!(first, "2.0");
    let second = calculate(Some(&first), CreationMethod::Major).unwrap();
    assert_eq!(second, "3.0");
}

#[test]
fn minor_increment_twice() {
    let first = calculate(Some(INITIAL_VERSION), CreationMethod::Minor).unwrap();
    assert_eq!(first, "1.1");
    let second = calculate(Some(&first), CreationMethod::Minor).unwrap();
    assert_eq!(second, "1.2");
}

#[test]
fn minor_increment_past_nine() {
    assert_eq!(calculate(Some("1.9"), CreationMethod::Minor).unwrap(), "1.10");
}

#[test]
fn major_increment_discards_minor() {
    assert_eq!(calculate(Some("1.7"), CreationMethod::Major).unwrap(), "2.0");
}

#[test]
fn single_component_is_rejected() {
    for method in [CreationMethod::Major, CreationMethod::Minor] {
        assert!(matches!(
            calculate(Some("1"), method),
            Err(VersionError::InvalidVersionFormat(_))
        ));
    }
}

#[test]
fn outputs_are_valid_inputs() {
    let mut current: Option<String> = None;
    let methods = [
        CreationMethod::Minor,
        CreationMethod::Major,
        CreationMethod::Minor,
        CreationMethod::Minor,
        CreationMethod::Major,
    ];
    for method in methods {
        let next = calculate(current.as_deref(), method).unwrap();
        assert!(next.parse::<vercalc::Version>().is_ok(), "'{}' should parse", next);
        current = Some(next);
    }
    assert_eq!(current.as_deref(), Some("2.0"));
}

#[test]
fn chain_matches_repeated_calls() {
    let steps = calculate_chain(Some("0.9"), &[CreationMethod::Minor, CreationMethod::Major]).unwrap();
    assert_eq!(steps, vec!["0.10", "1.0"]);
}

#[test]
fn concurrent_callers_agree() {
    let handles: Vec<_> = (0..8u32)
        .map(|major| {
            std::thread::spawn(move || {
                let current = format!("{}.4", major);
                calculate(Some(&current), CreationMethod::Minor).unwrap()
            })
        })
        .collect();
    for (major, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("{}.5", major));
    }
}
