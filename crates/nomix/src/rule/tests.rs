use pretty_assertions::assert_eq;

use super::*;

fn max_42(value: &Value) -> Result<(), RuleError> {
    match value {
        Value::Int64(v) if *v > 42 => Err("must be no greater than 42".into()),
        _ => Ok(()),
    }
}

fn never(_: &Value) -> Result<(), RuleError> {
    Err("never valid".into())
}

#[test]
fn closure_rule() {
    let rule = |value: &Value| -> Result<(), RuleError> {
        if *value == Value::Bool(true) {
            Ok(())
        } else {
            Err("must be true".into())
        }
    };
    assert!(rule.validate(&Value::Bool(true)).is_ok());
    let err = rule.validate(&Value::Bool(false)).err();
    assert_eq!(err.map(|e| e.to_string()), Some("must be true".to_owned()));
}

#[test]
fn empty_rules_accept_everything() {
    let rules = Rules::new();
    assert!(rules.is_empty());
    assert!(rules.validate(&Value::Int64(1000)).is_ok());
}

#[test]
fn first_failure_wins() {
    let rules = Rules::new().with(max_42).with(never);
    assert_eq!(rules.len(), 2);

    let err = rules.validate(&Value::Int64(43)).err();
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("must be no greater than 42".to_owned())
    );

    let err = rules.validate(&Value::Int64(1)).err();
    assert_eq!(err.map(|e| e.to_string()), Some("never valid".to_owned()));
}
