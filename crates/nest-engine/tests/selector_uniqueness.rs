use nest_core::NestError;
use nest_engine::select_worst;

#[test]
fn returns_index_of_strict_minimum() {
    assert_eq!(select_worst(&[0.4, 0.1, 0.9, 0.3]).unwrap(), 1);
    assert_eq!(select_worst(&[0.2, 0.5]).unwrap(), 0);
    assert_eq!(select_worst(&[0.7, 0.6, 0.5]).unwrap(), 2);
}

#[test]
fn single_member_is_its_own_minimum() {
    assert_eq!(select_worst(&[0.42]).unwrap(), 0);
}

#[test]
fn tied_minimum_is_fatal() {
    let err = select_worst(&[0.3, 0.1, 0.8, 0.1]).unwrap_err();
    assert!(err.is_degenerate_minimum());
    let info = err.info();
    assert_eq!(info.code, "degenerate-minimum");
    assert_eq!(info.context.get("indices").map(String::as_str), Some("1,3"));
    assert_eq!(info.context.get("likelihood").map(String::as_str), Some("0.1"));
}

#[test]
fn ties_above_the_minimum_are_allowed() {
    assert_eq!(select_worst(&[0.5, 0.5, 0.2]).unwrap(), 2);
}

#[test]
fn empty_population_is_rejected() {
    let err = select_worst(&[]).unwrap_err();
    assert!(matches!(err, NestError::InvalidConfiguration(_)));
    assert_eq!(err.info().code, "empty-population");
}
