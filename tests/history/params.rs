use vantage_rs::{AvError, Interval};

#[test]
fn interval_defaults_to_daily() {
    assert_eq!(Interval::default(), Interval::Daily);
}

#[test]
fn interval_parses_upstream_spellings() {
    let all = [
        Interval::I1min,
        Interval::I5min,
        Interval::I15min,
        Interval::I30min,
        Interval::I60min,
        Interval::Daily,
        Interval::Weekly,
        Interval::Monthly,
    ];
    for interval in all {
        assert_eq!(interval.to_string().parse::<Interval>().unwrap(), interval);
    }
    assert_eq!(" Weekly ".parse::<Interval>().unwrap(), Interval::Weekly);
    assert!(Interval::I30min.is_intraday());
    assert!(!Interval::Monthly.is_intraday());
}

#[test]
fn unknown_interval_is_rejected() {
    let err = "2min".parse::<Interval>().unwrap_err();
    assert!(
        matches!(err, AvError::InvalidInterval(ref s) if s == "2min"),
        "got {err:?}"
    );
}
