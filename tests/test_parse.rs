//! Tests for token consumption and dispatch

mod common;

use common::{argv, plot_registry};
use typarg::{Registry, Value};

#[test]
fn test_flag_present_anywhere() {
    let mut registry = plot_registry();
    registry.parse(argv(&["alpha", "beta", "--help"]));
    assert!(registry.get_flag("-h"));
}

#[test]
fn test_flag_absent() {
    let mut registry = plot_registry();
    registry.parse(argv(&["alpha"]));
    assert!(!registry.get_flag("--help"));
}

#[test]
fn test_program_name_is_skipped() {
    let mut registry = plot_registry();
    registry.parse(["-h", "x"]);

    assert!(!registry.get_flag("-h"));
    assert_eq!(registry.positional_tokens(), ["x"]);
}

#[test]
fn test_text_takes_next_token_verbatim() {
    let mut registry = plot_registry();
    registry.parse(argv(&["-t", "-h", "after"]));

    assert_eq!(registry.get_text("--title"), "-h");
    assert!(!registry.get_flag("-h"), "Consumed value must not be re-matched");
    assert_eq!(registry.positional_tokens(), ["after"]);
}

#[test]
fn test_text_keeps_spaces_and_empty_tokens() {
    let mut registry = plot_registry();
    registry.parse(argv(&["-t", "A Plot Title"]));
    assert_eq!(registry.get_text("-t"), "A Plot Title");

    let mut registry = plot_registry();
    registry.parse(argv(&["-t", ""]));
    assert_eq!(registry.get_text("-t"), "");
    assert!(registry.is_supplied("-t"));
}

#[test]
fn test_missing_trailing_value() {
    let mut registry = plot_registry();
    registry.parse(argv(&["-t"]));

    assert_eq!(registry.get_text("-t"), "");
    assert!(!registry.is_supplied("-t"));
    assert!(registry.positional_tokens().is_empty());
}

#[test]
fn test_integer_value() {
    let mut registry = plot_registry();
    registry.parse(argv(&["-x", "42"]));
    assert_eq!(registry.get_integer("-x"), 42);
    assert!(registry.positional_tokens().is_empty());
}

#[test]
fn test_negative_integer_is_consumed_as_value() {
    let mut registry = plot_registry();
    registry.parse(argv(&["-x", "-5"]));
    assert_eq!(registry.get_integer("-x"), -5);
}

#[test]
fn test_rejected_integer_is_reexamined() {
    let mut registry = plot_registry();
    registry.parse(argv(&["-x", "abc"]));

    assert_eq!(registry.get_integer("-x"), 0);
    assert_eq!(registry.positional_tokens(), ["abc"]);
}

#[test]
fn test_rejected_value_can_match_another_argument() {
    let mut registry = plot_registry();
    registry.parse(argv(&["-x", "-y", "2.5"]));

    assert_eq!(registry.get_integer("-x"), 0);
    assert_eq!(registry.get_floating("-y"), 2.5);
    assert!(registry.positional_tokens().is_empty());
}

#[test]
fn test_floating_values() {
    let mut registry = plot_registry();
    registry.parse(argv(&["--y-axis", "1.5e2"]));
    assert_eq!(registry.get_floating("-y"), 150.0);

    let mut registry = plot_registry();
    registry.parse(argv(&["-y", "3"]));
    assert_eq!(registry.get_floating("-y"), 3.0);

    let mut registry = plot_registry();
    registry.parse(argv(&["-y", "1.2.3"]));
    assert_eq!(registry.get_floating("-y"), 0.0);
    assert_eq!(registry.positional_tokens(), ["1.2.3"]);
}

#[test]
fn test_later_occurrence_overwrites_scalar() {
    let mut registry = plot_registry();
    registry.parse(argv(&["-x", "1", "--x-axis", "2"]));
    assert_eq!(registry.get_integer("-x"), 2);
}

#[test]
fn test_rejected_later_occurrence_keeps_earlier_value() {
    let mut registry = plot_registry();
    registry.parse(argv(&["-x", "1", "-x", "oops"]));

    assert_eq!(registry.get_integer("-x"), 1);
    assert_eq!(registry.positional_tokens(), ["oops"]);
}

#[test]
fn test_unconstrained_list_stops_at_declared_reference() {
    let mut registry = plot_registry();
    registry.list('l', Some("labels"), Vec::<String>::new()).unwrap();
    registry.parse(argv(&["-l", "a", "b", "c", "-h"]));

    assert_eq!(registry.get_list("-l"), ["a", "b", "c"]);
    assert!(registry.get_flag("-h"));
    assert!(registry.positional_tokens().is_empty());
}

#[test]
fn test_unconstrained_list_takes_undeclared_dash_tokens() {
    let mut registry = Registry::new();
    registry.list('l', None, Vec::<String>::new()).unwrap();
    registry.parse(argv(&["-l", "-q", "--unknown"]));

    assert_eq!(registry.get_list("-l"), ["-q", "--unknown"]);
}

#[test]
fn test_constrained_list_stops_at_first_rejection() {
    let mut registry = Registry::new();
    registry.list('m', Some("mode"), ["fast", "slow"]).unwrap();
    registry.parse(argv(&["--mode", "fast", "slow", "turbo", "fast"]));

    assert_eq!(registry.get_list("-m"), ["fast", "slow"]);
    assert_eq!(registry.positional_tokens(), ["turbo", "fast"]);
}

#[test]
fn test_list_without_elements_is_not_supplied() {
    let mut registry = Registry::new();
    registry.list('m', None, ["fast"]).unwrap();
    registry.parse(argv(&["-m", "slow"]));

    assert!(registry.get_list("-m").is_empty());
    assert!(!registry.is_supplied("-m"));
    assert_eq!(registry.positional_tokens(), ["slow"]);
}

#[test]
fn test_repeated_list_appends() {
    let mut registry = Registry::new();
    registry.list('l', None, Vec::<String>::new()).unwrap();
    registry.flag('v', None).unwrap();
    registry.parse(argv(&["-l", "a", "-v", "-l", "b", "a"]));

    assert_eq!(registry.get_list("-l"), ["a", "b", "a"]);
}

#[test]
fn test_positional_order_preserved() {
    let mut registry = plot_registry();
    registry.parse(argv(&["foo", "-h", "bar", "foo"]));

    assert_eq!(registry.positional_tokens(), ["foo", "bar", "foo"]);
}

#[test]
fn test_unsupported_syntax_is_positional() {
    let mut registry = plot_registry();
    registry.parse(argv(&["--title=plot", "-hx", "--verbose", "-"]));

    assert_eq!(
        registry.positional_tokens(),
        ["--title=plot", "-hx", "--verbose", "-"]
    );
    assert!(!registry.get_flag("-h"));
    assert_eq!(registry.get_text("-t"), "");
}

#[test]
fn test_second_parse_accumulates() {
    let mut registry = plot_registry();
    registry.list('l', None, Vec::<String>::new()).unwrap();

    registry.parse(argv(&["-x", "1", "-l", "a", "-h", "first"]));
    registry.parse(argv(&["-x", "2", "-l", "b", "-h", "second"]));

    assert_eq!(registry.get_integer("-x"), 2);
    assert!(registry.get_flag("-h"));
    assert_eq!(registry.get_list("-l"), ["a", "b"]);
    assert_eq!(registry.positional_tokens(), ["first", "second"]);
}

#[test]
fn test_mixed_invocation() {
    let mut registry = plot_registry();
    registry.parse(argv(&[
        "-x", "3", "--y-axis", "2.5", "-t", "Area", "stray", "-o", "plot.svg",
    ]));

    assert_eq!(registry.get_integer("-x"), 3);
    assert_eq!(registry.get_floating("-y"), 2.5);
    assert_eq!(registry.get_text("-t"), "Area");
    assert_eq!(
        registry.get_output_file("--out-file"),
        std::path::Path::new("plot.svg")
    );
    assert_eq!(registry.positional_tokens(), ["stray"]);
    assert_eq!(
        registry.supplied("-o"),
        Some(&Value::OutputFile("plot.svg".into()))
    );
}
