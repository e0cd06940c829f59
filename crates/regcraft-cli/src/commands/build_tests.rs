use std::io::Write;

use super::build::{BuildArgs, execute};
use super::input_loader::{CommandError, OptionArgs};

fn options() -> OptionArgs {
    OptionArgs {
        config: None,
        case_insensitive: false,
        multiline: false,
        dot_matches_newline: false,
        show_warnings: false,
    }
}

fn build(helper: &str, explain: bool, options: OptionArgs) -> Result<String, CommandError> {
    let args = BuildArgs {
        helper: helper.to_string(),
        explain,
        options,
    };
    execute(&args).map(|output| output.stdout)
}

#[test]
fn prints_pattern_with_mode_prefix() {
    let stdout = build(
        "credit-card",
        false,
        OptionArgs {
            case_insensitive: true,
            ..options()
        },
    )
    .unwrap();
    assert_eq!(stdout, "(?i)(?P<CreditCard>(?:\\d{4}[ \\-]?){4})\n");
}

#[test]
fn explain_prints_outline() {
    let stdout = build("domain", true, options()).unwrap();
    insta::assert_snapshot!(stdout, @r#"
    Capture "Domain"
      Or
        Token [a-zA-Z0-9]
        Group
          Token [a-zA-Z0-9]
          AtLeast(0)
            Class
              Token [a-zA-Z0-9]
              Lit "-."
          Token [a-zA-Z0-9]
      Lit "."
      Between(1, 63)
        Token [a-zA-Z0-9]
    "#);
}

#[test]
fn explain_still_reports_broken_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{not json").unwrap();

    let err = build(
        "domain",
        true,
        OptionArgs {
            config: Some(file.path().to_path_buf()),
            ..options()
        },
    )
    .unwrap_err();
    assert!(matches!(err, CommandError::Config { .. }), "{err}");
}

#[test]
fn helpers_build_without_advisories() {
    let args = BuildArgs {
        helper: "phone".to_string(),
        explain: false,
        options: OptionArgs {
            show_warnings: true,
            ..options()
        },
    };
    let output = execute(&args).unwrap();
    assert_eq!(output.diagnostics, "");
    assert!(output.stdout.starts_with("(?P<Phone>"));
}
