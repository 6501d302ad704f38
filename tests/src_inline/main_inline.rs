use super::*;

#[test]
fn test_render_strategies_plain() {
    assert_eq!(render_strategies(false), "None\nmeandiv");
}

#[test]
fn test_render_strategies_json() {
    assert_eq!(render_strategies(true), r#"["None","meandiv"]"#);
}

#[test]
fn test_parse_config_command() {
    let cli = Cli::try_parse_from(["kira-gsea-norms", "-vv", "config", "params.json"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.command, Command::Config { ref path } if path == &PathBuf::from("params.json")));
}

#[test]
fn test_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["kira-gsea-norms", "run"]).is_err());
}

#[test]
fn test_config_command_missing_file() {
    let err = run(Command::Config {
        path: PathBuf::from("/nonexistent/params.json"),
    })
    .unwrap_err();
    assert!(err.starts_with("IO error"));
}
