mod common;

use anyhow::Result;
use greetkit::config::toml_config::TomlConfig;
use greetkit::{CliConfig, GreetError, GreetingEngine, OutputFormat};

#[test]
fn test_end_to_end_with_config_file() -> Result<()> {
    let file = common::write_config(
        r#"
[greeting]
name = "  Ada!!  "
count = 2
sanitize = true
"#,
    )?;

    let cli = CliConfig {
        config: Some(file.path().to_string_lossy().into_owned()),
        ..Default::default()
    };

    let engine = GreetingEngine::new(cli.resolve()?);
    let greeting = engine.run()?;

    assert_eq!(greeting.name, "Ada");
    assert_eq!(greeting.count, 2);
    assert_eq!(engine.render(&greeting)?, "Hello, Ada! Hello, Ada!");
    Ok(())
}

#[test]
fn test_cli_values_win_over_file() -> Result<()> {
    let file = common::write_config(
        r#"
[greeting]
name = "File"
count = 5

[output]
format = "json"
"#,
    )?;

    let cli = CliConfig {
        name: Some("Cli".to_string()),
        format: Some(OutputFormat::Text),
        config: Some(file.path().to_string_lossy().into_owned()),
        ..Default::default()
    };

    let engine = GreetingEngine::new(cli.resolve()?);
    let rendered = engine.render(&engine.run()?)?;

    assert_eq!(rendered, ["Hello, Cli!"; 5].join(" "));
    Ok(())
}

#[test]
fn test_toml_config_drives_engine_directly() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[greeting]
name = "Bob"
count = 2

[output]
format = "json"
"#,
    )?;

    let engine = GreetingEngine::new(config);
    let rendered = engine.render(&engine.run()?)?;
    let greeting: greetkit::Greeting = serde_json::from_str(&rendered)?;

    assert_eq!(greeting.message, "Hello, Bob! Hello, Bob!");
    Ok(())
}

#[test]
fn test_missing_config_file_is_reported() {
    let cli = CliConfig {
        config: Some("/no/such/dir/greetkit.toml".to_string()),
        ..Default::default()
    };

    let err = cli.resolve().unwrap_err();
    assert!(matches!(err, GreetError::IoError(_)));
    assert_eq!(err.severity().exit_code(), 3);
}

#[test]
fn test_invalid_name_in_file_is_rejected() -> Result<()> {
    let file = common::write_config("[greeting]\nname = \"beep\\u0007\"\n")?;
    let cli = CliConfig {
        config: Some(file.path().to_string_lossy().into_owned()),
        ..Default::default()
    };

    let err = cli.resolve().unwrap_err();
    assert!(matches!(err, GreetError::InvalidConfigValueError { .. }));
    Ok(())
}
