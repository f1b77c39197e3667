//! End-to-end dispatch tests: registry feed -> runner -> provider command.

use std::sync::Arc;

use serde_json::json;

use quotelab_core::{
    CommandContext, CommandMap, CommandResult, CommandRunner, CommandSignature, ErrorKind,
    FnCommand, ParamMap, ParamType, Parameter, SystemSettings, TracedCommand, UserSettings,
};

fn kwargs(pairs: &[(&str, serde_json::Value)]) -> ParamMap {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

/// A provider fetcher in the shape plugins register: declared signature,
/// context-aware, provider-choice-aware, returns a list of raw records.
fn historical_command() -> FnCommand<impl Fn(&ParamMap) -> CommandResult + Send + Sync> {
    FnCommand::new(
        CommandSignature::new(vec![
            Parameter::required("symbol", ParamType::String),
            Parameter::optional("limit", ParamType::Integer, json!(100)),
            Parameter::required("cc", ParamType::Context),
            Parameter::optional("provider_choices", ParamType::ProviderChoices, json!({})),
        ]),
        |params: &ParamMap| -> CommandResult {
            let cc: CommandContext = serde_json::from_value(params["cc"].clone())?;
            Ok(json!([{
                "symbol": params["symbol"],
                "limit": params["limit"],
                "provider_choices": params["provider_choices"],
                "appName": cc.system_settings.app_name,
            }]))
        },
    )
}

fn build_runner(user_settings: UserSettings) -> CommandRunner {
    let mut command_map = CommandMap::new();
    command_map.register_command(
        "index.price.historical",
        Arc::new(TracedCommand::new("index.price.historical", historical_command())),
        vec!["yahoo".to_string(), "cboe".to_string()],
        Some("yahoo".to_string()),
    );
    CommandRunner::new(
        Arc::new(command_map),
        Arc::new(SystemSettings::default()),
        Arc::new(user_settings),
    )
}

#[test]
fn run_builds_coerces_and_injects_context() {
    let runner = build_runner(UserSettings::default());

    let result = runner.run(
        "index.price.historical",
        &[json!("SPX")],
        kwargs(&[
            ("limit", json!("30")),
            ("provider_choices", json!({"provider": "cboe"})),
        ]),
    );

    assert!(result.is_success(), "unexpected failure: {:?}", result);
    let records = result.output().unwrap();
    assert_eq!(records[0]["symbol"], "SPX");
    assert_eq!(records[0]["limit"], 30);
    assert_eq!(records[0]["provider_choices"], json!({"provider": "cboe"}));
    assert_eq!(records[0]["appName"], "quotelab");
}

#[test]
fn run_defaults_fill_and_choices_stay_absent_shaped() {
    let runner = build_runner(UserSettings::default());

    // No explicit provider_choices: the route default ("yahoo") must NOT be
    // synthesized; the declared empty-mapping default applies instead.
    let result = runner.run("index.price.historical", &[json!("SPX")], ParamMap::new());

    let records = result.output().unwrap();
    assert_eq!(records[0]["limit"], 100);
    assert_eq!(records[0]["provider_choices"], json!({}));
}

#[test]
fn run_preserves_explicit_unset_choice() {
    let runner = build_runner(UserSettings::default());

    let result = runner.run(
        "index.price.historical",
        &[json!("SPX")],
        kwargs(&[("provider_choices", json!({"provider": null}))]),
    );

    let records = result.output().unwrap();
    assert_eq!(records[0]["provider_choices"], json!({"provider": null}));
}

#[test]
fn run_surfaces_uniform_failures() {
    let runner = build_runner(UserSettings::default());

    let result = runner.run("index.price.latest", &[], ParamMap::new());
    assert_eq!(result.error_kind(), Some(ErrorKind::RouteNotFound));

    let result = runner.run(
        "index.price.historical",
        &[json!("SPX")],
        kwargs(&[("provider_choices", json!({"provider": "bloomberg"}))]),
    );
    assert_eq!(result.error_kind(), Some(ErrorKind::InvalidProviderChoice));

    let result = runner.run(
        "index.price.historical",
        &[json!("SPX")],
        kwargs(&[("limit", json!([1, 2]))]),
    );
    assert_eq!(result.error_kind(), Some(ErrorKind::ParameterValidation));
}

#[test]
fn runner_is_shareable_across_threads() {
    let runner = Arc::new(build_runner(UserSettings::default()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let runner = Arc::clone(&runner);
            std::thread::spawn(move || {
                runner.run(
                    "index.price.historical",
                    &[json!(format!("SYM{i}"))],
                    ParamMap::new(),
                )
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert!(result.is_success());
    }
}
