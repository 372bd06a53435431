//! Shell parsing and a scripted shell session against a mock API.

use std::ops::ControlFlow;

use serde_json::json;
use tradedesk_business::resources::COUNTRIES;
use tradedesk_business::{
    BusinessConfig, FixedAnswer, Notifier, RecordId, RenderedTable, ResourceController, TableView,
};
use tradedesk_cli::cli::{parse_assignment, parse_record_id, parse_resource};
use tradedesk_cli::commands::shell::{ShellCommand, execute, parse_line};
use tradedesk_cli::output::Output;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod parse_tests {
    use super::*;

    fn parse(line: &str) -> Result<ShellCommand, String> {
        line.parse()
    }

    #[test]
    fn test_filter_keeps_rest_of_line() {
        assert_eq!(
            parse("filter  costa rica "),
            Ok(ShellCommand::Filter("costa rica".to_owned()))
        );
        assert_eq!(parse("filter"), Ok(ShellCommand::Filter(String::new())));
    }

    #[test]
    fn test_edit_and_delete_need_an_id() {
        assert_eq!(parse("edit 2"), Ok(ShellCommand::Edit(RecordId(2))));
        assert_eq!(parse("DELETE 7"), Ok(ShellCommand::Delete(RecordId(7))));
        assert_eq!(parse("edit"), Err("usage: edit <id>".to_owned()));
        assert!(parse("delete seven").is_err());
    }

    #[test]
    fn test_set_value_may_contain_spaces() {
        assert_eq!(
            parse("set nombre Costa Rica"),
            Ok(ShellCommand::Set {
                field: "nombre".to_owned(),
                value: "Costa Rica".to_owned(),
            })
        );
        assert_eq!(
            parse("set region"),
            Ok(ShellCommand::Set {
                field: "region".to_owned(),
                value: String::new(),
            })
        );
        assert!(parse("set").is_err());
    }

    #[test]
    fn test_simple_commands_and_aliases() {
        assert_eq!(parse("save"), Ok(ShellCommand::Save));
        assert_eq!(parse("clear"), Ok(ShellCommand::Clear));
        assert_eq!(parse("reload"), Ok(ShellCommand::Reload));
        assert_eq!(parse("form"), Ok(ShellCommand::Form));
        assert_eq!(parse("ls"), Ok(ShellCommand::List));
        assert_eq!(parse("?"), Ok(ShellCommand::Help));
        assert_eq!(parse("exit"), Ok(ShellCommand::Quit));
        assert_eq!(parse("save now"), Err("`save` takes no arguments".to_owned()));
        assert!(parse("launch").is_err());
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("# seed data"), None);
        assert_eq!(parse_line("quit"), Some(Ok(ShellCommand::Quit)));
    }

    #[test]
    fn test_set_assignments() {
        assert_eq!(
            parse_assignment("nombre=Chile"),
            Ok(("nombre".to_owned(), "Chile".to_owned()))
        );
        assert_eq!(
            parse_assignment("observaciones=a=b"),
            Ok(("observaciones".to_owned(), "a=b".to_owned()))
        );
        assert_eq!(
            parse_assignment("region="),
            Ok(("region".to_owned(), String::new()))
        );
        assert!(parse_assignment("nombre").is_err());
        assert!(parse_assignment("=Chile").is_err());
    }

    #[test]
    fn test_resource_and_id_arguments() {
        assert_eq!(parse_resource("countries").map(|r| r.path), Ok("paises"));
        assert_eq!(parse_resource("paises").map(|r| r.key), Ok("countries"));
        assert!(
            parse_resource("planets")
                .unwrap_err()
                .contains("expected one of: countries")
        );
        assert_eq!(parse_record_id("12"), Ok(RecordId(12)));
        assert!(parse_record_id("x").is_err());
    }
}

#[derive(Default)]
struct Messages(Vec<String>);

impl Notifier for Messages {
    fn notify(&mut self, message: &str) {
        self.0.push(message.to_owned());
    }
}

#[derive(Default)]
struct Tables(Vec<RenderedTable>);

impl TableView for Tables {
    fn show(&mut self, table: &RenderedTable) {
        self.0.push(table.clone());
    }
}

#[tokio::test]
async fn test_scripted_session_edits_and_saves() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/paises/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "nombre": "Chile", "codigo_iso": "CL", "region": null },
            { "id": 2, "nombre": "Peru", "codigo_iso": "PE", "region": null },
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/paises/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({ "id": 2, "nombre": "Peru", "codigo_iso": "PE", "region": null }),
        ))
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/paises/2"))
        .and(body_json(json!({ "nombre": "Peru", "codigo_iso": "PE", "region": "Andes" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({ "id": 2, "nombre": "Peru", "codigo_iso": "PE", "region": "Andes" }),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut controller = ResourceController::new(
        BusinessConfig::new(mock_server.uri()),
        &COUNTRIES,
        Messages::default(),
        FixedAnswer(false),
        Tables::default(),
    );
    let out = Output::new();

    let script = "reload\nfilter pe\nedit 2\nset region Andes\nsave\ndelete 1\nquit\nreload\n";
    let mut stopped = false;
    for line in script.lines() {
        let command = parse_line(line).expect("not blank").expect("valid command");
        if execute(&mut controller, command, &out).await.is_break() {
            stopped = true;
            break;
        }
    }

    assert!(stopped);
    assert!(!controller.is_editing());
    assert_eq!(
        controller.notifier().0,
        vec!["Country saved.".to_owned()],
        "declined delete should not notify"
    );
    // reload, filter, reload after save
    assert_eq!(controller.view().0.len(), 3);
    assert_eq!(controller.view().0[1].ids(), vec![RecordId(2)]);
    assert!(
        mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .all(|r| r.method.as_str() != "DELETE")
    );
}

#[tokio::test]
async fn test_set_unknown_field_changes_nothing() {
    let mut controller = ResourceController::new(
        BusinessConfig::new("http://127.0.0.1:9"),
        &COUNTRIES,
        Messages::default(),
        FixedAnswer(true),
        Tables::default(),
    );
    let flow = execute(
        &mut controller,
        ShellCommand::Set {
            field: "capital".to_owned(),
            value: "Lima".to_owned(),
        },
        &Output::new(),
    )
    .await;

    assert_eq!(flow, ControlFlow::Continue(()));
    assert_eq!(controller.form().get("capital"), "");
}
