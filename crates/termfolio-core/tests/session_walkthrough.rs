//! Drives a session the way a visitor would, starting on the desktop.

use termfolio_core::config::ASCII_BANNER;
use termfolio_core::models::OutputLineData;
use termfolio_core::{OutputLine, Session, portfolio_fs};

fn kinds(output: &[OutputLine]) -> Vec<&'static str> {
    output
        .iter()
        .map(|line| match line.data {
            OutputLineData::ProjectCard(_) => "card",
            OutputLineData::ListEntry { .. } => "entry",
            OutputLineData::Text(_) => "text",
            OutputLineData::Error(_) => "error",
            _ => "other",
        })
        .collect()
}

#[test]
fn walk_through_the_desktop() {
    let fs = portfolio_fs();
    let mut session = Session::new();
    assert_eq!(session.prompt(), "root@localhost:~/Desktop");

    session.run("cd projects", fs);
    assert_eq!(session.prompt(), "root@localhost:~/Desktop/projects");

    let entry = session.run("ls -la", fs).unwrap();
    assert_eq!(kinds(&entry.output), vec!["card"; fs.projects().len()]);

    session.run("cd ..", fs);
    assert_eq!(session.cwd().to_string(), "~/Desktop");

    let entry = session.run("cat banner.txt", fs).unwrap();
    let printed: Vec<String> = entry
        .output
        .iter()
        .map(|line| match &line.data {
            OutputLineData::Text(text) => text.clone(),
            other => panic!("unexpected line {other:?}"),
        })
        .collect();
    assert_eq!(printed, ASCII_BANNER.lines().collect::<Vec<_>>());

    let entry = session.run("cd nope", fs).unwrap();
    assert_eq!(
        entry.output,
        vec![OutputLine::error("cd: no such file or directory: nope")]
    );
    assert_eq!(session.cwd().to_string(), "~/Desktop");

    // Every command above was recorded, in order, with its own prompt
    let prompts: Vec<String> = session.transcript().iter().map(|e| e.prompt()).collect();
    assert_eq!(
        prompts,
        vec![
            "root@localhost:~/Desktop",
            "root@localhost:~/Desktop/projects",
            "root@localhost:~/Desktop/projects",
            "root@localhost:~/Desktop",
            "root@localhost:~/Desktop",
        ]
    );
}

#[test]
fn typo_then_recall_then_complete() {
    let fs = portfolio_fs();
    let mut session = Session::new();

    let entry = session.run("projcts", fs).unwrap();
    assert_eq!(
        entry.output,
        vec![OutputLine::error(
            "command not found: projcts. Did you mean 'projects'?"
        )]
    );

    session.recall_previous();
    assert_eq!(session.input(), "projcts");

    session.edit("pro");
    session.complete(fs);
    assert_eq!(session.input(), "projects ");

    let entry = session.submit(fs).unwrap();
    assert_eq!(entry.command, "projects");
    assert_eq!(kinds(&entry.output)[1..].to_vec(), vec!["card"; fs.projects().len()]);
}

#[test]
fn clear_wipes_the_screen() {
    let fs = portfolio_fs();
    let mut session = Session::new();
    session.run("help", fs);
    session.run("contact", fs);

    assert!(session.run("clear", fs).is_none());
    assert!(session.transcript().is_empty());

    session.run("pwd", fs);
    assert_eq!(session.transcript().len(), 1);
}

#[test]
fn transcript_serializes_for_scripting() {
    let fs = portfolio_fs();
    let mut session = Session::new();
    session.run("cat ~/Documents", fs);

    let json = serde_json::to_value(session.transcript().to_vec()).unwrap();
    assert_eq!(json[0]["command"], "cat ~/Documents");
    assert_eq!(json[0]["cwd"], "~/Desktop");
    assert_eq!(json[0]["output"][0]["type"], "error");
    assert_eq!(
        json[0]["output"][0]["value"],
        "cat: is a directory: ~/Documents"
    );
}
