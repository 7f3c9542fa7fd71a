use std::collections::HashSet;
use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};
use tempfile::tempdir;

#[test]
fn tools_list_includes_expected_tools() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-quotes"))
        .args(["serve", "--stdio"])
        .current_dir(home.path())
        .env("HOME", home.path())
        .env("API_BASE_URL", "http://127.0.0.1:1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    let mut stdin = child.stdin.take().expect("stdin available");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout available"));

    let request = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 2,
        "method": "tools/list",
        "params": {}
    });
    let serialized = serde_json::to_string(&request)?;
    writeln!(stdin, "{serialized}")?;
    stdin.flush()?;

    let mut line = String::new();
    stdout.read_line(&mut line)?;

    let response: serde_json::Value = serde_json::from_str(line.trim())?;
    let tools = response
        .get("result")
        .and_then(|value| value.get("tools"))
        .and_then(|value| value.as_array())
        .expect("tools array present");

    assert_eq!(tools.len(), 38);

    let names: HashSet<&str> = tools
        .iter()
        .filter_map(|tool| tool.get("name").and_then(|value| value.as_str()))
        .collect();
    assert_eq!(names.len(), 38);

    for expected in [
        "get_quote",
        "get_quote_random",
        "get_quote_search",
        "post_quote",
        "put_quote_image",
        "get_qshow_list",
        "get_qod",
        "put_qod",
        "patch_qod",
    ] {
        assert!(names.contains(expected), "missing {expected}");
    }

    let post_quote = tools
        .iter()
        .find(|tool| tool.get("name").and_then(|v| v.as_str()) == Some("post_quote"))
        .expect("post_quote present");
    let schema = post_quote.get("inputSchema").expect("inputSchema present");
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["properties"]["quote"]["type"], "string");
    assert_eq!(schema["required"], serde_json::json!(["quote"]));

    let _ = child.kill();
    Ok(())
}
