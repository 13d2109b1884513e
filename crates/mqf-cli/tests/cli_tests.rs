use std::fs;
use std::process::Command;

fn mqf() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mqf"))
}

#[test]
fn missing_src_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let out = mqf().current_dir(dir.path()).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("directory not found"));
    assert!(out.stdout.is_empty());
}

#[test]
fn default_run_fixes_src_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src/app");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        src.join("page.tsx"),
        "export const metadata = {\n  title: 'Sitemap',\n  description: 'All pages.',\n};\n",
    )
    .unwrap();
    fs::write(src.join("bad.jsx"), [0xff, 0xfe]).unwrap();

    let out = mqf().current_dir(dir.path()).output().unwrap();
    assert_eq!(out.status.code(), Some(0));
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("Fixed: "));
    assert!(text.contains("Error processing "));
    assert!(text.contains("Fixed 1 file(s)"));
    let page = fs::read_to_string(src.join("page.tsx")).unwrap();
    assert!(page.contains("title: \"Sitemap\""));
    assert!(page.contains("description: \"All pages.\""));
}

#[test]
fn json_summary_for_explicit_root() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("layout.jsx"),
        "export const metadata = { title: 'Home' };\n",
    )
    .unwrap();

    let out = mqf().arg(dir.path()).arg("--json").output().unwrap();
    assert_eq!(out.status.code(), Some(0));
    let text = String::from_utf8_lossy(&out.stdout);
    let last = text.lines().last().unwrap();
    let v: serde_json::Value = serde_json::from_str(last).unwrap();
    assert_eq!(v["scanned"], 1);
    assert_eq!(v["modified"], 1);
    assert_eq!(v["failed"], 0);
}
