//! End-to-end tests over the public console facade

use pretty_assertions::assert_eq;

use naturakit::{list_directory, resolve, Console, Disk, EntryKind, Error, WorkingPath};

// ==================== Resolver ====================

#[test]
fn every_stock_path_resolves_to_its_exact_node() {
    let disk = Disk::standard();
    let cwd = WorkingPath::root();

    let cases = [
        ("C:\\Users", EntryKind::Directory),
        ("C:\\Users\\Player", EntryKind::Directory),
        ("C:\\Users\\Player\\Documents", EntryKind::Directory),
        ("C:\\Users\\Player\\Desktop", EntryKind::Directory),
        ("C:\\Users\\Player\\readme.txt", EntryKind::File),
        ("C:\\System", EntryKind::Directory),
        ("C:\\autoexec.ntr", EntryKind::File),
    ];
    for (path, kind) in cases {
        let node = resolve(&disk, &cwd, path).unwrap();
        assert_eq!(node.kind(), kind, "{path}");
    }
}

#[test]
fn a_missing_segment_anywhere_fails_the_walk() {
    let disk = Disk::standard();
    let cwd = WorkingPath::root();

    for path in ["C:\\Ghost", "C:\\Users\\Ghost", "C:\\Users\\Ghost\\Player"] {
        assert_eq!(resolve(&disk, &cwd, path), Err(Error::PathNotFound), "{path}");
    }
}

#[test]
fn separator_runs_resolve_like_single_separators() {
    let disk = Disk::standard();
    let cwd = WorkingPath::root();

    let single = resolve(&disk, &cwd, "Users\\Player").unwrap();
    let run = resolve(&disk, &cwd, "Users\\\\Player").unwrap();
    assert_eq!(single.kind(), run.kind());
    assert!(run.child("readme.txt").is_some());
}

#[test]
fn a_file_node_resolves_but_cannot_be_listed() {
    let disk = Disk::standard();
    let cwd = WorkingPath::root();

    let node = resolve(&disk, &cwd, "C:\\autoexec.ntr").unwrap();
    assert_eq!(node.kind(), EntryKind::File);
    assert_eq!(
        list_directory(&disk, &cwd, Some("C:\\autoexec.ntr")),
        Err(Error::PathNotFound)
    );
}

// ==================== Navigator ====================

#[test]
fn parent_of_root_stays_at_root() {
    let disk = Disk::standard();
    let mut cwd = WorkingPath::root();
    cwd.change_directory(&disk, "..").unwrap();
    assert_eq!(cwd.depth(), 1);
}

#[test]
fn parent_removes_exactly_one_trailing_segment() {
    let disk = Disk::standard();
    let mut cwd = WorkingPath::root();
    cwd.change_directory(&disk, "Users\\Player").unwrap();
    assert_eq!(cwd.depth(), 3);
    cwd.change_directory(&disk, "..").unwrap();
    assert_eq!(cwd.display(), "C:\\Users");
}

#[test]
fn dot_is_always_a_no_op() {
    let disk = Disk::standard();
    let mut cwd = WorkingPath::root();
    for _ in 0..3 {
        cwd.change_directory(&disk, ".").unwrap();
        assert_eq!(cwd, WorkingPath::root());
    }
}

#[test]
fn cd_then_bare_list_matches_listing_the_path_directly() {
    let disk = Disk::standard();
    let origin = WorkingPath::root();
    let direct = list_directory(&disk, &origin, Some("Users\\Player")).unwrap();

    let mut moved = origin.clone();
    moved.change_directory(&disk, "Users\\Player").unwrap();
    assert_eq!(direct, list_directory(&disk, &moved, None).unwrap());
}

// ==================== Console scenarios ====================

#[tokio::test]
async fn survival_scenario_walks_to_the_player_home() {
    let mut console = Console::new();
    assert_eq!(console.prompt(), "C:\\>");

    let result = console.exec("cd Users\\Player").await.unwrap();
    assert!(result.is_success());
    assert_eq!(console.prompt(), "C:\\Users\\Player>");

    let result = console.exec("dir").await.unwrap();
    assert!(result.stdout.contains("<DIR>    Documents"));
    assert!(result.stdout.contains("<DIR>    Desktop"));
    assert!(result.stdout.contains("     readme.txt"));
}

#[tokio::test]
async fn failed_cd_never_moves_the_session() {
    let mut console = Console::new();
    console.exec("cd Users").await.unwrap();

    let result = console.exec("cd NoSuchDir").await.unwrap();
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.stderr, "The system cannot find the path specified.\n");
    assert_eq!(console.prompt(), "C:\\Users>");
}

#[tokio::test]
async fn dir_with_a_bad_path_reports_the_canned_message() {
    let mut console = Console::new();
    let result = console.exec("dir Wasteland").await.unwrap();
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.stderr, "The system cannot find the path specified.\n");
}

#[tokio::test]
async fn absolute_cd_replaces_the_whole_path() {
    let mut console = Console::new();
    console.exec("cd Users\\Player\\Documents").await.unwrap();
    console.exec("cd C:\\System").await.unwrap();
    assert_eq!(console.prompt(), "C:\\System>");

    console.exec("cd \\Users").await.unwrap();
    assert_eq!(console.prompt(), "C:\\Users>");
}

#[tokio::test]
async fn calc_evaluates_and_echoes_the_expression() {
    let mut console = Console::new();
    let result = console.exec("calc 2+2").await.unwrap();
    assert_eq!(result.stdout, "2+2 = 4\n");

    let result = console.exec("calc (1 + 2) * 3.5").await.unwrap();
    assert_eq!(result.stdout, "(1 + 2) * 3.5 = 10.5\n");

    let result = console.exec("calc rm -rf").await.unwrap();
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.stderr, "Invalid expression.\n");
}

#[tokio::test]
async fn help_lists_every_registered_command() {
    let mut console = Console::new();
    let result = console.exec("help").await.unwrap();
    for name in [
        "help",
        "cls",
        "dir",
        "cd",
        "echo",
        "date",
        "time",
        "ver",
        "exit",
        "hostname",
        "systeminfo",
        "tasklist",
        "visit",
        "ping",
        "calc",
        "clear",
        "uptime",
        "ascii",
        "about",
    ] {
        assert!(result.stdout.contains(name), "help is missing {name}");
    }
}

#[tokio::test]
async fn session_survives_every_kind_of_bad_input() {
    let mut console = Console::new();
    for line in [
        "cd",
        "cd NoSuchDir",
        "dir autoexec.ntr",
        "calc",
        "ping",
        "visit",
        "ascii",
        "frobnicate",
        "",
        "   ",
    ] {
        let result = console.exec(line).await.unwrap();
        // Bad input degrades to a message, never to a dead session.
        assert!(!console.is_finished(), "{line:?} killed the session");
        drop(result);
    }
    assert_eq!(console.prompt(), "C:\\>");
}
