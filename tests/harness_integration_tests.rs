//! Checks that the test harness itself behaves.

mod common;

use arcwiki::domain::CanonicalTitle;
use arcwiki::store::WikiRepository;
use common::harness::{TestEnv, TestPage, WikiCommand};

#[test]
fn test_env_database_is_isolated() {
    let first = TestEnv::new();
    let second = TestEnv::new();

    first.add_page(&TestPage::new("Only Here"));

    let title = CanonicalTitle::new("Only Here").unwrap();
    assert!(first.store().get_page(&title).unwrap().is_some());
    assert!(second.store().get_page(&title).unwrap().is_none());
}

#[test]
fn test_env_add_page_stores_markup() {
    let env = TestEnv::new();
    env.add_page(&TestPage::new("lion").body("Roars.").category("Cats"));

    let page = env
        .store()
        .get_page(&CanonicalTitle::new("Lion").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(page.body, "Roars.\n[Category:Cats]\n");
}

#[test]
fn test_env_write_config_location() {
    let env = TestEnv::new();
    let path = env.write_config("site_title = \"X\"\n");
    assert!(path.ends_with("arcwiki/config.toml"));
    assert!(path.starts_with(env.config_home()));
}

#[test]
fn test_command_binds_db() {
    let env = TestEnv::new();
    let cmd = env.cmd().args(["page", "ls"]);
    let args = cmd.get_args();
    assert_eq!(args[0], "--db");
    assert_eq!(args[1], env.db_path().to_string_lossy());
    assert_eq!(&args[2..], ["page", "ls"]);
}

#[test]
fn test_command_runs_binary() {
    WikiCommand::new().args(["--help"]).assert().success();
}
