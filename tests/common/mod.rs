use assert_cmd::Command;

pub fn tagmatch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagmatch").unwrap();
    cmd.env_remove("TAGMATCH_ROOT");
    cmd
}
