use assert_cmd::Command;

pub fn pedia_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pedia").unwrap();
    cmd.env_remove("PEDIA_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
