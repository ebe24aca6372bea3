use std::fs;
use std::process::Command;

fn embedc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_embedc"))
}

#[test]
fn generates_header_for_binary_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("font.bin");
    let output = dir.path().join("font.bin.h");
    fs::write(&input, [0x00, 0x7f, 0xff]).unwrap();

    let result = embedc().arg(&input).arg(&output).output().unwrap();

    assert!(result.status.success());
    assert!(result.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        concat!(
            "#ifndef __FONT_BIN__\n",
            "#define __FONT_BIN__\n",
            "\n",
            "const char embed_font_bin[] =\n",
            "    \"\\x00\\x7f\\xff\";\n",
            "\n",
            "#endif\n",
        )
    );
}

#[test]
fn empty_input_generates_empty_initializer() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.bin");
    let output = dir.path().join("empty.bin.h");
    fs::write(&input, b"").unwrap();

    let result = embedc().arg(&input).arg(&output).output().unwrap();

    assert!(result.status.success());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        concat!(
            "#ifndef __EMPTY_BIN__\n",
            "#define __EMPTY_BIN__\n",
            "\n",
            "const char embed_empty_bin[] =\n",
            ";\n",
            "\n",
            "#endif\n",
        )
    );
}

#[test]
fn missing_arguments_exit_nonzero() {
    let result = embedc().output().unwrap();
    assert!(!result.status.success());
    assert!(!result.stderr.is_empty());
}

#[test]
fn nonexistent_input_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let result = embedc()
        .arg(dir.path().join("missing.bin"))
        .arg(dir.path().join("out.h"))
        .output()
        .unwrap();
    assert!(!result.status.success());
}
