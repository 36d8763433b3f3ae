use std::process::Command;

/// Value of `var` if set, else the trimmed stdout of `program args`, else "unknown".
fn env_or_command(var: &str, program: &str, args: &[&str]) -> String {
    std::env::var(var).unwrap_or_else(|_| {
        Command::new(program)
            .args(args)
            .output()
            .ok()
            .filter(|output| output.status.success())
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    })
}

fn main() {
    // Release builds in containers set these explicitly; local builds ask git/date.
    let git_sha = env_or_command("GIT_SHA", "git", &["rev-parse", "--short", "HEAD"]);
    let build_date = env_or_command("BUILD_DATE", "date", &["+%Y-%m-%d"]);

    println!("cargo:rustc-env=GIT_SHA={}", git_sha);
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
    println!("cargo:rerun-if-env-changed=GIT_SHA");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
