use std::io;

fn main() {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let code = nim_cli::run(
        std::env::args(),
        &mut input,
        &mut io::stdout(),
        &mut io::stderr(),
    );
    std::process::exit(code);
}
