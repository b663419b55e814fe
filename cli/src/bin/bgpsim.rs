fn main() {
    let code = bgpsim_cli::main().unwrap_or_else(|err| {
        eprintln!("Error: {err:#}");
        1
    });
    std::process::exit(code);
}
