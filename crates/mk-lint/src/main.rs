fn main() {
    std::process::exit(mk_lint::run_cli_from_args(std::env::args_os()));
}
