fn main() -> std::process::ExitCode {
    pokedex_lib::run()
}
