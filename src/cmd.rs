// clap gives us usage errors, --help and --version for free, and the
// exit codes that go with them. The only thing we read is argv[1].
// `version` adds -V/--version (exit 0) on top of plain argument parsing.
#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    /// Input toml file to control SALT2-jacobian
    #[clap(value_parser)]
    pub input: String,
}
