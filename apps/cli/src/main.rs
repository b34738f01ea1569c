fn main() -> anyhow::Result<()> {
    ksrs_cli::run()
}
