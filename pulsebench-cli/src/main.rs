fn main() -> anyhow::Result<()> {
    pulsebench_cli::run()
}
