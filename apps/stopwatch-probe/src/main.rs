fn main() -> anyhow::Result<()> {
    stopwatch_probe::internal_main()
}
