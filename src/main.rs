fn main() -> anyhow::Result<()> {
    callwork_lib::run()
}
