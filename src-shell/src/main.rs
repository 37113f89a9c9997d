fn main() -> anyhow::Result<()> {
    schaechner_lib::run()
}
