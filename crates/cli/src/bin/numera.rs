use anyhow::Result;

fn main() -> Result<()> {
    numera_cli::main_entry()
}
