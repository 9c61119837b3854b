//! Desktop viewer binary.
//!
//! Shows the configured image at the configured scale until Escape is pressed.

fn main() -> anyhow::Result<()> {
    let config = puppy_viewer_lib::init_foundation(std::env::args().skip(1));
    puppy_viewer_lib::run(&config)?;
    Ok(())
}
