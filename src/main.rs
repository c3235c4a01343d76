// SPDX-License-Identifier: MPL-2.0
use iced_banner::app::{self, Flags};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let flags = Flags::from_args(pico_args::Arguments::from_env())?;
    app::run(flags)?;
    Ok(())
}
