//! Canon command handler.

use anyhow::Result;

use crate::cli::CanonArgs;
use crate::infra::canonicalize;

pub fn handle_canon(args: &CanonArgs) -> Result<()> {
    println!("{}", canonicalize(&args.text.join(" ")));
    Ok(())
}
