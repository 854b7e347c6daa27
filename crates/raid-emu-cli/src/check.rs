use anyhow::{Result, bail, ensure};
use raid_emu::Level;
use tracing::info;

use crate::cli::CheckArgs;
use crate::store::{DynArray, open_array};

pub fn run(args: &CheckArgs) -> Result<()> {
    for &mode in &args.array.levels {
        let level = Level::from(mode);
        let mut array = open_array(level, &args.array, &format!("raid{}_test", level.id()))?;
        check_level(&mut array)?;
    }
    Ok(())
}

/// `check_level` writes a greeting at block 0 and confirms it reads back intact.
pub fn check_level(array: &mut DynArray) -> Result<String> {
    let level = array.level();
    let greeting = format!("hello from {level}");
    let block_size = array.block_size();
    ensure!(
        greeting.len() <= block_size,
        "block size {block_size} is too small for the check message"
    );

    let mut data = vec![0u8; block_size];
    data[..greeting.len()].copy_from_slice(greeting.as_bytes());
    array.write(0, &data)?;

    let back = array.read(0)?;
    let text = String::from_utf8_lossy(back.as_bytes())
        .trim_end_matches('\0')
        .to_owned();
    println!("{level} read: {text:?}");
    if back != data {
        bail!("{level}: block 0 read back differs from what was written");
    }

    if let Some(consistent) = array.verify_stripe(0)? {
        println!("{level} stripe 0 parity consistent: {consistent}");
        ensure!(consistent, "{level}: stripe 0 parity does not match its data");
    }
    array.sync()?;
    info!(level = %level, "check passed");
    Ok(text)
}
