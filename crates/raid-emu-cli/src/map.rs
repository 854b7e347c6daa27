use anyhow::Result;
use raid_emu::layout::{Layout, Stripe, WritePlan};
use raid_emu::{DISKS, Level};

use crate::cli::MapArgs;

pub fn run(args: &MapArgs) -> Result<()> {
    let layout = Layout::new(Level::from(args.level), DISKS)?;
    println!("{} ({}), {DISKS} disks", layout.level(), layout.level().name());
    for lbn in args.lbn..args.lbn.saturating_add(args.count) {
        println!("{}", describe(&layout, lbn));
    }
    Ok(())
}

/// `describe` renders one line showing where `lbn` is read from and what a write updates.
pub fn describe(layout: &Layout, lbn: u64) -> String {
    let read = layout.read_location(lbn);
    let write = match layout.write_plan(lbn) {
        WritePlan::Single(loc) => format!("disk {} block {}", loc.disk, loc.block),
        WritePlan::Mirror { block } => format!("disks 0..{} block {block}", layout.disks()),
        WritePlan::Parity(stripe) => {
            let target = stripe.target();
            let siblings: Vec<String> = stripe
                .siblings()
                .map(|(_, loc)| loc.disk.to_string())
                .collect();
            format!(
                "disk {} block {}, parity disk {}, reads disks [{}]",
                target.disk,
                target.block,
                stripe.parity_disk,
                siblings.join(",")
            )
        }
    };
    format!(
        "lbn {lbn}: read disk {} block {} | write {write}",
        read.disk, read.block
    )
}
