use crate::reports;
use clap::Args;
use keeb::error::KbResult;
use keeb::geometry::{Keyboard, Point};
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct LocateArgs {
    /// Characters to look up, one per argument
    #[arg(required = true)]
    pub keys: Vec<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct LocateEntry<'a> {
    query: &'a str,
    point: Option<Point>,
}

pub fn run(args: LocateArgs, kb: &Keyboard) -> KbResult<()> {
    // Validate every query before printing anything.
    let mut entries = Vec::with_capacity(args.keys.len());
    for query in &args.keys {
        let point = kb.get_key_point_str(query)?;
        entries.push(LocateEntry {
            query: query.as_str(),
            point,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for e in &entries {
            println!("{}", reports::format_lookup(e.query, e.point));
        }
    }
    Ok(())
}
