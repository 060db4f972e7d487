use crate::reports;
use keeb::geometry::Keyboard;

const SAMPLE_KEYS: [char; 3] = ['1', 'l', ';'];

pub fn run(kb: &Keyboard) {
    println!("\n🔎 === {} SAMPLE LOOKUPS === 🔎", kb.name);
    for c in SAMPLE_KEYS {
        println!("{}", reports::format_lookup(&c.to_string(), kb.get_key_point(c)));
    }
}
