use crate::reports;
use keeb::geometry::Keyboard;

pub fn run(kb: &Keyboard) {
    reports::print_keyboard_grid(kb);
    reports::print_point_table(kb);
}
