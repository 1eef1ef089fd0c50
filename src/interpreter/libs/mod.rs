pub mod immediate;
pub mod kernel;

use crate::dispatch::MethodTable;

pub fn load_libs(table: &mut MethodTable) {
    kernel::load_libs(table);
    immediate::load_libs(table);
}
