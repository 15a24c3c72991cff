mod arena;
mod cursor;
mod handle;
mod node;
mod raw_bst_map;
mod size;
mod validate;

pub(crate) use cursor::Cursor;
pub(crate) use handle::Handle;
pub(crate) use node::Side;
pub(crate) use raw_bst_map::RawBSTMap;
