mod table;

pub use table::TomlStringTable;
