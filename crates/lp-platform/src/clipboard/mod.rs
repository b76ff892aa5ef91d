mod system;

pub use system::SystemClipboard;
