pub mod file;
pub mod http;
pub mod memory;
pub mod traits;

pub use file::FileSource;
pub use http::HttpSource;
pub use memory::MemorySource;
pub use traits::MenuSource;

/// Pick a source for a `--menu` argument: URLs are fetched over HTTP,
/// anything else is read from disk.
pub fn open_source(location: &str) -> Box<dyn MenuSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}
