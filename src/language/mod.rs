pub mod detector;
pub mod mapper;

pub use detector::{detect, UNKNOWN_LANGUAGE};
pub use mapper::{name_for, SUPPORTED_LANGUAGES};
