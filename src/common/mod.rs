//! Common code used by the prefixshare binary

pub mod logging;
pub mod report;
pub mod request;
