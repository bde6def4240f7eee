//! This module contains the definitions for the CLI arguments and config file structure for the sake of readability.

pub mod prefixshare;
