//! Fuzz target for the descriptor parser.
//!
//! Feeds arbitrary strings, and descriptors assembled from arbitrary
//! parts, to both parser modes.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_descriptor_parser
//! ```

#![no_main]

use arbitrary::Arbitrary;
use dburl_core::{DbUrlError, ParseOptions, Parser, render};
use libfuzzer_sys::fuzz_target;

/// A descriptor built from arbitrary parts.
#[derive(Debug, Arbitrary)]
struct FuzzDescriptor {
    scheme: u8,
    user: String,
    password: String,
    host: String,
    port: String,
    dbname: String,
    raw: String,
}

impl FuzzDescriptor {
    fn to_url(&self) -> String {
        match self.scheme % 5 {
            0 => format!("sqlite://{}", self.raw),
            1 => format!("sqlite3://{}", self.raw),
            2 => format!(
                "mssql://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.dbname
            ),
            3 => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.dbname
            ),
            _ => self.raw.clone(),
        }
    }
}

fuzz_target!(|input: FuzzDescriptor| {
    let url = input.to_url();

    for parser in [Parser::default(), Parser::new(ParseOptions::lenient())] {
        // The parser should never panic, only return errors
        match parser.parse(&url) {
            Ok(config) => {
                assert!(config.dialect.is_some());
                let _ = render(&config);
                // A parsed configuration rebuilds into an equivalent descriptor
                assert_eq!(parser.parse(&config.to_url()).as_ref(), Ok(&config));
            }
            Err(DbUrlError::NotFound(_)) => panic!("parse never reads the environment"),
            Err(_) => {}
        }
    }
});
