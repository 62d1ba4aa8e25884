pub mod ast;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod config;

pub use ast::{Document, Entry, Kind, Value};
pub use error::{DiagnosticSink, LogSink, YConfError};
pub use config::{ParseOptions, YConf};
pub use parser::{classify, Parser};
