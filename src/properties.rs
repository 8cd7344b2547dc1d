//! Main module for javaprops library functionality

pub mod ast;
pub mod builder;
pub mod escape;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;

#[cfg(test)]
pub mod testing;
